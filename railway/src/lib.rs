//! Kiwiland railway route planner.
//!
//! Answers questions about a small directed railway map: the distance of
//! a given route, how many trips exist under a stop or distance limit, and
//! the shortest route between two stations.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod network;
pub mod notation;
pub mod planner;
pub mod report;
