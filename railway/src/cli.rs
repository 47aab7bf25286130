//! Interactive menu for the Kiwiland railway.
//!
//! The session only collects station names and bounds, runs the matching
//! query, and prints the result. All route logic lives in [`crate::planner`].

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::config::{OutputFormat, RailwayConfig};
use crate::error::RailwayError;
use crate::network::RailNetwork;
use crate::planner::{Bound, Planner, QueryError, StopMode};
use crate::report::{NO_SUCH_ROUTE, QueryReport};

const MENU: &str = "\
Please make a selection from the options below.
1: The standard set of ten outputs
2: Find the total distance of a given route
3: Find the number of trips between specified stations with a specified maximum number of stops
4: Find the number of trips between specified stations with a specified exact number of stops
5: Find the length of the shortest route between two specified stations
6: Find the number of different routes between specified stations with a specified maximum distance
M: Display this menu
X: Exit the Kiwiland railway system";

/// An interactive session over any input and output streams.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: RailwayConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: RailwayConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Consume the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the session until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), RailwayError> {
        match self.run_menu() {
            Err(RailwayError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                info!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn run_menu(&mut self) -> Result<(), RailwayError> {
        let network = self.confirm_map()?;
        writeln!(self.output)?;
        writeln!(self.output, "{MENU}")?;

        loop {
            writeln!(self.output)?;
            let selection = self.prompt("Your selection: ")?.to_ascii_uppercase();
            match selection.as_str() {
                "1" => self.standard_outputs(&network)?,
                "2" => self.ask_route_distance(&network)?,
                "3" => self.ask_routes_by_stops(&network, StopMode::AtMost)?,
                "4" => self.ask_routes_by_stops(&network, StopMode::Exactly)?,
                "5" => self.ask_shortest_distance(&network)?,
                "6" => self.ask_routes_within(&network)?,
                "M" => writeln!(self.output, "{MENU}")?,
                "X" => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid selection. Please try again.")?,
            }
        }
    }

    /// Show the configured map until the user accepts one that parses.
    fn confirm_map(&mut self) -> Result<RailNetwork, RailwayError> {
        loop {
            writeln!(self.output, "Welcome to the Kiwiland railway system!")?;
            writeln!(self.output, "Our latest railway map is: {}", self.config.map)?;
            let answer = self.prompt("Is this correct? Y/N: ")?;
            if !answer.eq_ignore_ascii_case("Y") {
                self.config.map = self.prompt("Please enter the latest railway map: ")?;
                continue;
            }

            match RailNetwork::from_notation(self.config.map.as_str()) {
                Ok(network) => {
                    info!(
                        stations = network.station_count(),
                        edges = network.edge_count(),
                        "Railway map accepted"
                    );
                    return Ok(network);
                }
                Err(e) => {
                    warn!(token = e.token(), error = %e, "Rejected railway map");
                    writeln!(self.output, "Error: {e}")?;
                }
            }
        }
    }

    fn standard_outputs(&mut self, network: &RailNetwork) -> Result<(), RailwayError> {
        let planner = Planner::new(network, &self.config.search);

        let distance = |stations: &[&str]| {
            planner
                .route_distance(stations[0], &stations[1..])
                .map(|d| d.map_or(NO_SUCH_ROUTE.to_string(), |d| d.to_string()))
        };
        let shortest = |origin: &str, destination: &str| {
            planner
                .shortest_distance(origin, destination)
                .map(|d| d.map_or(NO_SUCH_ROUTE.to_string(), |d| d.to_string()))
        };

        let outputs = [
            distance(&["A", "B", "C"]),
            distance(&["A", "D"]),
            distance(&["A", "D", "C"]),
            distance(&["A", "E", "B", "C", "D"]),
            distance(&["A", "E", "D"]),
            planner
                .routes_by_stops("C", "C", 3, StopMode::AtMost)
                .map(|routes| routes.len().to_string()),
            planner
                .routes_by_stops("A", "C", 4, StopMode::Exactly)
                .map(|routes| routes.len().to_string()),
            shortest("A", "C"),
            shortest("B", "B"),
            planner
                .routes_within("C", "C", 30)
                .map(|routes| routes.len().to_string()),
        ];

        for (n, output) in outputs.into_iter().enumerate() {
            match output {
                Ok(line) => writeln!(self.output, "Output #{}: {line}", n + 1)?,
                Err(e) => writeln!(self.output, "Output #{}: Error: {e}", n + 1)?,
            }
        }
        Ok(())
    }

    fn ask_route_distance(&mut self, network: &RailNetwork) -> Result<(), RailwayError> {
        let origin = self.prompt("Please enter the origin station: ")?;
        let mut stops = vec![self.prompt("Please enter the destination station: ")?];
        loop {
            let next = self.prompt("Please enter the next destination station, or ! to stop: ")?;
            if next == "!" {
                break;
            }
            stops.push(next);
        }

        let planner = Planner::new(network, &self.config.search);
        let result = planner
            .route_distance(&origin, &stops)
            .map(|distance| QueryReport::route_distance(&origin, &stops, distance));
        self.answer(result)
    }

    fn ask_routes_by_stops(
        &mut self,
        network: &RailNetwork,
        mode: StopMode,
    ) -> Result<(), RailwayError> {
        let origin = self.prompt("Please enter the origin station: ")?;
        let destination = self.prompt("Please enter the destination station: ")?;
        let stops = match mode {
            StopMode::AtMost => self.prompt("Please enter the maximum total number of stops: ")?,
            StopMode::Exactly => self.prompt("Please enter the exact total number of stops: ")?,
        };

        let planner = Planner::new(network, &self.config.search);
        let result = query_routes_by_stops(&planner, &origin, &destination, &stops, mode);
        self.answer(result)
    }

    fn ask_shortest_distance(&mut self, network: &RailNetwork) -> Result<(), RailwayError> {
        let origin = self.prompt("Please enter the origin station: ")?;
        let destination = self.prompt("Please enter the destination station: ")?;

        let planner = Planner::new(network, &self.config.search);
        let result = planner
            .shortest_distance(&origin, &destination)
            .map(|distance| QueryReport::shortest_distance(&origin, &destination, distance));
        self.answer(result)
    }

    fn ask_routes_within(&mut self, network: &RailNetwork) -> Result<(), RailwayError> {
        let origin = self.prompt("Please enter the origin station: ")?;
        let destination = self.prompt("Please enter the destination station: ")?;
        let max_distance = self.prompt("Please enter the maximum total distance: ")?;

        let planner = Planner::new(network, &self.config.search);
        let result = query_routes_within(&planner, &origin, &destination, &max_distance);
        self.answer(result)
    }

    /// Print a query result in the configured format.
    fn answer(&mut self, result: Result<QueryReport, QueryError>) -> Result<(), RailwayError> {
        let report = match result {
            Ok(report) => report,
            Err(e) => {
                warn!(error = %e, "Query rejected");
                writeln!(self.output, "Error: {e}")?;
                return Ok(());
            }
        };

        if let Some(routes) = report.route_count() {
            info!(routes, "Route query answered");
        }
        match self.config.output {
            OutputFormat::Text => writeln!(self.output, "{}", report.to_text())?,
            OutputFormat::Json => writeln!(self.output, "{}", report.to_json()?)?,
        }
        Ok(())
    }

    /// Print a prompt and read one trimmed line of input.
    fn prompt(&mut self, message: &str) -> Result<String, RailwayError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        Ok(line.trim().to_string())
    }
}

fn query_routes_by_stops(
    planner: &Planner<'_>,
    origin: &str,
    destination: &str,
    stops: &str,
    mode: StopMode,
) -> Result<QueryReport, QueryError> {
    let routes = planner.routes_by_stops(origin, destination, stops, mode)?;
    let stops = stops.to_bound("stops")?;
    Ok(QueryReport::routes_by_stops(
        origin,
        destination,
        stops,
        mode,
        &routes,
    ))
}

fn query_routes_within(
    planner: &Planner<'_>,
    origin: &str,
    destination: &str,
    max_distance: &str,
) -> Result<QueryReport, QueryError> {
    let routes = planner.routes_within(origin, destination, max_distance)?;
    let max_distance = max_distance.to_bound("max_distance")?;
    Ok(QueryReport::routes_within(
        origin,
        destination,
        max_distance,
        &routes,
    ))
}
