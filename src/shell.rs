/*
Menu-driven session over one graph. Holds the active condition and the snapshot
solved for it; every edge change or condition change re-solves before the next
query, so the shell never answers from a stale snapshot.
*/

use std::io::{BufRead, Write};

use log::debug;

use crate::condition::{Condition, ConditionWeights};
use crate::error::{Result, RouteError};
use crate::graph::WeightedGraph;
use crate::solver::{solve, Snapshot};

const MAIN_MENU: &str = "
--- Main menu ---
1. Shortest route between two cities
2. Show the center of the graph
3. Modify the graph
4. Change weather condition
5. Exit";

const MODIFY_MENU: &str = "
--- Modify graph ---
a. Interrupt traffic between two cities
b. Add a connection between two cities
c. Back to main menu";

const CONDITION_MENU: &str = "
Available weather conditions:
1. Normal
2. Rain
3. Snow
4. Storm";

/// Human-readable route between two named cities under the snapshot's condition.
pub fn describe_route(graph: &WeightedGraph, snapshot: &Snapshot, from: &str, to: &str) -> Result<String> {
    let (i, j) = (graph.index_of(from)?, graph.index_of(to)?);
    let condition = snapshot.condition();
    let Some(route) = snapshot.route(i, j) else {
        return Ok(format!(
            "No route from {} to {} under {} conditions.",
            from, to, condition
        ));
    };
    let names: Vec<&str> = route
        .cities
        .iter()
        .filter_map(|&idx| graph.city_name(idx))
        .collect();
    Ok(format!(
        "Shortest route from {} to {} ({}):\nTotal time: {} hours\nRoute: {}",
        from,
        to,
        condition,
        route.hours,
        names.join(" -> ")
    ))
}

pub fn describe_center(graph: &WeightedGraph, snapshot: &Snapshot) -> String {
    match snapshot.graph_center().and_then(|idx| {
        graph
            .city_name(idx)
            .map(|name| (name, snapshot.eccentricities()[idx]))
    }) {
        Some((name, ecc)) => format!(
            "The city at the center of the graph is: {} (eccentricity {} hours, {})",
            name,
            ecc,
            snapshot.condition()
        ),
        None => "The graph has no cities.".to_string(),
    }
}

pub struct Shell<R, W> {
    graph: WeightedGraph,
    condition: Condition,
    snapshot: Snapshot,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(graph: WeightedGraph, condition: Condition, input: R, output: W) -> Self {
        let snapshot = solve(&graph, condition);
        Self {
            graph,
            condition,
            snapshot,
            input,
            output,
        }
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MAIN_MENU)?;
            let Some(choice) = self.prompt("Select an option: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.route()?,
                "2" => {
                    let msg = describe_center(&self.graph, &self.snapshot);
                    writeln!(self.output, "\n{}", msg)?;
                }
                "3" => {
                    if !self.modify()? {
                        break;
                    }
                }
                "4" => self.change_condition()?,
                "5" => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid option, please try again.")?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn resolve(&mut self) {
        self.snapshot = solve(&self.graph, self.condition);
        debug!("Re-solved at revision {}", self.graph.revision());
    }

    /// Prints `label`, reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_pair(&mut self) -> Result<Option<(String, String)>> {
        let Some(from) = self.prompt("Origin city: ")? else {
            return Ok(None);
        };
        let Some(to) = self.prompt("Destination city: ")? else {
            return Ok(None);
        };
        Ok(Some((from, to)))
    }

    fn report_rejected(&mut self, err: RouteError) -> Result<()> {
        match err {
            RouteError::UnknownCity(city) => {
                writeln!(self.output, "City not in the graph: {}", city)?;
                Ok(())
            }
            RouteError::SelfLoop(city) => {
                writeln!(self.output, "{} is always 0 hours from itself.", city)?;
                Ok(())
            }
            other => Err(other),
        }
    }

    fn route(&mut self) -> Result<()> {
        let Some((from, to)) = self.prompt_pair()? else {
            return Ok(());
        };
        match describe_route(&self.graph, &self.snapshot, &from, &to) {
            Ok(msg) => writeln!(self.output, "\n{}", msg)?,
            Err(e) => self.report_rejected(e)?,
        }
        Ok(())
    }

    /// Returns false when input ended inside the submenu.
    fn modify(&mut self) -> Result<bool> {
        loop {
            writeln!(self.output, "{}", MODIFY_MENU)?;
            let Some(choice) = self.prompt("Select an option: ")? else {
                return Ok(false);
            };
            match choice.to_lowercase().as_str() {
                "a" => {
                    let Some((from, to)) = self.prompt_pair()? else {
                        return Ok(false);
                    };
                    match self.graph.remove_edge(&from, &to) {
                        Ok(()) => {
                            self.resolve();
                            writeln!(
                                self.output,
                                "Traffic from {} to {} interrupted for all weather conditions.",
                                from, to
                            )?;
                        }
                        Err(e) => self.report_rejected(e)?,
                    }
                }
                "b" => {
                    let Some((from, to)) = self.prompt_pair()? else {
                        return Ok(false);
                    };
                    if let Err(e) = self.graph.index_of(&from).and(self.graph.index_of(&to)) {
                        self.report_rejected(e)?;
                        continue;
                    }
                    let Some(weights) = self.prompt_weights()? else {
                        continue;
                    };
                    match self.graph.add_edge(&from, &to, weights) {
                        Ok(()) => {
                            self.resolve();
                            writeln!(self.output, "New connection from {} to {}.", from, to)?;
                        }
                        Err(e) => self.report_rejected(e)?,
                    }
                }
                "c" => return Ok(true),
                _ => writeln!(self.output, "Invalid option.")?,
            }
        }
    }

    fn prompt_weights(&mut self) -> Result<Option<ConditionWeights>> {
        let mut hours = [0u32; 4];
        for (slot, condition) in hours.iter_mut().zip(Condition::ALL) {
            let Some(answer) = self.prompt(&format!("Hours under {}: ", condition))? else {
                return Ok(None);
            };
            match answer.parse::<u32>() {
                Ok(h) => *slot = h,
                Err(_) => {
                    writeln!(self.output, "Please enter whole numbers of hours.")?;
                    return Ok(None);
                }
            }
        }
        Ok(Some(ConditionWeights::new(hours[0], hours[1], hours[2], hours[3])))
    }

    fn change_condition(&mut self) -> Result<()> {
        writeln!(self.output, "{}", CONDITION_MENU)?;
        let Some(answer) = self.prompt("Select a weather condition: ")? else {
            return Ok(());
        };
        let picked = match answer.parse::<usize>() {
            Ok(n) if (1..=Condition::ALL.len()).contains(&n) => Some(Condition::ALL[n - 1]),
            Ok(_) => None,
            Err(_) => answer.parse::<Condition>().ok(),
        };
        match picked {
            Some(condition) => {
                self.condition = condition;
                self.resolve();
                writeln!(self.output, "Weather condition changed to: {}", condition)?;
            }
            None => writeln!(self.output, "Invalid option.")?,
        }
        Ok(())
    }
}
