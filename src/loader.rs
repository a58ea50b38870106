/*
Edge-list reader. One edge per line:

    city1 city2 normal rain snow storm

separated by any whitespace, weights in whole hours. Lines with a different
number of fields are skipped without comment; six-field lines whose weights do
not parse, and lines that are not UTF-8, are skipped and reported back in
`EdgeList::malformed`.
*/

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashSet;
use log::{debug, info, warn};

use crate::condition::ConditionWeights;
use crate::error::{Result, RouteError};

const FIELDS_PER_LINE: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEdge {
    pub from: String,
    pub to: String,
    pub weights: ConditionWeights,
}

#[derive(Debug, Default)]
pub struct EdgeList {
    /// Unique cities in order of first appearance.
    pub cities: Vec<String>,
    pub edges: Vec<RawEdge>,
    pub malformed: Vec<RouteError>,
}

pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<EdgeList> {
    let file = File::open(path.as_ref())?;
    let edge_list = parse_edge_list(BufReader::new(file))?;
    info!(
        "Loaded {} cities and {} edges from {}",
        edge_list.cities.len(),
        edge_list.edges.len(),
        path.as_ref().display()
    );
    Ok(edge_list)
}

pub fn parse_edge_list<R: BufRead>(mut reader: R) -> Result<EdgeList> {
    let mut edge_list = EdgeList::default();
    let mut seen: HashSet<String> = HashSet::new();
    let mut buf: Vec<u8> = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        // Non-UTF-8 lines are reported like bad weights, not fatal.
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                let e = RouteError::MalformedInput {
                    line: line_no,
                    reason: format!("not valid UTF-8 ({})", e),
                };
                warn!("{}", e);
                edge_list.malformed.push(e);
                continue;
            }
        };
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != FIELDS_PER_LINE {
            if !fields.is_empty() {
                debug!("line {}: {} fields, skipping", line_no, fields.len());
            }
            continue;
        }

        let edge = match parse_edge(&fields, line_no) {
            Ok(edge) => edge,
            Err(e) => {
                warn!("{}", e);
                edge_list.malformed.push(e);
                continue;
            }
        };

        for city in [&edge.from, &edge.to] {
            if seen.insert(city.clone()) {
                edge_list.cities.push(city.clone());
            }
        }
        edge_list.edges.push(edge);
    }

    Ok(edge_list)
}

fn parse_edge(fields: &[&str], line: usize) -> Result<RawEdge> {
    let hours = |field: &str| -> Result<u32> {
        field.parse::<u32>().map_err(|e| RouteError::MalformedInput {
            line,
            reason: format!("{:?} is not a whole number of hours ({})", field, e),
        })
    };

    Ok(RawEdge {
        from: fields[0].to_string(),
        to: fields[1].to_string(),
        weights: ConditionWeights::new(
            hours(fields[2])?,
            hours(fields[3])?,
            hours(fields[4])?,
            hours(fields[5])?,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn parses_edges_and_orders_cities() {
        let input = "Guatemala Mixco 10 15 20 25\n\
                     Mixco   Antigua\t15 20 25 30\n\
                     Antigua Guatemala 30 35 40 45\n";
        let edge_list = parse_edge_list(Cursor::new(input)).unwrap();
        assert_eq!(edge_list.cities, vec!["Guatemala", "Mixco", "Antigua"]);
        assert_eq!(edge_list.edges.len(), 3);
        assert_eq!(
            edge_list.edges[1],
            RawEdge {
                from: "Mixco".to_string(),
                to: "Antigua".to_string(),
                weights: ConditionWeights::new(15, 20, 25, 30),
            }
        );
        assert!(edge_list.malformed.is_empty());
    }

    #[test]
    fn skips_lines_with_wrong_field_count() {
        let input = "\n\
                     Guatemala Mixco 10 15 20\n\
                     Guatemala Mixco 10 15 20 25 30\n\
                     # comment\n\
                     Escuintla Mixco 1 2 3 4\n";
        let edge_list = parse_edge_list(Cursor::new(input)).unwrap();
        assert_eq!(edge_list.cities, vec!["Escuintla", "Mixco"]);
        assert_eq!(edge_list.edges.len(), 1);
        assert!(edge_list.malformed.is_empty());
    }

    #[test]
    fn reports_malformed_weights() {
        let input = "a b 1 2 3 x\n\
                     a c 1 -2 3 4\n\
                     b c 1 2 3 4\n";
        let edge_list = parse_edge_list(Cursor::new(input)).unwrap();
        assert_eq!(edge_list.cities, vec!["b", "c"]);
        assert_eq!(edge_list.edges.len(), 1);
        assert_eq!(edge_list.malformed.len(), 2);
        assert!(matches!(edge_list.malformed[0], RouteError::MalformedInput { line: 1, .. }));
        assert!(matches!(edge_list.malformed[1], RouteError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let input: &[u8] = b"a b 1 2 3 4\n\xff\xfe junk\nb c 1 2 3 4\n";
        let edge_list = parse_edge_list(Cursor::new(input)).unwrap();
        assert_eq!(edge_list.cities, vec!["a", "b", "c"]);
        assert_eq!(edge_list.edges.len(), 2);
        assert_eq!(edge_list.malformed.len(), 1);
        assert!(matches!(edge_list.malformed[0], RouteError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn crlf_and_missing_final_newline() {
        let edge_list = parse_edge_list(Cursor::new("a b 1 2 3 4\r\nb a 5 6 7 8")).unwrap();
        assert_eq!(edge_list.edges.len(), 2);
        assert_eq!(edge_list.edges[1].weights, ConditionWeights::new(5, 6, 7, 8));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Guatemala Mixco 10 15 20 25").unwrap();
        writeln!(file, "Mixco Guatemala 12 15 20 25").unwrap();
        let edge_list = load_edge_list(file.path()).unwrap();
        assert_eq!(edge_list.cities, vec!["Guatemala", "Mixco"]);
        assert_eq!(edge_list.edges.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_edge_list(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, RouteError::Io(_)));
    }
}
