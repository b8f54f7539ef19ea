//! Parse graph files with the solver's strictness

use super::{GameHeader, GraphFile, GENERATED_PRECISION};
use crate::graph::{Graph, Position};
use crate::{GraphGenError, Result};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Line cursor that tracks 1-based line numbers for errors
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Lines {
            inner: text.lines().enumerate(),
            last: 0,
        }
    }

    fn next_line(&mut self, what: &str) -> Result<(usize, &'a str)> {
        match self.inner.next() {
            Some((i, line)) => {
                self.last = i + 1;
                Ok((i + 1, line.trim()))
            }
            None => Err(GraphGenError::Parse {
                line: self.last + 1,
                message: format!("unexpected end of file, expected {}", what),
            }),
        }
    }

    fn field<T: FromStr>(&mut self, key: &str) -> Result<T> {
        let (line, text) = self.next_line(key)?;
        let value = text
            .strip_prefix(key)
            .and_then(|rest| rest.strip_prefix(':'))
            .ok_or_else(|| GraphGenError::Parse {
                line,
                message: format!("expected \"{}: <int>\", found {:?}", key, text),
            })?;
        parse_value(line, value.trim(), key)
    }
}

fn parse_value<T: FromStr>(line: usize, text: &str, what: &str) -> Result<T> {
    text.parse().map_err(|_| GraphGenError::Parse {
        line,
        message: format!("invalid {}: {:?}", what, text),
    })
}

fn parse_pair<T: FromStr>(line: usize, text: &str, what: &str) -> Result<(T, T)> {
    let mut parts = text.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Ok((parse_value(line, a, what)?, parse_value(line, b, what)?)),
        _ => Err(GraphGenError::Parse {
            line,
            message: format!("expected two {} values, found {:?}", what, text),
        }),
    }
}

/// Digits after the decimal point in a coordinate token
fn decimals(token: &str) -> Option<usize> {
    token.split_once('.').map(|(_, frac)| frac.len())
}

/// Parse the text format.
///
/// Edge endpoints must be existing vertices and no edge line may follow the
/// declared edge count. Duplicate edge lines and self-loops are absorbed by
/// the graph's edge set. The precision is taken from the first vertex line.
pub fn parse_graph(text: &str) -> Result<GraphFile> {
    let mut lines = Lines::new(text);
    let cops = lines.field("Cops")?;
    let robbers = lines.field("Robbers")?;
    let max_turn = lines.field("Max turn")?;
    let num_vertices: usize = lines.field("Vertices")?;

    let mut graph = Graph::new();
    let mut precision = None;
    for _ in 0..num_vertices {
        let (line, text) = lines.next_line("a vertex line")?;
        let (x, y): (f64, f64) = parse_pair(line, text, "coordinate")?;
        if precision.is_none() {
            precision = text.split_whitespace().next().and_then(decimals);
        }
        graph.add_vertex(Position::new(x, y));
    }

    let num_edges: usize = lines.field("Edges")?;
    for _ in 0..num_edges {
        let (line, text) = lines.next_line("an edge line")?;
        let (a, b): (usize, usize) = parse_pair(line, text, "vertex index")?;
        if a >= num_vertices || b >= num_vertices {
            return Err(GraphGenError::Parse {
                line,
                message: format!("edge {} {} references a missing vertex", a, b),
            });
        }
        if !graph.connect(a, b) {
            debug!(line, a, b, "edge line absorbed");
        }
    }

    if let Ok((line, text)) = lines.next_line("end of file") {
        if parse_pair::<usize>(line, text, "vertex index").is_ok() {
            return Err(GraphGenError::Parse {
                line,
                message: format!("more edge lines than the declared {}", num_edges),
            });
        }
    }

    Ok(GraphFile {
        header: GameHeader {
            cops,
            robbers,
            max_turn,
        },
        graph,
        precision: precision.unwrap_or(GENERATED_PRECISION),
    })
}

impl GraphFile {
    /// Read and parse a graph file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        parse_graph(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Cops: 2
Robbers: 1
Max turn: 40
Vertices: 3
-0.50000 0.25000
0.10000 -0.90000
0.00000 0.00000
Edges: 2
0 1
2 1
";

    #[test]
    fn test_parse_sample() {
        let file = parse_graph(SAMPLE).unwrap();
        assert_eq!(file.header, GameHeader { cops: 2, robbers: 1, max_turn: 40 });
        assert_eq!(file.precision, 5);
        assert_eq!(file.graph.num_vertices(), 3);
        assert_eq!(file.graph.position(0), Some(Position::new(-0.5, 0.25)));
        assert!(file.graph.has_edge(1, 2));
        assert!(file.graph.has_edge(0, 1));
    }

    #[test]
    fn test_missing_header() {
        let err = parse_graph("Cops: 2\nThieves: 1\n").unwrap_err();
        assert!(matches!(err, GraphGenError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_out_of_range_edge() {
        let text = SAMPLE.replace("2 1\n", "3 1\n");
        let err = parse_graph(&text).unwrap_err();
        assert!(matches!(err, GraphGenError::Parse { line: 10, .. }));
    }

    #[test]
    fn test_extra_edge_rejected() {
        let text = format!("{}0 2\n", SAMPLE);
        let err = parse_graph(&text).unwrap_err();
        assert!(matches!(err, GraphGenError::Parse { line: 11, .. }));
    }

    #[test]
    fn test_trailing_blank_line_ok() {
        let text = format!("{}\n", SAMPLE);
        assert!(parse_graph(&text).is_ok());
    }

    #[test]
    fn test_truncated_vertices() {
        let err = parse_graph("Cops: 1\nRobbers: 1\nMax turn: 1\nVertices: 2\n0.0 0.0\n").unwrap_err();
        assert!(matches!(err, GraphGenError::Parse { line: 6, .. }));
    }

    #[test]
    fn test_duplicate_edge_lines_absorbed() {
        let text = SAMPLE.replace("Edges: 2\n0 1\n2 1\n", "Edges: 3\n0 1\n1 0\n2 1\n");
        let file = parse_graph(&text).unwrap();
        assert_eq!(file.graph.num_edges(), 2);
    }
}
