//! Loading edge lists from disk.
//!
//! Two formats are understood: a JSON array of `{"from", "to", "weight"}` objects,
//! and a plain text list with one `FROM TO WEIGHT` edge per line, where blank lines
//! and lines starting with `#` are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::graph::Edge;
use crate::{Error, Result};

/// Reads a JSON array of edges
pub fn read_json_edges<R: Read>(reader: R) -> Result<Vec<Edge<f64>>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parses a whitespace separated `FROM TO WEIGHT` edge list
pub fn parse_edge_list(input: &str) -> Result<Vec<Edge<f64>>> {
    let mut edges = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parse_error = |message: String| Error::Parse {
            line: idx + 1,
            message,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [from, to, weight] = fields.as_slice() else {
            return Err(parse_error(format!(
                "expected 3 fields, found {}",
                fields.len()
            )));
        };
        let weight: f64 = weight
            .parse()
            .map_err(|_| parse_error(format!("invalid weight {:?}", weight)))?;

        edges.push(Edge::new(*from, *to, weight));
    }

    Ok(edges)
}

/// Loads an edge list, choosing the format from the file extension
pub fn load_edges(path: &Path) -> Result<Vec<Edge<f64>>> {
    let file = File::open(path)?;
    let is_json = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        read_json_edges(BufReader::new(file))
    } else {
        let mut input = String::new();
        BufReader::new(file).read_to_string(&mut input)?;
        parse_edge_list(&input)
    }
}
