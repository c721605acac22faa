//! Edge list reader for whitespace-delimited endpoint-pair files.

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use rayon::iter::ParallelIterator;
use serde_json::json;
use thiserror::Error;

use crate::graph::{Graph, Vertex};
use crate::scanner::DelimIter;
use crate::Scanner;

/// Failure to get at the graph data at all. Parse-level garbage is not an
/// error; ingestion just stops at the first unparsable token.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot open graph file {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// An undirected edge list together with the vertex count implied by it.
pub struct EdgeList {
    /// One greater than the largest endpoint id seen, or zero for no edges.
    pub nvertices: usize,
    pub edges: Vec<(Vertex, Vertex)>,
}

/// Per-file fold state: consecutive integer tokens pair up into edges,
/// carrying an odd token across line boundaries. The first token that
/// fails to parse ends the file's ingestion.
#[derive(Default)]
struct FilePairs {
    edges: Vec<(Vertex, Vertex)>,
    pending: Option<Vertex>,
    halted: bool,
}

impl FilePairs {
    fn consume(&mut self, line: DelimIter<'_>) {
        if self.halted {
            return;
        }
        for word in line {
            if word.is_empty() {
                continue;
            }
            let id: Vertex = match std::str::from_utf8(word).ok().and_then(|w| w.parse().ok()) {
                Some(id) => id,
                None => {
                    self.halted = true;
                    return;
                }
            };
            match self.pending.take() {
                None => self.pending = Some(id),
                Some(src) => self.edges.push((src, id)),
            }
        }
    }
}

/// Reads as many well-formed endpoint pairs as possible from the files
/// behind `scanner` into an edge list.
///
/// Tokens are paired in stream order within each file, so a pair may span
/// lines; a trailing unpaired token is discarded. Returns an error only
/// if a file cannot be opened, which is checked before any parsing so a
/// half-read graph never reaches the solver.
pub fn read(scanner: &Scanner) -> Result<EdgeList, ReadError> {
    for path in scanner.paths() {
        File::open(path).map_err(|source| ReadError::Open {
            path: path.clone(),
            source,
        })?;
    }

    let read_start = Instant::now();
    let per_file: Vec<FilePairs> = scanner
        .fold(
            |_| FilePairs::default(),
            |mut acc, line| {
                acc.consume(line);
                acc
            },
        )
        .collect();

    let nedges = per_file.iter().map(|f| f.edges.len()).sum();
    let mut edges = Vec::with_capacity(nedges);
    for file in per_file {
        edges.extend(file.edges);
    }
    let nvertices = edges
        .iter()
        .map(|&(u, v)| u.max(v))
        .max()
        .map_or(0, |m| m as usize + 1);

    eprintln!(
        "{}",
        json!({
            "nvertices": nvertices,
            "nedges": edges.len(),
            "read_duration": format!("{:.0?}", Instant::now().duration_since(read_start)),
        })
    );

    Ok(EdgeList { nvertices, edges })
}

/// Reads the files behind `scanner` into an in-memory adjacency index.
/// The intermediate edge list is discarded once the index is built.
pub fn load(scanner: &Scanner) -> Result<Graph, ReadError> {
    let list = read(scanner)?;
    Ok(Graph::from_edges(list.nvertices, &list.edges))
}
