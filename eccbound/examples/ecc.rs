//! Computes the exact eccentricity of every vertex of an undirected
//! graph stored as a whitespace-delimited plaintext edge list.
//!
//! Writes one "<vertex> <eccentricity>" line per vertex to stdout, each
//! at the moment the vertex resolves, so the lines are a permutation of
//! the vertex ids rather than sorted. Diagnostics go to stderr.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use itertools::Itertools;
use serde_json::json;
use structopt::StructOpt;

use eccbound::driver::{self, IndexOrder};
use eccbound::{graphio, Scanner, SummaryStats};

/// Compute the exact eccentricity of every vertex.
///
/// Resolves vertices with as few breadth-first searches as the
/// triangle-inequality bounds allow; compare the reported npivots
/// against the vertex count to see how much was pruned.
#[derive(Debug, StructOpt)]
#[structopt(name = "ecc", about = "Compute exact vertex eccentricities.")]
struct Opt {
    /// Plaintext edge list: whitespace-delimited pairs of 0-based
    /// vertex ids, one undirected edge per pair.
    #[structopt(parse(from_os_str))]
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let load_start = Instant::now();
    let scanner = Scanner::new(vec![opt.input], b' ');
    let graph = graphio::load(&scanner).context("load graph")?;
    eprintln!(
        "{}",
        json!({
            "load_graph_duration":
                format!("{:.0?}", Instant::now().duration_since(load_start))
        })
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let solve_start = Instant::now();
    let resolution = driver::resolve(&graph, IndexOrder::default(), |v, ecc| {
        writeln!(out, "{} {}", v, ecc).expect("write eccentricity");
    });
    out.flush().expect("flush eccentricities");
    let solve_duration = Instant::now().duration_since(solve_start);

    let (radius, diameter) = resolution
        .eccentricities
        .iter()
        .minmax()
        .into_option()
        .map_or((0, 0), |(&lo, &hi)| (lo, hi));

    eprintln!(
        "{}",
        json!({
            "nvertices": graph.nvertices(),
            "nedges": graph.nedges(),
            "npivots": resolution.npivots,
            "radius": radius,
            "diameter": diameter,
            "solve_duration": format!("{:.0?}", solve_duration),
        })
    );

    if graph.nvertices() > 0 {
        let stats = SummaryStats::from(resolution.eccentricities.iter().map(|&e| e as f64));
        eprintln!("{}", json!({ "eccentricity_stats": stats.to_map() }));
    }

    Ok(())
}
