//! Samples a low-degree connected simple graph and writes it out as
//! whitespace-delimited edge pair files, the format the `ecc` example
//! reads.

use std::collections::HashSet;
use std::convert::TryInto;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use rand::Rng;
use rand_pcg::Lcg64Xsh32;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use serde_json::json;
use structopt::StructOpt;

/// Generate a connected simple graph with roughly the provided average
/// degree.
#[derive(Debug, StructOpt)]
#[structopt(name = "sample", about = "Sample a connected graph.")]
struct Opt {
    /// Output path prefix for the edge list shards.
    #[structopt(long)]
    out: PathBuf,

    /// Approximate average degree. The graph always contains a path
    /// through all vertices to ensure it is connected, so the true
    /// average degree is larger than this by about two.
    #[structopt(long)]
    degree: usize,

    /// Number of vertices.
    #[structopt(long)]
    nvertices: usize,

    /// Random sampling seed.
    #[structopt(long)]
    seed: u64,

    /// Number of output files to spread the edges over.
    #[structopt(long, default_value = "1")]
    nfiles: usize,
}

fn main() {
    let opt = Opt::from_args();
    let n = opt.nvertices;

    // To start with, our graph includes edges from vertex
    // i to i+1 for all i to ensure that it's connected.
    let backbone: HashSet<Pair> = (1..n)
        .map(|v| {
            let v: u32 = v.try_into().unwrap();
            encode(v - 1, v)
        })
        .collect();

    let mut rng = Lcg64Xsh32::new(0xcafef00dd15ea5e5, opt.seed);
    let to_sample = n * opt.degree / 2;
    let sample_start = Instant::now();
    let additional = sample_excluding(&mut rng, &backbone, c2(n.try_into().unwrap()), to_sample);

    let m = additional.len() + backbone.len();
    println!(
        "{}",
        json!({
            "nvertices": n,
            "nedges": m,
            "sample_duration": format!("{:.0?}", Instant::now().duration_since(sample_start))
        })
    );

    let edges: Vec<Pair> = backbone.into_iter().chain(additional.into_iter()).collect();
    let nfiles = opt.nfiles.max(1).min(edges.len().max(1));
    let write_start = Instant::now();
    (0..nfiles).into_par_iter().for_each(|file_ix| {
        let lo = file_ix * edges.len() / nfiles;
        let hi = (file_ix + 1) * edges.len() / nfiles;

        let mut fname = opt.out.file_name().expect("file name").to_owned();
        fname.push(format!(".{}", file_ix));

        let new_path = opt.out.with_file_name(fname);
        let file = File::create(&new_path).expect("write file");
        let mut writer = BufWriter::new(file);

        for &pair in &edges[lo..hi] {
            let (i, j) = decode(pair);
            writeln!(writer, "{} {}", i, j).expect("write edge");
        }
        writer.flush().expect("flush edges");
    });

    println!(
        "{}",
        json!({
            "nfiles": nfiles,
            "write_duration": format!("{:.0?}", Instant::now().duration_since(write_start))
        })
    );
}

// To sample with replacement from the set of edges over a simple graph
// over n vertices without incurring the memory overhead of fully
// generating all (n choose 2) edges, we use a specialized sampler [1]
// over a contiguous integer range, modified to accept a set of
// always-excluded values (the backbone edges already in the graph).
//
// The range is put in bijection with the vertex pairs {i, j}, i < j, by
// the triangular-number encoding c2(j) + i.
//
// [1]: https://stackoverflow.com/a/2394292/1779853

type Pair = u64;

/// Samples `k` distinct values from the universe `[n] - exclude`.
fn sample_excluding<R: Rng>(
    rng: &mut R,
    exclude: &HashSet<Pair>,
    n: Pair,
    k: usize,
) -> HashSet<Pair> {
    assert!(exclude.iter().all(|&e| e < n));
    assert!(
        n >= (k + exclude.len()).try_into().unwrap(),
        "universe {} < sample {} + exclude {}",
        n,
        k,
        exclude.len()
    );

    let mut start = n;
    for _ in 0..k {
        start -= 1;
        while exclude.contains(&start) {
            start -= 1;
        }
    }
    assert!((start..n).filter(|i| !exclude.contains(i)).count() == k);

    let mut ret = HashSet::new();
    for i in start..n {
        if exclude.contains(&i) {
            continue;
        }
        let j = loop {
            let j = rng.gen_range(0..=i);
            if !exclude.contains(&j) {
                break j;
            }
        };
        if ret.contains(&j) {
            ret.insert(i);
        } else {
            ret.insert(j);
        }
    }

    assert!(ret.is_disjoint(exclude));
    assert!(ret.len() == k);
    ret
}

fn c2(n: Pair) -> Pair {
    n * (n - 1) / 2
}

fn encode(i: u32, j: u32) -> Pair {
    assert!(i < j);
    c2(j as Pair) + i as Pair
}

fn decode(pair: Pair) -> (u32, u32) {
    let mut j = ((1.0 + ((1 + 8 * pair) as f64).sqrt()) / 2.0) as Pair;
    // the float estimate can be off by one on either side
    while c2(j) > pair {
        j -= 1;
    }
    while c2(j + 1) <= pair {
        j += 1;
    }
    let i = pair - c2(j);
    assert!(i < j);
    (i.try_into().unwrap(), j.try_into().unwrap())
}
