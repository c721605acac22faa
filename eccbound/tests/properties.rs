//! Property tests pitting the bound-propagation solver against an
//! independently written per-vertex BFS ground truth on small random
//! graphs.

use proptest::prelude::*;

use eccbound::bfs::{BfsEngine, UNREACHED};
use eccbound::bounds::EccBounds;
use eccbound::driver::{self, DegreeOrder, IndexOrder, PivotOrder, ShuffledOrder};
use eccbound::graph::Graph;

/// Frontier-by-frontier BFS, deliberately unrelated to the engine's
/// queue-and-cursor implementation.
fn frontier_distances(graph: &Graph, source: u32) -> Vec<u32> {
    let mut dist = vec![UNREACHED; graph.nvertices()];
    dist[source as usize] = 0;
    let mut frontier = vec![source];
    let mut depth = 0;
    while !frontier.is_empty() {
        depth += 1;
        let mut next = Vec::new();
        for v in frontier {
            for &w in graph.neighbors(v) {
                if dist[w as usize] == UNREACHED {
                    dist[w as usize] = depth;
                    next.push(w);
                }
            }
        }
        frontier = next;
    }
    dist
}

fn true_eccentricity(graph: &Graph, source: u32) -> u32 {
    frontier_distances(graph, source)
        .into_iter()
        .filter(|&d| d != UNREACHED)
        .max()
        .unwrap_or(0)
}

/// Vertex count and edge multiset; duplicate edges, self-loops, and
/// isolated vertices all occur.
fn arb_graph_edges() -> impl Strategy<Value = (usize, Vec<(u32, u32)>)> {
    (1usize..24).prop_flat_map(|n| {
        let endpoint = 0..n as u32;
        let edges = proptest::collection::vec((endpoint.clone(), endpoint), 0..48);
        (Just(n), edges)
    })
}

proptest! {
    #[test]
    fn resolved_eccentricities_match_ground_truth((n, edges) in arb_graph_edges()) {
        let graph = Graph::from_edges(n, &edges);
        let resolution = driver::resolve(&graph, IndexOrder::default(), |_, _| {});
        for v in 0..n as u32 {
            prop_assert_eq!(resolution.eccentricities[v as usize], true_eccentricity(&graph, v));
        }
    }

    #[test]
    fn every_vertex_emitted_exactly_once((n, edges) in arb_graph_edges()) {
        let graph = Graph::from_edges(n, &edges);
        let mut emitted = Vec::new();
        driver::resolve(&graph, IndexOrder::default(), |v, _| emitted.push(v));
        emitted.sort_unstable();
        let expected: Vec<u32> = (0..n as u32).collect();
        prop_assert_eq!(emitted, expected);
    }

    #[test]
    fn engine_agrees_with_reference_and_is_idempotent(
        (n, edges) in arb_graph_edges(),
        source_ix in any::<prop::sample::Index>(),
    ) {
        let graph = Graph::from_edges(n, &edges);
        let source = source_ix.index(n) as u32;
        let mut engine = BfsEngine::new(n);

        let ecc = engine.eccentricity(&graph, source);
        let first: Vec<u32> = engine.distances().to_vec();
        prop_assert_eq!(&first, &frontier_distances(&graph, source));
        prop_assert_eq!(ecc, true_eccentricity(&graph, source));

        let again = engine.eccentricity(&graph, source);
        prop_assert_eq!(again, ecc);
        prop_assert_eq!(engine.distances(), first.as_slice());
    }

    #[test]
    fn bounds_stay_valid_and_monotone((n, edges) in arb_graph_edges()) {
        let graph = Graph::from_edges(n, &edges);
        let truth: Vec<u32> = (0..n as u32).map(|v| true_eccentricity(&graph, v)).collect();

        let mut engine = BfsEngine::new(n);
        let mut bounds = EccBounds::new(n);
        let mut order = IndexOrder::default();
        while let Some(pivot) = order.next(&bounds) {
            let prev_low: Vec<u32> = (0..n as u32).map(|v| bounds.lower(v)).collect();
            let prev_high: Vec<u32> = (0..n as u32).map(|v| bounds.upper(v)).collect();

            let pivot_ecc = engine.eccentricity(&graph, pivot);
            prop_assert_eq!(pivot_ecc, truth[pivot as usize]);
            bounds.set_exact(pivot, pivot_ecc);
            bounds.tighten(pivot_ecc, engine.distances());

            for v in 0..n as u32 {
                let j = v as usize;
                prop_assert!(bounds.lower(v) >= prev_low[j]);
                prop_assert!(bounds.upper(v) <= prev_high[j]);
                prop_assert!(bounds.lower(v) <= truth[j]);
                prop_assert!(bounds.upper(v) >= truth[j]);
                if let Some(ecc) = bounds.eccentricity(v) {
                    prop_assert_eq!(ecc, truth[j]);
                }
            }
        }
        prop_assert!(bounds.all_resolved());
    }

    #[test]
    fn pivot_policies_agree_on_eccentricities(
        (n, edges) in arb_graph_edges(),
        seed in any::<u64>(),
    ) {
        let graph = Graph::from_edges(n, &edges);
        let by_index = driver::resolve(&graph, IndexOrder::default(), |_, _| {});
        let by_degree = driver::resolve(&graph, DegreeOrder::new(&graph), |_, _| {});
        let by_chance = driver::resolve(&graph, ShuffledOrder::new(n, seed), |_, _| {});

        prop_assert_eq!(&by_index.eccentricities, &by_degree.eccentricities);
        prop_assert_eq!(&by_index.eccentricities, &by_chance.eccentricities);
    }
}
