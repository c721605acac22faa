//! Single-source breadth-first search over the compact adjacency index.

use crate::graph::{Graph, Vertex};

/// Distance marker for vertices the source's component does not contain.
/// Distinct from every real hop count, in particular from distance zero.
pub const UNREACHED: u32 = u32::MAX;

/// A BFS engine owning its distance array and traversal queue.
///
/// Both buffers are sized to the vertex count once and reused across
/// calls, so a single engine performs no allocation per search. Engines
/// are independent of one another; concurrent searches each need their
/// own instance.
pub struct BfsEngine {
    dist: Vec<u32>,
    queue: Vec<Vertex>,
}

impl BfsEngine {
    pub fn new(nvertices: usize) -> Self {
        Self {
            dist: vec![UNREACHED; nvertices],
            queue: Vec::with_capacity(nvertices),
        }
    }

    /// Runs one breadth-first search from `source`, returning its
    /// eccentricity: the greatest hop count to any vertex it reaches.
    /// Per-vertex distances are left in [`BfsEngine::distances`], with
    /// [`UNREACHED`] marking vertices in other components.
    ///
    /// A vertex is visited the first time it is enqueued, so each
    /// recorded distance is the shortest hop count from `source`.
    pub fn eccentricity(&mut self, graph: &Graph, source: Vertex) -> u32 {
        assert!(graph.nvertices() == self.dist.len());
        assert!((source as usize) < self.dist.len());

        for d in self.dist.iter_mut() {
            *d = UNREACHED;
        }
        self.queue.clear();
        self.dist[source as usize] = 0;
        self.queue.push(source);

        let mut max_distance = 0;
        let mut head = 0;
        while head < self.queue.len() {
            let current = self.queue[head];
            head += 1;
            let next = self.dist[current as usize] + 1;
            for &neighbor in graph.neighbors(current) {
                if self.dist[neighbor as usize] == UNREACHED {
                    self.dist[neighbor as usize] = next;
                    max_distance = max_distance.max(next);
                    self.queue.push(neighbor);
                }
            }
        }

        max_distance
    }

    /// Distances recorded by the most recent [`BfsEngine::eccentricity`]
    /// call.
    pub fn distances(&self) -> &[u32] {
        &self.dist
    }
}
