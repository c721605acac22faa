//! Compact graph data structure.

use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;
use rayon::slice::ParallelSlice;

pub(crate) type Vertex = u32;

/// A compact adjacency list intended for sparse graphs.
///
/// The space of vertices is a contiguous range of u32 ints
/// from [0, nvertices). Every undirected edge `{u, v}` appears twice,
/// once in each endpoint's neighbor list; duplicate edges and self-loops
/// are kept as ordinary (repeated) entries. A self-loop contributes both
/// of its entries to the one endpoint's list, so it counts twice toward
/// that vertex's degree.
pub struct Graph {
    offsets: Vec<usize>,
    neighbors: Vec<Vertex>,
}

impl Graph {
    /// `offsets.len()` should be one greater than the number of vertices
    /// with `neighbors[offsets[i]..offsets[i+1]]` being the edges incident
    /// from `i`, which should be bidirectional.
    pub(crate) fn new(offsets: Vec<usize>, neighbors: Vec<Vertex>) -> Self {
        assert!(offsets.len() <= (1 << 32));
        assert!(!offsets.is_empty());
        assert!(offsets[0] == 0 && offsets[offsets.len() - 1] == neighbors.len());
        debug_assert!(offsets.par_windows(2).all(|s| s[0] <= s[1]));
        debug_assert!({
            let n = (offsets.len() - 1) as Vertex;
            neighbors.par_iter().all(|&v| v < n)
        });
        Self { offsets, neighbors }
    }

    /// Builds the adjacency index from an undirected edge list in O(n + e):
    /// one degree-counting pass, one prefix-sum pass, and one placement
    /// pass reusing the degree array as a write cursor.
    ///
    /// Every endpoint must be below `nvertices`.
    pub fn from_edges(nvertices: usize, edges: &[(Vertex, Vertex)]) -> Self {
        let mut degree = vec![0usize; nvertices];
        for &(u, v) in edges {
            degree[u as usize] += 1;
            degree[v as usize] += 1;
        }

        let mut offsets = Vec::with_capacity(nvertices + 1);
        let mut cumsum = 0;
        offsets.push(0);
        for d in degree.iter_mut() {
            cumsum += *d;
            offsets.push(cumsum);
            *d = 0;
        }

        let mut neighbors = vec![0 as Vertex; cumsum];
        for &(u, v) in edges {
            neighbors[offsets[u as usize] + degree[u as usize]] = v;
            degree[u as usize] += 1;
            neighbors[offsets[v as usize] + degree[v as usize]] = u;
            degree[v as usize] += 1;
        }

        Self::new(offsets, neighbors)
    }

    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        let v = v as usize;
        let lo = self.offsets[v];
        let hi = self.offsets[v + 1];
        &self.neighbors[lo..hi]
    }

    pub fn degree(&self, v: Vertex) -> usize {
        let v = v as usize;
        let lo = self.offsets[v];
        let hi = self.offsets[v + 1];
        hi - lo
    }

    pub fn nvertices(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn nedges(&self) -> usize {
        self.neighbors.len() / 2
    }
}
