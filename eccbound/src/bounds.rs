//! Per-vertex eccentricity bounds and their triangle-inequality
//! tightening.

use crate::bfs::UNREACHED;
use crate::graph::Vertex;

/// Lower and upper eccentricity bounds for every vertex, plus the exact
/// values as they become known.
///
/// Bounds only ever tighten: the lower bound is non-decreasing and the
/// upper bound non-increasing across [`EccBounds::tighten`] calls, and
/// once a vertex resolves both equal its eccentricity. Resolution is an
/// explicit flag rather than a sentinel value, since an eccentricity of
/// zero is legitimate for an isolated vertex.
pub struct EccBounds {
    low: Vec<u32>,
    high: Vec<u32>,
    ecc: Vec<u32>,
    resolved: Vec<bool>,
    nresolved: usize,
}

impl EccBounds {
    pub fn new(nvertices: usize) -> Self {
        Self {
            low: vec![0; nvertices],
            high: vec![nvertices as u32; nvertices],
            ecc: vec![0; nvertices],
            resolved: vec![false; nvertices],
            nresolved: 0,
        }
    }

    pub fn nvertices(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_resolved(&self, v: Vertex) -> bool {
        self.resolved[v as usize]
    }

    /// The exact eccentricity of `v`, if known yet.
    pub fn eccentricity(&self, v: Vertex) -> Option<u32> {
        if self.resolved[v as usize] {
            Some(self.ecc[v as usize])
        } else {
            None
        }
    }

    pub fn lower(&self, v: Vertex) -> u32 {
        self.low[v as usize]
    }

    pub fn upper(&self, v: Vertex) -> u32 {
        self.high[v as usize]
    }

    pub fn all_resolved(&self) -> bool {
        self.nresolved == self.resolved.len()
    }

    /// Records the exact eccentricity of a vertex whose BFS just ran.
    pub fn set_exact(&mut self, v: Vertex, eccentricity: u32) {
        let v = v as usize;
        assert!(!self.resolved[v]);
        self.low[v] = eccentricity;
        self.high[v] = eccentricity;
        self.ecc[v] = eccentricity;
        self.resolved[v] = true;
        self.nresolved += 1;
    }

    /// Tightens every unresolved vertex's bounds using one pivot's exact
    /// eccentricity and its BFS distance array, returning the vertices
    /// whose bounds collapsed to equality, in ascending id order.
    ///
    /// For a vertex at distance `d` from the pivot, the triangle
    /// inequality over shortest paths gives
    /// `pivot_ecc - d <= ecc <= pivot_ecc + d`, and `d` itself is a lower
    /// bound. Vertices the pivot did not reach are left untouched: the
    /// inequality says nothing across components, and each component
    /// resolves through its own pivots.
    pub fn tighten(&mut self, pivot_ecc: u32, dist: &[u32]) -> Vec<Vertex> {
        assert!(dist.len() == self.resolved.len());
        let mut collapsed = Vec::new();
        for j in 0..self.resolved.len() {
            if self.resolved[j] {
                continue;
            }
            let d = dist[j];
            if d == UNREACHED {
                continue;
            }
            // d <= pivot_ecc for any reached vertex, so this cannot wrap.
            self.low[j] = self.low[j].max(pivot_ecc - d).max(d);
            self.high[j] = self.high[j].min(pivot_ecc + d);
            if self.low[j] == self.high[j] {
                self.ecc[j] = self.low[j];
                self.resolved[j] = true;
                self.nresolved += 1;
                collapsed.push(j as Vertex);
            }
        }
        collapsed
    }

    /// All exact eccentricities; callable once every vertex is resolved.
    pub fn into_eccentricities(self) -> Vec<u32> {
        assert!(self.all_resolved());
        self.ecc
    }
}
