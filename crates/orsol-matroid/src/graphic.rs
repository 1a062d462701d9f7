//! Graphic matroids.
//!
//! The cycle matroid of a multigraph has the edges as ground set; a set of
//! edges is independent iff it contains no cycle. Edges are labelled by
//! their position in the edge list.

use std::fmt;

use crate::error::MatroidError;
use crate::matroid::Matroid;
use crate::subsets::{is_sorted_subset, Combinations};
use crate::Result;

/// The cycle matroid of a finite multigraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphicMatroid {
    name: String,
    vertices: usize,
    edges: Vec<(usize, usize)>,
}

impl GraphicMatroid {
    /// Creates the cycle matroid of the graph on `0..vertices` with `edges`.
    ///
    /// Loops and parallel edges are allowed.
    ///
    /// # Errors
    ///
    /// Returns `MatroidError::InvalidGraph` if an edge names a vertex
    /// outside `0..vertices`.
    pub fn new(vertices: usize, edges: Vec<(usize, usize)>) -> Result<Self> {
        if let Some(&(u, v)) = edges.iter().find(|&&(u, v)| u >= vertices || v >= vertices) {
            return Err(MatroidError::InvalidGraph(format!(
                "edge ({u}, {v}) leaves the vertex set 0..{vertices}"
            )));
        }
        Ok(Self {
            name: format!("M(G) with {vertices} vertices"),
            vertices,
            edges,
        })
    }

    /// The cycle matroid of the complete graph `K_n`.
    #[must_use]
    pub fn complete(n: usize) -> Self {
        let edges = Combinations::new(n, 2).map(|e| (e[0], e[1])).collect();
        Self {
            name: format!("M(K{n})"),
            vertices: n,
            edges,
        }
    }

    /// The cycle matroid of the wheel with `n` spokes.
    ///
    /// Vertex 0 is the hub; edges `0..n` are the spokes `(0, i)` and edges
    /// `n..2n` the rim `(i, i + 1)`, closing with `(n, 1)`.
    #[must_use]
    pub fn wheel(n: usize) -> Self {
        let mut edges: Vec<_> = (1..=n).map(|i| (0, i)).collect();
        edges.extend((1..=n).map(|i| (i, if i == n { 1 } else { i + 1 })));
        Self {
            name: format!("Wheel({n})"),
            vertices: n + 1,
            edges,
        }
    }

    /// The edges, indexed by ground-set label.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// The rank of a set of edge labels: vertices minus components of the
    /// spanned subgraph.
    #[must_use]
    pub fn rank_of(&self, labels: &[usize]) -> usize {
        let mut forest = UnionFind::new(self.vertices);
        labels
            .iter()
            .filter(|&&e| {
                let (u, v) = self.edges[e];
                forest.union(u, v)
            })
            .count()
    }

    /// The rank of the matroid.
    #[must_use]
    pub fn rank(&self) -> usize {
        let all: Vec<_> = (0..self.edges.len()).collect();
        self.rank_of(&all)
    }
}

impl Matroid for GraphicMatroid {
    type Element = usize;

    fn groundset(&self) -> Vec<usize> {
        (0..self.edges.len()).collect()
    }

    /// Circuits are the edge sets of simple cycles, found as the minimal
    /// dependent sets by increasing size.
    fn circuits(&self) -> Vec<Vec<usize>> {
        let m = self.edges.len();
        let max_size = (self.rank() + 1).min(m);
        let mut circuits: Vec<Vec<usize>> = Vec::new();

        for k in 1..=max_size {
            for set in Combinations::new(m, k) {
                if self.rank_of(&set) == k {
                    continue;
                }
                if circuits.iter().any(|c| is_sorted_subset(c, &set)) {
                    continue;
                }
                circuits.push(set);
            }
        }

        circuits
    }
}

impl fmt::Display for GraphicMatroid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: graphic matroid of rank {} on {} elements",
            self.name,
            self.rank(),
            self.edges.len()
        )
    }
}

/// Disjoint-set forest with path halving.
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merges the classes of `a` and `b`; returns false if already merged.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}
