// Copyright (c) 2023 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Derived adjacency representations.
//!
//! The edge list of a [`Graph`] is the only authoritative representation.
//! The structures in this module are point-in-time snapshots computed from
//! it. They are never updated when the graph changes, an algorithm builds
//! one snapshot per run.
//!
//! Vertices are referred to by their *position* in the vertex list of the
//! graph, not by their identifier.
//!
//! # Example
//!
//! ```
//! use rs_edgegraph::Graph;
//! use rs_edgegraph::adjacencies::Adjacencies;
//!
//! let g: Graph = Graph::directed(vec![7, 8, 9], vec![(7, 9), (8, 7)]).unwrap();
//!
//! let out = Adjacencies::outgoing(&g);
//! assert_eq!(out.neighs(0).collect::<Vec<_>>(), vec![2]);
//!
//! let all = Adjacencies::undirected(&g);
//! assert_eq!(all.neighs(0).map(|i| all.vertex(i)).collect::<Vec<_>>(), vec![9, 8]);
//! ```

use crate::edge::Vertex;
use crate::graph::Graph;

use either::Either;

use std::collections::HashMap;
use std::iter::once;

/// Which edges are followed from a vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    /// From source to sink.
    Outgoing,
    /// From sink to source.
    Incoming,
    /// Both ways for directed graphs, the stored edges for undirected graphs.
    Both,
}

/// Adjacency lists of a graph snapshot.
///
/// For each vertex position the list of neighbor positions together with
/// the weight of the connecting edge, in edge insertion order.
#[derive(Clone, Debug)]
pub struct Adjacencies<W> {
    vertices: Vec<Vertex>,
    index: HashMap<Vertex, usize>,
    neighs: Vec<Vec<(usize, Option<W>)>>,
}

impl<W: Copy> Adjacencies<W> {
    fn build(g: &Graph<W>, dir: Direction) -> Self {
        let vertices = g.vertices().to_vec();
        let index: HashMap<Vertex, usize> = vertices.iter().enumerate().map(|(i, &u)| (u, i)).collect();
        let mut neighs = vec![vec![]; vertices.len()];

        for e in g.edges() {
            let (u, v) = e.enodes();
            let arcs = match dir {
                Direction::Outgoing => Either::Left(once((u, v))),
                Direction::Incoming => Either::Left(once((v, u))),
                Direction::Both if g.is_directed() => Either::Right(once((u, v)).chain(once((v, u)))),
                Direction::Both => Either::Left(once((u, v))),
            };
            for (u, v) in arcs {
                if let (Some(&i), Some(&j)) = (index.get(&u), index.get(&v)) {
                    neighs[i].push((j, e.weight()));
                }
            }
        }

        Adjacencies { vertices, index, neighs }
    }

    /// Adjacencies along the stored edges.
    ///
    /// For an undirected graph these are all neighbors, for a directed graph
    /// the sinks of the outgoing edges.
    pub fn outgoing(g: &Graph<W>) -> Self {
        Adjacencies::build(g, Direction::Outgoing)
    }

    /// Adjacencies against the stored edges.
    ///
    /// This equals the outgoing adjacencies of the transposed graph.
    pub fn incoming(g: &Graph<W>) -> Self {
        Adjacencies::build(g, Direction::Incoming)
    }

    /// Adjacencies of the underlying undirected graph.
    pub fn undirected(g: &Graph<W>) -> Self {
        Adjacencies::build(g, Direction::Both)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Return the vertex at position `i`.
    pub fn vertex(&self, i: usize) -> Vertex {
        self.vertices[i]
    }

    /// Return the position of vertex `u`.
    pub fn index(&self, u: Vertex) -> Option<usize> {
        self.index.get(&u).cloned()
    }

    /// Return the neighbor positions of the vertex at position `i`.
    pub fn neighs(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighs[i].iter().map(|&(j, _)| j)
    }

    /// Return the neighbor positions and edge weights of the vertex at
    /// position `i`.
    pub fn weighted_neighs(&self, i: usize) -> &[(usize, Option<W>)] {
        &self.neighs[i]
    }

    /// Remove one occurrence of `j` from the neighbors of `i`.
    ///
    /// Returns `false` if `j` is not a neighbor of `i`.
    pub fn remove_one(&mut self, i: usize, j: usize) -> bool {
        match self.neighs[i].iter().position(|&(k, _)| k == j) {
            Some(p) => {
                self.neighs[i].remove(p);
                true
            }
            None => false,
        }
    }
}

/// The adjacency matrix of a graph snapshot.
///
/// Entry `(i,j)` is the number of edges from the `i`-th to the `j`-th
/// vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    vertices: Vec<Vertex>,
    counts: Vec<Vec<usize>>,
}

impl AdjacencyMatrix {
    pub fn new<W: Copy>(g: &Graph<W>) -> Self {
        let adj = Adjacencies::outgoing(g);
        let n = adj.num_vertices();
        let mut counts = vec![vec![0; n]; n];
        for (i, row) in counts.iter_mut().enumerate() {
            for j in adj.neighs(i) {
                row[j] += 1;
            }
        }
        AdjacencyMatrix {
            vertices: adj.vertices,
            counts,
        }
    }

    /// Return the vertices labelling the rows and columns.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Return the number of edges from `u` to `v`.
    ///
    /// Returns `None` if one of the vertices does not exist.
    pub fn get(&self, u: Vertex, v: Vertex) -> Option<usize> {
        let i = self.vertices.iter().position(|&w| w == u)?;
        let j = self.vertices.iter().position(|&w| w == v)?;
        Some(self.counts[i][j])
    }

    /// Return the rows of the matrix.
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.counts
    }
}
