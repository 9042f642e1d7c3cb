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

//! An edge list graph.
//!
//! The graph stores an ordered list of vertices and an ordered list of
//! edges. Both lists keep insertion order, which determines the order in
//! which all algorithms visit vertices and neighbors.
//!
//! Undirected graphs store each edge twice, once in each direction. A
//! directed graph stores each edge exactly once.

use crate::adjacencies::{Adjacencies, AdjacencyMatrix};
use crate::algorithms::{self, Eulerian};
use crate::edge::{Edge, Vertex};
use crate::error::{Error, Result};
use crate::mst;
use crate::num::traits::PrimInt;
use crate::scc;
use crate::search;
use crate::topological;

use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The kind of a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Kind {
    /// Edges have no direction, each edge is stored together with its mirror.
    Undirected,
    /// Edges are directed from source to sink.
    Directed,
}

/// A graph given by a list of vertices and a list of edges.
///
/// # Example
///
/// ```
/// use rs_edgegraph::{Graph, Edge};
///
/// let mut g: Graph = Graph::undirected(vec![1, 2, 3], vec![(1, 2), (2, 3)]).unwrap();
/// assert_eq!(g.num_vertices(), 3);
/// // each undirected edge is stored in both directions
/// assert_eq!(g.num_edges(), 4);
/// assert!(g.has_edge(&Edge::new(2, 1)));
///
/// assert!(g.add_edge((3, 4)).is_err());
/// g.add_vertex(4).unwrap();
/// g.add_edge((3, 4)).unwrap();
/// assert_eq!(g.degree(3), 2);
///
/// g.remove_vertex(2);
/// assert_eq!(g.adjacency_list(), vec![vec![], vec![4], vec![3]]);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(
        try_from = "GraphData<W>",
        bound(deserialize = "W: Copy + PartialEq + serde::Deserialize<'de>")
    )
)]
pub struct Graph<W = i32> {
    vertices: Vec<Vertex>,
    edges: Vec<Edge<W>>,
    kind: Kind,
}

/// The unchecked fields of a deserialized graph.
#[cfg(feature = "serialize")]
#[derive(Deserialize)]
struct GraphData<W> {
    vertices: Vec<Vertex>,
    edges: Vec<Edge<W>>,
    kind: Kind,
}

#[cfg(feature = "serialize")]
impl<W: Copy + PartialEq> std::convert::TryFrom<GraphData<W>> for Graph<W> {
    type Error = Error;

    /// Rebuild the graph with the checks of the constructors.
    ///
    /// The edges of an undirected graph must come in pairs of an edge and
    /// its mirror with the same weight.
    fn try_from(data: GraphData<W>) -> Result<Self> {
        let mut g = Graph::from_vertices(data.kind, data.vertices)?;
        match data.kind {
            Kind::Directed => {
                for e in data.edges {
                    g.add_edge(e)?;
                }
            }
            Kind::Undirected => {
                for pair in data.edges.chunks(2) {
                    let e = pair[0];
                    match pair.get(1) {
                        Some(m) if *m == e.reversed() && m.weight() == e.weight() => g.add_edge(e)?,
                        _ => {
                            return Err(Error::MissingMirror {
                                src: e.src(),
                                snk: e.snk(),
                            })
                        }
                    }
                }
            }
        }
        Ok(g)
    }
}

impl<W: Copy> Graph<W> {
    /// Create an empty graph.
    pub fn new(kind: Kind) -> Self {
        Graph {
            vertices: vec![],
            edges: vec![],
            kind,
        }
    }

    /// Create a graph without edges.
    ///
    /// Fails with [`Error::DuplicateVertex`] if a vertex is given twice.
    pub fn from_vertices<I>(kind: Kind, vertices: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut g = Graph::new(kind);
        for u in vertices {
            g.add_vertex(u)?;
        }
        Ok(g)
    }

    /// Create a graph from a list of vertices and a list of edges.
    ///
    /// Each edge must connect two vertices of the list, otherwise
    /// [`Error::InvalidEdge`] is returned. Edges of an undirected graph
    /// are mirrored.
    pub fn with_edges<I, J, E>(kind: Kind, vertices: I, edges: J) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex>,
        J: IntoIterator<Item = E>,
        E: Into<Edge<W>>,
    {
        let mut g = Graph::from_vertices(kind, vertices)?;
        for e in edges {
            g.add_edge(e)?;
        }
        Ok(g)
    }

    /// Create a graph and assign `weights[i]` to the `i`-th edge.
    ///
    /// Fails with [`Error::MismatchedWeights`] if the number of weights
    /// differs from the number of edges.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_edgegraph::{Graph, Kind, Error};
    ///
    /// let g = Graph::with_weights(Kind::Directed, vec![1, 2, 3], vec![(1, 2), (2, 3)], vec![4, 2]).unwrap();
    /// assert!(g.is_weighted());
    /// assert_eq!(g.edge_between(2, 3).unwrap().weight(), Some(2));
    ///
    /// let err = Graph::with_weights(Kind::Directed, vec![1, 2], vec![(1, 2)], vec![1, 2]).unwrap_err();
    /// assert_eq!(err, Error::MismatchedWeights { edges: 1, weights: 2 });
    /// ```
    pub fn with_weights<I, J, E, K>(kind: Kind, vertices: I, edges: J, weights: K) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex>,
        J: IntoIterator<Item = E>,
        E: Into<Edge<W>>,
        K: IntoIterator<Item = W>,
    {
        let edges: Vec<Edge<W>> = edges.into_iter().map(Into::into).collect();
        let weights: Vec<W> = weights.into_iter().collect();
        if edges.len() != weights.len() {
            return Err(Error::MismatchedWeights {
                edges: edges.len(),
                weights: weights.len(),
            });
        }
        Graph::with_edges(
            kind,
            vertices,
            edges.into_iter().zip(weights).map(|(e, w)| e.with_weight(w)),
        )
    }

    /// Create an undirected graph, see [`Graph::with_edges`].
    pub fn undirected<I, J, E>(vertices: I, edges: J) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex>,
        J: IntoIterator<Item = E>,
        E: Into<Edge<W>>,
    {
        Graph::with_edges(Kind::Undirected, vertices, edges)
    }

    /// Create a directed graph, see [`Graph::with_edges`].
    pub fn directed<I, J, E>(vertices: I, edges: J) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex>,
        J: IntoIterator<Item = E>,
        E: Into<Edge<W>>,
    {
        Graph::with_edges(Kind::Directed, vertices, edges)
    }

    /// Create a graph on a list of distinct vertices without any check.
    pub(crate) fn with_distinct_vertices(kind: Kind, vertices: Vec<Vertex>) -> Self {
        Graph {
            vertices,
            edges: vec![],
            kind,
        }
    }

    /// Insert an edge between existing vertices without any check.
    pub(crate) fn push_edge(&mut self, e: Edge<W>) {
        self.edges.push(e);
        if self.kind == Kind::Undirected {
            self.edges.push(e.reversed());
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Return `true` if this is a directed graph.
    pub fn is_directed(&self) -> bool {
        self.kind == Kind::Directed
    }

    /// Return `true` if the graph carries edge weights.
    ///
    /// Only the first edge is inspected, weights are assumed to be
    /// assigned to all edges or to none. A graph without edges is not
    /// weighted.
    pub fn is_weighted(&self) -> bool {
        self.edges.first().map(Edge::has_weight).unwrap_or(false)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Return the number of stored edges.
    ///
    /// For undirected graphs this is twice the number of logical edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Return the vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Return the stored edges in insertion order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Return the vertex at position `i`.
    pub fn vertex_at(&self, i: usize) -> Option<Vertex> {
        self.vertices.get(i).cloned()
    }

    /// Return the edge at position `i`.
    pub fn edge_at(&self, i: usize) -> Option<Edge<W>> {
        self.edges.get(i).cloned()
    }

    /// Return the position of vertex `u`.
    pub fn vertex_index(&self, u: Vertex) -> Option<usize> {
        self.vertices.iter().position(|&v| v == u)
    }

    /// Return the position of the first edge equal to `e`.
    pub fn edge_index(&self, e: &Edge<W>) -> Option<usize> {
        self.edges.iter().position(|f| f == e)
    }

    pub fn has_vertex(&self, u: Vertex) -> bool {
        self.vertices.contains(&u)
    }

    /// Return `true` if an edge with the endpoints of `e` exists.
    pub fn has_edge(&self, e: &Edge<W>) -> bool {
        self.edges.contains(e)
    }

    /// Return the first stored edge from `src` to `snk`.
    pub fn edge_between(&self, src: Vertex, snk: Vertex) -> Result<Edge<W>> {
        self.edges
            .iter()
            .find(|e| e.enodes() == (src, snk))
            .cloned()
            .ok_or(Error::EdgeNotFound { src, snk })
    }

    /// Add a new vertex.
    ///
    /// Fails with [`Error::DuplicateVertex`] if `u` is already contained.
    pub fn add_vertex(&mut self, u: Vertex) -> Result<()> {
        if self.has_vertex(u) {
            return Err(Error::DuplicateVertex(u));
        }
        self.vertices.push(u);
        Ok(())
    }

    /// Remove a vertex and all its incident edges.
    ///
    /// Returns `false` if the vertex does not exist.
    pub fn remove_vertex(&mut self, u: Vertex) -> bool {
        match self.vertex_index(u) {
            Some(i) => {
                self.vertices.remove(i);
                self.edges.retain(|e| !e.is_incident(u));
                true
            }
            None => false,
        }
    }

    /// Add an edge.
    ///
    /// In an undirected graph the mirrored edge is added, too. Fails with
    /// [`Error::InvalidEdge`] if one of the end vertices does not exist.
    pub fn add_edge<E>(&mut self, e: E) -> Result<()>
    where
        E: Into<Edge<W>>,
    {
        let e = e.into();
        if !self.has_vertex(e.src()) || !self.has_vertex(e.snk()) {
            return Err(Error::InvalidEdge {
                src: e.src(),
                snk: e.snk(),
            });
        }
        self.push_edge(e);
        Ok(())
    }

    /// Remove an edge.
    ///
    /// The most recently added edge with the endpoints of `e` is removed
    /// (and its mirror in an undirected graph). Returns `false` if no
    /// such edge exists.
    pub fn remove_edge<E>(&mut self, e: E) -> bool
    where
        E: Into<Edge<W>>,
    {
        let e = e.into();
        match self.edges.iter().rposition(|f| *f == e) {
            Some(i) => {
                self.edges.remove(i);
                if self.kind == Kind::Undirected {
                    let r = e.reversed();
                    if let Some(j) = self.edges.iter().rposition(|f| *f == r) {
                        self.edges.remove(j);
                    }
                }
                true
            }
            None => false,
        }
    }

    /// Return the degree of a vertex.
    ///
    /// This is the number of stored edges ending in `u`, i.e. the in-degree
    /// of a directed graph and the degree of an undirected graph (where a
    /// loop counts twice).
    pub fn degree(&self, u: Vertex) -> usize {
        self.edges.iter().filter(|e| e.snk() == u).count()
    }

    /// Return the vertices without any incident edge.
    pub fn alone_vertices(&self) -> Vec<Vertex> {
        self.vertices
            .iter()
            .cloned()
            .filter(|&u| !self.edges.iter().any(|e| e.is_incident(u)))
            .collect()
    }

    /// Return the adjacency list.
    ///
    /// The `i`-th list contains the sinks of all edges leaving the `i`-th
    /// vertex in edge insertion order. The list is computed on each call.
    pub fn adjacency_list(&self) -> Vec<Vec<Vertex>> {
        let adj = Adjacencies::outgoing(self);
        (0..adj.num_vertices())
            .map(|i| adj.neighs(i).map(|j| adj.vertex(j)).collect())
            .collect()
    }

    /// Return the adjacency matrix counting parallel edges.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::new(self)
    }

    /// Reverse all edges in place.
    pub fn transpose(&mut self) {
        for e in &mut self.edges {
            *e = e.reversed();
        }
    }

    /// Return a copy with all edges reversed.
    pub fn transposed(&self) -> Self {
        let mut g = self.clone();
        g.transpose();
        g
    }

    /// Return `true` if the graph is (weakly) connected.
    ///
    /// See [`algorithms::is_connected`].
    pub fn is_connected(&self) -> bool {
        algorithms::is_connected(self)
    }

    /// See [`algorithms::is_strongly_connected`].
    pub fn is_strongly_connected(&self) -> Result<bool> {
        algorithms::is_strongly_connected(self)
    }

    /// See [`algorithms::has_cycle`].
    pub fn has_cycle(&self) -> bool {
        algorithms::has_cycle(self)
    }

    /// See [`algorithms::weak_components`].
    pub fn weak_components(&self) -> Vec<Vec<Vertex>> {
        algorithms::weak_components(self)
    }

    /// Return the number of vertices with odd [`degree`](Graph::degree).
    pub fn num_odd_degree_vertices(&self) -> usize {
        algorithms::num_odd_degree_vertices(self)
    }

    /// See [`algorithms::eulerian`].
    pub fn eulerian(&self) -> Eulerian {
        algorithms::eulerian(self)
    }

    /// See [`search::dfs_order_lists`].
    pub fn dfs_order_lists(&self) -> Vec<Vec<Vertex>> {
        search::dfs_order_lists(self)
    }

    /// See [`search::bfs_order_lists`].
    pub fn bfs_order_lists(&self) -> Vec<Vec<Vertex>> {
        search::bfs_order_lists(self)
    }

    /// See [`search::dfs_tree`].
    pub fn dfs_tree(&self, root: Vertex) -> Option<Self> {
        search::dfs_tree(self, root)
    }

    /// See [`search::bfs_tree`].
    pub fn bfs_tree(&self, root: Vertex) -> Option<Self> {
        search::bfs_tree(self, root)
    }

    /// See [`topological::kahn`].
    pub fn kahn_topological_sort(&self) -> Result<Vec<Vertex>> {
        topological::kahn(self)
    }

    /// See [`topological::dfs`].
    pub fn dfs_topological_sort(&self) -> Result<Vec<Vertex>> {
        topological::dfs(self)
    }

    /// See [`scc::kosaraju`].
    pub fn kosaraju_components(&self) -> Result<Vec<Vec<Vertex>>> {
        scc::kosaraju(self)
    }
}

impl<W: PrimInt> Graph<W> {
    /// Return the sum of all edge weights.
    ///
    /// Each edge of an undirected graph is counted once, unweighted edges
    /// count as zero. Returns `None` if the sum overflows `W`.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_edgegraph::{Graph, Kind};
    ///
    /// let g = Graph::with_weights(Kind::Undirected, vec![1, 2], vec![(1, 2), (2, 2)], vec![3, 4]).unwrap();
    /// assert_eq!(g.total_weight(), Some(7));
    ///
    /// let g = Graph::with_weights(Kind::Directed, vec![1, 2], vec![(1, 2), (2, 1)], vec![i32::MAX, 1]).unwrap();
    /// assert_eq!(g.total_weight(), None);
    /// ```
    pub fn total_weight(&self) -> Option<W> {
        // loops of an undirected graph are stored as consecutive copies, the
        // set holds the vertices with an unmatched copy
        let mut open_loops = HashSet::new();
        let mut sum = W::zero();
        for e in &self.edges {
            let counted = match self.kind {
                Kind::Directed => true,
                Kind::Undirected if e.is_loop() => {
                    if open_loops.insert(e.src()) {
                        true
                    } else {
                        open_loops.remove(&e.src());
                        false
                    }
                }
                Kind::Undirected => e.src() < e.snk(),
            };
            if let (true, Some(w)) = (counted, e.weight()) {
                sum = sum.checked_add(&w)?;
            }
        }
        Some(sum)
    }

    /// See [`mst::kruskal`].
    pub fn kruskal_tree(&self) -> Result<Self> {
        mst::kruskal(self)
    }

    /// See [`mst::kruskal_forest`].
    pub fn kruskal_forest(&self) -> Result<Self> {
        mst::kruskal_forest(self)
    }

    /// See [`mst::prim`].
    pub fn prim_tree(&self) -> Result<Self> {
        mst::prim(self)
    }
}

impl<W: fmt::Display> fmt::Display for Graph<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "V = {{")?;
        for (i, u) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", u)?;
        }
        write!(f, "}}; A = {{")?;
        for (i, e) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "}};")
    }
}
