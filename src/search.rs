/*
 * Copyright (c) 2019, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! # Graph search algorithms.
//!
//! This module contains the two basic traversals, depth-first search and
//! breadth-first search. Both work on an [`Adjacencies`] snapshot of a graph
//! together with a `visited` array indexed by vertex *position*. The array
//! is owned by the caller, so several searches can share it, e.g. to
//! visit all components of a graph.
//!
//! The searches report their progress through [`Visit`] events passed to a
//! callback. Neighbors are visited in adjacency order, hence the result of
//! a search is completely determined by the insertion order of vertices and
//! edges.
//!
//! The functions at the top level of this module run a search on a
//! [`Graph`] and collect orders or trees from it.

pub mod bfs;
pub mod dfs;

use crate::adjacencies::Adjacencies;
use crate::edge::{Edge, Vertex};
use crate::graph::Graph;

use std::collections::VecDeque;

/// Event reported by a search.
///
/// Vertices are given by position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visit<W> {
    /// The vertex is reached for the first time.
    Discover(usize),
    /// The edge from the first to the second vertex reaches the second vertex
    /// for the first time. The third field is the weight of the edge.
    TreeEdge(usize, usize, Option<W>),
    /// All neighbors of the vertex have been handled.
    Finish(usize),
}

/// Return the depth-first discovery order of each component.
///
/// A new search is started from each vertex (in vertex order) that has not
/// been visited by a previous search. Each returned list contains the
/// vertices reached by one search in the order of discovery, i.e. the
/// preorder of the search. This is not the reversed finishing order, for
/// that see [`topological::dfs`](crate::topological::dfs). The edges are
/// followed in their direction.
///
/// # Example
///
/// ```
/// use rs_edgegraph::Graph;
///
/// let g: Graph = Graph::undirected(vec![1, 2, 3, 4, 5], vec![(1, 2), (1, 3), (2, 4)]).unwrap();
/// assert_eq!(g.dfs_order_lists(), vec![vec![1, 2, 4, 3], vec![5]]);
/// assert_eq!(g.bfs_order_lists(), vec![vec![1, 2, 3, 4], vec![5]]);
/// ```
pub fn dfs_order_lists<W: Copy>(g: &Graph<W>) -> Vec<Vec<Vertex>> {
    let adj = Adjacencies::outgoing(g);
    let mut visited = vec![false; adj.num_vertices()];
    let mut lists = vec![];
    for u in 0..adj.num_vertices() {
        if !visited[u] {
            let mut order = vec![];
            dfs::start(&adj, u, &mut visited, &mut |visit| {
                if let Visit::Discover(v) = visit {
                    order.push(adj.vertex(v));
                }
            });
            lists.push(order);
        }
    }
    lists
}

/// Return the breadth-first discovery order of each component.
///
/// This is the breadth-first counterpart of [`dfs_order_lists`].
pub fn bfs_order_lists<W: Copy>(g: &Graph<W>) -> Vec<Vec<Vertex>> {
    let adj = Adjacencies::outgoing(g);
    let mut visited = vec![false; adj.num_vertices()];
    let mut queue = VecDeque::new();
    let mut lists = vec![];
    for u in 0..adj.num_vertices() {
        if !visited[u] {
            let mut order = vec![];
            bfs::start(&adj, u, &mut visited, &mut queue, &mut |visit| {
                if let Visit::Discover(v) = visit {
                    order.push(adj.vertex(v));
                }
            });
            lists.push(order);
        }
    }
    lists
}

/// Return the depth-first search tree rooted at `root`.
///
/// The tree is a graph of the same kind containing the reached vertices in
/// order of discovery and the tree edges with their weights. Returns `None`
/// if `root` does not exist.
///
/// # Example
///
/// ```
/// use rs_edgegraph::{Edge, Graph};
///
/// let g: Graph = Graph::directed(vec![1, 2, 3, 4], vec![(1, 2), (1, 3), (2, 3), (4, 1)]).unwrap();
/// let t = g.dfs_tree(1).unwrap();
/// assert_eq!(t.vertices(), &[1, 2, 3]);
/// assert_eq!(t.edges(), &[Edge::new(1, 2), Edge::new(2, 3)]);
///
/// let t = g.bfs_tree(1).unwrap();
/// assert_eq!(t.edges(), &[Edge::new(1, 2), Edge::new(1, 3)]);
/// ```
pub fn dfs_tree<W: Copy>(g: &Graph<W>, root: Vertex) -> Option<Graph<W>> {
    let adj = Adjacencies::outgoing(g);
    let src = adj.index(root)?;
    let mut visited = vec![false; adj.num_vertices()];
    let mut vertices = vec![];
    let mut edges = vec![];
    dfs::start(&adj, src, &mut visited, &mut |visit| collect_tree(&adj, visit, &mut vertices, &mut edges));
    Some(build_tree(g, vertices, edges))
}

/// Return the breadth-first search tree rooted at `root`.
///
/// This is the breadth-first counterpart of [`dfs_tree`].
pub fn bfs_tree<W: Copy>(g: &Graph<W>, root: Vertex) -> Option<Graph<W>> {
    let adj = Adjacencies::outgoing(g);
    let src = adj.index(root)?;
    let mut visited = vec![false; adj.num_vertices()];
    let mut vertices = vec![];
    let mut edges = vec![];
    bfs::start(&adj, src, &mut visited, &mut VecDeque::new(), &mut |visit| {
        collect_tree(&adj, visit, &mut vertices, &mut edges)
    });
    Some(build_tree(g, vertices, edges))
}

fn collect_tree<W: Copy>(adj: &Adjacencies<W>, visit: Visit<W>, vertices: &mut Vec<Vertex>, edges: &mut Vec<Edge<W>>) {
    match visit {
        Visit::Discover(u) => vertices.push(adj.vertex(u)),
        Visit::TreeEdge(u, v, w) => edges.push(Edge::from_parts(adj.vertex(u), adj.vertex(v), w)),
        Visit::Finish(_) => {}
    }
}

fn build_tree<W: Copy>(g: &Graph<W>, vertices: Vec<Vertex>, edges: Vec<Edge<W>>) -> Graph<W> {
    let mut tree = Graph::with_distinct_vertices(g.kind(), vertices);
    for e in edges {
        tree.push_edge(e);
    }
    tree
}

#[cfg(test)]
mod tests {
    use crate::{classes, Edge, Graph, Kind};

    #[test]
    fn test_order_lists_follow_direction() {
        let g: Graph = Graph::directed(vec![1, 2, 3], vec![(2, 1), (3, 2)]).unwrap();
        assert_eq!(g.dfs_order_lists(), vec![vec![1], vec![2], vec![3]]);
        let g: Graph = Graph::undirected(vec![1, 2, 3], vec![(2, 1), (3, 2)]).unwrap();
        assert_eq!(g.dfs_order_lists(), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_order_lists_are_preorders() {
        let g: Graph = Graph::directed(vec![1, 2, 3], vec![(1, 2), (1, 3)]).unwrap();
        assert_eq!(g.dfs_order_lists(), vec![vec![1, 2, 3]]);
        assert_eq!(g.dfs_topological_sort(), Ok(vec![1, 3, 2]));
    }

    #[test]
    fn test_bfs_levels() {
        // a star: the center is discovered first, then all rays
        let g: Graph = classes::star(Kind::Undirected, 5);
        assert_eq!(g.bfs_order_lists(), vec![vec![0, 1, 2, 3, 4, 5]]);
        let t = g.bfs_tree(3).unwrap();
        assert_eq!(t.vertices(), &[3, 0, 1, 2, 4, 5]);
        assert_eq!(t.num_edges(), 2 * 5);
    }

    #[test]
    fn test_trees_are_spanning_on_connected_graphs() {
        let g: Graph = classes::complete_graph(Kind::Undirected, 6);
        for t in [g.dfs_tree(0).unwrap(), g.bfs_tree(0).unwrap()].iter() {
            assert_eq!(t.num_vertices(), 6);
            assert_eq!(t.num_edges(), 2 * 5);
            assert!(t.is_connected());
            assert!(!t.has_cycle());
        }
        // depth-first on a complete graph is a path
        let t = g.dfs_tree(0).unwrap();
        assert!(t.has_edge(&Edge::new(4, 5)));
        assert!(g.dfs_tree(17).is_none());
    }

    #[test]
    fn test_tree_keeps_weights() {
        let g = Graph::with_weights(Kind::Undirected, vec![1, 2, 3], vec![(1, 2), (2, 3)], vec![7, 9]).unwrap();
        let t = g.dfs_tree(3).unwrap();
        assert_eq!(t.edge_between(3, 2).unwrap().weight(), Some(9));
        assert_eq!(t.edge_between(2, 1).unwrap().weight(), Some(7));
    }
}
