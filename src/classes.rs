// Copyright (c) 2015-2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Some common graph classes.
//!
//! All generators number the vertices `0, 1, 2, ...` and create unweighted
//! edges.

use crate::edge::{Edge, Vertex};
use crate::graph::{Graph, Kind};

fn vertices<W: Copy>(kind: Kind, n: usize) -> Graph<W> {
    Graph::with_distinct_vertices(kind, (0..n as Vertex).collect())
}

/// Returns a path with `m` edges.
///
/// The path is directed from `0` to `m` if `kind` is directed.
pub fn path<W: Copy>(kind: Kind, m: usize) -> Graph<W> {
    let mut g = vertices(kind, m + 1);
    for u in 0..m as Vertex {
        g.push_edge(Edge::new(u, u + 1));
    }
    g
}

/// Returns a cycle with length `n`.
///
/// The cycle is directed if `kind` is directed.
pub fn cycle<W: Copy>(kind: Kind, n: usize) -> Graph<W> {
    let mut g = vertices(kind, n);
    let n = n as Vertex;
    for u in 0..n {
        g.push_edge(Edge::new(u, (u + 1) % n));
    }
    g
}

/// Returns the complete graph on `n` vertices.
///
/// If `kind` is directed, edges run from smaller to larger vertices.
pub fn complete_graph<W: Copy>(kind: Kind, n: usize) -> Graph<W> {
    let mut g = vertices(kind, n);
    let n = n as Vertex;
    for u in 0..n {
        for v in u + 1..n {
            g.push_edge(Edge::new(u, v));
        }
    }
    g
}

/// Returns a complete bipartite graph on `n+m` vertices.
///
/// The edges will run between the first n vertices and the last m vertices.
/// If `kind` is directed, the edges will run in this direction.
pub fn complete_bipartite<W: Copy>(kind: Kind, n: usize, m: usize) -> Graph<W> {
    let mut g = vertices(kind, n + m);
    let (n, m) = (n as Vertex, m as Vertex);
    for u in 0..n {
        for v in n..n + m {
            g.push_edge(Edge::new(u, v));
        }
    }
    g
}

/// Returns a star graph with `n` rays.
///
/// The center vertex will be `0`. This is equivalent to
/// `complete_bipartite(kind, 1, n)`.
///
/// If `kind` is directed, the source of all edges will be the center
/// vertex.
pub fn star<W: Copy>(kind: Kind, n: usize) -> Graph<W> {
    complete_bipartite(kind, 1, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        let g: Graph = path(Kind::Undirected, 4);
        assert_eq!((g.num_vertices(), g.num_edges()), (5, 8));
        let g: Graph = cycle(Kind::Directed, 4);
        assert_eq!((g.num_vertices(), g.num_edges()), (4, 4));
        let g: Graph = complete_graph(Kind::Directed, 5);
        assert_eq!((g.num_vertices(), g.num_edges()), (5, 10));
        let g: Graph = complete_bipartite(Kind::Undirected, 2, 3);
        assert_eq!((g.num_vertices(), g.num_edges()), (5, 12));
    }

    #[test]
    fn test_star() {
        let g: Graph = star(Kind::Directed, 3);
        assert_eq!(g.adjacency_list(), vec![vec![1, 2, 3], vec![], vec![], vec![]]);
        assert_eq!(g.degree(0), 0);
        assert_eq!(g.degree(3), 1);
    }

    #[test]
    fn test_empty_cycle() {
        let g: Graph = cycle(Kind::Undirected, 0);
        assert_eq!(g.num_vertices(), 0);
    }
}
