/*
 * Copyright (c) 2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

use rs_edgegraph::classes;
use rs_edgegraph::mst::{kruskal, prim};
use rs_edgegraph::scc::kosaraju;
use rs_edgegraph::topological;
use rs_edgegraph::{Edge, Graph, Kind, Vertex};

use std::collections::HashSet;

const SIZES: &[usize] = &[1, 2, 3, 5, 8, 13];

/// A graph with a pseudo-random edge set on `n` vertices.
fn scrambled(kind: Kind, n: usize, m: usize) -> Graph {
    let vertices: Vec<Vertex> = (0..n as Vertex).map(|u| 10 * u + 1).collect();
    let edges: Vec<(Vertex, Vertex)> = (0..m)
        .map(|i| {
            let u = (i * 7 + 3) % n;
            let v = (i * 11 + 5) % n;
            (vertices[u], vertices[v])
        })
        .collect();
    Graph::with_edges(kind, vertices, edges).unwrap()
}

/// A binary tree where vertex `i > 0` hangs below `(i - 1) / 2`.
fn tree(n: usize) -> Graph {
    let edges: Vec<(Vertex, Vertex)> = (1..n).map(|i| (((i - 1) / 2) as Vertex, i as Vertex)).collect();
    Graph::undirected(0..n as Vertex, edges).unwrap()
}

fn is_topological(g: &Graph, order: &[Vertex]) -> bool {
    let pos = |u: Vertex| order.iter().position(|&v| v == u);
    order.len() == g.num_vertices()
        && g.edges().iter().all(|e| match (pos(e.src()), pos(e.snk())) {
            (Some(i), Some(j)) => i < j,
            _ => false,
        })
}

#[test]
fn test_add_remove_round_trip() {
    for &kind in &[Kind::Undirected, Kind::Directed] {
        for &n in SIZES {
            let mut g = scrambled(kind, n, 2 * n);
            let before: Vec<(Vertex, Vertex)> = g.edges().iter().map(Edge::enodes).collect();
            for &(u, v) in &[(g.vertices()[0], g.vertices()[n - 1]), (g.vertices()[n / 2], g.vertices()[n / 2])] {
                g.add_edge((u, v)).unwrap();
                assert!(g.remove_edge((u, v)));
                let after: Vec<(Vertex, Vertex)> = g.edges().iter().map(Edge::enodes).collect();
                assert_eq!(before, after);
            }
        }
    }
}

#[test]
fn test_undirected_edge_count_even() {
    for &n in SIZES {
        let mut g = scrambled(Kind::Undirected, n, 3 * n);
        assert_eq!(g.num_edges() % 2, 0);

        let u = g.vertices()[0];
        g.add_edge((u, u)).unwrap();
        assert_eq!(g.num_edges() % 2, 0);
        let loops = g.edges().iter().filter(|e| e.enodes() == (u, u)).count();
        assert!(loops >= 2 && loops % 2 == 0);

        g.remove_vertex(u);
        assert_eq!(g.num_edges() % 2, 0);
    }
}

#[test]
fn test_trees_are_acyclic() {
    for &n in SIZES {
        let mut g = tree(n);
        assert_eq!(g.num_edges(), 2 * (n - 1));
        assert!(g.is_connected());
        assert!(!g.has_cycle());

        // Any additional edge closes a cycle, even a parallel edge or a loop.
        g.add_edge((0, n as Vertex - 1)).unwrap();
        assert!(g.has_cycle());
    }

    for g in &[classes::path::<i32>(Kind::Undirected, 6), classes::star(Kind::Undirected, 6)] {
        assert!(!g.has_cycle());
        let mut h = g.clone();
        h.add_edge((1, 2)).unwrap();
        assert!(h.has_cycle());
    }
}

#[test]
fn test_topological_sorts_are_valid() {
    for &n in SIZES {
        // Orient each edge of a scrambled graph from the smaller to the
        // larger vertex to obtain a DAG.
        let s = scrambled(Kind::Directed, n, 3 * n);
        let edges: Vec<(Vertex, Vertex)> = s
            .edges()
            .iter()
            .filter(|e| !e.is_loop())
            .map(|e| (e.src().min(e.snk()), e.src().max(e.snk())))
            .collect();
        let g: Graph = Graph::directed(s.vertices().to_vec(), edges).unwrap();
        assert!(!g.has_cycle());

        let k = topological::kahn(&g).unwrap();
        let d = topological::dfs(&g).unwrap();
        assert!(is_topological(&g, &k));
        assert!(is_topological(&g, &d));
    }
}

#[test]
fn test_kosaraju_partitions_vertices() {
    for &n in SIZES {
        let g = scrambled(Kind::Directed, n, 2 * n);
        let comps = kosaraju(&g).unwrap();
        let mut seen = HashSet::new();
        for c in &comps {
            assert!(!c.is_empty());
            for &u in c {
                assert!(seen.insert(u), "vertex {} in two components", u);
            }
        }
        let all: HashSet<Vertex> = g.vertices().iter().cloned().collect();
        assert_eq!(seen, all);
    }
}

#[test]
fn test_spanning_tree_weights_agree() {
    for &n in SIZES {
        let base: Graph = classes::complete_graph(Kind::Undirected, n);
        let edges: Vec<(Vertex, Vertex)> = base.edges().iter().step_by(2).map(Edge::enodes).collect();
        let weights: Vec<i32> = (0..edges.len() as i32).map(|i| (i * 7 + 3) % 11 - 4).collect();
        let g = Graph::with_weights(Kind::Undirected, base.vertices().to_vec(), edges, weights).unwrap();

        let k = kruskal(&g).unwrap();
        let p = prim(&g).unwrap();
        assert_eq!(k.total_weight(), p.total_weight());
        assert_eq!(k.num_edges(), 2 * (n - 1));
        assert_eq!(p.num_edges(), 2 * (n - 1));
        assert!(!k.has_cycle());
        assert!(!p.has_cycle());
        assert!(k.is_connected());
        assert!(p.is_connected());
    }
}

#[test]
fn test_spanning_tree_weights_agree_on_large_weights() {
    for &n in SIZES {
        // The larger trees weigh more than half of i32::MAX, but still fit.
        let base: Graph = classes::complete_graph(Kind::Undirected, n);
        let edges: Vec<(Vertex, Vertex)> = base.edges().iter().step_by(2).map(Edge::enodes).collect();
        let weights: Vec<i32> = (0..edges.len() as i32)
            .map(|i| 100_000_000 + 5_000_000 * ((i * 7 + 3) % 11))
            .collect();
        let g = Graph::with_weights(Kind::Undirected, base.vertices().to_vec(), edges, weights).unwrap();

        let k = kruskal(&g).unwrap();
        let p = prim(&g).unwrap();
        assert_eq!(k.num_edges(), p.num_edges());
        assert!(k.total_weight().is_some());
        assert_eq!(k.total_weight(), p.total_weight());
    }

    for &n in SIZES {
        // A path of maximal weights, the only spanning tree is the path
        // itself.
        let edges: Vec<(Vertex, Vertex)> = (1..n as Vertex).map(|u| (u - 1, u)).collect();
        let weights = vec![i32::MAX; edges.len()];
        let g = Graph::with_weights(Kind::Undirected, 0..n as Vertex, edges, weights).unwrap();

        let k = kruskal(&g).unwrap();
        let p = prim(&g).unwrap();
        assert_eq!(k.num_edges(), 2 * (n - 1));
        assert_eq!(p.num_edges(), 2 * (n - 1));
        assert!(p.is_connected());
        assert_eq!(k.total_weight(), p.total_weight());
        let expected = if n <= 2 { Some(i32::MAX * (n as i32 - 1)) } else { None };
        assert_eq!(p.total_weight(), expected);
    }
}
