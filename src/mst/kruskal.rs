// Copyright (c) 2016-2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Implementation of Kruskal's algorithm

use super::{check_spanning_tree, check_weighted_undirected};
use crate::edge::{Edge, Vertex};
use crate::error::Result;
use crate::graph::{Graph, Kind};
use crate::num::traits::PrimInt;

use std::cmp::{max, min};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::{debug, trace};

/// Run Kruskal's algorithm to solve the *Minimum Spanning Tree*
/// problem on a graph.
///
/// `g` must be an undirected, connected graph with weights on all edges,
/// otherwise [`Error::UnsupportedOperation`](crate::Error::UnsupportedOperation)
/// is returned.
///
/// # Example
///
/// ```
/// use rs_edgegraph::{Graph, Kind};
/// use rs_edgegraph::mst::kruskal;
///
/// let g = Graph::with_weights(
///     Kind::Undirected,
///     vec![1, 2, 3, 4],
///     vec![(1, 2), (2, 3), (3, 4), (4, 1), (1, 3)],
///     vec![1, 2, 1, 4, 5],
/// ).unwrap();
///
/// let tree = kruskal(&g).unwrap();
/// assert_eq!(tree.total_weight(), Some(4));
/// assert_eq!(tree.num_edges(), 2 * 3);
/// assert!(tree.has_edge(&(1, 2).into()));
/// assert!(tree.has_edge(&(3, 4).into()));
/// assert!(tree.has_edge(&(2, 3).into()));
/// ```
pub fn kruskal<W: PrimInt>(g: &Graph<W>) -> Result<Graph<W>> {
    check_spanning_tree(g)?;
    Ok(run(g))
}

/// Run Kruskal's algorithm to compute a *Minimum Spanning Forest*.
///
/// This is [`kruskal`] without the requirement of a connected graph. The
/// returned graph contains a minimum spanning tree of each component.
pub fn kruskal_forest<W: PrimInt>(g: &Graph<W>) -> Result<Graph<W>> {
    check_weighted_undirected(g)?;
    Ok(run(g))
}

fn run<W: PrimInt>(g: &Graph<W>) -> Graph<W> {
    debug!(vertices = g.num_vertices(), edges = g.num_edges(), "Kruskal's spanning tree");

    let mut edges = candidate_edges(g);
    edges.sort_by_key(|e| e.weight());

    let index: HashMap<Vertex, usize> = g.vertices().iter().enumerate().map(|(i, &u)| (u, i)).collect();

    // parent map for finding
    let mut comps = vec![Component::Root(0); g.num_vertices()];
    let mut tree = Graph::with_distinct_vertices(Kind::Undirected, g.vertices().to_vec());
    let mut ntree = 0;

    for e in edges {
        let (u, v) = match (index.get(&e.src()), index.get(&e.snk())) {
            (Some(&u), Some(&v)) => (u, v),
            _ => continue,
        };
        let (uroot, udepth) = find_root(&comps, u);
        let (vroot, vdepth) = find_root(&comps, v);
        if uroot == vroot {
            trace!(src = e.src(), snk = e.snk(), "edge closes a cycle");
            continue;
        }

        trace!(src = e.src(), snk = e.snk(), "tree edge");
        tree.push_edge(e);
        ntree += 1;
        if ntree + 1 == g.num_vertices() {
            break;
        }
        if udepth < vdepth {
            comps[uroot] = Component::Node(vroot);
        } else {
            comps[vroot] = Component::Node(uroot);
            if udepth == vdepth {
                comps[uroot] = Component::Root(udepth + 1);
            }
        }
    }

    tree
}

/// Return one edge per pair of adjacent vertices.
///
/// Mirrored and parallel edges are merged keeping the lowest weight, loops
/// are dropped. The edges are returned in the order their pair first
/// appears.
fn candidate_edges<W: PrimInt>(g: &Graph<W>) -> Vec<Edge<W>> {
    let mut edges: Vec<Edge<W>> = vec![];
    let mut pairs: HashMap<(Vertex, Vertex), usize> = HashMap::new();
    for &e in g.edges() {
        if e.is_loop() {
            continue;
        }
        let (u, v) = e.enodes();
        match pairs.entry((min(u, v), max(u, v))) {
            Entry::Occupied(pos) => {
                let cand = &mut edges[*pos.get()];
                if e.weight() < cand.weight() {
                    *cand = e;
                }
            }
            Entry::Vacant(pos) => {
                pos.insert(edges.len());
                edges.push(e);
            }
        }
    }
    edges
}

/// Union-Find data-structure for Kruskal.
#[derive(Clone, Copy)]
enum Component {
    /// The root element with the tree's depth.
    Root(usize),
    /// An inner node with the parent node.
    Node(usize),
}

/// Return the root node and the tree's depth of node `u`.
fn find_root(comps: &[Component], u: usize) -> (usize, usize) {
    let mut v = u;
    loop {
        match comps[v] {
            Component::Node(parent) => v = parent,
            Component::Root(depth) => return (v, depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{candidate_edges, kruskal, kruskal_forest};
    use crate::{Edge, Error, Graph, Kind};

    #[test]
    fn test_candidates() {
        let g = Graph::with_weights(
            Kind::Undirected,
            vec![1, 2, 3],
            vec![(1, 2), (2, 2), (2, 1), (2, 3)],
            vec![5, 1, 3, 4],
        )
        .unwrap();
        let c = candidate_edges(&g);
        assert_eq!(c, vec![Edge::new(2, 1), Edge::new(2, 3)]);
        assert_eq!(c[0].weight(), Some(3));
    }

    #[test]
    fn test_forest() {
        let g = Graph::with_weights(
            Kind::Undirected,
            vec![1, 2, 3, 4, 5],
            vec![(1, 2), (2, 3), (3, 1), (4, 5)],
            vec![3, 1, 2, 7],
        )
        .unwrap();
        assert!(matches!(kruskal(&g), Err(Error::UnsupportedOperation(_))));

        let f = kruskal_forest(&g).unwrap();
        assert_eq!(f.vertices(), g.vertices());
        assert_eq!(f.total_weight(), Some(1 + 2 + 7));
        assert!(!f.has_cycle());
        assert_eq!(f.weak_components().len(), 2);
    }

    #[test]
    fn test_rejects() {
        let g: Graph = Graph::undirected(vec![1, 2], vec![(1, 2)]).unwrap();
        assert!(matches!(kruskal(&g), Err(Error::UnsupportedOperation(_))));

        let g = Graph::with_weights(Kind::Directed, vec![1, 2], vec![(1, 2)], vec![1]).unwrap();
        assert!(matches!(kruskal(&g), Err(Error::UnsupportedOperation(_))));
    }

    #[test]
    fn test_single_vertex() {
        let g: Graph = Graph::from_vertices(Kind::Undirected, vec![3]).unwrap();
        let t = kruskal(&g).unwrap();
        assert_eq!(t.vertices(), &[3]);
        assert_eq!(t.num_edges(), 0);
    }
}
