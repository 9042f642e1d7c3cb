// Copyright (c) 2016, 2017, 2018, 2020, 2022, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Implementation of Prim's algorithm

use super::check_spanning_tree;
use crate::adjacencies::Adjacencies;
use crate::edge::Edge;
use crate::error::Result;
use crate::graph::{Graph, Kind};
use crate::num::traits::PrimInt;

use tracing::{debug, trace};

/// Run Prim's algorithm to solve the *Minimum Spanning Tree*
/// problem on a graph.
///
/// The tree grows from the first vertex. Each vertex keeps the weight of
/// the cheapest edge connecting it to the tree (its *key*, `None` while no
/// such edge is known) and the tree vertex at the other end of that edge
/// (its *parent*). In each step the vertex with the smallest key (the
/// first one on ties) joins the tree and the keys of its neighbors are
/// updated.
///
/// `g` must be an undirected, connected graph with weights on all edges,
/// otherwise [`Error::UnsupportedOperation`](crate::Error::UnsupportedOperation)
/// is returned.
///
/// # Example
///
/// ```
/// use rs_edgegraph::{Graph, Kind};
/// use rs_edgegraph::mst::prim;
///
/// let g = Graph::with_weights(
///     Kind::Undirected,
///     vec![1, 2, 3, 4],
///     vec![(1, 2), (2, 3), (3, 4), (4, 1), (1, 3)],
///     vec![1, 2, 1, 4, 5],
/// ).unwrap();
///
/// let tree = prim(&g).unwrap();
/// assert_eq!(tree.total_weight(), Some(4));
/// assert_eq!(tree.edges().iter().step_by(2).map(|e| e.enodes()).collect::<Vec<_>>(),
///            vec![(1, 2), (2, 3), (3, 4)]);
/// ```
pub fn prim<W: PrimInt>(g: &Graph<W>) -> Result<Graph<W>> {
    check_spanning_tree(g)?;
    debug!(vertices = g.num_vertices(), edges = g.num_edges(), "Prim's spanning tree");

    let adj = Adjacencies::outgoing(g);
    let n = adj.num_vertices();

    let mut key: Vec<Option<W>> = vec![None; n];
    let mut parent = vec![None; n];
    let mut in_queue = vec![true; n];
    let mut queue: Vec<usize> = (0..n).collect();
    if n > 0 {
        key[0] = Some(W::zero());
    }

    while !queue.is_empty() {
        let mut best = 0;
        for (i, &u) in queue.iter().enumerate() {
            if is_less(key[u], key[queue[best]]) {
                best = i;
            }
        }
        let u = queue.remove(best);
        in_queue[u] = false;
        trace!(vertex = adj.vertex(u), "joins tree");

        for &(v, w) in adj.weighted_neighs(u) {
            if let Some(w) = w {
                if in_queue[v] && key[v].map_or(true, |k| w < k) {
                    key[v] = Some(w);
                    parent[v] = Some(u);
                }
            }
        }
    }

    let mut tree = Graph::with_distinct_vertices(Kind::Undirected, g.vertices().to_vec());
    for (v, p) in parent.into_iter().enumerate() {
        if let (Some(u), Some(w)) = (p, key[v]) {
            tree.push_edge(Edge::weighted(adj.vertex(u), adj.vertex(v), w));
        }
    }
    Ok(tree)
}

/// Compare two keys, `None` is larger than any weight.
fn is_less<W: Ord>(a: Option<W>, b: Option<W>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::prim;
    use crate::mst::kruskal;
    use crate::{classes, Error, Graph, Kind};

    #[test]
    fn test_parallel_edges_and_loops() {
        let g = Graph::with_weights(
            Kind::Undirected,
            vec![1, 2, 3],
            vec![(1, 2), (1, 2), (2, 2), (2, 3), (3, 1)],
            vec![9, 4, 1, 6, 5],
        )
        .unwrap();
        let t = prim(&g).unwrap();
        assert_eq!(t.total_weight(), Some(9));
        assert_eq!(t.edge_between(1, 2).unwrap().weight(), Some(4));
        assert_eq!(t.edge_between(1, 3).unwrap().weight(), Some(5));
        assert_eq!(kruskal(&g).unwrap().total_weight(), Some(9));
    }

    #[test]
    fn test_negative_weights() {
        let g = Graph::with_weights(
            Kind::Undirected,
            vec![1, 2, 3],
            vec![(1, 2), (2, 3), (3, 1)],
            vec![-3, -1, -2],
        )
        .unwrap();
        assert_eq!(prim(&g).unwrap().total_weight(), Some(-5));
    }

    #[test]
    fn test_maximal_weights() {
        let g = Graph::with_weights(Kind::Undirected, vec![1, 2], vec![(1, 2)], vec![i32::MAX]).unwrap();
        let t = prim(&g).unwrap();
        assert_eq!(t.num_edges(), 2);
        assert!(t.is_connected());
        assert_eq!(t.total_weight(), Some(i32::MAX));
        assert_eq!(t.total_weight(), kruskal(&g).unwrap().total_weight());

        let g = Graph::with_weights(
            Kind::Undirected,
            vec![1, 2, 3],
            vec![(1, 2), (2, 3), (3, 1)],
            vec![i32::MAX, i32::MAX, i32::MAX - 1],
        )
        .unwrap();
        let (p, k) = (prim(&g).unwrap(), kruskal(&g).unwrap());
        assert_eq!(p.num_edges(), k.num_edges());
        assert_eq!(p.edge_between(1, 3).unwrap().weight(), Some(i32::MAX - 1));
        // two maximal weights do not fit into an i32
        assert_eq!(p.total_weight(), None);
        assert_eq!(k.total_weight(), None);
    }

    #[test]
    fn test_rejects() {
        let g: Graph = classes::cycle(Kind::Undirected, 4);
        assert!(matches!(prim(&g), Err(Error::UnsupportedOperation(_))));

        let g = Graph::with_weights(Kind::Undirected, vec![1, 2, 3], vec![(1, 2)], vec![1]).unwrap();
        assert!(matches!(prim(&g), Err(Error::UnsupportedOperation(_))));
    }

    #[test]
    fn test_empty() {
        let g: Graph = Graph::new(Kind::Undirected);
        assert_eq!(prim(&g).unwrap().num_vertices(), 0);
    }
}
