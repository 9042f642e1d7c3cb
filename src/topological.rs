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

//! Topological sorting of directed acyclic graphs.
//!
//! Both algorithms return an order of all vertices such that each edge
//! points from an earlier to a later vertex. They may return different
//! orders for the same graph.

use crate::adjacencies::Adjacencies;
use crate::algorithms::has_cycle;
use crate::edge::Vertex;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::search::dfs;

use tracing::{debug, trace};

fn check_directed<W: Copy>(g: &Graph<W>) -> Result<()> {
    if g.is_directed() {
        Ok(())
    } else {
        Err(Error::UnsupportedOperation("topological sort requires a directed graph"))
    }
}

/// Run Kahn's algorithm.
///
/// The algorithm works on a copy of the graph. It repeatedly removes the
/// first vertex (in vertex order) with in-degree zero and appends it to
/// the order.
///
/// Fails with [`Error::Cyclic`] if at some point no vertex of in-degree
/// zero remains and with [`Error::UnsupportedOperation`] for undirected
/// graphs.
///
/// # Example
///
/// ```
/// use rs_edgegraph::{Graph, Error};
/// use rs_edgegraph::topological::kahn;
///
/// let mut g: Graph = Graph::directed(vec![1, 2, 3], vec![(1, 2), (2, 3), (3, 1)]).unwrap();
/// assert_eq!(kahn(&g), Err(Error::Cyclic));
///
/// g.remove_edge((3, 1));
/// assert_eq!(kahn(&g), Ok(vec![1, 2, 3]));
/// ```
pub fn kahn<W: Copy>(g: &Graph<W>) -> Result<Vec<Vertex>> {
    check_directed(g)?;
    debug!(vertices = g.num_vertices(), edges = g.num_edges(), "Kahn's topological sort");

    let mut work = g.clone();
    let mut order = Vec::with_capacity(g.num_vertices());
    while work.num_vertices() > 0 {
        let u = work
            .vertices()
            .iter()
            .cloned()
            .find(|&u| work.degree(u) == 0)
            .ok_or(Error::Cyclic)?;
        trace!(vertex = u, "source removed");
        work.remove_vertex(u);
        order.push(u);
    }

    Ok(order)
}

/// Run a depth-first search based topological sort.
///
/// A search is started from each unvisited vertex in vertex order. Every
/// vertex is appended after all its descendants, the reversed sequence is
/// returned.
///
/// Fails with [`Error::Cyclic`] if the graph contains a cycle and with
/// [`Error::UnsupportedOperation`] for undirected graphs.
///
/// # Example
///
/// ```
/// use rs_edgegraph::Graph;
/// use rs_edgegraph::topological::dfs;
///
/// let g: Graph = Graph::directed(vec![1, 2, 3, 4], vec![(1, 2), (3, 4), (4, 2)]).unwrap();
/// assert_eq!(dfs(&g), Ok(vec![3, 4, 1, 2]));
/// ```
pub fn dfs<W: Copy>(g: &Graph<W>) -> Result<Vec<Vertex>> {
    check_directed(g)?;
    if has_cycle(g) {
        return Err(Error::Cyclic);
    }
    debug!(vertices = g.num_vertices(), edges = g.num_edges(), "DFS topological sort");

    let adj = Adjacencies::outgoing(g);
    let mut visited = vec![false; adj.num_vertices()];
    let mut finished = Vec::with_capacity(adj.num_vertices());
    for u in 0..adj.num_vertices() {
        if !visited[u] {
            dfs::post_order(&adj, u, &mut visited, &mut finished);
        }
    }

    Ok(finished.into_iter().rev().map(|i| adj.vertex(i)).collect())
}
