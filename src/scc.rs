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

//! Strongly connected components.

use crate::adjacencies::Adjacencies;
use crate::edge::Vertex;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::search::dfs;

use tracing::{debug, trace};

/// Run Kosaraju's algorithm to compute the strongly connected components
/// of a directed graph.
///
/// The first pass records the finishing order of a depth-first search
/// over the whole graph. The second pass runs a depth-first search on the
/// transposed graph from each unvisited vertex in reverse finishing order,
/// every such search yields one component.
///
/// The components are returned in the order they are found. Each component
/// lists its vertices in the finishing order of its search, i.e. the
/// deepest vertex first and the start vertex last.
///
/// Fails with [`Error::UnsupportedOperation`] for undirected graphs.
///
/// # Example
///
/// ```
/// use rs_edgegraph::Graph;
/// use rs_edgegraph::scc::kosaraju;
///
/// let g: Graph = Graph::directed(vec![1, 2, 3, 4], vec![(1, 2), (2, 3), (3, 1), (3, 4)]).unwrap();
/// assert_eq!(kosaraju(&g), Ok(vec![vec![2, 3, 1], vec![4]]));
/// ```
pub fn kosaraju<W: Copy>(g: &Graph<W>) -> Result<Vec<Vec<Vertex>>> {
    if !g.is_directed() {
        return Err(Error::UnsupportedOperation("strongly connected components require a directed graph"));
    }
    debug!(vertices = g.num_vertices(), edges = g.num_edges(), "Kosaraju's components");

    let adj = Adjacencies::outgoing(g);
    let n = adj.num_vertices();
    let mut visited = vec![false; n];
    let mut finished = Vec::with_capacity(n);
    for u in 0..n {
        if !visited[u] {
            dfs::post_order(&adj, u, &mut visited, &mut finished);
        }
    }

    let transposed = g.transposed();
    let radj = Adjacencies::outgoing(&transposed);
    let mut visited = vec![false; n];
    let mut components = vec![];
    for &u in finished.iter().rev() {
        if !visited[u] {
            let mut component = vec![];
            dfs::post_order(&radj, u, &mut visited, &mut component);
            let component: Vec<Vertex> = component.into_iter().map(|i| radj.vertex(i)).collect();
            trace!(root = adj.vertex(u), size = component.len(), "component");
            components.push(component);
        }
    }

    Ok(components)
}
