/*
 * Copyright (c) 2017, 2018, 2020, 2021, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Depth-first-search.
//!
//! # Example
//!
//! ```
//! use rs_edgegraph::{classes, Graph, Kind};
//! use rs_edgegraph::adjacencies::Adjacencies;
//! use rs_edgegraph::search::dfs;
//!
//! let g: Graph = classes::path(Kind::Directed, 4);
//! let adj = Adjacencies::outgoing(&g);
//!
//! let mut visited = vec![false; adj.num_vertices()];
//! dfs::mark(&adj, 2, &mut visited);
//! assert_eq!(visited, vec![false, false, true, true, true]);
//!
//! let mut visited = vec![false; adj.num_vertices()];
//! let mut order = vec![];
//! dfs::post_order(&adj, 0, &mut visited, &mut order);
//! assert_eq!(order, vec![4, 3, 2, 1, 0]);
//! ```

use super::Visit;
use crate::adjacencies::Adjacencies;

/// Run a depth-first search from the vertex at position `u`.
///
/// Only vertices with `visited[v] == false` are entered, each entered
/// vertex is marked. The search reports a [`Visit::Discover`] event when
/// entering a vertex, a [`Visit::TreeEdge`] event before descending along
/// an edge and a [`Visit::Finish`] event after all neighbors have been
/// handled.
///
/// The search is recursive, its depth is bounded by the number of
/// vertices.
pub fn start<W, F>(adj: &Adjacencies<W>, u: usize, visited: &mut [bool], f: &mut F)
where
    W: Copy,
    F: FnMut(Visit<W>),
{
    visited[u] = true;
    f(Visit::Discover(u));
    for &(v, w) in adj.weighted_neighs(u) {
        if !visited[v] {
            f(Visit::TreeEdge(u, v, w));
            start(adj, v, visited, f);
        }
    }
    f(Visit::Finish(u));
}

/// Mark all vertices reachable from `u`.
pub fn mark<W: Copy>(adj: &Adjacencies<W>, u: usize, visited: &mut [bool]) {
    start(adj, u, visited, &mut |_| {});
}

/// Append all vertices reachable from `u` to `order` in post-order.
///
/// A vertex is appended after all its descendants.
pub fn post_order<W: Copy>(adj: &Adjacencies<W>, u: usize, visited: &mut [bool], order: &mut Vec<usize>) {
    start(adj, u, visited, &mut |visit| {
        if let Visit::Finish(v) = visit {
            order.push(v);
        }
    });
}
