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

//! Breadth-first-search.
//!
//! # Example
//!
//! ```
//! use rs_edgegraph::{classes, Graph, Kind};
//! use rs_edgegraph::adjacencies::Adjacencies;
//! use rs_edgegraph::search::{bfs, Visit};
//! use std::collections::VecDeque;
//!
//! let g: Graph = classes::cycle(Kind::Undirected, 6);
//! let adj = Adjacencies::outgoing(&g);
//!
//! let mut visited = vec![false; adj.num_vertices()];
//! let mut order = vec![];
//! bfs::start(&adj, 0, &mut visited, &mut VecDeque::new(), &mut |visit| {
//!     if let Visit::Discover(u) = visit {
//!         order.push(u);
//!     }
//! });
//! assert_eq!(order, vec![0, 1, 5, 2, 4, 3]);
//! ```

use super::Visit;
use crate::adjacencies::Adjacencies;

use std::collections::VecDeque;

/// Run a breadth-first search from the vertex at position `src`.
///
/// The source is marked and discovered first. Then the vertices are taken
/// from the front of `queue` one after another, each unvisited neighbor is
/// marked, discovered and appended to the back. A [`Visit::Finish`] event
/// is reported once all neighbors of a vertex have been handled.
///
/// The queue is cleared before the search starts, it is passed in so that
/// several searches can reuse its memory.
pub fn start<W, F>(adj: &Adjacencies<W>, src: usize, visited: &mut [bool], queue: &mut VecDeque<usize>, f: &mut F)
where
    W: Copy,
    F: FnMut(Visit<W>),
{
    queue.clear();
    visited[src] = true;
    f(Visit::Discover(src));
    queue.push_back(src);

    while let Some(u) = queue.pop_front() {
        for &(v, w) in adj.weighted_neighs(u) {
            if !visited[v] {
                visited[v] = true;
                f(Visit::TreeEdge(u, v, w));
                f(Visit::Discover(v));
                queue.push_back(v);
            }
        }
        f(Visit::Finish(u));
    }
}

#[cfg(test)]
mod tests {
    use super::start;
    use crate::adjacencies::Adjacencies;
    use crate::search::Visit;
    use crate::Graph;
    use std::collections::VecDeque;

    #[test]
    fn test_tree_edges() {
        let g = Graph::with_weights(
            crate::Kind::Directed,
            vec![1, 2, 3, 4],
            vec![(1, 2), (1, 3), (2, 4), (3, 4)],
            vec![5, 6, 7, 8],
        )
        .unwrap();
        let adj = Adjacencies::outgoing(&g);
        let mut visited = vec![false; 4];
        let mut tree = vec![];
        start(&adj, 0, &mut visited, &mut VecDeque::new(), &mut |visit| {
            if let Visit::TreeEdge(u, v, w) = visit {
                tree.push((u, v, w));
            }
        });
        assert_eq!(tree, vec![(0, 1, Some(5)), (0, 2, Some(6)), (1, 3, Some(7))]);
    }

    #[test]
    fn test_unreachable() {
        let g: Graph = Graph::directed(vec![1, 2, 3], vec![(2, 1)]).unwrap();
        let adj = Adjacencies::outgoing(&g);
        let mut visited = vec![false; 3];
        let mut n = 0;
        start(&adj, 0, &mut visited, &mut VecDeque::new(), &mut |visit| {
            if let Visit::Discover(_) = visit {
                n += 1;
            }
        });
        assert_eq!(n, 1);
        assert_eq!(visited, vec![true, false, false]);
    }
}
