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

//! General algorithms working on graphs.

use crate::adjacencies::Adjacencies;
use crate::edge::Vertex;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::num::integer::Integer;
use crate::search::dfs;

use tracing::{debug, trace};

/// Determines if a graph is connected.
///
/// Directed graphs are checked for weak connectivity, i.e. the direction
/// of the edges is ignored. The empty graph is connected.
///
/// # Example
///
/// ```
/// use rs_edgegraph::{Graph, algorithms};
///
/// let mut g: Graph = Graph::directed(vec![1, 2, 3], vec![(1, 2), (3, 2)]).unwrap();
/// assert!(algorithms::is_connected(&g));
///
/// g.add_vertex(4).unwrap();
/// assert!(!algorithms::is_connected(&g));
/// ```
pub fn is_connected<W: Copy>(g: &Graph<W>) -> bool {
    if g.num_vertices() == 0 {
        return true;
    }

    let adj = Adjacencies::undirected(g);
    let mut visited = vec![false; adj.num_vertices()];
    dfs::mark(&adj, 0, &mut visited);

    visited.iter().all(|&u| u)
}

/// Determines if a directed graph is strongly connected.
///
/// The first vertex must reach all vertices, both in the graph and in its
/// transpose. The empty graph is strongly connected.
///
/// Fails with [`Error::UnsupportedOperation`] for undirected graphs.
///
/// # Example
///
/// ```
/// use rs_edgegraph::{Graph, algorithms};
///
/// let mut g: Graph = Graph::directed(vec![1, 2, 3], vec![(1, 2), (2, 3), (3, 1)]).unwrap();
/// assert_eq!(algorithms::is_strongly_connected(&g), Ok(true));
///
/// g.remove_edge((3, 1));
/// assert_eq!(algorithms::is_strongly_connected(&g), Ok(false));
///
/// let h: Graph = Graph::undirected(vec![1], Vec::<(i32, i32)>::new()).unwrap();
/// assert!(algorithms::is_strongly_connected(&h).is_err());
/// ```
pub fn is_strongly_connected<W: Copy>(g: &Graph<W>) -> Result<bool> {
    if !g.is_directed() {
        return Err(Error::UnsupportedOperation("strong connectivity requires a directed graph"));
    }
    if g.num_vertices() == 0 {
        return Ok(true);
    }

    let reaches_all = |h: &Graph<W>| {
        let adj = Adjacencies::outgoing(h);
        let mut visited = vec![false; adj.num_vertices()];
        dfs::mark(&adj, 0, &mut visited);
        visited.iter().all(|&u| u)
    };

    Ok(reaches_all(g) && reaches_all(&g.transposed()))
}

/// Determines if a graph contains a cycle.
///
/// For directed graphs a cycle is a back edge of a depth-first search, i.e.
/// an edge leading to a vertex on the current recursion stack. For
/// undirected graphs the edge used to reach a vertex is not followed back,
/// so a cycle requires a second path to a visited vertex. In both cases
/// loops and parallel edges form cycles.
///
/// All components of the graph are searched.
///
/// # Example
///
/// ```
/// use rs_edgegraph::{Graph, algorithms};
///
/// let mut g: Graph = Graph::undirected(vec![1, 2, 3], vec![(1, 2), (2, 3)]).unwrap();
/// assert!(!algorithms::has_cycle(&g));
/// g.add_edge((3, 1)).unwrap();
/// assert!(algorithms::has_cycle(&g));
/// ```
pub fn has_cycle<W: Copy>(g: &Graph<W>) -> bool {
    debug!(
        vertices = g.num_vertices(),
        edges = g.num_edges(),
        directed = g.is_directed(),
        "cycle detection"
    );
    if g.is_directed() {
        has_directed_cycle(g)
    } else {
        has_undirected_cycle(g)
    }
}

fn has_directed_cycle<W: Copy>(g: &Graph<W>) -> bool {
    fn search<W: Copy>(adj: &Adjacencies<W>, u: usize, visited: &mut [bool], on_stack: &mut [bool]) -> bool {
        visited[u] = true;
        on_stack[u] = true;
        for v in adj.neighs(u) {
            if on_stack[v] {
                trace!(src = adj.vertex(u), snk = adj.vertex(v), "back edge");
                return true;
            }
            if !visited[v] && search(adj, v, visited, on_stack) {
                return true;
            }
        }
        on_stack[u] = false;
        false
    }

    let adj = Adjacencies::outgoing(g);
    let n = adj.num_vertices();
    let mut visited = vec![false; n];
    let mut on_stack = vec![false; n];
    (0..n).any(|u| !visited[u] && search(&adj, u, &mut visited, &mut on_stack))
}

fn has_undirected_cycle<W: Copy>(g: &Graph<W>) -> bool {
    // The adjacency lists are a working copy: the edge used to enter a
    // vertex is removed (in both directions) before descending.
    fn search<W: Copy>(work: &mut Adjacencies<W>, u: usize, visited: &mut [bool]) -> bool {
        visited[u] = true;
        let neighs: Vec<usize> = work.neighs(u).collect();
        for v in neighs {
            if visited[v] {
                trace!(src = work.vertex(u), snk = work.vertex(v), "second path");
                return true;
            }
            work.remove_one(v, u);
            work.remove_one(u, v);
            if search(work, v, visited) {
                return true;
            }
        }
        false
    }

    let mut work = Adjacencies::outgoing(g);
    let n = work.num_vertices();
    let mut visited = vec![false; n];
    (0..n).any(|u| !visited[u] && search(&mut work, u, &mut visited))
}

/// Returns the weakly connected components of a graph.
///
/// Each component lists its vertices in vertex order, the components are
/// ordered by their first vertex.
///
/// # Example
///
/// ```
/// use rs_edgegraph::{Graph, algorithms};
///
/// let g: Graph = Graph::directed(vec![1, 2, 3, 4, 5], vec![(2, 1), (4, 3), (5, 4)]).unwrap();
/// assert_eq!(algorithms::weak_components(&g), vec![vec![1, 2], vec![3, 4, 5]]);
/// ```
pub fn weak_components<W: Copy>(g: &Graph<W>) -> Vec<Vec<Vertex>> {
    let adj = Adjacencies::undirected(g);
    let mut visited = vec![false; adj.num_vertices()];
    let mut components = vec![];
    for u in 0..adj.num_vertices() {
        if !visited[u] {
            let mut order = vec![];
            dfs::post_order(&adj, u, &mut visited, &mut order);
            order.sort_unstable();
            components.push(order.into_iter().map(|i| adj.vertex(i)).collect());
        }
    }
    components
}

/// Returns the number of vertices with odd [`degree`](Graph::degree).
pub fn num_odd_degree_vertices<W: Copy>(g: &Graph<W>) -> usize {
    g.vertices().iter().filter(|&&u| g.degree(u).is_odd()).count()
}

/// Classification of a graph by the number of vertices of odd degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eulerian {
    /// No vertex has odd degree.
    Eulerian,
    /// Exactly two vertices have odd degree.
    SemiEulerian,
    /// Any other number of vertices has odd degree.
    NonEulerian,
}

/// Classifies a graph by its number of odd degree vertices.
///
/// This only counts degrees (in-degrees for directed graphs), it does
/// neither check connectivity nor construct a walk.
///
/// # Example
///
/// ```
/// use rs_edgegraph::{classes, Graph, Kind};
/// use rs_edgegraph::algorithms::{eulerian, Eulerian};
///
/// assert_eq!(eulerian(&classes::cycle::<i32>(Kind::Undirected, 5)), Eulerian::Eulerian);
/// assert_eq!(eulerian(&classes::path::<i32>(Kind::Undirected, 5)), Eulerian::SemiEulerian);
/// assert_eq!(eulerian(&classes::star::<i32>(Kind::Undirected, 3)), Eulerian::NonEulerian);
/// ```
pub fn eulerian<W: Copy>(g: &Graph<W>) -> Eulerian {
    match num_odd_degree_vertices(g) {
        0 => Eulerian::Eulerian,
        2 => Eulerian::SemiEulerian,
        _ => Eulerian::NonEulerian,
    }
}
