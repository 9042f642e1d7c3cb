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

#![forbid(unsafe_code)]

//! A library for small in-memory graphs given as explicit vertex and edge
//! lists.
//!
//! A [`Graph`] is either undirected or directed (see [`Kind`]). Vertices
//! are distinct integer labels, edges are ordered pairs of vertices with an
//! optional weight. An undirected graph stores each edge together with its
//! mirror, so every undirected edge appears twice in [`Graph::edges`].
//!
//! All algorithms work on a snapshot of the adjacency structure taken when
//! they are called and never modify their input graph.
//!
//! # Example
//!
//! ```
//! use rs_edgegraph::{Graph, Kind};
//!
//! let g = Graph::with_weights(
//!     Kind::Undirected,
//!     vec![1, 2, 3, 4],
//!     vec![(1, 2), (2, 3), (3, 4), (4, 1), (1, 3)],
//!     vec![1, 2, 1, 4, 5],
//! )
//! .unwrap();
//!
//! assert!(g.is_connected());
//! assert!(g.has_cycle());
//! assert_eq!(g.kruskal_tree().unwrap().total_weight(), Some(4));
//! assert_eq!(g.prim_tree().unwrap().total_weight(), Some(4));
//! ```

mod num {
    pub use num_integer as integer;
    pub use num_traits as traits;
}

// # Data structures

pub mod edge;
pub use self::edge::{Edge, Vertex};

pub mod error;
pub use self::error::{Error, Result};

pub mod graph;
pub use self::graph::{Graph, Kind};

pub mod adjacencies;
pub use self::adjacencies::AdjacencyMatrix;

/// Graph classes
pub mod classes;

// # Algorithms

pub mod algorithms;
pub use self::algorithms::Eulerian;

pub mod mst;
pub mod scc;
pub mod search;
pub mod topological;
