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

//! Errors raised by graph operations.

use crate::edge::Vertex;

use std::error;
use std::fmt;

/// Error raised by a graph operation.
///
/// All errors are raised before the graph is modified, a failed
/// operation leaves the graph unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An edge refers to a vertex that is not contained in the graph.
    InvalidEdge { src: Vertex, snk: Vertex },
    /// The number of weights differs from the number of edges.
    MismatchedWeights { edges: usize, weights: usize },
    /// The operation is not defined for this graph.
    UnsupportedOperation(&'static str),
    /// There is no edge with the given endpoints.
    EdgeNotFound { src: Vertex, snk: Vertex },
    /// The vertex is already contained in the graph.
    DuplicateVertex(Vertex),
    /// The directed graph contains a cycle.
    Cyclic,
    /// A stored undirected edge is not followed by its mirror.
    MissingMirror { src: Vertex, snk: Vertex },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidEdge { src, snk } => write!(fmt, "Invalid edge ({},{}): unknown end vertex", src, snk),
            Error::MismatchedWeights { edges, weights } => {
                write!(fmt, "Got {} weights for {} edges", weights, edges)
            }
            Error::UnsupportedOperation(msg) => write!(fmt, "Unsupported operation: {}", msg),
            Error::EdgeNotFound { src, snk } => write!(fmt, "No edge ({},{})", src, snk),
            Error::DuplicateVertex(u) => write!(fmt, "Duplicate vertex: {}", u),
            Error::Cyclic => write!(fmt, "Graph contains a cycle"),
            Error::MissingMirror { src, snk } => write!(fmt, "Undirected edge ({},{}) without mirror", src, snk),
        }
    }
}

impl error::Error for Error {}

/// Result type of graph operations.
pub type Result<T> = std::result::Result<T, Error>;
