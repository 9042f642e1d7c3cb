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

//! Vertices and edges.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Identifier of a vertex.
///
/// Vertices are plain integers chosen by the caller. A graph never
/// contains the same identifier twice.
pub type Vertex = i32;

/// An edge from `src` to `snk` with an optional weight.
///
/// Two edges compare equal iff they have the same endpoints, the weight
/// is ignored. In particular, `(1,2,5) == (1,2,7) == (1,2)`. Use
/// [`Edge::weight_cmp`] to compare edges by weight.
///
/// # Example
///
/// ```
/// use rs_edgegraph::Edge;
///
/// let e = Edge::weighted(1, 2, 5);
/// assert_eq!(e, Edge::new(1, 2));
/// assert_ne!(e, Edge::new(2, 1));
/// assert_eq!(e.reversed(), Edge::new(2, 1));
/// assert_eq!(e.to_string(), "(1,2,5)");
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge<W = i32> {
    src: Vertex,
    snk: Vertex,
    weight: Option<W>,
}

impl<W> Edge<W> {
    /// Create an unweighted edge.
    pub fn new(src: Vertex, snk: Vertex) -> Self {
        Edge { src, snk, weight: None }
    }

    /// Create a weighted edge.
    pub fn weighted(src: Vertex, snk: Vertex, weight: W) -> Self {
        Edge {
            src,
            snk,
            weight: Some(weight),
        }
    }

    pub(crate) fn from_parts(src: Vertex, snk: Vertex, weight: Option<W>) -> Self {
        Edge { src, snk, weight }
    }

    /// Return the source vertex.
    pub fn src(&self) -> Vertex {
        self.src
    }

    /// Return the sink (destination) vertex.
    pub fn snk(&self) -> Vertex {
        self.snk
    }

    /// Return both end vertices `(src, snk)`.
    pub fn enodes(&self) -> (Vertex, Vertex) {
        (self.src, self.snk)
    }

    /// Return `true` if `u` is one of the end vertices.
    pub fn is_incident(&self, u: Vertex) -> bool {
        self.src == u || self.snk == u
    }

    /// Return `true` if source and sink coincide.
    pub fn is_loop(&self) -> bool {
        self.src == self.snk
    }

    pub fn has_weight(&self) -> bool {
        self.weight.is_some()
    }

    /// Replace the weight of this edge.
    pub fn set_weight(&mut self, weight: W) {
        self.weight = Some(weight);
    }

    /// Return a copy of this edge carrying `weight`.
    pub fn with_weight(self, weight: W) -> Self {
        Edge {
            weight: Some(weight),
            ..self
        }
    }
}

impl<W: Copy> Edge<W> {
    /// Return the weight of this edge, if any.
    pub fn weight(&self) -> Option<W> {
        self.weight
    }

    /// Return the edge with source and sink exchanged.
    ///
    /// The weight is kept.
    pub fn reversed(&self) -> Self {
        Edge {
            src: self.snk,
            snk: self.src,
            weight: self.weight,
        }
    }
}

impl<W: Ord> Edge<W> {
    /// Compare two edges by weight.
    ///
    /// Returns `None` if one of the edges is unweighted, such edges are
    /// incomparable.
    ///
    /// ```
    /// use rs_edgegraph::Edge;
    /// use std::cmp::Ordering;
    ///
    /// let a = Edge::weighted(1, 2, 3);
    /// let b = Edge::weighted(2, 3, 4);
    /// assert_eq!(a.weight_cmp(&b), Some(Ordering::Less));
    /// assert_eq!(a.weight_cmp(&Edge::new(2, 3)), None);
    /// ```
    pub fn weight_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.weight, &other.weight) {
            (Some(a), Some(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl<W> PartialEq for Edge<W> {
    fn eq(&self, other: &Self) -> bool {
        self.src == other.src && self.snk == other.snk
    }
}

impl<W> Eq for Edge<W> {}

impl<W> Hash for Edge<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.src.hash(state);
        self.snk.hash(state);
    }
}

impl<W> From<(Vertex, Vertex)> for Edge<W> {
    fn from((src, snk): (Vertex, Vertex)) -> Self {
        Edge::new(src, snk)
    }
}

impl<W> From<(Vertex, Vertex, W)> for Edge<W> {
    fn from((src, snk, weight): (Vertex, Vertex, W)) -> Self {
        Edge::weighted(src, snk, weight)
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match &self.weight {
            Some(w) => write!(f, "({},{},{})", self.src, self.snk, w),
            None => write!(f, "({},{})", self.src, self.snk),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Edge;
    use std::collections::HashSet;

    #[test]
    fn test_equality_ignores_weight() {
        let a: Edge = Edge::weighted(1, 2, 3);
        let b: Edge = Edge::weighted(1, 2, 4);
        assert_eq!(a, b);
        assert_eq!(a, Edge::new(1, 2));
        assert_ne!(a, a.reversed());

        let set: HashSet<Edge> = vec![a, b, Edge::new(1, 2)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_reversed_keeps_weight() {
        let e: Edge = Edge::weighted(4, 7, 9);
        let r = e.reversed();
        assert_eq!(r.enodes(), (7, 4));
        assert_eq!(r.weight(), Some(9));
        assert_eq!(r.reversed(), e);
    }

    #[test]
    fn test_display() {
        assert_eq!(Edge::<i32>::new(1, 2).to_string(), "(1,2)");
        assert_eq!(Edge::weighted(3, 1, -4).to_string(), "(3,1,-4)");
    }
}
