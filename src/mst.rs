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

//! Minimum spanning tree algorithms.
//!
//! Both algorithms require an undirected graph whose edges all carry a
//! weight, and a connected graph for a spanning *tree*. The result is a
//! new graph on the same vertices, the input is never modified.

mod kruskal;
mod prim;

pub use self::kruskal::{kruskal, kruskal_forest};
pub use self::prim::prim;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Check that `g` is undirected and all edges are weighted.
fn check_weighted_undirected<W: Copy>(g: &Graph<W>) -> Result<()> {
    if g.is_directed() {
        return Err(Error::UnsupportedOperation("spanning trees require an undirected graph"));
    }
    if !g.edges().iter().all(|e| e.has_weight()) {
        return Err(Error::UnsupportedOperation("spanning trees require a weighted graph"));
    }
    Ok(())
}

/// Check all preconditions of a spanning tree computation.
fn check_spanning_tree<W: Copy>(g: &Graph<W>) -> Result<()> {
    check_weighted_undirected(g)?;
    if !g.is_connected() {
        return Err(Error::UnsupportedOperation("spanning trees require a connected graph"));
    }
    Ok(())
}
