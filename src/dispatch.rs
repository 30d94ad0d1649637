// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Representation selection and strategy dispatch. Given neighbor lists
//! and a strategy selector, builds exactly the representation(s) that
//! strategy needs, runs the search, and returns the collected cliques.
//! Every representation is local to one invocation, so independent runs
//! can proceed concurrently without shared state.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::errors::CliqueError;
use crate::graph::normalize_adjacency;
use crate::ordering::degeneracy_ordering;
use crate::repr::{AdjacencyArray, DenseMatrix, MutableAdjacencyList};
use crate::search;

/// Default vertex-count ceiling for dense-matrix construction. The matrix
/// costs O(n^2) memory, so this is a feasibility bound, not an algorithmic
/// one; override it through [`FindOptions`].
pub const DEFAULT_MATRIX_CEILING: usize = 20_000;

const DEFAULT_HYBRID_DENSITY_THRESHOLD: f64 = 0.4;

/// The four interchangeable search strategies. All of them emit the same
/// clique set; they differ in heuristics and in the representation they
/// need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Matrix-backed pivot search, for graphs small enough to afford an
    /// O(n^2) adjacency matrix.
    DensePivot,
    /// Pivot-free search over immutable neighbor arrays.
    Array,
    /// Degeneracy-ordered search with a pivot-based inner recursion.
    Degeneracy,
    /// Degeneracy-ordered outer loop delegating each subproblem by local
    /// density.
    Hybrid,
}

impl Strategy {
    /// All strategies, in selector order.
    pub const ALL: [Strategy; 4] = [
        Strategy::DensePivot,
        Strategy::Array,
        Strategy::Degeneracy,
        Strategy::Hybrid,
    ];

    /// The selector name for this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DensePivot => "dense-pivot",
            Strategy::Array => "array",
            Strategy::Degeneracy => "degeneracy",
            Strategy::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = CliqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dense-pivot" => Ok(Strategy::DensePivot),
            "array" => Ok(Strategy::Array),
            "degeneracy" => Ok(Strategy::Degeneracy),
            "hybrid" => Ok(Strategy::Hybrid),
            other => Err(CliqueError::InvalidStrategy(other.to_string())),
        }
    }
}

/// Tunables for one enumeration run.
#[derive(Debug, Clone)]
pub struct FindOptions {
    /// Vertex-count ceiling above which dense-matrix construction is
    /// refused.
    pub matrix_ceiling: usize,
    /// Local-density threshold at which the hybrid strategy switches from
    /// the sparse recursion to the pivot-based one.
    pub hybrid_density_threshold: f64,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            matrix_ceiling: DEFAULT_MATRIX_CEILING,
            hybrid_density_threshold: DEFAULT_HYBRID_DENSITY_THRESHOLD,
        }
    }
}

/// Enumerate all maximal cliques of the graph given as neighbor lists,
/// using the requested strategy and default options.
///
/// Vertices are indexed `0..n` contiguously. Duplicate edges, self-loops,
/// and one-directional entries in the input are tolerated. Each returned
/// clique is sorted ascending; the order of the collection itself is
/// unspecified, but its content is complete and duplicate-free.
///
/// # Errors
/// [`CliqueError::GraphTooLarge`] when `dense-pivot` is requested above the
/// matrix ceiling, [`CliqueError::InvalidVertex`] on malformed neighbor
/// lists, [`CliqueError::AllocationFailure`] when a representation cannot
/// be allocated.
pub fn find_cliques(
    adjacency: &[Vec<usize>],
    strategy: Strategy,
) -> Result<Vec<Vec<usize>>, CliqueError> {
    find_cliques_with(adjacency, strategy, &FindOptions::default())
}

/// [`find_cliques`] with the strategy given by selector name.
///
/// # Errors
/// [`CliqueError::InvalidStrategy`] for an unrecognized name, otherwise as
/// [`find_cliques`].
pub fn find_cliques_named(
    adjacency: &[Vec<usize>],
    strategy: &str,
) -> Result<Vec<Vec<usize>>, CliqueError> {
    find_cliques_with(adjacency, strategy.parse()?, &FindOptions::default())
}

/// [`find_cliques`] with explicit options.
pub fn find_cliques_with(
    adjacency: &[Vec<usize>],
    strategy: Strategy,
    options: &FindOptions,
) -> Result<Vec<Vec<usize>>, CliqueError> {
    let n = adjacency.len();
    // Feasibility is checked before any representation work begins.
    if strategy == Strategy::DensePivot && n > options.matrix_ceiling {
        return Err(CliqueError::GraphTooLarge {
            vertices: n,
            ceiling: options.matrix_ceiling,
        });
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let adjacency = normalize_adjacency(adjacency)?;
    let edges: usize = adjacency.iter().map(Vec::len).sum::<usize>() / 2;
    debug!(strategy = %strategy, vertices = n, edges, "starting clique enumeration");

    let cliques = match strategy {
        Strategy::DensePivot => {
            let matrix = DenseMatrix::build(&adjacency, options.matrix_ceiling)?;
            search::dense::run(&matrix)
        }
        Strategy::Array => {
            let array = AdjacencyArray::new(adjacency);
            search::array::run(&array)
        }
        Strategy::Degeneracy => {
            let ordering = degeneracy_ordering(&adjacency);
            let mut list = MutableAdjacencyList::build(adjacency);
            search::degeneracy::run(&mut list, &ordering)
        }
        Strategy::Hybrid => {
            let ordering = degeneracy_ordering(&adjacency);
            let mut list = MutableAdjacencyList::build(adjacency);
            search::hybrid::run(&mut list, &ordering, options.hybrid_density_threshold)
        }
    };

    debug!(strategy = %strategy, cliques = cliques.len(), "clique enumeration finished");
    Ok(cliques)
}
