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

//! Maximal clique enumeration for undirected graphs.
//!
//! A maximal clique is a fully connected vertex subset that cannot be
//! extended by any additional vertex. This crate enumerates all of them
//! with four interchangeable branch-and-bound strategies, each backed by
//! the graph representation it needs: a dense boolean adjacency matrix
//! ([`Strategy::DensePivot`]), immutable per-vertex neighbor arrays
//! ([`Strategy::Array`]), or a mutable adjacency list with reversible
//! removal driven by a degeneracy ordering ([`Strategy::Degeneracy`] and
//! [`Strategy::Hybrid`]).
//!
//! The entry point is [`find_cliques`]:
//!
//! ```
//! use cliquework::{find_cliques, Strategy};
//!
//! // A triangle 0-1-2 with a tail 2-3.
//! let adjacency = vec![vec![1, 2], vec![0, 2], vec![0, 1, 3], vec![2]];
//! let mut cliques = find_cliques(&adjacency, Strategy::Degeneracy)?;
//! cliques.sort();
//! assert_eq!(cliques, vec![vec![0, 1, 2], vec![2, 3]]);
//! # Ok::<(), cliquework::CliqueError>(())
//! ```
//!
//! All strategies emit the same clique set. Enumeration is single-threaded
//! and runs to completion within one call; independent invocations share
//! no state and may run concurrently.

pub mod dispatch;
pub mod errors;
pub mod graph;
pub mod ordering;
mod repr;
mod search;

pub use dispatch::{
    find_cliques, find_cliques_named, find_cliques_with, FindOptions, Strategy,
    DEFAULT_MATRIX_CEILING,
};
pub use errors::CliqueError;
pub use graph::{matrix_to_neighbor_lists, neighbor_lists_from_graph};
pub use ordering::{degeneracy_ordering, DegeneracyOrdering};
