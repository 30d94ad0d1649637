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

/// Errors produced while validating input or building graph representations.
///
/// All validation happens before the search phase starts; none of these
/// errors can surface once enumeration is underway.
#[derive(Debug, thiserror::Error)]
pub enum CliqueError {
    /// The strategy selector did not name a known search strategy.
    #[error("unknown strategy '{0}', expected one of: dense-pivot, array, degeneracy, hybrid")]
    InvalidStrategy(String),

    /// The requested strategy needs an adjacency matrix, but the graph has
    /// too many vertices for the configured ceiling.
    #[error("graph with {vertices} vertices exceeds the adjacency-matrix ceiling of {ceiling}")]
    GraphTooLarge {
        /// Number of vertices in the input graph.
        vertices: usize,
        /// The configured matrix-feasibility ceiling.
        ceiling: usize,
    },

    /// An adjacency matrix input was not square.
    #[error("adjacency matrix must be square, got {rows}x{cols}")]
    ShapeError {
        /// Number of rows in the input.
        rows: usize,
        /// Number of columns in the input.
        cols: usize,
    },

    /// Allocating a graph representation failed.
    #[error("failed to allocate {bytes} bytes for the {what}")]
    AllocationFailure {
        /// Size of the rejected allocation.
        bytes: usize,
        /// Which representation was being built.
        what: &'static str,
    },

    /// A neighbor list referenced a vertex outside `0..order`.
    #[error("neighbor {neighbor} of vertex {vertex} is out of range for a graph on {order} vertices")]
    InvalidVertex {
        /// The vertex whose neighbor list is malformed.
        vertex: usize,
        /// The out-of-range neighbor index.
        neighbor: usize,
        /// Number of vertices in the graph.
        order: usize,
    },
}
