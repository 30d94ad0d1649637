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

//! Input handling: conversion of external graph formats into the
//! neighbor-list form the search strategies consume, plus the normalization
//! pass that every enumeration run applies to its input.

use ndarray::ArrayView2;
use petgraph::graph::Graph;
use petgraph::visit::EdgeRef;
use petgraph::Undirected;

use crate::errors::CliqueError;

/// Convert a boolean adjacency matrix into per-vertex neighbor lists.
///
/// The neighbor list of vertex `i` is the ordered set of all `j` with
/// `matrix[[i, j]]` set. The input must be square; dimensionality is
/// enforced by the `ArrayView2` type.
///
/// # Errors
/// Returns [`CliqueError::ShapeError`] when the matrix is not square.
pub fn matrix_to_neighbor_lists(
    matrix: ArrayView2<'_, bool>,
) -> Result<Vec<Vec<usize>>, CliqueError> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(CliqueError::ShapeError { rows, cols });
    }
    let mut lists: Vec<Vec<usize>> = Vec::with_capacity(rows);
    for i in 0..rows {
        let mut neighbors = Vec::new();
        for j in 0..cols {
            if matrix[[i, j]] {
                neighbors.push(j);
            }
        }
        lists.push(neighbors);
    }
    Ok(lists)
}

/// Build neighbor lists from an undirected petgraph graph.
///
/// Self-loops are skipped and parallel edges are collapsed. Node indices
/// carry over unchanged, so the output is indexed `0..node_count`.
pub fn neighbor_lists_from_graph<N, E>(graph: &Graph<N, E, Undirected>) -> Vec<Vec<usize>> {
    let mut lists: Vec<Vec<usize>> = vec![Vec::new(); graph.node_count()];
    for edge in graph.edge_references() {
        let s = edge.source().index();
        let t = edge.target().index();
        if s == t {
            continue;
        }
        lists[s].push(t);
        lists[t].push(s);
    }
    for neighbors in &mut lists {
        neighbors.sort_unstable();
        neighbors.dedup();
    }
    lists
}

/// Validate raw neighbor lists and bring them into canonical form: sorted,
/// deduplicated, symmetric, with self-loops dropped.
///
/// Duplicate edges and one-directional entries in the input are tolerated;
/// the output always satisfies the symmetry invariant the representations
/// rely on.
pub(crate) fn normalize_adjacency(
    adjacency: &[Vec<usize>],
) -> Result<Vec<Vec<usize>>, CliqueError> {
    let n = adjacency.len();
    let mut normalized: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (u, neighbors) in adjacency.iter().enumerate() {
        for &v in neighbors {
            if v >= n {
                return Err(CliqueError::InvalidVertex {
                    vertex: u,
                    neighbor: v,
                    order: n,
                });
            }
            if v == u {
                continue;
            }
            normalized[u].push(v);
            normalized[v].push(u);
        }
    }
    for neighbors in &mut normalized {
        neighbors.sort_unstable();
        neighbors.dedup();
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, Array2};
    use petgraph::graph::UnGraph;

    #[test]
    fn matrix_conversion_lists_true_columns_in_order() {
        let matrix = arr2(&[
            [false, true, true, false],
            [true, false, true, false],
            [true, true, false, true],
            [false, false, true, false],
        ]);
        let lists = matrix_to_neighbor_lists(matrix.view()).unwrap();
        assert_eq!(lists, vec![vec![1, 2], vec![0, 2], vec![0, 1, 3], vec![2]]);
    }

    #[test]
    fn matrix_conversion_rejects_non_square_input() {
        let matrix = Array2::from_shape_vec((2, 3), vec![false; 6]).unwrap();
        match matrix_to_neighbor_lists(matrix.view()) {
            Err(CliqueError::ShapeError { rows: 2, cols: 3 }) => {}
            other => panic!("expected ShapeError, got {other:?}"),
        }
    }

    #[test]
    fn matrix_round_trip_reproduces_neighbor_lists() {
        let lists = vec![vec![1, 2], vec![0, 2], vec![0, 1, 3], vec![2]];
        let n = lists.len();
        let mut matrix = Array2::from_elem((n, n), false);
        for (u, neighbors) in lists.iter().enumerate() {
            for &v in neighbors {
                matrix[[u, v]] = true;
            }
        }
        assert_eq!(matrix_to_neighbor_lists(matrix.view()).unwrap(), lists);
    }

    #[test]
    fn petgraph_adapter_collapses_parallel_edges_and_self_loops() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 0), (1, 2), (2, 2)]);
        let lists = neighbor_lists_from_graph(&graph);
        assert_eq!(lists, vec![vec![1], vec![0, 2], vec![1]]);
    }

    #[test]
    fn normalization_symmetrizes_and_dedups() {
        // One-directional entries, a duplicate edge, and a self-loop.
        let raw = vec![vec![1, 1, 2], vec![], vec![2, 0]];
        let normalized = normalize_adjacency(&raw).unwrap();
        assert_eq!(normalized, vec![vec![1, 2], vec![0], vec![0]]);
    }

    #[test]
    fn normalization_rejects_out_of_range_neighbors() {
        let raw = vec![vec![1], vec![3]];
        match normalize_adjacency(&raw) {
            Err(CliqueError::InvalidVertex {
                vertex: 1,
                neighbor: 3,
                order: 2,
            }) => {}
            other => panic!("expected InvalidVertex, got {other:?}"),
        }
    }
}
