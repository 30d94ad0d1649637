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

//! Degeneracy ordering: repeatedly remove a minimum-degree vertex,
//! maintaining degrees in a bucket queue so the whole pass runs in
//! O(n + m).

use fixedbitset::FixedBitSet;
use tracing::trace;

/// A vertex elimination ordering together with the neighbor partition it
/// induces.
///
/// Processing vertices in `order`, each vertex's later-neighbor count is
/// bounded by `degeneracy`, which caps the outer branching factor of the
/// ordering-aware search strategies.
#[derive(Debug, Clone)]
pub struct DegeneracyOrdering {
    /// Vertices in elimination order.
    pub order: Vec<usize>,
    /// `position[v]` is the index of `v` within `order`.
    pub position: Vec<usize>,
    /// Neighbors of `v` that appear after it in the ordering.
    pub later: Vec<Vec<usize>>,
    /// Neighbors of `v` that appear before it in the ordering.
    pub earlier: Vec<Vec<usize>>,
    /// Maximum residual degree observed at removal time.
    pub degeneracy: usize,
}

/// Compute a degeneracy ordering of the graph given as normalized neighbor
/// lists.
///
/// Ties among minimum-degree vertices are broken deterministically: the
/// most recently inserted vertex of the minimum-degree bucket is removed
/// first, so a fixed input always produces the same ordering.
pub fn degeneracy_ordering(adjacency: &[Vec<usize>]) -> DegeneracyOrdering {
    let n = adjacency.len();
    let mut degree: Vec<usize> = adjacency.iter().map(Vec::len).collect();
    let max_degree = degree.iter().copied().max().unwrap_or(0);

    // Bucket queue keyed by current degree; `slot[v]` tracks where `v`
    // sits inside its bucket so demotions avoid scans.
    let mut bins: Vec<Vec<usize>> = vec![Vec::new(); max_degree + 1];
    let mut slot: Vec<usize> = vec![0; n];
    for v in 0..n {
        slot[v] = bins[degree[v]].len();
        bins[degree[v]].push(v);
    }

    let mut removed = FixedBitSet::with_capacity(n);
    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut degeneracy = 0;
    let mut d = 0;

    for _ in 0..n {
        while bins[d].is_empty() {
            d += 1;
        }
        let Some(v) = bins[d].pop() else {
            break;
        };
        removed.insert(v);
        order.push(v);
        degeneracy = degeneracy.max(d);

        for &w in &adjacency[v] {
            if removed.contains(w) {
                continue;
            }
            let dw = degree[w];
            let s = slot[w];
            bins[dw].swap_remove(s);
            if s < bins[dw].len() {
                let shifted = bins[dw][s];
                slot[shifted] = s;
            }
            degree[w] = dw - 1;
            slot[w] = bins[dw - 1].len();
            bins[dw - 1].push(w);
        }
        // Removing one vertex lowers a remaining degree by at most one.
        d = d.saturating_sub(1);
    }

    let mut position: Vec<usize> = vec![0; n];
    for (i, &v) in order.iter().enumerate() {
        position[v] = i;
    }
    let mut later: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut earlier: Vec<Vec<usize>> = vec![Vec::new(); n];
    for v in 0..n {
        for &w in &adjacency[v] {
            if position[w] > position[v] {
                later[v].push(w);
            } else {
                earlier[v].push(w);
            }
        }
    }

    trace!(vertices = n, degeneracy, "computed degeneracy ordering");
    DegeneracyOrdering {
        order,
        position,
        later,
        earlier,
        degeneracy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::normalize_adjacency;

    fn ordering_of(edges: &[(usize, usize)], n: usize) -> DegeneracyOrdering {
        let mut raw = vec![Vec::new(); n];
        for &(u, v) in edges {
            raw[u].push(v);
        }
        degeneracy_ordering(&normalize_adjacency(&raw).unwrap())
    }

    #[test]
    fn complete_graph_has_degeneracy_n_minus_one() {
        let mut edges = Vec::new();
        for u in 0..5 {
            for v in (u + 1)..5 {
                edges.push((u, v));
            }
        }
        let ordering = ordering_of(&edges, 5);
        assert_eq!(ordering.degeneracy, 4);
    }

    #[test]
    fn path_and_star_have_degeneracy_one() {
        let path = ordering_of(&[(0, 1), (1, 2), (2, 3)], 4);
        assert_eq!(path.degeneracy, 1);
        let star = ordering_of(&[(0, 1), (0, 2), (0, 3), (0, 4)], 5);
        assert_eq!(star.degeneracy, 1);
    }

    #[test]
    fn disjoint_triangles_have_degeneracy_two() {
        let ordering = ordering_of(&[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)], 6);
        assert_eq!(ordering.degeneracy, 2);
    }

    #[test]
    fn order_is_a_permutation_with_consistent_positions() {
        let ordering = ordering_of(&[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)], 4);
        let mut seen = vec![false; 4];
        for (i, &v) in ordering.order.iter().enumerate() {
            assert!(!seen[v]);
            seen[v] = true;
            assert_eq!(ordering.position[v], i);
        }
    }

    #[test]
    fn later_neighbor_counts_are_bounded_by_degeneracy() {
        let ordering = ordering_of(
            &[
                (0, 1),
                (0, 2),
                (1, 2),
                (1, 3),
                (2, 3),
                (3, 4),
                (4, 5),
                (5, 0),
            ],
            6,
        );
        for v in 0..6 {
            assert!(ordering.later[v].len() <= ordering.degeneracy);
        }
    }

    #[test]
    fn partition_splits_every_neighbor_exactly_once() {
        let ordering = ordering_of(&[(0, 1), (1, 2), (0, 2), (2, 3)], 4);
        for v in 0..4 {
            let mut combined: Vec<usize> = ordering.later[v]
                .iter()
                .chain(ordering.earlier[v].iter())
                .copied()
                .collect();
            combined.sort_unstable();
            let mut expected: Vec<usize> = match v {
                0 => vec![1, 2],
                1 => vec![0, 2],
                2 => vec![0, 1, 3],
                _ => vec![2],
            };
            expected.sort_unstable();
            assert_eq!(combined, expected);
        }
    }

    #[test]
    fn same_input_yields_same_ordering() {
        let edges = [(0, 1), (1, 2), (0, 2), (2, 3), (3, 4)];
        let a = ordering_of(&edges, 5);
        let b = ordering_of(&edges, 5);
        assert_eq!(a.order, b.order);
    }
}
