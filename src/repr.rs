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

//! The three graph representations the search strategies run on. Each is
//! built once per enumeration run from normalized neighbor lists and
//! dropped when the run returns.

use std::mem::size_of;

use foldhash::{HashMap, HashMapExt};

use crate::errors::CliqueError;

/// Allocate a zero-initialized buffer, reporting exhaustion instead of
/// aborting the process.
fn try_zeroed<T: Clone + Default>(len: usize, what: &'static str) -> Result<Vec<T>, CliqueError> {
    let mut buf: Vec<T> = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| CliqueError::AllocationFailure {
            bytes: len.saturating_mul(size_of::<T>()),
            what,
        })?;
    buf.resize(len, T::default());
    Ok(buf)
}

// ============================================================================
// Dense adjacency matrix
// ============================================================================

/// Boolean adjacency matrix stored as a single contiguous buffer with
/// row-stride indexing. Memory cost is O(n^2), so construction is gated on
/// a vertex-count ceiling checked before any allocation happens.
#[derive(Debug)]
pub(crate) struct DenseMatrix {
    cells: Vec<bool>,
    order: usize,
}

impl DenseMatrix {
    pub(crate) fn build(adjacency: &[Vec<usize>], ceiling: usize) -> Result<Self, CliqueError> {
        let n = adjacency.len();
        if n > ceiling {
            return Err(CliqueError::GraphTooLarge {
                vertices: n,
                ceiling,
            });
        }
        let mut cells = try_zeroed::<bool>(n.saturating_mul(n), "adjacency matrix")?;
        for (u, neighbors) in adjacency.iter().enumerate() {
            for &v in neighbors {
                cells[u * n + v] = true;
            }
        }
        Ok(Self { cells, order: n })
    }

    #[inline]
    pub(crate) fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub(crate) fn contains(&self, u: usize, v: usize) -> bool {
        self.cells[u * self.order + v]
    }
}

// ============================================================================
// Immutable adjacency array
// ============================================================================

/// Per-vertex sorted neighbor arrays, materialized once and immutable for
/// the duration of a search. O(n + m) memory.
pub(crate) struct AdjacencyArray {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyArray {
    /// Takes ownership of normalized neighbor lists (sorted, deduplicated,
    /// symmetric).
    pub(crate) fn new(neighbors: Vec<Vec<usize>>) -> Self {
        Self { neighbors }
    }

    #[inline]
    pub(crate) fn order(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    pub(crate) fn neighbors(&self, v: usize) -> &[usize] {
        &self.neighbors[v]
    }
}

// ============================================================================
// Mutable adjacency list with reversible removal
// ============================================================================

/// Per-vertex neighbor arrays partitioned into a live prefix and a dead
/// suffix, with an undo journal so removals can be rolled back during
/// backtracking.
///
/// Removing a neighbor swaps it into the dead suffix and records the edge
/// half in the journal; [`rollback`](Self::rollback) pops journal entries
/// in LIFO order and re-extends the live prefixes, restoring the exact
/// previous state. Membership tests go through per-vertex position maps and
/// are O(1) amortized.
pub(crate) struct MutableAdjacencyList {
    nbrs: Vec<Vec<usize>>,
    live: Vec<usize>,
    pos: Vec<HashMap<usize, usize>>,
    journal: Vec<(usize, usize)>,
}

impl MutableAdjacencyList {
    /// Takes ownership of normalized neighbor lists (sorted, deduplicated,
    /// symmetric).
    pub(crate) fn build(neighbors: Vec<Vec<usize>>) -> Self {
        let live: Vec<usize> = neighbors.iter().map(Vec::len).collect();
        let pos: Vec<HashMap<usize, usize>> = neighbors
            .iter()
            .map(|list| {
                let mut map = HashMap::with_capacity(list.len());
                for (i, &w) in list.iter().enumerate() {
                    map.insert(w, i);
                }
                map
            })
            .collect();
        Self {
            nbrs: neighbors,
            live,
            pos,
            journal: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn order(&self) -> usize {
        self.nbrs.len()
    }

    /// The current (live) neighbors of `u`.
    #[inline]
    pub(crate) fn neighbors(&self, u: usize) -> &[usize] {
        &self.nbrs[u][..self.live[u]]
    }

    /// Whether `v` is currently a live neighbor of `u`.
    #[inline]
    pub(crate) fn contains(&self, u: usize, v: usize) -> bool {
        self.pos[u].get(&v).is_some_and(|&i| i < self.live[u])
    }

    /// Journal mark to pass to [`rollback`](Self::rollback).
    #[inline]
    pub(crate) fn checkpoint(&self) -> usize {
        self.journal.len()
    }

    /// Remove `v` from `u`'s live neighbors. `v` must currently be live
    /// there.
    fn remove_half(&mut self, u: usize, v: usize) {
        let i = self.pos[u][&v];
        debug_assert!(i < self.live[u]);
        let last = self.live[u] - 1;
        self.nbrs[u].swap(i, last);
        let moved = self.nbrs[u][i];
        self.pos[u].insert(moved, i);
        self.pos[u].insert(v, last);
        self.live[u] = last;
        self.journal.push((u, v));
    }

    /// Remove `v` from the live neighbor list of every vertex that still
    /// sees it. `v`'s own list is left untouched; callers stop iterating a
    /// detached vertex.
    pub(crate) fn detach(&mut self, v: usize) {
        let degree = self.live[v];
        for i in 0..degree {
            let w = self.nbrs[v][i];
            self.remove_half(w, v);
        }
    }

    /// Undo every removal recorded after `mark`, most recent first.
    pub(crate) fn rollback(&mut self, mark: usize) {
        while self.journal.len() > mark {
            let Some((u, v)) = self.journal.pop() else {
                break;
            };
            debug_assert_eq!(self.nbrs[u][self.live[u]], v);
            self.live[u] += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::normalize_adjacency;

    fn triangle_plus_tail() -> Vec<Vec<usize>> {
        // 0-1-2 triangle with a tail 2-3
        normalize_adjacency(&[vec![1, 2], vec![0, 2], vec![0, 1, 3], vec![2]]).unwrap()
    }

    #[test]
    fn dense_matrix_is_symmetric_and_irreflexive() {
        let matrix = DenseMatrix::build(&triangle_plus_tail(), 100).unwrap();
        for u in 0..matrix.order() {
            assert!(!matrix.contains(u, u));
            for v in 0..matrix.order() {
                assert_eq!(matrix.contains(u, v), matrix.contains(v, u));
            }
        }
        assert!(matrix.contains(0, 1));
        assert!(!matrix.contains(0, 3));
    }

    #[test]
    fn dense_matrix_refuses_oversized_graphs_before_allocating() {
        let adjacency: Vec<Vec<usize>> = vec![Vec::new(); 5];
        match DenseMatrix::build(&adjacency, 4) {
            Err(CliqueError::GraphTooLarge {
                vertices: 5,
                ceiling: 4,
            }) => {}
            other => panic!("expected GraphTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn mutable_list_detach_hides_vertex_from_peers() {
        let mut list = MutableAdjacencyList::build(triangle_plus_tail());
        list.detach(2);
        assert!(!list.contains(0, 2));
        assert!(!list.contains(1, 2));
        assert!(!list.contains(3, 2));
        assert_eq!(list.neighbors(0), &[1]);
        assert_eq!(list.neighbors(3), &[] as &[usize]);
        // The detached vertex keeps its own list.
        assert_eq!(list.neighbors(2).len(), 3);
    }

    #[test]
    fn rollback_restores_exact_neighbor_sets() {
        let mut list = MutableAdjacencyList::build(triangle_plus_tail());
        let before: Vec<Vec<usize>> = (0..list.order())
            .map(|v| {
                let mut ns = list.neighbors(v).to_vec();
                ns.sort_unstable();
                ns
            })
            .collect();

        let mark = list.checkpoint();
        list.detach(2);
        list.detach(0);
        assert!(!list.contains(1, 0));
        list.rollback(mark);

        for v in 0..list.order() {
            let mut ns = list.neighbors(v).to_vec();
            ns.sort_unstable();
            assert_eq!(ns, before[v]);
            for &w in &before[v] {
                assert!(list.contains(v, w));
            }
        }
    }

    #[test]
    fn nested_checkpoints_roll_back_in_lifo_order() {
        let mut list = MutableAdjacencyList::build(triangle_plus_tail());
        let outer = list.checkpoint();
        list.detach(3);
        let inner = list.checkpoint();
        list.detach(1);
        assert!(!list.contains(0, 1));
        list.rollback(inner);
        assert!(list.contains(0, 1));
        assert!(!list.contains(2, 3));
        list.rollback(outer);
        assert!(list.contains(2, 3));
    }
}
