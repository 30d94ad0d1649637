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

//! Degeneracy-ordered search. The outer loop visits vertices in degeneracy
//! order; each vertex v is searched with P limited to its later neighbors
//! and X seeded with its earlier neighbors, so every maximal clique is
//! emitted exactly once, anchored at its earliest vertex in the ordering,
//! and the outer branching factor is bounded by the degeneracy.
//!
//! The inner recursion is pivot-based. Vertices eliminated from a
//! subproblem are removed from the mutable adjacency list for the duration
//! of the branch and restored on backtrack, which keeps neighbor scans
//! proportional to the live subproblem.

use crate::ordering::DegeneracyOrdering;
use crate::repr::MutableAdjacencyList;
use crate::search::{difference_sorted, emit};

pub(crate) fn run(
    list: &mut MutableAdjacencyList,
    ordering: &DegeneracyOrdering,
) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut clique: Vec<usize> = Vec::new();
    for &v in &ordering.order {
        let candidates = ordering.later[v].clone();
        let excluded = ordering.earlier[v].clone();
        clique.push(v);
        expand(list, &mut clique, candidates, excluded, &mut out);
        clique.pop();
    }
    out
}

pub(crate) fn expand(
    list: &mut MutableAdjacencyList,
    clique: &mut Vec<usize>,
    mut candidates: Vec<usize>,
    mut excluded: Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        emit(clique, out);
        return;
    }

    let pivot = choose_pivot(list, &candidates, &excluded);
    let branch: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&v| !list.contains(pivot, v))
        .collect();

    for v in branch {
        let next_candidates: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&w| list.contains(v, w))
            .collect();
        let next_excluded: Vec<usize> = excluded
            .iter()
            .copied()
            .filter(|&w| list.contains(v, w))
            .collect();

        // Shrink the live graph to the subproblem; restored after the
        // branch. v itself is part of the difference, so it is detached
        // along with the vertices its selection eliminates.
        let mark = list.checkpoint();
        for &w in &difference_sorted(&candidates, &next_candidates) {
            list.detach(w);
        }
        for &w in &difference_sorted(&excluded, &next_excluded) {
            list.detach(w);
        }

        clique.push(v);
        expand(list, clique, next_candidates, next_excluded, out);
        clique.pop();
        list.rollback(mark);

        if let Ok(i) = candidates.binary_search(&v) {
            candidates.remove(i);
        }
        if let Err(i) = excluded.binary_search(&v) {
            excluded.insert(i, v);
        }
    }
}

fn choose_pivot(list: &MutableAdjacencyList, candidates: &[usize], excluded: &[usize]) -> usize {
    let mut pivot = candidates
        .first()
        .or_else(|| excluded.first())
        .copied()
        .unwrap_or(0);
    let mut best = 0;
    for &u in candidates.iter().chain(excluded.iter()) {
        let count = list
            .neighbors(u)
            .iter()
            .filter(|&&w| candidates.binary_search(&w).is_ok())
            .count();
        if count > best {
            best = count;
            pivot = u;
            if count == candidates.len() {
                break;
            }
        }
    }
    pivot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::normalize_adjacency;
    use crate::ordering::degeneracy_ordering;

    fn cliques_of(raw: &[Vec<usize>]) -> Vec<Vec<usize>> {
        let adjacency = normalize_adjacency(raw).unwrap();
        let ordering = degeneracy_ordering(&adjacency);
        let mut list = MutableAdjacencyList::build(adjacency);
        let mut found = run(&mut list, &ordering);
        found.sort();
        found
    }

    #[test]
    fn triangle_with_tail() {
        let found = cliques_of(&[vec![1, 2], vec![0, 2], vec![0, 1, 3], vec![2]]);
        assert_eq!(found, vec![vec![0, 1, 2], vec![2, 3]]);
    }

    #[test]
    fn four_clique_is_found_whole() {
        let found = cliques_of(&[vec![1, 2, 3], vec![0, 2, 3], vec![0, 1, 3], vec![0, 1, 2]]);
        assert_eq!(found, vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn each_clique_appears_exactly_once() {
        // Two 4-cliques sharing an edge: {0,1,2,3} and {2,3,4,5}.
        let found = cliques_of(&[
            vec![1, 2, 3],
            vec![0, 2, 3],
            vec![0, 1, 3, 4, 5],
            vec![0, 1, 2, 4, 5],
            vec![2, 3, 5],
            vec![2, 3, 4],
        ]);
        assert_eq!(found, vec![vec![0, 1, 2, 3], vec![2, 3, 4, 5]]);
    }

    #[test]
    fn adjacency_list_is_fully_restored_after_a_run() {
        let adjacency = normalize_adjacency(&[vec![1, 2], vec![0, 2], vec![0, 1, 3], vec![2]])
            .unwrap();
        let ordering = degeneracy_ordering(&adjacency);
        let mut list = MutableAdjacencyList::build(adjacency.clone());
        let _ = run(&mut list, &ordering);
        for (v, expected) in adjacency.iter().enumerate() {
            let mut live = list.neighbors(v).to_vec();
            live.sort_unstable();
            assert_eq!(&live, expected);
        }
    }
}
