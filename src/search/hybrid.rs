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

//! Hybrid search. The outer loop is the degeneracy-ordered loop; each
//! outer subproblem is inspected for local density and delegated to the
//! pivot-based recursion when dense, or to a no-pivot, degree-ordered
//! recursion when sparse. The choice is a performance heuristic only and
//! never changes the emitted clique set.

use fixedbitset::FixedBitSet;

use crate::ordering::DegeneracyOrdering;
use crate::repr::MutableAdjacencyList;
use crate::search::{degeneracy, difference_sorted, emit};

pub(crate) fn run(
    list: &mut MutableAdjacencyList,
    ordering: &DegeneracyOrdering,
    density_threshold: f64,
) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut clique: Vec<usize> = Vec::new();
    for &v in &ordering.order {
        let candidates = ordering.later[v].clone();
        let excluded = ordering.earlier[v].clone();
        clique.push(v);
        if local_density(list, &candidates, &excluded) >= density_threshold {
            degeneracy::expand(list, &mut clique, candidates, excluded, &mut out);
        } else {
            expand_sparse(list, &mut clique, candidates, excluded, &mut out);
        }
        clique.pop();
    }
    out
}

/// Fraction of possible edges present among the subproblem's vertices.
/// Subproblems with fewer than two vertices are trivially complete.
fn local_density(list: &MutableAdjacencyList, candidates: &[usize], excluded: &[usize]) -> f64 {
    let k = candidates.len() + excluded.len();
    if k < 2 {
        return 1.0;
    }
    let mut member = FixedBitSet::with_capacity(list.order());
    for &w in candidates.iter().chain(excluded.iter()) {
        member.insert(w);
    }
    let mut half_edges = 0usize;
    for &w in candidates.iter().chain(excluded.iter()) {
        half_edges += list
            .neighbors(w)
            .iter()
            .filter(|&&u| member.contains(u))
            .count();
    }
    let edges = half_edges / 2;
    edges as f64 / (k * (k - 1) / 2) as f64
}

/// No-pivot recursion in the manner of the array strategy, but running on
/// the mutable adjacency list so the subproblem shrinks as it descends.
fn expand_sparse(
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

    let mut branch: Vec<(usize, usize)> = candidates
        .iter()
        .map(|&v| {
            let residual = list
                .neighbors(v)
                .iter()
                .filter(|&&w| candidates.binary_search(&w).is_ok())
                .count();
            (residual, v)
        })
        .collect();
    branch.sort_unstable();

    for (_, v) in branch {
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

        let mark = list.checkpoint();
        for &w in &difference_sorted(&candidates, &next_candidates) {
            list.detach(w);
        }
        for &w in &difference_sorted(&excluded, &next_excluded) {
            list.detach(w);
        }

        clique.push(v);
        expand_sparse(list, clique, next_candidates, next_excluded, out);
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
