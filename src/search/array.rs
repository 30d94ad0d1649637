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

//! Sparse search over immutable neighbor arrays. No pivoting: every
//! candidate is branched on, in ascending order of residual degree within
//! P. Candidate restriction is a merge intersection of the vertex's sorted
//! neighbor array with P, trading the matrix's memory for O(degree)
//! per-step scans.

use crate::repr::AdjacencyArray;
use crate::search::{count_common_sorted, emit, intersect_sorted};

pub(crate) fn run(adjacency: &AdjacencyArray) -> Vec<Vec<usize>> {
    let n = adjacency.order();
    let mut out = Vec::new();
    if n == 0 {
        return out;
    }
    let mut clique: Vec<usize> = Vec::new();
    let candidates: Vec<usize> = (0..n).collect();
    expand(adjacency, &mut clique, candidates, Vec::new(), &mut out);
    out
}

fn expand(
    adjacency: &AdjacencyArray,
    clique: &mut Vec<usize>,
    mut candidates: Vec<usize>,
    mut excluded: Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        emit(clique, out);
        return;
    }

    // Branch low-degree candidates first; ties fall back to vertex index.
    let mut branch: Vec<(usize, usize)> = candidates
        .iter()
        .map(|&v| (count_common_sorted(adjacency.neighbors(v), &candidates), v))
        .collect();
    branch.sort_unstable();

    for (_, v) in branch {
        let next_candidates = intersect_sorted(adjacency.neighbors(v), &candidates);
        let next_excluded = intersect_sorted(adjacency.neighbors(v), &excluded);

        clique.push(v);
        expand(adjacency, clique, next_candidates, next_excluded, out);
        clique.pop();

        if let Ok(i) = candidates.binary_search(&v) {
            candidates.remove(i);
        }
        if let Err(i) = excluded.binary_search(&v) {
            excluded.insert(i, v);
        }
    }
}
