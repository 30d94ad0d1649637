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

//! Matrix-backed pivot search. The pivot is the vertex of P union X with
//! the most neighbors inside P; branching is restricted to P minus the
//! pivot's neighborhood, which prunes subtrees that cannot produce a new
//! maximal clique. Adjacency tests are O(1) matrix probes.

use crate::repr::DenseMatrix;
use crate::search::emit;

pub(crate) fn run(matrix: &DenseMatrix) -> Vec<Vec<usize>> {
    let n = matrix.order();
    let mut out = Vec::new();
    if n == 0 {
        return out;
    }
    let mut clique: Vec<usize> = Vec::new();
    let mut candidates: Vec<usize> = (0..n).collect();
    let mut excluded: Vec<usize> = Vec::new();
    expand(matrix, &mut clique, &mut candidates, &mut excluded, &mut out);
    out
}

fn expand(
    matrix: &DenseMatrix,
    clique: &mut Vec<usize>,
    candidates: &mut Vec<usize>,
    excluded: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        emit(clique, out);
        return;
    }

    let pivot = choose_pivot(matrix, candidates, excluded);
    let branch: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&v| !matrix.contains(pivot, v))
        .collect();

    for v in branch {
        let mut next_candidates: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&w| matrix.contains(v, w))
            .collect();
        let mut next_excluded: Vec<usize> = excluded
            .iter()
            .copied()
            .filter(|&w| matrix.contains(v, w))
            .collect();

        clique.push(v);
        expand(matrix, clique, &mut next_candidates, &mut next_excluded, out);
        clique.pop();

        candidates.retain(|&w| w != v);
        excluded.push(v);
    }
}

fn choose_pivot(matrix: &DenseMatrix, candidates: &[usize], excluded: &[usize]) -> usize {
    let mut pivot = candidates
        .first()
        .or_else(|| excluded.first())
        .copied()
        .unwrap_or(0);
    let mut best = 0;
    for &u in candidates.iter().chain(excluded.iter()) {
        let count = candidates
            .iter()
            .filter(|&&w| matrix.contains(u, w))
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

    fn cliques_of(raw: &[Vec<usize>]) -> Vec<Vec<usize>> {
        let adjacency = normalize_adjacency(raw).unwrap();
        let matrix = DenseMatrix::build(&adjacency, 100).unwrap();
        let mut found = run(&matrix);
        found.sort();
        found
    }

    #[test]
    fn triangle_is_a_single_clique() {
        let found = cliques_of(&[vec![1, 2], vec![0, 2], vec![0, 1]]);
        assert_eq!(found, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn path_yields_its_edges() {
        let found = cliques_of(&[vec![1], vec![0, 2], vec![1, 3], vec![2]]);
        assert_eq!(found, vec![vec![0, 1], vec![1, 2], vec![2, 3]]);
    }

    #[test]
    fn edgeless_graph_yields_singletons() {
        let found = cliques_of(&[vec![], vec![], vec![]]);
        assert_eq!(found, vec![vec![0], vec![1], vec![2]]);
    }
}
