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

//! The four branch-and-bound search strategies. All of them share the same
//! recursive shape: a growing clique R, a candidate set P of vertices that
//! can still extend it, and an excluded set X of vertices already explored
//! from the current R. When P and X are both empty, R is maximal and gets
//! emitted. The strategies differ in their pivoting and ordering heuristics
//! and in the representation they run on; the emitted clique set is the
//! same for all of them.

pub(crate) mod array;
pub(crate) mod degeneracy;
pub(crate) mod dense;
pub(crate) mod hybrid;

/// Record the current clique, sorted ascending so result contents are
/// deterministic regardless of branch order.
pub(crate) fn emit(clique: &[usize], out: &mut Vec<Vec<usize>>) {
    let mut found = clique.to_vec();
    found.sort_unstable();
    out.push(found);
}

/// Intersection of two ascending slices, two-pointer merge.
pub(crate) fn intersect_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// Size of the intersection of two ascending slices.
pub(crate) fn count_common_sorted(a: &[usize], b: &[usize]) -> usize {
    let (mut i, mut j) = (0, 0);
    let mut count = 0;
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

/// Elements of ascending `a` not present in ascending `b`.
pub(crate) fn difference_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::new();
    let mut j = 0;
    for &x in a {
        while j < b.len() && b[j] < x {
            j += 1;
        }
        if j < b.len() && b[j] == x {
            j += 1;
        } else {
            out.push(x);
        }
    }
    out
}
