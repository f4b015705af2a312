//! Hopcroft-Karp maximum bipartite matching.
//!
//! Each phase builds a BFS layering from every unmatched left vertex, then
//! augments along vertex-disjoint shortest paths with a blocking-flow DFS
//! restricted to that layering. Phases repeat until the layering finds no
//! augmenting path, which bounds the phase count by `O(sqrt(V))` and the
//! total running time by `O(E * sqrt(V))`.
//!
//! The search keeps no sentinel vertex: partners are `Option` values and the
//! layering records the shortest augmenting-path length in a separate
//! terminal marker. Augmentation uses an explicit frame stack, so path length
//! is bounded by memory rather than call depth. All search state lives in a
//! per-call [`SearchState`] and is discarded when the computation returns.

use crate::graph::bipartite::BipartiteGraph;
use crate::graph::partition::{LeftId, RightId};
use std::collections::VecDeque;

/// A matching as a pair of mutually consistent partner maps.
#[derive(Debug, Clone)]
pub struct Matching {
    left_partner: Vec<Option<RightId>>,
    right_partner: Vec<Option<LeftId>>,
}

impl Matching {
    fn unmatched(left_count: usize, right_count: usize) -> Self {
        Self {
            left_partner: vec![None; left_count],
            right_partner: vec![None; right_count],
        }
    }

    /// Number of matched pairs.
    pub fn size(&self) -> usize {
        self.left_partner.iter().filter(|p| p.is_some()).count()
    }

    /// Partner of a left vertex, if matched.
    #[inline]
    pub fn partner_of_left(&self, u: LeftId) -> Option<RightId> {
        self.left_partner[u.index()]
    }

    /// Partner of a right vertex, if matched.
    #[inline]
    pub fn partner_of_right(&self, v: RightId) -> Option<LeftId> {
        self.right_partner[v.index()]
    }

    /// Matched pairs in ascending left-id order.
    pub fn pairs(&self) -> impl Iterator<Item = (LeftId, RightId)> + '_ {
        self.left_partner
            .iter()
            .enumerate()
            .filter_map(|(u, p)| p.map(|v| (LeftId::new(u), v)))
    }

    /// Checks that the two partner maps mirror each other exactly:
    /// `left_partner[u] == Some(v)` iff `right_partner[v] == Some(u)`.
    pub fn is_consistent(&self) -> bool {
        let lefts_ok = self.left_partner.iter().enumerate().all(|(u, p)| match p {
            Some(v) => self.right_partner[v.index()] == Some(LeftId::new(u)),
            None => true,
        });
        let rights_ok = self.right_partner.iter().enumerate().all(|(v, p)| match p {
            Some(u) => self.left_partner[u.index()] == Some(RightId::new(v)),
            None => true,
        });
        lefts_ok && rights_ok
    }
}

/// Per-phase layering state, owned by one `maximum_matching` call.
struct SearchState {
    /// BFS layer of each left vertex; `None` means unreached, and the
    /// blocking-flow DFS resets dead-ended vertices to `None` mid-phase.
    dist: Vec<Option<u32>>,
    /// Length of the shortest augmenting path found by the layering, if any.
    terminal: Option<u32>,
}

/// One DFS frame: a left vertex, its scan position, and the right vertex the
/// frame is currently descending through.
struct Frame {
    u: usize,
    next: usize,
    via: usize,
}

/// Computes a maximum matching of `graph`.
pub fn maximum_matching(graph: &BipartiteGraph) -> Matching {
    let (m, n) = (graph.left_count(), graph.right_count());
    let mut matching = Matching::unmatched(m, n);
    if m == 0 || n == 0 {
        return matching;
    }
    let mut state = SearchState {
        dist: vec![None; m],
        terminal: None,
    };
    while layer(graph, &matching, &mut state) {
        for u in 0..m {
            if matching.left_partner[u].is_none() {
                augment(graph, &mut matching, &mut state, u);
            }
        }
    }
    matching
}

/// BFS layering from all unmatched left vertices.
///
/// Returns `true` iff some shortest augmenting path exists; its length is
/// recorded in `state.terminal` and respected by [`augment`].
fn layer(graph: &BipartiteGraph, matching: &Matching, state: &mut SearchState) -> bool {
    let mut queue = VecDeque::new();
    for u in 0..graph.left_count() {
        if matching.left_partner[u].is_none() {
            state.dist[u] = Some(0);
            queue.push_back(u);
        } else {
            state.dist[u] = None;
        }
    }
    state.terminal = None;

    while let Some(u) = queue.pop_front() {
        let Some(du) = state.dist[u] else { continue };
        // Vertices at or beyond the first completed path cannot start a
        // shorter one; stop expanding there.
        if state.terminal.is_some_and(|t| du >= t) {
            continue;
        }
        for &v in graph.neighbors(LeftId::new(u)) {
            match matching.right_partner[v] {
                None => {
                    if state.terminal.is_none() {
                        state.terminal = Some(du + 1);
                    }
                }
                Some(w) => {
                    let w = w.index();
                    if state.dist[w].is_none() {
                        state.dist[w] = Some(du + 1);
                        queue.push_back(w);
                    }
                }
            }
        }
    }
    state.terminal.is_some()
}

/// Searches for one augmenting path from the free left vertex `root`,
/// restricted to the current layering, and flips partners along it.
///
/// Dead-ended left vertices get their layer reset to `None` so no other
/// search revisits them this phase (blocking-flow pruning).
fn augment(
    graph: &BipartiteGraph,
    matching: &mut Matching,
    state: &mut SearchState,
    root: usize,
) -> bool {
    let mut frames = vec![Frame {
        u: root,
        next: 0,
        via: usize::MAX,
    }];
    while !frames.is_empty() {
        let depth = frames.len() - 1;
        let u = frames[depth].u;
        let Some(du) = state.dist[u] else {
            frames.pop();
            continue;
        };
        let neighbors = graph.neighbors(LeftId::new(u));
        let mut descended = false;
        while frames[depth].next < neighbors.len() {
            let v = neighbors[frames[depth].next];
            frames[depth].next += 1;
            let partner = matching.right_partner[v];
            // Only follow edges that respect the layering: the partner of v
            // (or the terminal, when v is free) must sit exactly one layer
            // below u.
            let in_layer = match partner {
                None => state.terminal == Some(du + 1),
                Some(w) => state.dist[w.index()] == Some(du + 1),
            };
            if !in_layer {
                continue;
            }
            frames[depth].via = v;
            match partner {
                None => {
                    // Free right vertex reached: flip partners along the
                    // discovered path, innermost pair first.
                    for frame in frames.iter().rev() {
                        matching.left_partner[frame.u] = Some(RightId::new(frame.via));
                        matching.right_partner[frame.via] = Some(LeftId::new(frame.u));
                    }
                    return true;
                }
                Some(w) => {
                    frames.push(Frame {
                        u: w.index(),
                        next: 0,
                        via: usize::MAX,
                    });
                    descended = true;
                    break;
                }
            }
        }
        if !descended {
            state.dist[u] = None;
            frames.pop();
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::bipartite::BipartiteGraph;

    fn graph(m: usize, n: usize, edges: &[(usize, usize)]) -> BipartiteGraph {
        BipartiteGraph::from_edges(
            m,
            n,
            edges.iter().map(|&(u, v)| (LeftId::new(u), RightId::new(v))),
        )
    }

    #[test]
    fn complete_k22_is_perfect() {
        let g = graph(2, 2, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let matching = maximum_matching(&g);
        assert_eq!(matching.size(), 2);
        assert!(matching.is_consistent());
    }

    #[test]
    fn empty_side_matches_nothing() {
        assert_eq!(maximum_matching(&graph(0, 3, &[])).size(), 0);
        assert_eq!(maximum_matching(&graph(3, 0, &[])).size(), 0);
    }

    #[test]
    fn layered_chain_finds_both() {
        // Left 0 shadows right 0; left 1 only reaches right 0. A size-2
        // matching still exists via the blocking-flow phase.
        let g = graph(2, 2, &[(0, 0), (1, 0), (1, 1)]);
        let matching = maximum_matching(&g);
        assert_eq!(matching.size(), 2);
        assert!(matching.is_consistent());
    }

    #[test]
    fn length_three_augmenting_path() {
        // Greedy phase matches (0,0); freeing right 0 for left 1 then needs
        // the alternating path 1 -> 0 -> 0 -> 1.
        let g = graph(2, 2, &[(0, 0), (0, 1), (1, 0)]);
        let matching = maximum_matching(&g);
        assert_eq!(matching.size(), 2);
        assert!(matching.is_consistent());
        assert_eq!(matching.partner_of_left(LeftId::new(1)), Some(RightId::new(0)));
        assert_eq!(matching.partner_of_left(LeftId::new(0)), Some(RightId::new(1)));
    }

    #[test]
    fn star_matches_once() {
        let g = graph(1, 4, &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(maximum_matching(&g).size(), 1);
    }

    #[test]
    fn duplicate_edges_do_not_inflate() {
        let g = graph(2, 2, &[(0, 0), (0, 0), (0, 0), (1, 1)]);
        let matching = maximum_matching(&g);
        assert_eq!(matching.size(), 2);
        assert!(matching.is_consistent());
    }

    #[test]
    fn pairs_iterates_matched_lefts() {
        let g = graph(3, 3, &[(0, 2), (2, 0)]);
        let matching = maximum_matching(&g);
        let pairs: Vec<_> = matching.pairs().collect();
        assert_eq!(
            pairs,
            vec![
                (LeftId::new(0), RightId::new(2)),
                (LeftId::new(2), RightId::new(0)),
            ]
        );
        assert_eq!(matching.partner_of_left(LeftId::new(1)), None);
        assert_eq!(matching.partner_of_right(RightId::new(1)), None);
    }
}
