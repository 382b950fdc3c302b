use std::collections::HashSet;

use crate::config::BfsOpts;
use crate::cube::CubeState;
use crate::error::{Result, SolveFailure};

use super::{MoveSet, SearchStats, SolveResult, Solver, Stopwatch};

/// Level-by-level search over the full move set. The first solved state
/// found is at the smallest depth, so the returned solution is as short as
/// any solution in the move set.
pub struct BfsSolver {
    initial_state: CubeState,
    move_set: MoveSet,
    max_depth: usize,
    max_states: usize,
}

/// How a state was reached: the node it came from and the turn taken.
struct Parent {
    node: Option<usize>,
    turn: usize,
}

struct FringeEntry {
    state: CubeState,
    node: Option<usize>,
    most_recent_turn: Option<usize>,
}

impl Solver for BfsSolver {
    type Opts = BfsOpts;

    fn new(initial_state: &CubeState, opts: Self::Opts) -> Result<Self> {
        let size = initial_state.size();
        Ok(BfsSolver {
            initial_state: initial_state.clone(),
            move_set: MoveSet::full(size)?,
            max_depth: opts.max_depth_for(size),
            max_states: opts.max_states_for(size),
        })
    }

    fn solve(self) -> SolveResult {
        let stopwatch = Stopwatch::start();
        let mut stats = SearchStats {
            comparison_count: 1,
            moves_tried: 0,
        };
        if self.initial_state.is_solved() {
            return SolveResult::found(vec![], stats, &stopwatch);
        }

        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(self.initial_state.to_notation_string());
        let mut parents: Vec<Parent> = vec![];
        let mut fringe = vec![FringeEntry {
            state: self.initial_state.clone(),
            node: None,
            most_recent_turn: None,
        }];

        for depth in 1..=self.max_depth {
            console_log!("BFS: depth {}, fringe len {}", depth, fringe.len());
            let capacity = self.next_fringe_capacity(fringe.len(), visited.len());
            let mut new_fringe = Vec::with_capacity(capacity);
            for entry in &fringe {
                for (turn_index, turn) in self.move_set.turns().iter().enumerate() {
                    if let Some(most_recent_turn) = entry.most_recent_turn {
                        if self.move_set.undoes(most_recent_turn, turn_index) {
                            continue;
                        }
                    }
                    let mut state = entry.state.clone();
                    state.apply_face_map(&turn.face_map);
                    stats.moves_tried += 1;
                    if !visited.insert(state.to_notation_string()) {
                        continue;
                    }

                    parents.push(Parent {
                        node: entry.node,
                        turn: turn_index,
                    });
                    let node = parents.len() - 1;
                    stats.comparison_count += 1;
                    if state.is_solved() {
                        let path = trace_path(&parents, node);
                        let moves = self.move_set.moves_for(&path);
                        return SolveResult::found(moves, stats, &stopwatch);
                    }
                    if visited.len() >= self.max_states {
                        console_log!("BFS: gave up after {} states", visited.len());
                        return SolveResult::failed(
                            SolveFailure::NoSolutionFound,
                            stats,
                            &stopwatch,
                        );
                    }
                    new_fringe.push(FringeEntry {
                        state,
                        node: Some(node),
                        most_recent_turn: Some(turn_index),
                    });
                }
            }
            if new_fringe.is_empty() {
                break;
            }
            fringe = new_fringe;
        }

        console_log!("BFS: no solution within depth {}", self.max_depth);
        SolveResult::failed(SolveFailure::NoSolutionFound, stats, &stopwatch)
    }
}

impl BfsSolver {
    /// Room for the next level: every child of the fringe, but never more
    /// entries than the state bound still allows.
    fn next_fringe_capacity(&self, fringe_len: usize, visited: usize) -> usize {
        fringe_len
            .saturating_mul(self.move_set.len())
            .min(self.max_states.saturating_sub(visited))
    }
}

/// Turn indices from the root to `node`.
fn trace_path(parents: &[Parent], node: usize) -> Vec<usize> {
    let mut path = vec![];
    let mut current = Some(node);
    while let Some(index) = current {
        path.push(parents[index].turn);
        current = parents[index].node;
    }
    path.reverse();
    path
}
