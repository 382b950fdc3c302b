use std::cell::Cell;

use crate::config::IdaStarOpts;
use crate::cube::CubeState;
use crate::error::{Result, SolveFailure};
use crate::heuristics::Heuristic;
use crate::traverse_combinations::{traverse_combinations, TraverseResult};

use super::{MoveSet, SearchNode, SearchStats, SolveResult, Solver, Stopwatch};

/// Cost-bounded DFS with `f = g + h`. The smallest `f` that was pruned in
/// one iteration becomes the bound of the next.
pub struct IdaStarSolver {
    initial_state: CubeState,
    move_set: MoveSet,
    heuristic: Heuristic,
    max_threshold: f64,
}

#[derive(Debug, PartialEq)]
enum Iteration {
    Found(Vec<usize>),
    Pruned { next_threshold: f64 },
    Exhausted,
}

impl Solver for IdaStarSolver {
    type Opts = IdaStarOpts;

    fn new(initial_state: &CubeState, opts: Self::Opts) -> Result<Self> {
        let size = initial_state.size();
        let move_set = if opts.full_move_set {
            MoveSet::full(size)?
        } else {
            MoveSet::lower_half(size)?
        };
        Ok(IdaStarSolver {
            initial_state: initial_state.clone(),
            move_set,
            heuristic: opts.heuristic,
            max_threshold: opts.max_threshold_for(size),
        })
    }

    fn solve(self) -> SolveResult {
        let stopwatch = Stopwatch::start();
        let mut stats = SearchStats::default();
        let mut threshold = self.heuristic.evaluate(&self.initial_state);

        while threshold <= self.max_threshold {
            console_log!("IDA*: searching with threshold {}", threshold);
            match self.search(threshold, &mut stats) {
                Iteration::Found(path) => {
                    console_log!("IDA*: found {} move solution", path.len());
                    return SolveResult::found(self.move_set.moves_for(&path), stats, &stopwatch);
                }
                Iteration::Pruned { next_threshold } => threshold = next_threshold,
                Iteration::Exhausted => {
                    console_log!("IDA*: nothing left to expand at threshold {}", threshold);
                    break;
                }
            }
        }

        SolveResult::failed(SolveFailure::NoSolutionFound, stats, &stopwatch)
    }
}

impl IdaStarSolver {
    fn search(&self, threshold: f64, stats: &mut SearchStats) -> Iteration {
        let turn_indices: Vec<usize> = (0..self.move_set.len()).collect();
        let moves_tried = Cell::new(0);
        let mut solution = None;
        let mut next_threshold: Option<f64> = None;

        // g grows by one per move and h is never negative, so nothing deeper
        // than floor(threshold) + 1 can pass the bound.
        let depth_limit = threshold.floor() as usize + 1;
        traverse_combinations(
            &turn_indices,
            depth_limit,
            SearchNode::root(&self.initial_state),
            |node: &SearchNode, turn_index: &usize| {
                let child = self.move_set.extend(node, *turn_index)?;
                moves_tried.set(moves_tried.get() + 1);
                Some(child)
            },
            &mut |node| {
                stats.comparison_count += 1;
                if node.state.is_solved() {
                    solution = Some(node.path.clone());
                    return TraverseResult::Break;
                }
                let f = node.path.len() as f64 + self.heuristic.evaluate(&node.state);
                if f > threshold {
                    next_threshold = Some(next_threshold.map_or(f, |t| t.min(f)));
                    return TraverseResult::Skip;
                }
                TraverseResult::Continue
            },
        );

        stats.moves_tried += moves_tried.get();
        match (solution, next_threshold) {
            (Some(path), _) => Iteration::Found(path),
            (None, Some(next_threshold)) => Iteration::Pruned { next_threshold },
            (None, None) => Iteration::Exhausted,
        }
    }
}
