use std::cell::Cell;

use crate::config::IddfsOpts;
use crate::cube::CubeState;
use crate::error::{Result, SolveFailure};
use crate::traverse_combinations::{traverse_combinations, TraverseResult};

use super::{MoveSet, SearchNode, SearchStats, SolveResult, Solver, Stopwatch};

/// Depth-limited DFS over the full move set, rerun from the input state with
/// a limit one deeper each time.
pub struct IddfsSolver {
    initial_state: CubeState,
    move_set: MoveSet,
    min_depth: usize,
    max_depth: usize,
}

impl Solver for IddfsSolver {
    type Opts = IddfsOpts;

    fn new(initial_state: &CubeState, opts: Self::Opts) -> Result<Self> {
        let size = initial_state.size();
        Ok(IddfsSolver {
            initial_state: initial_state.clone(),
            move_set: MoveSet::full(size)?,
            min_depth: opts.min_depth_for(size),
            max_depth: opts.max_depth_for(size),
        })
    }

    fn solve(self) -> SolveResult {
        let stopwatch = Stopwatch::start();
        let mut stats = SearchStats::default();

        for depth in self.min_depth..=self.max_depth {
            console_log!("IDDFS: searching depth {}", depth);
            // Depths below a raised floor were never ruled out, so the first
            // pass has to keep looking for something shorter.
            let shallowest = if depth == self.min_depth { 1 } else { depth };
            if let Some(path) = self.search(depth, shallowest, &mut stats) {
                console_log!("IDDFS: found {} move solution", path.len());
                return SolveResult::found(self.move_set.moves_for(&path), stats, &stopwatch);
            }
        }

        console_log!("IDDFS: no solution within depth {}", self.max_depth);
        SolveResult::failed(SolveFailure::NoSolutionFound, stats, &stopwatch)
    }
}

impl IddfsSolver {
    /// Depth-limited pass. A solution no longer than `shallowest` ends the
    /// pass at once; a longer one is kept while the rest of the tree is
    /// searched for a shorter one.
    fn search(
        &self,
        depth: usize,
        shallowest: usize,
        stats: &mut SearchStats,
    ) -> Option<Vec<usize>> {
        let turn_indices: Vec<usize> = (0..self.move_set.len()).collect();
        let moves_tried = Cell::new(0);
        let mut solution: Option<Vec<usize>> = None;

        traverse_combinations(
            &turn_indices,
            depth,
            SearchNode::root(&self.initial_state),
            |node: &SearchNode, turn_index: &usize| {
                let child = self.move_set.extend(node, *turn_index)?;
                moves_tried.set(moves_tried.get() + 1);
                Some(child)
            },
            &mut |node| {
                if let Some(best) = &solution {
                    if node.path.len() >= best.len() {
                        return TraverseResult::Skip;
                    }
                }
                stats.comparison_count += 1;
                if !node.state.is_solved() {
                    return TraverseResult::Continue;
                }
                solution = Some(node.path.clone());
                if node.path.len() <= shallowest {
                    TraverseResult::Break
                } else {
                    TraverseResult::Skip
                }
            },
        );

        stats.moves_tried += moves_tried.get();
        solution
    }
}
