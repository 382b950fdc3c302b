use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::SolverConfig;
use crate::cube::{move_face_map, Axis, CubeState, Move};
use crate::error::{CubeError, Result, SolveFailure};
use crate::face_map::FaceMap;
use crate::notation::format_sequence;

mod bfs;
mod iddfs;
mod ida_star;
mod kociemba;

pub use bfs::BfsSolver;
pub use iddfs::IddfsSolver;
pub use ida_star::IdaStarSolver;
#[cfg(not(target_arch = "wasm32"))]
pub use kociemba::HttpKociembaClient;
pub use kociemba::{KociembaClient, KociembaSolver, RemoteError};

pub trait Solver {
    type Opts;

    /// Takes its own copy of `initial_state`; the caller's cube is never
    /// touched.
    fn new(initial_state: &CubeState, opts: Self::Opts) -> Result<Self>
    where
        Self: Sized;

    fn solve(self) -> SolveResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolverKind {
    Iddfs,
    IdaStar,
    Bfs,
    Kociemba,
}

impl FromStr for SolverKind {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<SolverKind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iddfs" => Ok(SolverKind::Iddfs),
            "ida*" | "idastar" | "ida-star" => Ok(SolverKind::IdaStar),
            "bfs" => Ok(SolverKind::Bfs),
            "kociemba" => Ok(SolverKind::Kociemba),
            _ => Err(CubeError::UnsupportedSolver(s.to_string())),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolverKind::Iddfs => "IDDFS",
            SolverKind::IdaStar => "IDA*",
            SolverKind::Bfs => "BFS",
            SolverKind::Kociemba => "Kociemba",
        };
        f.write_str(name)
    }
}

/// What a solver run hands back. Negative outcomes are reported through
/// `failure` with `solved == false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    pub moves: Vec<Move>,
    /// `moves` in face notation, when every move has a spelling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notation: Option<String>,
    pub comparison_count: u64,
    pub move_count: usize,
    pub moves_tried: u64,
    pub time_taken_ms: f64,
    pub solved: bool,
    pub failure: Option<SolveFailure>,
}

impl SolveResult {
    pub(crate) fn found(moves: Vec<Move>, stats: SearchStats, stopwatch: &Stopwatch) -> Self {
        SolveResult {
            move_count: moves.len(),
            moves,
            notation: None,
            comparison_count: stats.comparison_count,
            moves_tried: stats.moves_tried,
            time_taken_ms: stopwatch.elapsed_ms(),
            solved: true,
            failure: None,
        }
    }

    pub(crate) fn failed(failure: SolveFailure, stats: SearchStats, stopwatch: &Stopwatch) -> Self {
        SolveResult {
            moves: vec![],
            notation: None,
            comparison_count: stats.comparison_count,
            move_count: 0,
            moves_tried: stats.moves_tried,
            time_taken_ms: stopwatch.elapsed_ms(),
            solved: false,
            failure: Some(failure),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SearchStats {
    /// Solved checks performed.
    pub comparison_count: u64,
    /// Moves applied to a working state.
    pub moves_tried: u64,
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) struct Stopwatch(std::time::Instant);

#[cfg(not(target_arch = "wasm32"))]
impl Stopwatch {
    pub fn start() -> Stopwatch {
        Stopwatch(std::time::Instant::now())
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.0.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) struct Stopwatch(f64);

#[cfg(target_arch = "wasm32")]
impl Stopwatch {
    pub fn start() -> Stopwatch {
        Stopwatch(js_sys::Date::now())
    }

    pub fn elapsed_ms(&self) -> f64 {
        js_sys::Date::now() - self.0
    }
}

/// A move together with the sticker permutation it performs.
#[derive(Debug, Clone)]
pub struct Turn {
    pub mv: Move,
    pub face_map: FaceMap,
    inverse: usize,
}

/// The moves a search may expand, with their permutations computed once up
/// front.
#[derive(Debug, Clone)]
pub struct MoveSet {
    turns: Vec<Turn>,
}

impl MoveSet {
    /// Every single layer on every axis in both directions.
    pub fn full(size: usize) -> Result<MoveSet> {
        MoveSet::from_layers(size, 0..size)
    }

    /// Layers `0..ceil(n/2)` on every axis. Together with whole-cube
    /// rotations these reach every state, which is all the relaxed solved
    /// check needs.
    pub fn lower_half(size: usize) -> Result<MoveSet> {
        MoveSet::from_layers(size, 0..(size + 1) / 2)
    }

    pub fn from_layers(size: usize, layers: impl IntoIterator<Item = usize>) -> Result<MoveSet> {
        // Clockwise and counter-clockwise twins sit next to each other, so
        // the inverse of turn `i` is turn `i ^ 1`.
        let mut turns = vec![];
        for layer in layers {
            for axis in Axis::ALL {
                for clockwise in [true, false] {
                    let mv = Move::single(layer, axis, clockwise);
                    turns.push(Turn {
                        face_map: move_face_map(size, &mv)?,
                        mv,
                        inverse: turns.len() ^ 1,
                    });
                }
            }
        }
        Ok(MoveSet { turns })
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Same layers, same axis, opposite direction.
    pub fn undoes(&self, previous: usize, next: usize) -> bool {
        self.turns[previous].inverse == next
    }

    pub fn moves_for(&self, path: &[usize]) -> Vec<Move> {
        path.iter()
            .map(|turn_index| self.turns[*turn_index].mv.clone())
            .collect()
    }

    /// Extend a search node by one turn. Returns `None` for the direct
    /// inverse of the node's last turn.
    pub(crate) fn extend(&self, node: &SearchNode, turn_index: usize) -> Option<SearchNode> {
        if let Some(&previous) = node.path.last() {
            if self.undoes(previous, turn_index) {
                return None;
            }
        }
        let mut state = node.state.clone();
        state.apply_face_map(&self.turns[turn_index].face_map);
        let mut path = Vec::with_capacity(node.path.len() + 1);
        path.extend_from_slice(&node.path);
        path.push(turn_index);
        Some(SearchNode { state, path })
    }
}

/// One frame of a depth-first search: the state reached and the turns taken
/// from the root.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub state: CubeState,
    pub path: Vec<usize>,
}

impl SearchNode {
    pub fn root(state: &CubeState) -> SearchNode {
        SearchNode {
            state: state.clone(),
            path: vec![],
        }
    }
}

/// Run the selected solver on `cube` and fill in the face notation of the
/// result.
pub fn solve(kind: SolverKind, cube: &CubeState, config: &SolverConfig) -> Result<SolveResult> {
    console_log!("{}: solving {}x{} cube", kind, cube.size(), cube.size());
    let mut result = match kind {
        SolverKind::Iddfs => IddfsSolver::new(cube, config.iddfs.clone())?.solve(),
        SolverKind::IdaStar => IdaStarSolver::new(cube, config.ida_star.clone())?.solve(),
        SolverKind::Bfs => BfsSolver::new(cube, config.bfs.clone())?.solve(),
        SolverKind::Kociemba => kociemba::solve_with_default_client(cube, &config.kociemba)?,
    };
    result.notation = format_sequence(&result.moves, cube.size()).ok();
    console_log!(
        "{}: solved={} moves={} comparisons={} in {:.1}ms",
        kind,
        result.solved,
        result.move_count,
        result.comparison_count,
        result.time_taken_ms
    );
    Ok(result)
}

pub fn solve_named(name: &str, cube: &CubeState, config: &SolverConfig) -> Result<SolveResult> {
    solve(name.parse()?, cube, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_kind_names() {
        assert_eq!("IDDFS".parse::<SolverKind>(), Ok(SolverKind::Iddfs));
        assert_eq!("ida*".parse::<SolverKind>(), Ok(SolverKind::IdaStar));
        assert_eq!("IDAStar".parse::<SolverKind>(), Ok(SolverKind::IdaStar));
        assert_eq!("IDA-Star".parse::<SolverKind>(), Ok(SolverKind::IdaStar));
        assert_eq!("bfs".parse::<SolverKind>(), Ok(SolverKind::Bfs));
        assert_eq!("Kociemba".parse::<SolverKind>(), Ok(SolverKind::Kociemba));
        assert_eq!(SolverKind::IdaStar.to_string(), "IDA*");
    }

    #[test]
    fn test_dispatch_rejects_unknown_solver() {
        let cube = CubeState::new(3).unwrap();
        assert_eq!(
            solve_named("CFOP", &cube, &SolverConfig::default()),
            Err(CubeError::UnsupportedSolver("CFOP".to_string()))
        );
    }

    #[test]
    fn test_move_sets() {
        let full = MoveSet::full(3).unwrap();
        assert_eq!(full.len(), 18);
        let half = MoveSet::lower_half(3).unwrap();
        assert_eq!(half.len(), 12);
        assert_eq!(MoveSet::lower_half(2).unwrap().len(), 6);
        for (index, turn) in full.turns().iter().enumerate() {
            let inverse = turn.mv.inverse();
            let inverse_index = full
                .turns()
                .iter()
                .position(|other| other.mv == inverse)
                .unwrap();
            assert!(full.undoes(index, inverse_index));
            assert!(turn.face_map.apply(&full.turns()[inverse_index].face_map).is_identity());
        }
    }

    #[test]
    fn test_extend_refuses_direct_inverse() {
        let move_set = MoveSet::full(2).unwrap();
        let root = SearchNode::root(&CubeState::new(2).unwrap());
        let child = move_set.extend(&root, 0).unwrap();
        assert_eq!(child.path, vec![0]);
        assert!(!child.state.is_solved());
        // Index 1 is the counter-clockwise twin of index 0.
        assert!(move_set.extend(&child, 1).is_none());
        assert!(move_set.extend(&child, 0).is_some());
    }

    #[test]
    fn test_every_solver_on_solved_cube() {
        let cube = CubeState::new(2).unwrap();
        for kind in [SolverKind::Iddfs, SolverKind::IdaStar, SolverKind::Bfs] {
            let result = solve(kind, &cube, &SolverConfig::default()).unwrap();
            assert!(result.solved, "{}", kind);
            assert!(result.moves.is_empty());
            assert_eq!(result.notation.as_deref(), Some(""));
        }
    }

    #[test]
    fn test_result_json_keys() {
        let result = SolveResult {
            moves: vec![Move::single(1, Axis::X, false)],
            notation: Some("R'".to_string()),
            comparison_count: 12,
            move_count: 1,
            moves_tried: 11,
            time_taken_ms: 0.5,
            solved: true,
            failure: None,
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"moves":[{"layers":[1],"axis":"X","clockwise":false}],"notation":"R'","comparisonCount":12,"moveCount":1,"movesTried":11,"timeTakenMs":0.5,"solved":true,"failure":null}"#
        );
    }
}
