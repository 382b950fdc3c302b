use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Progress logging that works in both hosts: the browser console when
/// running as WebAssembly, the `log` facade everywhere else.
macro_rules! console_log {
    ($($t:tt)*) => {
        #[cfg(target_arch = "wasm32")] {
            web_sys::console::log_1(&format!($($t)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))] {
            log::info!($($t)*);
        }
    };
}

pub mod config;
pub mod cube;
pub mod error;
pub mod face_map;
pub mod heuristics;
pub mod notation;
pub mod solver;
mod traverse_combinations;
mod vector3d;

pub use config::SolverConfig;
pub use cube::{Axis, Color, CubeState, Face, Move};
pub use error::{CubeError, Result, SolveFailure};
pub use solver::{solve, solve_named, SolveResult, SolverKind};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// A scrambled cube as handed to a host: the resulting state and the moves
/// that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scramble {
    pub state: String,
    pub notation: String,
    pub moves: Vec<Move>,
}

pub fn scramble_with<R: rand::Rng + ?Sized>(
    size: usize,
    count: usize,
    rng: &mut R,
) -> Result<Scramble> {
    let mut cube = CubeState::new(size)?;
    let moves = cube.generate_scramble_moves_with(count, rng);
    cube.apply_moves(&moves)?;
    Ok(Scramble {
        state: cube.to_notation_string(),
        notation: notation::format_sequence(&moves, size)?,
        moves,
    })
}

fn solve_state_string(size: usize, state: &str, solver: &str) -> Result<SolveResult> {
    let cube = CubeState::from_notation_string(state, size)?;
    solve_named(solver, &cube, &SolverConfig::default())
}

fn to_js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Solve a cube given as a color-letter state string. Returns the
/// `SolveResult` as JSON.
#[wasm_bindgen]
pub fn solve_cube(size: usize, state: &str, solver: &str) -> std::result::Result<String, JsValue> {
    let result = solve_state_string(size, state, solver).map_err(to_js_error)?;
    serde_json::to_string(&result).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn scramble_cube(size: usize, count: usize) -> std::result::Result<String, JsValue> {
    let scramble = scramble_with(size, count, &mut rand::thread_rng()).map_err(to_js_error)?;
    serde_json::to_string(&scramble).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_scramble_then_solve_state_string() {
        let mut rng = StdRng::seed_from_u64(1);
        let scramble = scramble_with(2, 3, &mut rng).unwrap();
        assert_eq!(scramble.moves.len(), 3);
        assert_eq!(scramble.notation.split(' ').count(), 3);

        let result = solve_state_string(2, &scramble.state, "BFS").unwrap();
        assert!(result.solved);
        assert!(result.move_count <= 3);

        let mut cube = CubeState::from_notation_string(&scramble.state, 2).unwrap();
        cube.apply_moves(&result.moves).unwrap();
        assert!(cube.is_solved());
    }

    #[test]
    fn test_solve_state_string_errors() {
        assert_eq!(
            solve_state_string(2, "wwww", "BFS"),
            Err(CubeError::InvalidStateLength {
                expected: 24,
                actual: 4
            })
        );
        let solved = CubeState::new(2).unwrap().to_notation_string();
        assert_eq!(
            solve_state_string(2, &solved, "CFOP"),
            Err(CubeError::UnsupportedSolver("CFOP".to_string()))
        );
        assert_eq!(
            solve_state_string(2, &"w".repeat(24), "BFS"),
            Err(CubeError::InvalidColorCounts {
                color: 'w',
                count: 24,
                expected: 4
            })
        );
        assert_eq!(
            scramble_with(1, 3, &mut StdRng::seed_from_u64(0)),
            Err(CubeError::InvalidSize(1))
        );
    }
}
