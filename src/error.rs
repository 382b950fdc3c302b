//! Error types for cube construction, rotation, notation and solver dispatch.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for fallible cube operations.
pub type Result<T> = std::result::Result<T, CubeError>;

/// Structural errors. These abort the operation that raised them and never
/// leave a cube half-mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// A cube needs at least two layers per axis.
    #[error("invalid cube size {0}: a cube needs at least 2 layers")]
    InvalidSize(usize),

    /// A move named a layer outside `0..size`.
    #[error("layer {layer} is out of range for a {size}x{size} cube")]
    LayerOutOfRange { layer: usize, size: usize },

    /// A move named no layer at all.
    #[error("move does not name any layer")]
    EmptyLayerSet,

    /// Move notation used a letter that is not a face or a cube rotation.
    #[error("unknown face in move notation: {0:?}")]
    UnknownFace(String),

    /// Axis name was not one of X, Y or Z.
    #[error("unknown axis: {0:?}")]
    UnknownAxis(String),

    /// The move turns a set of layers that face notation cannot spell.
    #[error("move cannot be written in face notation: {0}")]
    UnrepresentableMove(String),

    /// A state string had the wrong number of stickers for the cube size.
    #[error("state string has {actual} stickers, expected {expected}")]
    InvalidStateLength { expected: usize, actual: usize },

    /// A state string contained a letter outside its alphabet.
    #[error("unknown sticker {0:?} in state string")]
    UnknownSticker(char),

    /// A state string did not use every color exactly `size * size` times.
    #[error("color {color:?} appears {count} times, expected {expected}")]
    InvalidColorCounts {
        color: char,
        count: usize,
        expected: usize,
    },

    /// Solver dispatch was asked for a solver that does not exist.
    #[error("unsupported solver: {0:?}")]
    UnsupportedSolver(String),
}

/// Normal negative search outcomes. These travel inside a
/// [`SolveResult`](crate::solver::SolveResult) rather than as an `Err`, so a
/// caller can retry with another solver or a larger bound.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "reason")]
pub enum SolveFailure {
    /// The search exhausted its depth, threshold or state bound.
    #[error("no solution found within the search bound")]
    NoSolutionFound,

    /// The remote solver could not be reached or returned garbage.
    #[error("remote solver unavailable: {0}")]
    RemoteSolverUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CubeError::LayerOutOfRange { layer: 3, size: 3 }.to_string(),
            "layer 3 is out of range for a 3x3 cube"
        );
        assert_eq!(
            CubeError::UnsupportedSolver("CFOP".to_string()).to_string(),
            "unsupported solver: \"CFOP\""
        );
        assert_eq!(
            CubeError::InvalidColorCounts {
                color: 'w',
                count: 10,
                expected: 9
            }
            .to_string(),
            "color 'w' appears 10 times, expected 9"
        );
        assert_eq!(
            SolveFailure::RemoteSolverUnavailable("connection refused".to_string()).to_string(),
            "remote solver unavailable: connection refused"
        );
    }

    #[test]
    fn test_failure_serializes_with_kind_tag() {
        let json = serde_json::to_string(&SolveFailure::NoSolutionFound).unwrap();
        assert_eq!(json, r#"{"kind":"NoSolutionFound"}"#);
        let json =
            serde_json::to_string(&SolveFailure::RemoteSolverUnavailable("down".into())).unwrap();
        assert_eq!(json, r#"{"kind":"RemoteSolverUnavailable","reason":"down"}"#);
    }
}
