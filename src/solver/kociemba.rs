//! Hands the cube to an external two-phase solver and reads back its move
//! sequence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
use crate::config::KociembaOpts;
use crate::cube::{CubeState, Move};
use crate::error::{CubeError, Result, SolveFailure};
use crate::notation::{parse_sequence, to_kociemba_string};

use super::{SearchStats, SolveResult, Solver, Stopwatch};

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("failed to parse reply: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("solver service error: {0}")]
    ServiceError(String),

    #[error("unusable move sequence: {0}")]
    InvalidMoves(#[from] CubeError),
}

/// Request/response boundary to the remote solver: a facelet string goes
/// out, a whitespace separated move sequence comes back.
pub trait KociembaClient {
    fn request_solution(&self, facelets: &str) -> std::result::Result<String, RemoteError>;
}

#[derive(Serialize)]
struct SolveRequest<'a> {
    state: &'a str,
}

#[derive(Deserialize)]
struct SolveReply {
    solution: Option<String>,
    detail: Option<String>,
}

fn parse_reply(body: &str) -> std::result::Result<String, RemoteError> {
    let reply: SolveReply = serde_json::from_str(body)?;
    match (reply.solution, reply.detail) {
        (Some(solution), _) => Ok(solution),
        (None, Some(detail)) => Err(RemoteError::ServiceError(detail)),
        (None, None) => Err(RemoteError::ServiceError(
            "reply has no solution".to_string(),
        )),
    }
}

/// POSTs `{"state": ...}` as JSON and reads the `solution` field.
#[cfg(not(target_arch = "wasm32"))]
pub struct HttpKociembaClient {
    url: String,
    timeout: std::time::Duration,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpKociembaClient {
    pub fn new(opts: &KociembaOpts) -> Self {
        Self {
            url: opts.url.clone(),
            timeout: std::time::Duration::from_millis(opts.timeout_ms),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KociembaClient for HttpKociembaClient {
    fn request_solution(&self, facelets: &str) -> std::result::Result<String, RemoteError> {
        let body = serde_json::to_string(&SolveRequest { state: facelets })?;
        log::debug!("POST {} {}", self.url, body);

        let response = ureq::post(&self.url)
            .timeout(self.timeout)
            .set("Content-Type", "application/json")
            .send_string(&body);
        let reply = match response {
            Ok(response) => response
                .into_string()
                .map_err(|e| RemoteError::HttpError(e.to_string()))?,
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(match parse_reply(&body) {
                    Err(RemoteError::ServiceError(detail)) => RemoteError::ServiceError(detail),
                    _ => RemoteError::ServiceError(format!("status {}", code)),
                });
            }
            Err(e) => return Err(RemoteError::HttpError(e.to_string())),
        };

        parse_reply(&reply)
    }
}

/// Stands in for the HTTP client where there is no socket access.
#[cfg(target_arch = "wasm32")]
struct NoHttpClient;

#[cfg(target_arch = "wasm32")]
impl KociembaClient for NoHttpClient {
    fn request_solution(&self, _facelets: &str) -> std::result::Result<String, RemoteError> {
        Err(RemoteError::HttpError(
            "no HTTP client on this target".to_string(),
        ))
    }
}

pub struct KociembaSolver<C> {
    initial_state: CubeState,
    client: C,
}

impl<C: KociembaClient> Solver for KociembaSolver<C> {
    type Opts = C;

    fn new(initial_state: &CubeState, client: Self::Opts) -> Result<Self> {
        Ok(KociembaSolver {
            initial_state: initial_state.clone(),
            client,
        })
    }

    /// Never fails hard: anything that goes wrong on the way to the service
    /// and back is reported as an unavailable remote solver with no moves.
    fn solve(self) -> SolveResult {
        let stopwatch = Stopwatch::start();
        let stats = SearchStats::default();
        match self.request_moves() {
            Ok(moves) => {
                let mut cube = self.initial_state.clone();
                let solved = cube.apply_moves(&moves).is_ok() && cube.is_solved();
                if !solved {
                    console_log!("Kociemba: remote solution does not solve the cube");
                }
                SolveResult {
                    solved,
                    ..SolveResult::found(moves, stats, &stopwatch)
                }
            }
            Err(reason) => {
                console_log!("Kociemba: {}", reason);
                SolveResult::failed(
                    SolveFailure::RemoteSolverUnavailable(reason.to_string()),
                    stats,
                    &stopwatch,
                )
            }
        }
    }
}

impl<C: KociembaClient> KociembaSolver<C> {
    fn request_moves(&self) -> std::result::Result<Vec<Move>, RemoteError> {
        let facelets = to_kociemba_string(&self.initial_state)?;
        let solution = self.client.request_solution(&facelets)?;
        Ok(parse_solution(&solution, self.initial_state.size())?)
    }
}

/// The service may print a label before the moves; a first token that is
/// not a move is dropped.
fn parse_solution(solution: &str, size: usize) -> Result<Vec<Move>> {
    let mut tokens = solution.split_whitespace().peekable();
    if let Some(first) = tokens.peek() {
        if parse_sequence(first, size).is_err() {
            tokens.next();
        }
    }
    parse_sequence(&tokens.collect::<Vec<_>>().join(" "), size)
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn solve_with_default_client(
    cube: &CubeState,
    opts: &KociembaOpts,
) -> Result<SolveResult> {
    Ok(KociembaSolver::new(cube, HttpKociembaClient::new(opts))?.solve())
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn solve_with_default_client(
    cube: &CubeState,
    _opts: &crate::config::KociembaOpts,
) -> Result<SolveResult> {
    Ok(KociembaSolver::new(cube, NoHttpClient)?.solve())
}
