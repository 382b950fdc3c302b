//! Conversions between the internal move and state representations and the
//! standard face notation used by cubers and by Kociemba-style solvers.
//!
//! Moves: `R`, `U'`, `2F` (second layer from F), `3Rw` (three layers from R),
//! `Rw` (two layers), `x`/`y`/`z` (whole cube). Sequences additionally accept
//! a `2` suffix for half turns.
//!
//! States: `6·n²` letters in face order U, R, F, D, L, B, each face row-major,
//! either as color letters or as Kociemba face letters.

use crate::cube::{Axis, Color, CubeState, Face, Move};
use crate::error::{CubeError, Result};

fn axis_face(axis: Axis, high_side: bool) -> Face {
    match (axis, high_side) {
        (Axis::X, true) => Face::Right,
        (Axis::X, false) => Face::Left,
        (Axis::Y, true) => Face::Up,
        (Axis::Y, false) => Face::Down,
        (Axis::Z, true) => Face::Front,
        (Axis::Z, false) => Face::Back,
    }
}

fn rotation_axis(letter: char) -> Option<Axis> {
    match letter {
        'x' => Some(Axis::X),
        'y' => Some(Axis::Y),
        'z' => Some(Axis::Z),
        _ => None,
    }
}

fn rotation_letter(axis: Axis) -> char {
    match axis {
        Axis::X => 'x',
        Axis::Y => 'y',
        Axis::Z => 'z',
    }
}

/// Parse one quarter-turn token.
pub fn parse_move(token: &str, size: usize) -> Result<Move> {
    let unknown = || CubeError::UnknownFace(token.to_string());
    let digits_end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    let (digits, rest) = token.split_at(digits_end);
    let mut chars = rest.chars();
    let letter = chars.next().ok_or_else(unknown)?;

    let mut wide = false;
    let mut prime = false;
    for modifier in chars {
        match modifier {
            'w' if !wide && !prime => wide = true,
            '\'' if !prime => prime = true,
            _ => return Err(unknown()),
        }
    }

    if let Some(axis) = rotation_axis(letter) {
        if !digits.is_empty() || wide {
            return Err(unknown());
        }
        return Ok(Move::new((0..size).collect(), axis, !prime));
    }

    let face = Face::from_letter(letter).ok_or_else(unknown)?;
    let (axis, high_side) = face.axis_side();
    let depth = match (digits.is_empty(), wide) {
        (true, false) => 1,
        (true, true) => 2,
        (false, _) => digits.parse::<usize>().map_err(|_| unknown())?,
    };
    if depth == 0 {
        return Err(unknown());
    }
    if depth > size {
        return Err(CubeError::LayerOutOfRange {
            layer: depth - 1,
            size,
        });
    }

    let layer_at_depth = |depth: usize| {
        if high_side {
            size - depth
        } else {
            depth - 1
        }
    };
    let layers = if wide {
        (1..=depth).map(layer_at_depth).collect()
    } else {
        vec![layer_at_depth(depth)]
    };
    // L, D and B turn clockwise as seen from their own side, which is
    // counter-clockwise about the axis.
    Ok(Move::new(layers, axis, high_side != prime))
}

/// Write a move in face notation. Inner single layers are counted from the
/// nearer face; wide moves must start at an outer layer.
pub fn to_notation(mv: &Move, size: usize) -> Result<String> {
    if mv.layers.is_empty() {
        return Err(CubeError::EmptyLayerSet);
    }
    let mut layers = mv.layers.clone();
    layers.sort_unstable();
    layers.dedup();
    if let Some(&layer) = layers.iter().find(|layer| **layer >= size) {
        return Err(CubeError::LayerOutOfRange { layer, size });
    }

    let count = layers.len();
    if count == size {
        let suffix = if mv.clockwise { "" } else { "'" };
        return Ok(format!("{}{}", rotation_letter(mv.axis), suffix));
    }

    let is_block_from = |start: usize| {
        layers
            .iter()
            .enumerate()
            .all(|(i, layer)| *layer == start + i)
    };
    let (high_side, depth, wide) = if count == 1 {
        let layer = layers[0];
        if layer >= size / 2 {
            (true, size - layer, false)
        } else {
            (false, layer + 1, false)
        }
    } else if is_block_from(size - count) {
        (true, count, true)
    } else if is_block_from(0) {
        (false, count, true)
    } else {
        return Err(CubeError::UnrepresentableMove(mv.to_string()));
    };

    let mut notation = match (wide, depth) {
        (false, 1) | (true, 2) => String::new(),
        _ => depth.to_string(),
    };
    notation.push(axis_face(mv.axis, high_side).letter());
    if wide {
        notation.push('w');
    }
    if high_side != mv.clockwise {
        notation.push('\'');
    }
    Ok(notation)
}

/// Parse a whitespace separated sequence. `R2` and `R2'` become two quarter
/// turns.
pub fn parse_sequence(sequence: &str, size: usize) -> Result<Vec<Move>> {
    let mut moves = vec![];
    for token in sequence.split_whitespace() {
        let half_turn_base = token
            .strip_suffix("2'")
            .or_else(|| token.strip_suffix("'2"))
            .or_else(|| token.strip_suffix('2'));
        match half_turn_base {
            Some(base) if !base.is_empty() && !base.chars().all(|c| c.is_ascii_digit()) => {
                let mv = parse_move(base, size)?;
                moves.push(mv.clone());
                moves.push(mv);
            }
            _ => moves.push(parse_move(token, size)?),
        }
    }
    Ok(moves)
}

pub fn format_sequence(moves: &[Move], size: usize) -> Result<String> {
    let tokens = moves
        .iter()
        .map(|mv| to_notation(mv, size))
        .collect::<Result<Vec<_>>>()?;
    Ok(tokens.join(" "))
}

/// Face letter for every sticker color, read off a freshly initialized cube
/// so that a palette change on the solved cube carries through here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceColorTable {
    colors: [Color; 6],
}

impl FaceColorTable {
    pub fn from_solved_cube(solved: &CubeState) -> FaceColorTable {
        FaceColorTable {
            colors: Face::ALL.map(|face| solved.get(face, 0, 0)),
        }
    }

    pub fn for_size(size: usize) -> Result<FaceColorTable> {
        Ok(FaceColorTable::from_solved_cube(&CubeState::new(size)?))
    }

    pub fn color_for(&self, face: Face) -> Color {
        self.colors[face.index()]
    }

    pub fn face_for(&self, color: Color) -> Option<Face> {
        Face::ALL
            .into_iter()
            .find(|face| self.colors[face.index()] == color)
    }
}

/// Kociemba facelet string: each sticker named by the face whose center
/// color it carries.
pub fn to_kociemba_string(cube: &CubeState) -> Result<String> {
    let table = FaceColorTable::for_size(cube.size())?;
    cube.stickers()
        .iter()
        .map(|color| {
            table
                .face_for(*color)
                .map(Face::letter)
                .ok_or(CubeError::UnknownSticker(color.letter()))
        })
        .collect()
}

pub fn from_kociemba_string(facelets: &str, size: usize) -> Result<CubeState> {
    let table = FaceColorTable::for_size(size)?;
    let stickers = facelets
        .chars()
        .map(|letter| {
            Face::from_letter(letter)
                .map(|face| table.color_for(face))
                .ok_or(CubeError::UnknownSticker(letter))
        })
        .collect::<Result<Vec<_>>>()?;
    CubeState::from_stickers(size, stickers)
}

/// Cube size implied by the length of a state string.
pub fn infer_size(num_stickers: usize) -> Result<usize> {
    let size = ((num_stickers as f64 / 6.0).sqrt().round() as usize).max(2);
    if 6 * size * size == num_stickers {
        Ok(size)
    } else {
        Err(CubeError::InvalidStateLength {
            expected: 6 * size * size,
            actual: num_stickers,
        })
    }
}

/// Read a state string in either alphabet, inferring the size from its
/// length. Upper-case letters are taken as Kociemba face letters.
pub fn parse_state_string(state: &str) -> Result<CubeState> {
    let size = infer_size(state.chars().count())?;
    if state.chars().all(|letter| Face::from_letter(letter).is_some()) {
        from_kociemba_string(state, size)
    } else {
        CubeState::from_notation_string(state, size)
    }
}
