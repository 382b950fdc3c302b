use std::fmt;
use std::str::FromStr;

use rand::distributions::Uniform;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CubeError, Result};
use crate::face_map::FaceMap;
use crate::vector3d::Vector3D;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Blue,
    ];

    pub fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Yellow => 'y',
            Color::Orange => 'o',
            Color::Blue => 'b',
        }
    }

    pub fn from_letter(letter: char) -> Option<Color> {
        Color::ALL.into_iter().find(|color| color.letter() == letter)
    }
}

/// The six faces, declared in Kociemba order (U, R, F, D, L, B).
/// Sticker storage follows the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Right,
        Face::Front,
        Face::Down,
        Face::Left,
        Face::Back,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.letter() == letter)
    }

    /// The axis this face turns about, and whether it sits at the
    /// high-index end of that axis.
    pub fn axis_side(self) -> (Axis, bool) {
        match self {
            Face::Right => (Axis::X, true),
            Face::Left => (Axis::X, false),
            Face::Up => (Axis::Y, true),
            Face::Down => (Axis::Y, false),
            Face::Front => (Axis::Z, true),
            Face::Back => (Axis::Z, false),
        }
    }

    /// Color of this face on a freshly initialized cube.
    fn solved_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Right => Color::Red,
            Face::Front => Color::Green,
            Face::Down => Color::Yellow,
            Face::Left => Color::Orange,
            Face::Back => Color::Blue,
        }
    }

    fn normal(self) -> Vector3D {
        match self {
            Face::Up => Vector3D::new(0, 1, 0),
            Face::Right => Vector3D::new(1, 0, 0),
            Face::Front => Vector3D::new(0, 0, 1),
            Face::Down => Vector3D::new(0, -1, 0),
            Face::Left => Vector3D::new(-1, 0, 0),
            Face::Back => Vector3D::new(0, 0, -1),
        }
    }

    fn from_normal(normal: Vector3D) -> Face {
        match (normal.x.signum(), normal.y.signum(), normal.z.signum()) {
            (1, _, _) => Face::Right,
            (-1, _, _) => Face::Left,
            (_, 1, _) => Face::Up,
            (_, -1, _) => Face::Down,
            (_, _, 1) => Face::Front,
            _ => Face::Back,
        }
    }
}

/// Layer 0 of X is the L side, of Y the D side, of Z the B side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl FromStr for Axis {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Axis> {
        match s.trim() {
            "X" | "x" => Ok(Axis::X),
            "Y" | "y" => Ok(Axis::Y),
            "Z" | "z" => Ok(Axis::Z),
            other => Err(CubeError::UnknownAxis(other.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

/// A quarter turn of one or more layers about an axis. `clockwise` is as seen
/// looking at the high-index face of the axis (R, U or F).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub layers: Vec<usize>,
    pub axis: Axis,
    pub clockwise: bool,
}

impl Move {
    /// Layers are kept sorted and deduplicated so equal turns compare equal.
    pub fn new(mut layers: Vec<usize>, axis: Axis, clockwise: bool) -> Move {
        layers.sort_unstable();
        layers.dedup();
        Move {
            layers,
            axis,
            clockwise,
        }
    }

    pub fn single(layer: usize, axis: Axis, clockwise: bool) -> Move {
        Move {
            layers: vec![layer],
            axis,
            clockwise,
        }
    }

    pub fn inverse(&self) -> Move {
        Move {
            layers: self.layers.clone(),
            axis: self.axis,
            clockwise: !self.clockwise,
        }
    }

    pub fn is_inverse_of(&self, other: &Move) -> bool {
        self.axis == other.axis && self.layers == other.layers && self.clockwise != other.clockwise
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", self.axis, self.layers)?;
        if !self.clockwise {
            f.write_str("'")?;
        }
        Ok(())
    }
}

/// Six `size × size` grids of stickers.
///
/// The grids live in one buffer, face-major in [`Face::ALL`] order and
/// row-major inside each face. Each face is oriented the way it is drawn in
/// the Kociemba net: U seen from above with B at the top, D seen from below
/// with F at the top, and the four side faces seen from outside with U at
/// the top.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    size: usize,
    stickers: Vec<Color>,
}

impl CubeState {
    pub fn new(size: usize) -> Result<CubeState> {
        if size < 2 {
            return Err(CubeError::InvalidSize(size));
        }
        let stickers = Face::ALL
            .iter()
            .flat_map(|face| std::iter::repeat(face.solved_color()).take(size * size))
            .collect();
        Ok(CubeState { size, stickers })
    }

    /// Build a state from raw stickers laid out like [`CubeState::stickers`].
    pub(crate) fn from_stickers(size: usize, stickers: Vec<Color>) -> Result<CubeState> {
        if size < 2 {
            return Err(CubeError::InvalidSize(size));
        }
        let expected = 6 * size * size;
        if stickers.len() != expected {
            return Err(CubeError::InvalidStateLength {
                expected,
                actual: stickers.len(),
            });
        }
        let mut counts = [0usize; 6];
        for &color in &stickers {
            counts[color as usize] += 1;
        }
        for color in Color::ALL {
            let count = counts[color as usize];
            if count != size * size {
                return Err(CubeError::InvalidColorCounts {
                    color: color.letter(),
                    count,
                    expected: size * size,
                });
            }
        }
        Ok(CubeState { size, stickers })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn num_stickers(&self) -> usize {
        self.stickers.len()
    }

    pub fn stickers(&self) -> &[Color] {
        &self.stickers
    }

    #[inline]
    fn sticker_index(&self, face: Face, row: usize, col: usize) -> usize {
        face.index() * self.size * self.size + row * self.size + col
    }

    pub fn get(&self, face: Face, row: usize, col: usize) -> Color {
        self.stickers[self.sticker_index(face, row, col)]
    }

    /// One face, row-major.
    pub fn face_stickers(&self, face: Face) -> &[Color] {
        let start = face.index() * self.size * self.size;
        &self.stickers[start..start + self.size * self.size]
    }

    /// One face as a grid of rows.
    pub fn face(&self, face: Face) -> Vec<Vec<Color>> {
        self.face_stickers(face)
            .chunks(self.size)
            .map(|row| row.to_vec())
            .collect()
    }

    pub fn reset(&mut self) {
        let size = self.size;
        self.stickers = Face::ALL
            .iter()
            .flat_map(|face| std::iter::repeat(face.solved_color()).take(size * size))
            .collect();
    }

    /// Every face is a single color. Face colors are not checked against the
    /// solved orientation, so a whole-cube rotation of a solved cube counts.
    pub fn is_solved(&self) -> bool {
        Face::ALL.iter().all(|face| {
            let stickers = self.face_stickers(*face);
            stickers.iter().all(|color| *color == stickers[0])
        })
    }

    /// How many stickers of each color, indexed like [`Color::ALL`].
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for color in &self.stickers {
            counts[*color as usize] += 1;
        }
        counts
    }

    pub fn validate_move(&self, mv: &Move) -> Result<()> {
        if mv.layers.is_empty() {
            return Err(CubeError::EmptyLayerSet);
        }
        match mv.layers.iter().find(|layer| **layer >= self.size) {
            Some(&layer) => Err(CubeError::LayerOutOfRange {
                layer,
                size: self.size,
            }),
            None => Ok(()),
        }
    }

    /// Turn the given layers a quarter turn about `axis`.
    /// Fails without touching the stickers if any layer is out of range.
    pub fn rotate(&mut self, layers: &[usize], axis: Axis, clockwise: bool) -> Result<()> {
        self.apply_move(&Move::new(layers.to_vec(), axis, clockwise))
    }

    /// Turn the outer layer under `face`, clockwise as seen looking at
    /// that face.
    pub fn rotate_face(&mut self, face: Face, clockwise: bool) -> Result<()> {
        let (axis, high_side) = face.axis_side();
        let layer = if high_side { self.size - 1 } else { 0 };
        self.rotate(&[layer], axis, clockwise == high_side)
    }

    pub fn apply_move(&mut self, mv: &Move) -> Result<()> {
        let face_map = move_face_map(self.size, mv)?;
        self.apply_face_map(&face_map);
        Ok(())
    }

    /// Apply moves in order. Every move is validated before the first one is
    /// applied.
    pub fn apply_moves(&mut self, moves: &[Move]) -> Result<()> {
        for mv in moves {
            self.validate_move(mv)?;
        }
        for mv in moves {
            self.apply_move(mv)?;
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn apply_face_map(&mut self, face_map: &FaceMap) {
        self.stickers = face_map.permute(&self.stickers);
    }

    pub fn generate_scramble_moves(&self, count: usize) -> Vec<Move> {
        self.generate_scramble_moves_with(count, &mut rand::thread_rng())
    }

    /// Uniformly random layer, axis and direction for each move. Nothing
    /// stops consecutive moves from cancelling each other.
    pub fn generate_scramble_moves_with<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Vec<Move> {
        let layer_range = Uniform::new(0, self.size);
        let axis_range = Uniform::new(0, Axis::ALL.len());
        (0..count)
            .map(|_| {
                Move::single(
                    rng.sample(layer_range),
                    Axis::ALL[rng.sample(axis_range)],
                    rng.gen_bool(0.5),
                )
            })
            .collect()
    }

    pub fn scramble(&mut self, count: usize) -> Result<Vec<Move>> {
        let moves = self.generate_scramble_moves(count);
        self.apply_moves(&moves)?;
        Ok(moves)
    }

    /// Flat color-letter string in Kociemba face order, each face row-major.
    pub fn to_notation_string(&self) -> String {
        self.stickers.iter().map(|color| color.letter()).collect()
    }

    pub fn from_notation_string(state: &str, size: usize) -> Result<CubeState> {
        let stickers = state
            .chars()
            .map(|letter| Color::from_letter(letter).ok_or(CubeError::UnknownSticker(letter)))
            .collect::<Result<Vec<_>>>()?;
        CubeState::from_stickers(size, stickers)
    }
}

impl fmt::Display for CubeState {
    /// The unfolded net: U on top, then L F R B side by side, then D.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size;
        let indent = " ".repeat(n * 2);
        let row_string = |face: Face, row: usize| {
            (0..n)
                .map(|col| self.get(face, row, col).letter().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        for row in 0..n {
            writeln!(f, "{}{}", indent, row_string(Face::Up, row))?;
        }
        for row in 0..n {
            writeln!(
                f,
                "{} {} {} {}",
                row_string(Face::Left, row),
                row_string(Face::Front, row),
                row_string(Face::Right, row),
                row_string(Face::Back, row)
            )?;
        }
        for row in 0..n {
            writeln!(f, "{}{}", indent, row_string(Face::Down, row))?;
        }
        Ok(())
    }
}

/// Where a sticker sits: the cubie it belongs to, on the doubled centered
/// lattice, and the outward normal of the face it is on.
fn lattice_position(size: usize, face: Face, row: usize, col: usize) -> (Vector3D, Vector3D) {
    let last = size - 1;
    let (ix, iy, iz) = match face {
        Face::Up => (col, last, row),
        Face::Right => (last, last - row, last - col),
        Face::Front => (col, last - row, last),
        Face::Down => (col, 0, last - row),
        Face::Left => (0, last - row, col),
        Face::Back => (last - col, last - row, 0),
    };
    let centered = |index: usize| 2 * index as i32 - last as i32;
    (
        Vector3D::new(centered(ix), centered(iy), centered(iz)),
        face.normal(),
    )
}

/// Inverse of [`lattice_position`], as an index into the sticker buffer.
fn sticker_index_at(size: usize, position: Vector3D, normal: Vector3D) -> usize {
    let last = size - 1;
    let layer = |centered: i32| ((centered + last as i32) / 2) as usize;
    let (ix, iy, iz) = (layer(position.x), layer(position.y), layer(position.z));
    let face = Face::from_normal(normal);
    let (row, col) = match face {
        Face::Up => (iz, ix),
        Face::Right => (last - iy, last - iz),
        Face::Front => (last - iy, ix),
        Face::Down => (last - iz, ix),
        Face::Left => (last - iy, iz),
        Face::Back => (last - iy, last - ix),
    };
    face.index() * size * size + row * size + col
}

/// The sticker permutation performed by `mv` on a cube of `size`.
///
/// Every sticker inside the turned slab is rotated on the lattice together
/// with its normal, which covers both the four-face cycle and the spin of an
/// outer face. The map is a bijection by construction, and the
/// counter-clockwise map is the exact inverse of the clockwise one.
pub fn move_face_map(size: usize, mv: &Move) -> Result<FaceMap> {
    if size < 2 {
        return Err(CubeError::InvalidSize(size));
    }
    if mv.layers.is_empty() {
        return Err(CubeError::EmptyLayerSet);
    }
    let mut turned_layers = vec![false; size];
    for &layer in &mv.layers {
        if layer >= size {
            return Err(CubeError::LayerOutOfRange { layer, size });
        }
        turned_layers[layer] = true;
    }

    let last = size as i32 - 1;
    let mut face_map = FaceMap::identity(6 * size * size);
    for face in Face::ALL {
        for row in 0..size {
            for col in 0..size {
                let (position, normal) = lattice_position(size, face, row, col);
                let layer = ((position.component(mv.axis) + last) / 2) as usize;
                if !turned_layers[layer] {
                    continue;
                }
                let target = sticker_index_at(
                    size,
                    position.rotate_quarter(mv.axis, mv.clockwise),
                    normal.rotate_quarter(mv.axis, mv.clockwise),
                );
                face_map.0[target] = face.index() * size * size + row * size + col;
            }
        }
    }
    Ok(face_map)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_new_cube_is_solved() {
        let cube = CubeState::new(3).unwrap();
        assert!(cube.is_solved());
        assert_eq!(cube.num_stickers(), 54);
        assert_eq!(cube.color_counts(), [9; 6]);
        assert_eq!(cube.get(Face::Front, 1, 1), Color::Green);
        assert_eq!(CubeState::new(1), Err(CubeError::InvalidSize(1)));
        assert_eq!(CubeState::new(0), Err(CubeError::InvalidSize(0)));
    }

    #[test]
    fn test_move_then_inverse_restores_state() {
        for size in 2..=7 {
            let mut rng = StdRng::seed_from_u64(size as u64);
            let mut cube = CubeState::new(size).unwrap();
            let scramble = cube.generate_scramble_moves_with(10, &mut rng);
            cube.apply_moves(&scramble).unwrap();
            for layer in 0..size {
                for axis in Axis::ALL {
                    for clockwise in [true, false] {
                        let before = cube.clone();
                        cube.rotate(&[layer], axis, clockwise).unwrap();
                        cube.rotate(&[layer], axis, !clockwise).unwrap();
                        assert_eq!(cube, before, "{} {} {}", layer, axis, clockwise);
                    }
                }
            }
        }
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        for size in 2..=5 {
            for layer in 0..size {
                for axis in Axis::ALL {
                    let face_map = move_face_map(size, &Move::single(layer, axis, true)).unwrap();
                    let four_turns = face_map.apply(&face_map).apply(&face_map).apply(&face_map);
                    assert!(four_turns.is_identity());
                    assert!(!face_map.is_identity());
                }
            }
        }
    }

    #[test]
    fn test_color_counts_survive_random_rotations() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in 2..=6 {
            let mut cube = CubeState::new(size).unwrap();
            for _ in 0..20 {
                let moves = cube.generate_scramble_moves_with(25, &mut rng);
                cube.apply_moves(&moves).unwrap();
                assert_eq!(cube.color_counts(), [size * size; 6]);
            }
        }
    }

    #[test]
    fn test_x_layer_and_back_on_2x2() {
        let fresh = CubeState::new(2).unwrap();
        let mut cube = fresh.clone();
        cube.rotate(&[0], Axis::X, true).unwrap();
        assert!(!cube.is_solved());
        cube.rotate(&[0], Axis::X, false).unwrap();
        assert_eq!(cube, fresh);
    }

    #[test]
    fn test_single_y_turn_unsolves_3x3() {
        let mut cube = CubeState::new(3).unwrap();
        assert!(cube.is_solved());
        cube.rotate(&[0], Axis::Y, true).unwrap();
        assert!(!cube.is_solved());
    }

    #[test]
    fn test_out_of_range_layer_leaves_state_untouched() {
        let mut cube = CubeState::new(3).unwrap();
        cube.rotate(&[1], Axis::Z, true).unwrap();
        let before = cube.clone();
        assert_eq!(
            cube.rotate(&[0, 3], Axis::X, true),
            Err(CubeError::LayerOutOfRange { layer: 3, size: 3 })
        );
        assert_eq!(cube, before);
        assert_eq!(cube.rotate(&[], Axis::X, true), Err(CubeError::EmptyLayerSet));

        let moves = vec![Move::single(0, Axis::Y, true), Move::single(9, Axis::Y, true)];
        assert!(cube.apply_moves(&moves).is_err());
        assert_eq!(cube, before);
    }

    #[test]
    fn test_u_turn_moves_front_row_to_left() {
        let mut cube = CubeState::new(3).unwrap();
        cube.rotate(&[2], Axis::Y, true).unwrap();
        for col in 0..3 {
            assert_eq!(cube.get(Face::Left, 0, col), Color::Green);
            assert_eq!(cube.get(Face::Front, 0, col), Color::Red);
            assert_eq!(cube.get(Face::Right, 0, col), Color::Blue);
            assert_eq!(cube.get(Face::Back, 0, col), Color::Orange);
            assert_eq!(cube.get(Face::Front, 1, col), Color::Green);
        }
        assert_eq!(cube.face_stickers(Face::Up), &[Color::White; 9]);
    }

    #[test]
    fn test_outer_layer_spins_its_face() {
        // F is a clockwise spin of the front grid: new[r][c] = old[n-1-c][r].
        let face_map = move_face_map(3, &Move::single(2, Axis::Z, true)).unwrap();
        let front = Face::Front.index() * 9;
        let pulled = face_map.permute(&(0..54).collect::<Vec<_>>());
        assert_eq!(&pulled[front..front + 9], &[24, 21, 18, 25, 22, 19, 26, 23, 20]);

        // A middle layer leaves both the front and the back grid alone.
        let face_map = move_face_map(3, &Move::single(1, Axis::Z, true)).unwrap();
        let pulled = face_map.permute(&(0..54).collect::<Vec<_>>());
        assert_eq!(&pulled[front..front + 9], &(18..27).collect::<Vec<_>>()[..]);
        let back = Face::Back.index() * 9;
        assert_eq!(&pulled[back..back + 9], &(45..54).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn test_rotate_face_matches_layer_turns() {
        for face in Face::ALL {
            let mut by_face = CubeState::new(3).unwrap();
            by_face.rotate_face(face, true).unwrap();
            // The face itself keeps its color under its own turn.
            assert_eq!(by_face.face_stickers(face), &[face.solved_color(); 9]);
            assert!(!by_face.is_solved());
            by_face.rotate_face(face, false).unwrap();
            assert!(by_face.is_solved());
        }

        let mut back = CubeState::new(3).unwrap();
        back.rotate_face(Face::Back, true).unwrap();
        let mut layer = CubeState::new(3).unwrap();
        layer.rotate(&[0], Axis::Z, false).unwrap();
        assert_eq!(back, layer);
    }

    #[test]
    fn test_wide_move_equals_its_layers() {
        let mut wide = CubeState::new(4).unwrap();
        wide.rotate(&[2, 3], Axis::X, true).unwrap();
        let mut separate = CubeState::new(4).unwrap();
        separate.rotate(&[3], Axis::X, true).unwrap();
        separate.rotate(&[2], Axis::X, true).unwrap();
        assert_eq!(wide, separate);
    }

    #[test]
    fn test_whole_cube_rotation_counts_as_solved() {
        let mut cube = CubeState::new(3).unwrap();
        cube.rotate(&[0, 1, 2], Axis::Y, true).unwrap();
        assert!(cube.is_solved());
        assert_ne!(cube, CubeState::new(3).unwrap());
        cube.reset();
        assert_eq!(cube, CubeState::new(3).unwrap());
    }

    #[test]
    fn test_notation_string_round_trip() {
        let mut rng = StdRng::seed_from_u64(11);
        for size in 2..=5 {
            let mut cube = CubeState::new(size).unwrap();
            let moves = cube.generate_scramble_moves_with(30, &mut rng);
            cube.apply_moves(&moves).unwrap();
            let notation = cube.to_notation_string();
            assert_eq!(notation.len(), 6 * size * size);
            assert_eq!(CubeState::from_notation_string(&notation, size).unwrap(), cube);
        }
        assert_eq!(
            CubeState::from_notation_string("wwww", 2),
            Err(CubeError::InvalidStateLength {
                expected: 24,
                actual: 4
            })
        );
        assert_eq!(
            CubeState::from_notation_string(&"x".repeat(24), 2),
            Err(CubeError::UnknownSticker('x'))
        );
    }

    #[test]
    fn test_notation_string_rejects_wrong_color_counts() {
        let solved = CubeState::new(3).unwrap().to_notation_string();
        let mut stickers: Vec<char> = solved.chars().collect();
        assert_eq!(stickers[0], 'w');
        stickers[0] = 'r';
        let swapped: String = stickers.into_iter().collect();
        assert_eq!(
            CubeState::from_notation_string(&swapped, 3),
            Err(CubeError::InvalidColorCounts {
                color: 'w',
                count: 8,
                expected: 9
            })
        );
        assert_eq!(
            CubeState::from_notation_string(&"w".repeat(54), 3),
            Err(CubeError::InvalidColorCounts {
                color: 'w',
                count: 54,
                expected: 9
            })
        );
    }

    #[test]
    fn test_scramble_moves_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let cube = CubeState::new(4).unwrap();
        let moves = cube.generate_scramble_moves_with(200, &mut rng);
        assert_eq!(moves.len(), 200);
        assert!(moves.iter().all(|mv| mv.layers.len() == 1 && mv.layers[0] < 4));
        assert!(Axis::ALL
            .iter()
            .all(|axis| moves.iter().any(|mv| mv.axis == *axis)));
    }

    #[test]
    fn test_axis_from_str() {
        assert_eq!("X".parse::<Axis>(), Ok(Axis::X));
        assert_eq!("z".parse::<Axis>(), Ok(Axis::Z));
        assert_eq!(
            "W".parse::<Axis>(),
            Err(CubeError::UnknownAxis("W".to_string()))
        );
    }

    #[test]
    fn test_display_net() {
        let cube = CubeState::new(2).unwrap();
        assert_eq!(
            cube.to_string(),
            "    w w\n    w w\no o g g r r b b\no o g g r r b b\n    y y\n    y y\n"
        );
    }
}
