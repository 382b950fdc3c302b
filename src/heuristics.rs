//! Distance estimates for the informed search. Neither estimate is
//! admissible.
//!
//! Both compare every sticker against the face's center cell
//! `grid[n/2][n/2]`. On even sizes there is no true center, so the cell just
//! below and right of the middle stands in for it.

use serde::{Deserialize, Serialize};

use crate::cube::{CubeState, Face};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    Misplaced,
    #[default]
    Manhattan,
}

impl Heuristic {
    pub fn evaluate(self, cube: &CubeState) -> f64 {
        match self {
            Heuristic::Misplaced => misplaced_count(cube) as f64,
            Heuristic::Manhattan => manhattan_estimate(cube),
        }
    }
}

/// Stickers that differ from their face's center cell.
pub fn misplaced_count(cube: &CubeState) -> usize {
    let n = cube.size();
    let center = n / 2;
    Face::ALL
        .iter()
        .map(|face| {
            let target = cube.get(*face, center, center);
            cube.face_stickers(*face)
                .iter()
                .filter(|color| **color != target)
                .count()
        })
        .sum()
}

/// Half the grid distance from the center cell, summed over mismatched
/// stickers.
pub fn manhattan_estimate(cube: &CubeState) -> f64 {
    let n = cube.size();
    let center = n / 2;
    let mut distance = 0.0;
    for face in Face::ALL {
        let target = cube.get(face, center, center);
        for row in 0..n {
            for col in 0..n {
                if cube.get(face, row, col) != target {
                    let grid_distance = row.abs_diff(center) + col.abs_diff(center);
                    distance += grid_distance as f64 / 2.0;
                }
            }
        }
    }
    distance
}
