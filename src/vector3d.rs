use crate::cube::Axis;

/// A point on the integer lattice the cube's stickers sit on.
///
/// Coordinates are doubled and centered on the middle of the cube so that
/// every layer of an `n` cube lands on an integer in `-(n-1)..=(n-1)` and a
/// quarter turn about the origin is an exact coordinate swap.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector3D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vector3D {
    pub fn new(x: i32, y: i32, z: i32) -> Vector3D {
        Vector3D { x, y, z }
    }

    pub fn component(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Rotate a quarter turn about `axis` through the origin.
    /// Clockwise is as seen looking from the positive end of the axis back
    /// towards the origin.
    pub fn rotate_quarter(&self, axis: Axis, clockwise: bool) -> Vector3D {
        let Vector3D { x, y, z } = *self;
        match (axis, clockwise) {
            (Axis::X, true) => Vector3D::new(x, z, -y),
            (Axis::X, false) => Vector3D::new(x, -z, y),
            (Axis::Y, true) => Vector3D::new(-z, y, x),
            (Axis::Y, false) => Vector3D::new(z, y, -x),
            (Axis::Z, true) => Vector3D::new(y, -x, z),
            (Axis::Z, false) => Vector3D::new(-y, x, z),
        }
    }
}

impl std::fmt::Debug for Vector3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector3D ({}, {}, {})", self.x, self.y, self.z)
    }
}

impl std::ops::Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Vector3D {
        Vector3D {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
