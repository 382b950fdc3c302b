/// A permutation of sticker positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceMap(
    // The indices of this vector are the new sticker indexes.
    // The values are the old sticker indexes to pull colors from.
    pub Vec<usize>,
);

impl FaceMap {
    pub fn identity(count: usize) -> FaceMap {
        FaceMap((0..count).collect())
    }

    /// Apply another FaceMap after this one.
    /// Returns a new FaceMap that represents the combination.
    pub fn apply(&self, other: &FaceMap) -> FaceMap {
        FaceMap(
            other
                .0
                .iter()
                .map(|index_from_other| self.0[*index_from_other])
                .collect(),
        )
    }

    pub fn invert(&self) -> FaceMap {
        let mut inverted_face_map = vec![0; self.0.len()];
        for (new_index, old_index) in self.0.iter().enumerate() {
            inverted_face_map[*old_index] = new_index;
        }
        FaceMap(inverted_face_map)
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, old_index)| i == *old_index)
    }

    /// Build the state that results from moving every item of `previous`
    /// along this map. `previous` is only read, so the caller's copy doubles
    /// as the snapshot the whole update is computed against.
    pub fn permute<T: Copy>(&self, previous: &[T]) -> Vec<T> {
        self.0
            .iter()
            .map(|old_index| previous[*old_index])
            .collect()
    }
}
