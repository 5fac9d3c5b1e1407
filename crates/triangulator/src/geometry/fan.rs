use crate::types::Triangle;

/// Fan anchored at vertex 0: `(0, i, i+1)` for `i` in `1..=n-2`.
///
/// Returns `n - 2` triangles, or none for `n < 3`. Indices are `u32` as on the wire;
/// vertex counts beyond `u32::MAX` cannot come from a decoded payload.
pub fn fan_triangles(n: usize) -> Vec<Triangle> {
    if n < 3 {
        return Vec::new();
    }
    debug_assert!(n <= u32::MAX as usize, "vertex count exceeds the wire index range");
    (1..n - 1).map(|i| [0, i as u32, i as u32 + 1]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_pattern_small() {
        assert!(fan_triangles(0).is_empty());
        assert!(fan_triangles(2).is_empty());
        assert_eq!(fan_triangles(3), vec![[0, 1, 2]]);
        assert_eq!(fan_triangles(5), vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
    }
}
