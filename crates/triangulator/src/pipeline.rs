//! Bytes in, bytes out: decode a point set, triangulate, encode the result.
//!
//! This is the whole computational path behind a "get triangulation" request once
//! the caller has looked up the stored point-set payload.

use crate::codec::{decode_point_set, encode_triangulation};
use crate::error::Error;
use crate::geometry::compute;

/// Decode → compute → encode. Fails with `Error::Format` on malformed input and
/// `Error::Triangulation` when fewer than three unique points remain.
pub fn triangulate_point_set(bytes: &[u8]) -> Result<Vec<u8>, Error> {
    let points = decode_point_set(bytes)?;
    let t = compute(&points)?;
    Ok(encode_triangulation(&t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_triangulation, encode_point_set};
    use crate::types::Point;

    #[test]
    fn end_to_end_single_triangle() {
        let input = encode_point_set(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.5, 1.0),
        ]);
        let out = triangulate_point_set(&input).unwrap();
        assert_eq!(out.len(), 44);
        let t = decode_triangulation(&out).unwrap();
        assert_eq!(t.triangles, vec![[0, 1, 2]]);
        assert_eq!(t.vertices[2], Point::new(0.5, 1.0));
    }

    #[test]
    fn end_to_end_collinear() {
        let input = encode_point_set(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ]);
        let t = decode_triangulation(&triangulate_point_set(&input).unwrap()).unwrap();
        assert_eq!(t.vertices.len(), 3);
        assert!(t.triangles.is_empty());
    }

    #[test]
    fn errors_keep_their_kind() {
        assert!(triangulate_point_set(&[0, 0]).unwrap_err().is_format());
        let two = encode_point_set(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert!(triangulate_point_set(&two).unwrap_err().is_insufficient());
    }

    #[test]
    fn concurrent_calls_are_independent() {
        let input = encode_point_set(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]);
        let expected = triangulate_point_set(&input).unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| triangulate_point_set(&input)))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap().unwrap(), expected);
            }
        });
    }
}
