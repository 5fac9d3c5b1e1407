use crate::types::Point;
use std::collections::HashSet;

/// Doubled signed area of the triangle `(a, b, c)`; positive when `c` lies left of `a→b`.
#[inline]
pub fn area2(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Hash key matching IEEE `==`: `-0.0` folds onto `0.0`. NaN has no key.
#[inline]
fn exact_key(p: &Point) -> Option<(u64, u64)> {
    if p.x.is_nan() || p.y.is_nan() {
        return None;
    }
    // Adding 0.0 turns -0.0 into +0.0 and leaves every other value untouched.
    Some(((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits()))
}

/// Drop exact repeats, keeping the first occurrence and the input order.
///
/// A point with a NaN coordinate compares unequal to everything, itself included,
/// so it is always kept.
pub fn dedup_points(points: &[Point]) -> Vec<Point> {
    let mut seen: HashSet<(u64, u64)> = HashSet::with_capacity(points.len());
    let mut out = Vec::with_capacity(points.len());
    for p in points {
        match exact_key(p) {
            Some(key) => {
                if seen.insert(key) {
                    out.push(*p);
                }
            }
            None => out.push(*p),
        }
    }
    out
}

/// True when every point lies within `eps` (in doubled-area units) of the line
/// through `points[0]` and `points[1]`. Fewer than three points are collinear.
pub fn is_collinear(points: &[Point], eps: f64) -> bool {
    if points.len() < 3 {
        return true;
    }
    let (p0, p1) = (points[0], points[1]);
    // NaN areas count as on the line: only a strict `> eps` breaks collinearity.
    points[2..].iter().all(|&pi| !(area2(p0, p1, pi).abs() > eps))
}
