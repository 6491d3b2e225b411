use std::cmp::Ordering;

use super::types::Point;

/// Orientation test for the turn `o → a → b`.
///
/// Returns `(a.x-o.x)*(b.y-o.y) - (a.y-o.y)*(b.x-o.x)`: positive for a
/// counter-clockwise turn, zero when collinear, negative for clockwise.
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> f64 {
    let oa = a - o;
    let ob = b - o;
    oa.x * ob.y - oa.y * ob.x
}

/// Lexicographic order on coordinates: `x` first, then `y`.
#[inline]
pub fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Closed-polygon edges `(v_i, v_{i+1})`, wrapping the last vertex to the first.
///
/// Yields nothing for an empty slice and a single zero-length edge for one vertex.
pub fn polygon_edges(verts: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = verts.len();
    (0..n).map(move |i| (verts[i], verts[(i + 1) % n]))
}

/// Signed area via the shoelace sum; positive for CCW vertex order.
pub fn signed_area(verts: &[Point]) -> f64 {
    let twice: f64 = polygon_edges(verts)
        .map(|(p, q)| p.x * q.y - q.x * p.y)
        .sum();
    0.5 * twice
}

/// Euclidean distance from `p` to the closed segment `v1–v2`.
///
/// Projects `p` onto the unit direction of the segment and clamps to the end
/// points. A zero-length segment degenerates to the distance to `v1`.
pub fn point_segment_distance(p: Point, v1: Point, v2: Point) -> f64 {
    let edge = v2 - v1;
    let len = edge.norm();
    if !(len.is_finite()) || len <= 0.0 {
        return nalgebra::distance(&p, &v1);
    }
    let dir = edge / len;
    let projection = (p - v1).dot(&dir);
    if projection < 0.0 {
        nalgebra::distance(&p, &v1)
    } else if projection > len {
        nalgebra::distance(&p, &v2)
    } else {
        let nearest = v1 + dir * projection;
        nalgebra::distance(&p, &nearest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_signs() {
        let o = Point::new(0.0, 0.0);
        let a = Point::new(1.0, 0.0);
        assert!(cross(o, a, Point::new(1.0, 1.0)) > 0.0);
        assert!(cross(o, a, Point::new(1.0, -1.0)) < 0.0);
        assert_eq!(cross(o, a, Point::new(3.0, 0.0)), 0.0);
        assert!((cross(o, a, Point::new(0.0, 2.5)) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn lex_order_breaks_ties_by_y() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(1.0, 3.0);
        let c = Point::new(0.5, 10.0);
        assert_eq!(lex_cmp(&a, &b), Ordering::Less);
        assert_eq!(lex_cmp(&b, &a), Ordering::Greater);
        assert_eq!(lex_cmp(&c, &a), Ordering::Less);
        assert_eq!(lex_cmp(&a, &a), Ordering::Equal);
    }

    #[test]
    fn segment_distance_regions() {
        let v1 = Point::new(0.0, 0.0);
        let v2 = Point::new(10.0, 0.0);
        // before v1
        assert!((point_segment_distance(Point::new(-3.0, 4.0), v1, v2) - 5.0).abs() < 1e-12);
        // beyond v2
        assert!((point_segment_distance(Point::new(13.0, -4.0), v1, v2) - 5.0).abs() < 1e-12);
        // perpendicular foot inside
        assert!((point_segment_distance(Point::new(4.0, 2.0), v1, v2) - 2.0).abs() < 1e-12);
        // on the segment
        assert!(point_segment_distance(Point::new(7.0, 0.0), v1, v2).abs() < 1e-12);
    }

    #[test]
    fn zero_length_segment_is_finite() {
        let v = Point::new(1.0, 1.0);
        let d = point_segment_distance(Point::new(4.0, 5.0), v, v);
        assert!(d.is_finite());
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn edges_close_the_polygon() {
        let sq = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ];
        let edges: Vec<_> = polygon_edges(&sq).collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (sq[2], sq[0]));
        assert_eq!(polygon_edges(&[]).count(), 0);
    }

    #[test]
    fn shoelace_sign_follows_orientation() {
        let mut sq = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        assert!((signed_area(&sq) - 4.0).abs() < 1e-12);
        sq.reverse();
        assert!((signed_area(&sq) + 4.0).abs() < 1e-12);
        assert_eq!(signed_area(&sq[..2]), 0.0);
    }
}
