//! Exact polygon-clip primitives backing the rasteriser.
//!
//! The accumulation model (a pixel cell holding a coverage contribution
//! in `[0, 255]`) is the one the Anti-Grain Geometry scanline rasterizer
//! uses: a convex shape is decomposed into triangles and each triangle's
//! contribution to every source cell it touches is accumulated before
//! the buffer is quantised. Rather than AGG's fixed-point edge/cover/area
//! sweep, the contribution per cell is computed directly as an exact
//! polygon intersection (Sutherland-Hodgman clip against the unit cell,
//! then the shoelace formula) — equivalent for the convex,
//! non-self-intersecting triangles this crate ever rasterises, and
//! reproducible bit-for-bit across platforms without a fixed-point
//! accumulator.

pub type Point = (f64, f64);

/// Clip a convex polygon to the rectangle `[xmin, xmax] x [ymin, ymax]`
/// using the Sutherland-Hodgman algorithm. `poly` may wind either way.
pub fn clip_to_rect(poly: &[Point], xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Vec<Point> {
    let p = clip_half_plane(poly, |p| p.0 >= xmin, |a, b| lerp_x(a, b, xmin));
    let p = clip_half_plane(&p, |p| p.0 <= xmax, |a, b| lerp_x(a, b, xmax));
    let p = clip_half_plane(&p, |p| p.1 >= ymin, |a, b| lerp_y(a, b, ymin));
    clip_half_plane(&p, |p| p.1 <= ymax, |a, b| lerp_y(a, b, ymax))
}

fn lerp_x(a: Point, b: Point, x: f64) -> Point {
    let t = (x - a.0) / (b.0 - a.0);
    (x, a.1 + t * (b.1 - a.1))
}

fn lerp_y(a: Point, b: Point, y: f64) -> Point {
    let t = (y - a.1) / (b.1 - a.1);
    (a.0 + t * (b.0 - a.0), y)
}

fn clip_half_plane(
    poly: &[Point],
    inside: impl Fn(Point) -> bool,
    intersect: impl Fn(Point, Point) -> Point,
) -> Vec<Point> {
    if poly.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(poly.len() + 1);
    for i in 0..poly.len() {
        let curr = poly[i];
        let prev = poly[(i + poly.len() - 1) % poly.len()];
        let curr_in = inside(curr);
        let prev_in = inside(prev);
        if curr_in {
            if !prev_in {
                out.push(intersect(prev, curr));
            }
            out.push(curr);
        } else if prev_in {
            out.push(intersect(prev, curr));
        }
    }
    out
}

/// Unsigned area of a (possibly degenerate) simple polygon via the
/// shoelace formula.
pub fn polygon_area(poly: &[Point]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..poly.len() {
        let (x0, y0) = poly[i];
        let (x1, y1) = poly[(i + 1) % poly.len()];
        acc += x0 * y1 - x1 * y0;
    }
    (acc * 0.5).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clips_triangle_half_inside() {
        let tri = [(0.5, 0.0), (2.0, 0.0), (0.5, 2.0)];
        let clipped = clip_to_rect(&tri, 0.0, 1.0, 0.0, 1.0);
        assert!(polygon_area(&clipped) > 0.0);
        assert!(polygon_area(&clipped) < polygon_area(&tri));
    }

    #[test]
    fn fully_outside_clips_to_empty() {
        let tri = [(5.0, 5.0), (6.0, 5.0), (5.0, 6.0)];
        let clipped = clip_to_rect(&tri, 0.0, 1.0, 0.0, 1.0);
        assert_eq!(polygon_area(&clipped), 0.0);
    }
}
