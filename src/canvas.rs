//! Raster drawing primitives
//!
//! Every shape is described in continuous pixel coordinates and a pixel
//! `(x, y)` is covered when its center `(x + 0.5, y + 0.5)` falls inside the
//! shape. Shapes are clipped to the canvas, so callers may pass geometry that
//! extends past the edges.

use image::{Rgb, RgbImage};

/// A point in canvas space
pub type Point = (f32, f32);

/// Fill the whole canvas with a solid color
pub fn fill(canvas: &mut RgbImage, color: Rgb<u8>) {
    for pixel in canvas.pixels_mut() {
        *pixel = color;
    }
}

/// Fill a disc; pixels whose center lies exactly on the radius are included
pub fn fill_disc(canvas: &mut RgbImage, center: Point, radius: f32, color: Rgb<u8>) {
    if radius < 0.0 {
        return;
    }

    let (cx, cy) = center;
    let r2 = radius * radius;
    let (x0, x1) = span(cx - radius, cx + radius, canvas.width());
    let (y0, y1) = span(cy - radius, cy + radius, canvas.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r2 {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill an axis-aligned rectangle with circular corners
///
/// The corner radius is clamped to half of the shorter side, so a large
/// radius degrades into a capsule or a disc rather than overlapping corners.
pub fn fill_rounded_rect(
    canvas: &mut RgbImage,
    min: Point,
    max: Point,
    radius: f32,
    color: Rgb<u8>,
) {
    let (left, top) = min;
    let (right, bottom) = max;
    if right <= left || bottom <= top {
        return;
    }

    let radius = radius.clamp(0.0, (right - left).min(bottom - top) / 2.0);
    let r2 = radius * radius;
    let (x0, x1) = span(left, right, canvas.width());
    let (y0, y1) = span(top, bottom, canvas.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            if px < left || px > right || py < top || py > bottom {
                continue;
            }

            // Distance to the nearest corner center, zero outside the corner zones
            let dx = (left + radius - px).max(px - (right - radius)).max(0.0);
            let dy = (top + radius - py).max(py - (bottom - radius)).max(0.0);
            if dx * dx + dy * dy <= r2 {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill a closed polygon using the even-odd rule
///
/// Outlines that touch themselves (such as the plane glyph, which doubles
/// back through its own center) are handled: every pixel is classified
/// independently by counting edge crossings to its right.
pub fn fill_polygon(canvas: &mut RgbImage, points: &[Point], color: Rgb<u8>) {
    if points.len() < 3 {
        return;
    }

    let min_x = points.iter().map(|p| p.0).fold(f32::INFINITY, f32::min);
    let max_x = points.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max);
    let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
    let (x0, x1) = span(min_x, max_x, canvas.width());
    let (y0, y1) = span(min_y, max_y, canvas.height());

    for y in y0..y1 {
        for x in x0..x1 {
            if contains(points, (x as f32 + 0.5, y as f32 + 0.5)) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

fn contains(points: &[Point], (px, py): Point) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;

    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Range of pixel indices whose centers may fall within `[lo, hi]`, clipped to `0..limit`
fn span(lo: f32, hi: f32, limit: u32) -> (u32, u32) {
    let start = (lo - 0.5).floor().max(0.0);
    let end = (hi + 0.5).ceil().max(0.0);
    let start = (start as u32).min(limit);
    let end = (end as u32).min(limit);
    (start, end.max(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn blank(size: u32) -> RgbImage {
        RgbImage::from_pixel(size, size, BLACK)
    }

    fn count(canvas: &RgbImage, color: Rgb<u8>) -> usize {
        canvas.pixels().filter(|p| **p == color).count()
    }

    #[test]
    fn test_fill_covers_every_pixel() {
        let mut canvas = blank(7);
        fill(&mut canvas, RED);
        assert_eq!(count(&canvas, RED), 49);
    }

    #[test]
    fn test_disc_is_symmetric_and_bounded() {
        let mut canvas = blank(20);
        fill_disc(&mut canvas, (10.0, 10.0), 5.0, RED);

        assert_eq!(*canvas.get_pixel(10, 10), RED);
        assert_eq!(*canvas.get_pixel(14, 10), RED);
        assert_eq!(*canvas.get_pixel(5, 10), RED);
        assert_eq!(*canvas.get_pixel(15, 10), BLACK);
        assert_eq!(*canvas.get_pixel(4, 10), BLACK);
        assert_eq!(*canvas.get_pixel(0, 0), BLACK);

        // Mirror symmetry around the center line
        for y in 0..20 {
            for x in 0..10 {
                assert_eq!(canvas.get_pixel(x, y), canvas.get_pixel(19 - x, y));
            }
        }
    }

    #[test]
    fn test_disc_outside_canvas_is_clipped() {
        let mut canvas = blank(10);
        fill_disc(&mut canvas, (-50.0, -50.0), 10.0, RED);
        assert_eq!(count(&canvas, RED), 0);

        fill_disc(&mut canvas, (0.0, 0.0), 3.0, RED);
        assert_eq!(*canvas.get_pixel(0, 0), RED);
        assert_eq!(*canvas.get_pixel(9, 9), BLACK);
    }

    #[test]
    fn test_negative_radius_draws_nothing() {
        let mut canvas = blank(10);
        fill_disc(&mut canvas, (5.0, 5.0), -1.0, RED);
        assert_eq!(count(&canvas, RED), 0);
    }

    #[test]
    fn test_rounded_rect_without_radius_is_a_rectangle() {
        let mut canvas = blank(10);
        fill_rounded_rect(&mut canvas, (2.0, 3.0), (8.0, 7.0), 0.0, RED);
        assert_eq!(count(&canvas, RED), 6 * 4);
    }

    #[test]
    fn test_rounded_rect_cuts_corners() {
        let mut canvas = blank(40);
        fill_rounded_rect(&mut canvas, (0.0, 0.0), (40.0, 40.0), 10.0, RED);

        assert_eq!(*canvas.get_pixel(0, 0), BLACK);
        assert_eq!(*canvas.get_pixel(39, 39), BLACK);
        assert_eq!(*canvas.get_pixel(20, 0), RED);
        assert_eq!(*canvas.get_pixel(0, 20), RED);
        assert_eq!(*canvas.get_pixel(5, 5), RED);
    }

    #[test]
    fn test_rounded_rect_radius_is_clamped() {
        let mut clamped = blank(30);
        fill_rounded_rect(&mut clamped, (5.0, 5.0), (25.0, 25.0), 500.0, RED);

        let mut disc = blank(30);
        fill_disc(&mut disc, (15.0, 15.0), 10.0, RED);

        assert_eq!(clamped, disc);
    }

    #[test]
    fn test_polygon_triangle() {
        let mut canvas = blank(10);
        fill_polygon(&mut canvas, &[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)], RED);

        assert_eq!(*canvas.get_pixel(0, 0), RED);
        assert_eq!(*canvas.get_pixel(8, 0), RED);
        assert_eq!(*canvas.get_pixel(9, 9), BLACK);
        // Lower-left half of a 10x10 square, diagonal excluded
        assert_eq!(count(&canvas, RED), 45);
    }

    #[test]
    fn test_polygon_with_too_few_points_draws_nothing() {
        let mut canvas = blank(10);
        fill_polygon(&mut canvas, &[(0.0, 0.0), (10.0, 10.0)], RED);
        fill_polygon(&mut canvas, &[], RED);
        assert_eq!(count(&canvas, RED), 0);
    }

    #[test]
    fn test_self_touching_polygon_fills_both_lobes() {
        let mut canvas = blank(20);
        // Two triangles meeting at (10, 10)
        let outline = [
            (2.0, 10.0),
            (18.0, 10.0),
            (10.0, 2.0),
            (10.0, 10.0),
            (10.0, 18.0),
        ];
        fill_polygon(&mut canvas, &outline, RED);

        assert_eq!(*canvas.get_pixel(12, 8), RED);
        assert_eq!(*canvas.get_pixel(8, 11), RED);
        assert_eq!(*canvas.get_pixel(8, 8), BLACK);
        assert_eq!(*canvas.get_pixel(12, 11), BLACK);
    }
}
