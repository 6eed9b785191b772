//! Procedural composition of the travel icon
//!
//! Both variants draw the same logical icon: an accent background, a white
//! disc and an accent plane glyph. The full variant adds a rounded square and
//! a location-pin marker and is laid out on a 1024 design grid; the simple
//! variant uses whole-pixel proportions of the requested edge so it can be
//! composed directly at launcher sizes.

use crate::canvas::{fill, fill_disc, fill_polygon, fill_rounded_rect, Point};
use image::{Rgb, RgbImage};

/// Primary accent color (#FF6B35)
pub const ACCENT: Rgb<u8> = Rgb([0xFF, 0x6B, 0x35]);

/// Secondary color (#FFFFFF)
pub const WHITE: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

/// Edge length of the grid the full variant is designed on
pub const DESIGN_GRID: u32 = 1024;

const BACKGROUND_INSET: f32 = 100.0;
const BACKGROUND_CORNER: f32 = 200.0;
const DISC_RADIUS: f32 = 400.0;
const MARKER_RADIUS: f32 = 60.0;
const MARKER_DOT_RADIUS: f32 = 25.0;

/// Plane outline relative to the icon center, in design grid units
const PLANE_OUTLINE: [Point; 5] = [
    (-100.0, 0.0),
    (50.0, 0.0),
    (-50.0, -40.0),
    (-30.0, 0.0),
    (-50.0, 40.0),
];

/// Largest gap between the simple variant's disc and the canvas edge
const RING_MARGIN: u32 = 10;

/// Smallest radius that still covers the pixel holding the center, which sits
/// on a pixel corner for even sizes
const MIN_RADIUS: f32 = 0.71;

/// Which flavour of the icon to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Rounded square, disc, plane and location marker on the design grid
    Full,
    /// Disc and plane only, proportioned in whole pixels of the target edge
    Simple,
}

/// Compose the icon at `size`x`size`. A size of 0 is treated as 1.
pub fn compose(variant: Variant, size: u32) -> RgbImage {
    match variant {
        Variant::Full => compose_full(size),
        Variant::Simple => compose_simple(size),
    }
}

/// Draw the full icon, scaling the design grid to `size`
pub fn compose_full(size: u32) -> RgbImage {
    let size = size.max(1);
    let scale = size as f32 / DESIGN_GRID as f32;
    let edge = size as f32;
    let center = (edge / 2.0, edge / 2.0);

    let mut canvas = RgbImage::new(size, size);
    fill(&mut canvas, ACCENT);

    let inset = BACKGROUND_INSET * scale;
    fill_rounded_rect(
        &mut canvas,
        (inset, inset),
        (edge - inset, edge - inset),
        BACKGROUND_CORNER * scale,
        ACCENT,
    );

    fill_disc(&mut canvas, center, (DISC_RADIUS * scale).max(MIN_RADIUS), WHITE);

    let plane = PLANE_OUTLINE.map(|(x, y)| (center.0 + x * scale, center.1 + y * scale));
    fill_polygon(&mut canvas, &plane, ACCENT);

    // Location pin: accent ring with a white dot
    fill_disc(&mut canvas, center, MARKER_RADIUS * scale, ACCENT);
    fill_disc(
        &mut canvas,
        center,
        (MARKER_DOT_RADIUS * scale).max(MIN_RADIUS),
        WHITE,
    );

    canvas
}

/// Draw the simple icon directly at `size`, without any resampling
pub fn compose_simple(size: u32) -> RgbImage {
    let size = size.max(1);
    let center = size / 2;
    let margin = RING_MARGIN.min(size / 4);
    let radius = center - margin;

    let mut canvas = RgbImage::new(size, size);
    fill(&mut canvas, ACCENT);

    let c = center as f32;
    fill_disc(&mut canvas, (c, c), (radius as f32).max(MIN_RADIUS), WHITE);

    let plane = size / 3;
    let half = (plane / 2) as f32;
    let wing = (plane / 3) as f32;
    let outline = [
        (c - half, c),
        (c + half, c),
        (c, c - wing),
        (c, c),
        (c, c + wing),
    ];
    fill_polygon(&mut canvas, &outline, ACCENT);

    canvas
}
