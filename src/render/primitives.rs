//! Primitive rendering functions.
//!
//! Implements integer-only rasterization for pixels, lines, filled rectangles
//! and filled circles.

use super::context::DrawContext;
use crate::bounds::{check_circle, check_line, check_pixel, check_rectangle, Extent};
use crate::color::Color565;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Circle, Line, Point, Rect};

/// Write target for the rasterizer.
///
/// Indices handed to [`PixelSink::write`] are always row-major and inside
/// [`PixelSink::extent`].
pub trait PixelSink {
    /// Drawable area.
    fn extent(&self) -> Extent;

    /// Store `color` at cell `index`.
    fn write(&mut self, index: usize, color: Color565);
}

impl PixelSink for Framebuffer {
    fn extent(&self) -> Extent {
        Extent::new(self.width(), self.height())
    }

    #[inline]
    fn write(&mut self, index: usize, color: Color565) {
        self.set(index, color);
    }
}

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive with the context's current color.
    fn draw(&self, sink: &mut dyn PixelSink, ctx: &DrawContext) -> Result<()>;
}

// ============================================================================
// Pixel Drawing
// ============================================================================

/// Draw a single pixel.
///
/// # Errors
///
/// [`crate::Error::IllegalPixelCoordinates`] if `(x, y)` is off screen.
pub fn draw_pixel<S: PixelSink + ?Sized>(
    sink: &mut S,
    ctx: &DrawContext,
    x: i32,
    y: i32,
) -> Result<()> {
    let extent = sink.extent();
    check_pixel(extent, x, y)?;

    sink.write(extent.index(x.into(), y.into()), ctx.color());
    Ok(())
}

impl Drawable for Point {
    fn draw(&self, sink: &mut dyn PixelSink, ctx: &DrawContext) -> Result<()> {
        draw_pixel(sink, ctx, self.x, self.y)
    }
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line using Bresenham's algorithm (non-antialiased).
///
/// The axis with the larger extent drives the loop and advances by exactly
/// one pixel per step. Endpoints are swapped so the driving coordinate always
/// increases, which makes the pixel set independent of argument order.
///
/// # Errors
///
/// [`crate::Error::IllegalLineCoordinates`] if either endpoint is off screen.
pub fn draw_line<S: PixelSink + ?Sized>(
    sink: &mut S,
    ctx: &DrawContext,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
) -> Result<()> {
    let extent = sink.extent();
    check_line(extent, x1, y1, x2, y2)?;

    let color = ctx.color();
    let (x1, y1, x2, y2) = (i64::from(x1), i64::from(y1), i64::from(x2), i64::from(y2));

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let steep = dx < dy;

    let (x1, y1, x2, y2) = if (steep && y2 < y1) || (!steep && x2 < x1) {
        (x2, y2, x1, y1)
    } else {
        (x1, y1, x2, y2)
    };

    // (u, v) = (driving, secondary) coordinates.
    let (mut u, mut v, end_u, step, du, dv) = if steep {
        (y1, x1, y2, if x1 > x2 { -1 } else { 1 }, dy, dx)
    } else {
        (x1, y1, x2, if y1 > y2 { -1 } else { 1 }, dx, dy)
    };

    plot(sink, extent, steep, u, v, color);

    let mut var = 2 * dv - du;
    let two_dv = 2 * dv;
    let two_dv_minus_two_du = two_dv - 2 * du;

    while u < end_u {
        if var < 0 {
            var += two_dv;
        } else {
            var += two_dv_minus_two_du;
            v += step;
        }
        u += 1;
        plot(sink, extent, steep, u, v, color);
    }

    Ok(())
}

/// Write a line pixel given in driving/secondary coordinates.
#[inline]
fn plot<S: PixelSink + ?Sized>(
    sink: &mut S,
    extent: Extent,
    steep: bool,
    u: i64,
    v: i64,
    color: Color565,
) {
    let (x, y) = if steep { (v, u) } else { (u, v) };
    sink.write(extent.index(x, y), color);
}

impl Drawable for Line {
    fn draw(&self, sink: &mut dyn PixelSink, ctx: &DrawContext) -> Result<()> {
        draw_line(sink, ctx, self.start.x, self.start.y, self.end.x, self.end.y)
    }
}

// ============================================================================
// Rectangle Drawing
// ============================================================================

/// Draw a filled rectangle, all four edges included.
///
/// # Errors
///
/// [`crate::Error::IllegalRectangleCoordinates`] if the corners are unordered
/// or either corner is off screen.
pub fn draw_rectangle<S: PixelSink + ?Sized>(
    sink: &mut S,
    ctx: &DrawContext,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
) -> Result<()> {
    let extent = sink.extent();
    check_rectangle(extent, x1, y1, x2, y2)?;

    let color = ctx.color();
    for y in i64::from(y1)..=i64::from(y2) {
        fill_span(sink, extent, y, x1.into(), x2.into(), color);
    }

    Ok(())
}

impl Drawable for Rect {
    fn draw(&self, sink: &mut dyn PixelSink, ctx: &DrawContext) -> Result<()> {
        draw_rectangle(
            sink,
            ctx,
            self.top_left.x,
            self.top_left.y,
            self.bottom_right.x,
            self.bottom_right.y,
        )
    }
}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Draw a filled circle using the midpoint algorithm.
///
/// `d1` walks outward from the center while `d2` starts at the radius and
/// shrinks as the error term demands. Each step fills rows `cy ± d2` across
/// `cx ± d1` and rows `cy ± d1` across `cx ± d2`, which covers the disk with
/// horizontal spans symmetric about both axes.
///
/// # Errors
///
/// [`crate::Error::IllegalCircleCenter`] if the center is off screen,
/// [`crate::Error::IllegalCircleRadius`] if any part of the bounding box is.
pub fn draw_circle<S: PixelSink + ?Sized>(
    sink: &mut S,
    ctx: &DrawContext,
    cx: i32,
    cy: i32,
    radius: i32,
) -> Result<()> {
    let extent = sink.extent();
    check_circle(extent, cx, cy, radius)?;

    let color = ctx.color();
    let (cx, cy) = (i64::from(cx), i64::from(cy));
    let mut d1: i64 = 0;
    let mut d2 = i64::from(radius);
    let mut var = 1 - d2;

    fill_span_pair(sink, extent, cy - d2, cy + d2, cx - d1, cx + d1, color);
    fill_span_pair(sink, extent, cy - d1, cy + d1, cx - d2, cx + d2, color);

    while d2 > d1 {
        if var < 0 {
            var += 2 * d1 + 3;
        } else {
            var += 2 * (d1 - d2) + 5;
            d2 -= 1;
        }
        d1 += 1;

        fill_span_pair(sink, extent, cy - d2, cy + d2, cx - d1, cx + d1, color);
        fill_span_pair(sink, extent, cy - d1, cy + d1, cx - d2, cx + d2, color);
    }

    Ok(())
}

impl Drawable for Circle {
    fn draw(&self, sink: &mut dyn PixelSink, ctx: &DrawContext) -> Result<()> {
        draw_circle(sink, ctx, self.center.x, self.center.y, self.radius)
    }
}

/// Fill `[min_x, max_x]` on both rows `y1` and `y2`.
#[inline]
fn fill_span_pair<S: PixelSink + ?Sized>(
    sink: &mut S,
    extent: Extent,
    y1: i64,
    y2: i64,
    min_x: i64,
    max_x: i64,
    color: Color565,
) {
    fill_span(sink, extent, y1, min_x, max_x, color);
    fill_span(sink, extent, y2, min_x, max_x, color);
}

/// Fill `[min_x, max_x]` on row `y`.
#[inline]
fn fill_span<S: PixelSink + ?Sized>(
    sink: &mut S,
    extent: Extent,
    y: i64,
    min_x: i64,
    max_x: i64,
    color: Color565,
) {
    if min_x > max_x {
        return;
    }
    let start = extent.index(min_x, y);
    let len = (max_x - min_x) as usize;
    for index in start..=start + len {
        sink.write(index, color);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::BTreeSet;

    /// Records every write instead of storing colors.
    struct Recorder {
        extent: Extent,
        writes: Vec<usize>,
    }

    impl Recorder {
        fn new(width: u32, height: u32) -> Self {
            Self { extent: Extent::new(width, height), writes: Vec::new() }
        }

        fn touched(&self) -> BTreeSet<(i32, i32)> {
            let w = self.extent.width as usize;
            self.writes.iter().map(|&i| ((i % w) as i32, (i / w) as i32)).collect()
        }
    }

    impl PixelSink for Recorder {
        fn extent(&self) -> Extent {
            self.extent
        }

        fn write(&mut self, index: usize, _color: Color565) {
            self.writes.push(index);
        }
    }

    fn set(points: &[(i32, i32)]) -> BTreeSet<(i32, i32)> {
        points.iter().copied().collect()
    }

    #[test]
    fn test_draw_pixel_writes_current_color() {
        let mut fb = Framebuffer::new(8, 4).expect("framebuffer creation should succeed");
        let mut ctx = DrawContext::new();
        ctx.set_color(0x12, 0x34, 0x56);

        draw_pixel(&mut fb, &ctx, 5, 3).unwrap();

        assert_eq!(fb.get(3 * 8 + 5).raw(), 0x11AA);
        assert_eq!(fb.count_nonzero(), 1);
    }

    #[test]
    fn test_draw_pixel_out_of_bounds() {
        let mut fb = Framebuffer::new(8, 4).expect("framebuffer creation should succeed");
        let err = draw_pixel(&mut fb, &DrawContext::new(), 8, 0).unwrap_err();
        assert_eq!(err, Error::IllegalPixelCoordinates { x: 8, y: 0 });
        assert_eq!(fb.count_nonzero(), 0);
    }

    #[test]
    fn test_draw_line_diagonal() {
        let mut rec = Recorder::new(4, 4);
        draw_line(&mut rec, &DrawContext::new(), 0, 0, 3, 3).unwrap();
        assert_eq!(rec.touched(), set(&[(0, 0), (1, 1), (2, 2), (3, 3)]));
        assert_eq!(rec.writes.len(), 4);
    }

    #[test]
    fn test_draw_line_shallow() {
        let mut rec = Recorder::new(4, 4);
        draw_line(&mut rec, &DrawContext::new(), 0, 0, 3, 1).unwrap();
        assert_eq!(rec.touched(), set(&[(0, 0), (1, 0), (2, 1), (3, 1)]));
    }

    #[test]
    fn test_draw_line_steep() {
        let mut rec = Recorder::new(4, 4);
        draw_line(&mut rec, &DrawContext::new(), 0, 0, 1, 3).unwrap();
        assert_eq!(rec.touched(), set(&[(0, 0), (0, 1), (1, 2), (1, 3)]));
    }

    #[test]
    fn test_draw_line_reversed_matches() {
        let mut fwd = Recorder::new(10, 10);
        let mut rev = Recorder::new(10, 10);
        let ctx = DrawContext::new();
        draw_line(&mut fwd, &ctx, 1, 8, 7, 2).unwrap();
        draw_line(&mut rev, &ctx, 7, 2, 1, 8).unwrap();
        assert_eq!(fwd.touched(), rev.touched());
    }

    #[test]
    fn test_draw_line_horizontal() {
        let mut rec = Recorder::new(10, 10);
        draw_line(&mut rec, &DrawContext::new(), 8, 5, 2, 5).unwrap();
        let expected: BTreeSet<_> = (2..=8).map(|x| (x, 5)).collect();
        assert_eq!(rec.touched(), expected);
    }

    #[test]
    fn test_draw_line_vertical() {
        let mut rec = Recorder::new(10, 10);
        draw_line(&mut rec, &DrawContext::new(), 4, 9, 4, 0).unwrap();
        let expected: BTreeSet<_> = (0..=9).map(|y| (4, y)).collect();
        assert_eq!(rec.touched(), expected);
    }

    #[test]
    fn test_draw_line_single_point() {
        let mut rec = Recorder::new(10, 10);
        draw_line(&mut rec, &DrawContext::new(), 3, 3, 3, 3).unwrap();
        assert_eq!(rec.touched(), set(&[(3, 3)]));
    }

    #[test]
    fn test_draw_line_rejects_partial() {
        let mut rec = Recorder::new(10, 10);
        let err = draw_line(&mut rec, &DrawContext::new(), 0, 0, 10, 5).unwrap_err();
        assert_eq!(err.code(), Some(8));
        assert!(rec.writes.is_empty());
    }

    #[test]
    fn test_draw_rectangle() {
        let mut rec = Recorder::new(5, 5);
        draw_rectangle(&mut rec, &DrawContext::new(), 0, 0, 2, 2).unwrap();
        let expected: BTreeSet<_> =
            (0..=2).flat_map(|y| (0..=2).map(move |x| (x, y))).collect();
        assert_eq!(rec.touched(), expected);
        assert_eq!(rec.writes.len(), 9);
    }

    #[test]
    fn test_draw_rectangle_single_cell() {
        let mut rec = Recorder::new(5, 5);
        draw_rectangle(&mut rec, &DrawContext::new(), 4, 4, 4, 4).unwrap();
        assert_eq!(rec.touched(), set(&[(4, 4)]));
    }

    #[test]
    fn test_draw_rectangle_unordered() {
        let mut rec = Recorder::new(5, 5);
        let err = draw_rectangle(&mut rec, &DrawContext::new(), 3, 0, 1, 2).unwrap_err();
        assert!(matches!(err, Error::IllegalRectangleCoordinates { .. }));
        assert!(rec.writes.is_empty());
    }

    #[test]
    fn test_draw_circle_zero_radius() {
        let mut rec = Recorder::new(5, 5);
        draw_circle(&mut rec, &DrawContext::new(), 2, 3, 0).unwrap();
        assert_eq!(rec.touched(), set(&[(2, 3)]));
    }

    #[test]
    fn test_draw_circle_radius_one() {
        let mut rec = Recorder::new(5, 5);
        draw_circle(&mut rec, &DrawContext::new(), 2, 2, 1).unwrap();
        assert_eq!(rec.touched(), set(&[(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)]));
    }

    #[test]
    fn test_draw_circle_radius_two() {
        let mut rec = Recorder::new(5, 5);
        draw_circle(&mut rec, &DrawContext::new(), 2, 2, 2).unwrap();

        let mut expected = BTreeSet::new();
        for (y, (lo, hi)) in [(1, 3), (0, 4), (0, 4), (0, 4), (1, 3)].into_iter().enumerate() {
            for x in lo..=hi {
                expected.insert((x, y as i32));
            }
        }
        assert_eq!(rec.touched(), expected);
        assert_eq!(rec.touched().len(), 21);
    }

    #[test]
    fn test_draw_circle_is_filled() {
        let mut rec = Recorder::new(41, 41);
        draw_circle(&mut rec, &DrawContext::new(), 20, 20, 20).unwrap();
        let touched = rec.touched();

        // Every pixel strictly inside the radius is covered.
        for y in 0..41 {
            for x in 0..41 {
                let (dx, dy) = (x - 20, y - 20);
                if dx * dx + dy * dy < 18 * 18 {
                    assert!(touched.contains(&(x, y)), "hole at ({x}, {y})");
                }
            }
        }
        // Corners of the bounding box stay clear.
        assert!(!touched.contains(&(0, 0)));
        assert!(!touched.contains(&(40, 40)));
    }

    #[test]
    fn test_draw_circle_errors() {
        let mut rec = Recorder::new(10, 10);
        let ctx = DrawContext::new();

        let err = draw_circle(&mut rec, &ctx, 10, 5, 1).unwrap_err();
        assert_eq!(err.code(), Some(12));

        let err = draw_circle(&mut rec, &ctx, 1, 5, 2).unwrap_err();
        assert_eq!(err.code(), Some(13));

        assert!(rec.writes.is_empty());
    }

    #[test]
    fn test_drawable_shapes() {
        let mut fb = Framebuffer::new(16, 16).expect("framebuffer creation should succeed");
        let ctx = DrawContext::with_color(Color565::from_raw(0x0F0F));

        Point::new(1, 1).draw(&mut fb, &ctx).unwrap();
        Line::from_coords(0, 15, 15, 15).draw(&mut fb, &ctx).unwrap();
        Rect::from_coords(3, 3, 4, 4).draw(&mut fb, &ctx).unwrap();
        Circle::new(Point::new(10, 6), 2).draw(&mut fb, &ctx).unwrap();

        assert_eq!(fb.pixel(1, 1), Some(Color565::from_raw(0x0F0F)));
        assert_eq!(fb.pixel(7, 15), Some(Color565::from_raw(0x0F0F)));
        assert_eq!(fb.pixel(4, 4), Some(Color565::from_raw(0x0F0F)));
        assert_eq!(fb.pixel(10, 6), Some(Color565::from_raw(0x0F0F)));
        assert_eq!(fb.pixel(0, 0), Some(Color565::BLACK));

        let shapes: Vec<Box<dyn Drawable>> = vec![
            Box::new(Point::new(20, 0)),
            Box::new(Circle::new(Point::new(0, 0), 1)),
        ];
        for shape in &shapes {
            assert!(shape.draw(&mut fb, &ctx).is_err());
        }
    }
}
