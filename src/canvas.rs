// The drawable surface: one color per pixel, sized once at startup.
// Paint and fill mutate it in place; `render` copies it to the screen.

use crate::types::{pack_rgb, Color, FrameBuffer};
use image::RgbImage;

#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    image: RgbImage,
}

impl PixelBuffer {
    /// A `width` x `height` canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self { image: RgbImage::from_pixel(width, height, background) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// Color at (x,y), or None outside the canvas.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.image.get_pixel_checked(x as u32, y as u32).copied()
    }

    /// Set (x,y) to `color`. Returns false (and writes nothing) outside the canvas.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        match self.image.get_pixel_mut_checked(x as u32, y as u32) {
            Some(px) => {
                *px = color;
                true
            }
            None => false,
        }
    }

    /// Fill the grid-aligned square under (x,y) with side `thickness * grid_size`.
    /// The position is snapped down to a multiple of `grid_size` first
    /// (integer division, so truncation toward zero). Anything past the canvas
    /// edge is clipped. Returns how many pixels were written.
    pub fn paint_cell(&mut self, x: i32, y: i32, color: Color, thickness: u32, grid_size: u32) -> usize {
        let grid = grid_size.max(1) as i64;
        let side = thickness as i64 * grid;
        let x0 = (x as i64 / grid) * grid;
        let y0 = (y as i64 / grid) * grid;

        // Clip the square against the canvas once instead of per pixel.
        let cx0 = x0.max(0);
        let cy0 = y0.max(0);
        let cx1 = (x0 + side).min(self.width() as i64);
        let cy1 = (y0 + side).min(self.height() as i64);
        if cx0 >= cx1 || cy0 >= cy1 {
            return 0;
        }

        for py in cy0..cy1 {
            for px in cx0..cx1 {
                self.image.put_pixel(px as u32, py as u32, color);
            }
        }
        ((cx1 - cx0) * (cy1 - cy0)) as usize
    }

    /// Copy the whole canvas to the screen at (0,0). Screen pixels the canvas
    /// does not cover are left as they were.
    pub fn render(&self, target: &mut FrameBuffer) {
        let w = (self.width() as usize).min(target.width);
        let h = (self.height() as usize).min(target.height);
        for (x, y, px) in self.image.enumerate_pixels() {
            let (x, y) = (x as usize, y as usize);
            if x >= w || y >= h {
                continue;
            }
            target.pixels[y * target.width + x] = pack_rgb(*px);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLACK, WHITE};
    use image::Rgb;

    const RED: Color = Rgb([255, 0, 0]);

    fn count(buf: &PixelBuffer, color: Color) -> usize {
        let mut n = 0;
        for y in 0..buf.height() as i32 {
            for x in 0..buf.width() as i32 {
                if buf.get_pixel(x, y) == Some(color) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn accessors_are_bounds_checked() {
        let mut buf = PixelBuffer::new(4, 3, WHITE);
        assert_eq!(buf.get_pixel(3, 2), Some(WHITE));
        assert_eq!(buf.get_pixel(4, 0), None);
        assert_eq!(buf.get_pixel(0, -1), None);
        assert!(buf.set_pixel(1, 1, RED));
        assert!(!buf.set_pixel(-1, 1, RED));
        assert!(!buf.set_pixel(1, 3, RED));
        assert_eq!(count(&buf, RED), 1);
    }

    #[test]
    fn paint_cell_snaps_to_grid() {
        let mut buf = PixelBuffer::new(100, 100, WHITE);
        let written = buf.paint_cell(27, 45, RED, 1, 20);
        assert_eq!(written, 400);
        // Square is [20,40) x [40,60).
        assert_eq!(buf.get_pixel(20, 40), Some(RED));
        assert_eq!(buf.get_pixel(39, 59), Some(RED));
        assert_eq!(buf.get_pixel(19, 40), Some(WHITE));
        assert_eq!(buf.get_pixel(40, 40), Some(WHITE));
        assert_eq!(buf.get_pixel(20, 60), Some(WHITE));
        assert_eq!(count(&buf, RED), 400);
    }

    #[test]
    fn thickness_scales_the_square() {
        let mut buf = PixelBuffer::new(200, 200, WHITE);
        buf.paint_cell(5, 5, BLACK, 3, 20);
        assert_eq!(count(&buf, BLACK), 60 * 60);
        assert_eq!(buf.get_pixel(59, 59), Some(BLACK));
        assert_eq!(buf.get_pixel(60, 0), Some(WHITE));
    }

    #[test]
    fn paint_cell_clips_at_the_edge() {
        let mut buf = PixelBuffer::new(50, 30, WHITE);
        let written = buf.paint_cell(45, 25, RED, 2, 20);
        // Square starts at (40,20) with side 40; only [40,50) x [20,30) exists.
        assert_eq!(written, 100);
        assert_eq!(count(&buf, RED), 100);
        assert_eq!(buf.paint_cell(500, 500, RED, 1, 20), 0);
    }

    #[test]
    fn negative_positions_truncate_toward_zero() {
        let mut buf = PixelBuffer::new(40, 40, WHITE);
        // -5 / 20 == 0, so the square lands at the origin.
        buf.paint_cell(-5, -5, RED, 1, 20);
        assert_eq!(buf.get_pixel(0, 0), Some(RED));
        assert_eq!(count(&buf, RED), 400);
    }

    #[test]
    fn render_copies_verbatim() {
        let mut buf = PixelBuffer::new(3, 2, WHITE);
        buf.set_pixel(2, 1, RED);
        let mut fb = FrameBuffer::new(4, 2);
        buf.render(&mut fb);
        assert_eq!(fb.pixels[0], 0x00FF_FFFF);
        assert_eq!(fb.pixels[4 + 2], 0x00FF_0000); // row 1, column 2
        // Column 3 is outside the canvas and untouched.
        assert_eq!(fb.pixels[3], 0);
        assert_eq!(buf.get_pixel(2, 1), Some(RED));
    }

    #[test]
    fn render_skips_canvas_outside_small_target() {
        let buf = PixelBuffer::new(5, 5, RED);
        let mut fb = FrameBuffer::new(2, 2);
        buf.render(&mut fb);
        assert!(fb.pixels.iter().all(|p| *p == 0x00FF_0000));
    }
}
