// Bucket fill over the canvas.
// Visual: the connected patch of one color under the seed changes to the new color;
// the fill stops at any pixel of a different color and never leaks diagonally.

use crate::canvas::PixelBuffer;
use crate::types::Color;

/// Repaint the 4-connected region of the seed's color that contains `(x, y)`.
///
/// Uses an explicit LIFO work-list instead of recursion, so region size is
/// bounded by heap, not stack. A pixel may be pushed up to four times but is
/// painted once: once repainted it no longer matches the start color and
/// every later visit is discarded.
///
/// Returns the number of pixels repainted (0 if the seed is off-canvas or
/// already `fill_color`).
pub fn flood_fill(buf: &mut PixelBuffer, x: i32, y: i32, fill_color: Color) -> usize {
    let Some(start_color) = buf.get_pixel(x, y) else {
        return 0;
    };
    if start_color == fill_color {
        return 0; // nothing to do, and would never terminate otherwise
    }

    let mut painted = 0usize;
    let mut points: Vec<(i32, i32)> = vec![(x, y)];

    while let Some((px, py)) = points.pop() {
        // Off-canvas neighbours read as None and fall out here.
        if buf.get_pixel(px, py) != Some(start_color) {
            continue;
        }
        buf.set_pixel(px, py, fill_color);
        painted += 1;

        points.push((px + 1, py));
        points.push((px - 1, py));
        points.push((px, py + 1));
        points.push((px, py - 1));
    }

    painted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLACK, WHITE};
    use image::Rgb;

    const BLUE: Color = Rgb([0, 0, 255]);

    /// Build a canvas from rows of '#' (black) and '.' (white).
    fn canvas(rows: &[&str]) -> PixelBuffer {
        let h = rows.len() as u32;
        let w = rows[0].len() as u32;
        let mut buf = PixelBuffer::new(w, h, WHITE);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    buf.set_pixel(x as i32, y as i32, BLACK);
                }
            }
        }
        buf
    }

    fn dump(buf: &PixelBuffer) -> Vec<String> {
        (0..buf.height() as i32)
            .map(|y| {
                (0..buf.width() as i32)
                    .map(|x| match buf.get_pixel(x, y) {
                        Some(c) if c == BLACK => '#',
                        Some(c) if c == BLUE => 'o',
                        _ => '.',
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn fills_enclosed_region_only() {
        let mut buf = canvas(&[
            "......",
            ".####.",
            ".#..#.",
            ".#..#.",
            ".####.",
            "......",
        ]);
        let n = flood_fill(&mut buf, 2, 2, BLUE);
        assert_eq!(n, 4);
        assert_eq!(
            dump(&buf),
            vec!["......", ".####.", ".#oo#.", ".#oo#.", ".####.", "......"]
        );
    }

    #[test]
    fn does_not_leak_through_diagonal_gaps() {
        let mut buf = canvas(&[
            "..#..",
            ".#.#.",
            "#...#",
            ".#.#.",
            "..#..",
        ]);
        flood_fill(&mut buf, 2, 2, BLUE);
        assert_eq!(
            dump(&buf),
            vec!["..#..", ".#o#.", "#ooo#", ".#o#.", "..#.."]
        );
    }

    #[test]
    fn outer_region_wraps_around_obstacles() {
        let mut buf = canvas(&[
            "....",
            ".##.",
            "....",
        ]);
        let n = flood_fill(&mut buf, 0, 0, BLUE);
        assert_eq!(n, 10);
        assert_eq!(dump(&buf), vec!["oooo", "o##o", "oooo"]);
    }

    #[test]
    fn same_color_seed_is_a_noop() {
        let mut buf = canvas(&["..#", "#.."]);
        let before = buf.clone();
        assert_eq!(flood_fill(&mut buf, 0, 0, WHITE), 0);
        assert_eq!(buf, before);
    }

    #[test]
    fn seed_outside_canvas_is_a_noop() {
        let mut buf = canvas(&["...", "..."]);
        let before = buf.clone();
        assert_eq!(flood_fill(&mut buf, 3, 0, BLUE), 0);
        assert_eq!(flood_fill(&mut buf, -1, 1, BLUE), 0);
        assert_eq!(buf, before);
    }

    #[test]
    fn large_region_does_not_overflow_the_stack() {
        let mut buf = PixelBuffer::new(800, 600, WHITE);
        assert_eq!(flood_fill(&mut buf, 400, 300, BLUE), 800 * 600);
        assert_eq!(buf.get_pixel(0, 0), Some(BLUE));
        assert_eq!(buf.get_pixel(799, 599), Some(BLUE));
    }

    #[test]
    fn filling_a_painted_cell_recolors_just_that_cell() {
        let mut buf = PixelBuffer::new(60, 60, WHITE);
        buf.paint_cell(25, 25, BLACK, 1, 20);
        let n = flood_fill(&mut buf, 30, 30, BLUE);
        assert_eq!(n, 400);
        assert_eq!(buf.get_pixel(20, 20), Some(BLUE));
        assert_eq!(buf.get_pixel(19, 20), Some(WHITE));
    }
}
