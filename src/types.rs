// Core value types shared by the canvas, the controller and the window shell.

use image::Rgb;

/// One canvas color. Equality is exact per channel (no tolerance anywhere).
pub type Color = Rgb<u8>;

/// Pure white; the default background and therefore the default eraser color.
pub const WHITE: Color = Rgb([255, 255, 255]);
pub const BLACK: Color = Rgb([0, 0, 0]);

/// Default side of one grid cell in pixels.
pub const GRID_SIZE: u32 = 20;

pub const MIN_THICKNESS: u32 = 1;
pub const MAX_THICKNESS: u32 = 10;

/// Colors reachable from the COLOR button (and keys 1..9).
/// Stands in for a native color dialog, which minifb does not have.
pub const PALETTE: [Color; 9] = [
    Rgb([0, 0, 0]),
    Rgb([220, 40, 40]),
    Rgb([240, 140, 20]),
    Rgb([240, 220, 40]),
    Rgb([50, 170, 60]),
    Rgb([40, 110, 220]),
    Rgb([130, 60, 200]),
    Rgb([120, 80, 40]),
    Rgb([128, 128, 128]),
];

/// Pack a color as 0x00RRGGBB, the layout minifb expects.
#[inline]
pub fn pack_rgb(c: Color) -> u32 {
    let [r, g, b] = c.0;
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Parse `#RRGGBB` or `RRGGBB`.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// The screen the window shell composes into every frame.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // window width in pixels
    pub height: usize,     // window height in pixels
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

/// Which tool the primary mouse button uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Brush,
    Eraser,
    Fill,
}

/// What pointer input currently does. Only one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Drawing,
    Erasing,
    Filling,
}

/// Everything the user has selected so far. Replaced, never mutated in place,
/// by `controller::handle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushState {
    pub color: Color,
    pub thickness: u32,
    pub mode: Mode,
    pub tool: Tool,
    pub palette_index: usize,
}

impl BrushState {
    pub fn new(color: Color) -> Self {
        let palette_index = PALETTE.iter().position(|c| *c == color).unwrap_or(0);
        Self { color, thickness: MIN_THICKNESS, mode: Mode::Idle, tool: Tool::Brush, palette_index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse_with_or_without_hash() {
        assert_eq!(parse_hex_color("#FF8000"), Some(Rgb([255, 128, 0])));
        assert_eq!(parse_hex_color("0a0B0c"), Some(Rgb([10, 11, 12])));
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
        assert_eq!(parse_hex_color("ééé"), None);
    }

    #[test]
    fn packing_matches_minifb_layout() {
        assert_eq!(pack_rgb(Rgb([0x12, 0x34, 0x56])), 0x0012_3456);
        assert_eq!(pack_rgb(WHITE), 0x00FF_FFFF);
    }

    #[test]
    fn new_brush_tracks_palette_slot() {
        assert_eq!(BrushState::new(PALETTE[4]).palette_index, 4);
        let custom = BrushState::new(Rgb([1, 2, 3]));
        assert_eq!(custom.palette_index, 0);
        assert_eq!(custom.color, Rgb([1, 2, 3]));
        assert_eq!(custom.mode, Mode::Idle);
        assert_eq!(custom.thickness, MIN_THICKNESS);
    }
}
