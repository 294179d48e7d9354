// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the canvas.
// 2) A grid-cell outline that follows your mouse (where the next paint lands).
// 3) A tiny 5x7 bitmap font for the tool panel labels.

use crate::controller::{Button, Event, Key as PaintKey, Modifiers};
use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,            // the on-screen window you see
    last_pos: Option<(i32, i32)>,
    latches: [Latch; 3],       // primary, secondary, middle as of the previous poll
}

/// Per-button state between polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Latch {
    Up,
    Held,    // pressed inside the window, a PointerDown was sent
    Ignored, // pressed outside the window, swallowed until released
}

/// One button's transition for this poll: the event to emit (if any) and the next latch.
/// Releases count even off-window, otherwise a stroke would stay stuck on.
/// A press that started outside the window is ignored until released, even if
/// the pointer enters while it is still held.
fn edge(latch: Latch, button: Button, down: bool, pos: Option<(i32, i32)>) -> (Option<Event>, Latch) {
    match (latch, down, pos) {
        (Latch::Up, true, Some((x, y))) => (Some(Event::PointerDown { button, x, y }), Latch::Held),
        (Latch::Up, true, None) => (None, Latch::Ignored),
        (Latch::Held, false, _) => (Some(Event::PointerUp { button }), Latch::Up),
        (Latch::Ignored, false, _) | (Latch::Up, false, _) => (None, Latch::Up),
        (l, true, _) => (None, l),
    }
}

const BUTTONS: [(MouseButton, Button); 3] = [
    (MouseButton::Left, Button::Primary),
    (MouseButton::Right, Button::Secondary),
    (MouseButton::Middle, Button::Middle),
];

impl Drawer {
    /// Create a window sized to the canvas.
    /// Visual: a new blank window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, borderless: bool, fps: usize) -> Result<Self, Error> {
        let opts = WindowOptions { borderless, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, opts)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window, last_pos: None, latches: [Latch::Up; 3] })
    }

    /// Push the composed frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Pump window events without uploading a new frame.
    pub fn idle(&mut self) {
        self.window.update();
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Current mouse position, or None when the pointer is outside the window.
    pub fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| (x as i32, y as i32))
    }

    /// Turn this frame's input state into discrete events.
    /// minifb only exposes "is held" / "where is it", so presses and releases
    /// are found by comparing against the previous poll.
    pub fn poll_events(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        let pos = self.mouse_pos();

        if let Some((x, y)) = pos {
            if self.last_pos != pos {
                events.push(Event::PointerMove { x, y });
            }
        }

        for (i, (mb, button)) in BUTTONS.iter().enumerate() {
            let down = self.window.get_mouse_down(*mb);
            let (event, next) = edge(self.latches[i], *button, down, pos);
            events.extend(event);
            self.latches[i] = next;
        }
        self.last_pos = pos;

        let mods = Modifiers {
            ctrl: self.window.is_key_down(Key::LeftCtrl) || self.window.is_key_down(Key::RightCtrl),
        };
        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            if let Some(key) = map_key(key) {
                events.push(Event::KeyDown { key, mods });
            }
        }
        events
    }
}

fn map_key(key: Key) -> Option<PaintKey> {
    Some(match key {
        Key::Escape => PaintKey::Escape,
        Key::Z => PaintKey::Z,
        Key::B => PaintKey::B,
        Key::E => PaintKey::E,
        Key::F => PaintKey::F,
        Key::C => PaintKey::C,
        Key::LeftBracket => PaintKey::LeftBracket,
        Key::RightBracket => PaintKey::RightBracket,
        Key::Key1 => PaintKey::Digit(1),
        Key::Key2 => PaintKey::Digit(2),
        Key::Key3 => PaintKey::Digit(3),
        Key::Key4 => PaintKey::Digit(4),
        Key::Key5 => PaintKey::Digit(5),
        Key::Key6 => PaintKey::Digit(6),
        Key::Key7 => PaintKey::Digit(7),
        Key::Key8 => PaintKey::Digit(8),
        Key::Key9 => PaintKey::Digit(9),
        _ => return None,
    })
}

/* ---------- Software drawing: pixels, rectangles, cell cursor, bitmap font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Solid rectangle, clipped to the framebuffer.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + w).min(fb.width as i32);
    let y1 = (y + h).min(fb.height as i32);
    for py in y0..y1 {
        let row = py as usize * fb.width;
        for px in x0..x1 {
            fb.pixels[row + px as usize] = color;
        }
    }
}

/// One-pixel rectangle border.
pub fn stroke_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    if w <= 0 || h <= 0 {
        return;
    }
    for px in x..x + w {
        put_pixel(fb, px, y, color);
        put_pixel(fb, px, y + h - 1, color);
    }
    for py in y..y + h {
        put_pixel(fb, x, py, color);
        put_pixel(fb, x + w - 1, py, color);
    }
}

/// Outline the grid cell under (x,y), `side` pixels wide, snapped like painting is.
/// Visual: a thin box shows exactly which square the next click will color.
pub fn draw_cell_cursor(fb: &mut FrameBuffer, x: i32, y: i32, grid: u32, side: u32, color: u32) {
    let grid = grid.max(1) as i32;
    let cx = (x / grid) * grid;
    let cy = (y / grid) * grid;
    stroke_rect(fb, cx, cy, side as i32, side as i32, color);
}

/* ---------- 5x7 bitmap font (digits, A-Z, a little punctuation) ---------- */

/// Return a 5x7 glyph bitmap.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b10001,0b01010,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '+' => g!(0b00000,0b00100,0b00100,0b11111,0b00100,0b00100,0b00000),
        '/' => g!(0b00001,0b00001,0b00010,0b00100,0b01000,0b10000,0b10000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y), each font pixel `scale` screen pixels wide.
/// Visual: a glyph with a 1-font-pixel black shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, scale: i32, color: u32) {
    let Some(rows) = glyph5x7(ch) else { return };
    // Shadow pass first, then the glyph on top.
    for (dx, dy, c) in [(scale, scale, 0x00000000), (0, 0, color)] {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    fill_rect(fb, x + dx + rx * scale, y + dy + ry as i32 * scale, scale, scale, c);
                }
            }
        }
    }
}

/// Pixel width of `text` at `scale`.
pub fn text_width_5x7(text: &str, scale: i32) -> i32 {
    text.chars().count() as i32 * 6 * scale
}

/// Draw a text string using 5x7 glyphs (5 pixels + 1 spacing per character).
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, scale: i32, color: u32) {
    let scale = scale.max(1);
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, scale, color);
        x += 6 * scale;
    }
}
