// Tool panel docked on the right edge of the window.
// Visual: a dark column of buttons (EXIT, COLOR, SIZE -/+, FILL, ERASER, BRUSH,
// UNDO) with the current color swatch, brush size and undo depth underneath.
// Clicks inside it are tool events; they never reach the canvas.

use crate::controller::Event;
use crate::draw::{draw_text_5x7, fill_rect, stroke_rect, text_width_5x7};
use crate::types::{pack_rgb, BrushState, FrameBuffer, Tool};

pub const PANEL_WIDTH: i32 = 200;
const PADDING: i32 = 10;
const BUTTON_W: i32 = 150;
const BUTTON_H: i32 = 50;
const LABEL_SCALE: i32 = 2;

const PANEL_BG: u32 = 0x0032_3232;
const BUTTON_BG: u32 = 0x0046_4646;
const EXIT_BG: u32 = 0x00C8_3232;
const TEXT: u32 = 0x00FF_FFFF;
const ACTIVE: u32 = 0x00FF_CC33;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonKind {
    Exit,
    Color,
    Thinner,
    Thicker,
    Fill,
    Eraser,
    Brush,
    Undo,
}

impl ButtonKind {
    fn label(self) -> &'static str {
        match self {
            ButtonKind::Exit => "EXIT",
            ButtonKind::Color => "COLOR",
            ButtonKind::Thinner => "SIZE -",
            ButtonKind::Thicker => "SIZE +",
            ButtonKind::Fill => "FILL",
            ButtonKind::Eraser => "ERASER",
            ButtonKind::Brush => "BRUSH",
            ButtonKind::Undo => "UNDO",
        }
    }

    fn event(self, brush: &BrushState) -> Event {
        match self {
            ButtonKind::Exit => Event::Exit,
            ButtonKind::Color => Event::NextColor,
            ButtonKind::Thinner => Event::SetThickness(brush.thickness.saturating_sub(1)),
            ButtonKind::Thicker => Event::SetThickness(brush.thickness + 1),
            ButtonKind::Fill => Event::SelectTool(Tool::Fill),
            ButtonKind::Eraser => Event::SelectTool(Tool::Eraser),
            ButtonKind::Brush => Event::SelectTool(Tool::Brush),
            ButtonKind::Undo => Event::Undo,
        }
    }

    fn tool(self) -> Option<Tool> {
        match self {
            ButtonKind::Fill => Some(Tool::Fill),
            ButtonKind::Eraser => Some(Tool::Eraser),
            ButtonKind::Brush => Some(Tool::Brush),
            _ => None,
        }
    }
}

const LAYOUT: [ButtonKind; 8] = [
    ButtonKind::Exit,
    ButtonKind::Color,
    ButtonKind::Thinner,
    ButtonKind::Thicker,
    ButtonKind::Fill,
    ButtonKind::Eraser,
    ButtonKind::Brush,
    ButtonKind::Undo,
];

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl Rect {
    fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && py >= self.y && px < self.x + self.w && py < self.y + self.h
    }
}

pub struct Panel {
    area: Rect,
    buttons: Vec<(Rect, ButtonKind)>,
    status_y: i32,
}

impl Panel {
    /// Lay the panel out against the right edge of a `screen_w` x `screen_h` window.
    /// On narrow windows it shrinks to half the width.
    pub fn new(screen_w: usize, screen_h: usize) -> Self {
        let w = PANEL_WIDTH.min(screen_w as i32 / 2);
        let area = Rect { x: screen_w as i32 - w, y: 0, w, h: screen_h as i32 };
        let bw = BUTTON_W.min(w - 2 * PADDING).max(1);

        let mut y = PADDING;
        let buttons = LAYOUT
            .iter()
            .map(|kind| {
                let r = Rect { x: area.x + PADDING, y, w: bw, h: BUTTON_H };
                y += BUTTON_H + PADDING;
                (r, *kind)
            })
            .collect();

        Self { area, buttons, status_y: y + PADDING }
    }

    /// Left edge in screen pixels.
    pub fn left(&self) -> i32 {
        self.area.x
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.area.contains(x, y)
    }

    /// The event a click at (x,y) triggers, if it lands on a button.
    pub fn hit(&self, x: i32, y: i32, brush: &BrushState) -> Option<Event> {
        self.buttons
            .iter()
            .find(|(r, _)| r.contains(x, y))
            .map(|(_, kind)| kind.event(brush))
    }

    pub fn render(&self, fb: &mut FrameBuffer, brush: &BrushState, undo_steps: usize) {
        let a = self.area;
        fill_rect(fb, a.x, a.y, a.w, a.h, PANEL_BG);

        for (r, kind) in &self.buttons {
            let bg = if *kind == ButtonKind::Exit { EXIT_BG } else { BUTTON_BG };
            fill_rect(fb, r.x, r.y, r.w, r.h, bg);
            if kind.tool() == Some(brush.tool) {
                stroke_rect(fb, r.x, r.y, r.w, r.h, ACTIVE);
                stroke_rect(fb, r.x + 1, r.y + 1, r.w - 2, r.h - 2, ACTIVE);
            }
            let label = kind.label();
            let tx = r.x + (r.w - text_width_5x7(label, LABEL_SCALE)) / 2;
            let ty = r.y + (r.h - 7 * LABEL_SCALE) / 2;
            draw_text_5x7(fb, tx, ty, label, LABEL_SCALE, TEXT);
        }

        // Status block: swatch, size, history depth.
        let x = a.x + PADDING;
        let mut y = self.status_y;
        fill_rect(fb, x, y, 30, 30, pack_rgb(brush.color));
        stroke_rect(fb, x, y, 30, 30, TEXT);
        y += 40;
        draw_text_5x7(fb, x, y, &format!("SIZE {}", brush.thickness), LABEL_SCALE, TEXT);
        y += 20;
        draw_text_5x7(fb, x, y, &format!("UNDO {undo_steps}"), LABEL_SCALE, TEXT);
    }
}
