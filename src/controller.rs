// Turns input into canvas work.
//
// `handle` is pure: it gets the current brush state, the startup config and
// one event, and returns the next brush state plus an ordered list of
// actions. It never touches the canvas; `session::Session` applies actions.

use crate::config::Config;
use crate::types::{BrushState, Color, Mode, Tool, MAX_THICKNESS, MIN_THICKNESS, PALETTE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Secondary,
    Middle,
}

/// Keys the controller cares about. The window shell maps toolkit keys to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Z,
    B,
    E,
    F,
    C,
    LeftBracket,
    RightBracket,
    Digit(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    PointerDown { button: Button, x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
    PointerUp { button: Button },
    KeyDown { key: Key, mods: Modifiers },
    // Tool panel
    SelectTool(Tool),
    NextColor,
    PickColor(Color),
    SetThickness(u32),
    Undo,
    Exit,
}

/// Work for the session, applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Snapshot,
    PaintCell { x: i32, y: i32, color: Color, thickness: u32 },
    Fill { x: i32, y: i32, color: Color },
    Undo,
    RequestRedraw,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub state: BrushState,
    pub actions: Vec<Action>,
}

impl Outcome {
    fn unchanged(state: BrushState) -> Self {
        Self { state, actions: Vec::new() }
    }
}

pub fn handle(state: &BrushState, config: &Config, event: Event) -> Outcome {
    let mut next = *state;
    let mut actions = Vec::new();

    match event {
        Event::PointerDown { button, x, y } => match button {
            Button::Primary => match state.tool {
                Tool::Brush => {
                    next.mode = Mode::Drawing;
                    stroke(&mut actions, x, y, next.color, next.thickness);
                }
                Tool::Eraser => {
                    next.mode = Mode::Erasing;
                    stroke(&mut actions, x, y, config.background, next.thickness);
                }
                Tool::Fill => {
                    next.mode = Mode::Filling;
                    let (sx, sy) = config.fill_seed.unwrap_or((x, y));
                    fill(&mut actions, sx, sy, next.color);
                }
            },
            Button::Secondary => {
                next.mode = Mode::Erasing;
                stroke(&mut actions, x, y, config.background, next.thickness);
            }
            Button::Middle => next.mode = Mode::Idle,
        },

        Event::PointerMove { x, y } => match state.mode {
            Mode::Drawing => stroke(&mut actions, x, y, state.color, state.thickness),
            Mode::Erasing => stroke(&mut actions, x, y, config.background, state.thickness),
            Mode::Filling | Mode::Idle => {}
        },

        Event::PointerUp { .. } => next.mode = Mode::Idle,

        Event::KeyDown { key, mods } => {
            let mapped = match key {
                Key::Escape => Some(Event::Exit),
                Key::Z if mods.ctrl => Some(Event::Undo),
                Key::Z => None,
                Key::B => Some(Event::SelectTool(Tool::Brush)),
                Key::E => Some(Event::SelectTool(Tool::Eraser)),
                Key::F => Some(Event::SelectTool(Tool::Fill)),
                Key::C => Some(Event::NextColor),
                Key::LeftBracket => Some(Event::SetThickness(state.thickness.saturating_sub(1))),
                Key::RightBracket => Some(Event::SetThickness(state.thickness + 1)),
                Key::Digit(d) => (1..=PALETTE.len() as u8)
                    .contains(&d)
                    .then(|| Event::PickColor(PALETTE[d as usize - 1])),
            };
            return match mapped {
                Some(ev) => handle(state, config, ev),
                None => Outcome::unchanged(next),
            };
        }

        Event::SelectTool(tool) => {
            next.mode = Mode::Idle;
            match (tool, config.fill_seed) {
                // Fixed-seed fill is a one-shot button: fill now, keep the current tool.
                (Tool::Fill, Some((sx, sy))) => fill(&mut actions, sx, sy, next.color),
                _ => next.tool = tool,
            }
        }

        Event::NextColor => {
            next.palette_index = (state.palette_index + 1) % PALETTE.len();
            next.color = PALETTE[next.palette_index];
        }

        Event::PickColor(color) => {
            next.color = color;
            if let Some(i) = PALETTE.iter().position(|c| *c == color) {
                next.palette_index = i;
            }
        }

        Event::SetThickness(t) => next.thickness = t.clamp(MIN_THICKNESS, MAX_THICKNESS),

        Event::Undo => actions.push(Action::Undo),

        Event::Exit => actions.push(Action::Exit),
    }

    Outcome { state: next, actions }
}

// Every paint is preceded by its own snapshot, so each mouse sample is one undo step.
fn stroke(actions: &mut Vec<Action>, x: i32, y: i32, color: Color, thickness: u32) {
    actions.push(Action::Snapshot);
    actions.push(Action::PaintCell { x, y, color, thickness });
    actions.push(Action::RequestRedraw);
}

fn fill(actions: &mut Vec<Action>, x: i32, y: i32, color: Color) {
    actions.push(Action::Snapshot);
    actions.push(Action::Fill { x, y, color });
    actions.push(Action::RequestRedraw);
}
