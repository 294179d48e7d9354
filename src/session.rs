// The editor: owns the canvas, its undo history and the brush state, and
// applies what the controller decides.

use crate::canvas::PixelBuffer;
use crate::config::Config;
use crate::controller::{self, Action, Event};
use crate::fill::flood_fill;
use crate::history::History;
use crate::types::BrushState;

/// What the window loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    pub redraw: bool,
    pub exit: bool,
}

pub struct Session {
    config: Config,
    canvas: PixelBuffer,
    history: History,
    brush: BrushState,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            canvas: PixelBuffer::new(config.width, config.height, config.background),
            history: History::new(config.history),
            brush: BrushState::new(config.color),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn dispatch(&mut self, event: Event) -> Dispatch {
        let outcome = controller::handle(&self.brush, &self.config, event);
        if outcome.state.tool != self.brush.tool {
            tracing::debug!(tool = ?outcome.state.tool, "tool selected");
        }
        self.brush = outcome.state;
        self.apply(&outcome.actions)
    }

    fn apply(&mut self, actions: &[Action]) -> Dispatch {
        let mut out = Dispatch::default();
        for action in actions {
            match *action {
                Action::Snapshot => self.history.snapshot(&self.canvas),
                Action::PaintCell { x, y, color, thickness } => {
                    self.canvas.paint_cell(x, y, color, thickness, self.config.grid_size);
                }
                Action::Fill { x, y, color } => {
                    let n = flood_fill(&mut self.canvas, x, y, color);
                    tracing::debug!(x, y, pixels = n, "flood fill");
                }
                Action::Undo if self.history.is_empty() => {
                    tracing::debug!("undo with empty history ignored");
                }
                Action::Undo => {
                    self.history.undo(&mut self.canvas);
                    tracing::debug!(remaining = self.history.len(), "undo");
                    out.redraw = true;
                }
                Action::RequestRedraw => out.redraw = true,
                Action::Exit => {
                    tracing::info!("exit requested");
                    out.exit = true;
                }
            }
        }
        out
    }
}
