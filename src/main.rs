// What you SEE:
// • A white canvas filling the window, tool panel on the right.
// • Hold Left Mouse: paint grid cells in the current color and size.
// • Hold Right Mouse: erase (paint the background color).
// • FILL then click: bucket-fill the region under the pointer.
// • Ctrl+Z undoes (last 10 steps). ESC quits.

mod canvas;
mod config;
mod controller;
mod draw;
mod error;
mod fill;
mod history;
mod panel;
mod session;
mod types;

use clap::Parser;
use config::{Args, Config};
use controller::Event;
use draw::{draw_cell_cursor, Drawer};
use error::Error;
use panel::Panel;
use session::{Dispatch, Session};
use tracing_subscriber::EnvFilter;
use types::FrameBuffer;

const CURSOR_COLOR: u32 = 0x0080_8080;

fn main() -> Result<(), Error> {
    // RUST_LOG overrides, e.g. RUST_LOG=gridpaint=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gridpaint=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let config = Config::from_args(&args)?;
    tracing::info!(
        width = config.width,
        height = config.height,
        grid = config.grid_size,
        history = config.history,
        fill_seed = ?config.fill_seed,
        "starting"
    );
    if config.fill_seed.is_some() {
        tracing::warn!("fixed fill seed configured; FILL ignores the pointer position");
    }

    /* --- Window + canvas ---
       Visual: window opens showing the blank canvas. */
    let (w, h) = (config.width as usize, config.height as usize);
    let mut drawer = Drawer::new("Grid Paint", w, h, config.borderless, config.fps)?;
    let mut session = Session::new(config);
    let panel = Panel::new(w, h);

    /* --- Reusable screen buffer ---
       Visual: this is the image you actually see each frame. */
    let mut screen = FrameBuffer::new(w, h);
    let mut dirty = true;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() {
        /* 1) Inputs: panel clicks become tool events, everything else goes to the canvas. */
        let events = drawer.poll_events();
        let any_input = !events.is_empty();
        let d = dispatch_frame(&panel, &mut session, events);
        dirty |= d.redraw;
        if d.exit {
            break;
        }

        /* 2) Compose only when something changed: canvas, panel, then the cell cursor. */
        if dirty || any_input {
            session.canvas().render(&mut screen); // paint callback
            panel.render(&mut screen, session.brush(), session.history().len());
            if let Some((mx, my)) = drawer.mouse_pos() {
                if mx < panel.left() {
                    let grid = session.config().grid_size;
                    let side = grid * session.brush().thickness;
                    draw_cell_cursor(&mut screen, mx, my, grid, side, CURSOR_COLOR);
                }
            }
            /* 3) Present to the window (this is when the on-screen image updates). */
            drawer.present(&screen)?;
            dirty = false;
        } else {
            drawer.idle();
        }
    }

    tracing::info!("bye");
    Ok(())
}

/// Route and dispatch one poll's worth of events. Stops at the first exit
/// request; whatever else arrived in the same frame is dropped.
fn dispatch_frame(panel: &Panel, session: &mut Session, events: Vec<Event>) -> Dispatch {
    let mut out = Dispatch::default();
    for event in events {
        let Some(event) = route(panel, session, event) else { continue };
        let d = session.dispatch(event);
        out.redraw |= d.redraw;
        if d.exit {
            out.exit = true;
            break;
        }
    }
    out
}

/// Decide who gets a pointer event. Presses over the panel trigger buttons,
/// moves over it are swallowed (the canvas is hidden there), releases always
/// reach the session so a stroke can end anywhere.
fn route(panel: &Panel, session: &Session, event: Event) -> Option<Event> {
    match event {
        Event::PointerDown { x, y, .. } if panel.contains(x, y) => panel.hit(x, y, session.brush()),
        Event::PointerMove { x, y } if panel.contains(x, y) => None,
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Button, Key, Modifiers};
    use crate::types::{Mode, Tool};

    fn setup() -> (Panel, Session) {
        let config = Config::default(); // 1280x800, panel starts at x=1080
        (Panel::new(config.width as usize, config.height as usize), Session::new(config))
    }

    /// Route then dispatch, the way one iteration of the window loop does.
    fn feed(panel: &Panel, session: &mut Session, event: Event) {
        if let Some(event) = route(panel, session, event) {
            session.dispatch(event);
        }
    }

    #[test]
    fn panel_gaps_and_moves_never_paint() {
        let (panel, mut session) = setup();
        let blank = session.canvas().clone();
        for (x, y) in [(1100, 5), (1275, 30), (1085, 400)] {
            assert_eq!(route(&panel, &session, Event::PointerDown { button: Button::Primary, x, y }), None);
            feed(&panel, &mut session, Event::PointerDown { button: Button::Primary, x, y });
        }
        feed(&panel, &mut session, Event::PointerMove { x: 1100, y: 400 });
        assert_eq!(session.canvas(), &blank);
        assert!(session.history().is_empty());
        assert_eq!(session.brush().mode, Mode::Idle);
    }

    #[test]
    fn panel_button_press_becomes_a_tool_event() {
        let (panel, mut session) = setup();
        // Fifth button (FILL): y = 10 + 4 * 60 .. + 50.
        let press = Event::PointerDown { button: Button::Primary, x: 1150, y: 275 };
        assert_eq!(route(&panel, &session, press), Some(Event::SelectTool(Tool::Fill)));
        feed(&panel, &mut session, press);
        assert_eq!(session.brush().tool, Tool::Fill);
        assert!(session.history().is_empty());
    }

    #[test]
    fn release_over_the_panel_ends_the_stroke() {
        let (panel, mut session) = setup();
        feed(&panel, &mut session, Event::PointerDown { button: Button::Primary, x: 1000, y: 100 });
        assert_eq!(session.brush().mode, Mode::Drawing);

        feed(&panel, &mut session, Event::PointerMove { x: 1150, y: 100 });
        assert_eq!(session.history().len(), 1, "moves over the panel do not paint");

        let up = Event::PointerUp { button: Button::Primary };
        assert_eq!(route(&panel, &session, up), Some(up));
        feed(&panel, &mut session, up);
        assert_eq!(session.brush().mode, Mode::Idle);
    }

    #[test]
    fn nothing_runs_after_escape_in_the_same_frame() {
        let (panel, mut session) = setup();
        let d = dispatch_frame(
            &panel,
            &mut session,
            vec![
                Event::KeyDown { key: Key::Escape, mods: Modifiers::default() },
                Event::PointerDown { button: Button::Primary, x: 10, y: 10 },
            ],
        );
        assert!(d.exit);
        assert!(!d.redraw);
        assert!(session.history().is_empty());
        assert_eq!(session.brush().mode, Mode::Idle);
    }

    #[test]
    fn a_frame_of_strokes_requests_redraw() {
        let (panel, mut session) = setup();
        let d = dispatch_frame(
            &panel,
            &mut session,
            vec![
                Event::PointerDown { button: Button::Primary, x: 10, y: 10 },
                Event::PointerMove { x: 30, y: 10 },
                Event::PointerUp { button: Button::Primary },
            ],
        );
        assert!(d.redraw);
        assert!(!d.exit);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn keys_pass_straight_through() {
        let (panel, session) = setup();
        let esc = Event::KeyDown { key: Key::Escape, mods: Modifiers::default() };
        assert_eq!(route(&panel, &session, esc), Some(esc));
    }
}
