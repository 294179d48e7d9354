// Startup configuration: parsed from the command line once, then passed
// read-only into every event the controller handles.

use crate::error::Error;
use crate::history::DEFAULT_CAPACITY;
use crate::types::{parse_hex_color, Color, BLACK, GRID_SIZE, WHITE};
use clap::Parser;

/// Full-screen pixel-grid paint.
///
/// Left mouse paints grid cells, right mouse erases. Ctrl+Z undoes, Esc quits.
#[derive(Parser, Debug)]
#[command(name = "gridpaint", version, about)]
pub struct Args {
    /// Canvas/window width in pixels.
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Canvas/window height in pixels.
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Side of one grid cell in pixels. All painting snaps to this grid.
    #[arg(long, default_value_t = GRID_SIZE)]
    pub grid_size: u32,

    /// How many undo steps are kept. Older steps are dropped silently.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub history: usize,

    /// Initial brush color, `#RRGGBB`.
    #[arg(long, default_value = "#000000", value_name = "HEX")]
    pub color: String,

    /// Canvas background, also used by the eraser, `#RRGGBB`.
    #[arg(long, default_value = "#FFFFFF", value_name = "HEX")]
    pub background: String,

    /// Fill from this fixed point when the FILL button is pressed,
    /// instead of from where you click.
    #[arg(long, value_name = "X,Y")]
    pub fill_seed: Option<String>,

    /// Open without window decorations.
    #[arg(long)]
    pub borderless: bool,

    /// Frame rate cap for the window loop.
    #[arg(long, default_value_t = 60)]
    pub fps: usize,
}

/// Validated settings. Cheap to copy, never changes after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub grid_size: u32,
    pub history: usize,
    pub color: Color,
    pub background: Color,
    pub fill_seed: Option<(i32, i32)>,
    pub borderless: bool,
    pub fps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            grid_size: GRID_SIZE,
            history: DEFAULT_CAPACITY,
            color: BLACK,
            background: WHITE,
            fill_seed: None,
            borderless: false,
            fps: 60,
        }
    }
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self, Error> {
        if args.width == 0 || args.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "canvas must be at least 1x1, got {}x{}",
                args.width, args.height
            )));
        }
        if args.grid_size == 0 {
            return Err(Error::InvalidConfig("grid size must be at least 1".into()));
        }
        if args.history == 0 {
            return Err(Error::InvalidConfig("history must keep at least 1 step".into()));
        }
        let color = parse_hex_color(&args.color)
            .ok_or_else(|| Error::InvalidConfig(format!("bad color '{}'", args.color)))?;
        let background = parse_hex_color(&args.background)
            .ok_or_else(|| Error::InvalidConfig(format!("bad background '{}'", args.background)))?;

        let fill_seed = match &args.fill_seed {
            Some(s) => {
                let (x, y) = parse_point(s)
                    .ok_or_else(|| Error::InvalidConfig(format!("bad fill seed '{s}', expected X,Y")))?;
                if x < 0 || y < 0 || x as u32 >= args.width || y as u32 >= args.height {
                    return Err(Error::InvalidConfig(format!(
                        "fill seed {x},{y} is outside the {}x{} canvas",
                        args.width, args.height
                    )));
                }
                Some((x, y))
            }
            None => None,
        };

        Ok(Self {
            width: args.width,
            height: args.height,
            grid_size: args.grid_size,
            history: args.history,
            color,
            background,
            fill_seed,
            borderless: args.borderless,
            fps: args.fps.max(1),
        })
    }
}

fn parse_point(s: &str) -> Option<(i32, i32)> {
    let (x, y) = s.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}
