//! Headless driver for the designer engine.
//!
//! ```text
//! seatkit [--json-logs] [--config FILE] [--host FILE] [INPUT] [--out FILE]
//! ```
//!
//! With an INPUT design the file is loaded, fitted and summarized; without
//! one a small demo seat map is built through the same input events a host
//! page would send. `--out` saves the resulting design.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use seatkit::{
    init_logging, Config, DesignerState, HostConfig, InputEvent, Key, Modifiers, MouseButton,
    Point, Tool,
};

#[derive(Debug, Parser)]
#[command(
    name = "seatkit",
    about = "Headless driver for the SeatKit seat-map editor",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_DATE"), ")")
)]
struct Args {
    /// Emit JSON log lines instead of text.
    #[arg(long)]
    json_logs: bool,

    /// Editor settings file (.toml or .json).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host page configuration JSON.
    #[arg(long, value_name = "FILE")]
    host: Option<PathBuf>,

    /// Design to load; a demo map is built when omitted.
    input: Option<PathBuf>,

    /// Where to save the resulting design.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(&path)?,
            Err(e) => {
                tracing::warn!("{}, using default editor settings", e);
                Config::default()
            }
        },
    };

    if let Some(host) = &args.host {
        let content = std::fs::read_to_string(host)
            .with_context(|| format!("Failed to read host config {}", host.display()))?;
        config.host = HostConfig::from_json_or_default(Some(&content));
    }
    Ok(config)
}

fn left_click(designer: &mut DesignerState, x: f64, y: f64) {
    let pos = Some(Point::new(x, y));
    designer.handle_event(InputEvent::PointerDown {
        pos,
        button: MouseButton::Left,
    });
    designer.handle_event(InputEvent::PointerUp {
        pos,
        button: MouseButton::Left,
    });
}

/// Builds a stage-facing block, a balcony and a polygon wing.
fn build_demo(designer: &mut DesignerState) {
    designer.set_tool(Tool::Rect);
    left_click(designer, 80.0, 300.0);
    for _ in 0..3 {
        designer.add_row();
    }

    designer.set_tool(Tool::Ellipse);
    left_click(designer, 400.0, 60.0);
    designer.set_title("Balcony");
    designer.add_row();

    designer.set_tool(Tool::Polygon);
    for (x, y) in [(420.0, 320.0), (700.0, 320.0), (760.0, 520.0), (420.0, 520.0)] {
        left_click(designer, x, y);
    }
    designer.handle_event(InputEvent::KeyDown {
        key: Key::Enter,
        modifiers: Modifiers::NONE,
        in_text_input: false,
    });
    designer.add_row();
    designer.add_row();
    designer.clear_selection();
}

fn print_summary(designer: &DesignerState) {
    println!("{}", designer.display_name());
    for (id, sector) in designer.canvas.sectors() {
        let rows = designer.canvas.rows_in(id);
        let seats: u32 = rows.iter().map(|(_, r)| r.seats).sum();
        println!(
            "  {} [{}] at ({:.0}, {:.0}) {:.0}x{:.0}: {} rows, {} seats",
            sector.title,
            sector.shape_kind().as_str(),
            sector.position.x,
            sector.position.y,
            sector.bounds.width,
            sector.bounds.height,
            rows.len(),
            seats
        );
    }
    println!("  view: {}", designer.viewport);
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.json_logs)?;
    tracing::info!("SeatKit {} ({})", seatkit::VERSION, seatkit::BUILD_DATE);

    let config = load_config(&args)?;
    let mut designer = DesignerState::with_config(config);
    designer.mount();

    match &args.input {
        Some(input) => designer.load_from_file(input)?,
        None => build_demo(&mut designer),
    }
    designer.zoom_to_fit();
    print_summary(&designer);

    if let Some(out) = &args.out {
        designer.save_to_file(out)?;
        println!("Saved {}", out.display());
    }

    designer.unmount();
    Ok(())
}
