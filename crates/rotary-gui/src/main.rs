//! Rotary demo - a row of knobs described by a TOML panel file.
//!
//! Compiles for both native (desktop) and wasm32 (browser) targets.

// ── Native entry point ──────────────────────────────────────────────────────

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use eframe::egui;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use rotary_gui::RotaryApp;

/// Rotary knob demo application.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "rotary-demo")]
#[command(about = "Rotary knob widget demo")]
#[command(version)]
struct Args {
    /// Panel file to load (defaults to the user config panel, then the built-in demo)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the built-in demo panel to the user config directory and exit
    #[arg(long)]
    write_default: bool,

    /// Log every value change at info level
    #[arg(long)]
    log_values: bool,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge legacy log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();

    if args.write_default {
        let path = rotary_config::default_panel_path();
        let written = rotary_config::ensure_user_config_dir()
            .and_then(|_| rotary_config::Panel::demo().save(&path));
        match written {
            Ok(()) => tracing::info!(path = %path.display(), "wrote default panel"),
            Err(e) => {
                tracing::error!(error = %e, "could not write default panel");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    tracing::info!("Starting Rotary demo");
    let panel = rotary_gui::load_panel(args.config.as_deref());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 260.0])
            .with_min_inner_size([240.0, 180.0])
            .with_title(panel.title.clone()),
        ..Default::default()
    };

    let log_values = args.log_values;
    eframe::run_native(
        "Rotary",
        options,
        Box::new(move |cc| Ok(Box::new(RotaryApp::new(cc, &panel, log_values)?))),
    )
}

// ── Wasm entry point ────────────────────────────────────────────────────────

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    tracing::info!("Rotary demo starting (wasm)");

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");
        let canvas = document
            .get_element_by_id("rotary_canvas")
            .expect("no canvas element with id 'rotary_canvas'")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("element is not a canvas");

        let panel = rotary_config::Panel::demo();
        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(RotaryApp::new(cc, &panel, false)?))),
            )
            .await
            .expect("failed to start eframe");
    });
}
