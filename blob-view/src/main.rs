//! Application entry point for the morphing blob viewer.
//!
//! This binary sets up logging and eframe/egui and delegates all screens
//! and rendering to [`Viewer`] from the `viewer` module.

mod navigation;
mod render;
mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// Log output is controlled by `RUST_LOG` (e.g. `RUST_LOG=debug`).
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([390.0, 760.0])
            .with_title("Morphing Circle"),
        ..Default::default()
    };

    eframe::run_native(
        "Morphing Circle",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new()))),
    )
}
