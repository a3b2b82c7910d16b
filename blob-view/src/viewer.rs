//! Morphing blob viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the navigation stack and,
//! while the morphing-circle screen is mounted, its [`ShapeAnimator`].
//! The eframe frame callback is the animation clock: every repaint of the
//! mounted screen advances the animator by exactly one tick.

use blob_core::{Config, Frame, ShapeAnimator};
use eframe::App;
use log::{debug, error};

use crate::{
    navigation::{Navigator, Route},
    render::{self, CANVAS_SIZE},
};

const BACKGROUND: egui::Color32 = egui::Color32::BLACK;
const BUTTON_FILL: egui::Color32 = egui::Color32::from_rgb(0x5f, 0x33, 0xe1);
const BUTTON_SIZE: egui::Vec2 = egui::vec2(100.0, 80.0);
const BUTTON_RADIUS: f32 = 13.0;
const BUTTON_GAP: f32 = 80.0;

/// State of the mounted morphing-circle screen.
///
/// Created when the route is pushed and dropped when it is popped.
struct BlobScreen {
    animator: ShapeAnimator,
    frame: Option<Frame>,
}

/// Main application state.
///
/// ### Fields
/// - `nav` - Route stack; [`Route::Home`] is the root.
/// - `blob` - The mounted morphing-circle screen, if any.
/// - `cfg` - Configuration handed to every newly mounted animator.
pub struct Viewer {
    nav: Navigator,
    blob: Option<BlobScreen>,
    cfg: Config,
}

impl Viewer {
    /// Creates a viewer showing the home screen.
    pub fn new() -> Self {
        Self {
            nav: Navigator::new(Route::Home),
            blob: None,
            cfg: Config::default(),
        }
    }

    /// Mounts a fresh animator and pushes the morphing-circle route.
    ///
    /// If the configuration is rejected the error is logged and the
    /// navigation stack is left unchanged.
    fn open_morphing_circle(&mut self) {
        match ShapeAnimator::new(self.cfg) {
            Ok(animator) => {
                self.blob = Some(BlobScreen {
                    animator,
                    frame: None,
                });
                self.nav.push(Route::MorphingCircle);
                debug!("morphing circle mounted");
            }
            Err(e) => error!("cannot open morphing circle: {e}"),
        }
    }

    /// Pops the current route. Leaving the morphing circle unmounts it.
    fn go_back(&mut self) {
        if self.nav.go_back() == Some(Route::MorphingCircle) {
            self.blob = None;
            debug!("morphing circle unmounted");
        }
    }

    /// Advances the mounted animator by one tick.
    ///
    /// ### Returns
    /// The new frame, or `None` if no blob screen is mounted.
    fn step_once(&mut self) -> Option<&Frame> {
        let screen = self.blob.as_mut()?;
        screen.frame = Some(screen.animator.tick());
        screen.frame.as_ref()
    }

    fn dark_panel() -> egui::CentralPanel {
        egui::CentralPanel::default().frame(egui::Frame::new().fill(BACKGROUND))
    }

    /// Builds the home screen with its single entry point.
    fn ui_home(&mut self, ctx: &egui::Context) {
        let mut open = false;

        Self::dark_panel().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let top = (ui.available_height() - BUTTON_SIZE.y).max(0.0) / 2.0;
                ui.add_space(top);
                open = Self::purple_button(ui, "Morphing circle", egui::vec2(180.0, BUTTON_SIZE.y))
                    .clicked();
            });
        });

        if open {
            self.open_morphing_circle();
        }
    }

    /// Builds the morphing-circle screen: the canvas and the Back button.
    fn ui_morphing_circle(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.go_back();
            return;
        }

        self.step_once();
        let mut back = false;

        Self::dark_panel().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let content = CANVAS_SIZE + BUTTON_GAP + BUTTON_SIZE.y;
                let top = (ui.available_height() - content).max(0.0) / 2.0;
                ui.add_space(top);

                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(CANVAS_SIZE, CANVAS_SIZE),
                    egui::Sense::hover(),
                );
                if let Some(screen) = self.blob.as_ref()
                    && let Some(frame) = screen.frame.as_ref()
                {
                    let center = screen.animator.config().center;
                    let painter = ui.painter_at(rect);
                    painter.add(render::blob_shape(frame, center, rect.min));
                }

                ui.add_space(BUTTON_GAP);
                back = Self::purple_button(ui, "Back", BUTTON_SIZE).clicked();
            });
        });

        if back {
            self.go_back();
        } else {
            ctx.request_repaint();
        }
    }

    fn purple_button(ui: &mut egui::Ui, label: &str, size: egui::Vec2) -> egui::Response {
        ui.add(
            egui::Button::new(egui::RichText::new(label).color(egui::Color32::WHITE))
                .fill(BUTTON_FILL)
                .corner_radius(BUTTON_RADIUS)
                .min_size(size),
        )
    }
}

impl App for Viewer {
    /// eframe callback that draws the current route for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.nav.current() {
            Route::Home => self.ui_home(ctx),
            Route::MorphingCircle => self.ui_morphing_circle(ctx),
        }
    }
}
