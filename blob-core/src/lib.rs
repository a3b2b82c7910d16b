//! Core of the morphing blob animation.
//!
//! Main components:
//! - [`anchor`] — anchor points and the ring they form.
//! - [`animator`] — [`animator::ShapeAnimator`], advanced once per clock tick.
//! - [`config`] — constants of the blob, with validation.
//! - [`error`] — configuration errors.
//! - [`gradient`] — linear gradient fill of the blob.
//! - [`math`] — range mapping helper.
//! - [`phases`] — per-tick point displacement and hue update.
//! - [`sampler`] — 2D noise sources.
//! - [`spline`] — Catmull-Rom style spline fitting into a `kurbo` path.

pub mod anchor;
pub mod animator;
pub mod config;
pub mod error;
pub mod gradient;
pub mod math;
pub mod phases;
pub mod sampler;
pub mod spline;

pub use anchor::{AnchorPoint, PointRing, create_point_ring};
pub use animator::{Frame, ShapeAnimator};
pub use config::Config;
pub use error::ConfigError;
