//! Shape Rain - a falling-shapes canvas toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, gravity, hit testing, metrics)
//! - `renderer`: Backend-neutral fill paths for the 2D canvas
//! - `settings`: Player-tunable parameters persisted to LocalStorage

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{Shape, ShapeKind, SimState};

/// Simulation configuration constants
pub mod consts {
    /// Canvas dimensions (CSS pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Y position for timer-driven spawns (off-screen above the canvas)
    pub const SPAWN_DROP_Y: f32 = -50.0;

    /// Smallest random shape size
    pub const MIN_SHAPE_SIZE: f32 = 20.0;
    /// Random sizes are uniform in [MIN_SHAPE_SIZE, MIN_SHAPE_SIZE + SHAPE_SIZE_SPREAD)
    pub const SHAPE_SIZE_SPREAD: f32 = 50.0;

    /// Ellipse height relative to its width
    pub const ELLIPSE_ASPECT: f32 = 0.6;

    /// Star geometry: point count and inner/outer radius ratio
    pub const STAR_SPIKES: u32 = 5;
    pub const STAR_INNER_RATIO: f32 = 0.5;

    /// Floors for the user-tunable parameters (keeps the timer period finite)
    pub const MIN_SPAWN_RATE: u32 = 1;
    pub const MIN_GRAVITY: u32 = 1;
}
