//! Deterministic shape simulation
//!
//! All falling-shape logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (insertion order == draw order)
//! - No rendering or platform dependencies

pub mod hit;
pub mod metrics;
pub mod shape;
pub mod spawn;
pub mod state;
pub mod update;

pub use hit::hit_test;
pub use metrics::Metrics;
pub use shape::{Color, Shape, ShapeKind};
pub use spawn::spawn;
pub use state::{ClickOutcome, SimState};
pub use update::fall;
