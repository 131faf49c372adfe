//! Simulation state and controller
//!
//! Owns the shape collection, the tunable parameters, and the seeded RNG.
//! Constructed explicitly and handed to whatever platform layer runs the
//! loop; there is no global instance.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::shape::Shape;
use super::{hit, metrics, spawn, update};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, MIN_GRAVITY, MIN_SPAWN_RATE, SPAWN_DROP_Y};

/// What a click did to the collection
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// A shape was under the cursor; it has been removed
    Removed(Shape),
    /// Nothing was hit; a new shape was spawned at the click point
    Spawned,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed, kept for logging and restarts
    pub seed: u64,
    /// Insertion-ordered shape collection (insertion order == draw order)
    pub shapes: Vec<Shape>,
    /// Shapes spawned per second by the timer (>= 1)
    pub spawn_rate: u32,
    /// Pixels each shape falls per tick (>= 1)
    pub gravity: u32,
    /// Latest metrics snapshot
    pub metrics: metrics::Metrics,
    /// Frame tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl SimState {
    /// Fresh state with an empty collection and both parameters at their floor
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            shapes: Vec::new(),
            spawn_rate: MIN_SPAWN_RATE,
            gravity: MIN_GRAVITY,
            metrics: metrics::Metrics::default(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Set the spawn rate, clamped to >= 1. Returns the clamped value; the
    /// caller re-arms the spawn timer with `spawn_period_ms`.
    pub fn set_spawn_rate(&mut self, rate: i32) -> u32 {
        self.spawn_rate = rate.max(MIN_SPAWN_RATE as i32) as u32;
        self.spawn_rate
    }

    /// Set gravity, clamped to >= 1. Takes effect on the next tick.
    pub fn set_gravity(&mut self, gravity: i32) -> u32 {
        self.gravity = gravity.max(MIN_GRAVITY as i32) as u32;
        self.gravity
    }

    /// Interval period for the current spawn rate
    pub fn spawn_period_ms(&self) -> i32 {
        (1000 / self.spawn_rate) as i32
    }

    /// Timer spawn: random x across the canvas width, dropped in from above
    /// the visible area.
    pub fn spawn_at_top(&mut self) {
        let x = self.rng.random_range(0.0..CANVAS_WIDTH);
        let shape = spawn::spawn(&mut self.rng, Vec2::new(x, SPAWN_DROP_Y));
        self.shapes.push(shape);
    }

    /// Route a click: remove the first shape under the cursor, or spawn a new
    /// one at the click point. Metrics refresh on removal so the stats react
    /// before the next frame.
    pub fn handle_click(&mut self, point: Vec2) -> ClickOutcome {
        match hit::hit_test(&self.shapes, point) {
            Some(index) => {
                let shape = self.shapes.remove(index);
                self.metrics = metrics::compute(&self.shapes);
                ClickOutcome::Removed(shape)
            }
            None => {
                let shape = spawn::spawn(&mut self.rng, point);
                self.shapes.push(shape);
                ClickOutcome::Spawned
            }
        }
    }

    /// Advance one frame: gravity plus off-screen culling. The frame loop
    /// renders after this and calls `refresh_metrics` last.
    pub fn tick(&mut self) {
        update::fall(&mut self.shapes, self.gravity, CANVAS_HEIGHT);
        self.time_ticks += 1;
    }

    /// Recompute the metrics snapshot from the current collection.
    pub fn refresh_metrics(&mut self) -> metrics::Metrics {
        self.metrics = metrics::compute(&self.shapes);
        self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::shape::{Color, ShapeKind};

    fn push_shape(state: &mut SimState, kind: ShapeKind, x: f32, y: f32, size: f32) {
        state.shapes.push(Shape {
            kind,
            pos: Vec2::new(x, y),
            size,
            color: Color(0xdeadbe),
        });
    }

    #[test]
    fn test_spawn_rate_clamps_to_floor() {
        let mut state = SimState::new(1);
        assert_eq!(state.set_spawn_rate(0), 1);
        assert_eq!(state.set_spawn_rate(-5), 1);
        assert_eq!(state.set_spawn_rate(3), 3);
    }

    #[test]
    fn test_gravity_clamps_to_floor() {
        let mut state = SimState::new(1);
        assert_eq!(state.set_gravity(0), 1);
        assert_eq!(state.set_gravity(-2), 1);
        assert_eq!(state.set_gravity(7), 7);
    }

    #[test]
    fn test_spawn_period_follows_rate() {
        let mut state = SimState::new(1);
        assert_eq!(state.spawn_period_ms(), 1000);
        state.set_spawn_rate(3);
        assert_eq!(state.spawn_period_ms(), 333);
    }

    #[test]
    fn test_spawn_at_top_enters_above_canvas() {
        let mut state = SimState::new(42);
        for _ in 0..100 {
            state.spawn_at_top();
        }
        assert_eq!(state.shapes.len(), 100);
        for shape in &state.shapes {
            assert_eq!(shape.pos.y, SPAWN_DROP_Y);
            assert!(shape.pos.x >= 0.0 && shape.pos.x < CANVAS_WIDTH);
        }
    }

    #[test]
    fn test_click_hit_removes_and_refreshes_metrics() {
        let mut state = SimState::new(1);
        push_shape(&mut state, ShapeKind::Circle, 0.0, 0.0, 40.0);
        state.refresh_metrics();
        assert_eq!(state.metrics.count, 1);

        // Click at the circle's center (20, 20).
        let outcome = state.handle_click(Vec2::new(20.0, 20.0));
        assert!(matches!(outcome, ClickOutcome::Removed(_)));
        assert!(state.shapes.is_empty());
        assert_eq!(state.metrics.count, 0);
        assert_eq!(state.metrics.total_area, 0.0);
    }

    #[test]
    fn test_click_on_polygon_spawns_instead() {
        let mut state = SimState::new(1);
        push_shape(&mut state, ShapeKind::Polygon { sides: 5 }, 10.0, 10.0, 30.0);

        let outcome = state.handle_click(Vec2::new(15.0, 15.0));
        assert_eq!(outcome, ClickOutcome::Spawned);
        assert_eq!(state.shapes.len(), 2);
        assert_eq!(state.shapes[1].pos, Vec2::new(15.0, 15.0));
    }

    #[test]
    fn test_click_miss_spawns_at_click_point() {
        let mut state = SimState::new(7);
        let outcome = state.handle_click(Vec2::new(400.0, 300.0));
        assert_eq!(outcome, ClickOutcome::Spawned);
        assert_eq!(state.shapes.len(), 1);
        assert_eq!(state.shapes[0].pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_rate_change_leaves_collection_untouched() {
        let mut state = SimState::new(5);
        for _ in 0..10 {
            state.spawn_at_top();
        }
        let before = state.shapes.clone();
        state.set_spawn_rate(3);
        assert_eq!(state.shapes, before);
    }

    #[test]
    fn test_tick_applies_gravity_and_culls() {
        let mut state = SimState::new(1);
        push_shape(&mut state, ShapeKind::Square, 100.0, 50.0, 30.0);
        push_shape(&mut state, ShapeKind::Square, 100.0, 599.5, 30.0);
        state.set_gravity(2);

        state.tick();
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.shapes.len(), 1);
        assert_eq!(state.shapes[0].pos.y, 52.0);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = SimState::new(1234);
        let mut b = SimState::new(1234);
        for _ in 0..20 {
            a.spawn_at_top();
            b.spawn_at_top();
            a.tick();
            b.tick();
        }
        a.handle_click(Vec2::new(400.0, 300.0));
        b.handle_click(Vec2::new(400.0, 300.0));
        assert_eq!(a.shapes, b.shapes);
        assert_eq!(a.refresh_metrics(), b.refresh_metrics());
    }
}
