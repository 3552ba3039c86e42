//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame deltas supplied by the caller, timers are accumulators
//! - Seeded RNG only
//! - Stable iteration order (set order)
//! - No rendering or platform dependencies

pub mod aim;
pub mod collision;
pub mod projectile;
pub mod spawn;
pub mod state;
pub mod targets;
pub mod tick;
pub mod vector;

pub use aim::{AimUpdate, update_aim};
pub use collision::first_impact;
pub use projectile::{advance_shots, in_play_bounds};
pub use spawn::{SpawnSchedule, SpawnTick, spawn_man};
pub use state::{AimState, GameEvent, Man, SimState, Shot};
pub use targets::{TargetOutcome, advance_men};
pub use tick::{TickInput, step};
pub use vector::Vector2;
