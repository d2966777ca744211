//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (player one before player two)
//! - No rendering or platform dependencies

pub mod collision;
pub mod combat;
pub mod fighter;
pub mod hunter;
pub mod particles;
pub mod pickup;
pub mod projectile;
pub mod screen;
pub mod state;
pub mod tick;
pub mod tilemap;

pub use fighter::{Fighter, Gait};
pub use hunter::Hunter;
pub use particles::{Particle, ParticleKind, ParticleSystem};
pub use pickup::{Pickup, PickupKind};
pub use projectile::{Arrow, Drumstick};
pub use screen::enter;
pub use state::{GameState, MatchClock, Platform, PlayerId, World};
pub use tick::tick;
pub use tilemap::{Level, TileMap, TileMapError};
