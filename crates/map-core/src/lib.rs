//! `map-core` — foundational types for the `luxmap` road-graph engine.
//!
//! This crate is a dependency of every other `map-*` crate.  It has no
//! `map-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                           |
//! |--------------|----------------------------------------------------|
//! | [`ids`]      | `NodeId`, `EdgeId` arena handles                   |
//! | [`geo`]      | `Point` (integer plane coordinate), `BoundingBox`  |
//! | [`config`]   | `MapConfig` layout / selection settings            |
//! | [`error`]    | `MapError`, `MapResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::MapConfig;
pub use error::{MapError, MapResult};
pub use geo::{BoundingBox, Point};
pub use ids::{EdgeId, NodeId};
