//! `map-graph` — road graph, XML loading, layout transforms, and routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`graph`]     | `Graph` (node/edge arenas + adjacency), `Node`, `Edge`    |
//! | [`transform`] | `Graph::scale`, `Graph::rotate_90_clockwise`, `FitTransform` |
//! | [`router`]    | `Router` trait, `Route`, `DijkstraRouter`                 |
//! | [`loader`]    | `load_from_path` / `_reader` / `_str`, `LoadReport`       |
//! | [`locator`]   | `NodeLocator` (R-tree nearest-node picking)               |
//! | [`selection`] | `Selection` (two-endpoint pick state)                     |
//! | [`observer`]  | `GraphObserver`, `DiagnosticLog`, `TracingObserver`       |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `tracing` | Enables `TracingObserver`.                                |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `map-core` types.    |

pub mod error;
pub mod graph;
pub mod loader;
pub mod locator;
pub mod observer;
pub mod router;
pub mod selection;
pub mod transform;


pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, Node};
pub use loader::{LoadReport, load_from_path, load_from_reader, load_from_str};
pub use locator::NodeLocator;
pub use observer::{Diagnostic, DiagnosticLog, EdgeRejection, GraphObserver, NoopObserver};
pub use router::{DijkstraRouter, Route, Router};
pub use selection::Selection;
pub use transform::FitTransform;

#[cfg(feature = "tracing")]
pub use observer::TracingObserver;
