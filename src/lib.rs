//! chart-playground: a small fetch + render + report pipeline.
//!
//! Every collaborator sits behind a capability trait ([`fetch::Transport`],
//! [`logging::Logger`], [`files::DirectoryReader`]) so tests substitute plain
//! implementations from [`testing`] instead of patching anything at runtime.

pub mod config;
pub mod core;
pub mod error;
pub mod fetch;
pub mod files;
pub mod logging;
pub mod pipeline;
pub mod telemetry;
pub mod testing;

pub use config::PlaygroundConfig;
pub use crate::core::{PointSeries, RenderedPoint};
pub use error::{PlaygroundError, PlaygroundResult, TransportError};
pub use pipeline::{Playground, Report};
