//! Substitutable test doubles for every capability trait in the crate.
//!
//! - [`MockFn`] - recording function double with queued return values
//! - [`RecordingRenderer`] - [`Render`](crate::core::Render) with fixed points and a call count
//! - [`RecordingLogger`] - [`Logger`](crate::logging::Logger) that keeps messages
//! - [`StaticTransport`] - [`Transport`](crate::fetch::Transport) replaying canned responses
//! - [`InMemoryDirectoryReader`] - [`DirectoryReader`](crate::files::DirectoryReader) over an
//!   in-memory file map
//!
//! ```rust
//! use chart_playground::core::for_each;
//! use chart_playground::testing::MockFn;
//!
//! let callback = MockFn::new(|x: &i32| 42 + x);
//! for_each(&[0, 1], |x| callback.call(*x));
//!
//! assert_eq!(callback.calls(), vec![0, 1]);
//! assert_eq!(callback.results()[0], 42);
//! ```

mod directory;
mod logger;
mod mock_fn;
mod renderer;
mod transport;

pub use directory::InMemoryDirectoryReader;
pub use logger::RecordingLogger;
pub use mock_fn::{MockCall, MockFn};
pub use renderer::RecordingRenderer;
pub use transport::StaticTransport;
