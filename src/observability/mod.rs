//! Logging infrastructure.
//!
//! ## Usage
//!
//! Install the subscriber at application startup:
//!
//! ```ignore
//! use solar_risk::observability::init_logging;
//!
//! fn main() {
//!     init_logging(cli.verbosity);
//!     // ... rest of application
//! }
//! ```

pub mod logging;

pub use logging::{filter_for_verbosity, init_logging};
