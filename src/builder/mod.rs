//! Builder API for assembling a kiosk.
//!
//! This module provides a fluent builder for the engine and the
//! `state_enum!` macro used to declare state enums with minimal
//! boilerplate.
//!
//! # Example
//!
//! ```
//! use kiosk::builder::KioskBuilder;
//! use kiosk::config::KioskConfig;
//! use kiosk::effects::RecordingReporter;
//!
//! let kiosk = KioskBuilder::new()
//!     .config(&KioskConfig::default())
//!     .unwrap()
//!     .reporter(RecordingReporter::new())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(kiosk.catalog().len(), 5);
//! ```

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::KioskBuilder;
