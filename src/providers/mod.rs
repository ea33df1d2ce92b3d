//! Production implementations of the tracking trait abstractions.
//!
//! This module provides the "real" implementations of the traits defined in
//! [`crate::traits`] that talk to the LayerZero Scan API and the system
//! clock.
//!
//! Applications will typically use these providers, while test code
//! implements custom fakes.

mod scan;
mod tokio_clock;

pub use self::scan::ScanStatusProvider;
pub use self::tokio_clock::TokioClock;
