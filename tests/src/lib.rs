//! # Referral Engine Test Suite
//!
//! Unified test crate for cross-subsystem choreography:
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── harness.rs      # fully wired in-memory engine
//!     ├── flows.rs        # onboarding → attribution → rewards → ranking
//!     └── concurrency.rs  # racing captures and duplicate deliveries
//! ```
//!
//! Unit tests live next to the code they cover, inside each crate.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p referral-tests
//! cargo test -p referral-tests integration::
//! ```

pub mod integration;
