//! LOGWIRE Provider Simulation
//!
//! Scripted in-memory doubles for the provider traits: page sequences
//! keyed by continuation token, canned subscription states, per-method
//! call counters, and injectable failures. Used by the compile pipeline's
//! tests in place of a real provider.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod identity;
pub mod log_delivery;

pub use identity::SimIdentity;
pub use log_delivery::SimLogDelivery;
