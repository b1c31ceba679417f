//! `payguard-engine` — the invoice decision engine.
//!
//! Owns the invoice collection and the current approval limit, and exposes the
//! list/get/add/update/auto-approve operations consumed by presentation
//! layers. Operations simulate IO latency at their boundary; all reads return
//! independent snapshots so callers never hold references into engine state.

pub mod latency;
pub mod seed;
pub mod service;

pub use latency::Latency;
pub use service::{DEFAULT_LIMIT, InvoiceEngine};
