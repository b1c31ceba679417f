//! `payguard-domain` — pure domain layer for invoice approval.
//!
//! This crate contains the vendor registry, the invoice data model, and the
//! validation/approval decision rules, implemented as deterministic logic
//! (no IO, no clocks, no shared state).

pub mod invoice;
pub mod validation;
pub mod vendor;

pub use invoice::{Invoice, InvoiceDraft, InvoiceId, InvoiceStatus, UNKNOWN_VENDOR};
pub use validation::{ValidationOutcome, decide_status, validate_draft, validate_invoice};
pub use vendor::{Vendor, VendorId, VendorRegistry};
