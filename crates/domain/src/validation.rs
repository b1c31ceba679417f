//! Invoice validation and the creation-time approval decision.
//!
//! Both rules are pure: identical input always yields the identical outcome,
//! and nothing here touches engine state.

use crate::invoice::{Invoice, InvoiceDraft, InvoiceId, InvoiceStatus};
use crate::vendor::{VendorId, VendorRegistry};

/// Result of running the validation rule over one invoice (or draft).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// The vendor id resolves in the registry.
    pub is_registered: bool,
    /// id, vendor id and description are non-empty and the amount is non-zero.
    pub has_required_fields: bool,
    /// `is_registered && has_required_fields`.
    pub is_valid: bool,
}

fn validate_fields(
    registry: &VendorRegistry,
    id: &InvoiceId,
    vendor_id: &VendorId,
    amount: i64,
    description: &str,
) -> ValidationOutcome {
    let is_registered = registry.contains(vendor_id);

    // A zero amount fails the required-field check.
    let has_required_fields =
        !id.is_empty() && !vendor_id.is_empty() && amount != 0 && !description.is_empty();

    ValidationOutcome {
        is_registered,
        has_required_fields,
        is_valid: is_registered && has_required_fields,
    }
}

/// Validate a creation draft.
pub fn validate_draft(registry: &VendorRegistry, draft: &InvoiceDraft) -> ValidationOutcome {
    validate_fields(
        registry,
        &draft.id,
        &draft.vendor_id,
        draft.amount,
        &draft.description,
    )
}

/// Validate a stored invoice (used by bulk auto-approval).
pub fn validate_invoice(registry: &VendorRegistry, invoice: &Invoice) -> ValidationOutcome {
    validate_fields(
        registry,
        &invoice.id,
        &invoice.vendor_id,
        invoice.amount,
        &invoice.description,
    )
}

/// Creation-time status decision.
///
/// The `is_registered` check is redundant with `is_valid`; the rule is kept
/// as written.
pub fn decide_status(outcome: ValidationOutcome, amount: i64, limit: i64) -> InvoiceStatus {
    if outcome.is_registered && outcome.is_valid && amount <= limit {
        InvoiceStatus::Approved
    } else {
        InvoiceStatus::NeedsApproval
    }
}
