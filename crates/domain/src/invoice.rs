//! Invoice records and creation drafts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::vendor::{VendorId, VendorRegistry, impl_string_newtype};

/// Display name used when a draft references an unknown vendor and carries no
/// name of its own.
pub const UNKNOWN_VENDOR: &str = "Unknown Vendor";

/// Invoice identifier (caller-assigned, opaque string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(String);

impl_string_newtype!(InvoiceId);

/// Invoice approval lifecycle.
///
/// `NeedsApproval -> Approved` via manual or bulk auto-approval;
/// `Approved -> Paid` is driven by an external process through the engine's
/// generic status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    #[serde(rename = "Needs Approval")]
    NeedsApproval,
    Approved,
    Paid,
}

impl InvoiceStatus {
    /// Badge label shown by presentation layers.
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::NeedsApproval => "Needs Approval",
            InvoiceStatus::Approved => "Approved",
            InvoiceStatus::Paid => "Paid",
        }
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Invoice record as held (and handed out) by the engine.
///
/// Amounts are in the smallest currency unit (e.g. cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub vendor_id: VendorId,
    /// Display name, resolved once at creation time.
    pub vendor: String,
    pub amount: i64,
    pub description: String,
    pub status: InvoiceStatus,
    /// Creation date (calendar date, no time component). Set once.
    pub date: NaiveDate,
}

/// Caller-supplied payload for invoice creation.
///
/// The caller assigns the id; the engine decides status and stamps the date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub id: InvoiceId,
    pub vendor_id: VendorId,
    /// Optional display name, used only when `vendor_id` is not registered.
    pub vendor: Option<String>,
    pub amount: i64,
    pub description: String,
}

impl InvoiceDraft {
    /// Resolve the display name: the registered vendor's name wins, then the
    /// caller-supplied name, then the `"Unknown Vendor"` fallback.
    pub fn display_vendor(&self, registry: &VendorRegistry) -> String {
        match registry.find(&self.vendor_id) {
            Some(vendor) => vendor.name.clone(),
            None => self
                .vendor
                .clone()
                .unwrap_or_else(|| UNKNOWN_VENDOR.to_string()),
        }
    }
}
