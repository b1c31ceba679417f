//! The invoice decision engine: state ownership and operations.

use std::time::Duration;

use chrono::Utc;

use payguard_domain::{
    Invoice, InvoiceDraft, InvoiceId, InvoiceStatus, Vendor, VendorRegistry, decide_status,
    validate_draft, validate_invoice,
};

use crate::latency::Latency;
use crate::seed;

/// Default approval limit, in the smallest currency unit.
pub const DEFAULT_LIMIT: i64 = 1000;

/// In-memory invoice engine.
///
/// The invoice collection and the current limit are the entirety of shared
/// mutable state; both are owned here. Mutating operations take `&mut self`,
/// so calls are serialized by construction and every mutation commits in one
/// step. Reads hand out clones, never references into engine state.
#[derive(Debug)]
pub struct InvoiceEngine {
    registry: VendorRegistry,
    invoices: Vec<Invoice>,
    current_limit: i64,
    latency: Latency,
}

impl InvoiceEngine {
    /// Engine with an empty invoice collection over the given registry.
    pub fn new(registry: VendorRegistry, latency: Latency) -> Self {
        Self {
            registry,
            invoices: Vec::new(),
            current_limit: DEFAULT_LIMIT,
            latency,
        }
    }

    /// Engine preloaded with the seed vendors and starter invoices.
    pub fn with_seed_data() -> Self {
        Self {
            registry: seed::vendor_registry(),
            invoices: seed::initial_invoices(),
            current_limit: DEFAULT_LIMIT,
            latency: Latency::default(),
        }
    }

    pub fn current_limit(&self) -> i64 {
        self.current_limit
    }

    /// Replace the stored approval limit. The value is not validated; a
    /// negative limit simply means creation-time approval never triggers.
    pub fn set_limit(&mut self, limit: i64) {
        tracing::info!(limit, "approval limit updated");
        self.current_limit = limit;
    }

    /// Snapshot of all invoices, insertion order as mutated (newest additions
    /// first, since `add_invoice` prepends).
    pub async fn list_invoices(&self) -> Vec<Invoice> {
        self.pause(self.latency.list).await;
        tracing::debug!(count = self.invoices.len(), "listing invoices");
        self.invoices.clone()
    }

    /// Snapshot of the vendor registry.
    pub async fn list_vendors(&self) -> Vec<Vendor> {
        self.pause(self.latency.vendors).await;
        self.registry.vendors()
    }

    /// Lookup by id. A miss is a normal outcome, not an error.
    pub async fn get_invoice(&self, id: &InvoiceId) -> Option<Invoice> {
        self.pause(self.latency.get).await;
        self.invoices.iter().find(|inv| &inv.id == id).cloned()
    }

    /// Create an invoice from a draft and prepend it to the collection.
    ///
    /// The status is decided here, once, against the stored limit: a valid
    /// draft from a registered vendor at or under the limit starts out
    /// `Approved`, everything else starts out `NeedsApproval`.
    pub async fn add_invoice(&mut self, draft: InvoiceDraft) -> Invoice {
        self.pause(self.latency.add).await;

        let vendor = draft.display_vendor(&self.registry);
        let outcome = validate_draft(&self.registry, &draft);
        let status = decide_status(outcome, draft.amount, self.current_limit);

        let invoice = Invoice {
            id: draft.id,
            vendor_id: draft.vendor_id,
            vendor,
            amount: draft.amount,
            description: draft.description,
            status,
            date: Utc::now().date_naive(),
        };

        tracing::info!(
            invoice_id = %invoice.id,
            vendor = %invoice.vendor,
            status = %invoice.status,
            "invoice added"
        );
        self.invoices.insert(0, invoice.clone());
        invoice
    }

    /// Unconditionally overwrite the status of the matching invoice.
    ///
    /// This is the escape hatch behind per-row manual approval (and the
    /// external `Approved -> Paid` transition); no business rule is re-run.
    /// Returns `None`, leaving the collection untouched, when the id is
    /// unknown.
    pub async fn update_status(
        &mut self,
        id: &InvoiceId,
        status: InvoiceStatus,
    ) -> Option<Invoice> {
        self.pause(self.latency.update).await;

        match self.invoices.iter_mut().find(|inv| &inv.id == id) {
            Some(invoice) => {
                invoice.status = status;
                tracing::info!(invoice_id = %id, status = %status, "invoice status updated");
                Some(invoice.clone())
            }
            None => {
                tracing::debug!(invoice_id = %id, "status update for unknown invoice");
                None
            }
        }
    }

    /// Bulk auto-approval over every invoice currently pending.
    ///
    /// Uses the limit passed in, not the stored one; the two thresholds are
    /// independently supplied. Invoices in any other status are filtered out
    /// by status alone and never re-validated. Returns the number of invoices
    /// transitioned in this call.
    pub async fn run_auto_approval(&mut self, limit: i64) -> usize {
        self.pause(self.latency.auto_approval).await;

        let mut approved = 0;
        for invoice in self.invoices.iter_mut() {
            if invoice.status != InvoiceStatus::NeedsApproval {
                continue;
            }

            let outcome = validate_invoice(&self.registry, invoice);

            // Rule 1: the vendor must be registered.
            if !outcome.is_registered {
                continue;
            }
            // Rule 2: the invoice must be valid.
            if !outcome.is_valid {
                continue;
            }
            // Rule 3: the amount must be at or under the limit.
            if invoice.amount > limit {
                continue;
            }

            invoice.status = InvoiceStatus::Approved;
            approved += 1;
        }

        tracing::info!(limit, approved, "auto-approval pass complete");
        approved
    }

    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payguard_domain::{Vendor, VendorId};

    fn engine() -> InvoiceEngine {
        let registry = VendorRegistry::new(vec![Vendor::new("V1", "Acme")]);
        InvoiceEngine::new(registry, Latency::zero())
    }

    fn draft(id: &str, vendor_id: &str, amount: i64, description: &str) -> InvoiceDraft {
        InvoiceDraft {
            id: InvoiceId::from(id),
            vendor_id: VendorId::from(vendor_id),
            vendor: None,
            amount,
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn valid_draft_under_limit_is_approved_at_creation() {
        let mut engine = engine();
        let invoice = engine.add_invoice(draft("INV1", "V1", 500, "services")).await;
        assert_eq!(invoice.status, InvoiceStatus::Approved);
        assert_eq!(invoice.vendor, "Acme");
    }

    #[tokio::test]
    async fn unregistered_vendor_needs_approval_regardless_of_amount() {
        let mut engine = engine();
        engine.set_limit(i64::MAX);
        let invoice = engine.add_invoice(draft("INV2", "V9", 10, "x")).await;
        assert_eq!(invoice.status, InvoiceStatus::NeedsApproval);
        assert_eq!(invoice.vendor, "Unknown Vendor");
    }

    #[tokio::test]
    async fn amount_over_stored_limit_needs_approval() {
        let mut engine = engine();
        let invoice = engine.add_invoice(draft("INV1", "V1", 1500, "x")).await;
        assert_eq!(invoice.status, InvoiceStatus::NeedsApproval);
    }

    #[tokio::test]
    async fn zero_amount_needs_approval_even_under_limit() {
        let mut engine = engine();
        let invoice = engine.add_invoice(draft("INV1", "V1", 0, "x")).await;
        assert_eq!(invoice.status, InvoiceStatus::NeedsApproval);
    }

    #[tokio::test]
    async fn add_prepends_to_the_collection() {
        let mut engine = engine();
        engine.add_invoice(draft("INV1", "V1", 100, "first")).await;
        engine.add_invoice(draft("INV2", "V1", 200, "second")).await;

        let invoices = engine.list_invoices().await;
        assert_eq!(invoices[0].id, InvoiceId::from("INV2"));
        assert_eq!(invoices[1].id, InvoiceId::from("INV1"));
    }

    #[tokio::test]
    async fn add_then_get_round_trips() {
        let mut engine = engine();
        let created = engine.add_invoice(draft("INV1", "V1", 500, "services")).await;
        let fetched = engine.get_invoice(&created.id).await;
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn get_misses_are_not_errors() {
        let engine = engine();
        assert_eq!(engine.get_invoice(&InvoiceId::from("NOPE")).await, None);
    }

    #[tokio::test]
    async fn list_returns_an_independent_snapshot() {
        let mut engine = engine();
        engine.add_invoice(draft("INV1", "V1", 100, "x")).await;

        let mut snapshot = engine.list_invoices().await;
        snapshot.clear();
        assert_eq!(engine.list_invoices().await.len(), 1);
    }

    #[tokio::test]
    async fn update_status_overwrites_unconditionally() {
        let mut engine = engine();
        // Already Approved at creation; the escape hatch still overwrites.
        engine.add_invoice(draft("INV1", "V1", 100, "x")).await;
        let updated = engine
            .update_status(&InvoiceId::from("INV1"), InvoiceStatus::Paid)
            .await
            .unwrap();
        assert_eq!(updated.status, InvoiceStatus::Paid);
    }

    #[tokio::test]
    async fn update_status_on_unknown_id_leaves_collection_unchanged() {
        let mut engine = engine();
        engine.add_invoice(draft("INV1", "V1", 100, "x")).await;
        let before = engine.list_invoices().await;

        let result = engine
            .update_status(&InvoiceId::from("NOPE"), InvoiceStatus::Approved)
            .await;
        assert_eq!(result, None);
        assert_eq!(engine.list_invoices().await, before);
    }

    #[tokio::test]
    async fn auto_approval_transitions_pending_valid_invoices_under_limit() {
        let mut engine = engine();
        engine.set_limit(0);
        // All three start out pending because the stored limit is 0.
        engine.add_invoice(draft("INV1", "V1", 500, "a")).await;
        engine.add_invoice(draft("INV2", "V1", 1500, "b")).await;
        engine.add_invoice(draft("INV3", "V9", 100, "c")).await;

        let approved = engine.run_auto_approval(1000).await;
        assert_eq!(approved, 1);

        let invoices = engine.list_invoices().await;
        let status_of = |id: &str| {
            invoices
                .iter()
                .find(|inv| inv.id == InvoiceId::from(id))
                .unwrap()
                .status
        };
        assert_eq!(status_of("INV1"), InvoiceStatus::Approved);
        assert_eq!(status_of("INV2"), InvoiceStatus::NeedsApproval);
        assert_eq!(status_of("INV3"), InvoiceStatus::NeedsApproval);
    }

    #[tokio::test]
    async fn auto_approval_uses_its_parameter_not_the_stored_limit() {
        let mut engine = engine();
        engine.set_limit(0);
        engine.add_invoice(draft("INV3", "V1", 1500, "x")).await;

        // Stored limit stays 0; the call-site limit is what counts.
        let approved = engine.run_auto_approval(2000).await;
        assert_eq!(approved, 1);
        assert_eq!(
            engine.get_invoice(&InvoiceId::from("INV3")).await.unwrap().status,
            InvoiceStatus::Approved
        );

        // A second pass at a tighter limit does not re-touch approved rows.
        let approved = engine.run_auto_approval(1000).await;
        assert_eq!(approved, 0);
        assert_eq!(
            engine.get_invoice(&InvoiceId::from("INV3")).await.unwrap().status,
            InvoiceStatus::Approved
        );
    }

    #[tokio::test]
    async fn auto_approval_never_touches_non_pending_invoices() {
        let mut engine = engine();
        engine.add_invoice(draft("INV1", "V1", 100, "x")).await;
        engine
            .update_status(&InvoiceId::from("INV1"), InvoiceStatus::Paid)
            .await;

        let approved = engine.run_auto_approval(i64::MAX).await;
        assert_eq!(approved, 0);
        assert_eq!(
            engine.get_invoice(&InvoiceId::from("INV1")).await.unwrap().status,
            InvoiceStatus::Paid
        );
    }

    #[tokio::test]
    async fn negative_limit_never_auto_approves() {
        let mut engine = engine();
        engine.set_limit(0);
        engine.add_invoice(draft("INV1", "V1", 1, "x")).await;

        assert_eq!(engine.run_auto_approval(-1).await, 0);
    }

    #[tokio::test]
    async fn seeded_engine_auto_approves_the_small_pending_invoice() {
        let mut engine = InvoiceEngine {
            latency: Latency::zero(),
            ..InvoiceEngine::with_seed_data()
        };

        // Of the pending seeds, only INV-1005 (650) clears the default limit;
        // INV-1001 is over it and INV-1004's vendor is unregistered.
        let approved = engine.run_auto_approval(DEFAULT_LIMIT).await;
        assert_eq!(approved, 1);
        assert_eq!(
            engine
                .get_invoice(&InvoiceId::from("INV-1005"))
                .await
                .unwrap()
                .status,
            InvoiceStatus::Approved
        );
    }
}
