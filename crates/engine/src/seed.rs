//! Fixed seed data: the registered vendor set and a starter invoice
//! collection covering every status.

use chrono::Utc;
use payguard_domain::{Invoice, InvoiceId, InvoiceStatus, Vendor, VendorId, VendorRegistry};

/// The registered vendors. Fixed for the lifetime of an engine.
pub fn vendor_registry() -> VendorRegistry {
    VendorRegistry::new(vec![
        Vendor::new("V1", "Acme Corp"),
        Vendor::new("V2", "Globex Logistics"),
        Vendor::new("V3", "Initech Solutions"),
        Vendor::new("V4", "Umbrella Supplies"),
    ])
}

/// Starter invoices, newest first. Amounts are in the smallest currency unit.
pub fn initial_invoices() -> Vec<Invoice> {
    let today = Utc::now().date_naive();
    let invoice = |id: &str, vendor_id: &str, vendor: &str, amount: i64, description: &str, status| {
        Invoice {
            id: InvoiceId::from(id),
            vendor_id: VendorId::from(vendor_id),
            vendor: vendor.to_string(),
            amount,
            description: description.to_string(),
            status,
            date: today,
        }
    };

    vec![
        invoice(
            "INV-1005",
            "V2",
            "Globex Logistics",
            650,
            "Courier fees",
            InvoiceStatus::NeedsApproval,
        ),
        // Unregistered vendor: stays pending no matter the limit.
        invoice(
            "INV-1004",
            "V9",
            "Unknown Vendor",
            25_000,
            "Consulting retainer",
            InvoiceStatus::NeedsApproval,
        ),
        invoice(
            "INV-1003",
            "V3",
            "Initech Solutions",
            89_900,
            "Annual software licenses",
            InvoiceStatus::Paid,
        ),
        invoice(
            "INV-1002",
            "V2",
            "Globex Logistics",
            45_000,
            "Freight and delivery",
            InvoiceStatus::Approved,
        ),
        invoice(
            "INV-1001",
            "V1",
            "Acme Corp",
            120_000,
            "Quarterly office supplies",
            InvoiceStatus::NeedsApproval,
        ),
    ]
}
