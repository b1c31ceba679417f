//! Console stand-in for the invoice approval dashboard.
//!
//! Drives the engine through the same flow as the web dashboard: list the
//! invoices, take in new ones, approve a row manually, apply the auto-approval
//! rules at the configured limit, and re-list.

mod render;

use payguard_domain::{InvoiceDraft, InvoiceId, InvoiceStatus};
use payguard_engine::{DEFAULT_LIMIT, InvoiceEngine};

fn approval_limit_from_env() -> i64 {
    match std::env::var("PAYGUARD_APPROVAL_LIMIT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(%raw, "unparseable PAYGUARD_APPROVAL_LIMIT; using default");
            DEFAULT_LIMIT
        }),
        Err(_) => {
            tracing::warn!("PAYGUARD_APPROVAL_LIMIT not set; using default");
            DEFAULT_LIMIT
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    payguard_observability::init();

    let limit = approval_limit_from_env();
    let mut engine = InvoiceEngine::with_seed_data();
    engine.set_limit(limit);

    println!("PayGuard Dashboard");
    println!("Overview of all invoices and approval controls.\n");

    let vendors = engine.list_vendors().await;
    println!(
        "Registered vendors: {}\n",
        vendors
            .iter()
            .map(|v| v.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    println!("{}", render::render_table(&engine.list_invoices().await));
    println!("{}\n", render::render_legend());

    // Two invoices arrive: one auto-approvable, one from an unknown vendor.
    engine
        .add_invoice(InvoiceDraft {
            id: "INV-1006".into(),
            vendor_id: "V1".into(),
            vendor: None,
            amount: 450,
            description: "Printer toner".into(),
        })
        .await;
    engine
        .add_invoice(InvoiceDraft {
            id: "INV-1007".into(),
            vendor_id: "V7".into(),
            vendor: Some("Vandelay Imports".into()),
            amount: 300,
            description: "Material samples".into(),
        })
        .await;

    // Manual per-row approval.
    engine
        .update_status(&InvoiceId::from("INV-1001"), InvoiceStatus::Approved)
        .await;

    println!(
        "Invoices under {} will be automatically approved.",
        render::format_currency(limit)
    );
    let approved = engine.run_auto_approval(limit).await;
    println!("Auto-approval transitioned {approved} invoice(s).\n");

    println!("{}", render::render_table(&engine.list_invoices().await));
    println!("{}", render::render_legend());

    if let Some(invoice) = engine.get_invoice(&InvoiceId::from("INV-1006")).await {
        println!(
            "\nLatest invoice {}: {} from {}, {}",
            invoice.id,
            render::format_currency(invoice.amount),
            invoice.vendor,
            invoice.status,
        );
    }

    Ok(())
}
