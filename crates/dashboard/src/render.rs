//! Console rendering of the invoice table and status legend.
//!
//! Everything UI lives here; the engine knows nothing about presentation.

use payguard_domain::{Invoice, InvoiceStatus};

/// Status badge text.
pub fn badge(status: InvoiceStatus) -> String {
    format!("[{}]", status.label())
}

/// Currency with two decimals, from the smallest currency unit.
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

/// Per-row action control, shown only while an invoice awaits approval.
fn action(status: InvoiceStatus) -> String {
    if status == InvoiceStatus::NeedsApproval {
        "Approve".to_string()
    } else {
        String::new()
    }
}

/// Render the invoice table in the dashboard's column order.
pub fn render_table(invoices: &[Invoice]) -> String {
    let headers = ["Invoice ID", "Vendor", "Amount", "Status", "Action"];

    let rows: Vec<[String; 5]> = invoices
        .iter()
        .map(|inv| {
            [
                inv.id.to_string(),
                inv.vendor.clone(),
                format_currency(inv.amount),
                badge(inv.status),
                action(inv.status),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let fmt_row = |cells: [&str; 5]| {
        // Amount is right-aligned, everything else left.
        format!(
            "{:<w0$}  {:<w1$}  {:>w2$}  {:<w3$}  {:<w4$}",
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            cells[4],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
            w4 = widths[4],
        )
        .trim_end()
        .to_string()
    };

    let mut out = String::new();
    out.push_str(&fmt_row(headers));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    for row in &rows {
        out.push('\n');
        out.push_str(&fmt_row([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
            row[4].as_str(),
        ]));
    }
    out
}

/// The status legend shown under the table.
pub fn render_legend() -> String {
    format!(
        "{} payment completed   {} ready for payment   {} manual review required",
        badge(InvoiceStatus::Paid),
        badge(InvoiceStatus::Approved),
        badge(InvoiceStatus::NeedsApproval),
    )
}
