use chrono::{Duration, Utc};

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth;
use crate::core::store::Store;
use crate::db;
use crate::db::log;
use crate::errors::AppResult;
use crate::models::invoice::{InvoiceStatus, NewInvoice};
use crate::models::role::Role;
use crate::ui::messages;
use crate::utils::date;
use crate::utils::format;
use crate::utils::table::Table;

/// Handle `bill`, `invoices` and `pay`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = db::open(&cfg.database)?;

    let Some(user) = auth::current_user(&pool)? else {
        messages::locked("Log in to work with invoices.");
        return Ok(());
    };

    let mut store = Store::open(pool)?;

    match cmd {
        Commands::Bill {
            counselor_id,
            amount,
            description,
            due_days,
        } => {
            if !user.role.is_admin() {
                messages::warning("Only an admin can issue invoices.");
                return Ok(());
            }

            if store.counselor_by_id(counselor_id).is_none() {
                messages::warning(format!("Counselor '{}' not found.", counselor_id));
                return Ok(());
            }

            let today = Utc::now();
            let id = store.add_invoice(NewInvoice {
                counselor_id: counselor_id.clone(),
                amount: *amount,
                date: today,
                due_date: today + Duration::days(*due_days),
                status: InvoiceStatus::Pending,
                description: description.clone(),
            })?;

            let _ = log::oplog(&store.pool().conn, "bill", &id, counselor_id);

            messages::success(format!(
                "Invoice {} issued to {} for {}.",
                id,
                store.counselor_name(counselor_id),
                format::currency(&cfg.currency_symbol, *amount)
            ));
        }

        Commands::Invoices { pending } => {
            let visible: Vec<_> = store
                .invoices()
                .iter()
                .filter(|i| match user.role {
                    Role::Admin => true,
                    _ => i.counselor_id == user.id,
                })
                .filter(|i| !*pending || i.status.is_pending())
                .collect();

            if visible.is_empty() {
                println!("No invoices to show.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                "ID",
                "Counselor",
                "Amount",
                "Issued",
                "Due",
                "Status",
                "Description",
            ]);
            for i in &visible {
                table.add_row(vec![
                    i.id.clone(),
                    store.counselor_name(&i.counselor_id),
                    format::currency(&cfg.currency_symbol, i.amount),
                    date::display_date(&i.date),
                    date::display_date(&i.due_date),
                    i.status.as_str().to_string(),
                    format::truncate(&i.description, 40),
                ]);
            }

            table.print(&cfg.separator_char);
            println!();
            println!("🧾 {} invoices", visible.len());
        }

        Commands::Pay { id } => {
            if !user.role.is_admin() {
                messages::warning("Only an admin can record invoice payment.");
                return Ok(());
            }

            let Some(invoice) = store.invoice_by_id(id).cloned() else {
                messages::warning(format!("Invoice '{}' not found.", id));
                return Ok(());
            };

            // pending → paid is the only legal transition
            if !invoice.status.is_pending() {
                messages::warning("Invoice is already paid.");
                return Ok(());
            }

            let mut updated = invoice;
            updated.status = InvoiceStatus::Paid;
            store.update_invoice(updated)?;

            let _ = log::oplog(&store.pool().conn, "pay", id, &user.id);

            messages::success("Invoice marked paid.");
        }

        _ => {}
    }

    Ok(())
}
