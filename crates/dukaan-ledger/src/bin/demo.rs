//! Walks a full day at the shop: seed the catalog, add customers, raise
//! an order and a quotation, dispatch messages and print the reports.
//!
//! Usage: `cargo run --bin demo`

use chrono::{Days, Local};
use tracing_subscriber::EnvFilter;

use dukaan_core::{CreditTerms, DiscountSpec, PaymentChoice, ReminderConfig};
use dukaan_ledger::draft::{ItemRef, OrderDraft};
use dukaan_ledger::ledger::OrderLedger;
use dukaan_ledger::messaging::Messenger;
use dukaan_ledger::reports::{dashboard_kpis, receivables, sales_report, ReportPeriod};
use dukaan_ledger::store::{CatalogStore, CustomerStore};
use dukaan_ledger::{AppConfig, LedgerError};

fn main() -> Result<(), LedgerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let now = Local::now();
    let today = now.date_naive();
    let time = now.time();

    println!("Dukaan demo — {}", config.company_name);
    println!("========================================");

    // Seed stores
    let catalog = CatalogStore::with_defaults();
    let mut customers = CustomerStore::new();
    let asha = customers.add("Asha Traders", "9876543210", None, None)?;
    let ravi = customers.add("Ravi Decor", "9123456780", None, Some("prefers evening delivery".to_string()))?;

    println!("Catalog: {} products, {} customers", catalog.len(), customers.len());

    let mut ledger = OrderLedger::new();
    let mut messenger = Messenger::default();

    // Fully paid order, composed through a draft
    let mut draft = OrderDraft::new();
    draft.customer_id = Some(asha.id.clone());
    draft.add_item(ItemRef::Product(catalog.list()[0].id.clone()), 2.0);
    draft.add_item(ItemRef::Product(catalog.list()[2].id.clone()), 10.0);
    draft.discount = DiscountSpec::Percentage(10.0);
    draft.tax_percent = 18.0;

    println!("\n--- Live preview ---");
    println!("{}", draft.preview_message(&catalog, &asha.name, today, time, &config.company_name));

    let request = draft
        .into_order_request(&catalog, today, time)
        .ok_or_else(|| LedgerError::not_found("Customer", "draft"))?;
    let paid_order = ledger.create_order(&customers, request)?;
    println!("\nCommitted {}", paid_order.document_number);

    let entry = messenger.send_order_message(&mut customers, &paid_order, &config.company_name)?;
    println!("Dispatched to {} ({:?})", entry.phone, entry.status);

    // Credit order with the default reminder plan
    let mut credit_draft = OrderDraft::new();
    credit_draft.customer_id = Some(ravi.id.clone());
    credit_draft.add_item(ItemRef::Product(catalog.list()[1].id.clone()), 1.0);
    credit_draft.payment = PaymentChoice::Credit {
        terms: CreditTerms {
            label: format!("{} days", config.default_credit_duration_days),
            duration_days: config.default_credit_duration_days,
        },
        reminders: Some(ReminderConfig::default()),
    };
    let request = credit_draft
        .into_order_request(&catalog, today, time)
        .ok_or_else(|| LedgerError::not_found("Customer", "draft"))?;
    let credit_order = ledger.create_order(&customers, request)?;
    println!(
        "\nCredit order {} due {}",
        credit_order.document_number,
        credit_order.due_date.map(|d| d.to_string()).unwrap_or_default()
    );
    for reminder in ledger.reminders_for_order(&credit_order.id) {
        println!("  reminder: {:?} on {}", reminder.role, reminder.reminder_date);
    }

    // Quotation, then convert it
    let mut quote_draft = OrderDraft::new();
    quote_draft.customer_id = Some(asha.id.clone());
    quote_draft.add_item(ItemRef::Product(catalog.list()[3].id.clone()), 25.0);
    let request = quote_draft
        .into_quotation_request(&catalog, today, time, today + Days::new(30))
        .ok_or_else(|| LedgerError::not_found("Customer", "draft"))?;
    let quotation = ledger.create_quotation(&customers, request)?;
    println!("\nQuotation {} valid until {}", quotation.document_number, quotation.valid_until);

    let converted = ledger.convert_quotation(&quotation.id, today, time)?;
    println!("Converted into {}", converted.document_number);

    // Invoice for the first order
    println!("\n--- Invoice ---{}", messenger.invoice_for(&paid_order, &config.company_name));

    // Reports
    let kpis = dashboard_kpis(&ledger, &customers, today);
    println!("--- Dashboard ---");
    println!("Total sales:          {:.2}", kpis.total_sales);
    println!("Total receivables:    {:.2}", kpis.total_receivables);
    println!("Overdue receivables:  {:.2}", kpis.overdue_receivables);
    println!("Orders: {}  Customers: {}", kpis.total_orders, kpis.total_customers);
    println!("As JSON: {}", serde_json::to_string(&kpis).unwrap_or_default());

    println!("\n--- Receivables ---");
    for row in receivables(&ledger, today) {
        println!(
            "{}  {}  {:.2}  due {}  [{}]",
            row.document_number, row.customer_name, row.amount, row.due_date, row.bucket
        );
    }

    let weekly = sales_report(&ledger, ReportPeriod::Weekly, today);
    println!(
        "\nWeekly sales: {:.2} over {} orders (avg {:.2})",
        weekly.total_sales, weekly.orders_count, weekly.average_order
    );

    println!("\nMessage log: {} entries", messenger.log().all().len());
    Ok(())
}
