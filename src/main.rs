use chrono::Utc;
use clap::Parser;
use resto_pos::domain::fixtures::{sample_customers, sample_tables, sample_tickets, SampleMenu};
use resto_pos::utils::error::ErrorSeverity;
use resto_pos::utils::monitor::SystemMonitor;
use resto_pos::utils::{logger, validation::Validate};
use resto_pos::{
    Category, CliConfig, CustomerDirectory, CustomerFilter, FileCatalog, OrderBook, OrderSession,
    PaymentMethod, TableBoard, TableStatus,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting resto-pos demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor = SystemMonitor::new(config.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    match run(&config, &monitor) {
        Ok(()) => {
            tracing::info!("✅ Service demo completed");
            println!("✅ Service demo completed");
        }
        Err(e) => {
            tracing::error!(
                "❌ Demo failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

/// Drive one deterministic service round: seed the floor, take an order at
/// the counter, run it through the book, and show the dashboard.
fn run(config: &CliConfig, monitor: &SystemMonitor) -> resto_pos::Result<()> {
    let mut session = match &config.menu_path {
        Some(path) => {
            tracing::info!("📁 Loading menu from {}", path);
            OrderSession::start(&FileCatalog::new(path.clone()))?
        }
        None => OrderSession::start(&SampleMenu)?,
    };
    tracing::info!("🍜 Menu loaded: {} entries", session.catalog().len());
    monitor.log_stats("Menu loaded");

    let mut board = TableBoard::from_tables(sample_tables(config.table_count));
    let mut directory = CustomerDirectory::from_customers(sample_customers(8));
    let mut book = OrderBook::new();

    // Seed some history so the dashboard has something to show
    let seed_time = resto_pos::domain::fixtures::service_day(10, 0);
    for (i, ticket) in sample_tickets(session.catalog(), 5).into_iter().enumerate() {
        let id = book.place(ticket, seed_time + chrono::Duration::minutes(i as i64 * 5));
        if i % 2 == 0 {
            book.complete(
                &id,
                PaymentMethod::Cash,
                seed_time + chrono::Duration::minutes(i as i64 * 5 + 40),
            )?;
        }
    }
    monitor.log_stats("History seeded");

    // Take a fresh order at the counter
    let mains = session.browse(Some(Category::Main), "");
    tracing::info!("Browsing: {} main dishes", mains.len());
    let hits = session.browse(None, "phở");
    tracing::info!("Search 'phở': {} hit(s)", hits.len());

    session.select_table("T04");
    session.set_customer_name("Lan");
    session.add_item("1");
    session.add_item("1");
    session.add_item("4");
    session.remove_one_unit("1");
    tracing::info!(
        "Cart: {} line(s), {}đ total, confirmable: {}",
        session.line_count(),
        session.total(),
        session.can_confirm()
    );

    let order_total = session.total();
    let now = Utc::now();
    let order_id = session.confirm(&mut book, now)?;
    board.occupy("T04", "Lan", now)?;
    monitor.log_stats("Order placed");

    // Kitchen and cashier
    book.start_processing(&order_id)?;
    book.complete(&order_id, PaymentMethod::Card, Utc::now())?;
    directory.note_visit("Lan", order_total, Utc::now());
    board.release("T04")?;
    monitor.log_stats("Order settled");

    // Dashboard
    println!("📋 Recent orders:");
    for order in book.recent(5) {
        println!(
            "  {}  {}  {}  {}đ  ({:?})",
            order.id, order.table_id, order.customer, order.total, order.status
        );
    }
    println!(
        "🪑 Tables: {} empty / {} occupied / {} reserved",
        board.count(TableStatus::Empty),
        board.count(TableStatus::Occupied),
        board.count(TableStatus::Reserved)
    );
    println!(
        "👥 Customers: {} on file, {} favorites",
        directory.len(),
        directory.search("", CustomerFilter::Favorite).len()
    );

    monitor.log_final_stats();
    Ok(())
}
