use clap::Parser;
use resto_pos::utils::{logger, validation::Validate};
use resto_pos::{Category, MenuFile};

#[derive(Parser)]
#[command(name = "menu-check")]
#[command(about = "Parse and validate a TOML menu file")]
struct Args {
    /// Path to the menu file
    #[arg(short, long, default_value = "menu.toml")]
    menu: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Checking menu file: {}", args.menu);

    let menu = match MenuFile::from_file(&args.menu) {
        Ok(menu) => menu,
        Err(e) => {
            eprintln!("❌ Failed to load '{}': {}", args.menu, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = menu.validate() {
        tracing::error!("❌ Menu validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let name = menu.menu.name.clone();
    let currency = menu.menu.currency.clone().unwrap_or_else(|| "VND".to_string());
    let catalog = menu.into_catalog();

    println!("✅ {} — {} items ({})", name, catalog.len(), currency);
    for category in Category::ALL {
        let entries = catalog.browse(Some(category), "");
        if entries.is_empty() {
            continue;
        }
        println!("  {:?}: {} item(s)", category, entries.len());
        for entry in entries {
            println!("    {}  {}  {}đ", entry.id, entry.name, entry.unit_price);
        }
    }
}
