// Rust guideline compliant 2026-08-14

//! Souk CLI Application
//!
//! Command-line interface for the Souk peer-to-peer listing marketplace.

use clap::Parser;
use souk_app::{AppError, ErrorEnvelope};

pub mod commands;
pub mod output;
pub mod terminal;

pub use output::{create_formatter, user_json, OutputFormatter};
pub use terminal::{get_terminal_width, should_use_color, wrap_text};

#[derive(Parser, Debug)]
#[command(
    name = "souk",
    version,
    about = "Souk: Peer-to-peer listing marketplace",
    long_about = "Souk is a peer-to-peer marketplace for nightly listings. It stores all records in JSONL, holds booking funds in per-user wallets, and settles them through explicit transactions.",
    after_help = "Examples:\n  souk init\n  souk register alice alice@example.com 's3cret!1'\n  souk listing create \"Harbor loft\" --description \"Two rooms over the quay\" --price 120\n  souk listing list --min-price 50 --sort price\n  souk book lst-1a2b3c 2026-09-01 2026-09-04\n  souk wallet deposit 500\n  souk txn settle txn-9f8e7d\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Souk market
    Init,

    /// Register a new account
    Register {
        /// Display name (3-20 word characters)
        username: String,

        /// Login email
        email: String,

        /// Password (6+ characters with a letter, a digit, and a symbol)
        password: String,
    },

    /// Log in and store a local session
    Login {
        /// Login email
        email: String,

        /// Password
        password: String,
    },

    /// Clear the local session
    Logout,

    /// Show the logged-in account
    Whoami,

    /// Manage the logged-in account
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Manage listings
    Listing {
        #[command(subcommand)]
        action: ListingAction,
    },

    /// Book a listing over a date range
    Book {
        /// Listing ID (full or partial)
        listing: String,

        /// First night (YYYY-MM-DD), inclusive
        start: String,

        /// Checkout day (YYYY-MM-DD), exclusive
        end: String,
    },

    /// List bookings
    Bookings {
        /// Show bookings for a listing instead of your own
        #[arg(long)]
        listing: Option<String>,
    },

    /// Manage wallet funds
    Wallet {
        #[command(subcommand)]
        action: WalletAction,
    },

    /// Manage transactions
    Txn {
        #[command(subcommand)]
        action: TxnAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum AccountAction {
    /// Update profile fields
    Update {
        /// New username
        #[arg(long)]
        username: Option<String>,

        /// New email
        #[arg(long)]
        email: Option<String>,

        /// New billing address
        #[arg(long)]
        billing_address: Option<String>,

        /// New postal code
        #[arg(long)]
        postal_code: Option<String>,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ListingAction {
    /// Create a new listing owned by the logged-in user
    Create {
        /// Listing title
        title: String,

        /// Detailed description (must be longer than the title)
        #[arg(long)]
        description: String,

        /// Nightly price
        #[arg(long)]
        price: String,

        /// Street address
        #[arg(long)]
        address: Option<String>,
    },

    /// Update a listing
    Update {
        /// Listing ID (full or partial)
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New nightly price (may only increase)
        #[arg(long)]
        price: Option<String>,

        /// New address
        #[arg(long)]
        address: Option<String>,
    },

    /// List listings
    List {
        /// Filter by owner ID (full or partial)
        #[arg(long)]
        owner: Option<String>,

        /// Filter by price >= bound
        #[arg(long)]
        min_price: Option<String>,

        /// Filter by price <= bound
        #[arg(long)]
        max_price: Option<String>,

        /// Sort by field (id, title, price, created_at, last_modified_at)
        #[arg(long)]
        sort: Option<String>,

        /// Maximum number of rows to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show details of a listing
    Show {
        /// Listing ID (full or partial)
        id: String,
    },
}

#[derive(Debug, clap::Subcommand)]
enum WalletAction {
    /// Show balances
    Show,

    /// Add funds to the banking account
    Deposit {
        /// Amount to deposit
        amount: String,
    },

    /// Move funds from the banking account into the wallet
    TopUp {
        /// Amount to transfer
        amount: String,
    },
}

#[derive(Debug, clap::Subcommand)]
enum TxnAction {
    /// List your transactions
    List,

    /// Show details of a transaction
    Show {
        /// Transaction ID (full or partial)
        id: String,
    },

    /// Complete an in-progress transaction and pay the payee
    Settle {
        /// Transaction ID (full or partial)
        id: String,
    },

    /// Cancel an in-progress transaction and refund the payer
    Cancel {
        /// Transaction ID (full or partial)
        id: String,
    },

    /// Set the raw status of a transaction
    Status {
        /// Transaction ID (full or partial)
        id: String,

        /// Status name, alias, or raw JSON value
        value: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine output format and color usage
    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                config_format()
            }
        }
    };
    let formatter = create_formatter(format, use_color);
    let json = format == "json";

    if let Err(error) = run(cli.command, formatter.as_ref(), json) {
        if json {
            if let Some(app_error) = error.downcast_ref::<AppError>() {
                let envelope = ErrorEnvelope::from_error(app_error);
                eprintln!("{}", serde_json::to_string_pretty(&envelope)?);
                std::process::exit(1);
            }
        }
        return Err(error);
    }

    Ok(())
}

/// Reads the default output format from the market configuration.
///
/// Falls back to "table" when no market or config is readable, so the
/// CLI stays usable before `souk init`.
fn config_format() -> &'static str {
    let Ok(ctx) = souk_app::MarketContext::discover(None) else {
        return "table";
    };
    match ctx.load_config() {
        Ok(config) => match config.output_format {
            souk_core::OutputFormat::Json => "json",
            souk_core::OutputFormat::Table => "table",
            souk_core::OutputFormat::Plain => "plain",
        },
        Err(_) => "table",
    }
}

fn run(
    command: Option<Commands>,
    formatter: &dyn OutputFormatter,
    json: bool,
) -> anyhow::Result<()> {
    match command {
        Some(Commands::Init) => {
            commands::init::execute()?;
        }
        Some(Commands::Register {
            username,
            email,
            password,
        }) => {
            commands::register::execute(&username, &email, &password, json)?;
        }
        Some(Commands::Login { email, password }) => {
            commands::login::execute(&email, &password, json)?;
        }
        Some(Commands::Logout) => {
            commands::logout::execute()?;
        }
        Some(Commands::Whoami) => {
            commands::whoami::execute(formatter)?;
        }
        Some(Commands::Account { action }) => match action {
            AccountAction::Update {
                username,
                email,
                billing_address,
                postal_code,
            } => {
                commands::account::update(username, email, billing_address, postal_code, json)?;
            }
        },
        Some(Commands::Listing { action }) => match action {
            ListingAction::Create {
                title,
                description,
                price,
                address,
            } => {
                commands::listing::create(&title, &description, &price, address, json)?;
            }
            ListingAction::Update {
                id,
                title,
                description,
                price,
                address,
            } => {
                commands::listing::update(&id, title, description, price, address, json)?;
            }
            ListingAction::List {
                owner,
                min_price,
                max_price,
                sort,
                limit,
            } => {
                commands::listing::list(owner, min_price, max_price, sort, limit, formatter)?;
            }
            ListingAction::Show { id } => {
                commands::listing::show(&id, formatter)?;
            }
        },
        Some(Commands::Book {
            listing,
            start,
            end,
        }) => {
            commands::book::execute(&listing, &start, &end, json)?;
        }
        Some(Commands::Bookings { listing }) => {
            commands::bookings::execute(listing, formatter)?;
        }
        Some(Commands::Wallet { action }) => match action {
            WalletAction::Show => {
                commands::wallet::show(formatter)?;
            }
            WalletAction::Deposit { amount } => {
                commands::wallet::deposit_cmd(&amount, json)?;
            }
            WalletAction::TopUp { amount } => {
                commands::wallet::top_up_cmd(&amount, json)?;
            }
        },
        Some(Commands::Txn { action }) => match action {
            TxnAction::List => {
                commands::txn::list(formatter)?;
            }
            TxnAction::Show { id } => {
                commands::txn::show(&id, formatter)?;
            }
            TxnAction::Settle { id } => {
                commands::txn::settle(&id, json)?;
            }
            TxnAction::Cancel { id } => {
                commands::txn::cancel(&id, json)?;
            }
            TxnAction::Status { id, value } => {
                commands::txn::status(&id, &value, json)?;
            }
        },
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
