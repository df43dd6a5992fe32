use clap::{Parser, Subcommand};

/// Command-line interface definition for rExpense
/// CLI application to record expenses and check a monthly limit with SQLite
#[derive(Parser)]
#[command(
    name = "rexpense",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple expense tracker: record expenses, chart them and check a monthly limit using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity and stored dates")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a new expense
    Add {
        /// Expense name
        name: String,

        /// Expense amount
        #[arg(allow_negative_numbers = true)]
        amount: String,

        /// Expense date (YYYY-MM-DD, default: today)
        #[arg(long = "date", help = "Expense date (YYYY-MM-DD), defaults to today")]
        date: Option<String>,
    },

    /// Show all expenses as a bar chart
    Chart,

    /// List expenses as a table
    List {
        #[arg(long, short, help = "Only show one month (YYYY-MM)")]
        month: Option<String>,
    },

    /// Set, show or check the monthly spending limit
    Limit {
        #[arg(
            long = "set",
            value_name = "AMOUNT",
            allow_negative_numbers = true,
            help = "Set the monthly limit"
        )]
        set: Option<String>,

        #[arg(long = "check", help = "Compare the month's total with the limit")]
        check: bool,

        #[arg(
            long = "month",
            value_name = "YYYY-MM",
            requires = "check",
            help = "Month to check (default: current month)"
        )]
        month: Option<String>,

        #[arg(long = "show", help = "Print the current limit")]
        show: bool,
    },
}
