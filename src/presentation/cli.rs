//! CLI argument parsing (clap derive)

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::{ConnectionStatus, PaymentMode, Provider, StatusFilter};

/// Dishdesk - local CRM for cable/DTH subscription operators
#[derive(Parser, Debug)]
#[command(name = "dishdesk")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Operator commands require 'dishdesk login' first; 'lookup' is public.")]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the admin dashboard (counts and total revenue)
    Stats,

    /// List customers, optionally filtered by connection status
    List {
        /// Status filter: all, active, inactive, or pending
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,
    },

    /// Show one customer in full, including purchase history
    Show {
        /// Customer id (the account number)
        id: String,
    },

    /// Add a new customer
    Add(AddArgs),

    /// Edit a customer's details (unset flags keep current values)
    Edit(EditArgs),

    /// Record a payment against a customer
    Pay {
        /// Customer id (the account number)
        id: String,

        /// Amount paid (non-negative)
        #[arg(short, long)]
        amount: String,

        /// What the payment was for
        #[arg(short, long, default_value = "Recharge")]
        description: String,

        /// Payment mode: cash, card, or online
        #[arg(short, long, default_value = "online")]
        mode: PaymentMode,
    },

    /// Delete a customer (asks for confirmation)
    Delete {
        /// Customer id (the account number)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Search customers by name, contact number, account id, or email
    Search {
        /// Substring to match, case-insensitive
        query: String,
    },

    /// Public self-service lookup (no login required)
    Lookup {
        /// Account number, contact number, or name
        query: String,
    },

    /// Log in as the operator
    Login {
        /// Operator username (prompted when omitted)
        #[arg(short, long)]
        username: Option<String>,

        /// Operator password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Log out of the operator session
    Logout,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Customer name
    #[arg(long)]
    pub name: String,

    /// Contact phone number
    #[arg(long)]
    pub contact: String,

    /// Cable/DTH account number (must be unique)
    #[arg(long)]
    pub account_id: String,

    /// City
    #[arg(long)]
    pub city: String,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Connection status (defaults to pending)
    #[arg(long, default_value = "pending")]
    pub status: ConnectionStatus,

    /// Provider: dishtv, sundirect, videocon, airtel, or dialogtv
    #[arg(long)]
    pub provider: Provider,

    /// Custom monthly price (defaults to the provider's base price)
    #[arg(long)]
    pub price: Option<f64>,

    /// Installation date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub installed: Option<String>,

    /// Renewal date (YYYY-MM-DD, defaults to installation + 1 year)
    #[arg(long)]
    pub renewal: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Customer id (the account number; not editable itself)
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub contact: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Connection status: active, inactive, or pending
    #[arg(long)]
    pub status: Option<ConnectionStatus>,

    #[arg(long)]
    pub provider: Option<Provider>,

    /// Custom monthly price
    #[arg(long)]
    pub price: Option<f64>,

    /// Drop the custom price and fall back to the provider table
    #[arg(long, conflicts_with = "price")]
    pub clear_price: bool,

    /// Installation date (YYYY-MM-DD)
    #[arg(long)]
    pub installed: Option<String>,

    /// Renewal date (YYYY-MM-DD)
    #[arg(long)]
    pub renewal: Option<String>,
}
