use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "credz",
    bin_name = "credz",
    version,
    disable_help_subcommand = true
)]
#[command(
    about = "A local identity-wallet document organizer for the terminal",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a document to the wallet
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Human-readable document name (e.g. "Mobile Driving Licence")
        name: String,

        /// Issuing authority display name
        #[arg(long)]
        issuer: String,

        /// Wallet category (government, travel, finance, education, health,
        /// social-security, retail, other)
        #[arg(long, default_value = "other")]
        category: String,

        /// Raw document type string (defaults to a generic type)
        #[arg(long = "type", value_name = "DOC_TYPE")]
        doc_type: Option<String>,

        /// Credential format (mso-mdoc or sd-jwt-vc)
        #[arg(long, default_value = "sd-jwt-vc")]
        format: String,

        /// Expiry date (YYYY-MM-DD); omit for credentials that never expire
        #[arg(long, value_name = "DATE")]
        valid_until: Option<String>,

        /// Mark the document as pending (deferred issuance)
        #[arg(long)]
        pending: bool,

        /// Read the credential payload from a file (default: stdin if piped)
        #[arg(long, value_name = "FILE")]
        payload: Option<PathBuf>,
    },

    /// List documents
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Search term, matched against document name and issuer
        #[arg(short, long)]
        search: Option<String>,

        /// Only these categories (repeatable)
        #[arg(long = "category", value_name = "CATEGORY")]
        categories: Vec<String>,

        /// Only these states: issued, pending, revoked (repeatable)
        #[arg(long = "state", value_name = "STATE")]
        states: Vec<String>,

        /// Only these issuers (repeatable, exact name)
        #[arg(long = "issuer", value_name = "ISSUER")]
        issuers: Vec<String>,

        /// Only documents expiring within a window: 7, 30 or 90 days
        #[arg(long, value_name = "DAYS", conflicts_with = "expired")]
        expiring: Option<String>,

        /// Only documents that are already expired
        #[arg(long)]
        expired: bool,

        /// Sort field: issued, name or expiry (default from config)
        #[arg(long)]
        sort: Option<String>,

        /// Sort ascending
        #[arg(long, conflicts_with = "desc")]
        asc: bool,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Show per-filter match counts instead of the document list
        #[arg(long)]
        facets: bool,
    },

    /// View documents (prints stored payloads)
    #[command(alias = "v", display_order = 3)]
    View {
        /// List positions (e.g. 1 3) or a name search term
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Remove documents from the wallet
    #[command(alias = "rm", display_order = 4)]
    Remove {
        /// List positions (e.g. 1 3) or a name search term
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Show the transaction log
    #[command(display_order = 5)]
    Log {
        /// Search term, matched against document name and counterparty
        #[arg(short, long)]
        search: Option<String>,

        /// Only these kinds: issuance, presentation (repeatable)
        #[arg(long = "kind", value_name = "KIND")]
        kinds: Vec<String>,

        /// Only these statuses: completed, failed (repeatable)
        #[arg(long = "status", value_name = "STATUS")]
        statuses: Vec<String>,

        /// Oldest entries first
        #[arg(long)]
        asc: bool,
    },

    /// Check and fix storage inconsistencies
    #[command(display_order = 6)]
    Doctor,

    /// Show the resolved configuration
    #[command(display_order = 7)]
    Config,

    /// Initialize the wallet store
    #[command(display_order = 8)]
    Init,
}
