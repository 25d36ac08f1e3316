use super::render;
use super::setup::{Cli, Commands};
use anyhow::{anyhow, Context};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use credzapp::api::{DocumentQuery, ExpiryWindow, LogQuery, NewDocument, SortField, WalletApi};
use credzapp::config::WalletConfig;
use credzapp::filters::SortOrder;
use credzapp::init;
use credzapp::model::{CredentialFormat, DocumentCategory, DocumentState};
use credzapp::store::fs::FileStore;
use credzapp::transactions::{TransactionKind, TransactionStatus};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

struct AppContext {
    api: WalletApi<FileStore>,
    config: WalletConfig,
    data_dir: PathBuf,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            name,
            issuer,
            category,
            doc_type,
            format,
            valid_until,
            pending,
            payload,
        }) => handle_add(
            &mut ctx,
            name,
            issuer,
            category,
            doc_type,
            format,
            valid_until,
            pending,
            payload,
        ),
        Some(Commands::List {
            search,
            categories,
            states,
            issuers,
            expiring,
            expired,
            sort,
            asc,
            desc,
            facets,
        }) => handle_list(
            &ctx, search, categories, states, issuers, expiring, expired, sort, asc, desc, facets,
        ),
        Some(Commands::View { indexes }) => handle_view(&ctx, indexes),
        Some(Commands::Remove { indexes }) => handle_remove(&mut ctx, indexes),
        Some(Commands::Log {
            search,
            kinds,
            statuses,
            asc,
        }) => handle_log(&ctx, search, kinds, statuses, asc),
        Some(Commands::Doctor) => handle_doctor(&mut ctx),
        Some(Commands::Config) => handle_config(&ctx),
        Some(Commands::Init) => handle_init(&ctx),
        // Naked execution defaults to listing.
        None => handle_list(
            &ctx,
            None,
            vec![],
            vec![],
            vec![],
            None,
            false,
            None,
            false,
            false,
            false,
        ),
    }
}

fn init_context() -> anyhow::Result<AppContext> {
    let data_dir = init::resolve_data_dir()?;
    init::ensure_initialized(&data_dir)?;
    let config = WalletConfig::load(&data_dir)?;
    let api = WalletApi::new(FileStore::open(&data_dir));
    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    ctx: &mut AppContext,
    name: String,
    issuer: String,
    category: String,
    doc_type: Option<String>,
    format: String,
    valid_until: Option<String>,
    pending: bool,
    payload_file: Option<PathBuf>,
) -> anyhow::Result<()> {
    let category: DocumentCategory = category.parse().map_err(|e: String| anyhow!(e))?;
    let format: CredentialFormat = format.parse().map_err(|e: String| anyhow!(e))?;
    let valid_until = valid_until.map(|s| parse_date(&s)).transpose()?;
    let payload = read_payload(payload_file)?;

    let result = ctx.api.add_document(NewDocument {
        name,
        doc_type: doc_type.unwrap_or_else(|| "org.example.generic.1".to_string()),
        format,
        category,
        issuer,
        valid_until,
        pending,
        payload,
    })?;

    render::print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    categories: Vec<String>,
    states: Vec<String>,
    issuers: Vec<String>,
    expiring: Option<String>,
    expired: bool,
    sort: Option<String>,
    asc: bool,
    desc: bool,
    facets: bool,
) -> anyhow::Result<()> {
    let mut query = DocumentQuery::from_config(&ctx.config);
    query.search = search;
    query.categories = parse_all::<DocumentCategory>(&categories)?;
    query.states = parse_all::<DocumentState>(&states)?;
    query.issuers = issuers;
    if let Some(window) = expiring {
        query.expiry = Some(window.parse::<ExpiryWindow>().map_err(|e| anyhow!(e))?);
    } else if expired {
        query.expiry = Some(ExpiryWindow::Expired);
    }
    if let Some(field) = sort {
        query.sort = field.parse::<SortField>().map_err(|e| anyhow!(e))?;
    }
    if asc {
        query.order = SortOrder::Ascending;
    } else if desc {
        query.order = SortOrder::Descending;
    }

    let result = ctx.api.list_documents(&query)?;

    if facets {
        render::print_facets(&result.facets);
    } else {
        render::print_document_list(&result.listed, ctx.config.expiry_warn_days);
    }
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, indexes: Vec<String>) -> anyhow::Result<()> {
    let result = ctx.api.view_documents(&indexes)?;
    render::print_full_documents(&result.listed);
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, indexes: Vec<String>) -> anyhow::Result<()> {
    let result = ctx.api.remove_documents(&indexes)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_log(
    ctx: &AppContext,
    search: Option<String>,
    kinds: Vec<String>,
    statuses: Vec<String>,
    asc: bool,
) -> anyhow::Result<()> {
    let query = LogQuery {
        search,
        kinds: parse_all::<TransactionKind>(&kinds)?,
        statuses: parse_all::<TransactionStatus>(&statuses)?,
        order: if asc {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        },
    };

    let result = ctx.api.transactions(&query)?;
    render::print_transactions(&result.transactions);
    Ok(())
}

fn handle_doctor(ctx: &mut AppContext) -> anyhow::Result<()> {
    let result = ctx.api.doctor()?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> anyhow::Result<()> {
    println!("data_dir = {}", ctx.data_dir.display());
    println!("default_sort = {}", ctx.config.default_sort);
    println!("default_order = {}", ctx.config.default_order);
    println!("expiry_warn_days = {}", ctx.config.expiry_warn_days);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> anyhow::Result<()> {
    // init_context already ensured the store exists; just report where.
    println!("Initialized wallet at {}", ctx.data_dir.display());
    Ok(())
}

/// Parse every element of a repeatable flag, failing on the first bad one.
fn parse_all<T: std::str::FromStr<Err = String>>(values: &[String]) -> anyhow::Result<Vec<T>> {
    values
        .iter()
        .map(|v| v.parse::<T>().map_err(|e| anyhow!(e)))
        .collect()
}

/// Payload source priority: explicit file, then piped stdin, then an empty
/// JSON object placeholder.
fn read_payload(payload_file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = payload_file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read payload file {}", path.display()));
    }

    let mut stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut payload = String::new();
        stdin.read_to_string(&mut payload)?;
        if !payload.trim().is_empty() {
            return Ok(payload);
        }
    }

    Ok("{}".to_string())
}

/// Parse a YYYY-MM-DD date as an end-of-day UTC expiry instant.
fn parse_date(s: &str) -> anyhow::Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date \"{}\" (expected YYYY-MM-DD)", s))?;
    let naive = date
        .and_hms_opt(23, 59, 59)
        .expect("23:59:59 is a valid time of day");
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_end_of_day() {
        let parsed = parse_date("2030-01-31").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2030-01-31T23:59:59+00:00");
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("31/01/2030").is_err());
        assert!(parse_date("2030-13-01").is_err());
    }

    #[test]
    fn parse_all_surfaces_first_error() {
        let values = vec!["travel".to_string(), "passport".to_string()];
        let result = parse_all::<DocumentCategory>(&values);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_list_flags() {
        let cli = Cli::try_parse_from([
            "credz", "list", "--category", "travel", "--state", "issued", "--sort", "name",
            "--asc", "--facets",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::List {
                categories,
                states,
                sort,
                asc,
                facets,
                ..
            }) => {
                assert_eq!(categories, vec!["travel"]);
                assert_eq!(states, vec!["issued"]);
                assert_eq!(sort.as_deref(), Some("name"));
                assert!(asc);
                assert!(facets);
            }
            other => panic!("Expected List, got {:?}", other),
        }
    }

    #[test]
    fn cli_rejects_conflicting_order_flags() {
        assert!(Cli::try_parse_from(["credz", "list", "--asc", "--desc"]).is_err());
    }

    #[test]
    fn cli_rejects_expiring_with_expired() {
        assert!(Cli::try_parse_from(["credz", "list", "--expiring", "7", "--expired"]).is_err());
    }
}
