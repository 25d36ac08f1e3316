//! # Rendering Module
//!
//! Terminal output for the credz CLI. Layout calculations (width,
//! truncation, padding) are done in Rust with Unicode-aware processing;
//! styling goes through the constants in [`super::styles`].

use super::styles;
use chrono::{DateTime, Utc};
use colored::Colorize;
use credzapp::api::{CmdMessage, ListedDocument, MessageLevel};
use credzapp::filters::FacetCount;
use credzapp::model::DocumentState;
use credzapp::transactions::{Transaction, TransactionKind, TransactionStatus};
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 34;
const CATEGORY_WIDTH: usize = 17;
const ISSUER_WIDTH: usize = 24;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One line per document: position, name, status badge, category, issuer,
/// relative issuance time.
pub(super) fn print_document_list(documents: &[ListedDocument], warn_days: u32) {
    if documents.is_empty() {
        println!("No documents found.");
        return;
    }

    let now = Utc::now();
    for entry in documents {
        let metadata = &entry.document.metadata;

        let index = styles::INDEX.apply_to(format!("{:>3}.", entry.position));
        let name = pad_to_width(&metadata.name, NAME_WIDTH);
        let category = pad_to_width(metadata.category.label(), CATEGORY_WIDTH);
        let issuer = pad_to_width(&metadata.issuer, ISSUER_WIDTH);
        let time_ago = format_time_ago(metadata.issued_at);

        // Pad before styling: ANSI escapes have no display width.
        let (badge_text, badge_style) = badge(entry, now, warn_days);
        let badge = badge_style.apply_to(pad_to_width(&badge_text, 22));

        println!(
            "{} {} {} {} {} {}",
            index,
            styles::NAME.apply_to(name),
            badge,
            styles::CATEGORY.apply_to(category),
            styles::ISSUER.apply_to(issuer),
            styles::TIME.apply_to(time_ago),
        );
    }
}

/// The status badge shown after the document name, empty when there is
/// nothing to warn about.
fn badge(
    entry: &ListedDocument,
    now: DateTime<Utc>,
    warn_days: u32,
) -> (String, &'static console::Style) {
    let metadata = &entry.document.metadata;
    match metadata.state {
        DocumentState::Revoked => return ("revoked".to_string(), &styles::BAD),
        DocumentState::Pending => return ("pending".to_string(), &styles::PENDING),
        DocumentState::Issued => {}
    }
    if metadata.is_expired(now) {
        return ("expired".to_string(), &styles::BAD);
    }
    if metadata.expires_within(now, i64::from(warn_days)) {
        if let Some(until) = metadata.valid_until {
            let days = (until - now).num_days().max(0);
            return (format!("expires in {} days", days), &styles::EXPIRING);
        }
    }
    (String::new(), &styles::ISSUER)
}

pub(super) fn print_full_documents(documents: &[ListedDocument]) {
    for (i, entry) in documents.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            styles::INDEX.apply_to(format!("{}.", entry.position)),
            styles::NAME.apply_to(&entry.document.metadata.name)
        );
        println!(
            "{}",
            styles::ISSUER.apply_to(format!(
                "{} · {} · {}",
                entry.document.metadata.issuer,
                entry.document.metadata.doc_type,
                entry.document.metadata.format.label()
            ))
        );
        println!("--------------------------------");
        println!("{}", entry.document.payload);
    }
}

pub(super) fn print_transactions(transactions: &[Transaction]) {
    if transactions.is_empty() {
        println!("No transactions recorded.");
        return;
    }

    for tx in transactions {
        let direction = match tx.kind {
            TransactionKind::Issuance => "from",
            TransactionKind::Presentation => "to",
        };
        let status = match tx.status {
            TransactionStatus::Completed => tx.status.label().normal(),
            TransactionStatus::Failed => tx.status.label().red(),
        };
        println!(
            "{}  {} {} {} {} {}",
            styles::TIME.apply_to(tx.occurred_at.format("%Y-%m-%d %H:%M").to_string()),
            pad_to_width(tx.kind.label(), 12),
            status,
            styles::NAME.apply_to(&tx.document_name),
            direction,
            styles::ISSUER.apply_to(&tx.party),
        );
    }
}

/// Facet counts grouped under their filter-group heading.
pub(super) fn print_facets(facets: &[FacetCount]) {
    let mut current_group: Option<&str> = None;
    for facet in facets {
        if current_group != Some(facet.group_name.as_str()) {
            if current_group.is_some() {
                println!();
            }
            println!("{}", styles::FACET_GROUP.apply_to(&facet.group_name));
            current_group = Some(facet.group_name.as_str());
        }
        println!("  {} {}", pad_to_width(&facet.item_name, 24), facet.count);
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let elapsed = (Utc::now() - timestamp).to_std().unwrap_or_default();
    Formatter::new().convert(elapsed)
}

/// Pad (or truncate with an ellipsis) to a fixed display width.
fn pad_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + char_width > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += char_width;
    }
    out.push('…');
    let out_width = out.width();
    format!("{}{}", out, " ".repeat(width.saturating_sub(out_width)))
}
