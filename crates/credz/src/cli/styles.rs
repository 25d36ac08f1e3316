use console::Style;
use once_cell::sync::Lazy;

pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static NAME: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static CATEGORY: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static ISSUER: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().color256(247).italic());
pub static EXPIRING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static BAD: Lazy<Style> = Lazy::new(|| Style::new().red());
pub static PENDING: Lazy<Style> = Lazy::new(|| Style::new().yellow().dim());
pub static FACET_GROUP: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());
