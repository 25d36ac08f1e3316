//! # CLI Behavior
//!
//! This is one possible UI client for credz — not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ## Context-Aware Defaults
//!
//! - **Naked execution** (`credz`) defaults to `credz list` — browsing is
//!   the path of least resistance.
//! - **Piped payloads**: `cat pid.json | credz add "PID" --issuer ...`
//!   stores stdin as the credential payload; `--payload <file>` reads a
//!   file instead.
//! - **Selectors**: `credz view 2` targets by canonical list position,
//!   `credz view driving` falls back to a name search.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: per-command handlers that call the API and print output
//! - `render`: output formatting (list lines, facets, messages)
//! - `styles`: terminal styling constants

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
