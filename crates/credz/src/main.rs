//! # credz CLI Architecture
//!
//! Credz ships with a CLI client, but the binary is intentionally thin: the
//! CLI lives in `src/cli/`, while this file only invokes `cli::run()` and
//! handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/credzapp/` — core library with UI-agnostic business logic
//! - `crates/credz/` — this CLI tool, depends on the `credzapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/cli/)                                      │
//! │  - clap argument parsing (setup.rs)                        │
//! │  - Command dispatch + context wiring (commands.rs)         │
//! │  - Terminal rendering (render.rs, styles.rs)               │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (credzapp::api)                                 │
//! │  - Normalizes user-facing selectors                        │
//! │  - Dispatches to command modules                           │
//! │  - Returns structured `CmdResult` values                   │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (credzapp::commands)                        │
//! │  - Pure business logic + the filter engine                 │
//! │  - No knowledge of stdout/stderr or process exits          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from the API inward is UI agnostic. The CLI layer is
//! responsible for **all** user-facing concerns: argument parsing, context
//! initialization, dispatch, error handling, and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
