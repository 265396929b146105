//! # Commands Module
//!
//! One function per subcommand. Each takes the store and an output sink,
//! so tests drive them with `MemoryStorage` and a `Vec<u8>`.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── list, show, add, update, delete, stats
//! └── export.rs   ◄─── export, config
//! ```
//!
//! ## Interaction Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  form input ──► validate ──► one store mutation ──► return value       │
//! │                    │                                     │              │
//! │                    ▼                                     ▼              │
//! │             CliError (exit 3)                 confirmation + stats      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod export;
pub mod product;

pub use export::{export, show_config};
pub use product::{add, delete, list, show, stats, update};
