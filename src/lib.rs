//! # awscmd
//!
//! Verb-noun commands over four AWS services. Each command is a thin layer:
//!
//! ```text
//! flags ──► cli::<service>  ──► typed input
//!                                   │
//!                         runtime::Runtime
//!            (validate · confirm · invoke or paginate)
//!                                   │
//!                         output::write_envelopes
//! ```
//!
//! Operation shapes and the HTTP client live in `awscmd-aws`; the shared
//! request/response cycle lives in `awscmd-core`.

pub mod cli;
pub mod output;
pub mod runtime;
pub mod settings;

pub use cli::{Cli, Command, GlobalArgs};
pub use runtime::Runtime;
