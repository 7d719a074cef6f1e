//! # awscmd-core – Shared request/response cycle
//!
//! Every generated command runs through the same four stages:
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  Request builder  (builder.rs, context.rs)       │
//! │  ├── prune unset nested structures               │
//! │  └── fail fast on missing required inputs        │
//! ├──────────────────────────────────────────────────┤
//! │  Invoker  (invoker.rs, wire.rs)                  │
//! │  └── one call through an injected Transport      │
//! ├──────────────────────────────────────────────────┤
//! │  Projection  (projection.rs)                     │
//! │  └── `*` · field · `^param` · default            │
//! ├──────────────────────────────────────────────────┤
//! │  Paginator  (paginator.rs)                       │
//! │  └── Fetching(token) → Done                      │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Service definitions (descriptors, input and output shapes) live in
//! `awscmd-aws`; this crate knows nothing about any particular service.

// ── Sub-modules ─────────────────────────────────────────────────────────

pub mod error;
pub mod operation;
pub mod builder;
pub mod projection;
pub mod wire;
pub mod envelope;
pub mod context;
pub mod invoker;
pub mod paginator;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use builder::{collection, idempotency_token, nested, Nested};
pub use context::{InvocationContext, InvocationOptions};
pub use envelope::{collect_items, Envelope};
pub use error::{InvokeError, InvokeResult, ServiceError};
pub use invoker::Invoker;
pub use operation::{
    DefaultSelect, HttpMethod, Operation, OperationDescriptor, Paginated, Protocol, ServiceSpec,
};
pub use paginator::{paginate, Paginator};
pub use projection::Projection;
pub use wire::{Transport, WireRequest};

pub use tokio_util::sync::CancellationToken;
