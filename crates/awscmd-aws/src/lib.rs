//! # awscmd-aws – AWS transport and service definitions
//!
//! Signs and sends requests for the four services `awscmd` exposes, and
//! declares every operation as a typed [`awscmd_core::Operation`].
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  Service modules                                 │
//! │  secrets · datapipeline · roborunner · s3vectors │
//! │  └── input/output shapes + const descriptors     │
//! ├──────────────────────────────────────────────────┤
//! │  AwsClient  (client.rs)  impl Transport          │
//! │  ├── endpoint resolution + overrides             │
//! │  └── retry with exponential backoff              │
//! ├──────────────────────────────────────────────────┤
//! │  SigV4Signer  (signing.rs)                       │
//! │  └── hmac-sha256 / canonical request / signing   │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## API Protocols
//!
//! | Protocol     | Services                          |
//! |--------------|-----------------------------------|
//! | AWS JSON 1.1 | Secrets Manager, Data Pipeline    |
//! | REST + JSON  | IoT RoboRunner, S3 Vectors        |

// ── Sub-modules ─────────────────────────────────────────────────────────

pub mod config;
pub mod signing;
pub mod client;

// Service definitions
pub mod secrets;
pub mod datapipeline;
pub mod roborunner;
pub mod s3vectors;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use client::AwsClient;
pub use config::{AwsCredentials, AwsProfile, AwsRegion, RetryConfig, SdkConfig, SharedConfigFiles};
