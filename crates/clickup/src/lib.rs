//! # ClickUp SDK
//!
//! Rust client for the ClickUp v2 REST API:
//! - One transport that builds, sends and classifies every request
//! - Typed API errors carrying the HTTP status and the server's message
//! - Per-call cancellation and deadlines through [`CallContext`]
//! - Streaming single-part multipart uploads
//! - Typed services for workspaces, spaces, folders, lists, tasks, comments,
//!   attachments, webhooks, time tracking and goals
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clickup::{CallContext, Client, TaskListParams};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder().credential("pk_...").build()?;
//!     let ctx = CallContext::background().with_timeout(Duration::from_secs(10));
//!
//!     let page = client
//!         .tasks()
//!         .list(&ctx, "901", &TaskListParams::new().include_closed(true))
//!         .await?;
//!     for task in page.tasks {
//!         println!("{} {}", task.id, task.name);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use context::CallContext;
pub use error::{ApiError, Error, ErrorKind, Result};
pub use http::{MultipartUpload, RequestDescriptor, Response, Transport};
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod observability;
pub mod resources;
pub mod types;

// Re-export key dependencies for convenience
pub use tokio_util::sync::CancellationToken;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use clickup::prelude::*;
/// ```
pub mod prelude {

    pub use crate::{
        ApiError, CallContext, CancellationToken, Client, ClientConfig, Error, ErrorKind, Result,
        types::{CreateTaskRequest, Task, TaskListParams, UpdateTaskRequest},
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com/api";
