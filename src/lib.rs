//! Valyu DeepSearch and Contents API tools for LLM agents.
//!
//! This crate provides two [`Tool`] implementations backed by the
//! [Valyu API](https://platform.valyu.network/):
//!
//! - [`DeepSearchTool`]: web, academic, and financial search with ranked,
//!   full-text results
//! - [`ContentsTool`]: full page content and metadata extraction for a set
//!   of URLs
//!
//! Upstream failures (HTTP errors, transport errors, missing API key) are
//! returned to the model as `"Error: ..."` strings rather than propagated,
//! so a host agent loop never aborts on a failed lookup; details go to
//! `tracing` at warn level.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use serde_json::json;
//! use valyu_tools::{DeepSearchTool, Tool, ValyuConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ValyuConfig::from_env()
//!     .with_max_results(5)
//!     .with_response_length("large");
//! let tool = DeepSearchTool::new(config);
//!
//! let result = tool.call(json!({"query": "Rust programming language"})).await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

mod config;
mod contents;
mod error;
mod normalize;
mod search;
mod tool;

pub use config::{ValyuConfig, API_KEY_ENV};
pub use contents::{ContentMetadata, ContentRecord, ContentsTool};
pub use error::ValyuError;
pub use search::{DeepSearchTool, SearchResult};
pub use tool::{Tool, ToolDefinition};

use std::sync::Arc;

/// Construct both Valyu tools from one configuration snapshot.
///
/// The configuration is resolved once and cloned into each tool; the tools
/// share no mutable state and may be called concurrently.
pub fn valyu_tools(config: &ValyuConfig) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(DeepSearchTool::new(config.clone())),
        Arc::new(ContentsTool::new(config.clone())),
    ]
}
