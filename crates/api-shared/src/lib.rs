//! # API Shared
//!
//! Shared contract for the draft services.
//!
//! Contains:
//! - The JSON-RPC-style request/response envelope and error codes (`rpc` module)
//! - Method names and parameter shapes (`methods` module)
//! - `HealthService`, used by both services' `/health` routes
//! - Listen-address configuration
//!
//! Used by `api-generator` and `api-writer` so the envelope is defined once.

pub mod config;
pub mod health;
pub mod methods;
pub mod rpc;

pub use health::{HealthRes, HealthService};
pub use methods::{GenerateMarkdownParams, WriteJekyllDraftParams};
pub use rpc::{ErrorCode, RpcError, RpcRequest, RpcResponse};
