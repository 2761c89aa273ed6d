//! JSON-RPC-style envelope shared by the generator and writer services.
//!
//! Requests look like `{"method": ..., "params": ..., "id": 1}` and responses carry exactly one
//! of `result` or `error`, plus the echoed `id`. There is no `jsonrpc` version field and ids are
//! always integers.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Id used in responses when the request could not be decoded far enough to read its id.
pub const UNKNOWN_REQUEST_ID: i64 = 0;

/// Treats an explicit `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Standard error codes used by the draft services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Body is not a decodable envelope
    ParseError,
    /// `method` does not name a handler on this service
    MethodNotFound,
    /// `params` could not be decoded, or required fields are missing
    InvalidParams,
    /// The handler failed while doing its work (filesystem errors)
    InternalError,
}

impl ErrorCode {
    pub const fn code(self) -> i32 {
        match self {
            ErrorCode::ParseError => -32700,
            ErrorCode::MethodNotFound => -32601,
            ErrorCode::InvalidParams => -32602,
            ErrorCode::InternalError => -32603,
        }
    }

    pub const fn default_message(self) -> &'static str {
        match self {
            ErrorCode::ParseError => "Parse error",
            ErrorCode::MethodNotFound => "Method not found",
            ErrorCode::InvalidParams => "Invalid params",
            ErrorCode::InternalError => "Internal error",
        }
    }
}

/// Request envelope.
///
/// Every field is optional on the wire, and `null` reads the same as absent: `method` becomes the
/// empty string (and so matches no handler), `params` stays `null`, and `id` becomes `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RpcRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub params: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
}

impl RpcRequest {
    /// Decodes a request body.
    ///
    /// # Errors
    ///
    /// Returns a ready-to-send `ParseError` response (id `0`) if the body is not JSON or its
    /// envelope fields have the wrong types.
    pub fn from_slice(body: &[u8]) -> Result<Self, RpcResponse> {
        serde_json::from_slice(body).map_err(|e| {
            tracing::warn!("failed to parse request envelope: {}", e);
            RpcResponse::from_code(UNKNOWN_REQUEST_ID, ErrorCode::ParseError)
        })
    }

    /// Decodes `params` into a method's parameter type.
    ///
    /// Absent or `null` params decode to `T::default()`.
    pub fn params_as<T>(&self) -> Result<T, serde_json::Error>
    where
        T: DeserializeOwned + Default,
    {
        if self.params.is_null() {
            return Ok(T::default());
        }
        T::deserialize(&self.params)
    }
}

/// Error object carried by a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl RpcError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
        }
    }
}

impl From<ErrorCode> for RpcError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code, code.default_message())
    }
}

/// Response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RpcResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    pub id: i64,
}

impl RpcResponse {
    /// Construct a success response with the given result.
    pub fn success(id: i64, result: impl Into<Value>) -> Self {
        Self {
            result: Some(result.into()),
            error: None,
            id,
        }
    }

    /// Construct an error response.
    pub fn error(id: i64, error: RpcError) -> Self {
        Self {
            result: None,
            error: Some(error),
            id,
        }
    }

    /// Construct an error response using the code's standard message.
    pub fn from_code(id: i64, code: ErrorCode) -> Self {
        Self::error(id, code.into())
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
