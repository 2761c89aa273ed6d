//! Method names and parameter shapes for the draft services.
//!
//! Parameter decoding is lenient: unknown fields are ignored, and absent or `null` fields are
//! read as empty strings or empty lists. Required-field checks happen in the handlers.

use crate::rpc::null_as_default;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Method served by the generator service.
pub const GENERATE_MARKDOWN: &str = "generateMarkdown";

/// Method served by the writer service.
pub const WRITE_JEKYLL_DRAFT: &str = "writeJekyllDraft";

/// Result returned by `writeJekyllDraft` on success.
pub const WRITTEN_RESULT: &str = "written";

/// Params for `generateMarkdown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerateMarkdownParams {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
}

/// Params for `writeJekyllDraft`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WriteJekyllDraftParams {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub series: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    /// Site root; the draft is written to `<path>/_drafts/`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_params_missing_fields_are_empty() {
        let params: GenerateMarkdownParams = serde_json::from_str(r#"{"title":"T"}"#).unwrap();
        assert_eq!(params.title, "T");
        assert_eq!(params.notes, "");
    }

    #[test]
    fn test_write_params_null_and_unknown_fields() {
        let params: WriteJekyllDraftParams = serde_json::from_str(
            r#"{"title":"T","tags":null,"categories":["a","b"],"series":null,"extra":1,"path":"/p"}"#,
        )
        .unwrap();
        assert_eq!(params.title, "T");
        assert!(params.tags.is_empty());
        assert_eq!(params.categories, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(params.series, "");
        assert_eq!(params.path, "/p");
    }

    #[test]
    fn test_write_params_wrong_type_is_rejected() {
        let result: Result<WriteJekyllDraftParams, _> =
            serde_json::from_str(r#"{"title":"T","tags":"not-a-list"}"#);
        assert!(result.is_err());
    }
}
