use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::ValyuConfig;
use crate::error::ValyuError;
use crate::normalize::string_field;
use crate::tool::Tool;

/// Normalized full-page extraction for one URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
    pub url: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ContentMetadata>,
}

/// Page metadata, present when the API returned any of its fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Extract full page content and metadata for a set of URLs.
///
/// Issues one `POST {base_url}/v1/contents` per call and returns either a
/// `{contents, extracted_count, total_requested}` payload, a
/// `{message, suggestion}` payload when nothing could be extracted, or an
/// `"Error: ..."` string the model can act on.
pub struct ContentsTool {
    config: ValyuConfig,
    client: reqwest::Client,
}

impl ContentsTool {
    /// Create a new contents tool over the given configuration.
    pub fn new(config: ValyuConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Tool for ContentsTool {
    fn name(&self) -> &'static str {
        "valyu_contents"
    }

    fn description(&self) -> &'static str {
        "Extract the complete text content and metadata (author, date, \
         description) of web pages using Valyu's Contents API. Use this when \
         the full text of a specific URL is needed, for example when the user \
         provides a URL or a search snippet is not enough."
    }

    fn parameters(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "urls": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "URLs to extract content from"
                }
            },
            "required": ["urls"]
        }))
    }

    async fn call(&self, args: Value) -> Result<Value, ValyuError> {
        let urls = parse_urls(&args)?;

        if self.config.api_key.is_empty() {
            return Ok(Value::String(
                "Error: Valyu API key not configured. Set it in the configuration \
                 or via the VALYU_API_KEY environment variable."
                    .to_string(),
            ));
        }

        if urls.is_empty() {
            return Ok(Value::String(
                "Error: Please provide at least one URL to extract content from.".to_string(),
            ));
        }

        let url = format!("{}/v1/contents", self.config.base_url.trim_end_matches('/'));
        let extract_effort = if self.config.fast_mode { "normal" } else { "high" };
        let body = json!({
            "urls": urls,
            "response_length": self.config.response_length,
            "extract_effort": extract_effort,
        });

        let response = match self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Error calling Valyu Contents API: {e}");
                return Ok(Value::String(format!(
                    "Error: Failed to extract content - {e}"
                )));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            tracing::warn!("Valyu Contents API error: {} - {body_text}", status.as_u16());
            return Ok(Value::String(format!(
                "Error: Failed to extract content. Status: {}",
                status.as_u16()
            )));
        }

        let data: Value = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Error calling Valyu Contents API: {e}");
                return Ok(Value::String(format!(
                    "Error: Failed to extract content - {e}"
                )));
            }
        };

        let raw_contents = match data.get("contents").and_then(Value::as_array) {
            Some(contents) if !contents.is_empty() => contents,
            _ => {
                return Ok(json!({
                    "message": "No content could be extracted from the provided URLs.",
                    "suggestion": "Check if the URLs are valid and accessible.",
                }));
            }
        };

        let contents: Vec<ContentRecord> = raw_contents.iter().map(map_content).collect();
        tracing::debug!(
            "Valyu contents extracted {} of {} requested URLs",
            contents.len(),
            urls.len()
        );

        Ok(json!({
            "contents": contents,
            "extracted_count": contents.len(),
            "total_requested": urls.len(),
        }))
    }
}

fn parse_urls(args: &Value) -> Result<Vec<String>, ValyuError> {
    args.get("urls")
        .and_then(Value::as_array)
        .ok_or_else(|| ValyuError::Tool("missing or non-array 'urls'".to_string()))?
        .iter()
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| ValyuError::Tool("'urls' must be an array of strings".to_string()))
        })
        .collect()
}

fn map_content(raw: &Value) -> ContentRecord {
    ContentRecord {
        url: string_field(raw, "url").unwrap_or_default(),
        title: string_field(raw, "title").unwrap_or_else(|| "Untitled".to_string()),
        content: string_field(raw, "content").unwrap_or_default(),
        metadata: content_metadata(raw),
    }
}

fn content_metadata(raw: &Value) -> Option<ContentMetadata> {
    let author = string_field(raw, "author");
    let published_date = string_field(raw, "published_date");
    let description = string_field(raw, "description");
    if author.is_none() && published_date.is_none() && description.is_none() {
        return None;
    }
    Some(ContentMetadata {
        author,
        published_date,
        description,
    })
}
