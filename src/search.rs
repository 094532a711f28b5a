use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::ValyuConfig;
use crate::error::ValyuError;
use crate::normalize::{first_text_field, string_field};
use crate::tool::Tool;

/// One normalized DeepSearch result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    /// Result text, taken from the first populated content field the API
    /// returned (`content`, `text`, `snippet`, `description`, `full_text`,
    /// `body`). Not truncated by this layer.
    pub snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Search across web, academic, and financial sources with Valyu DeepSearch.
///
/// Issues one `POST {base_url}/v1/deepsearch` per call and returns either a
/// `{results, total_results, hint}` payload, a `{message, suggestion}` payload
/// when the query matched nothing, or an `"Error: ..."` string the model can
/// act on.
pub struct DeepSearchTool {
    config: ValyuConfig,
    client: reqwest::Client,
}

impl DeepSearchTool {
    /// Create a new search tool over the given configuration.
    pub fn new(config: ValyuConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Tool for DeepSearchTool {
    fn name(&self) -> &'static str {
        "valyu_deepsearch"
    }

    fn description(&self) -> &'static str {
        "Search across web, academic papers, and financial data using Valyu's \
         DeepSearch API. Returns ranked results with full-text snippets, \
         citations, and metadata. Prefer this over valyu_contents; only fetch \
         full page content when the snippet is not enough or the user provides \
         a specific URL."
    }

    fn parameters(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of results to return (default: 10)"
                }
            },
            "required": ["query"]
        }))
    }

    async fn call(&self, args: Value) -> Result<Value, ValyuError> {
        let query = args
            .get("query")
            .and_then(Value::as_str)
            .ok_or_else(|| ValyuError::Tool("missing or non-string 'query'".to_string()))?;
        let max_results = args
            .get("max_results")
            .and_then(Value::as_u64)
            .unwrap_or(u64::from(self.config.max_results));

        if self.config.api_key.is_empty() {
            return Ok(Value::String(
                "Error: Valyu API key not configured. Set it in the configuration \
                 or via the VALYU_API_KEY environment variable."
                    .to_string(),
            ));
        }

        let url = format!(
            "{}/v1/deepsearch",
            self.config.base_url.trim_end_matches('/')
        );
        let body = json!({
            "query": query,
            "max_num_results": max_results,
            "response_length": self.config.response_length,
            "fast_mode": self.config.fast_mode,
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
                tracing::warn!("Error calling Valyu API: {e}");
                return Ok(Value::String(format!(
                    "Error: Failed to perform search - {e}"
                )));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            tracing::warn!("Valyu API error: {} - {body_text}", status.as_u16());
            return Ok(Value::String(format!(
                "Error: Failed to search. Status: {}",
                status.as_u16()
            )));
        }

        let data: Value = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Error calling Valyu API: {e}");
                return Ok(Value::String(format!(
                    "Error: Failed to perform search - {e}"
                )));
            }
        };

        let raw_results = match data.get("results").and_then(Value::as_array) {
            Some(results) if !results.is_empty() => results,
            _ => {
                return Ok(json!({
                    "message": "No results found for your query.",
                    "suggestion": "Try different search terms or a broader query.",
                }));
            }
        };

        let results: Vec<SearchResult> = raw_results.iter().map(map_result).collect();
        let total_results = data
            .get("total_results")
            .and_then(Value::as_u64)
            .unwrap_or(results.len() as u64);
        tracing::debug!("Valyu deepsearch returned {} results", results.len());

        Ok(json!({
            "results": results,
            "total_results": total_results,
            "hint": format!(
                "Found {} results. The snippets above contain the search results.",
                results.len()
            ),
        }))
    }
}

fn map_result(raw: &Value) -> SearchResult {
    SearchResult {
        title: string_field(raw, "title").unwrap_or_else(|| "Untitled".to_string()),
        url: string_field(raw, "url").unwrap_or_default(),
        snippet: first_text_field(raw).unwrap_or_default(),
        relevance_score: raw.get("relevance_score").and_then(Value::as_f64),
        author: string_field(raw, "author"),
        published_date: string_field(raw, "published_date"),
        source: string_field(raw, "source"),
    }
}
