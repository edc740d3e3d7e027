use crate::gemini::types::GenerateContentResponse;
use crate::models::GroundingSource;

/// Title used when a citation carries none
pub const DEFAULT_SOURCE_TITLE: &str = "Market Index";

/// Collect the web citations of the first candidate, in service order.
///
/// Any missing level (candidates, metadata, chunk list) yields an empty list.
/// Chunks without a `web` object are skipped; duplicates are kept.
pub fn extract_grounding_sources(response: &GenerateContentResponse) -> Vec<GroundingSource> {
    let chunks = response
        .candidates
        .as_ref()
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.grounding_metadata.as_ref())
        .and_then(|metadata| metadata.grounding_chunks.as_ref());

    let Some(chunks) = chunks else {
        return Vec::new();
    };

    chunks
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .map(|web| GroundingSource {
            title: web
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE_TITLE.to_string()),
            uri: web.uri.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn response(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn no_metadata_yields_empty_list() {
        assert!(extract_grounding_sources(&GenerateContentResponse::default()).is_empty());
        assert!(extract_grounding_sources(&response(json!({"candidates": []}))).is_empty());
        let without_metadata = response(json!({"candidates": [{"content": {"parts": []}}]}));
        assert!(extract_grounding_sources(&without_metadata).is_empty());
        assert!(extract_grounding_sources(&response(
            json!({"candidates": [{"groundingMetadata": {"webSearchQueries": ["pune"]}}]})
        ))
        .is_empty());
    }

    #[test]
    fn keeps_web_chunks_in_order() {
        let response = response(json!({
            "candidates": [{
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "https://a.example", "title": "99acres"}},
                        {"retrievedContext": {"uri": "gs://bucket/doc"}},
                        {"web": {"uri": "https://b.example"}},
                        {"web": {"uri": "https://a.example", "title": "99acres"}}
                    ]
                }
            }]
        }));

        assert_eq!(
            extract_grounding_sources(&response),
            vec![
                GroundingSource {
                    title: "99acres".to_string(),
                    uri: "https://a.example".to_string(),
                },
                GroundingSource {
                    title: "Market Index".to_string(),
                    uri: "https://b.example".to_string(),
                },
                GroundingSource {
                    title: "99acres".to_string(),
                    uri: "https://a.example".to_string(),
                },
            ]
        );
    }
}
