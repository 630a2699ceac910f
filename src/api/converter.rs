//! Data conversion for API responses.

use crate::state::Headline;
use serde::Deserialize;

/// Wire format of a single headline record.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlineRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub source: Option<String>,
}

/// Converts API responses to internal state types.
pub struct DataConverter;

impl DataConverter {
    /// Extract headlines from a news feed response body.
    ///
    /// A missing or malformed `headlines` array is treated as an empty
    /// feed, not an error. Items that are not objects, fail to decode, or
    /// carry an empty title are skipped.
    pub fn convert_feed(body: &serde_json::Value) -> Vec<Headline> {
        let Some(items) = body.get("headlines").and_then(|v| v.as_array()) else {
            tracing::debug!("news response carried no headline list");
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| serde_json::from_value::<HeadlineRecord>(item.clone()).ok())
            .filter_map(Self::convert_headline)
            .collect()
    }

    /// Convert a wire headline record to the internal type.
    pub fn convert_headline(record: HeadlineRecord) -> Option<Headline> {
        if record.title.is_empty() {
            return None;
        }

        let link = if record.link.is_empty() {
            "#".to_string()
        } else {
            record.link
        };

        let mut headline = Headline::new(record.title, link);
        if let Some(source) = record.source.filter(|s| !s.is_empty()) {
            headline = headline.with_source(source);
        }
        Some(headline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_convert_feed() {
        let body = json!({
            "headlines": [
                { "title": "TCS shares rally", "link": "https://example.com/1" },
                { "title": "Gold prices fall", "link": "https://example.com/2", "source": "Wire" },
            ]
        });

        let headlines = DataConverter::convert_feed(&body);

        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0].title, "TCS shares rally");
        assert_eq!(headlines[1].source.as_deref(), Some("Wire"));
    }

    #[test]
    fn test_missing_list_is_empty_feed() {
        assert_eq!(DataConverter::convert_feed(&json!({})), vec![]);
        assert_eq!(
            DataConverter::convert_feed(&json!({ "headlines": "oops" })),
            vec![]
        );
        assert_eq!(DataConverter::convert_feed(&json!(null)), vec![]);
    }

    #[test]
    fn test_malformed_items_are_skipped() {
        let body = json!({
            "headlines": [
                42,
                { "link": "https://example.com/untitled" },
                { "title": "INFY wins mega deal" },
            ]
        });

        let headlines = DataConverter::convert_feed(&body);

        assert_eq!(headlines.len(), 1);
        assert_eq!(headlines[0].title, "INFY wins mega deal");
        assert_eq!(headlines[0].link, "#");
    }
}
