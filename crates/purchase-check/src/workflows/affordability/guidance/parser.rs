use serde_json::{Map, Value};

use super::KeyInsight;

/// Fields salvaged from advisory output. Anything malformed is already dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct SanitizedGuidance {
    pub guidance: String,
    pub key_insights: Vec<KeyInsight>,
    pub safer_alternatives: Vec<String>,
}

/// Outermost `{ ... }` span: first opening brace through the last closing brace.
pub(crate) fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then_some(&raw[start..=end])
}

/// Parses the embedded JSON object, if any. Non-object JSON counts as absent.
pub(crate) fn parse_object(raw: &str) -> Option<Map<String, Value>> {
    let candidate = extract_json_object(raw)?;
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(object)) => Some(object),
        Ok(_) => None,
        Err(err) => {
            tracing::debug!(error = %err, "advisory output contained unparseable JSON");
            None
        }
    }
}

/// Field-by-field salvage of advisory text.
///
/// `guidance` falls back to the whole raw text when the structured field is
/// missing or not a string; list entries that do not match their shape are
/// dropped rather than repaired.
pub(crate) fn sanitize(raw: &str) -> SanitizedGuidance {
    let object = parse_object(raw);
    let object = object.as_ref();

    let guidance = match field(object, "guidance") {
        Some(Value::String(text)) => text.trim().to_string(),
        _ => raw.trim().to_string(),
    };

    let key_insights = match field(object, "key_insights") {
        Some(Value::Array(items)) => items.iter().filter_map(key_insight).collect(),
        _ => Vec::new(),
    };

    let safer_alternatives = match field(object, "safer_alternatives") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    SanitizedGuidance {
        guidance,
        key_insights,
        safer_alternatives,
    }
}

fn field<'a>(object: Option<&'a Map<String, Value>>, name: &str) -> Option<&'a Value> {
    object.and_then(|object| object.get(name))
}

fn key_insight(item: &Value) -> Option<KeyInsight> {
    let object = item.as_object()?;
    let title = non_empty_str(object.get("title"))?;
    let detail = non_empty_str(object.get("detail"))?;
    Some(KeyInsight { title, detail })
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    let trimmed = value?.as_str()?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_outermost_object_from_surrounding_prose() {
        let raw = "Here you go:\n```json\n{\"guidance\": \"ok\", \"nested\": {\"a\": 1}}\n```\nThanks";
        assert_eq!(
            extract_json_object(raw),
            Some("{\"guidance\": \"ok\", \"nested\": {\"a\": 1}}")
        );
    }

    #[test]
    fn no_candidate_without_both_braces() {
        assert_eq!(extract_json_object("plain advice"), None);
        assert_eq!(extract_json_object("only { opening"), None);
        assert_eq!(extract_json_object("} reversed {"), None);
    }

    #[test]
    fn non_object_json_is_treated_as_unstructured() {
        let sanitized = sanitize("  [1, 2, 3]  ");
        assert_eq!(sanitized.guidance, "[1, 2, 3]");
        assert!(sanitized.key_insights.is_empty());
    }

    #[test]
    fn non_string_guidance_falls_back_to_raw_text() {
        let raw = " {\"guidance\": 42, \"safer_alternatives\": [\"Wait a month\"]} ";
        let sanitized = sanitize(raw);
        assert_eq!(sanitized.guidance, raw.trim());
        assert_eq!(sanitized.safer_alternatives, vec!["Wait a month".to_string()]);
    }

    #[test]
    fn insight_entries_are_trimmed_and_filtered() {
        let raw = r#"{
            "guidance": "  Keep building savings.  ",
            "key_insights": [
                {"title": "  Buffer  ", "detail": "  Savings cover three months.  "},
                {"title": "Missing detail"},
                {"title": "   ", "detail": "blank title"},
                {"title": "Numeric", "detail": 7},
                "not an object"
            ]
        }"#;

        let sanitized = sanitize(raw);

        assert_eq!(sanitized.guidance, "Keep building savings.");
        assert_eq!(
            sanitized.key_insights,
            vec![KeyInsight {
                title: "Buffer".to_string(),
                detail: "Savings cover three months.".to_string(),
            }]
        );
    }

    #[test]
    fn alternatives_must_be_a_list_of_strings() {
        let sanitized = sanitize(r#"{"guidance": "g", "safer_alternatives": "save first"}"#);
        assert!(sanitized.safer_alternatives.is_empty());

        let sanitized =
            sanitize(r#"{"guidance": "g", "safer_alternatives": ["", " Rent instead ", 3, null]}"#);
        assert_eq!(sanitized.safer_alternatives, vec!["Rent instead".to_string()]);
    }
}
