//! JSON schema the service must answer with.
//!
//! Every object lists all of its properties as required and forbids
//! extras, which is what strict structured-output mode expects.

use serde_json::{Value, json};

/// Name under which the schema is registered in the request.
pub const SCHEMA_NAME: &str = "content_analysis_schema";

fn string_array(description: &str) -> Value {
    json!({
        "description": description,
        "type": "array",
        "items": { "type": "string" }
    })
}

fn object(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false
    })
}

/// Builds the `content_analysis_schema` document.
pub fn response_schema() -> Value {
    let categorization = object(
        json!({
            "categories": string_array("List of identified content categories"),
            "confidenceScores": {
                "description": "Confidence scores associated with each category",
                "type": "array",
                "items": { "type": "number" }
            }
        }),
        &["categories", "confidenceScores"],
    );

    let themes = object(
        json!({
            "themes": string_array("List of identified themes in the content"),
            "dominantTheme": {
                "description": "The most dominant theme identified",
                "type": "string"
            }
        }),
        &["themes", "dominantTheme"],
    );

    let pattern_detail = object(
        json!({
            "pattern": { "description": "The pattern recognized", "type": "string" },
            "occurrences": {
                "description": "Number of occurrences of the pattern",
                "type": "integer"
            }
        }),
        &["pattern", "occurrences"],
    );

    let top_pattern = object(
        json!({
            "pattern": { "description": "The pattern", "type": "string" },
            "frequency": { "description": "The frequency of the pattern", "type": "integer" }
        }),
        &["pattern", "frequency"],
    );

    let mut frequency_analysis = object(
        json!({
            "topPatterns": {
                "description": "Top patterns identified by frequency",
                "type": "array",
                "items": top_pattern
            }
        }),
        &["topPatterns"],
    );
    frequency_analysis["description"] = json!("Basic frequency analysis of the patterns");

    let patterns = object(
        json!({
            "patterns": string_array("List of recognized patterns in the content"),
            "patternDetails": {
                "description": "Detailed information about each pattern",
                "type": "array",
                "items": pattern_detail
            },
            "frequencyAnalysis": frequency_analysis
        }),
        &["patterns", "patternDetails", "frequencyAnalysis"],
    );

    let relationship = object(
        json!({
            "contentId": { "description": "Identifier for the content", "type": "string" },
            "relationshipType": {
                "description": "Type of relationship with the content",
                "type": "string"
            }
        }),
        &["contentId", "relationshipType"],
    );

    let relationships = object(
        json!({
            "relationships": {
                "description": "Relationships between different content pieces",
                "type": "array",
                "items": relationship
            }
        }),
        &["relationships"],
    );

    let mut theme_counts = object(
        json!({
            "theme": { "description": "Theme name", "type": "string" },
            "count": { "description": "Number of occurrences", "type": "integer" }
        }),
        &["theme", "count"],
    );
    theme_counts["description"] = json!("Counts of themes in the grouped insights");

    let mut grouped_themes = object(
        json!({
            "themes": string_array("Grouped themes"),
            "themeCounts": theme_counts
        }),
        &["themes", "themeCounts"],
    );
    grouped_themes["description"] = json!("Grouped similar topics/themes");

    let insights = object(
        json!({
            "organizedInsights": string_array("Clean and organized insights from the content analysis"),
            "groupedThemes": grouped_themes
        }),
        &["organizedInsights", "groupedThemes"],
    );

    object(
        json!({
            "smartContentCategorization": categorization,
            "themeDetection": themes,
            "patternRecognition": patterns,
            "contentRelationshipMapping": relationships,
            "insights": insights
        }),
        &[
            "smartContentCategorization",
            "themeDetection",
            "patternRecognition",
            "contentRelationshipMapping",
            "insights",
        ],
    )
}

/// The `response_format` request field wrapping [`response_schema`].
pub fn response_format() -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": SCHEMA_NAME,
            "strict": true,
            "schema": response_schema()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(value: &Value) -> Vec<&str> {
        value["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_all_sections_required() {
        let schema = response_schema();
        assert_eq!(
            required(&schema),
            vec![
                "smartContentCategorization",
                "themeDetection",
                "patternRecognition",
                "contentRelationshipMapping",
                "insights"
            ]
        );
        assert_eq!(schema["additionalProperties"], json!(false));
    }

    #[test]
    fn test_nested_objects_are_closed() {
        fn walk(value: &Value, count: &mut usize) {
            if value.get("type") == Some(&json!("object")) {
                *count += 1;
                assert_eq!(value["additionalProperties"], json!(false), "{value}");
                let props = value["properties"].as_object().unwrap();
                let mut keys: Vec<_> = props.keys().map(String::as_str).collect();
                let mut req = required(value);
                keys.sort_unstable();
                req.sort_unstable();
                assert_eq!(keys, req);
            }
            match value {
                Value::Object(map) => map.values().for_each(|v| walk(v, count)),
                Value::Array(items) => items.iter().for_each(|v| walk(v, count)),
                _ => {}
            }
        }

        let mut count = 0;
        walk(&response_schema(), &mut count);
        // root + 5 sections + detail + frequency + top pattern + relationship
        // + grouped themes + theme counts
        assert_eq!(count, 12);
    }

    #[test]
    fn test_theme_counts_is_single_object() {
        let schema = response_schema();
        let theme_counts =
            &schema["properties"]["insights"]["properties"]["groupedThemes"]["properties"]["themeCounts"];
        assert_eq!(theme_counts["type"], json!("object"));
    }

    #[test]
    fn test_response_format_wrapper() {
        let format = response_format();
        assert_eq!(format["type"], "json_schema");
        assert_eq!(format["json_schema"]["name"], SCHEMA_NAME);
        assert_eq!(format["json_schema"]["strict"], json!(true));
    }
}
