//! Typed result of the LLM-assisted analysis.
//!
//! Field names follow the camelCase JSON the service is asked to
//! produce. All fields are required; a response missing any of them fails
//! to deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};

/// Full structured analysis returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentData {
    pub smart_content_categorization: SmartContentCategorization,
    pub theme_detection: ThemeDetection,
    pub pattern_recognition: PatternRecognition,
    pub content_relationship_mapping: ContentRelationshipMapping,
    pub insights: Insights,
}

/// Categories with one confidence score each (0.0 - 1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartContentCategorization {
    pub categories: Vec<String>,
    pub confidence_scores: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDetection {
    pub themes: Vec<String>,
    pub dominant_theme: String,
}

/// Recognized patterns; `pattern_details[i]` describes `patterns[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRecognition {
    pub patterns: Vec<String>,
    pub pattern_details: Vec<PatternDetail>,
    pub frequency_analysis: FrequencyAnalysis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDetail {
    pub pattern: String,
    pub occurrences: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyAnalysis {
    pub top_patterns: Vec<TopPattern>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPattern {
    pub pattern: String,
    pub frequency: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRelationshipMapping {
    pub relationships: Vec<ContentRelationship>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRelationship {
    pub content_id: String,
    pub relationship_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub organized_insights: Vec<String>,
    pub grouped_themes: GroupedThemes,
}

/// Grouped themes. The schema asks for a single `themeCounts` object,
/// not a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedThemes {
    pub themes: Vec<String>,
    pub theme_counts: ThemeCount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCount {
    pub theme: String,
    pub count: u64,
}

impl ContentData {
    /// Parses and validates a JSON document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::ai::ContentData;
    ///
    /// let err = ContentData::from_json(r#"{"themeDetection": {}}"#).unwrap_err();
    /// assert!(err.to_string().contains("JSON error"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let data: ContentData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Checks the cross-field invariants serde cannot express.
    ///
    /// - one confidence score per category, each finite
    /// - one detail record per pattern
    pub fn validate(&self) -> Result<()> {
        let cat = &self.smart_content_categorization;
        if cat.categories.len() != cat.confidence_scores.len() {
            return Err(ChatlensError::schema(
                "smartContentCategorization",
                format!(
                    "{} categories but {} confidence scores",
                    cat.categories.len(),
                    cat.confidence_scores.len()
                ),
            ));
        }
        if let Some(pos) = cat.confidence_scores.iter().position(|s| !s.is_finite()) {
            return Err(ChatlensError::schema(
                "smartContentCategorization",
                format!("confidence score #{} is not a finite number", pos + 1),
            ));
        }

        let pat = &self.pattern_recognition;
        if pat.patterns.len() != pat.pattern_details.len() {
            return Err(ChatlensError::schema(
                "patternRecognition",
                format!(
                    "{} patterns but {} pattern details",
                    pat.patterns.len(),
                    pat.pattern_details.len()
                ),
            ));
        }

        Ok(())
    }

    /// `(category, score)` pairs in the order the service returned them.
    pub fn scored_categories(&self) -> impl Iterator<Item = (&str, f64)> {
        let cat = &self.smart_content_categorization;
        cat.categories
            .iter()
            .map(String::as_str)
            .zip(cat.confidence_scores.iter().copied())
    }

    /// `(pattern, occurrences)` pairs in the order the service returned them.
    pub fn pattern_occurrences(&self) -> impl Iterator<Item = (&str, u64)> {
        let pat = &self.pattern_recognition;
        pat.patterns
            .iter()
            .map(String::as_str)
            .zip(pat.pattern_details.iter().map(|d| d.occurrences))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// A well-formed response body as the service would send it.
    pub const SAMPLE_JSON: &str = r#"{
        "smartContentCategorization": {
            "categories": ["Links", "Reading", "Notes"],
            "confidenceScores": [0.92, 0.81, 0.455]
        },
        "themeDetection": {
            "themes": ["Learning", "Productivity"],
            "dominantTheme": "Learning"
        },
        "patternRecognition": {
            "patterns": ["Morning links", "Book mentions"],
            "patternDetails": [
                {"pattern": "Morning links", "occurrences": 3},
                {"pattern": "Book mentions", "occurrences": 1}
            ],
            "frequencyAnalysis": {
                "topPatterns": [{"pattern": "Morning links", "frequency": 3}]
            }
        },
        "contentRelationshipMapping": {
            "relationships": [{"contentId": "1", "relationshipType": "references"}]
        },
        "insights": {
            "organizedInsights": ["Most links are shared before noon"],
            "groupedThemes": {
                "themes": ["Learning"],
                "themeCounts": {"theme": "Learning", "count": 4}
            }
        }
    }"#;
}

#[cfg(test)]
mod tests {
    use super::fixtures::SAMPLE_JSON;
    use super::*;

    #[test]
    fn test_parse_sample() {
        let data = ContentData::from_json(SAMPLE_JSON).unwrap();
        assert_eq!(data.theme_detection.dominant_theme, "Learning");
        assert_eq!(data.pattern_recognition.pattern_details[0].occurrences, 3);
        assert_eq!(data.insights.grouped_themes.theme_counts.count, 4);
        assert_eq!(
            data.content_relationship_mapping.relationships[0].relationship_type,
            "references"
        );
    }

    #[test]
    fn test_missing_section_fails() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE_JSON).unwrap();
        value.as_object_mut().unwrap().remove("insights");
        let err = ContentData::from_json(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("insights"));
    }

    #[test]
    fn test_mismatched_scores_fail_validation() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE_JSON).unwrap();
        value["smartContentCategorization"]["confidenceScores"] = serde_json::json!([0.5]);
        let err = ContentData::from_json(&value.to_string()).unwrap_err();
        assert!(err.is_schema());
        assert!(err.to_string().contains("3 categories but 1 confidence scores"));
    }

    #[test]
    fn test_mismatched_pattern_details_fail_validation() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE_JSON).unwrap();
        value["patternRecognition"]["patterns"] = serde_json::json!(["only one", "two", "three"]);
        let err = ContentData::from_json(&value.to_string()).unwrap_err();
        assert!(err.is_schema());
        assert!(err.to_string().contains("patternRecognition"));
    }

    #[test]
    fn test_negative_occurrences_fail_to_parse() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE_JSON).unwrap();
        value["patternRecognition"]["patternDetails"][0]["occurrences"] = serde_json::json!(-1);
        assert!(ContentData::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn test_scored_categories_and_patterns() {
        let data = ContentData::from_json(SAMPLE_JSON).unwrap();
        let scored: Vec<_> = data.scored_categories().collect();
        assert_eq!(scored[0], ("Links", 0.92));
        let patterns: Vec<_> = data.pattern_occurrences().collect();
        assert_eq!(patterns, vec![("Morning links", 3), ("Book mentions", 1)]);
    }

    #[test]
    fn test_round_trip_keeps_camel_case() {
        let data = ContentData::from_json(SAMPLE_JSON).unwrap();
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("smartContentCategorization"));
        assert!(json.contains("dominantTheme"));
        assert!(json.contains("themeCounts"));
    }
}
