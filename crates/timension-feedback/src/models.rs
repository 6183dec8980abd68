use bson::oid::ObjectId;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Document form of a suggestion as stored in the `suggestions`
/// collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl SuggestionRecord {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// A suggestion as surfaced to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<SuggestionRecord> for Suggestion {
    fn from(record: SuggestionRecord) -> Self {
        Self {
            id: record.id.to_hex(),
            text: record.content,
            created_at: record.created_at,
        }
    }
}

/// Fixed demonstration list served whenever the suggestion store is
/// unreachable. Order and content are part of the observable contract.
pub fn sample_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion {
            id: "sample-1".to_string(),
            text: "Let two mentors debate each other while I watch.".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 2, 9, 15, 0).unwrap(),
        },
        Suggestion {
            id: "sample-2".to_string(),
            text: "A weekly edition of the Chronicle I can subscribe to.".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 2, 18, 17, 42, 0).unwrap(),
        },
        Suggestion {
            id: "sample-3".to_string(),
            text: "Show the real timeline next to the simulated one.".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 29, 12, 5, 0).unwrap(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_to_suggestion() {
        let record = SuggestionRecord::new("More pivot points, please");
        let id = record.id.to_hex();
        let suggestion = Suggestion::from(record);

        assert_eq!(suggestion.id, id);
        assert_eq!(suggestion.text, "More pivot points, please");
    }

    #[test]
    fn test_samples_are_three_in_fixed_order() {
        let samples = sample_suggestions();
        assert_eq!(samples.len(), 3);
        assert_eq!(
            samples.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            vec!["sample-1", "sample-2", "sample-3"]
        );
        // Stable across calls.
        assert_eq!(samples, sample_suggestions());
    }
}
