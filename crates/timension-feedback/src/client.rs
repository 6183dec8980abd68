use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use timension_types::Outcome;

use crate::error::{FeedbackError, Result};
use crate::models::{sample_suggestions, Suggestion, SuggestionRecord};

/// Read path cap: the 50 most recent suggestions.
pub const SUGGESTION_LIMIT: i64 = 50;

/// Client for the `suggestions` collection.
///
/// The public surface never errors: reads fall back to the fixed
/// demonstration list and writes report a plain `bool`, so a missing
/// suggestion box never takes the rest of the app down with it.
pub struct FeedbackClient {
    collection: Collection<SuggestionRecord>,
}

impl FeedbackClient {
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| FeedbackError::Connection(e.to_string()))?;

        Ok(Self {
            collection: client.database(db_name).collection("suggestions"),
        })
    }

    /// Most recent suggestions, newest first, capped at
    /// [`SUGGESTION_LIMIT`]. Any failure serves the demonstration list;
    /// the `Outcome` discriminant tells the two apart.
    pub async fn list_suggestions(&self) -> Outcome<Vec<Suggestion>> {
        match self.fetch_recent().await {
            Ok(records) => {
                Outcome::Generated(records.into_iter().map(Suggestion::from).collect())
            }
            Err(e) => {
                tracing::warn!(error = %e, "suggestion fetch failed, serving samples");
                Outcome::Fallback(sample_suggestions())
            }
        }
    }

    async fn fetch_recent(&self) -> Result<Vec<SuggestionRecord>> {
        let records = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(SUGGESTION_LIMIT)
            .await?
            .try_collect()
            .await?;
        Ok(records)
    }

    /// Insert one suggestion; duplicate submissions produce duplicate
    /// records.
    pub async fn submit_suggestion(&self, text: &str) -> bool {
        let record = SuggestionRecord::new(text);
        match self.collection.insert_one(&record).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "suggestion insert failed");
                false
            }
        }
    }
}
