use anyhow::Result;
use std::sync::Arc;

use timension_content::{atlas, mentor, newspaper, timeline};
use timension_content::{AlternateHistory, NewspaperEdition};
use timension_feedback::{sample_suggestions, FeedbackClient, Suggestion};
use timension_gen::{
    CredentialHost, CredentialStore, EncodedImage, GeminiClient, GenerativeService,
};
use timension_types::{ConversationTurn, HistoricalFigure, Outcome, PivotEvent};

/// Builder wiring the credential store, generative client, optional
/// suggestion box, and optional host credential hook into one facade.
pub struct TimensionBuilder {
    credentials: Option<CredentialStore>,
    generative: Option<Arc<dyn GenerativeService>>,
    feedback: Option<FeedbackClient>,
    host: Option<Arc<dyn CredentialHost>>,
}

impl TimensionBuilder {
    pub fn new() -> Self {
        Self {
            credentials: None,
            generative: None,
            feedback: None,
            host: None,
        }
    }

    /// Thread in an explicit credential store; defaults to
    /// `CredentialStore::from_env()`.
    pub fn credentials(mut self, store: CredentialStore) -> Self {
        self.credentials = Some(store);
        self
    }

    /// Replace the generative backend (tests, alternative providers);
    /// defaults to a `GeminiClient` over the credential store.
    pub fn generative(mut self, service: Arc<dyn GenerativeService>) -> Self {
        self.generative = Some(service);
        self
    }

    pub fn feedback(mut self, client: FeedbackClient) -> Self {
        self.feedback = Some(client);
        self
    }

    pub fn credential_host(mut self, host: Arc<dyn CredentialHost>) -> Self {
        self.host = Some(host);
        self
    }

    pub fn build(self) -> Result<Timension> {
        let credentials = self.credentials.unwrap_or_else(CredentialStore::from_env);
        let generative = match self.generative {
            Some(service) => service,
            None => Arc::new(GeminiClient::new(credentials.clone())?),
        };

        Ok(Timension {
            credentials,
            generative,
            feedback: self.feedback,
            host: self.host,
        })
    }
}

impl Default for TimensionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The single surface the UI layer drives. Every method resolves to a
/// renderable value; failures arrive as absent results or fixed fallback
/// content, never as errors.
pub struct Timension {
    credentials: CredentialStore,
    generative: Arc<dyn GenerativeService>,
    feedback: Option<FeedbackClient>,
    host: Option<Arc<dyn CredentialHost>>,
}

impl Timension {
    pub fn builder() -> TimensionBuilder {
        TimensionBuilder::new()
    }

    // --- credential policy ------------------------------------------------

    /// Store a user-supplied token for the rest of the session. An
    /// environment-injected credential still wins.
    pub fn set_credential(&self, token: impl Into<String>) {
        self.credentials.set(token);
    }

    pub fn has_credential(&self) -> bool {
        self.credentials.has_credential()
    }

    /// Whether a credential is available here or already selected in the
    /// embedding host.
    pub async fn credential_selected(&self) -> bool {
        if self.credentials.has_credential() {
            return true;
        }
        match &self.host {
            Some(host) => host.has_selected_credential().await,
            None => false,
        }
    }

    /// Make a credential available, asking the embedding host to run its
    /// selection flow when one is wired in. Resolves to whether a
    /// credential is available afterwards.
    pub async fn ensure_credential(&self) -> bool {
        if self.credentials.has_credential() {
            return true;
        }
        let Some(host) = &self.host else {
            return false;
        };
        if let Some(token) = host.request_credential_selection().await {
            self.credentials.set(token);
        }
        self.credentials.has_credential()
    }

    /// The one blocking check surfaced at login.
    pub async fn test_connectivity(&self) -> bool {
        self.generative.test_connectivity().await
    }

    // --- content generators -----------------------------------------------

    pub async fn daily_edition(&self) -> Option<NewspaperEdition> {
        newspaper::daily_edition(self.generative.as_ref()).await
    }

    pub async fn mentor_reply(
        &self,
        figure: &HistoricalFigure,
        history: &[ConversationTurn],
        user_text: &str,
    ) -> Outcome<String> {
        mentor::mentor_reply(self.generative.as_ref(), figure, history, user_text).await
    }

    pub async fn vintage_map(&self, location: &str) -> Option<EncodedImage> {
        atlas::vintage_map(self.generative.as_ref(), location).await
    }

    pub async fn location_trivia(&self, location: &str) -> Outcome<Vec<String>> {
        atlas::location_trivia(self.generative.as_ref(), location).await
    }

    pub async fn historical_photos(&self, location: &str) -> Vec<EncodedImage> {
        atlas::historical_photos(self.generative.as_ref(), location).await
    }

    pub async fn simulate(
        &self,
        pivot: &PivotEvent,
        hypothetical: &str,
    ) -> Outcome<AlternateHistory> {
        timeline::simulate(self.generative.as_ref(), pivot, hypothetical).await
    }

    // --- suggestion box ---------------------------------------------------

    /// Recent suggestions; the demonstration list when no suggestion box
    /// is configured or the store is unreachable.
    pub async fn list_suggestions(&self) -> Outcome<Vec<Suggestion>> {
        match &self.feedback {
            Some(client) => client.list_suggestions().await,
            None => Outcome::Fallback(sample_suggestions()),
        }
    }

    pub async fn submit_suggestion(&self, text: &str) -> bool {
        match &self.feedback {
            Some(client) => client.submit_suggestion(text).await,
            None => {
                tracing::debug!("no suggestion box configured, submission dropped");
                false
            }
        }
    }
}
