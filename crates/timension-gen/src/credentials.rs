use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Environment variable checked for an injected credential.
pub const CREDENTIAL_ENV_VAR: &str = "GEMINI_API_KEY";

/// Credential resolution policy.
///
/// An environment-injected credential is captured once at construction
/// and always wins; a user-supplied token covers the rest of the store's
/// lifetime and is overwritten by later `set` calls. The store is cheap
/// to clone and is threaded into the client at construction, so there is
/// no process-global state.
#[derive(Clone, Default)]
pub struct CredentialStore {
    env_credential: Option<String>,
    session_credential: Arc<RwLock<Option<String>>>,
}

impl CredentialStore {
    pub fn new(env_credential: Option<String>) -> Self {
        Self {
            env_credential,
            session_credential: Arc::new(RwLock::new(None)),
        }
    }

    /// Capture the credential from `GEMINI_API_KEY`, if set and non-empty.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(CREDENTIAL_ENV_VAR)
                .ok()
                .filter(|value| !value.is_empty()),
        )
    }

    /// Store a user-supplied token. Has no effect on resolution while an
    /// environment credential is present.
    pub fn set(&self, token: impl Into<String>) {
        let mut session = self
            .session_credential
            .write()
            .expect("credential lock poisoned");
        *session = Some(token.into());
    }

    /// Resolve the active credential: environment first, then the last
    /// user-supplied token.
    pub fn resolve(&self) -> Option<String> {
        if self.env_credential.is_some() {
            return self.env_credential.clone();
        }
        self.session_credential
            .read()
            .expect("credential lock poisoned")
            .clone()
    }

    pub fn has_credential(&self) -> bool {
        self.resolve().is_some()
    }
}

/// Optional host integration hook.
///
/// An embedding host may own credential selection (a picker dialog, a
/// managed key). When no host is wired in, the application falls back to
/// its own inline credential entry.
#[async_trait]
pub trait CredentialHost: Send + Sync {
    /// Whether the host already holds a selected credential.
    async fn has_selected_credential(&self) -> bool;

    /// Ask the host to let the user select a credential; resolves to the
    /// selected token, or `None` if the user dismissed the prompt.
    async fn request_credential_selection(&self) -> Option<String>;
}
