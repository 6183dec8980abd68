pub mod credentials;
pub mod gemini;
pub mod structured;
pub mod traits;
pub mod types;

pub use credentials::{CredentialHost, CredentialStore, CREDENTIAL_ENV_VAR};
pub use gemini::GeminiClient;
pub use structured::{parse_structured, strip_code_fences};
pub use traits::GenerativeService;
pub use types::{AspectRatio, EncodedImage, ImageRequest, Shaping, TextRequest};
pub use types::{IMAGE_MODEL, TEXT_MODEL};
