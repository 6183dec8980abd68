use crate::types::{EncodedImage, ImageRequest, TextRequest};
use async_trait::async_trait;

/// The seam between content generators and the network-facing client.
///
/// Every operation resolves to a value or absence; no error crosses this
/// boundary. The tracing log is the only observable failure signal, which
/// keeps the UI layer on its "never crash the story" policy.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Generate text. Returns `None` without a resolved credential (no
    /// network call is made), on transport failure, or when the response
    /// carries no usable text.
    async fn generate_text(&self, request: TextRequest) -> Option<String>;

    /// Generate an image. Returns the first inline image payload in the
    /// response, or `None` on any failure.
    async fn generate_image(&self, request: ImageRequest) -> Option<EncodedImage>;

    /// Issue a minimal request to check the credential is accepted.
    /// Auth and quota problems both collapse into `false`. Returns
    /// `false` without a resolved credential, skipping the network call.
    async fn test_connectivity(&self) -> bool;

    /// Whether a credential currently resolves.
    fn has_credential(&self) -> bool;
}
