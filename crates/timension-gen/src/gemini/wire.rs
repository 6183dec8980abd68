//! Gemini `generateContent` response types.

use crate::types::EncodedImage;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
    pub role: Option<String>,
}

/// A single part of a candidate's content. Parts the client does not
/// consume (thought summaries, executable code) fall through to `Other`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResponsePart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Other(serde_json::Value),
}

/// Inline binary payload (images) in base64 wire form.
#[derive(Debug, Clone, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptFeedback {
    #[serde(rename = "blockReason")]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, or `None` when the
    /// response carries no text at all.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let mut out = String::new();
        for part in &content.parts {
            if let ResponsePart::Text { text } = part {
                out.push_str(text);
            }
        }
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }

    /// The first inline image payload anywhere in the response.
    pub fn inline_image(&self) -> Option<EncodedImage> {
        for candidate in &self.candidates {
            let Some(content) = &candidate.content else {
                continue;
            };
            for part in &content.parts {
                if let ResponsePart::InlineData { inline_data } = part {
                    return Some(EncodedImage::new(&inline_data.mime_type, &inline_data.data));
                }
            }
        }
        None
    }
}
