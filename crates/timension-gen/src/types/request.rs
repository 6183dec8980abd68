use serde_json::Value;

/// Default model for text and structured generation.
pub const TEXT_MODEL: &str = "gemini-2.5-flash";

/// Default model for image generation.
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Response shaping for a text request.
///
/// Schema-constrained output and search grounding are mutually exclusive
/// on the upstream service, so a request carries at most one of them.
#[derive(Debug, Clone, Default)]
pub enum Shaping {
    /// Free-form text.
    #[default]
    Free,
    /// JSON constrained to the given response schema.
    Schema(Value),
    /// Free-form text augmented with search grounding.
    Grounded,
}

#[derive(Debug, Clone)]
pub struct TextRequest {
    pub model: String,
    pub prompt: String,
    pub shaping: Shaping,
}

impl TextRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            model: TEXT_MODEL.to_string(),
            prompt: prompt.into(),
            shaping: Shaping::Free,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.shaping = Shaping::Schema(schema);
        self
    }

    pub fn grounded(mut self) -> Self {
        self.shaping = Shaping::Grounded;
        self
    }
}

/// Aspect ratios accepted by the image model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatio {
    Square,
    #[default]
    Landscape,
    Portrait,
    Classic,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Landscape => "16:9",
            Self::Portrait => "3:4",
            Self::Classic => "4:3",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
}

impl ImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            model: IMAGE_MODEL.to_string(),
            prompt: prompt.into(),
            aspect_ratio: AspectRatio::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_request_defaults() {
        let request = TextRequest::new("Hello");
        assert_eq!(request.model, TEXT_MODEL);
        assert!(matches!(request.shaping, Shaping::Free));
    }

    #[test]
    fn test_text_request_schema_shaping() {
        let request = TextRequest::new("Hello").with_schema(json!({"type": "OBJECT"}));
        assert!(matches!(request.shaping, Shaping::Schema(_)));
    }

    #[test]
    fn test_grounding_replaces_schema() {
        // Last shaping call wins; the two can never coexist on one request.
        let request = TextRequest::new("Hello")
            .with_schema(json!({"type": "OBJECT"}))
            .grounded();
        assert!(matches!(request.shaping, Shaping::Grounded));
    }

    #[test]
    fn test_image_request_defaults() {
        let request = ImageRequest::new("A map");
        assert_eq!(request.model, IMAGE_MODEL);
        assert_eq!(request.aspect_ratio, AspectRatio::Landscape);
    }

    #[test]
    fn test_aspect_ratio_wire_values() {
        assert_eq!(AspectRatio::Square.as_str(), "1:1");
        assert_eq!(AspectRatio::Landscape.as_str(), "16:9");
        assert_eq!(AspectRatio::Portrait.as_str(), "3:4");
        assert_eq!(AspectRatio::Classic.as_str(), "4:3");
    }
}
