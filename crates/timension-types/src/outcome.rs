/// Result of a generation or fetch attempt.
///
/// Both variants carry renderable content. `Fallback` marks the fixed,
/// pre-authored value substituted when the service was unavailable or the
/// response was unusable, so callers can branch on provenance instead of
/// inspecting the content itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Content produced by the generative or persistence service.
    Generated(T),
    /// The operation's fixed fallback value.
    Fallback(T),
}

impl<T> Outcome<T> {
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// Borrow the carried value regardless of provenance.
    pub fn value(&self) -> &T {
        match self {
            Self::Generated(value) | Self::Fallback(value) => value,
        }
    }

    /// Unwrap the carried value regardless of provenance.
    pub fn into_inner(self) -> T {
        match self {
            Self::Generated(value) | Self::Fallback(value) => value,
        }
    }

    /// Map the carried value, preserving provenance.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Generated(value) => Outcome::Generated(f(value)),
            Self::Fallback(value) => Outcome::Fallback(f(value)),
        }
    }
}
