use thiserror::Error;

/// Wiring mistakes: a hook used without its provider mounted above it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("{consumer} must be used inside a <{provider}>")]
    MissingProvider {
        consumer: &'static str,
        provider: &'static str,
    },
}

/// Failures talking to the CMS. Never shown to visitors; the content client
/// answers them with its fallback entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("CMS request failed: {0}")]
    Network(String),

    #[error("CMS answered with status {0}")]
    Status(u16),

    #[error("CMS response could not be decoded: {0}")]
    Decode(String),
}

/// Turns an optional context value into a result naming the missing provider.
pub fn require_context<T>(
    context: Option<T>,
    consumer: &'static str,
    provider: &'static str,
) -> Result<T, ContextError> {
    context.ok_or(ContextError::MissingProvider { consumer, provider })
}
