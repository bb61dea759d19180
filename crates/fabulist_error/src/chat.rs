//! Story generation error types.

/// Kinds of chat completion errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ChatErrorKind {
    /// Request could not be sent
    #[display("Chat request failed: {}", _0)]
    Request(String),
    /// API returned a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    Status {
        /// HTTP status code
        status_code: u16,
        /// Error body returned by the API
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to parse chat response: {}", _0)]
    Parse(String),
    /// Response carried no choices
    #[display("Chat response contained no choices")]
    EmptyChoices,
    /// First choice carried no message content
    #[display("Chat response message had no content")]
    MissingContent,
}

/// Chat completion error with location tracking.
///
/// # Examples
///
/// ```
/// use fabulist_error::{ChatError, ChatErrorKind};
///
/// let err = ChatError::new(ChatErrorKind::EmptyChoices);
/// assert!(format!("{}", err).contains("no choices"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Chat Error: {} at line {} in {}", kind, line, file)]
pub struct ChatError {
    /// The kind of error that occurred
    pub kind: ChatErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ChatError {
    /// Create a new ChatError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ChatErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
