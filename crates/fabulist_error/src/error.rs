//! Top-level error wrapper types.

use crate::{
    BuilderError, ChatError, ConfigError, HttpError, ImageError, JsonError, ServerError,
    SpeechError, StorageError,
};

/// Union of the domain error types in the fabulist workspace.
///
/// # Examples
///
/// ```
/// use fabulist_error::{FabulistError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: FabulistError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FabulistErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Story generation error
    #[from(ChatError)]
    Chat(ChatError),
    /// Image generation error
    #[from(ImageError)]
    Image(ImageError),
    /// Speech synthesis error
    #[from(SpeechError)]
    Speech(SpeechError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Web server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Fabulist error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fabulist_error::{FabulistResult, ConfigError};
///
/// fn might_fail() -> FabulistResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fabulist Error: {}", _0)]
pub struct FabulistError(Box<FabulistErrorKind>);

impl FabulistError {
    /// Create a new error from a kind.
    pub fn new(kind: FabulistErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FabulistErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FabulistErrorKind
impl<T> From<T> for FabulistError
where
    T: Into<FabulistErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for fabulist operations.
///
/// # Examples
///
/// ```
/// use fabulist_error::{FabulistResult, HttpError};
///
/// fn fetch_data() -> FabulistResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type FabulistResult<T> = std::result::Result<T, FabulistError>;
