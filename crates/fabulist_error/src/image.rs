//! Image generation error types.

/// Kinds of image generation errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImageErrorKind {
    /// Request could not be sent
    #[display("Image request failed: {}", _0)]
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
    #[display("Failed to parse image response: {}", _0)]
    Parse(String),
    /// Response carried no image data
    #[display("Image response contained no data")]
    EmptyData,
    /// Returned image carried no URL
    #[display("Image response data had no url")]
    MissingUrl,
    /// Generated image could not be downloaded
    #[display("Failed to download image: {}", _0)]
    Download(String),
}

/// Image generation error with location tracking.
///
/// # Examples
///
/// ```
/// use fabulist_error::{ImageError, ImageErrorKind};
///
/// let err = ImageError::new(ImageErrorKind::EmptyData);
/// assert!(format!("{}", err).contains("no data"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The kind of error that occurred
    pub kind: ImageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
