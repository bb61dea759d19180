//! Speech synthesis error types.

/// Kinds of speech synthesis errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SpeechErrorKind {
    /// WebSocket connection failed
    #[display("WebSocket connection failed: {}", _0)]
    Connection(String),
    /// Failed to send a protocol message
    #[display("Failed to send message: {}", _0)]
    Send(String),
    /// Failed to receive a protocol message
    #[display("Failed to receive message: {}", _0)]
    Receive(String),
    /// Binary frame did not match the expected layout
    #[display("Invalid audio frame: {}", _0)]
    InvalidFrame(String),
    /// Connection closed before synthesis completed
    #[display("Connection closed before synthesis completed: {}", _0)]
    Closed(String),
    /// Synthesis completed without producing audio
    #[display("Synthesis produced no audio")]
    NoAudio,
    /// Synthesized audio could not be written to disk
    #[display("Failed to write audio output: {}", _0)]
    OutputWrite(String),
}

/// Speech synthesis error with location tracking.
///
/// # Examples
///
/// ```
/// use fabulist_error::{SpeechError, SpeechErrorKind};
///
/// let err = SpeechError::new(SpeechErrorKind::NoAudio);
/// assert!(format!("{}", err).contains("no audio"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Speech Error: {} at line {} in {}", kind, line, file)]
pub struct SpeechError {
    /// The kind of error that occurred
    pub kind: SpeechErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SpeechError {
    /// Create a new SpeechError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SpeechErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
