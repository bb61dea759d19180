//! Artifact stamps.

use serde::{Deserialize, Serialize};

/// Grouping key for all artifacts of one story generation.
///
/// Rendered as local time `%Y%m%d.%H%M%S` plus a short random suffix so two
/// sessions generating within the same second cannot collide on filenames.
///
/// # Examples
///
/// ```
/// use fabulist_core::Stamp;
///
/// let stamp = Stamp::now();
/// assert_eq!(stamp.as_str().len(), 22);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}", _0)]
pub struct Stamp(String);

impl Stamp {
    /// Create a stamp for the current local time.
    pub fn now() -> Self {
        let time = chrono::Local::now().format("%Y%m%d.%H%M%S");
        let entropy = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("{}-{}", time, &entropy[..6]))
    }

    /// The stamp as a filename-safe string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
