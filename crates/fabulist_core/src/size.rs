//! Image size options.

use serde::{Deserialize, Serialize};

/// The three aspect ratios the image service accepts.
///
/// # Examples
///
/// ```
/// use fabulist_core::ImageSize;
///
/// assert_eq!(ImageSize::Square.to_string(), "1024x1024");
/// assert_eq!(ImageSize::default(), ImageSize::Square);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum ImageSize {
    /// 1024x1024
    #[default]
    #[strum(serialize = "1024x1024")]
    #[serde(rename = "1024x1024")]
    Square,
    /// 1792x1024
    #[strum(serialize = "1792x1024")]
    #[serde(rename = "1792x1024")]
    Landscape,
    /// 1024x1792
    #[strum(serialize = "1024x1792")]
    #[serde(rename = "1024x1792")]
    Portrait,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn three_fixed_sizes() {
        let sizes: Vec<String> = ImageSize::iter().map(|s| s.to_string()).collect();
        assert_eq!(sizes, vec!["1024x1024", "1792x1024", "1024x1792"]);
    }

    #[test]
    fn parses_service_strings() {
        assert_eq!(ImageSize::from_str("1792x1024").unwrap(), ImageSize::Landscape);
        assert!(ImageSize::from_str("512x512").is_err());
    }
}
