//! The speech voice catalog.

use serde::{Deserialize, Serialize};

/// Neural voices available for narration.
///
/// The catalog is the fixed `en-US` voice list of the speech service, in menu
/// order. Display and parsing use the full service identifiers.
///
/// # Examples
///
/// ```
/// use fabulist_core::Voice;
/// use std::str::FromStr;
///
/// assert_eq!(Voice::Ana.to_string(), "en-US-AnaNeural");
/// assert_eq!(Voice::from_str("en-US-GuyNeural").unwrap(), Voice::Guy);
/// assert_eq!(Voice::default(), Voice::Ana);
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
pub enum Voice {
    /// en-US-AnaNeural
    #[default]
    #[strum(serialize = "en-US-AnaNeural")]
    #[serde(rename = "en-US-AnaNeural")]
    Ana,
    /// en-US-AriaNeural
    #[strum(serialize = "en-US-AriaNeural")]
    #[serde(rename = "en-US-AriaNeural")]
    Aria,
    /// en-US-AvaNeural
    #[strum(serialize = "en-US-AvaNeural")]
    #[serde(rename = "en-US-AvaNeural")]
    Ava,
    /// en-US-EmmaNeural
    #[strum(serialize = "en-US-EmmaNeural")]
    #[serde(rename = "en-US-EmmaNeural")]
    Emma,
    /// en-US-JennyNeural
    #[strum(serialize = "en-US-JennyNeural")]
    #[serde(rename = "en-US-JennyNeural")]
    Jenny,
    /// en-US-MichelleNeural
    #[strum(serialize = "en-US-MichelleNeural")]
    #[serde(rename = "en-US-MichelleNeural")]
    Michelle,
    /// en-US-GuyNeural
    #[strum(serialize = "en-US-GuyNeural")]
    #[serde(rename = "en-US-GuyNeural")]
    Guy,
    /// en-US-AndrewNeural
    #[strum(serialize = "en-US-AndrewNeural")]
    #[serde(rename = "en-US-AndrewNeural")]
    Andrew,
    /// en-US-BrianNeural
    #[strum(serialize = "en-US-BrianNeural")]
    #[serde(rename = "en-US-BrianNeural")]
    Brian,
    /// en-US-ChristopherNeural
    #[strum(serialize = "en-US-ChristopherNeural")]
    #[serde(rename = "en-US-ChristopherNeural")]
    Christopher,
    /// en-US-EricNeural
    #[strum(serialize = "en-US-EricNeural")]
    #[serde(rename = "en-US-EricNeural")]
    Eric,
    /// en-US-RogerNeural
    #[strum(serialize = "en-US-RogerNeural")]
    #[serde(rename = "en-US-RogerNeural")]
    Roger,
    /// en-US-SteffanNeural
    #[strum(serialize = "en-US-SteffanNeural")]
    #[serde(rename = "en-US-SteffanNeural")]
    Steffan,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn catalog_is_distinct_and_complete() {
        let ids: Vec<String> = Voice::iter().map(|v| v.to_string()).collect();
        assert_eq!(ids.len(), 13);
        for id in &ids {
            assert!(id.starts_with("en-US-"));
            assert!(id.ends_with("Neural"));
        }
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn menu_order_starts_with_ana() {
        assert_eq!(Voice::iter().next(), Some(Voice::Ana));
    }

    #[test]
    fn serde_uses_service_identifiers() {
        let json = serde_json::to_string(&Voice::Steffan).unwrap();
        assert_eq!(json, "\"en-US-SteffanNeural\"");
        let back: Voice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Voice::Steffan);
    }
}
