//! Browser classification from navigator identification strings.
//!
//! The classification is a coarse substring match over `appName`, `vendor`
//! and `appVersion`. The version bucketing is deliberately kept as a plain
//! substring scan: legacy markup selection depends on its exact results,
//! including the misfires (an `appVersion` of "12.3" lands in bucket 2).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Version substrings scanned in ascending order; the last match wins.
const VERSION_TOKENS: [(&str, u8); 5] = [("2.", 2), ("3.", 3), ("4.", 4), ("5.", 5), ("6.", 6)];

/// Browser family as reported by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrowserName {
    #[serde(rename = "NS")]
    Netscape,
    #[serde(rename = "MSIE")]
    Msie,
    Safari,
    Chrome,
    #[serde(rename = "N/A")]
    Unknown,
}

impl BrowserName {
    /// Short name used in logs and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserName::Netscape => "NS",
            BrowserName::Msie => "MSIE",
            BrowserName::Safari => "Safari",
            BrowserName::Chrome => "Chrome",
            BrowserName::Unknown => "N/A",
        }
    }
}

impl fmt::Display for BrowserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserClassification {
    pub name: BrowserName,
    /// 0 when none of the tracked version substrings matched, else 2..=6.
    pub version_bucket: u8,
}

/// Identification strings exposed by the host environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigator {
    pub app_name: String,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub app_version: String,
}

impl Navigator {
    pub fn new(app_name: &str, vendor: Option<&str>, app_version: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            vendor: vendor.map(str::to_string),
            app_version: app_version.to_string(),
        }
    }

    /// Classify this navigator. Not cached; every call re-derives the result.
    pub fn classify(&self) -> BrowserClassification {
        classify(&self.app_name, self.vendor.as_deref(), &self.app_version)
    }
}

/// Classify a browser from its application name, vendor and version strings.
///
/// Vendor matches override the application name, and "Google" overrides
/// "Apple" when both appear.
pub fn classify(
    app_name: &str,
    vendor: Option<&str>,
    app_version: &str,
) -> BrowserClassification {
    let mut name = if app_name.contains("Netscape") {
        BrowserName::Netscape
    } else if app_name.contains("Microsoft") {
        BrowserName::Msie
    } else {
        BrowserName::Unknown
    };

    if let Some(vendor) = vendor {
        if vendor.contains("Apple") {
            name = BrowserName::Safari;
        }
        if vendor.contains("Google") {
            name = BrowserName::Chrome;
        }
    }

    BrowserClassification {
        name,
        version_bucket: version_bucket(app_version),
    }
}

/// Coarse version bucket of an `appVersion` string.
pub fn version_bucket(app_version: &str) -> u8 {
    // Highest matching token is the one a forward scan would leave behind.
    VERSION_TOKENS
        .iter()
        .rev()
        .find(|(token, _)| app_version.contains(token))
        .map(|(_, bucket)| *bucket)
        .unwrap_or(0)
}
