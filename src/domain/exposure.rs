//! Classification of free-text exposure labels into display categories.

use serde::Serialize;

const STEALER_KEYWORDS: &[&str] = &["stealer", "infostealer", "redline", "raccoon", "lumma"];
const MALWARE_KEYWORDS: &[&str] = &["malware", "virus", "trojan"];
const PHISHING_KEYWORDS: &[&str] = &["phishing", "spoof"];
const FINANCIAL_KEYWORDS: &[&str] = &["credit", "card"];
const IDENTITY_KEYWORDS: &[&str] = &["ssn", "social security"];

/// Display category of an exposure label. The `as_str` slug doubles as the
/// tag style suffix in the results table.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExposureCategory {
    Stealer,
    Malware,
    Phishing,
    Password,
    Financial,
    Identity,
    #[serde(rename = "default")]
    Other,
}

impl ExposureCategory {
    /// Case-insensitive substring classification, first match wins:
    /// stealer > malware > phishing > password > financial > identity.
    pub fn classify(label: &str) -> Self {
        let lower = label.to_lowercase();
        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

        if contains_any(STEALER_KEYWORDS) {
            Self::Stealer
        } else if contains_any(MALWARE_KEYWORDS) {
            Self::Malware
        } else if contains_any(PHISHING_KEYWORDS) {
            Self::Phishing
        } else if lower.contains("password") {
            Self::Password
        } else if contains_any(FINANCIAL_KEYWORDS) {
            Self::Financial
        } else if contains_any(IDENTITY_KEYWORDS) {
            Self::Identity
        } else {
            Self::Other
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stealer => "stealer",
            Self::Malware => "malware",
            Self::Phishing => "phishing",
            Self::Password => "password",
            Self::Financial => "financial",
            Self::Identity => "identity",
            Self::Other => "default",
        }
    }
}
