//! Supported language tables and code normalization
//!
//! Spoken languages use ISO 639-1 codes. Sign languages use their ISO 639-3
//! codes; legacy aliases still sent by older clients are mapped to the
//! canonical code before validation and cache-key computation.

use serde::{Deserialize, Serialize};

/// Spoken languages accepted as translation source
pub const SPOKEN_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
];

/// Sign languages accepted as translation target
pub const SIGN_LANGUAGES: &[(&str, &str)] = &[
    ("ase", "American Sign Language"),
    ("bfi", "British Sign Language"),
    ("fsl", "French Sign Language"),
    ("gsg", "German Sign Language"),
    ("jsl", "Japanese Sign Language"),
];

/// Legacy sign language aliases and their canonical codes
const SIGN_LANGUAGE_ALIASES: &[(&str, &str)] = &[("asl", "ase"), ("bsl", "bfi"), ("gsl", "gsg")];

/// Which table a language code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageKind {
    Spoken,
    Sign,
}

impl LanguageKind {
    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            LanguageKind::Spoken => SPOKEN_LANGUAGES,
            LanguageKind::Sign => SIGN_LANGUAGES,
        }
    }
}

/// A supported language entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LanguageKind,
}

/// Lookup result for an arbitrary code, supported or not
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDetails {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LanguageKind,
    pub supported: bool,
}

/// Both language tables, as exposed to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedLanguages {
    pub spoken: Vec<LanguageInfo>,
    pub sign: Vec<LanguageInfo>,
}

impl SupportedLanguages {
    pub fn new() -> Self {
        Self {
            spoken: entries(LanguageKind::Spoken),
            sign: entries(LanguageKind::Sign),
        }
    }

    /// Number of (spoken, sign) combinations that can be requested
    pub fn pair_count(&self) -> usize {
        self.spoken.len() * self.sign.len()
    }
}

impl Default for SupportedLanguages {
    fn default() -> Self {
        Self::new()
    }
}

fn entries(kind: LanguageKind) -> Vec<LanguageInfo> {
    kind.table()
        .iter()
        .map(|(code, name)| LanguageInfo {
            code: (*code).to_string(),
            name: (*name).to_string(),
            kind,
        })
        .collect()
}

/// Normalize a spoken language code at the request boundary
pub fn normalize_spoken_code(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

/// Normalize a sign language code, resolving legacy aliases
pub fn normalize_sign_code(code: &str) -> String {
    let code = code.trim().to_ascii_lowercase();
    SIGN_LANGUAGE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == code)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or(code)
}

/// Display name for a code, if supported
pub fn language_name(code: &str, kind: LanguageKind) -> Option<&'static str> {
    kind.table()
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, name)| *name)
}

pub fn is_supported(code: &str, kind: LanguageKind) -> bool {
    language_name(code, kind).is_some()
}

/// Describe a language code; unsupported codes get a placeholder name
pub fn language_info(code: &str, kind: LanguageKind) -> LanguageDetails {
    let code = match kind {
        LanguageKind::Spoken => normalize_spoken_code(code),
        LanguageKind::Sign => normalize_sign_code(code),
    };
    let name = language_name(&code, kind);
    LanguageDetails {
        name: name.unwrap_or("Unknown Language").to_string(),
        supported: name.is_some(),
        code,
        kind,
    }
}
