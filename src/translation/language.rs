//! Target language codes accepted by the DeepL API.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::CommandError;
use crate::ui::Style;

/// Supported target language codes and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("AR", "Arabic"),
    ("BG", "Bulgarian"),
    ("CS", "Czech"),
    ("DA", "Danish"),
    ("DE", "German"),
    ("EL", "Greek"),
    ("EN-GB", "English (British)"),
    ("EN-US", "English (American)"),
    ("ES", "Spanish"),
    ("ET", "Estonian"),
    ("FI", "Finnish"),
    ("FR", "French"),
    ("HU", "Hungarian"),
    ("ID", "Indonesian"),
    ("IT", "Italian"),
    ("JA", "Japanese"),
    ("KO", "Korean"),
    ("LT", "Lithuanian"),
    ("LV", "Latvian"),
    ("NB", "Norwegian Bokmål"),
    ("NL", "Dutch"),
    ("PL", "Polish"),
    (
        "PT",
        "Portuguese (unspecified variant for backward compatibility; please select PT-BR or PT-PT instead)",
    ),
    ("PT-BR", "Portuguese (Brazilian)"),
    (
        "PT-PT",
        "Portuguese (all Portuguese varieties excluding Brazilian Portuguese)",
    ),
    ("RO", "Romanian"),
    ("RU", "Russian"),
    ("SK", "Slovak"),
    ("SL", "Slovenian"),
    ("SV", "Swedish"),
    ("TR", "Turkish"),
    ("UK", "Ukrainian"),
    ("ZH", "Chinese (simplified)"),
];

/// Returns `true` if `code` names a supported target language, in any case.
pub fn is_supported(code: &str) -> bool {
    let code = code.trim().to_uppercase();
    SUPPORTED_LANGUAGES.iter().any(|(known, _)| *known == code)
}

/// Code to display name mapping of every supported language.
pub fn describe() -> BTreeMap<&'static str, &'static str> {
    SUPPORTED_LANGUAGES.iter().copied().collect()
}

/// A validated, uppercase target language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Normalizes `code` to uppercase and checks it against the registry.
    pub fn parse(code: &str) -> Result<Self, CommandError> {
        let normalized = code.trim().to_uppercase();
        if is_supported(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(CommandError::UnsupportedLanguage {
                code: code.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders the supported language table, one code per line.
pub fn language_table() -> String {
    let mut table = format!("{}\n", Style::header("Supported target languages"));
    for (code, name) in SUPPORTED_LANGUAGES {
        table.push_str(&format!(
            "  {} {}\n",
            Style::code(format!("{code:6}")),
            Style::secondary(name)
        ));
    }
    table
}
