/// A language the app can translate into and from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub label: &'static str,
}

/// Ordered table used for the target selector and for translation eligibility.
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language { code: "en", label: "English" },
    Language { code: "pt", label: "Portuguese" },
    Language { code: "es", label: "Spanish" },
    Language { code: "ru", label: "Russian" },
    Language { code: "tr", label: "Turkish" },
    Language { code: "fr", label: "French" },
];

pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

pub fn find_supported(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES.iter().find(|lang| lang.code == code)
}

pub fn is_supported(code: &str) -> bool {
    find_supported(code).is_some()
}

/// Display label for a language code; codes outside the table get a marker label.
pub fn label_for(code: &str) -> String {
    match find_supported(code) {
        Some(lang) => lang.label.to_string(),
        None => format!("Unsupported language ({code})"),
    }
}
