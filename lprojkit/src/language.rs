//! Human-readable names for language identifiers.

/// Returns the English name of a language identifier (e.g. `"pt-BR"` →
/// `"Portuguese (Brazil)"`). Matching is case-insensitive; identifiers with no
/// known name come back uppercased.
pub fn name(code: &str) -> String {
    match code.to_lowercase().as_str() {
        "es" => "Spanish".to_string(),
        "en" => "English".to_string(),
        "en-us" => "English (US)".to_string(),
        "en-gb" => "English (UK)".to_string(),
        "en-au" => "English (Australia)".to_string(),
        "en-ca" => "English (Canada)".to_string(),
        "fr" => "French".to_string(),
        "de" => "German".to_string(),
        "it" => "Italian".to_string(),
        "pt" => "Portuguese".to_string(),
        "pt-br" => "Portuguese (Brazil)".to_string(),
        "ja" => "Japanese".to_string(),
        "ko" => "Korean".to_string(),
        "zh-hans" | "zh-cn" | "zh" => "Chinese (Simplified)".to_string(),
        "zh-hant" | "zh-tw" => "Chinese (Traditional)".to_string(),
        "zh-hk" => "Chinese (Hong Kong)".to_string(),
        "ar" => "Arabic".to_string(),
        "ru" => "Russian".to_string(),
        "nl" => "Dutch".to_string(),
        "pl" => "Polish".to_string(),
        "tr" => "Turkish".to_string(),
        "sv" => "Swedish".to_string(),
        "da" => "Danish".to_string(),
        "fi" => "Finnish".to_string(),
        "no" | "nb" => "Norwegian".to_string(),
        "el" => "Greek".to_string(),
        "cs" => "Czech".to_string(),
        "hu" => "Hungarian".to_string(),
        "ro" => "Romanian".to_string(),
        "th" => "Thai".to_string(),
        "id" => "Indonesian".to_string(),
        "vi" => "Vietnamese".to_string(),
        "uk" => "Ukrainian".to_string(),
        "ca" => "Catalan".to_string(),
        "hr" => "Croatian".to_string(),
        "he" => "Hebrew".to_string(),
        "hi" => "Hindi".to_string(),
        "ms" => "Malay".to_string(),
        "sk" => "Slovak".to_string(),
        "base" => "Base".to_string(),
        _ => code.to_uppercase(),
    }
}

/// Returns `"Name (code)"` for listings, e.g. `"Spanish (es)"`.
pub fn display_name(code: &str) -> String {
    format!("{} ({})", name(code), code)
}
