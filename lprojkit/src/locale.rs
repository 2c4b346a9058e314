//! Static mapping from locale identifiers to `.lproj` directory names.
//!
//! The table is many-to-one (several regional locales share one directory) and
//! case-sensitive: lookups are exact, with no fallback to a language-only match.
//! An unmapped locale is reported to the caller, never guessed.

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use crate::error::Error;

lazy_static! {
    /// Locale identifier (`language_REGION`) → `.lproj` directory name.
    static ref LOCALE_TABLE: BTreeMap<&'static str, &'static str> = {
        let mut m = BTreeMap::new();
        m.insert("ar_AE", "ar.lproj");
        m.insert("ar_LB", "ar.lproj");
        m.insert("ar_MA", "ar.lproj");
        m.insert("ar_SA", "ar.lproj");
        m.insert("bg_BG", "bg.lproj");
        m.insert("ca_ES", "ca.lproj");
        m.insert("cs_CZ", "cs.lproj");
        m.insert("da_DK", "da.lproj");
        m.insert("de_DE", "de.lproj");
        m.insert("el_GR", "el.lproj");
        m.insert("en_GB", "en.lproj");
        m.insert("en_US", "en-US.lproj");
        m.insert("es_ES", "es.lproj");
        m.insert("es_MX", "es.lproj");
        m.insert("et_EE", "et.lproj");
        m.insert("eu_ES", "eu-ES.lproj");
        m.insert("fi_FI", "fi-FI.lproj");
        m.insert("fr_FR", "fr.lproj");
        m.insert("gl_ES", "gl-ES.lproj");
        m.insert("he_IL", "he.lproj");
        m.insert("hr_HR", "hr.lproj");
        m.insert("hu_HU", "hu.lproj");
        m.insert("id_ID", "id.lproj");
        m.insert("it_IT", "it.lproj");
        m.insert("ja_JP", "ja.lproj");
        m.insert("ka_GE", "ka-GE.lproj");
        m.insert("kk_KZ", "kk-KZ.lproj");
        m.insert("ko_KR", "ko.lproj");
        m.insert("lt_LT", "lt.lproj");
        m.insert("lv_LV", "lv.lproj");
        m.insert("mk_MK", "mk-MK.lproj");
        m.insert("nl_NL", "nl.lproj");
        m.insert("no_NO", "nb.lproj");
        m.insert("pl_PL", "pl.lproj");
        m.insert("pt_BR", "pt-BR.lproj");
        m.insert("pt_PT", "pt.lproj");
        m.insert("ro_RO", "ro.lproj");
        m.insert("ru_RU", "ru.lproj");
        m.insert("sk_SK", "sk.lproj");
        m.insert("sl_SI", "sl.lproj");
        m.insert("sq_AL", "sq.lproj");
        m.insert("sr_RS", "sr.lproj");
        m.insert("sv_SE", "sv.lproj");
        m.insert("th_TH", "th.lproj");
        m.insert("tr_TR", "tr.lproj");
        m.insert("uk_UA", "uk.lproj");
        m.insert("uz_UZ", "uz-UZ.lproj");
        m.insert("vi_VN", "vi.lproj");
        m.insert("zh_CN", "zh-Hans.lproj");
        m.insert("zh_TW", "zh-Hant.lproj");
        m
    };
}

/// Returns the `.lproj` directory name for a locale identifier (e.g. `"en_US"`
/// → `"en-US.lproj"`), or `None` if the locale is not supported.
pub fn resolve_directory(locale: &str) -> Option<&'static str> {
    LOCALE_TABLE.get(locale).copied()
}

/// Like [`resolve_directory`], but unsupported locales become an [`Error`].
pub fn require_directory(locale: &str) -> Result<&'static str, Error> {
    resolve_directory(locale).ok_or_else(|| Error::unsupported_locale(locale))
}

/// Checks if a locale identifier is supported.
pub fn is_supported(locale: &str) -> bool {
    LOCALE_TABLE.contains_key(locale)
}

/// All supported locale identifiers, sorted ascending.
pub fn all_locales() -> Vec<&'static str> {
    LOCALE_TABLE.keys().copied().collect()
}

/// The first supported locale (in sorted enumeration order) that resolves to
/// the given directory name, if any.
pub fn default_locale_for_directory(directory: &str) -> Option<&'static str> {
    LOCALE_TABLE
        .iter()
        .find(|(_, dir)| **dir == directory)
        .map(|(locale, _)| *locale)
}
