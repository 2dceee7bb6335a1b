//! Text normalization applied before all keyword matching

/// Normalize text for keyword matching
///
/// Lower-cases, trims, folds Latin diacritics to their ASCII base letters and
/// keeps only alphanumerics, spaces, `-` and `_`.
#[must_use]
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        match fold_diacritic(ch) {
            Some(folded) => out.push_str(folded),
            None if ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '_') => out.push(ch),
            None => {}
        }
    }
    out
}

/// ASCII replacement for a lower-case accented Latin letter
const fn fold_diacritic(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'œ' => "oe",
        'æ' => "ae",
        'ß' => "ss",
        _ => return None,
    };
    Some(folded)
}
