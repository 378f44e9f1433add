/// Distance from `'A'` to REGIONAL INDICATOR SYMBOL LETTER A (U+1F1E6).
const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

/// Turns an ISO 3166-1 alpha-2 code into its flag emoji.
///
/// Case-insensitive. Returns `None` unless the input is exactly two ASCII
/// letters.
pub fn country_flag(code: &str) -> Option<String> {
    let mut chars = code.chars();
    let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
        return None;
    };

    [a, b]
        .into_iter()
        .map(|c| {
            if !c.is_ascii_alphabetic() {
                return None;
            }
            char::from_u32(c.to_ascii_uppercase() as u32 + REGIONAL_INDICATOR_OFFSET)
        })
        .collect()
}
