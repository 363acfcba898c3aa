//! Splits free text into lowercase comparable tokens.

/// ASCII characters that are symbols rather than punctuation; they stay inside tokens.
const ASCII_SYMBOLS: &[char] = &['$', '+', '<', '=', '>', '^', '`', '|', '~'];

/// True for punctuation separators: ASCII punctuation (minus symbols), Latin-1 and general
/// punctuation, CJK and fullwidth punctuation. Symbols such as emoji, `+`, `$` are not punctuation.
fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation() && !ASCII_SYMBOLS.contains(&c);
    }
    matches!(
        c,
        '¡' | '§' | '«' | '¶' | '·' | '»' | '¿'
            | '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{2043}'
            | '\u{2045}'..='\u{2051}'
            | '\u{2053}'..='\u{205E}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3011}'
            | '\u{3014}'..='\u{301F}'
            | '\u{FF01}'..='\u{FF03}'
            | '\u{FF05}'..='\u{FF0A}'
            | '\u{FF0C}'..='\u{FF0F}'
            | '\u{FF1A}' | '\u{FF1B}' | '\u{FF1F}' | '\u{FF20}'
            | '\u{FF3B}'..='\u{FF3D}'
            | '\u{FF3F}' | '\u{FF5B}' | '\u{FF5D}'
            | '\u{FF5F}'..='\u{FF65}'
    )
}

/// Normalizes `text` into tokens: Unicode lowercase, split on whitespace and punctuation,
/// empty pieces dropped. `"Light-Blue!"` becomes `["light", "blue"]`; symbols stay, so
/// `"C++"` is `["c++"]` and `"👍"` is `["👍"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || is_punctuation(c))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
