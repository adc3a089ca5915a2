//! Text cleanup for extracted document content.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Literal substitutions for common OCR misreads.
///
/// The vertical bar is the classic OCR confusion for capital I; ligatures and
/// dash variants come out of PDF text extraction unexpanded.
const OCR_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("|", "I"),
    ("\u{FB01}", "fi"),  // ﬁ
    ("\u{FB02}", "fl"),  // ﬂ
    ("\u{F0B7}", "•"),   // private-use bullet
    ("\u{2022}", "•"),   // bullet
    ("\u{2013}", "-"),   // en dash
    ("\u{2014}", "--"),  // em dash
];

/// Cleans extraction artifacts out of raw text.
///
/// The cleaner is pure and deterministic, and running it on its own output is
/// a fixed point: `clean(clean(s)) == clean(s)` for any input.
pub struct TextCleaner {
    whitespace: Regex,
    isolated_symbols: Regex,
}

impl TextCleaner {
    /// Create a cleaner with its patterns precompiled.
    pub fn new() -> Self {
        Self {
            whitespace: Regex::new(r"\s+").expect("static regex"),
            // A 1-2 character run of non-word characters between spaces is
            // almost always OCR noise. This also strips legitimate short
            // tokens (standalone initials, unit symbols); accepted tradeoff.
            isolated_symbols: Regex::new(r"\s[^\w\s]{1,2}\s").expect("static regex"),
        }
    }

    /// Clean extracted text.
    ///
    /// Normalizes line endings and Unicode form, collapses whitespace runs to
    /// a single space, applies the OCR substitution table, and removes
    /// isolated symbol tokens.
    pub fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        // Line endings first, while newlines still exist to normalize.
        let mut result = text.replace("\r\n", "\n").replace('\r', "\n");

        result = result.nfc().collect();

        result = self.whitespace.replace_all(&result, " ").trim().to_string();

        for (from, to) in OCR_SUBSTITUTIONS {
            result = result.replace(from, to);
        }

        // Removing one isolated run can expose the next ("a X Y b" leaves
        // " Y " behind), so repeat until the text stops changing.
        loop {
            let next = self.isolated_symbols.replace_all(&result, " ").to_string();
            if next == result {
                break;
            }
            result = next;
        }

        self.whitespace
            .replace_all(&result, " ")
            .trim()
            .to_string()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}
