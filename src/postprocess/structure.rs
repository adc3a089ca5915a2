//! Text structuring: paragraphs, sections, and sentences.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum length of a heading line, excluding trailing punctuation.
const MAX_HEADING_LEN: usize = 50;

/// Fragments shorter than this are discarded by the fallback splitter.
const MIN_SENTENCE_LEN: usize = 10;

/// A titled section with its paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title, taken from the heading paragraph.
    pub title: String,
    /// Paragraphs accumulated under this heading.
    pub content: Vec<String>,
}

/// Counts derived from structured text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub char_count: usize,
    pub paragraph_count: usize,
    pub sentence_count: usize,
    pub section_count: usize,
}

/// Text decomposed into sections, paragraphs, and sentences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredText {
    /// The input text, unchanged.
    pub raw: String,
    /// Sections grouped under heading-like paragraphs.
    pub sections: Vec<Section>,
    /// Paragraphs split on blank-line boundaries.
    pub paragraphs: Vec<String>,
    /// Extracted sentences.
    pub sentences: Vec<String>,
    /// Derived counts.
    pub stats: TextStats,
}

/// Sentence tokenization strategy.
///
/// Two variants of the same capability, selected when the structurer is
/// built rather than branched per call. [`SentenceTokenizer::Rule`] is
/// boundary-aware and preserves sentence punctuation;
/// [`SentenceTokenizer::Split`] is the simple splitter used when the rule
/// tokenizer is unavailable or produces nothing, and is also the splitter
/// quality assessment is defined against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentenceTokenizer {
    /// Split at terminator runs followed by whitespace, keeping punctuation.
    #[default]
    Rule,
    /// Split on `.`/`!`/`?` runs, keep fragments longer than 10 characters,
    /// re-terminate each with a period.
    Split,
}

impl SentenceTokenizer {
    /// Tokenize `text` into sentences.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        match self {
            SentenceTokenizer::Rule => rule_sentences(text),
            SentenceTokenizer::Split => split_sentences(text),
        }
    }
}

fn rule_sentences(text: &str) -> Vec<String> {
    // A terminator run followed by whitespace (or end of text) closes a
    // sentence; the punctuation stays with the sentence it ends.
    let boundary = Regex::new(r"[.!?]+(\s+|$)").expect("static regex");

    let mut sentences = Vec::new();
    let mut start = 0;
    for m in boundary.find_iter(text) {
        let sentence = text[start..m.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = m.end();
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

fn split_sentences(text: &str) -> Vec<String> {
    let terminators = Regex::new(r"[.!?]+").expect("static regex");
    terminators
        .split(text)
        .filter_map(|part| {
            let cleaned = part.trim();
            if cleaned.chars().count() > MIN_SENTENCE_LEN {
                Some(format!("{cleaned}."))
            } else {
                None
            }
        })
        .collect()
}

/// Splits text into paragraphs, groups them into sections, and extracts
/// sentences.
pub struct TextStructurer {
    tokenizer: SentenceTokenizer,
    short_heading: Regex,
    numbered_heading: Regex,
    underlined_heading: Regex,
}

impl TextStructurer {
    /// Create a structurer with the preferred sentence tokenizer.
    pub fn new() -> Self {
        Self::with_tokenizer(SentenceTokenizer::Rule)
    }

    /// Create a structurer with an explicit tokenizer variant.
    pub fn with_tokenizer(tokenizer: SentenceTokenizer) -> Self {
        Self {
            tokenizer,
            short_heading: Regex::new(r"^[A-Z][A-Za-z\s]{0,50}[.:]?$").expect("static regex"),
            numbered_heading: Regex::new(r"^\d+\.\s+[A-Z].*$").expect("static regex"),
            underlined_heading: Regex::new(r"^[A-Z].*\n={3,}$").expect("static regex"),
        }
    }

    /// Structure text into sections, paragraphs, and sentences.
    ///
    /// Empty input yields an all-empty structure with zero counts; this
    /// function never fails.
    pub fn structure(&self, text: &str) -> StructuredText {
        if text.is_empty() {
            return StructuredText::default();
        }

        let paragraphs: Vec<String> = text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        let sections = self.identify_sections(&paragraphs);

        let mut sentences = Vec::new();
        for paragraph in &paragraphs {
            let mut tokenized = self.tokenizer.tokenize(paragraph);
            if tokenized.is_empty() && self.tokenizer != SentenceTokenizer::Split {
                tokenized = SentenceTokenizer::Split.tokenize(paragraph);
            }
            sentences.extend(tokenized);
        }

        let stats = TextStats {
            char_count: text.chars().count(),
            paragraph_count: paragraphs.len(),
            sentence_count: sentences.len(),
            section_count: sections.len(),
        };

        StructuredText {
            raw: text.to_string(),
            sections,
            paragraphs,
            sentences,
            stats,
        }
    }

    /// Group consecutive non-heading paragraphs under the most recent
    /// heading. Content before any heading is collected under an implicit
    /// "Introduction" section; sections that never accumulate content are
    /// dropped.
    fn identify_sections(&self, paragraphs: &[String]) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut current = Section {
            title: "Introduction".to_string(),
            content: Vec::new(),
        };

        for paragraph in paragraphs {
            if self.is_heading(paragraph) {
                if !current.content.is_empty() {
                    sections.push(current);
                }
                current = Section {
                    title: paragraph.trim().to_string(),
                    content: Vec::new(),
                };
            } else {
                current.content.push(paragraph.clone());
            }
        }

        if !current.content.is_empty() {
            sections.push(current);
        }

        sections
    }

    /// Heading-like paragraph test.
    ///
    /// Short lines qualify only when every word is capitalized (Title Case or
    /// ALL CAPS); a lowercase word mid-line marks ordinary prose even when it
    /// fits the length limit.
    fn is_heading(&self, paragraph: &str) -> bool {
        let line = paragraph.trim();

        if self.numbered_heading.is_match(line) || self.underlined_heading.is_match(line) {
            return true;
        }

        if !self.short_heading.is_match(line) {
            return false;
        }

        let body = line.trim_end_matches(['.', ':']);
        if body.chars().count() > MAX_HEADING_LEN {
            return false;
        }

        body.split_whitespace()
            .all(|word| word.chars().next().is_some_and(|c| c.is_ascii_uppercase()))
    }
}

impl Default for TextStructurer {
    fn default() -> Self {
        Self::new()
    }
}
