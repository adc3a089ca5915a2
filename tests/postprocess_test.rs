//! Integration tests for the text post-processing pipeline.

use docroute::postprocess::StopwordList;
use docroute::{
    assess_quality, clean_text, extract_keywords, post_process, structure_text,
};

#[test]
fn clean_is_idempotent() {
    let inputs = [
        "Normal text that needs no work.",
        "  spaced   out\ttext\nwith\r\nmixed   whitespace  ",
        "ligature ﬁx and ﬂow, bullets \u{2022} \u{F0B7}, dashes \u{2013} \u{2014}",
        "noise ~ @# between * words",
        "pipe | and I",
        "",
        "a ~ @ # b ~ c",
    ];
    for input in inputs {
        let once = clean_text(input);
        assert_eq!(clean_text(&once), once, "clean not idempotent for {input:?}");
    }
}

#[test]
fn clean_applies_substitution_table() {
    assert_eq!(clean_text("ﬁrst ﬂoor"), "first floor");
    assert_eq!(clean_text("col|umn"), "colIumn");
    assert_eq!(clean_text("2010\u{2013}2020"), "2010-2020");
    assert_eq!(clean_text("wait\u{2014}what"), "wait--what");
}

#[test]
fn clean_strips_isolated_noise() {
    assert_eq!(
        clean_text("The scan { produced } artifacts"),
        "The scan produced artifacts"
    );
    // words and multi-character runs survive
    assert_eq!(clean_text("keep %%% this"), "keep %%% this");
}

#[test]
fn structure_empty_input_is_all_empty() {
    let structured = structure_text("");
    assert!(structured.raw.is_empty());
    assert!(structured.sections.is_empty());
    assert!(structured.paragraphs.is_empty());
    assert!(structured.sentences.is_empty());
    assert_eq!(structured.stats.char_count, 0);
    assert_eq!(structured.stats.paragraph_count, 0);
    assert_eq!(structured.stats.sentence_count, 0);
    assert_eq!(structured.stats.section_count, 0);
}

#[test]
fn structure_heading_scenario() {
    let structured = structure_text("AAA.\n\nBBB is a test sentence with several words in it.");

    assert_eq!(structured.paragraphs.len(), 2);
    assert_eq!(structured.sections.len(), 1);
    // the first paragraph qualifies as a heading and titles the section
    assert_eq!(structured.sections[0].title, "AAA.");
}

#[test]
fn structure_document_with_sections() {
    let text = "This report covers the analysis.\n\n\
                METHODOLOGY\n\n\
                Samples were collected over two weeks of observation.\n\n\
                RESULTS\n\n\
                The measurements improved across every trial in the study.";
    let structured = structure_text(text);

    let titles: Vec<&str> = structured
        .sections
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Introduction", "METHODOLOGY", "RESULTS"]);
    assert_eq!(structured.stats.paragraph_count, 5);
    assert_eq!(structured.stats.section_count, 3);
}

#[test]
fn keywords_exclude_stopwords_and_short_tokens() {
    let text = "The pipeline and the parser do the parsing of the documents \
                in a way that is fast and the results are good for all of us";
    let keywords = extract_keywords(text, 10);

    assert!(keywords.len() <= 10);
    for keyword in &keywords {
        assert!(keyword.chars().count() >= 3);
        assert!(!StopwordList::Extended.contains(keyword));
    }
    assert!(keywords.contains(&"pipeline".to_string()));
}

#[test]
fn keywords_respect_requested_count() {
    let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo";
    assert_eq!(extract_keywords(text, 3).len(), 3);
    assert!(extract_keywords(text, 100).len() <= 11);
}

#[test]
fn quality_empty_is_all_zero() {
    let metrics = assess_quality("");
    assert_eq!(metrics.readability, 0.0);
    assert_eq!(metrics.coherence, 0.0);
    assert_eq!(metrics.completeness, 0.0);
    assert_eq!(metrics.overall, 0.0);
}

#[test]
fn quality_scores_stay_in_unit_range() {
    let samples = [
        "x",
        "A single ordinary sentence of reasonable length sits here quietly.",
        &"long paragraph content ".repeat(50),
        "!?.!?.!?.",
    ];
    for text in samples {
        let m = assess_quality(text);
        for value in [m.readability, m.coherence, m.completeness, m.overall] {
            assert!((0.0..=1.0).contains(&value), "{value} out of range for {text:?}");
        }
    }
}

#[test]
fn quality_prefers_ordinary_prose() {
    let prose = "The system processes documents in stages. Each stage refines the \
                 text further and records what changed. The final output keeps the \
                 original meaning while removing extraction noise.";
    let junk = "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzz";

    assert!(assess_quality(prose).overall > assess_quality(junk).overall);
}

#[test]
fn full_pipeline_produces_consistent_record() {
    let content = "PROJECT OVERVIEW\n\nThe   parser converts documents\u{2014}quickly. \
                   The parser also scores extraction quality for every document.";
    let processed = post_process(content);

    // cleaned text is itself clean
    assert_eq!(clean_text(&processed.cleaned_text), processed.cleaned_text);
    // keywords come from the cleaned text
    assert!(processed.keywords.contains(&"parser".to_string()));
    // the record serializes for service boundaries
    let json = serde_json::to_string(&processed).unwrap();
    assert!(json.contains("keywords"));
    assert!(json.contains("overall"));
}
