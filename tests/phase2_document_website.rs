//! Phase 2 tests: sentence segmentation, document-level and website-level tokenization.

use lexprep::{Pipeline, PipelineConfig, SentenceSplitter};

// ==================== Sentence Tests ====================

#[test]
fn test_sentences_preserve_order() {
    let pipeline = Pipeline::surface().unwrap();
    assert_eq!(
        pipeline.sentences("Acme was founded in 1999. Mr. Lee runs it now! Is it growing?"),
        vec![
            "Acme was founded in 1999.",
            "Mr. Lee runs it now!",
            "Is it growing?"
        ]
    );
}

#[test]
fn test_custom_abbreviations() {
    let splitter = SentenceSplitter::with_abbreviations(["approx"]);
    assert_eq!(
        splitter.split("It costs approx. Ten pounds. Cheap."),
        vec!["It costs approx. Ten pounds.", "Cheap."]
    );
}

// ==================== Document Tests ====================

#[test]
fn test_document_one_list_per_sentence() {
    let pipeline = Pipeline::surface().unwrap();
    let doc = pipeline.tokenize_document("Acme builds well-known tools. It ships daily.");
    assert_eq!(
        doc,
        vec![
            vec!["acme", "builds", "well-known", "tools"],
            vec!["ships", "daily"],
        ]
    );
}

#[test]
fn test_document_outer_length_matches_sentences() {
    let pipeline = Pipeline::surface().unwrap();
    let text = "First point here. Second, shorter. Third one has more words in it! And a fourth?";
    let sentences = pipeline.sentences(text);
    let doc = pipeline.tokenize_document(text);
    assert_eq!(doc.len(), sentences.len());
    for (sentence, tokens) in sentences.iter().zip(&doc) {
        assert_eq!(&pipeline.tokenize_sentence(sentence), tokens);
    }
}

#[test]
fn test_document_keeps_empty_sentences() {
    let pipeline = Pipeline::surface().unwrap();
    let doc = pipeline.tokenize_document("Acme grows. It is.");
    assert_eq!(doc, vec![vec!["acme".to_string(), "grows".to_string()], vec![]]);
}

#[test]
fn test_document_empty_input() {
    let pipeline = Pipeline::surface().unwrap();
    assert!(pipeline.tokenize_document("").is_empty());
    assert!(pipeline.tokenize_document(" \n\t").is_empty());
}

#[test]
fn test_document_joiners_stay_distinct() {
    let pipeline = Pipeline::surface().unwrap();
    let doc = pipeline.tokenize_document("Cloud-native storage for start-ups.");
    assert_eq!(doc, vec![vec!["cloud-native", "storage", "start-ups"]]);
}

// ==================== Website Tests ====================

#[test]
fn test_website_drops_short_fragments() {
    let pipeline = Pipeline::surface().unwrap();
    let fragments = ["ok", "this is fine", "a b"];
    assert_eq!(pipeline.drop_short_fragments(&fragments), vec!["this is fine"]);
    assert_eq!(pipeline.tokenize_website(&fragments), vec![vec!["fine"]]);
}

#[test]
fn test_website_probe_counts_raw_tokens() {
    let pipeline = Pipeline::surface().unwrap();
    // three raw tokens, none of which survive filtering
    let fragments = ["| the |"];
    assert_eq!(pipeline.drop_short_fragments(&fragments), vec!["| the |"]);
    assert_eq!(pipeline.tokenize_website(&fragments), vec![Vec::<String>::new()]);
}

#[test]
fn test_website_aggregates_with_separator() {
    let pipeline = Pipeline::surface().unwrap();
    let fragments = vec![
        "Our products include cloud storage".to_string(),
        "Menu".to_string(),
        "Contact us today".to_string(),
    ];
    assert_eq!(
        pipeline.aggregate_fragments(&pipeline.drop_short_fragments(&fragments)),
        "Our products include cloud storage. Contact us today"
    );
    assert_eq!(
        pipeline.tokenize_website(&fragments),
        vec![
            vec!["products", "include", "cloud", "storage"],
            vec!["contact", "today"],
        ]
    );
}

#[test]
fn test_website_all_fragments_dropped() {
    let pipeline = Pipeline::surface().unwrap();
    assert!(pipeline.tokenize_website(&["Home", "About us"]).is_empty());
}

#[test]
fn test_website_threshold_is_configurable() {
    let pipeline = Pipeline::new(PipelineConfig {
        min_fragment_tokens: 0,
        ..PipelineConfig::default()
    })
    .unwrap();
    assert_eq!(pipeline.tokenize_website(&["Pricing"]), vec![vec!["pricing"]]);
}
