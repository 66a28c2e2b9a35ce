use std::collections::HashSet;

use freshcli::config::DEFAULT_FEATURE_MARKERS;
use freshcli::title::{normalize, parse, truncate};

fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|word| word.to_string()).collect()
}

fn default_markers() -> HashSet<String> {
    set(&DEFAULT_FEATURE_MARKERS)
}

#[test]
fn test_parse_splits_query_and_tags() {
    let parsed = parse("[FRESH] Lil Pump - Nice 2 Yeet ya [prod. by D4NNY]");

    assert_eq!(parsed.query, "lil pump nice 2 yeet ya");
    assert_eq!(parsed.tags, set(&["fresh", "prod.", "by", "d4nny"]));
}

#[test]
fn test_parse_handles_parentheses() {
    let parsed = parse("Kendrick Lamar - HUMBLE. (Official Video)");

    assert_eq!(parsed.query, "kendrick lamar humble.");
    assert_eq!(parsed.tags, set(&["official", "video"]));
}

#[test]
fn test_parse_drops_every_hyphen() {
    let parsed = parse("Jay-Z - Empire State (Re-Mix) [Alt-J]");

    assert_eq!(parsed.query, "jayz empire state");
    assert_eq!(parsed.tags, set(&["remix", "altj"]));
    assert!(!parsed.query.contains('-'));
    assert!(parsed.tags.iter().all(|tag| !tag.contains('-')));
}

#[test]
fn test_parse_mismatched_closer_keeps_tag_open() {
    let parsed = parse("Artist - Song (prod. by X]");

    assert_eq!(parsed.query, "artist song");
    assert!(parsed.tags.is_empty());
}

#[test]
fn test_parse_mismatched_closer_inside_closed_tag() {
    let parsed = parse("Song [live) version] Outro");

    assert_eq!(parsed.query, "song outro");
    assert_eq!(parsed.tags, set(&["live)", "version"]));
}

#[test]
fn test_parse_nested_opener_is_literal() {
    let parsed = parse("Song [a (b) c] end");

    assert_eq!(parsed.query, "song end");
    assert_eq!(parsed.tags, set(&["a", "(b)", "c"]));
}

#[test]
fn test_parse_unterminated_tag_is_dropped() {
    let parsed = parse("Travis Scott - Sicko Mode [FRESH");

    assert_eq!(parsed.query, "travis scott sicko mode");
    assert!(parsed.tags.is_empty());
}

#[test]
fn test_parse_stray_closer_outside_tag() {
    let parsed = parse("Song ] Title )");

    assert_eq!(parsed.query, "song title");
    assert!(parsed.tags.is_empty());
}

#[test]
fn test_parse_tags_have_set_semantics() {
    let parsed = parse("[FRESH] Song [fresh] (FRESH)");

    assert_eq!(parsed.query, "song");
    assert_eq!(parsed.tags, set(&["fresh"]));
}

#[test]
fn test_parse_skips_empty_and_punctuation_tags() {
    let parsed = parse("Song [] (   ) [. , fresh !]");

    assert_eq!(parsed.query, "song");
    assert_eq!(parsed.tags, set(&["fresh"]));
}

#[test]
fn test_parse_collapses_whitespace() {
    let parsed = parse("  Artist   -\tSong  Title  ");

    assert_eq!(parsed.query, "artist song title");
}

#[test]
fn test_parse_empty_title() {
    let parsed = parse("");

    assert!(parsed.query.is_empty());
    assert!(parsed.tags.is_empty());
}

#[test]
fn test_parse_balanced_titles_leave_no_brackets_in_query() {
    let titles = [
        "[FRESH] A - B",
        "A - B (feat. C)",
        "[FRESH ALBUM] A - B [prod. D] (Remix)",
        "(Live) A [2019]",
    ];

    for title in titles {
        let parsed = parse(title);
        assert!(
            !parsed.query.contains(['[', ']', '(', ')']),
            "brackets left in query of {:?}: {:?}",
            title,
            parsed.query
        );
    }
}

#[test]
fn test_truncate_at_marker() {
    assert_eq!(truncate("drake ft future", &set(&["ft"])), "drake");
}

#[test]
fn test_truncate_without_marker_is_identity() {
    assert_eq!(
        truncate("no markers here", &set(&["ft"])),
        "no markers here"
    );
}

#[test]
fn test_truncate_uses_first_marker() {
    let markers = set(&["ft", "feat"]);

    assert_eq!(
        truncate("a b feat c ft d", &markers),
        "a b"
    );
}

#[test]
fn test_truncate_compares_lowercase() {
    assert_eq!(truncate("Drake FT Future", &set(&["ft"])), "Drake");
}

#[test]
fn test_truncate_marker_first_yields_empty() {
    assert_eq!(truncate("ft future", &set(&["ft"])), "");
}

#[test]
fn test_truncate_output_is_prefix() {
    let markers = default_markers();
    let queries = [
        "travis scott sicko mode feat. drake",
        "lil pump nice 2 yeet ya",
        "a featuring b with c",
        "",
    ];

    for query in queries {
        let truncated = truncate(query, &markers);
        let input: Vec<&str> = query.split_whitespace().collect();
        let output: Vec<&str> = truncated.split_whitespace().collect();
        assert!(output.len() <= input.len());
        assert_eq!(&input[..output.len()], output.as_slice());
    }
}

#[test]
fn test_normalize_removes_unbracketed_feature() {
    let normalized = normalize(
        "[FRESH] Drake - Toosie Slide ft. Future",
        &default_markers(),
    );

    assert_eq!(normalized.query, "drake toosie slide");
    assert!(normalized.has_tag("fresh"));
}

#[test]
fn test_normalize_keeps_bracketed_feature_as_tags() {
    let normalized = normalize("Drake - Chicago Freestyle (feat. Giveon)", &default_markers());

    assert_eq!(normalized.query, "drake chicago freestyle");
    assert_eq!(normalized.tags, set(&["feat.", "giveon"]));
}

#[test]
fn test_normalize_keeps_with_in_song_title() {
    let normalized = normalize("[FRESH] Drake - Come With Me", &default_markers());

    assert_eq!(normalized.query, "drake come with me");
}

#[test]
fn test_normalize_truncates_at_w_slash() {
    let normalized = normalize("Future - Stay With Me w/ Drake", &default_markers());

    assert_eq!(normalized.query, "future stay with me");
}
