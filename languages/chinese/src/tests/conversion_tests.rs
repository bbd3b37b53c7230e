use std::sync::Arc;
use std::thread;

use pinyin_core::dictionary::ConstructionError;
use pinyin_core::types::{SegmentKind, ToneFormat, render_line};

use crate::syllable::Syllable;
use crate::{build_store, convert};

const SOURCE: &str = r#"{
    "A": ["ā"],
    "B": ["bō"],
    "C": ["cí"],
    "AB": ["ābó"],
    "ABC": ["ābócì"],
    "行": ["xíng", "háng"],
    "银": ["yín"],
    "银行": ["yínháng"],
    "长": ["cháng", "zhǎng"],
    "女": ["nǚ"]
}"#;

fn spans(text: &str) -> Vec<String> {
    let store = build_store(SOURCE).unwrap();
    convert(&store, text, ToneFormat::Diacritic)
        .map(|s| s.source.to_string())
        .collect()
}

#[test]
fn test_coverage_concatenates_to_input() {
    let store = build_store(SOURCE).unwrap();
    let inputs = [
        "",
        "银行",
        "ABCABx银行行长",
        "  hello, 世界 ",
        "A7!",
        "😀行\n女\t",
        "行行行行",
    ];
    for input in inputs {
        let segments: Vec<_> = convert(&store, input, ToneFormat::Numeric).collect();
        let joined: String = segments.iter().map(|s| s.source).collect();
        assert_eq!(joined, input);

        let mut expected_position = 0;
        for segment in &segments {
            assert_eq!(segment.position, expected_position);
            assert!(!segment.source.is_empty());
            expected_position += segment.char_len();
        }
    }
}

#[test]
fn test_primary_reading_is_default() {
    let store = build_store(SOURCE).unwrap();
    for _ in 0..3 {
        let segments: Vec<_> = convert(&store, "行", ToneFormat::Diacritic).collect();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].reading, "xíng");
        assert_eq!(segments[0].alternatives, ["háng"]);
    }
}

#[test]
fn test_word_overrides_characters() {
    let store = build_store(SOURCE).unwrap();
    let segments: Vec<_> = convert(&store, "银行", ToneFormat::Diacritic).collect();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].kind, SegmentKind::Word);
    assert_eq!(segments[0].reading, "yín háng");
}

#[test]
fn test_longest_match_greediness() {
    assert_eq!(spans("ABC"), ["ABC"]);
    assert_eq!(spans("ABAB"), ["AB", "AB"]);
    assert_eq!(spans("ACB"), ["A", "C", "B"]);

    let store = build_store(SOURCE).unwrap();
    let segments: Vec<_> = convert(&store, "ABC", ToneFormat::Numeric).collect();
    assert_eq!(segments[0].reading, "a1 bo2 ci4");
}

#[test]
fn test_unknown_characters_pass_through() {
    let store = build_store(SOURCE).unwrap();
    let segments: Vec<_> = convert(&store, "A7!", ToneFormat::Diacritic).collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].reading, "ā");
    assert_eq!(segments[1].reading, "7");
    assert_eq!(segments[2].reading, "!");
    assert!(segments[1].is_passthrough());
    assert!(segments[2].is_passthrough());
}

#[test]
fn test_latin_text_is_idempotent() {
    let store = build_store(SOURCE).unwrap();
    for input in ["ni hao", "yín háng", "xie4 xie", "Tom, 2024!"] {
        let once = render_line(&convert(&store, input, ToneFormat::Diacritic).collect::<Vec<_>>());
        let twice = render_line(&convert(&store, &once, ToneFormat::Diacritic).collect::<Vec<_>>());
        assert_eq!(once, twice);
        let segments: Vec<_> = convert(&store, input, ToneFormat::Numeric).collect();
        assert!(segments.iter().all(|s| s.is_passthrough() && s.reading == s.source));
    }
}

#[test]
fn test_formats_agree_on_spelling_and_tone() {
    let store = build_store(SOURCE).unwrap();
    let text = "银行长女ABC";
    let marks: Vec<_> = convert(&store, text, ToneFormat::Diacritic).collect();
    let digits: Vec<_> = convert(&store, text, ToneFormat::Numeric).collect();
    assert_eq!(marks.len(), digits.len());

    let pairs = [("yín háng", "yin2 hang2"), ("cháng", "chang2"), ("nǚ", "nv3"), ("ā bó cì", "a1 bo2 ci4")];
    for ((m, d), (expected_m, expected_d)) in marks.iter().zip(&digits).zip(pairs) {
        assert_eq!(m.source, d.source);
        assert_eq!(m.reading, expected_m);
        assert_eq!(d.reading, expected_d);

        // numeric spells ü as v; otherwise both forms share one base spelling and tone
        for (marked, numbered) in m.reading.split(' ').zip(d.reading.split(' ')) {
            let syllable = Syllable::parse(marked).unwrap();
            let (spelling, digit) = numbered.split_at(numbered.len() - 1);
            let spelling = spelling.replace('v', "ü");
            assert_eq!(spelling, syllable.base());
            assert_eq!(digit.parse::<u8>().ok(), syllable.tone().number());
        }
    }
}

#[test]
fn test_place_names_split_before_initials() {
    let store = build_store(
        r#"{
            "河": ["hé"], "湖": ["hú"], "济": ["jǐ", "jì"], "南": ["nán"],
            "西": ["xī"], "安": ["ān"],
            "河南": ["hénán"], "湖南": ["húnán"], "济南": ["jǐnán"], "西安": ["xīān"]
        }"#,
    )
    .unwrap();
    let cases = [
        ("河南", "hé nán", "he2 nan2"),
        ("湖南", "hú nán", "hu2 nan2"),
        ("济南", "jǐ nán", "ji3 nan2"),
        ("西安", "xī ān", "xi1 an1"),
    ];
    let line = |text: &str, format: ToneFormat| {
        render_line(&convert(&store, text, format).collect::<Vec<_>>())
    };
    for (text, marked, numbered) in cases {
        assert_eq!(line(text, ToneFormat::Diacritic), marked);
        assert_eq!(line(text, ToneFormat::Numeric), numbered);
    }
}

#[test]
fn test_syllabic_nasal_entries() {
    let store =
        build_store(r#"{"嗯": ["ńg", "ń", "ňg"], "呣": ["m\u0304"], "哼": ["hēng", "hng"]}"#)
            .unwrap();
    let segments: Vec<_> = convert(&store, "嗯呣哼", ToneFormat::Numeric).collect();
    let readings: Vec<_> = segments.iter().map(|s| s.reading.as_str()).collect();
    assert_eq!(readings, ["ng2", "m1", "heng1"]);
    assert_eq!(segments[0].alternatives, ["n2", "ng3"]);
    assert_eq!(segments[2].alternatives, ["hng"]);

    let line = render_line(&convert(&store, "嗯", ToneFormat::Diacritic).collect::<Vec<_>>());
    assert_eq!(line, "ńg");
}

#[test]
fn test_two_char_key_with_one_syllable_rejected() {
    let err = build_store(r#"{"银": ["yín"], "行": ["háng"], "银行": ["yín"]}"#).unwrap_err();
    assert!(matches!(
        err,
        ConstructionError::SyllableCount { expected: 2, found: 1, .. }
    ));
    assert_eq!(err.key(), Some("银行"));
}

#[test]
fn test_duplicate_key_in_source_rejected() {
    let err = build_store(r#"{"行": ["xíng"], "行": ["háng"]}"#).unwrap_err();
    assert_eq!(err, ConstructionError::DuplicateKey("行".into()));
}

#[test]
fn test_store_shared_across_threads() {
    let store = Arc::new(build_store(SOURCE).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let segments: Vec<_> = convert(&store, "银行长", ToneFormat::Diacritic).collect();
                render_line(&segments)
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "yín háng cháng");
    }
}
