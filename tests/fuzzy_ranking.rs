use betters3tui::search::{Candidate, Fuzzy};
use betters3tui::BetterS3Error;
use proptest::prelude::*;
use serde_json::{json, Value};

fn scenario() -> Vec<Candidate<()>> {
    vec![
        Candidate::new("test-file", 1.0, ()),
        Candidate::new("another-file", 2.0, ()),
        Candidate::new("project.rb", 0.5, ()),
        Candidate::new("README.md", 1.5, ()),
    ]
}

fn texts<T: betters3tui::search::Searchable>(fuzzy: &Fuzzy<T>, query: &str) -> Vec<String> {
    fuzzy
        .match_query(query)
        .into_iter()
        .map(|m| m.entry.text().to_string())
        .collect()
}

#[test]
fn scenario_queries() {
    let fuzzy = Fuzzy::new(scenario()).unwrap();

    let file = texts(&fuzzy, "file");
    assert!(file.contains(&"test-file".to_string()));
    assert!(file.contains(&"another-file".to_string()));

    let r = texts(&fuzzy, "r");
    assert!(r.contains(&"README.md".to_string()));

    assert!(texts(&fuzzy, "xyz123").is_empty());
}

#[test]
fn one_char_query_reaches_word_boundary() {
    let fuzzy = Fuzzy::new(scenario()).unwrap();
    let readme = fuzzy
        .match_query("r")
        .into_iter()
        .find(|m| m.entry.text() == "README.md")
        .unwrap();
    assert_eq!(readme.positions, vec![0]);
}

#[test]
fn empty_query_keeps_index_order() {
    let fuzzy = Fuzzy::new(scenario()).unwrap();
    let all: Vec<_> = fuzzy.match_query("").into_iter().collect();
    assert_eq!(all.len(), 4);
    let indices: Vec<usize> = all.iter().map(|m| m.entry.index()).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert!(all.iter().all(|m| m.positions.is_empty()));
    assert_eq!(all[1].score, 2.0);
}

#[test]
fn exact_match_scores_highest() {
    let fuzzy = Fuzzy::new(vec!["report.pdf", "Report", "rep-ort"]).unwrap();
    let results: Vec<_> = fuzzy.match_query("report").into_iter().collect();
    assert_eq!(results[0].entry.text(), "Report");
    assert_eq!(results[0].positions, vec![0, 1, 2, 3, 4, 5]);
    assert!(results[0].score > results[1].score);
}

#[test]
fn base_score_breaks_equal_text() {
    let fuzzy = Fuzzy::new(vec![
        Candidate::new("shared-name", 1.0, "low"),
        Candidate::new("shared-name", 10.0, "high"),
    ])
    .unwrap();
    for query in ["shared", "name", "s", "e-n"] {
        let first = fuzzy.match_query(query).into_iter().next().unwrap();
        assert_eq!(first.entry.data().data, "high", "query {query}");
    }
}

#[test]
fn equal_scores_fall_back_to_index() {
    let fuzzy = Fuzzy::new(vec!["alpha", "alpha", "alpha"]).unwrap();
    let indices: Vec<usize> = fuzzy.match_query("al").into_iter().map(|m| m.entry.index()).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn key_spellings_rank_identically() {
    let snake: Vec<Value> = vec![
        json!({"text": "logs/", "base_score": 0.5}),
        json!({"text": "backup.tar", "base_score": 3.0}),
        json!({"text": "bucket-list.txt"}),
    ];
    let camel: Vec<Value> = vec![
        json!({"text": "logs/", "baseScore": 0.5}),
        json!({"text": "backup.tar", "baseScore": 3.0}),
        json!({"text": "bucket-list.txt", "baseScore": null}),
    ];
    let typed = vec![
        Candidate::new("logs/", 0.5, ()),
        Candidate::new("backup.tar", 3.0, ()),
        Candidate::new("bucket-list.txt", 0.0, ()),
    ];

    let snake = Fuzzy::new(snake).unwrap();
    let camel = Fuzzy::new(camel).unwrap();
    let typed = Fuzzy::new(typed).unwrap();

    for query in ["", "b", "t", "lo", "bk"] {
        let expected: Vec<(usize, Vec<usize>, f64)> = typed
            .match_query(query)
            .into_iter()
            .map(|m| (m.entry.index(), m.positions, m.score))
            .collect();
        for fuzzy in [&snake, &camel] {
            let actual: Vec<(usize, Vec<usize>, f64)> = fuzzy
                .match_query(query)
                .into_iter()
                .map(|m| (m.entry.index(), m.positions, m.score))
                .collect();
            assert_eq!(actual, expected, "query {query:?}");
        }
    }
}

#[test]
fn malformed_records_are_rejected_at_index_time() {
    let err = Fuzzy::new(vec![json!({"text": "ok"}), json!({"name": "missing"})]).unwrap_err();
    assert!(matches!(err, BetterS3Error::MalformedEntry { index: 1, .. }));
    assert!(err.is_usage_error());

    let err = Fuzzy::new(vec![json!({"text": "ok", "base_score": "high"})]).unwrap_err();
    assert!(matches!(err, BetterS3Error::MalformedEntry { index: 0, .. }));
}

#[test]
fn limit_zero_and_oversized() {
    let fuzzy = Fuzzy::new(scenario()).unwrap();
    assert_eq!(fuzzy.match_query("e").limit(0).count(), 0);
    let full = fuzzy.match_query("e").into_iter().count();
    assert_eq!(fuzzy.match_query("e").limit(100).len(), full);
}

proptest! {
    #[test]
    fn limit_is_prefix_of_full_ranking(
        names in prop::collection::vec("[a-d/._-]{1,8}", 0..20),
        query in "[a-d]{0,3}",
        n in 0usize..25,
    ) {
        let fuzzy = Fuzzy::new(names).unwrap();
        let full: Vec<(usize, Vec<usize>)> = fuzzy
            .match_query(&query)
            .into_iter()
            .map(|m| (m.entry.index(), m.positions))
            .collect();
        let limited: Vec<(usize, Vec<usize>)> = fuzzy
            .match_query(&query)
            .limit(n)
            .map(|m| (m.entry.index(), m.positions))
            .collect();

        prop_assert_eq!(limited.len(), n.min(full.len()));
        prop_assert_eq!(&limited[..], &full[..limited.len()]);
    }

    #[test]
    fn positions_spell_the_query(
        name in "[a-zA-Z0-9 ._/-]{0,16}",
        query in "[a-z]{1,4}",
    ) {
        let fuzzy = Fuzzy::new(vec![name.clone()]).unwrap();
        if let Some(m) = fuzzy.match_query(&query).into_iter().next() {
            let chars: Vec<char> = name.chars().collect();
            let spelled: String = m.positions.iter().map(|&i| chars[i].to_ascii_lowercase()).collect();
            prop_assert_eq!(spelled, query);
            prop_assert!(m.positions.windows(2).all(|w| w[0] < w[1]));
        } else {
            let lower = name.to_ascii_lowercase();
            let mut rest = lower.chars();
            let is_subsequence = query.chars().all(|q| rest.any(|c| c == q));
            prop_assert!(!is_subsequence);
        }
    }
}
