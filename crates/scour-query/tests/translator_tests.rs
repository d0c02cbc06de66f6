//! End-to-end translation scenarios against the stock registry.

use scour_query::{QueryNode, Translator};
use scour_registry::CollectionRegistry;
use serde_json::json;

fn translator() -> Translator {
    Translator::new(CollectionRegistry::builtin()).expect("builtin registry")
}

#[test]
fn result_limit_always_within_bounds() {
    let translator = translator();
    let inputs = [
        "",
        "show me logs",
        "top 0 errors",
        "top 5000 errors",
        "last 99999 days limit 99999",
        "apache errors top 1000",
    ];
    for input in inputs {
        let request = translator.translate(input);
        assert!(
            (1..=1000).contains(&request.result_limit),
            "limit {} out of bounds for input '{input}'",
            request.result_limit
        );
    }
}

#[test]
fn lookback_conversions_match_policy() {
    let translator = translator();
    let cases = [
        ("last 24 hours", 24),
        ("last 15 minutes", 1),
        ("last 90 minutes", 2),
        ("last 7 days", 168),
    ];
    for (input, hours) in cases {
        let parsed = translator.parse(input);
        assert_eq!(parsed.lookback_hours, Some(hours), "input '{input}'");
    }
}

#[test]
fn failed_login_example_parses_as_specified() {
    let translator = translator();
    let parsed = translator.parse("Show me failed login events from apache in the last 24 hours");

    assert_eq!(parsed.collections, Some(vec!["apache".to_string()]));
    assert_eq!(parsed.lookback_hours, Some(24));
    assert_eq!(parsed.result_limit, 10);

    let keyword = parsed.keyword.expect("keyword should survive");
    for noise in ["apache", "show", "from", "the", "in"] {
        assert!(
            !keyword.split(' ').any(|lemma| lemma == noise),
            "keyword '{keyword}' should not contain '{noise}'"
        );
    }
    assert!(keyword.contains("login"));
}

#[test]
fn hdfs_example_with_limit_after_time_phrase() {
    let translator = translator();
    let parsed = translator.parse("List all error logs from hdfs last 7 days top 50");

    assert_eq!(parsed.collections, Some(vec!["hdfs".to_string()]));
    assert_eq!(parsed.lookback_hours, Some(168));
    assert_eq!(parsed.result_limit, 50);
}

#[test]
fn no_collection_mention_targets_everything() {
    let translator = translator();
    let request = translator.translate("disk failures last 2 hours");
    assert_eq!(request.collections, vec!["apache", "hdfs", "thunderbird"]);
}

#[test]
fn no_clauses_compiles_to_exactly_match_all() {
    let translator = translator();
    let request = translator.translate("show me logs");
    assert_eq!(request.query, QueryNode::MatchAll);
    assert_eq!(request.query.to_value(), json!({ "match_all": {} }));
}

#[test]
fn translation_is_deterministic() {
    let translator = translator();
    let input = "Show me failed login events from apache in the last 24 hours top 20";

    let first = translator.translate(input);
    let second = translator.translate(input);
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).expect("serialize");
    let second_json = serde_json::to_string(&second).expect("serialize");
    assert_eq!(first_json, second_json);
}

#[test]
fn lone_range_clause_round_trips_the_extracted_hours() {
    let translator = translator();
    let parsed = translator.parse("apache logs last 36 hours");
    let hours = parsed.lookback_hours.expect("time phrase");
    let request = translator.compile(&parsed);

    let QueryNode::Range { gte, lte, .. } = &request.query else {
        unreachable!("expected a lone range clause, got {:?}", request.query);
    };
    assert_eq!(gte, &format!("now-{hours}h"));
    assert_eq!(lte, "now");
}

#[test]
fn full_query_produces_conjunction_with_range_first() {
    let translator = translator();
    let request =
        translator.translate("Show me failed login events from apache in the last 24 hours top 20");

    assert_eq!(request.collections, vec!["apache"]);
    assert_eq!(request.result_limit, 20);

    let QueryNode::Bool { must } = &request.query else {
        unreachable!("expected a conjunction, got {:?}", request.query);
    };
    assert!(matches!(&must[0], QueryNode::Range { .. }));
    assert!(matches!(&must[1], QueryNode::MultiMatch { .. }));
}

#[test]
fn search_body_matches_engine_shape() {
    let translator = translator();
    let request = translator.translate("show me logs top 3");
    assert_eq!(
        request.body(),
        json!({ "size": 3, "query": { "match_all": {} } })
    );
}
