//! Endpoint behavior through the fully layered router.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{default_app, get};

#[tokio::test]
async fn test_greet_default() {
    let res = get(default_app(), "/greet").await;
    assert_eq!(res.status, StatusCode::OK);
    let body = res.json();
    assert_eq!(body["message"], "Hello, World!");
    assert_eq!(body["query_params"], json!({}));
}

#[tokio::test]
async fn test_greet_with_age() {
    let body = get(default_app(), "/greet?name=John&age=25").await.json();
    assert_eq!(body["message"], "Hello, John! You are 25 years old.");
    assert_eq!(body["query_params"], json!({"name": "John", "age": "25"}));
}

#[tokio::test]
async fn test_greet_zero_age() {
    let body = get(default_app(), "/greet?name=Ada&age=0").await.json();
    assert_eq!(body["message"], "Hello, Ada! You are 0 years old.");
}

#[tokio::test]
async fn test_calculate_operations() {
    let cases = [
        ("add", 10.0, 5.0, 15.0),
        ("subtract", 10.0, 5.0, 5.0),
        ("multiply", 3.0, 7.0, 21.0),
        ("divide", 9.0, 4.0, 2.25),
        ("add", -1.5, 0.25, -1.25),
    ];
    for (op, x, y, expected) in cases {
        let uri = format!("/calculate?operation={}&x={}&y={}", op, x, y);
        let body = get(default_app(), &uri).await.json();
        assert_eq!(body["result"].as_f64(), Some(expected), "{}", uri);
        assert_eq!(body["operation"], op);
        assert_eq!(body["x"].as_f64(), Some(x));
        assert_eq!(body["y"].as_f64(), Some(y));
    }
}

#[tokio::test]
async fn test_calculate_errors_are_results() {
    let res = get(default_app(), "/calculate?operation=divide&x=1&y=0").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["result"], "Error: Division by zero");

    let body = get(default_app(), "/calculate?operation=bogus&x=1&y=1").await.json();
    assert_eq!(body["result"], "Error: Invalid operation");
}

#[tokio::test]
async fn test_calculate_malformed_numbers_default() {
    let body = get(default_app(), "/calculate?x=abc&y=2").await.json();
    assert_eq!(body["x"].as_f64(), Some(0.0));
    assert_eq!(body["result"].as_f64(), Some(2.0));
    assert_eq!(body["query_params"], json!({"x": "abc", "y": "2"}));
}

#[tokio::test]
async fn test_calculate_non_finite_input_defaults() {
    let body = get(default_app(), "/calculate?x=inf&y=1").await.json();
    assert_eq!(body["x"].as_f64(), Some(0.0));
    assert_eq!(body["result"].as_f64(), Some(1.0));

    let body = get(default_app(), "/calculate?operation=multiply&x=nan&y=1e999").await.json();
    assert_eq!(body["x"].as_f64(), Some(0.0));
    assert_eq!(body["y"].as_f64(), Some(0.0));
    assert_eq!(body["result"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_calculate_overflow_is_error_result() {
    let res = get(default_app(), "/calculate?operation=multiply&x=1e308&y=1e308").await;
    assert_eq!(res.status, StatusCode::OK);
    let body = res.json();
    assert_eq!(body["result"], "Error: Result out of range");
    assert_eq!(body["x"].as_f64(), Some(1e308));
}

#[tokio::test]
async fn test_stats_non_finite_numbers_is_error() {
    for uri in ["/stats?numbers=1,nan", "/stats?numbers=inf,2&operation=min"] {
        let res = get(default_app(), uri).await;
        assert_eq!(res.status, StatusCode::OK);
        let body = res.json();
        assert!(body.get("error").is_some(), "{}", uri);
        assert!(body.get("results").is_none(), "{}", uri);
    }
}

#[tokio::test]
async fn test_stats_overflowing_sum_is_error_value() {
    let body = get(default_app(), "/stats?numbers=1e308,1e308&operation=sum").await.json();
    assert_eq!(body["results"]["sum"], "Error: Result out of range");
}

#[tokio::test]
async fn test_stats_sum() {
    let body = get(default_app(), "/stats?numbers=1,2,3,4,5&operation=sum").await.json();
    assert_eq!(body["results"]["sum"].as_f64(), Some(15.0));
    assert_eq!(body["results"].as_object().unwrap().len(), 1);
    assert_eq!(body["operation"], "sum");
}

#[tokio::test]
async fn test_stats_all_by_default() {
    let body = get(default_app(), "/stats").await.json();
    let results = body["results"].as_object().unwrap();
    assert_eq!(results.len(), 5);
    assert_eq!(results["mean"].as_f64(), Some(3.0));
    assert_eq!(results["min"].as_f64(), Some(1.0));
    assert_eq!(results["max"].as_f64(), Some(5.0));
    assert_eq!(body["numbers"], json!([1.0, 2.0, 3.0, 4.0, 5.0]));
}

#[tokio::test]
async fn test_stats_invalid_numbers_is_200_with_error() {
    let res = get(default_app(), "/stats?numbers=a,b,c").await;
    assert_eq!(res.status, StatusCode::OK);
    let body = res.json();
    assert!(body.get("error").is_some());
    assert!(body.get("results").is_none());
}

#[tokio::test]
async fn test_data_csv_desc() {
    let res = get(default_app(), "/data?format=csv&limit=2&sort=desc").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.header("content-type").unwrap().starts_with("text/csv"));

    let lines: Vec<_> = res.body.lines().collect();
    assert_eq!(lines, vec!["id,name,value", "1,Alice,100", "5,Eve,95"]);
}

#[tokio::test]
async fn test_data_limit_exceeds_dataset() {
    let body = get(default_app(), "/data?limit=10").await.json();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 7);
    assert_eq!(data[0]["name"], "Diana");
    assert_eq!(data[0]["value"], 78);
}

#[tokio::test]
async fn test_data_metadata() {
    let body = get(default_app(), "/data?include_metadata=true").await.json();
    assert_eq!(body["metadata"]["total_records"], 7);
    assert_eq!(body["metadata"]["returned_records"], 5);
    assert_eq!(body["metadata"]["sort_order"], "asc");
}

#[tokio::test]
async fn test_random_n() {
    let body = get(default_app(), "/random/5").await.json();
    let values = body.as_array().unwrap();
    assert_eq!(values.len(), 5);
    for v in values {
        let v = v.as_f64().unwrap();
        assert!((0.0..1.0).contains(&v));
    }
}

#[tokio::test]
async fn test_random_default_count() {
    let body = get(default_app(), "/random").await.json();
    assert_eq!(body.as_array().unwrap().len(), 100);
}

#[tokio::test]
async fn test_random_enhanced_seed_is_deterministic() {
    let uri = "/random_enhanced?count=3&seed=42&distribution=uniform&min=0&max=1";
    let first = get(default_app(), uri).await.json();
    let second = get(default_app(), uri).await.json();

    assert_eq!(first["numbers"].as_array().unwrap().len(), 3);
    assert_eq!(first["numbers"], second["numbers"]);
    assert_eq!(first["parameters"]["seed"], 42);
}

#[tokio::test]
async fn test_random_enhanced_integers() {
    let body = get(
        default_app(),
        "/random_enhanced?count=20&min=1&max=6&format=integers",
    )
    .await
    .json();
    let values = body["numbers"].as_array().unwrap();
    assert_eq!(values.len(), 20);
    assert!(values
        .iter()
        .all(|v| (1..=5).contains(&v.as_i64().unwrap())));
}

#[tokio::test]
async fn test_query_params_echo_matches_submitted() {
    let uris = [
        "/greet?name=Ann%20Lee&extra=1",
        "/calculate?operation=multiply&x=3&y=7",
        "/stats?numbers=10,20,30&operation=mean",
        "/data?format=json&limit=3",
        "/random_enhanced?count=2&distribution=normal",
    ];
    for uri in uris {
        let body = get(default_app(), uri).await.json();
        let query = uri.split_once('?').unwrap().1;
        let expected: serde_json::Map<String, serde_json::Value> =
            url::form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), json!(v.into_owned())))
                .collect();
        assert_eq!(body["query_params"], serde_json::Value::Object(expected), "{}", uri);
    }
}

#[tokio::test]
async fn test_help_and_root_match() {
    let help = get(default_app(), "/help").await.json();
    let root = get(default_app(), "/").await.json();
    assert_eq!(help, root);
    assert_eq!(help["endpoints"].as_array().unwrap().len(), 5);
    assert_eq!(
        help["endpoints"][0]["examples"][0],
        "https://demo.test/greet?name=John&age=25"
    );
}

#[tokio::test]
async fn test_redirect_flow() {
    let res = get(default_app(), "/redirect_test").await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(res.header("location"), Some("/another_page"));

    let page = get(default_app(), "/another_page").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.header("content-type").unwrap().starts_with("text/plain"));
    assert!(page.body.ends_with("url_for('index_page') returns /."));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let res = get(default_app(), "/nope").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let res = get(default_app(), "/greet").await;
    assert!(res.header("x-request-id").is_some());
}
