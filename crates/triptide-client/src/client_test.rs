use super::*;

fn test_client(base_url: &str) -> TripTideClient {
    TripTideClient::new(base_url, 30, "triptide-test").expect("client construction should not fail")
}

#[test]
fn endpoint_joins_relative_path() {
    let client = test_client("http://127.0.0.1:5000");
    let url = client.endpoint("api/weather").unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/weather");
}

#[test]
fn endpoint_strips_duplicate_trailing_slashes() {
    let client = test_client("http://127.0.0.1:5000//");
    let url = client.endpoint("api/similar").unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/similar");
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    let client = test_client("https://example.com/triptide");
    let url = client.endpoint("static/data/stays.json").unwrap();
    assert_eq!(url.as_str(), "https://example.com/triptide/static/data/stays.json");
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = TripTideClient::new("not a url", 30, "triptide-test");
    assert!(matches!(result, Err(ClientError::InvalidUrl { .. })));
}

#[test]
fn parse_body_reports_path_as_context() {
    let url = Url::parse("http://localhost/api/weather").unwrap();
    let err = parse_body::<AdminMetrics>(&url, "<html>").unwrap_err();
    assert!(
        matches!(err, ClientError::Deserialize { ref context, .. } if context == "/api/weather"),
        "got {err:?}"
    );
}
