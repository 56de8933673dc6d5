//! Execution tests for the species count query.

use pokeapi::{Count, PokeApiClient, PokeApiError, Species};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PokeApiClient {
    PokeApiClient::new(&server.uri(), pokeapi::DEFAULT_SPRITE_URL).unwrap()
}

#[tokio::test]
async fn test_count_returns_exact_value() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon-species"))
        .and(query_param("limit", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1025,
            "next": "https://pokeapi.co/api/v2/pokemon-species?offset=0&limit=0",
            "previous": null,
            "results": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let count = Species::count(&client_for(&mock_server)).await.unwrap();
    assert_eq!(count, 1025);
}

#[tokio::test]
async fn test_count_works_under_path_prefix() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon-species"))
        .and(query_param("limit", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"count": 3})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PokeApiClient::new(
        &format!("{}/api/v2", mock_server.uri()),
        pokeapi::DEFAULT_SPRITE_URL,
    )
    .unwrap();

    assert_eq!(Species::count(&client).await.unwrap(), 3);
}

#[tokio::test]
async fn test_count_missing_field_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon-species"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": []
        })))
        .mount(&mock_server)
        .await;

    let err = Species::count(&client_for(&mock_server)).await.unwrap_err();
    assert!(matches!(err, PokeApiError::ParseError(_)));
}

#[tokio::test]
async fn test_count_wrong_type_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon-species"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": "lots"
        })))
        .mount(&mock_server)
        .await;

    let err = Species::count(&client_for(&mock_server)).await.unwrap_err();
    assert!(matches!(err, PokeApiError::ParseError(_)));
}

#[tokio::test]
async fn test_count_server_error_is_http_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon-species"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = Species::count(&client_for(&mock_server)).await.unwrap_err();
    assert!(matches!(
        err,
        PokeApiError::HttpStatusError {
            status_code: 500,
            ..
        }
    ));
}

#[tokio::test]
async fn test_count_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon-species"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "12"))
        .expect(1) // Reported, never retried
        .mount(&mock_server)
        .await;

    let err = Species::count(&client_for(&mock_server)).await.unwrap_err();
    assert!(matches!(
        err,
        PokeApiError::RateLimited {
            retry_after_secs: Some(12)
        }
    ));
}
