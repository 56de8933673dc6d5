//! Execution tests for fetching a species by id.
//!
//! Uses wiremock to mock the catalog and test the actual request flow.

use std::time::Duration;

use pokeapi::{ClientConfig, Get, PokeApiClient, PokeApiError, Species};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SPRITES: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/";

fn client_for(server: &MockServer) -> PokeApiClient {
    PokeApiClient::new(&server.uri(), SPRITES).unwrap()
}

#[tokio::test]
async fn test_get_species_builds_entity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon-species/25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 25,
            "name": "pikachu",
            "order": 35,
            "is_legendary": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let species = Species::get(&client_for(&mock_server), 25).await.unwrap();

    assert_eq!(species.id, 25);
    assert_eq!(species.name, "pikachu");
    assert_eq!(species.display_name(), "Pikachu");
    assert_eq!(
        species.image_url,
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png"
    );
}

#[tokio::test]
async fn test_image_url_ignores_response_content() {
    let mock_server = MockServer::start().await;

    // The id in the body disagrees with the path and a sprite url is offered;
    // neither may leak into the entity.
    Mock::given(method("GET"))
        .and(path("/pokemon-species/151"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 9999,
            "name": "mew",
            "sprites": { "front_default": "https://elsewhere.test/mew.png" }
        })))
        .mount(&mock_server)
        .await;

    let species = Species::get(&client_for(&mock_server), 151).await.unwrap();

    assert_eq!(species.id, 151);
    assert_eq!(
        species.image_url,
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/151.png"
    );
}

#[tokio::test]
async fn test_get_unknown_species_is_http_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon-species/99999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let err = Species::get(&client_for(&mock_server), 99999)
        .await
        .unwrap_err();

    match &err {
        PokeApiError::HttpStatusError {
            status_code,
            message,
        } => {
            assert_eq!(*status_code, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("Expected HttpStatusError, got {other:?}"),
    }
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_server_error_uses_json_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon-species/1"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(serde_json::json!({"detail": "maintenance"})),
        )
        .mount(&mock_server)
        .await;

    let err = Species::get(&client_for(&mock_server), 1).await.unwrap_err();

    assert!(matches!(
        err,
        PokeApiError::HttpStatusError { status_code: 503, ref message } if message == "maintenance"
    ));
}

#[tokio::test]
async fn test_get_missing_name_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon-species/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 4})))
        .mount(&mock_server)
        .await;

    let err = Species::get(&client_for(&mock_server), 4).await.unwrap_err();
    assert!(matches!(err, PokeApiError::ParseError(_)));
}

#[tokio::test]
async fn test_get_invalid_json_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon-species/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let err = Species::get(&client_for(&mock_server), 7).await.unwrap_err();
    assert!(matches!(err, PokeApiError::ParseError(_)));
}

#[tokio::test]
async fn test_repeated_gets_are_not_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon-species/133"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "eevee"
        })))
        .expect(2) // Each call goes to the network
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let first = Species::get(&client, 133).await.unwrap();
    let second = Species::get(&client, 133).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // Grab a free port and release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = PokeApiClient::new(&format!("http://{addr}"), SPRITES).unwrap();
    let err = Species::get(&client, 1).await.unwrap_err();

    assert!(matches!(err, PokeApiError::NetworkError(_)));
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_slow_response_times_out_as_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon-species/25"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"name": "pikachu"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::default()
        .with_api_url(mock_server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = PokeApiClient::with_config(config).unwrap();

    let err = Species::get(&client, 25).await.unwrap_err();

    match &err {
        PokeApiError::NetworkError(e) => assert!(e.is_timeout()),
        other => panic!("Expected NetworkError, got {other:?}"),
    }
}
