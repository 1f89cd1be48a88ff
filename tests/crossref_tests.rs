use orcid_works::crossref::CrossrefClient;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_author_list_formats_given_family_pairs() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/works/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": {
                "author": [
                    {"given": "Jane", "family": "Doe"},
                    {"given": "John", "family": "Smith"}
                ]
            }
        })))
        .mount(&mock_server)
        .await;

    let client = CrossrefClient::new(mock_server.uri(), 30);
    let authors = client.author_list("10.1234/x").await.unwrap();

    assert_eq!(authors, Some("Jane Doe, John Smith".to_string()));
}

#[tokio::test]
async fn test_author_list_percent_encodes_the_doi() {
    let mock_server = MockServer::start().await;

    // The slash in the DOI must not open a new path segment
    Mock::given(method("GET"))
        .and(path_regex(r"^/works/10\.1234%2Fx$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": {
                "author": [{"given": "Jane", "family": "Doe"}]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CrossrefClient::new(mock_server.uri(), 30);
    let authors = client.author_list("10.1234/x").await.unwrap();

    assert_eq!(authors, Some("Jane Doe".to_string()));
}

#[tokio::test]
async fn test_author_list_none_when_record_has_no_author_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/works/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": {
                "title": ["An Authorless Record"]
            }
        })))
        .mount(&mock_server)
        .await;

    let client = CrossrefClient::new(mock_server.uri(), 30);
    let authors = client.author_list("10.1234/x").await.unwrap();

    assert_eq!(authors, None);
}

#[tokio::test]
async fn test_author_list_none_on_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/works/.+$"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Resource not found."))
        .mount(&mock_server)
        .await;

    let client = CrossrefClient::new(mock_server.uri(), 30);
    let authors = client.author_list("10.9999/missing").await.unwrap();

    assert_eq!(authors, None);
}

#[tokio::test]
async fn test_author_list_none_when_body_is_not_a_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/works/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = CrossrefClient::new(mock_server.uri(), 30);
    let authors = client.author_list("10.1234/x").await.unwrap();

    assert_eq!(authors, None);
}

#[tokio::test]
async fn test_author_list_keeps_partial_names() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/works/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": {
                "author": [
                    {"family": "Collaboration"},
                    {"given": "Jane", "family": "Doe"}
                ]
            }
        })))
        .mount(&mock_server)
        .await;

    let client = CrossrefClient::new(mock_server.uri(), 30);
    let authors = client.author_list("10.1234/x").await.unwrap();

    assert_eq!(authors, Some("Collaboration, Jane Doe".to_string()));
}
