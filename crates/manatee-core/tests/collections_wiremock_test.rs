//! Collection listing, creation and removal against a mocked Trello API.

mod common;

use manatee_core::sync::Owner;
use manatee_core::Error;
use serde_json::json;
use wiremock::matchers::{any, body_string_contains, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, NEVER_STALE};

fn sticker_json(id: &str, image: &str) -> serde_json::Value {
    json!({
        "id": id,
        "image": image,
        "imageUrl": format!("https://trello.com/images/stickers/{image}.png"),
        "left": 10.0,
        "top": 20.0,
        "zIndex": 1,
        "rotate": 0
    })
}

// =============================================================================
// READ-ONLY LISTINGS
// =============================================================================

#[tokio::test]
async fn test_listing_is_cached_until_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards/b1/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "m1", "fullName": "Ada Lovelace", "username": "ada"},
            {"id": "m2", "fullName": "Alan Turing", "username": "alan"}
        ])))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server, NEVER_STALE);
    let board = client.board("b1");

    let members = board.members().list().await.unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(board.members().list().await.unwrap().len(), 2);

    board.members().refresh().await;
    board.members().list().await.unwrap();

    client.shut_down().await;
}

#[tokio::test]
async fn test_listed_json_feeds_entity_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/l1/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "c1", "name": "Draft announcement", "idList": "l1", "pos": 1024}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cards/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "c1"})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, NEVER_STALE);
    let cards = client.list("l1").cards().list().await.unwrap();

    assert_eq!(cards[0].name().await.unwrap().as_deref(), Some("Draft announcement"));

    client.shut_down().await;
}

#[tokio::test]
async fn test_listing_merges_into_known_entity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "c1", "name": "Old name"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/boards/b1/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "c1", "name": "New name"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, NEVER_STALE);
    let card = client.card("c1");
    assert_eq!(card.name().await.unwrap().as_deref(), Some("Old name"));

    client.board("b1").cards().list().await.unwrap();
    assert_eq!(card.name().await.unwrap().as_deref(), Some("New name"));

    client.shut_down().await;
}

// =============================================================================
// CARD STICKERS
// =============================================================================

#[tokio::test]
async fn test_card_stickers_are_owned_by_card() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards/c1/stickers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([sticker_json("s1", "taco-cool")])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, NEVER_STALE);
    let stickers = client.card("c1").stickers().list().await.unwrap();

    assert_eq!(stickers.len(), 1);
    assert_eq!(stickers[0].owner(), Some(&Owner::Card("c1".to_string())));
    assert_eq!(stickers[0].name().await.unwrap().as_deref(), Some("taco-cool"));
    assert_eq!(stickers[0].rotation().await.unwrap(), Some(0));

    client.shut_down().await;
}

#[tokio::test]
async fn test_add_sticker_posts_placement() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cards/c1/stickers"))
        .and(query_param("image", "thumbsup"))
        .and(query_param("left", "12.5"))
        .and(query_param("top", "40"))
        .and(query_param("zIndex", "2"))
        .and(query_param("rotate", "45"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sticker_json("s9", "thumbsup")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, NEVER_STALE);
    let card = client.card("c1");

    let sticker = card.stickers().add("thumbsup", 12.5, 40.0, 2, 45).await.unwrap();
    assert_eq!(sticker.id(), "s9");
    assert_eq!(sticker.name().await.unwrap().as_deref(), Some("thumbsup"));

    client.shut_down().await;
}

#[tokio::test]
async fn test_add_sticker_validates_before_sending() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, NEVER_STALE);
    let stickers = client.card("c1");

    let err = stickers.stickers().add("heart", 0.0, 0.0, 0, 360).await.unwrap_err();
    match err {
        Error::Validation(e) => assert_eq!(e.field, "rotation"),
        other => panic!("expected validation error, got {other:?}"),
    }

    let err = stickers.stickers().add(" ", 0.0, 0.0, 0, 0).await.unwrap_err();
    match err {
        Error::Validation(e) => assert_eq!(e.field, "name"),
        other => panic!("expected validation error, got {other:?}"),
    }

    let err = stickers.stickers().add("heart", f64::NAN, 0.0, 0, 0).await.unwrap_err();
    match err {
        Error::Validation(e) => assert_eq!(e.field, "left"),
        other => panic!("expected validation error, got {other:?}"),
    }

    let err = stickers.stickers().add("heart", 0.0, f64::INFINITY, 0, 0).await.unwrap_err();
    match err {
        Error::Validation(e) => assert_eq!(e.field, "top"),
        other => panic!("expected validation error, got {other:?}"),
    }

    client.shut_down().await;
}

#[tokio::test]
async fn test_remove_sticker_deletes_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cards/c1/stickers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([sticker_json("s1", "rocketship")])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/cards/c1/stickers/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_value": null})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, NEVER_STALE);
    let card = client.card("c1");

    let stickers = card.stickers().list().await.unwrap();
    card.stickers().remove(&stickers[0]).await.unwrap();

    client.shut_down().await;
}

#[tokio::test]
async fn test_moving_card_sticker_updates_it() {
    let server = MockServer::start().await;
    let mut rotated = sticker_json("s1", "pete-happy");
    rotated["rotate"] = json!(90);
    Mock::given(method("PUT"))
        .and(path("/cards/c1/stickers/s1"))
        .and(query_param("rotate", "90"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rotated))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, NEVER_STALE);
    let sticker = client.card_sticker("c1", "s1");

    sticker.set_rotation(90).await.unwrap();
    assert_eq!(sticker.rotation().await.unwrap(), Some(90));

    client.shut_down().await;
}

// =============================================================================
// CUSTOM STICKERS AND CREATION
// =============================================================================

#[tokio::test]
async fn test_custom_sticker_upload_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/members/me/customStickers"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"llama.png\""))
        .and(body_string_contains("PNG fake image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cs1",
            "url": "https://trello-stickers.example/cs1.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, NEVER_STALE);
    let me = client.me();

    let sticker = me
        .stickers()
        .add(b"PNG fake image".to_vec(), "llama.png")
        .await
        .unwrap();
    assert_eq!(sticker.id(), "cs1");
    assert_eq!(sticker.owner(), Some(&Owner::Member("me".to_string())));
    assert_eq!(
        sticker.image_url().await.unwrap().as_deref(),
        Some("https://trello-stickers.example/cs1.png")
    );

    client.shut_down().await;
}

#[tokio::test]
async fn test_add_list_to_board() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/lists"))
        .and(query_param("name", "Review"))
        .and(query_param("idBoard", "b1"))
        .and(query_param("pos", "bottom"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "l7", "name": "Review", "idBoard": "b1", "closed": false, "pos": 131072
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, NEVER_STALE);
    let list = client.board("b1").lists().add("Review").await.unwrap();

    assert_eq!(list.id(), "l7");
    assert_eq!(list.name().await.unwrap().as_deref(), Some("Review"));

    client.shut_down().await;
}

#[tokio::test]
async fn test_add_card_to_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cards"))
        .and(query_param("name", "Fix login"))
        .and(query_param("idList", "l1"))
        .and(query_param("desc", "Happens on Safari only"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c5", "name": "Fix login", "idList": "l1", "desc": "Happens on Safari only"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, NEVER_STALE);
    let card = client
        .list("l1")
        .cards()
        .add("Fix login", Some("Happens on Safari only"))
        .await
        .unwrap();

    assert_eq!(card.description().await.unwrap().as_deref(), Some("Happens on Safari only"));

    client.shut_down().await;
}

#[tokio::test]
async fn test_add_board_in_organization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/boards"))
        .and(query_param("name", "Hiring"))
        .and(query_param("idOrganization", "o1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "b9", "name": "Hiring", "idOrganization": "o1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, NEVER_STALE);
    let board = client.organization("o1").boards().add("Hiring").await.unwrap();

    assert_eq!(board.id(), "b9");
    let org = board.organization().await.unwrap().expect("board has an organization");
    assert_eq!(org.id(), "o1");

    client.shut_down().await;
}
