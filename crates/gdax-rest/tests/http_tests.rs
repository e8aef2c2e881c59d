//! Integration tests against a mock HTTP server
//!
//! Every test drives the real client through wiremock and inspects the
//! requests actually put on the wire: paths, query strings, bodies, and
//! the CB-ACCESS authentication headers.

use gdax_rest::{
    ClientConfig, Credentials, OrderStatus, PrivateClient, PublicClient, RestError,
};
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

// base64("s")
const SECRET: &str = "cw==";

fn public_client(server: &MockServer) -> PublicClient {
    PublicClient::with_config(ClientConfig::new().with_base_url(server.uri()))
}

fn private_client(server: &MockServer) -> PrivateClient {
    PrivateClient::with_config(
        credentials(),
        ClientConfig::new().with_base_url(server.uri()),
    )
}

fn credentials() -> Credentials {
    Credentials::new("k", SECRET, "p").expect("valid test credentials")
}

fn header<'a>(request: &'a Request, name: &str) -> &'a str {
    request
        .headers
        .get(name)
        .unwrap_or_else(|| panic!("missing header {}", name))
        .to_str()
        .expect("header is ascii")
}

#[tokio::test]
async fn limit_buy_posts_signed_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "d0c5340b-6d6c-49d9-b567-48c4bfca13d2",
            "status": "pending",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = private_client(&server);
    let response = client
        .limit_buy("BTC-USD", dec!(100.00), dec!(1.0))
        .await
        .expect("limit_buy failed");
    assert_eq!(response["status"], "pending");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    assert_eq!(request.method.as_str(), "POST");
    assert_eq!(request.url.path(), "/orders");
    assert_eq!(header(request, "Content-Type"), "application/json");

    let body = std::str::from_utf8(&request.body).expect("utf8 body");
    assert_eq!(
        body,
        r#"{"side":"buy","type":"limit","product_id":"BTC-USD","price":"100.00","size":"1.0","time_in_force":"GTC","post_only":true}"#
    );

    assert_eq!(header(request, "CB-ACCESS-KEY"), "k");
    assert_eq!(header(request, "CB-ACCESS-PASSPHRASE"), "p");

    // The signature must cover the exact transmitted bytes, under the
    // same timestamp the header carries.
    let timestamp = header(request, "CB-ACCESS-TIMESTAMP");
    let expected = credentials().sign(timestamp, "POST", "/orders", body);
    assert_eq!(header(request, "CB-ACCESS-SIGN"), expected);
}

#[tokio::test]
async fn public_requests_carry_no_auth_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = public_client(&server);
    client.get_products().await.expect("get_products failed");

    let requests = server.received_requests().await.expect("recording enabled");
    let request = &requests[0];
    for name in [
        "CB-ACCESS-KEY",
        "CB-ACCESS-SIGN",
        "CB-ACCESS-TIMESTAMP",
        "CB-ACCESS-PASSPHRASE",
    ] {
        assert!(
            request.headers.get(name).is_none(),
            "public request unexpectedly carried {}",
            name
        );
    }
}

#[tokio::test]
async fn private_clients_public_capability_does_not_sign() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/BTC-USD/ticker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"price": "333.99"})))
        .mount(&server)
        .await;

    let client = private_client(&server);
    client
        .public()
        .get_product_ticker("BTC-USD")
        .await
        .expect("ticker failed");

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests[0].headers.get("CB-ACCESS-KEY").is_none());
}

#[tokio::test]
async fn trailing_slash_base_url_hits_same_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "iso": "2015-01-07T23:47:25.201Z",
            "epoch": 1420674445.201,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PublicClient::with_config(
        ClientConfig::new().with_base_url(format!("{}/", server.uri())),
    );
    let time = client.get_server_time().await.expect("server time failed");
    assert_eq!(time["epoch"], json!(1420674445.201));
}

#[tokio::test]
async fn order_book_level_validated_before_network() {
    let server = MockServer::start().await;
    let client = public_client(&server);

    for level in [0u8, 4, 250] {
        let err = client
            .get_product_order_book("BTC-USD", level)
            .await
            .expect_err("invalid level accepted");
        assert!(matches!(err, RestError::InvalidParameter(_)));
    }

    assert!(
        server.received_requests().await.expect("recording enabled").is_empty(),
        "validation must not reach the network"
    );
}

#[tokio::test]
async fn order_book_valid_level_sent_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/BTC-USD/book"))
        .and(query_param("level", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sequence": "3",
            "bids": [],
            "asks": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server);
    let book = client
        .get_product_order_book("BTC-USD", 2)
        .await
        .expect("order book failed");
    assert_eq!(book["sequence"], "3");
}

#[tokio::test]
async fn granularity_validated_before_network() {
    let server = MockServer::start().await;
    let client = public_client(&server);

    let err = client
        .get_historic_rates("BTC-USD", None, None, Some(61))
        .await
        .expect_err("invalid granularity accepted");
    assert!(matches!(err, RestError::InvalidParameter(_)));
    assert!(server.received_requests().await.expect("recording enabled").is_empty());
}

#[tokio::test]
async fn historic_rates_omit_unset_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/BTC-USD/candles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let client = public_client(&server);
    client
        .get_historic_rates("BTC-USD", None, None, None)
        .await
        .expect("bare candles failed");
    client
        .get_historic_rates(
            "BTC-USD",
            Some("2018-01-01T00:00:00Z"),
            None,
            Some(300),
        )
        .await
        .expect("candles with params failed");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(
        requests[1].url.query(),
        Some("start=2018-01-01T00:00:00Z&granularity=300")
    );
}

#[tokio::test]
async fn market_order_requires_exactly_one_of_size_funds() {
    let server = MockServer::start().await;
    let client = private_client(&server);

    let err = client
        .market_buy("BTC-USD", None, None)
        .await
        .expect_err("neither size nor funds accepted");
    assert!(matches!(err, RestError::InvalidParameter(_)));

    let err = client
        .market_buy("BTC-USD", Some(dec!(1)), Some(dec!(100)))
        .await
        .expect_err("both size and funds accepted");
    assert!(matches!(err, RestError::InvalidParameter(_)));

    assert!(server.received_requests().await.expect("recording enabled").is_empty());
}

#[tokio::test]
async fn market_order_body_contains_only_set_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .expect(2)
        .mount(&server)
        .await;

    let client = private_client(&server);
    client
        .market_buy("BTC-USD", Some(dec!(1.0)), None)
        .await
        .expect("market buy by size failed");
    client
        .market_sell("BTC-USD", None, Some(dec!(250.00)))
        .await
        .expect("market sell by funds failed");

    let requests = server.received_requests().await.expect("recording enabled");

    let by_size = std::str::from_utf8(&requests[0].body).expect("utf8 body");
    assert_eq!(
        by_size,
        r#"{"side":"buy","type":"market","product_id":"BTC-USD","size":"1.0"}"#
    );

    let by_funds = std::str::from_utf8(&requests[1].body).expect("utf8 body");
    assert_eq!(
        by_funds,
        r#"{"side":"sell","type":"market","product_id":"BTC-USD","funds":"250.00"}"#
    );
}

#[tokio::test]
async fn cancel_order_deletes_resource_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/orders/d50ec984-77a8-460a-b958-66f114b0de9b"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!("d50ec984-77a8-460a-b958-66f114b0de9b")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = private_client(&server);
    let canceled = client
        .cancel_order("d50ec984-77a8-460a-b958-66f114b0de9b")
        .await
        .expect("cancel failed");
    assert_eq!(canceled, json!("d50ec984-77a8-460a-b958-66f114b0de9b"));
}

#[tokio::test]
async fn cancel_all_scopes_by_product_when_given() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["a", "b"])))
        .expect(2)
        .mount(&server)
        .await;

    let client = private_client(&server);
    let canceled = client.cancel_all(None).await.expect("cancel_all failed");
    assert_eq!(canceled, json!(["a", "b"]));
    client
        .cancel_all(Some("BTC-USD"))
        .await
        .expect("scoped cancel_all failed");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(requests[1].url.query(), Some("product_id=BTC-USD"));
}

#[tokio::test]
async fn list_orders_signs_path_including_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = private_client(&server);
    client
        .list_orders(Some("BTC-USD"), &[OrderStatus::Open, OrderStatus::Pending])
        .await
        .expect("list_orders failed");

    let requests = server.received_requests().await.expect("recording enabled");
    let request = &requests[0];
    assert_eq!(
        request.url.query(),
        Some("status=open&status=pending&product_id=BTC-USD")
    );

    // Signed GETs cover path + query with an empty body.
    let timestamp = header(request, "CB-ACCESS-TIMESTAMP");
    let expected = credentials().sign(
        timestamp,
        "GET",
        "/orders?status=open&status=pending&product_id=BTC-USD",
        "",
    );
    assert_eq!(header(request, "CB-ACCESS-SIGN"), expected);
}

#[tokio::test]
async fn account_endpoints_use_signed_gets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accounts/a1b2c3d4/ledger"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "100",
            "amount": "0.001",
            "type": "fee",
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = private_client(&server);
    let ledger = client
        .get_account_history("a1b2c3d4")
        .await
        .expect("ledger failed");
    assert_eq!(ledger[0]["type"], "fee");

    let requests = server.received_requests().await.expect("recording enabled");
    let request = &requests[0];
    let timestamp = header(request, "CB-ACCESS-TIMESTAMP");
    let expected = credentials().sign(timestamp, "GET", "/accounts/a1b2c3d4/ledger", "");
    assert_eq!(header(request, "CB-ACCESS-SIGN"), expected);
}

#[tokio::test]
async fn remote_error_attaches_decoded_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "NotFound"})))
        .mount(&server)
        .await;

    let client = private_client(&server);
    let err = client.get_order("missing").await.expect_err("404 accepted");

    match err {
        RestError::Api { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body.expect("decoded body")["message"], "NotFound");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn unparseable_success_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/time"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = public_client(&server);
    let err = client.get_server_time().await.expect_err("garbage accepted");
    assert!(matches!(err, RestError::Parse(_)));
}
