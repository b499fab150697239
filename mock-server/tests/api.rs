use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo, ErrorBody, User};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- users ---

#[tokio::test]
async fn list_users_contains_seed() {
    let resp = app().oneshot(empty_request("GET", "/users")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert_eq!(
        users,
        vec![User {
            id: 1,
            name: "Ann".to_string()
        }]
    );
}

#[tokio::test]
async fn get_seeded_user() {
    let resp = app().oneshot(empty_request("GET", "/users/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let user: User = body_json(resp).await;
    assert_eq!(user.name, "Ann");
}

#[tokio::test]
async fn get_missing_user_returns_error_body() {
    let resp = app().oneshot(empty_request("GET", "/users/99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.reason, "not found");
}

#[tokio::test]
async fn create_user_returns_201() {
    let resp = app()
        .oneshot(json_request("POST", "/users", r#"{"name":"Bo"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: User = body_json(resp).await;
    assert_eq!(user.id, 2);
    assert_eq!(user.name, "Bo");
}

#[tokio::test]
async fn create_user_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/users", r#"{"not_name":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn patch_missing_user_returns_404() {
    let resp = app()
        .oneshot(json_request("PATCH", "/users/42", r#"{"name":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // update via PUT
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PUT", "/users/1", r#"{"name":"Annie"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: User = body_json(resp).await;
    assert_eq!(user.name, "Annie");

    // delete returns the removed user
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", "/users/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: User = body_json(resp).await;
    assert_eq!(user.id, 1);

    // get after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/users/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- status ---

#[tokio::test]
async fn status_route_answers_requested_code_with_empty_body() {
    for code in [204u16, 302, 418, 500] {
        let resp = app()
            .oneshot(empty_request("GET", &format!("/status/{code}")))
            .await
            .unwrap();

        assert_eq!(resp.status().as_u16(), code);
        assert!(body_bytes(resp).await.is_empty());
    }
}

#[tokio::test]
async fn redirect_route_points_at_user() {
    let resp = app()
        .oneshot(empty_request("GET", "/redirect/users/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers()[http::header::LOCATION], "/users/1");
}

#[tokio::test]
async fn malformed_create_body_is_plain_text() {
    let resp = app()
        .oneshot(json_request("POST", "/users", "{"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_bytes(resp).await;
    assert!(serde_json::from_slice::<ErrorBody>(&body).is_err());
}

// --- echo ---

#[tokio::test]
async fn echo_reflects_method_headers_and_body() {
    let req = Request::builder()
        .method("PATCH")
        .uri("/echo")
        .header("authorization", "Bearer t")
        .header("x-trace", "abc")
        .body(r#"{"a":[1,2]}"#.to_string())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "PATCH");
    assert_eq!(echo.headers["authorization"], vec!["Bearer t".to_string()]);
    assert_eq!(echo.headers["x-trace"], vec!["abc".to_string()]);
    assert_eq!(echo.body, serde_json::json!({"a": [1, 2]}));
}

#[tokio::test]
async fn echo_empty_body_is_null() {
    let resp = app().oneshot(empty_request("DELETE", "/echo")).await.unwrap();

    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "DELETE");
    assert!(echo.body.is_null());
}

// --- slow ---

#[tokio::test]
async fn slow_route_eventually_answers() {
    let resp = app().oneshot(empty_request("GET", "/slow/10")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({}));
}
