use anyhow::Result;
use hello_front::core::view::{BACKEND_ERROR_TEXT, LOADING_PLACEHOLDER};
use hello_front::{App, GreetingView, HttpBackend};
use httpmock::prelude::*;
use std::time::Duration;

#[tokio::test]
async fn test_displays_backend_greeting() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/hello");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "Hello, World!"}));
    });

    let client = HttpBackend::new(&server.base_url())?;
    let displayed = App::mount(client).run().await;

    api_mock.assert();
    assert_eq!(displayed, "Hello, World!");
    Ok(())
}

#[tokio::test]
async fn test_placeholder_shown_while_request_in_flight() -> Result<()> {
    let server = MockServer::start();
    let _api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/hello");
        then.status(200)
            .delay(Duration::from_millis(200))
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "eventually"}));
    });

    let mut view = GreetingView::mount(HttpBackend::new(&server.base_url())?);
    assert_eq!(view.render(), LOADING_PLACEHOLDER);

    view.settle().await;
    assert_eq!(view.render(), "eventually");
    Ok(())
}

#[tokio::test]
async fn test_server_error_displays_error_literal() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/hello");
        then.status(500).body("boom");
    });

    let client = HttpBackend::new(&server.base_url())?;
    let displayed = App::mount(client).run().await;

    api_mock.assert();
    assert_eq!(displayed, BACKEND_ERROR_TEXT);
    Ok(())
}

#[tokio::test]
async fn test_wrong_field_name_displays_error_literal() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/hello");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"msg": "oops"}));
    });

    let client = HttpBackend::new(&server.base_url())?;
    let displayed = App::mount(client).run().await;

    api_mock.assert();
    assert_eq!(displayed, BACKEND_ERROR_TEXT);
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_displays_error_literal() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/hello");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("not json at all");
    });

    let client = HttpBackend::new(&server.base_url())?;
    let displayed = App::mount(client).run().await;

    api_mock.assert();
    assert_eq!(displayed, BACKEND_ERROR_TEXT);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_backend_displays_error_literal() -> Result<()> {
    // Bind and drop a listener to get an address nothing is serving on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = HttpBackend::new(&format!("http://{}", addr))?;
    let displayed = App::mount(client).run().await;

    assert_eq!(displayed, BACKEND_ERROR_TEXT);
    Ok(())
}

#[tokio::test]
async fn test_exactly_one_request_even_if_settled_twice() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/hello");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "once"}));
    });

    let mut view = GreetingView::mount(HttpBackend::new(&server.base_url())?);
    view.settle().await;
    view.settle().await;

    api_mock.assert();
    assert_eq!(view.render(), "once");
    Ok(())
}
