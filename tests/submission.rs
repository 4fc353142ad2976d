use axum::{Router, http::StatusCode, routing::post};
use folio_form::{ClientConfig, Field, FormController, SubmissionClient, SubmissionStatus};

mod helpers;

fn filled_form() -> FormController {
    let form = FormController::new();
    form.set(Field::Name, "Jane Doe");
    form.set(Field::Email, "jane@example.com");
    form.set(Field::Subject, "Project inquiry");
    form.set(Field::Message, "I would like to talk about a project.");
    form
}

fn client(endpoint: impl Into<String>) -> SubmissionClient {
    SubmissionClient::new(ClientConfig {
        endpoint: Some(endpoint.into()),
        timeout: std::time::Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn test_submit_to_backend_succeeds_and_resets() {
    let (app, _) = helpers::setup_test_app().await.unwrap();
    let endpoint = helpers::spawn_app(app.clone()).await.unwrap();
    let form = filled_form();

    let status = client(endpoint).submit(&form).await.unwrap();

    assert_eq!(status, SubmissionStatus::Success);
    assert!(form.snapshot().is_empty());
    assert_eq!(
        form.status().banner(),
        Some(folio_shared::contact::SUCCESS_MESSAGE)
    );

    let (_, contacts) = helpers::send(&app, helpers::get("/api/contacts")).await;
    let contacts = contacts.as_array().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["name"], "Jane Doe");
}

#[tokio::test]
async fn test_backend_validation_error_is_failure() {
    let (app, _) = helpers::setup_test_app().await.unwrap();
    let endpoint = helpers::spawn_app(app).await.unwrap();
    let form = filled_form();
    form.set(Field::Subject, "Hi");
    let before = form.snapshot();

    let status = client(endpoint).submit(&form).await.unwrap();

    assert_eq!(status, SubmissionStatus::Failure);
    assert_eq!(form.snapshot(), before);
}

#[tokio::test]
async fn test_server_error_and_unreachable_look_the_same() {
    let broken = Router::new().route(
        "/api/contact",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let broken_endpoint = helpers::spawn_app(broken).await.unwrap();

    let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let closed_endpoint = format!("http://{}", closed.local_addr().unwrap());
    drop(closed);

    let mut observed = Vec::new();
    for endpoint in [broken_endpoint, closed_endpoint] {
        let form = filled_form();
        let status = client(endpoint).submit(&form).await.unwrap();
        observed.push((status, form.status(), form.snapshot()));
    }

    assert_eq!(observed[0].0, SubmissionStatus::Failure);
    assert_eq!(observed[0].2, filled_form().snapshot());
    assert_eq!(observed[0], observed[1]);
}

#[tokio::test]
async fn test_send_command_uses_endpoint_override() {
    let (app, _) = helpers::setup_test_app().await.unwrap();
    let endpoint = helpers::spawn_app(app).await.unwrap();

    let status = folio::cli::send(
        helpers::config(),
        folio::cli::SendArgs {
            name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            subject: "Project inquiry".to_owned(),
            message: "I would like to talk about a project.".to_owned(),
            endpoint: Some(endpoint),
        },
    )
    .await
    .unwrap();

    assert_eq!(status, SubmissionStatus::Success);
}

#[tokio::test]
async fn test_send_command_without_endpoint_fails() {
    let status = folio::cli::send(
        helpers::config(),
        folio::cli::SendArgs {
            name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            subject: "Project inquiry".to_owned(),
            message: "I would like to talk about a project.".to_owned(),
            endpoint: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(status, SubmissionStatus::Failure);
}
