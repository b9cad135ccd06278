use crate::helpers::spawn_app_testing;
use axum::http::StatusCode;
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use routes::routes_path;

const THANKS: &str = "Thank you for subscribing!";

#[tokio::test]
async fn newsletter_returns_200_for_an_email() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");
    let email: String = SafeEmail().fake();

    let response = app
        .post_form(routes_path::Newsletter, &[("email", email)])
        .await;

    assert_eq!(StatusCode::OK, response.status());
    assert!(response.text().await.unwrap().contains(THANKS));
}

#[tokio::test]
async fn subscribe_alias_behaves_like_newsletter() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");

    let response = app
        .post_raw(routes_path::Subscribe, "email=ursula_le_guin%40gmail.com".into())
        .await;

    assert_eq!(StatusCode::OK, response.status());
    assert!(response.text().await.unwrap().contains(THANKS));
}

#[tokio::test]
async fn newsletter_does_not_validate_email_syntax() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");

    let response = app
        .post_raw(routes_path::Newsletter, "email=definitely-not-an-email".into())
        .await;

    assert_eq!(StatusCode::OK, response.status());
}

#[tokio::test]
async fn newsletter_returns_422_when_email_is_missing() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");

    let test_cases = [
        ("", "missing the email"),
        ("email=", "empty email"),
        ("email=%20%20", "blank email"),
    ];

    for (body, error) in test_cases {
        let response = app.post_raw(routes_path::Newsletter, body.into()).await;

        assert_eq!(
            StatusCode::UNPROCESSABLE_ENTITY,
            response.status(),
            "Api should fail with 422 when the payload is {error}."
        );
        assert!(response.text().await.unwrap().contains("email is required."));
    }
}
