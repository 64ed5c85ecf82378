use anyhow::anyhow;
use portfolio_core_contact_contracts::{
    ContactSubmitError, ContactSubmitRequest, MockContactFeatureService,
};
use portfolio_demo::contact::{ALICE, BOB};
use portfolio_models::contact::SubmissionField;
use pretty_assertions::assert_eq;

use super::{post_json, router, send, Sut};

fn alice_request() -> ContactSubmitRequest {
    ContactSubmitRequest {
        name: "Alice".into(),
        email: "Alice@Example.COM".into(),
        message: "Hi".into(),
        phone_number: Some(" 555 ".into()),
    }
}

const ALICE_PAYLOAD: &str =
    r#"{"name": "Alice", "email": "Alice@Example.COM", "message": "Hi", "phoneNumber": " 555 "}"#;

#[tokio::test]
async fn ok() {
    // Arrange
    let contact = MockContactFeatureService::new().with_submit(alice_request(), Ok(ALICE.clone()));
    let sut = Sut {
        contact,
        ..Default::default()
    };

    // Act
    let response = send(router(sut), post_json("/api/contact", ALICE_PAYLOAD)).await;

    // Assert
    assert_eq!(response.status, 201);
    assert_eq!(
        response.json(),
        serde_json::json!({"success": true, "message": "Message sent successfully!"})
    );
}

#[tokio::test]
async fn ok_without_phone_number() {
    // Arrange
    let request = ContactSubmitRequest {
        name: "Bob Builder".into(),
        email: "bob@example.org".into(),
        message: "Can we fix it?".into(),
        phone_number: None,
    };
    let contact = MockContactFeatureService::new().with_submit(request, Ok(BOB.clone()));
    let sut = Sut {
        contact,
        ..Default::default()
    };

    // Act
    let response = send(
        router(sut),
        post_json(
            "/api/contact",
            r#"{"name": "Bob Builder", "email": "bob@example.org", "message": "Can we fix it?", "phoneNumber": null}"#,
        ),
    )
    .await;

    // Assert
    assert_eq!(response.status, 201);
    assert_eq!(response.json()["success"], true);
}

#[tokio::test]
async fn missing_fields() {
    // Arrange
    let contact = MockContactFeatureService::new().with_submit(
        ContactSubmitRequest {
            email: "alice@example.com".into(),
            ..Default::default()
        },
        Err(ContactSubmitError::MissingFields),
    );
    let sut = Sut {
        contact,
        ..Default::default()
    };

    // Act
    let response = send(
        router(sut),
        post_json("/api/contact", r#"{"email": "alice@example.com"}"#),
    )
    .await;

    // Assert
    assert_eq!(response.status, 400);
    assert_eq!(
        response.json(),
        serde_json::json!({
            "success": false,
            "message": "Name, email, and message are required.",
        })
    );
}

#[tokio::test]
async fn invalid_email() {
    // Arrange
    let contact = MockContactFeatureService::new().with_submit(
        ContactSubmitRequest {
            email: "foo@bar".into(),
            ..alice_request()
        },
        Err(ContactSubmitError::InvalidEmail),
    );
    let sut = Sut {
        contact,
        ..Default::default()
    };

    // Act
    let response = send(
        router(sut),
        post_json(
            "/api/contact",
            r#"{"name": "Alice", "email": "foo@bar", "message": "Hi", "phoneNumber": " 555 "}"#,
        ),
    )
    .await;

    // Assert
    assert_eq!(response.status, 400);
    assert_eq!(
        response.json(),
        serde_json::json!({
            "success": false,
            "message": "Please provide a valid email address.",
        })
    );
}

#[tokio::test]
async fn too_long() {
    // Arrange
    let contact = MockContactFeatureService::new().with_submit(
        alice_request(),
        Err(ContactSubmitError::TooLong(SubmissionField::PhoneNumber)),
    );
    let sut = Sut {
        contact,
        ..Default::default()
    };

    // Act
    let response = send(router(sut), post_json("/api/contact", ALICE_PAYLOAD)).await;

    // Assert
    assert_eq!(response.status, 400);
    assert_eq!(
        response.json(),
        serde_json::json!({"success": false, "message": "Phone number is too long."})
    );
}

#[tokio::test]
async fn storage_error() {
    // Arrange
    let contact = MockContactFeatureService::new().with_submit(
        alice_request(),
        Err(ContactSubmitError::Other(anyhow!(
            "Failed to insert submission: connection refused (127.0.0.1:27017)"
        ))),
    );
    let sut = Sut {
        contact,
        ..Default::default()
    };

    // Act
    let response = send(router(sut), post_json("/api/contact", ALICE_PAYLOAD)).await;

    // Assert
    assert_eq!(response.status, 500);
    assert_eq!(
        response.json(),
        serde_json::json!({
            "success": false,
            "message": "Failed to send message. Please try again.",
        })
    );
    let body = String::from_utf8(response.body).unwrap();
    assert!(!body.contains("27017"));
}

#[tokio::test]
async fn invalid_body() {
    for request in [
        post_json("/api/contact", "name=Alice"),
        post_json("/api/contact", r#"{"name": "Alice", "#),
        post_json("/api/contact", r#"{"name": 42, "email": "a@b.c", "message": "Hi"}"#),
        post_json("/api/contact", "null"),
        axum::http::Request::post("/api/contact")
            .header("Content-Type", "text/plain")
            .body(axum::body::Body::from(ALICE_PAYLOAD))
            .unwrap(),
    ] {
        // Act
        let response = send(router(Sut::default()), request).await;

        // Assert
        assert_eq!(response.status, 400);
        assert_eq!(
            response.json(),
            serde_json::json!({"success": false, "message": "Invalid request body."})
        );
    }
}

#[tokio::test]
async fn wrong_method() {
    // Act
    let response = send(router(Sut::default()), super::get("/api/contact")).await;

    // Assert
    assert_eq!(response.status, 405);
    assert_eq!(
        response.json(),
        serde_json::json!({"message": "Method not allowed"})
    );
}
