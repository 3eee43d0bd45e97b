use axum::body::Body;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use salesdeck_app_core::{RegistrationError, SignupForm};
use salesdeck_infra::ApiClient;
use std::net::SocketAddr;

/// Answers `/api/users/register` according to the local part of the email.
async fn start_server() -> SocketAddr {
    let app = Router::new().route(
        "/api/users/register",
        post(|body: String| async move {
            let req: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();
            let email = req["email"].as_str().unwrap_or_default();
            let local = email.split('@').next().unwrap_or_default();
            match local {
                "new" => (
                    StatusCode::CREATED,
                    Body::from(r#"{ "status": "success", "data": { "id": "u1" } }"#),
                ),
                "empty" => (StatusCode::CREATED, Body::from("")),
                "invalid" => (StatusCode::BAD_REQUEST, Body::from("{}")),
                "taken" => (StatusCode::CONFLICT, Body::from("{}")),
                "explained" => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Body::from(r#"{ "message": "Password too short" }"#),
                ),
                "teapot" => (StatusCode::IM_A_TEAPOT, Body::from("")),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, Body::from("oops")),
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn form(email: &str) -> SignupForm {
    SignupForm {
        name: "Ada Lovelace".into(),
        email: email.into(),
        password: "analytical".into(),
    }
}

fn api(addr: SocketAddr) -> ApiClient {
    ApiClient::new(reqwest::Client::new(), &format!("http://{addr}/api")).unwrap()
}

#[tokio::test]
async fn successful_registration_clears_the_form() {
    let api = api(start_server().await);

    let mut f = form("new@example.com");
    f.submit(&api).await.unwrap();
    assert_eq!(f, SignupForm::default());

    // 2xx with an unreadable body still counts as created.
    let mut f = form("empty@example.com");
    f.submit(&api).await.unwrap();
    assert_eq!(f, SignupForm::default());
}

#[tokio::test]
async fn failures_map_to_user_facing_messages() {
    let api = api(start_server().await);

    let cases = [
        (
            "invalid@example.com",
            "Invalid registration data. Please check your information.",
        ),
        ("taken@example.com", "User with this email already exists."),
        ("explained@example.com", "Password too short"),
        ("boom@example.com", "Server error. Please try again later."),
        (
            "teapot@example.com",
            "An error occurred during registration. Please try again.",
        ),
    ];

    for (email, expected) in cases {
        let mut f = form(email);
        let err = f.submit(&api).await.unwrap_err();
        assert_eq!(err.to_string(), expected, "{email}");
        // The form keeps what the user typed.
        assert_eq!(f.email, email);
    }
}

#[tokio::test]
async fn unreachable_server_reports_no_response() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut f = form("new@example.com");
    let err = f.submit(&api(addr)).await.unwrap_err();
    assert_eq!(err, RegistrationError::NoResponse);
    assert_eq!(
        err.to_string(),
        "No response from server. Please check your connection."
    );
}

#[tokio::test]
async fn missing_fields_are_caught_before_any_request() {
    // Nothing listens here; validation must fail first.
    let api = ApiClient::new(reqwest::Client::new(), "http://127.0.0.1:9/api").unwrap();

    let mut f = SignupForm {
        name: "  ".into(),
        ..form("new@example.com")
    };
    let err = f.submit(&api).await.unwrap_err();
    assert_eq!(err, RegistrationError::MissingField("Full name"));
    assert_eq!(err.to_string(), "Full name is required.");

    f.name = "Ada".into();
    f.password.clear();
    assert_eq!(
        f.validate(),
        Err(RegistrationError::MissingField("Password"))
    );
}
