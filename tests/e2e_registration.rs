use axum::http::StatusCode;

mod support;

use support::{
    RegistrationForm, TestApp, assert_error_response, field_errors, jpeg_bytes, json_body,
    png_bytes,
};

#[tokio::test]
async fn avatar_is_stored_in_three_sizes() {
    let app = TestApp::new();
    let form = RegistrationForm::valid("olena_p").image(
        "portrait.jpg",
        "image/jpeg",
        jpeg_bytes(2000, 1000),
    );

    let body = json_body(app.register(form).await, StatusCode::CREATED).await;

    assert_eq!(body["username"], "olena_p");
    assert_eq!(body["email"], "olena_p@example.com");
    assert_eq!(body["first_name"], "Olena");
    assert_eq!(body["last_name"], "Petrenko");
    assert!(body.get("password_hash").is_none());

    let expected = [("small", 300, 150), ("medium", 800, 400), ("large", 1200, 600)];
    for (label, width, height) in expected {
        let url = body["avatar"][label].as_str().unwrap();
        let relative = url.strip_prefix("/media/").unwrap();
        assert!(relative.starts_with("avatars/"), "{relative}");
        assert!(relative.ends_with(&format!("_{label}.jpg")), "{relative}");
        let dimensions = image::image_dimensions(app.media_path(relative)).unwrap();
        assert_eq!(dimensions, (width, height), "{label} rendition");
    }
    assert_eq!(app.stored_files().len(), 3);
}

#[tokio::test]
async fn small_avatars_are_never_enlarged() {
    let app = TestApp::new();
    let form = RegistrationForm::valid("tiny_face").image("a.png", "image/png", png_bytes(40, 20));

    let body = json_body(app.register(form).await, StatusCode::CREATED).await;

    for label in ["small", "medium", "large"] {
        let url = body["avatar"][label].as_str().unwrap();
        let path = app.media_path(url.strip_prefix("/media/").unwrap());
        assert_eq!(image::image_dimensions(path).unwrap(), (40, 20));
    }
}

#[tokio::test]
async fn first_user_becomes_admin() {
    let app = TestApp::new();

    let first = json_body(
        app.register(RegistrationForm::valid("founder")).await,
        StatusCode::CREATED,
    )
    .await;
    let second = json_body(
        app.register(RegistrationForm::valid("newcomer")).await,
        StatusCode::CREATED,
    )
    .await;

    assert_eq!(first["role"], "admin");
    assert_eq!(second["role"], "member");
    assert_eq!(app.users.all().len(), 2);
}

#[tokio::test]
async fn every_invalid_field_is_reported_at_once() {
    let app = TestApp::new();
    let mut form = RegistrationForm::valid("x").without_image().password("12345678");
    form.username = "bad name".into();
    form.email = "not-an-email".into();
    form.first_name = "R2D2".into();

    let resp = app.register(form).await;
    let body =
        assert_error_response(resp, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity")
            .await;

    for field in ["username", "email", "first_name", "password1", "image"] {
        assert_eq!(field_errors(&body, field).len(), 1, "{field}: {body}");
    }
    assert_eq!(
        field_errors(&body, "password1"),
        vec!["password cannot consist of digits only"]
    );
    assert_eq!(field_errors(&body, "image"), vec!["this field is required"]);
    assert!(field_errors(&body, "last_name").is_empty());
    assert!(field_errors(&body, "__all__").is_empty());
    assert!(app.users.all().is_empty());
}

#[tokio::test]
async fn mismatched_passwords_are_a_form_wide_error() {
    let app = TestApp::new();
    let mut form = RegistrationForm::valid("olena_p");
    form.password2 = "Different-Pass1".into();

    let body = assert_error_response(
        app.register(form).await,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert_eq!(
        field_errors(&body, "__all__"),
        vec!["the two password fields do not match"]
    );
}

#[tokio::test]
async fn password_may_not_repeat_username_or_email() {
    let app = TestApp::new();

    let with_username = RegistrationForm::valid("olena_p").password("my-OLENA_P-pass");
    let body = assert_error_response(
        app.register(with_username).await,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert_eq!(
        field_errors(&body, "__all__"),
        vec!["password must not contain the username"]
    );

    let mut with_email = RegistrationForm::valid("olena_p").password("xx-mailbox-99");
    with_email.email = "Mailbox@example.com".into();
    let body = assert_error_response(
        app.register(with_email).await,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert_eq!(
        field_errors(&body, "__all__"),
        vec!["password must not contain part of the email address"]
    );
}

#[tokio::test]
async fn username_and_email_must_be_unique() {
    let app = TestApp::new();
    json_body(
        app.register(RegistrationForm::valid("olena_p")).await,
        StatusCode::CREATED,
    )
    .await;

    let mut again = RegistrationForm::valid("olena_p");
    again.email = "OLENA_P@Example.com".into();
    let body = assert_error_response(
        app.register(again).await,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert_eq!(
        field_errors(&body, "username"),
        vec!["a user with that username already exists"]
    );
    assert_eq!(
        field_errors(&body, "email"),
        vec!["this email address is already registered"]
    );
}

#[tokio::test]
async fn avatar_must_be_a_supported_image() {
    let app = TestApp::new();

    let corrupted = RegistrationForm::valid("olena_p").image("a.png", "image/png", b"garbage".to_vec());
    let body = assert_error_response(
        app.register(corrupted).await,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert_eq!(
        field_errors(&body, "image"),
        vec!["upload a valid image; the file is either not an image or is corrupted"]
    );

    let wrong_type =
        RegistrationForm::valid("olena_p").image("a.png", "application/pdf", png_bytes(4, 4));
    let body = assert_error_response(
        app.register(wrong_type).await,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert_eq!(field_errors(&body, "image"), vec!["invalid file type"]);

    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn oversized_avatars_are_rejected() {
    let app = TestApp::new();

    let just_over = vec![0u8; 5 * 1024 * 1024 + 1];
    let form = RegistrationForm::valid("olena_p").image("big.png", "image/png", just_over);
    let body = assert_error_response(
        app.register(form).await,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert_eq!(
        field_errors(&body, "image"),
        vec!["file size must not exceed 5MB"]
    );

    let far_over = vec![0u8; 7 * 1024 * 1024];
    let form = RegistrationForm::valid("olena_p").image("huge.png", "image/png", far_over);
    assert_error_response(
        app.register(form).await,
        StatusCode::PAYLOAD_TOO_LARGE,
        "Payload Too Large",
    )
    .await;
    assert!(app.users.all().is_empty());
}

#[tokio::test]
async fn failed_insert_removes_stored_avatars() {
    let app = TestApp::new();
    app.users.fail_next_insert();

    let resp = app.register(RegistrationForm::valid("olena_p")).await;
    assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        .await;

    assert!(app.stored_files().is_empty());
    assert!(app.users.all().is_empty());

    let retry = app.register(RegistrationForm::valid("olena_p")).await;
    json_body(retry, StatusCode::CREATED).await;
    assert_eq!(app.stored_files().len(), 3);
}

#[tokio::test]
async fn taken_username_or_email_is_not_compared_with_the_password() {
    let app = TestApp::new();
    json_body(
        app.register(RegistrationForm::valid("olena_p")).await,
        StatusCode::CREATED,
    )
    .await;

    let mut same_username = RegistrationForm::valid("olena_p").password("my-olena_p-pass");
    same_username.email = "someone@example.com".into();
    let body = assert_error_response(
        app.register(same_username).await,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert_eq!(
        field_errors(&body, "username"),
        vec!["a user with that username already exists"]
    );
    assert!(field_errors(&body, "__all__").is_empty(), "{body}");

    let mut same_email = RegistrationForm::valid("someone_else").password("xx-olena_p-99");
    same_email.email = "olena_p@example.com".into();
    let body = assert_error_response(
        app.register(same_email).await,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
    )
    .await;
    assert_eq!(
        field_errors(&body, "email"),
        vec!["this email address is already registered"]
    );
    assert!(field_errors(&body, "__all__").is_empty(), "{body}");
}
