//! Create/update flows that go through multipart forms and the pictures directory.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use cookbook::api::AppState;
use cookbook::config::Config;
use cookbook::constants::messages;
use cookbook::models::recipe::Recipe;
use http_body_util::BodyExt;
use sea_orm::ConnectionTrait;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

const BOUNDARY: &str = "cookbook-test-boundary";

struct TestApp {
    router: Router,
    state: Arc<AppState>,
    root: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.root).ok();
    }
}

impl TestApp {
    fn pictures_dir(&self) -> PathBuf {
        self.root.join("static").join("pictures")
    }

    async fn only_recipe(&self) -> Recipe {
        let mut recipes = self.state.store().list_all_recipes().await.unwrap();
        assert_eq!(recipes.len(), 1);
        recipes.remove(0)
    }

    async fn post_form(&self, uri: &str, body: Vec<u8>) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(
                        header::CONTENT_TYPE,
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn post_urlencoded(&self, uri: &str, body: &'static str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }
}

async fn body_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&body).into_owned()
}

async fn spawn_app() -> TestApp {
    let root = std::env::temp_dir().join(format!("cookbook-form-test-{}", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", root.join("cookbook.db").display());
    config.general.static_path = root.join("static").display().to_string();

    let state = cookbook::api::create_app_state_from_config(config, None)
        .await
        .expect("failed to create app state");
    let router = cookbook::api::router(state.clone());

    TestApp {
        router,
        state,
        root,
    }
}

fn form_body(fields: &[(&str, &str)], photo: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((filename, data)) = photo {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"photo\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn fields<'a>(title: &'a str, category: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("title", title),
        ("description", "A short description"),
        ("instructions", "Step one.\nStep two."),
        ("category", category),
    ]
}

#[tokio::test]
async fn test_create_without_photo() {
    let app = spawn_app().await;

    let response = app
        .post_form("/create", form_body(&fields("Okroshka", "cold"), None))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let recipe = app.only_recipe().await;
    assert_eq!(recipe.title.as_deref(), Some("Okroshka"));
    assert_eq!(recipe.description.as_deref(), Some("A short description"));
    assert_eq!(recipe.instructions.as_deref(), Some("Step one.\nStep two."));
    assert_eq!(recipe.category.as_deref(), Some("cold"));
    assert!(recipe.image.is_none());
}

#[tokio::test]
async fn test_create_with_empty_file_part_stores_no_image() {
    let app = spawn_app().await;

    let response = app
        .post_form("/create", form_body(&fields("Kvass", "cold"), Some(("", b""))))
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    assert!(app.only_recipe().await.image.is_none());
}

#[tokio::test]
async fn test_create_with_photo_renames_file() {
    let app = spawn_app().await;

    let response = app
        .post_form(
            "/create",
            form_body(
                &fields("Syrniki", "snack"),
                Some(("my syrniki.jpg", b"jpeg bytes")),
            ),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let recipe = app.only_recipe().await;
    let image = recipe.image.expect("photo should be referenced");
    assert_ne!(image, "my syrniki.jpg");
    assert!(image.ends_with(".jpg"));

    let stored = app.pictures_dir().join(&image);
    assert_eq!(std::fs::read(stored).unwrap(), b"jpeg bytes");

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/static/pictures/{image}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"jpeg bytes");
}

#[tokio::test]
async fn test_create_with_missing_field_is_rejected() {
    let app = spawn_app().await;

    let response = app
        .post_form(
            "/create",
            form_body(&[("title", "Incomplete"), ("category", "hot")], None),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(app.state.store().list_all_recipes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_replaces_photo() {
    let app = spawn_app().await;

    app.post_form(
        "/create",
        form_body(&fields("Pirog", "hot"), Some(("pie.png", b"old"))),
    )
    .await;
    let original = app.only_recipe().await;
    let old_image = original.image.clone().unwrap();
    let old_path = app.pictures_dir().join(&old_image);
    assert!(old_path.exists());

    let response = app
        .post_form(
            &format!("/recipe/{}/update", original.id),
            form_body(&fields("Pirog 2", "hot"), Some(("pie.webp", b"new"))),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        format!("/recipe_detail/{}", original.id).as_str()
    );

    let updated = app.only_recipe().await;
    let new_image = updated.image.clone().unwrap();
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.title.as_deref(), Some("Pirog 2"));
    assert_ne!(new_image, old_image);
    assert!(new_image.ends_with(".webp"));
    assert!(!old_path.exists());
    assert_eq!(
        std::fs::read(app.pictures_dir().join(&new_image)).unwrap(),
        b"new"
    );
}

#[tokio::test]
async fn test_update_without_photo_keeps_image() {
    let app = spawn_app().await;

    app.post_form(
        "/create",
        form_body(&fields("Kulebyaka", "hot"), Some(("pie.jpg", b"pie"))),
    )
    .await;
    let original = app.only_recipe().await;

    let response = app
        .post_form(
            &format!("/recipe/{}/update", original.id),
            form_body(&fields("Kulebyaka", "snack"), Some(("", b""))),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let updated = app.only_recipe().await;
    assert_eq!(updated.category.as_deref(), Some("snack"));
    assert_eq!(updated.image, original.image);
    assert!(app.pictures_dir().join(updated.image.unwrap()).exists());
}

#[tokio::test]
async fn test_update_unknown_recipe_is_not_found() {
    let app = spawn_app().await;

    let response = app
        .post_form("/recipe/77/update", form_body(&fields("Ghost", "hot"), None))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_leaves_photo_on_disk() {
    let app = spawn_app().await;

    app.post_form(
        "/create",
        form_body(&fields("Vareniki", "hot"), Some(("v.jpg", b"v"))),
    )
    .await;
    let recipe = app.only_recipe().await;
    let path = app.pictures_dir().join(recipe.image.unwrap());

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/recipe/{}/delete", recipe.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    assert!(app.state.store().list_all_recipes().await.unwrap().is_empty());
    assert!(path.exists());
}

#[tokio::test]
async fn test_create_and_update_with_urlencoded_form() {
    let app = spawn_app().await;

    let response = app
        .post_urlencoded(
            "/create",
            "title=Soup&description=d&instructions=i&category=soup",
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let recipe = app.only_recipe().await;
    assert_eq!(recipe.title.as_deref(), Some("Soup"));
    assert_eq!(recipe.category.as_deref(), Some("soup"));
    assert!(recipe.image.is_none());

    let response = app
        .post_urlencoded(
            &format!("/recipe/{}/update", recipe.id),
            "title=Fish+soup&description=Ukha&instructions=Simmer&category=soup",
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let updated = app.only_recipe().await;
    assert_eq!(updated.title.as_deref(), Some("Fish soup"));
    assert_eq!(updated.description.as_deref(), Some("Ukha"));
    assert!(updated.image.is_none());

    let response = app
        .post_urlencoded("/create", "title=Only+a+title")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_recipe_with_malformed_form_is_not_found() {
    let app = spawn_app().await;

    let response = app
        .post_form("/recipe/77/update", form_body(&[("title", "Ghost")], None))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failures_return_message_with_ok_status() {
    let app = spawn_app().await;

    app.post_form("/create", form_body(&fields("Borscht", "soup"), None))
        .await;
    let recipe = app.only_recipe().await;

    app.state
        .store()
        .conn
        .execute_unprepared("DROP TABLE recipe")
        .await
        .unwrap();

    let response = app
        .post_form("/create", form_body(&fields("Solyanka", "soup"), None))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, messages::CREATE_FAILED);

    let response = app
        .post_form(
            &format!("/recipe/{}/update", recipe.id),
            form_body(&fields("Borscht 2", "soup"), None),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, messages::UPDATE_FAILED);

    let response = app.get(&format!("/recipe/{}/delete", recipe.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, messages::DELETE_FAILED);
}

#[tokio::test]
async fn test_placeholder_picture_is_served() {
    let app = spawn_app().await;

    assert!(app.pictures_dir().join("default.jpg").exists());

    let response = app.get("/static/pictures/default.jpg").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.starts_with(&[0xFF, 0xD8]));
}
