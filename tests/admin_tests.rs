// tests/admin_tests.rs

use std::path::PathBuf;

use portfolio::{config::Config, handlers::auth::seed_admin, routes, state::AppState};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

const ADMIN_USER: &str = "owner";
const ADMIN_PASSWORD: &str = "correct horse";

async fn spawn_app() -> (String, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "admin_test_secret".to_string(),
        jwt_expiration: 600,
        rust_log: "error".to_string(),
        server_addr: "127.0.0.1:0".parse().unwrap(),
        media_dir: PathBuf::from("media"),
        media_url: "/media/".to_string(),
        static_dir: PathBuf::from("static"),
        allowed_origins: vec![],
        admin_username: Some(ADMIN_USER.to_string()),
        admin_password: Some(ADMIN_PASSWORD.to_string()),
    };

    assert!(seed_admin(&pool, &config).await.expect("Failed to seed admin"));

    let state = AppState::new(pool.clone(), config).expect("Templates should compile");
    let app = routes::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (address, pool)
}

async fn login(client: &reqwest::Client, address: &str) -> String {
    let resp = client
        .post(format!("{}/api/admin/login", address))
        .json(&json!({"username": ADMIN_USER, "password": ADMIN_PASSWORD}))
        .send()
        .await
        .expect("Login failed");
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["type"], "Bearer");
    body["token"].as_str().expect("Token not found").to_string()
}

#[tokio::test]
async fn admin_routes_require_a_token() {
    let (address, _pool) = spawn_app().await;
    let client = reqwest::Client::new();

    let missing = client
        .get(format!("{}/api/admin/feedback", address))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 401);

    let forged = client
        .get(format!("{}/api/admin/feedback", address))
        .header("Authorization", "Bearer not-a-real-token")
        .send()
        .await
        .unwrap();
    assert_eq!(forged.status().as_u16(), 401);
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let (address, _pool) = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/admin/login", address))
        .json(&json!({"username": ADMIN_USER, "password": "wrong"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 401);

    let unknown = client
        .post(format!("{}/api/admin/login", address))
        .json(&json!({"username": "nobody", "password": "wrong"}))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status().as_u16(), 401);
}

#[tokio::test]
async fn profile_is_a_validated_singleton() {
    let (address, pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login(&client, &address).await;
    let url = format!("{}/api/admin/profile", address);

    // Nothing saved yet.
    let resp = client.get(&url).bearer_auth(&token).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    // Bad social link and non-PDF resume are both reported.
    let resp = client
        .put(&url)
        .bearer_auth(&token)
        .json(&json!({
            "name": "Ada",
            "twitter": "https://example.com/ada",
            "resume": "resumes/cv.docx"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["errors"]["twitter"][0]["code"], "invalid_url");
    assert_eq!(body["errors"]["twitter"][0]["message"], "Twitter URL must point to twitter.com");
    assert_eq!(body["errors"]["resume"][0]["code"], "unsupported_file_type");

    // Two saves leave exactly one row holding the latest values.
    for name in ["Ada", "Ada Lovelace"] {
        let resp = client
            .put(&url)
            .bearer_auth(&token)
            .json(&json!({
                "name": name,
                "bio": "Analyst",
                "twitter": "https://twitter.com/ada",
                "resume": "resumes/cv.pdf"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);
    }

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profile")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let profile: Value = client
        .get(&url)
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile["name"], "Ada Lovelace");
    assert_eq!(profile["resume"], "resumes/cv.pdf");

    // Home page now shows the saved profile.
    let home = reqwest::get(&address).await.unwrap().text().await.unwrap();
    assert!(home.contains("Ada Lovelace"));

    let resp = client.delete(&url).bearer_auth(&token).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 204);
    let home = reqwest::get(&address).await.unwrap().text().await.unwrap();
    assert!(home.contains("Default User"));
}

#[tokio::test]
async fn publication_crud_and_search() {
    let (address, _pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login(&client, &address).await;
    let base = format!("{}/api/admin/publications", address);

    let first: Value = client
        .post(&base)
        .bearer_auth(&token)
        .json(&json!({
            "title": "Accessible Interfaces",
            "journal": "HCI Letters",
            "date": "2023-04-01",
            "tags": "HCI, Accessibility"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let first_id = first["id"].as_i64().unwrap();

    let resp = client
        .post(&base)
        .bearer_auth(&token)
        .json(&json!({
            "title": "Rural Connectivity",
            "journal": "ICT Review",
            "date": "2021-09-15"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);

    // Search is case-insensitive over title and journal.
    let found: Vec<Value> = client
        .get(format!("{}?q=hci", base))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], first_id);

    let recent: Vec<Value> = client
        .get(format!("{}?date_from=2022-01-01", base))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0]["title"], "Accessible Interfaces");

    // Whole-record replacement.
    let updated: Value = client
        .put(format!("{}/{}", base, first_id))
        .bearer_auth(&token)
        .json(&json!({
            "title": "Accessible Interfaces, Revisited",
            "date": "2023-04-01",
            "link": "https://doi.org/10.1000/xyz"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["title"], "Accessible Interfaces, Revisited");
    assert_eq!(updated["journal"], Value::Null);

    let invalid = client
        .put(format!("{}/{}", base, first_id))
        .bearer_auth(&token)
        .json(&json!({"title": "", "link": "doi:10.1000/xyz"}))
        .send()
        .await
        .unwrap();
    assert_eq!(invalid.status().as_u16(), 400);
    let body: Value = invalid.json().await.unwrap();
    assert_eq!(body["errors"]["title"][0]["code"], "required");
    assert_eq!(body["errors"]["link"][0]["code"], "invalid_url");

    let resp = client
        .delete(format!("{}/{}", base, first_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 204);

    let resp = client
        .get(format!("{}/{}", base, first_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn education_filter_by_institute() {
    let (address, _pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login(&client, &address).await;
    let base = format!("{}/api/admin/educations", address);

    for (degree, institute, start, end) in [
        ("BSc Computer Science", "North University", 2015, Some(2019)),
        ("MSc HCI", "North University", 2019, None),
        ("PhD", "South Institute", 2021, None),
    ] {
        let resp = client
            .post(&base)
            .bearer_auth(&token)
            .json(&json!({
                "degree": degree,
                "institute": institute,
                "start_year": start,
                "end_year": end
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 201);
    }

    let north: Vec<Value> = client
        .get(format!("{}?institute=North%20University", base))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(north.len(), 2);

    let hci: Vec<Value> = client
        .get(format!("{}?q=hci", base))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(hci.len(), 1);
    assert_eq!(hci[0]["end_year"], Value::Null);
}

#[tokio::test]
async fn video_created_at_survives_updates() {
    let (address, _pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login(&client, &address).await;
    let base = format!("{}/api/admin/videos", address);

    let created: Value = client
        .post(&base)
        .bearer_auth(&token)
        .json(&json!({
            "title": "Conference talk",
            "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "created_at": "1999-01-01T00:00:00Z"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();
    assert_ne!(created["created_at"], "1999-01-01T00:00:00Z");

    let updated: Value = client
        .put(format!("{}/{}", base, id))
        .bearer_auth(&token)
        .json(&json!({
            "title": "Conference talk (recut)",
            "url": "https://youtu.be/dQw4w9WgXcQ"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["title"], "Conference talk (recut)");
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn feedback_is_listed_and_searchable_but_not_editable() {
    let (address, _pool) = spawn_app().await;
    let client = reqwest::Client::new();
    let token = login(&client, &address).await;

    for (name, email) in [("Ann", "ann@example.com"), ("Bob", "bob@example.org")] {
        let resp = client
            .post(&address)
            .header("X-Requested-With", "XMLHttpRequest")
            .form(&[("name", name), ("email", email), ("message", "Hi")])
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);
    }

    let all: Vec<Value> = client
        .get(format!("{}/api/admin/feedback", address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|f| f["created_at"].is_string()));

    let orgs: Vec<Value> = client
        .get(format!("{}/api/admin/feedback?q=example.org", address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(orgs.len(), 1);
    assert_eq!(orgs[0]["name"], "Bob");

    let id = orgs[0]["id"].as_i64().unwrap();
    let put = client
        .put(format!("{}/api/admin/feedback/{}", address, id))
        .bearer_auth(&token)
        .json(&json!({"name": "Mallory"}))
        .send()
        .await
        .unwrap();
    assert_eq!(put.status().as_u16(), 405);

    let resp = client
        .delete(format!("{}/api/admin/feedback/{}", address, id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 204);
}
