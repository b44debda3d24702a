//! Contract tests for `ApiClient` against a mock EasyPG backend.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | POST | `/auth/login` | `login_*` |
//! | POST | `/auth/register` | `register_*` |
//! | GET | `/auth/verify` | `verify_*` |
//! | POST | `/auth/logout` | `logout_*` |
//! | GET | `/dashboard/stats` | `dashboard_stats_*` |
//! | GET | `/dashboard/recent-*` | `recent_items_*` |
//! | GET | `/properties` | `search_*`, `list_*` |

use api::{ApiClient, ApiError, LoginRequest, RegisterRequest, SearchQuery};
use store::config::ApiConfig;
use store::{FilterSet, KeyValueStore, MemoryStore, UserRecord, UserType};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> (ApiClient<MemoryStore>, MemoryStore) {
    let store = MemoryStore::new();
    let config = ApiConfig {
        base_url: format!("{}/api", server.uri()),
        page_size: 12,
    };
    (ApiClient::new(&config, store.clone()), store)
}

fn signed_in(server: &MockServer, token: &str) -> ApiClient<MemoryStore> {
    let (client, _) = client(server);
    let user = UserRecord {
        id: "u-1".to_string(),
        email: "asha@example.com".to_string(),
        full_name: Some("Asha Patel".to_string()),
        phone: None,
        user_type: UserType::Owner,
        is_verified: None,
    };
    client.session().set_session(token, &user).unwrap();
    client
}

fn user_json(user_type: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "u-1",
        "email": "asha@example.com",
        "full_name": "Asha Patel",
        "phone": "9876543210",
        "user_type": user_type
    })
}

// ── /auth ───────────────────────────────────────────────────────────

#[tokio::test]
async fn login_posts_credentials_and_returns_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "email": "asha@example.com",
            "password": "secret1",
            "user_type": "owner"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Login successful",
            "token": "tok-abc",
            "user": user_json("owner")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client(&server);
    let resp = client
        .login(&LoginRequest {
            email: "asha@example.com".to_string(),
            password: "secret1".to_string(),
            user_type: UserType::Owner,
        })
        .await
        .unwrap();

    assert_eq!(resp.token.as_deref(), Some("tok-abc"));
    assert_eq!(resp.user.user_type, UserType::Owner);
    // Persisting the session is the caller's job.
    assert!(store.get("authToken").is_none());
}

#[tokio::test]
async fn login_rejection_surfaces_server_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"error": "Invalid email or password"})),
        )
        .mount(&server)
        .await;

    let (client, _) = client(&server);
    let err = client
        .login(&LoginRequest {
            email: "asha@example.com".to_string(),
            password: "wrong!!".to_string(),
            user_type: UserType::Student,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Request { status: 401, .. }));
    assert_eq!(err.to_string(), "Invalid email or password");
}

#[tokio::test]
async fn register_returns_user_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "message": "User registered successfully",
            "user": user_json("student")
        })))
        .mount(&server)
        .await;

    let (client, _) = client(&server);
    let resp = client
        .register(&RegisterRequest {
            email: "asha@example.com".to_string(),
            password: "secret1".to_string(),
            full_name: "Asha Patel".to_string(),
            phone: "9876543210".to_string(),
            user_type: UserType::Student,
        })
        .await
        .unwrap();
    assert!(resp.token.is_none());
    assert_eq!(resp.user.email, "asha@example.com");
}

#[tokio::test]
async fn register_conflict_falls_back_to_message_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(serde_json::json!({"message": "Email already registered"})),
        )
        .mount(&server)
        .await;

    let (client, _) = client(&server);
    let err = client
        .register(&RegisterRequest {
            email: "asha@example.com".to_string(),
            password: "secret1".to_string(),
            full_name: "Asha Patel".to_string(),
            phone: "9876543210".to_string(),
            user_type: UserType::Owner,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Request { status: 409, .. }));
    assert_eq!(err.to_string(), "Email already registered");
}

#[tokio::test]
async fn verify_sends_bearer_token_from_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/verify"))
        .and(header("authorization", "Bearer tok-xyz"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"user": user_json("owner")})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in(&server, "tok-xyz");
    let resp = client.verify().await.unwrap();
    assert_eq!(resp.user.unwrap().full_name.as_deref(), Some("Asha Patel"));
}

#[tokio::test]
async fn verify_without_session_sends_no_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/verify"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let (client, _) = client(&server);
    let err = client.verify().await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Request { status: 401, ref message } if message == "Request failed"
    ));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn logout_posts_with_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "Logged out"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in(&server, "tok-1");
    client.logout().await.unwrap();
}

// ── /dashboard ──────────────────────────────────────────────────────

#[tokio::test]
async fn dashboard_stats_sends_role_and_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .and(query_param("type", "owner"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "stats": {"total_properties": 3, "occupied_rooms": 11, "monthly_revenue": 54000}
        })))
        .mount(&server)
        .await;

    let client = signed_in(&server, "tok");
    let stats = client.dashboard_stats(UserType::Owner).await.unwrap();
    assert_eq!(stats.count("total_properties"), 3);
    assert_eq!(stats.count("pending_inquiries"), 0);
    assert_eq!(stats.amount("monthly_revenue"), 54000.0);
}

#[tokio::test]
async fn recent_items_path_depends_on_role() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/recent-pgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{
                "name": "Sunrise PG",
                "location": "Koramangala, Bangalore",
                "price": 8500,
                "rating": 4.5,
                "reviews": 23,
                "status": "Available"
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/recent-properties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
        .mount(&server)
        .await;

    let client = signed_in(&server, "tok");
    let student = client.recent_items(UserType::Student).await.unwrap();
    assert_eq!(student.len(), 1);
    assert_eq!(student[0].price, Some(8500.0));

    let owner = client.recent_items(UserType::Owner).await.unwrap();
    assert!(owner.is_empty());
}

// ── /properties ─────────────────────────────────────────────────────

#[tokio::test]
async fn search_sends_filters_and_reads_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .and(query_param("city", "Rajkot"))
        .and(query_param("amenities", "wifi"))
        .and(query_param("amenities", "ac"))
        .and(query_param("max_rent", "9000"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "properties": [{
                "id": "p-1",
                "property_name": "Green Valley PG",
                "property_type": "boys_pg",
                "gender_preference": "boys_only",
                "city": "Rajkot",
                "state": "Gujarat",
                "rent_per_month": 6500,
                "available_rooms": 2,
                "amenities": ["wifi", "ac"],
                "images": [{"image_url": "https://img.example/1.jpg"}]
            }],
            "pagination": {"page": 2, "pages": 4, "has_prev": true, "has_next": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in(&server, "tok");
    let mut filters = FilterSet {
        max_rent: Some(9000),
        ..FilterSet::default()
    };
    filters.amenities.insert("wifi".to_string());
    filters.amenities.insert("ac".to_string());
    let page = client
        .search_properties(&SearchQuery {
            location: "Rajkot".to_string(),
            filters,
            page: 2,
            per_page: 12,
        })
        .await
        .unwrap();

    assert_eq!(page.properties.len(), 1);
    assert_eq!(page.properties[0].main_image(), Some("https://img.example/1.jpg"));
    let pagination = page.pagination.unwrap();
    assert_eq!(pagination.pages, 4);
    assert!(pagination.has_prev);
}

#[tokio::test]
async fn search_server_error_without_body_uses_default_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = signed_in(&server, "tok");
    let err = client
        .search_properties(&SearchQuery {
            location: String::new(),
            filters: FilterSet::default(),
            page: 1,
            per_page: 12,
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Request failed");
}

#[tokio::test]
async fn list_without_pagination_block() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "properties": []
        })))
        .mount(&server)
        .await;

    let client = signed_in(&server, "tok");
    let page = client.list_properties().await.unwrap();
    assert!(page.properties.is_empty());
    assert!(page.pagination.is_none());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn list_reads_null_columns_and_decimal_rent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "properties": [{
                "id": "p-7",
                "property_name": "Shanti Girls PG",
                "property_type": "girls_pg",
                "gender_preference": null,
                "city": "Rajkot",
                "state": null,
                "rent_per_month": 6500.0,
                "available_rooms": null,
                "amenities": null,
                "images": []
            }]
        })))
        .mount(&server)
        .await;

    let client = signed_in(&server, "tok");
    let page = client.list_properties().await.unwrap();
    let listing = &page.properties[0];
    assert_eq!(listing.rent_per_month, 6500.0);
    assert_eq!(listing.state, "");
    assert_eq!(listing.gender_preference, "");
    assert_eq!(listing.available_rooms, 0);
    assert!(listing.amenities.is_empty());
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:9/api".to_string(),
        page_size: 12,
    };
    let client = ApiClient::new(&config, MemoryStore::new());
    let err = client.list_properties().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
