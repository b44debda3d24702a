//! Sign-in and sign-up: portal selection, form validation, and the two
//! submit paths.
//!
//! The page state is just the selected portal ([`UserType`]) and the
//! [`AuthMode`]; both start from the `type` and `mode` query parameters.
//! Validation runs before any request and stops at the first failing rule.

use std::sync::LazyLock;

use api::{ApiClient, ApiError, LoginRequest, RegisterRequest};
use regex::Regex;
use store::{KeyValueStore, UserRecord, UserType};

use crate::icons::IconKind;

pub const MSG_REQUIRED: &str = "Please fill in all required fields";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_SHORT_PASSWORD: &str = "Password must be at least 6 characters long";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MSG_INVALID_PHONE: &str = "Please enter a valid 10-digit phone number";
pub const MSG_LOGIN_SUCCESS: &str = "Login successful! Redirecting...";
pub const MSG_SIGNUP_SUCCESS: &str = "Account created successfully! Please sign in.";
pub const MSG_LOGIN_FAILED: &str = "Login failed";
pub const MSG_SIGNUP_FAILED: &str = "Registration failed";

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9]\d{9}$").expect("valid phone regex"));

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    /// Only `mode=signup` selects signup.
    pub fn from_query(mode: Option<&str>) -> Self {
        match mode {
            Some("signup") => AuthMode::Signup,
            _ => AuthMode::Login,
        }
    }

    pub fn is_signup(&self) -> bool {
        matches!(self, AuthMode::Signup)
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Signup => "Create Account",
        }
    }
}

/// Which portal is selected and whether the user is signing in or up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthFlow {
    pub user_type: UserType,
    pub mode: AuthMode,
}

impl AuthFlow {
    pub fn from_query(user_type: Option<&str>, mode: Option<&str>) -> Self {
        Self {
            user_type: user_type.and_then(UserType::parse).unwrap_or_default(),
            mode: AuthMode::from_query(mode),
        }
    }

    /// The admin portal is reached by link only; it hides the type tabs.
    pub fn shows_type_tabs(&self) -> bool {
        self.user_type != UserType::Admin
    }
}

/// Raw form values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub phone: String,
}

/// First failing rule's message, or `Ok` when the form may be submitted.
pub fn validate(form: &AuthForm, mode: AuthMode) -> Result<(), &'static str> {
    if form.email.is_empty() || form.password.is_empty() {
        return Err(MSG_REQUIRED);
    }
    if !EMAIL_RE.is_match(&form.email) {
        return Err(MSG_INVALID_EMAIL);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(MSG_SHORT_PASSWORD);
    }
    if mode.is_signup() {
        if form.full_name.is_empty() || form.phone.is_empty() {
            return Err(MSG_REQUIRED);
        }
        if form.password != form.confirm_password {
            return Err(MSG_PASSWORD_MISMATCH);
        }
        if !PHONE_RE.is_match(&form.phone) {
            return Err(MSG_INVALID_PHONE);
        }
    }
    Ok(())
}

/// Copy shown at the top of the form for each portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Portal {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}

pub fn portal(user_type: UserType) -> Portal {
    match user_type {
        UserType::Student => Portal {
            icon: IconKind::GraduationCap,
            title: "Student Portal",
            description: "Find and book your perfect PG accommodation",
            gradient: "linear-gradient(135deg, #3b82f6, #1d4ed8)",
        },
        UserType::Owner => Portal {
            icon: IconKind::Building,
            title: "PG Owner Portal",
            description: "Manage your properties and connect with students",
            gradient: "linear-gradient(135deg, #10b981, #059669)",
        },
        UserType::Admin => Portal {
            icon: IconKind::ShieldHalved,
            title: "Admin Portal",
            description: "Manage the entire EasyPG platform",
            gradient: "linear-gradient(135deg, #ef4444, #dc2626)",
        },
    }
}

/// Where a freshly signed-in user lands.
pub fn redirect_for(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Admin => "admin-dashboard.html",
        UserType::Owner => "/dashboard?type=owner",
        UserType::Student => "/dashboard?type=student",
    }
}

fn failure_message(err: &ApiError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Log in and persist the session. Returns the signed-in user.
pub async fn sign_in<S: KeyValueStore>(
    client: &ApiClient<S>,
    user_type: UserType,
    form: &AuthForm,
) -> Result<UserRecord, String> {
    let request = LoginRequest {
        email: form.email.clone(),
        password: form.password.clone(),
        user_type,
    };
    let response = client.login(&request).await.map_err(|e| {
        tracing::error!(error = %e, "Login failed");
        failure_message(&e, MSG_LOGIN_FAILED)
    })?;

    let Some(token) = response.token.filter(|t| !t.is_empty()) else {
        tracing::error!("Login response carried no token");
        return Err(MSG_LOGIN_FAILED.to_string());
    };
    client
        .session()
        .set_session(&token, &response.user)
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to persist session");
            e.to_string()
        })?;
    tracing::info!(user_type = %response.user.user_type, "Signed in");
    Ok(response.user)
}

/// Create an account. The session is left untouched.
pub async fn sign_up<S: KeyValueStore>(
    client: &ApiClient<S>,
    user_type: UserType,
    form: &AuthForm,
) -> Result<(), String> {
    let request = RegisterRequest {
        email: form.email.clone(),
        password: form.password.clone(),
        full_name: form.full_name.clone(),
        phone: form.phone.clone(),
        user_type,
    };
    client.register(&request).await.map_err(|e| {
        tracing::error!(error = %e, "Registration failed");
        failure_message(&e, MSG_SIGNUP_FAILED)
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::config::ApiConfig;
    use store::MemoryStore;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn login_form() -> AuthForm {
        AuthForm {
            email: "asha@example.com".to_string(),
            password: "secret1".to_string(),
            ..AuthForm::default()
        }
    }

    fn signup_form() -> AuthForm {
        AuthForm {
            confirm_password: "secret1".to_string(),
            full_name: "Asha Patel".to_string(),
            phone: "9876543210".to_string(),
            ..login_form()
        }
    }

    #[test]
    fn test_flow_from_query() {
        let flow = AuthFlow::from_query(Some("owner"), Some("signup"));
        assert_eq!(flow.user_type, UserType::Owner);
        assert_eq!(flow.mode, AuthMode::Signup);

        let flow = AuthFlow::from_query(Some("landlord"), Some("register"));
        assert_eq!(flow, AuthFlow::default());
        assert!(flow.shows_type_tabs());

        assert!(!AuthFlow::from_query(Some("admin"), None).shows_type_tabs());
    }

    #[test]
    fn test_missing_fields_checked_first() {
        let form = AuthForm {
            email: "not-an-email".to_string(),
            ..AuthForm::default()
        };
        assert_eq!(validate(&form, AuthMode::Login), Err(MSG_REQUIRED));
    }

    #[test]
    fn test_email_rule() {
        for bad in ["asha", "asha@example", "as ha@example.com", "@example.com"] {
            let form = AuthForm {
                email: bad.to_string(),
                ..login_form()
            };
            assert_eq!(validate(&form, AuthMode::Login), Err(MSG_INVALID_EMAIL), "{bad}");
        }
        assert_eq!(validate(&login_form(), AuthMode::Login), Ok(()));
    }

    #[test]
    fn test_password_length_rule() {
        let form = AuthForm {
            password: "12345".to_string(),
            ..login_form()
        };
        assert_eq!(validate(&form, AuthMode::Login), Err(MSG_SHORT_PASSWORD));
    }

    #[test]
    fn test_login_ignores_signup_fields() {
        let form = AuthForm {
            confirm_password: "different".to_string(),
            phone: "123".to_string(),
            ..login_form()
        };
        assert_eq!(validate(&form, AuthMode::Login), Ok(()));
    }

    #[test]
    fn test_signup_rules_in_order() {
        let form = AuthForm {
            phone: String::new(),
            confirm_password: "nope".to_string(),
            ..signup_form()
        };
        assert_eq!(validate(&form, AuthMode::Signup), Err(MSG_REQUIRED));

        let form = AuthForm {
            confirm_password: "secret2".to_string(),
            phone: "12345".to_string(),
            ..signup_form()
        };
        assert_eq!(validate(&form, AuthMode::Signup), Err(MSG_PASSWORD_MISMATCH));

        let form = AuthForm {
            phone: "5876543210".to_string(),
            ..signup_form()
        };
        assert_eq!(validate(&form, AuthMode::Signup), Err(MSG_INVALID_PHONE));

        assert_eq!(validate(&signup_form(), AuthMode::Signup), Ok(()));
    }

    #[test]
    fn test_redirects() {
        assert_eq!(redirect_for(UserType::Admin), "admin-dashboard.html");
        assert_eq!(redirect_for(UserType::Owner), "/dashboard?type=owner");
        assert_eq!(redirect_for(UserType::Student), "/dashboard?type=student");
    }

    #[test]
    fn test_portal_copy() {
        assert_eq!(portal(UserType::Owner).title, "PG Owner Portal");
        assert_eq!(portal(UserType::Admin).icon, IconKind::ShieldHalved);
        assert_eq!(AuthMode::Signup.submit_label(), "Create Account");
    }

    fn client_for(server: &MockServer) -> (ApiClient<MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        let config = ApiConfig {
            base_url: server.uri(),
            page_size: 12,
        };
        (ApiClient::new(&config, store.clone()), store)
    }

    #[tokio::test]
    async fn test_sign_in_persists_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": "tok-1",
                "user": {"id": "u-1", "email": "asha@example.com", "user_type": "owner"}
            })))
            .mount(&server)
            .await;

        let (client, store) = client_for(&server);
        let user = sign_in(&client, UserType::Owner, &login_form()).await.unwrap();
        assert_eq!(user.user_type, UserType::Owner);
        assert_eq!(store.get("authToken").as_deref(), Some("tok-1"));
        assert!(client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_in_failure_keeps_store_empty() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"error": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let (client, store) = client_for(&server);
        let err = sign_in(&client, UserType::Student, &login_form())
            .await
            .unwrap_err();
        assert_eq!(err, "Invalid credentials");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_sign_up_surfaces_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "Email already exists"})),
            )
            .mount(&server)
            .await;

        let (client, _) = client_for(&server);
        let err = sign_up(&client, UserType::Student, &signup_form())
            .await
            .unwrap_err();
        assert_eq!(err, "Email already exists");
    }
}
