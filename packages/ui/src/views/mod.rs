mod auth;
pub use auth::AuthView;

mod dashboard;
pub use dashboard::DashboardView;

mod home;
pub use home::HomeView;

mod search;
pub use search::SearchView;

mod settings;
pub use settings::SettingsView;
