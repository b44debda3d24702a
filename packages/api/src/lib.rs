//! # API crate — typed client for the EasyPG marketplace API
//!
//! Every page of the web front end talks to the backend through [`ApiClient`].
//! The client reads the bearer token from the session store on each call, so a
//! sign-in or sign-out in one place is seen by the next request everywhere.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Request assembly, transport and response decoding |
//! | [`error`] | [`ApiError`] and the server-message extraction rules |
//! | [`auth`] | `/auth/login`, `/auth/register`, `/auth/verify`, `/auth/logout` |
//! | [`dashboard`] | `/dashboard/stats` and the role-specific recent list |
//! | [`properties`] | `/properties` search and listing |
//!
//! Endpoints are inherent methods on [`ApiClient`], grouped by module.

pub mod auth;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod properties;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest, VerifyResponse};
pub use client::{ApiClient, Method, PreparedRequest, RequestOptions};
pub use dashboard::recent_items_path;
pub use error::ApiError;
pub use properties::SearchQuery;

pub use store::{
    DashboardStats, EasyPgConfig, FilterSet, Pagination, Property, PropertyPage, RecentItem,
    UserRecord, UserType,
};
