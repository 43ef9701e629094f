//! Auth Routers

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the auth router (login/refresh) with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create the users router (list/create) with PostgreSQL repository
pub fn users_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    users_router_generic(repo, config)
}

/// Create a generic auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState::new(repo, config);

    Router::new()
        .route("/login", post(handlers::log_in::<R>))
        .route("/refresh", post(handlers::refresh::<R>))
        .with_state(state)
}

/// Create a generic users router for any repository implementation
pub fn users_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState::new(repo, config);

    Router::new()
        .route(
            "/",
            get(handlers::list_users::<R>).post(handlers::create_user::<R>),
        )
        .with_state(state)
}
