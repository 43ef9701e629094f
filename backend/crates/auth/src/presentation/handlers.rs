//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    ListUsersUseCase, LogInInput, LogInUseCase, RefreshUseCase, RegisterInput, RegisterUseCase,
    TokenService,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    CreateUserRequest, LogInRequest, LogInResponse, RefreshResponse, UserResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            tokens: Arc::new(TokenService::new(&config)),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Log In
// ============================================================================

/// POST /api/auth/login
pub async fn log_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LogInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case
        .execute(LogInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = state.config.cookie().build_set_cookie(&output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LogInResponse {
            message: format!("Welcome back, {}!", output.name),
            name: output.name,
        }),
    ))
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /api/auth/refresh
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.cookie_name);

    let use_case = RefreshUseCase::new(state.tokens.clone());
    let output = use_case.execute(token)?;

    let cookie = state.config.cookie().build_set_cookie(&output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(RefreshResponse {
            message: "Session refreshed".to_string(),
            name: output.name,
        }),
    ))
}

// ============================================================================
// Users
// ============================================================================

/// POST /api/users
pub async fn create_user<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<CreateUserRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone());

    let output = use_case
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            name: output.name,
            email: output.email,
            created_at: output.created_at,
        }),
    ))
}

/// GET /api/users
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListUsersUseCase::new(state.repo.clone());

    let users = use_case.execute().await?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}
