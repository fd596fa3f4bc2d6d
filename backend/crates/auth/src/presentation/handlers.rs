//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    AccessTokenService, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
    UserAdminUseCase,
};
use crate::domain::entity::access_token::AuthenticatedUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;
use crate::presentation::dto::{
    ChangeRoleRequest, ChangeRoleResponse, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse, UserResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: AccessTokenService,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        let tokens = AccessTokenService::from_config(&config);
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
            tokens,
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<Json<RegisterResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let user = use_case
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(RegisterResponse {
        message: "User registered",
        user: user.into(),
    }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        token: output.token,
        user: output.user.into(),
    }))
}

// ============================================================================
// User Administration
// ============================================================================

/// GET /api/users
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let users = UserAdminUseCase::new(state.repo.clone()).list().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// PUT /api/users/{id}/role
pub async fn change_role<R>(
    State(state): State<AuthAppState<R>>,
    admin: AuthenticatedUser,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ChangeRoleRequest>, JsonRejection>,
) -> AuthResult<Json<ChangeRoleResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Path(id) = id?;
    let Json(req) = payload?;

    tracing::debug!(admin_id = %admin.id, target_id = id, role = %req.role, "Role change requested");

    let user = UserAdminUseCase::new(state.repo.clone())
        .change_role(UserId::new(id), req.role)
        .await?;

    Ok(Json(ChangeRoleResponse {
        message: "Role updated",
        user: user.into(),
    }))
}
