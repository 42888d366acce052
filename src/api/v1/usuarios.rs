//! User collection endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::SanitizedUser;
use crate::infrastructure::user::CreateUserRequest;

/// Request to create a user.
///
/// All fields are optional at the deserialization boundary; presence is
/// validated by the service so the 400 message can list every missing
/// field at once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUsuarioApiRequest {
    #[serde(default, rename = "nome")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "senha")]
    pub password: Option<String>,
}

/// Parse a path segment as a user id.
///
/// A malformed segment is reported as not-found rather than a separate
/// 400, keeping the wire behavior of the pre-rewrite API.
fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

/// GET /v1/usuarios
pub async fn list_usuarios(
    State(state): State<AppState>,
) -> Result<Json<Vec<SanitizedUser>>, ApiError> {
    debug!("Listing all users");

    let users = state.user_service.list().await?;

    Ok(Json(users))
}

/// GET /v1/usuarios/{id}
pub async fn get_usuario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SanitizedUser>, ApiError> {
    debug!(id = %id, "Getting user");

    let user = match parse_id(&id) {
        Some(parsed) => state.user_service.get(parsed).await?,
        None => None,
    };

    user.map(Json).ok_or_else(|| {
        ApiError::not_found(format!("O usuário com o ID {} não foi encontrado", id))
    })
}

/// POST /v1/usuarios
pub async fn create_usuario(
    State(state): State<AppState>,
    Json(request): Json<CreateUsuarioApiRequest>,
) -> Result<(StatusCode, Json<SanitizedUser>), ApiError> {
    debug!(nome = ?request.name, email = ?request.email, "Creating user");

    let user = state
        .user_service
        .create(CreateUserRequest {
            name: request.name,
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.sanitize())))
}

/// DELETE /v1/usuarios/{id}
pub async fn delete_usuario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(id = %id, "Deleting user");

    let removed = match parse_id(&id) {
        Some(parsed) => state.user_service.delete(parsed).await?,
        None => false,
    };

    if !removed {
        return Err(ApiError::not_found(format!(
            "Usuário com o ID {} não foi encontrado",
            id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::user::{MockUserStore, UserStore};
    use crate::infrastructure::user::{BcryptHasher, UserService};

    fn test_state() -> AppState {
        let store = Arc::new(MockUserStore::new());
        let service = UserService::new(store, Arc::new(BcryptHasher::new()));
        AppState::new(Arc::new(service))
    }

    async fn state_with_ana() -> AppState {
        let state = test_state();
        let request = CreateUsuarioApiRequest {
            name: Some("Ana".to_string()),
            email: Some("ana@x.com".to_string()),
            password: Some("abc".to_string()),
        };
        create_usuario(State(state.clone()), Json(request))
            .await
            .unwrap();
        state
    }

    #[tokio::test]
    async fn test_list_empty() {
        let users = list_usuarios(State(test_state())).await.unwrap();

        assert!(users.0.is_empty());
    }

    #[tokio::test]
    async fn test_create_returns_sanitized_user() {
        let state = test_state();
        let request = CreateUsuarioApiRequest {
            name: Some("Ana".to_string()),
            email: Some("ana@x.com".to_string()),
            password: Some("abc".to_string()),
        };

        let (status, body) = create_usuario(State(state), Json(request)).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.0.id, 1);
        assert_eq!(body.0.name, "Ana");
        assert_eq!(body.0.email, "ana@x.com");
    }

    #[tokio::test]
    async fn test_create_missing_fields_message() {
        let request = CreateUsuarioApiRequest {
            name: Some("Ana".to_string()),
            email: Some(String::new()),
            password: Some(String::new()),
        };

        let err = create_usuario(State(test_state()), Json(request))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.response.message,
            "Parâmetros não informados: email, senha"
        );
    }

    #[tokio::test]
    async fn test_get_existing() {
        let state = state_with_ana().await;

        let user = get_usuario(State(state), Path("1".to_string()))
            .await
            .unwrap();

        assert_eq!(user.0.name, "Ana");
    }

    #[tokio::test]
    async fn test_get_missing_includes_id_in_message() {
        let err = get_usuario(State(test_state()), Path("7".to_string()))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(
            err.response.message,
            "O usuário com o ID 7 não foi encontrado"
        );
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_not_found() {
        let err = get_usuario(State(test_state()), Path("abc".to_string()))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let state = state_with_ana().await;

        let status = delete_usuario(State(state.clone()), Path("1".to_string()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = get_usuario(State(state), Path("1".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_missing_message() {
        let err = delete_usuario(State(test_state()), Path("3".to_string()))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.response.message, "Usuário com o ID 3 não foi encontrado");
    }

    #[tokio::test]
    async fn test_store_error_maps_to_internal() {
        let store = Arc::new(MockUserStore::new());
        store.set_should_fail(true).await;
        let dyn_store: Arc<dyn UserStore> = store;
        let service = UserService::new(dyn_store, Arc::new(BcryptHasher::new()));
        let state = AppState::new(Arc::new(service));

        let err = list_usuarios(State(state)).await.unwrap_err();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
