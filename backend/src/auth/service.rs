//! Core business logic for the authentication system.

use crate::auth::models::*;
use crate::errors::{ServiceError, ServiceResult};
use crate::services::user_service::UserService;
use crate::storage::AppState;
use crate::utils::jwt::JwtUtils;
use validator::Validate;

/// Authentication service for handling registration, login, and token issuance
pub struct AuthService<'a> {
    state: &'a AppState,
    jwt_utils: JwtUtils,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(state: &'a AppState) -> ServiceResult<Self> {
        let jwt_utils = JwtUtils::new()?;

        Ok(AuthService { state, jwt_utils })
    }

    /// Register a new user. No token is issued; the caller logs in separately.
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        Self::validate_request(&request)?;

        let user_service = UserService::new(self.state);
        user_service
            .create_user(request.username, request.password)
            .await?;

        Ok(RegisterResponse {
            message: "User registered successfully".to_string(),
        })
    }

    /// Authenticate a user and issue a bearer token carrying their identity
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        Self::validate_request(&request)?;

        let user_service = UserService::new(self.state);
        let user = user_service
            .authenticate_user(&request.username, &request.password)
            .await?;

        let token = self.jwt_utils.generate_token(user.id, user.username)?;

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
        })
    }

    fn validate_request<T: Validate>(request: &T) -> ServiceResult<()> {
        if let Err(validation_errors) = request.validate() {
            let error_messages: Vec<String> = validation_errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |error| {
                        format!(
                            "{}: {}",
                            field,
                            error.message.as_ref().unwrap_or(&"Invalid value".into())
                        )
                    })
                })
                .collect();
            return Err(ServiceError::validation(error_messages.join(", ")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_service(state: &AppState) -> AuthService<'_> {
        AuthService {
            state,
            jwt_utils: JwtUtils::from_secret("test-secret", 3600),
        }
    }

    fn credentials(username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn register_then_login_issues_a_decodable_token() {
        let state = AppState::in_memory();
        let service = auth_service(&state);

        let registered = service.register(credentials("alice", "pw1")).await.unwrap();
        assert_eq!(registered.message, "User registered successfully");

        let response = service
            .login(LoginRequest {
                username: "alice".to_string(),
                password: "pw1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.message, "Login successful");

        let claims = JwtUtils::from_secret("test-secret", 3600)
            .validate_token(&response.token)
            .unwrap();
        assert_eq!(claims.sub, 1);
        assert_eq!(claims.username, "alice");
    }

    #[tokio::test]
    async fn register_rejects_an_existing_username() {
        let state = AppState::in_memory();
        let service = auth_service(&state);

        service.register(credentials("alice", "pw1")).await.unwrap();
        let error = service
            .register(credentials("alice", "pw2"))
            .await
            .unwrap_err();

        assert!(matches!(error, ServiceError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn register_rejects_blank_credentials() {
        let state = AppState::in_memory();
        let service = auth_service(&state);

        let error = service.register(credentials("", "pw1")).await.unwrap_err();
        assert!(matches!(error, ServiceError::Validation { .. }));
    }

    #[tokio::test]
    async fn login_with_bad_credentials_issues_no_token() {
        let state = AppState::in_memory();
        let service = auth_service(&state);

        service.register(credentials("alice", "pw1")).await.unwrap();

        let error = service
            .login(LoginRequest {
                username: "alice".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(error, ServiceError::InvalidCredentials));

        let error = service
            .login(LoginRequest {
                username: "nobody".to_string(),
                password: "pw1".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(error, ServiceError::InvalidCredentials));
    }
}
