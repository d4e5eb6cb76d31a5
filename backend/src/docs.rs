use crate::models::auth::{
    ChangeEmailRequest, ChangePasswordRequest, ChangeUsernameRequest, LoginRequest,
    LoginResponse, RegisterRequest,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(
        LoginRequest,
        LoginResponse,
        RegisterRequest,
        ChangePasswordRequest,
        ChangeEmailRequest,
        ChangeUsernameRequest
    )),
    tags(
        (name = "Auth", description = "Login, registration and credential changes")
    )
)]
pub struct ApiDoc;
