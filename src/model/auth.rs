use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Username and password submitted to obtain a token or log in
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CredentialsPayload {
    #[validate(required(message = "This field is required."))]
    pub username: Option<String>,
    #[validate(required(message = "This field is required."))]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    /// Value for the `Authorization: Token <key>` header
    pub token: String,
}
