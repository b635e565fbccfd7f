use serde::{Deserialize, Serialize};

/// Payload for creating a user from the admin panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIn {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub can_invite: bool,
    #[serde(default)]
    pub can_manage: bool,
    #[serde(default)]
    pub can_manage_household: bool,
    #[serde(default)]
    pub can_organize: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOut {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub auth_method: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub household: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub group_slug: Option<String>,
    #[serde(default)]
    pub household_id: Option<String>,
    #[serde(default)]
    pub household_slug: Option<String>,
    #[serde(default)]
    pub can_invite: bool,
    #[serde(default)]
    pub can_manage: bool,
    #[serde(default)]
    pub can_manage_household: bool,
    #[serde(default)]
    pub can_organize: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgotPassword {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordResetToken {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockResults {
    pub unlocked: i64,
}

/// Credentials for `/api/auth/token`, sent form-encoded.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// Bearer token issued by `/api/auth/token`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}
