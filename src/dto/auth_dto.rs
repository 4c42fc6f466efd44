use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DealerAuthRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminAuthRequest {
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeAdminPasswordRequest {
    #[serde(rename = "currentPassword")]
    pub current_password: Option<String>,
    #[serde(rename = "newPassword")]
    pub new_password: Option<String>,
}
