use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, ToSchema)]
pub struct LoginReqDto {
    #[schema(example = "kevin")]
    pub username: String,
    #[schema(example = "secret")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "kevin")]
    pub username: String,
    /// leaves visible to this user right after login
    #[schema(example = 12)]
    pub leave_count: usize,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct RefreshQuery {
    /// Bypass the cached snapshot and refetch from the sheet
    #[schema(example = false)]
    pub refresh: Option<bool>,
}

impl RefreshQuery {
    pub fn force(&self) -> bool {
        self.refresh.unwrap_or(false)
    }
}
