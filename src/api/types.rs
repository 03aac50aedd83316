//! 账号与资料接口的请求/响应类型

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::error_code::ErrorCode;
use crate::errors::ProfileError;
use crate::model::{TS_EXPORT_PATH, UserProfile};

/// 统一响应信封：`{ code, message, data }`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct ApiResponse<T> {
    pub code: ErrorCode,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: ErrorCode::Success,
            message: "ok".to_string(),
            data,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code.is_success()
    }
}

impl ApiResponse<Option<()>> {
    /// 错误响应，`data` 为 `null`
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

impl From<&ProfileError> for ApiResponse<Option<()>> {
    fn from(err: &ProfileError) -> Self {
        Self::error(ErrorCode::from(err), err.message())
    }
}

pub type ProfileResponse = ApiResponse<UserProfile>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, TS)]
#[ts(
    export,
    export_to = TS_EXPORT_PATH
)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, TS)]
#[ts(
    export,
    export_to = TS_EXPORT_PATH
)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, TS)]
#[ts(
    export,
    export_to = TS_EXPORT_PATH
)]
pub struct LoginResponseData {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default, TS)]
#[ts(
    export,
    export_to = TS_EXPORT_PATH
)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, TS)]
#[ts(
    export,
    export_to = TS_EXPORT_PATH
)]
pub struct GetProfileResponseData {
    /// 账号 ID（字符串形式）
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub image: String,
}

/// 管理端更新用户
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, TS)]
#[ts(
    export,
    export_to = TS_EXPORT_PATH
)]
pub struct UpdateUserRequest {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub image: String,
    #[ts(type = "Array<number>")]
    pub role_ids: Vec<u64>,
}
