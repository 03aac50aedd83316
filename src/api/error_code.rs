//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};
use ts_rs::TS;

use crate::model::TS_EXPORT_PATH;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字，ts-rs 自动生成 TypeScript 类型。
/// 按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 2000-2099: 认证错误
/// - 3000-3099: 资料错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[ts(rename = "ErrorCode")]
#[ts(repr(enum))]
#[repr(i32)]
pub enum ErrorCode {
    // 成功
    Success = 0,

    // 通用错误 1000-1099
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    InternalServerError = 1005,

    // 认证错误 2000-2099
    AuthFailed = 2000,
    TokenExpired = 2001,
    TokenInvalid = 2002,
    EmailAlreadyExists = 2003,

    // 资料错误 3000-3099
    ProfileNotFound = 3000,
    ProfileDecodeFailed = 3001,
    ProfileInvalidLocation = 3002,
}

impl ErrorCode {
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl From<&crate::errors::ProfileError> for ErrorCode {
    fn from(err: &crate::errors::ProfileError) -> Self {
        use crate::errors::ProfileError;
        match err {
            ProfileError::Decode(_) | ProfileError::InvalidYesNo(_) => Self::ProfileDecodeFailed,
            ProfileError::InvalidLocationType(_) => Self::ProfileInvalidLocation,
            ProfileError::Validation(_) => Self::BadRequest,
            ProfileError::Encode(_)
            | ProfileError::FileOperation(_)
            | ProfileError::Config(_)
            | ProfileError::Export(_) => Self::InternalServerError,
        }
    }
}
