//! 后端 HTTP 接口的线上类型
//!
//! 只描述结构，不负责请求校验或路由。

pub mod error_code;
pub mod types;

pub use error_code::ErrorCode;
pub use types::{
    ApiResponse, GetProfileResponseData, LoginRequest, LoginResponseData, ProfileResponse,
    RegisterRequest, UpdateProfileRequest, UpdateUserRequest,
};
