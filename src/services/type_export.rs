//! TypeScript 声明导出
//!
//! Rust 类型是唯一来源，Web 端的声明文件由这里生成。

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use ts_rs::TS;

use crate::api::{
    ApiResponse, ErrorCode, GetProfileResponseData, LoginRequest, LoginResponseData,
    RegisterRequest, UpdateProfileRequest, UpdateUserRequest,
};
use crate::errors::{ProfileError, Result};
use crate::model::{
    ActivityTag, ExperienceTag, InterestTag, LifeStyleTag, LocationInfo, LocationType,
    LoveExpectationTag, Tag, UserProfile, YesNo,
};

pub const GENERATED_BANNER: &str =
    "// This file was generated by dating-profile. Do not edit this file manually.";

/// 渲染所有导出类型的声明（被引用的类型在前）
pub fn typescript_declarations(banner: bool) -> String {
    let cfg = ts_rs::Config::default();
    let decls = [
        LocationType::decl(&cfg),
        YesNo::decl(&cfg),
        ErrorCode::decl(&cfg),
        LocationInfo::decl(&cfg),
        Tag::decl(&cfg),
        ExperienceTag::decl(&cfg),
        InterestTag::decl(&cfg),
        ActivityTag::decl(&cfg),
        LoveExpectationTag::decl(&cfg),
        LifeStyleTag::decl(&cfg),
        UserProfile::decl(&cfg),
        ApiResponse::<UserProfile>::decl(&cfg),
        RegisterRequest::decl(&cfg),
        LoginRequest::decl(&cfg),
        LoginResponseData::decl(&cfg),
        UpdateProfileRequest::decl(&cfg),
        GetProfileResponseData::decl(&cfg),
        UpdateUserRequest::decl(&cfg),
    ];

    let mut out = String::new();
    if banner {
        out.push_str(GENERATED_BANNER);
        out.push_str("\n\n");
    }
    for decl in decls {
        out.push_str("export ");
        out.push_str(&decl);
        out.push_str("\n\n");
    }
    out
}

/// 写出声明文件，必要时创建父目录
pub fn export_typescript<P: AsRef<Path>>(path: P, banner: bool) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        debug!("Creating directory: {}", parent.display());
        std::fs::create_dir_all(parent).map_err(|e| {
            ProfileError::export(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let content = typescript_declarations(banner);
    std::fs::write(path, content)
        .map_err(|e| ProfileError::export(format!("Failed to write {}: {}", path.display(), e)))?;
    info!("TypeScript declarations exported to {}", path.display());
    Ok(path.to_path_buf())
}
