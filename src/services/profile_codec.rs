//! 资料 JSON 编解码
//!
//! 输入可以是单个资料对象、资料数组，或 `{ code, message, data }` 响应信封。

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::api::ApiResponse;
use crate::errors::{ProfileError, Result};
use crate::model::{SlotMismatch, UserProfile};

/// 解码单个资料
pub fn decode_profile(input: &str) -> Result<UserProfile> {
    serde_json::from_str(input).map_err(|e| {
        ProfileError::decode(format!(
            "Invalid profile at line {}, column {}: {}",
            e.line(),
            e.column(),
            e
        ))
    })
}

/// 解码资料数组，保持原有顺序
pub fn decode_profiles(input: &str) -> Result<Vec<UserProfile>> {
    serde_json::from_str(input).map_err(|e| {
        ProfileError::decode(format!(
            "Invalid profile list at line {}, column {}: {}",
            e.line(),
            e.column(),
            e
        ))
    })
}

/// 解码带信封的资料响应
pub fn decode_response(input: &str) -> Result<ApiResponse<UserProfile>> {
    let resp: ApiResponse<UserProfile> = serde_json::from_str(input)?;
    if !resp.is_success() {
        warn!(
            "Profile response carries non-success code {:?}: {}",
            resp.code, resp.message
        );
    }
    Ok(resp)
}

pub fn encode_profile(profile: &UserProfile, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(profile)
    } else {
        serde_json::to_string(profile)
    };
    out.map_err(|e| ProfileError::encode(e.to_string()))
}

pub fn encode_profiles(profiles: &[UserProfile], pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(profiles)
    } else {
        serde_json::to_string(profiles)
    };
    out.map_err(|e| ProfileError::encode(e.to_string()))
}

/// 解码后的资料文档，记住顶层是否为数组
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDocument {
    pub profiles: Vec<UserProfile>,
    pub is_list: bool,
}

impl ProfileDocument {
    /// 按原有形态重新编码：数组仍为数组（即使只有一个元素），对象仍为对象
    pub fn encode(&self, pretty: bool) -> Result<String> {
        match (self.is_list, self.profiles.as_slice()) {
            (false, [single]) => encode_profile(single, pretty),
            (_, many) => encode_profiles(many, pretty),
        }
    }
}

/// 从任意受支持的文档形态中取出资料
pub fn profiles_from_value(value: Value) -> Result<Vec<UserProfile>> {
    document_from_value(value).map(|doc| doc.profiles)
}

/// 同 `profiles_from_value`，并保留顶层形态（信封按其 `data` 判断）
pub fn document_from_value(value: Value) -> Result<ProfileDocument> {
    match value {
        Value::Array(items) => {
            let profiles = items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    serde_json::from_value(item)
                        .map_err(|e| ProfileError::decode(format!("Profile #{}: {}", i, e)))
                })
                .collect::<Result<Vec<UserProfile>>>()?;
            Ok(ProfileDocument {
                profiles,
                is_list: true,
            })
        }
        Value::Object(mut map) if is_envelope(&map) => {
            let data = map.remove("data").unwrap_or(Value::Null);
            if data.is_null() {
                return Err(ProfileError::decode("Response envelope has no data"));
            }
            debug!("Unwrapping response envelope");
            document_from_value(data)
        }
        Value::Object(map) => {
            let profile = serde_json::from_value(Value::Object(map))
                .map_err(|e| ProfileError::decode(format!("Profile: {}", e)))?;
            Ok(ProfileDocument {
                profiles: vec![profile],
                is_list: false,
            })
        }
        other => Err(ProfileError::decode(format!(
            "Expected a profile object, an array or a response envelope, got {}",
            json_kind(&other)
        ))),
    }
}

/// 读取资料文件
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<UserProfile>> {
    load_document(path).map(|doc| doc.profiles)
}

/// 读取资料文件，保留顶层形态
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<ProfileDocument> {
    let path = path.as_ref();
    debug!("Loading profiles from: {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| {
        ProfileError::file_operation(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|e| {
        ProfileError::decode(format!(
            "{} is not valid JSON (line {}, column {}): {}",
            path.display(),
            e.line(),
            e.column(),
            e
        ))
    })?;
    let doc = document_from_value(value)?;
    debug!(
        "Loaded {} profile(s) from {}",
        doc.profiles.len(),
        path.display()
    );
    Ok(doc)
}

/// 单个资料的结构检查结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileReport {
    /// 在文档中的位置
    pub index: usize,
    pub id: u64,
    pub user_id: u64,
    pub nickname: String,
    pub tag_count: usize,
    pub mismatches: Vec<SlotMismatch>,
}

impl ProfileReport {
    pub fn is_conforming(&self) -> bool {
        self.mismatches.is_empty()
    }
}

pub fn check_profiles(profiles: &[UserProfile]) -> Vec<ProfileReport> {
    profiles
        .iter()
        .enumerate()
        .map(|(index, profile)| {
            let mismatches = profile.location_slot_mismatches();
            for m in &mismatches {
                warn!("Profile {} (user {}): {}", profile.id, profile.user_id, m);
            }
            ProfileReport {
                index,
                id: profile.id,
                user_id: profile.user_id,
                nickname: profile.nickname.clone(),
                tag_count: profile.tag_titles().len(),
                mismatches,
            }
        })
        .collect()
}

fn is_envelope(map: &serde_json::Map<String, Value>) -> bool {
    map.contains_key("code") && map.contains_key("data") && !map.contains_key("user_id")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
