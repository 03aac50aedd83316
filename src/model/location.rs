//! 地区信息
//!
//! 国家 / 省份 / 城市三级地区共享同一个记录结构，通过 `type` 区分粒度。

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use strum::EnumIter;
use ts_rs::TS;

use super::TS_EXPORT_PATH;
use crate::errors::ProfileError;

/// 地区粒度
///
/// 使用 serde_repr 序列化为数字（1: 国家 2: 省份 3: 城市），
/// ts-rs 导出为 TypeScript 数字枚举。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr, TS, EnumIter,
)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[ts(repr(enum))]
#[repr(u8)]
pub enum LocationType {
    Country = 1,
    Province = 2,
    City = 3,
}

impl LocationType {
    /// 线上数字编码
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Province => "province",
            Self::City => "city",
        }
    }
}

impl TryFrom<i32> for LocationType {
    type Error = ProfileError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Country),
            2 => Ok(Self::Province),
            3 => Ok(Self::City),
            other => Err(ProfileError::invalid_location_type(format!(
                "Unknown location type code: {}. Valid: 1 (country), 2 (province), 3 (city)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for LocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for LocationType {
    type Err = ProfileError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "country" => Ok(Self::Country),
            "province" | "state" => Ok(Self::Province),
            "city" => Ok(Self::City),
            _ => Err(ProfileError::invalid_location_type(format!(
                "Invalid location type: '{}'. Valid: country, province, city",
                s
            ))),
        }
    }
}

/// 地区记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct LocationInfo {
    #[ts(type = "number")]
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LocationType,
}

impl LocationInfo {
    pub fn new(id: u64, name: impl Into<String>, kind: LocationType) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    pub fn is_country(&self) -> bool {
        self.kind == LocationType::Country
    }

    pub fn is_province(&self) -> bool {
        self.kind == LocationType::Province
    }

    pub fn is_city(&self) -> bool {
        self.kind == LocationType::City
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_code_round_trip() {
        for kind in LocationType::iter() {
            assert_eq!(LocationType::try_from(kind.code()).unwrap(), kind);
        }
    }

    #[test]
    fn test_out_of_range_codes_rejected() {
        for code in [0, 4, -1, 255] {
            let err = LocationType::try_from(code).unwrap_err();
            assert!(matches!(err, ProfileError::InvalidLocationType(_)));
        }
    }

    #[test]
    fn test_from_str_accepts_state_alias() {
        assert_eq!("State".parse::<LocationType>().unwrap(), LocationType::Province);
        assert!("district".parse::<LocationType>().is_err());
    }

    #[test]
    fn test_wire_key_is_type() {
        let info = LocationInfo::new(7, "Chengdu", LocationType::City);
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value, serde_json::json!({"id": 7, "name": "Chengdu", "type": 3}));
        assert!(info.is_city());
        assert!(!info.is_country());
    }
}
