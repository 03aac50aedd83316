//! 用户资料
//!
//! 与 Web 端 `IUserProfile` 字段一一对应的扁平结构。
//!
//! 可空列表（`Option<Vec<_>>`）只有两种线上状态：`null` 与数组。
//! "从未拉取" 和 "尚未填写" 在线上都是 `null`，这里不做区分。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::TS_EXPORT_PATH;
use super::location::{LocationInfo, LocationType};
use super::tag::{
    ActivityTag, ExperienceTag, InterestTag, Labeled, LifeStyleTag, LoveExpectationTag, Tag,
};
use super::yes_no::YesNo;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
pub struct UserProfile {
    /// 账号 ID（驼峰字段，来自登录态）
    #[serde(rename = "userId")]
    #[ts(type = "number")]
    pub account_id: u64,
    /// 头像
    pub image: Vec<String>,
    /// 资料 ID
    #[ts(type = "number")]
    pub id: u64,
    #[ts(type = "number")]
    pub user_id: u64,
    pub nickname: String,
    pub height: u32,
    pub body_type: i32,
    pub personality_type: i32,
    pub location_city_info: Option<LocationInfo>,
    pub gender: i32,
    pub find_gender: i32,
    pub school: String,
    #[ts(type = "number")]
    pub job_id: u64,
    pub job_name: String,
    pub education_level: i32,
    /// 出生日期（Unix 时间戳，秒）
    #[ts(type = "number")]
    pub birth: i64,
    pub income_type: i32,
    pub income_display: i32,
    pub email: String,
    /// 相册
    pub images: Vec<String>,
    pub intro: String,
    pub life_intro: String,
    pub hobby_intro: String,
    pub life_style_intro: String,
    pub find_location_city_ids: Option<Vec<LocationInfo>>,
    pub find_location_city_info: Option<Vec<LocationInfo>>,
    pub find_age_min: u32,
    pub find_age_max: u32,
    pub find_height_min: u32,
    pub find_height_max: u32,
    pub find_body_types: Option<Vec<i32>>,
    pub find_education_levels: Option<Vec<i32>>,
    pub find_other_intro: String,
    pub experience_tags: Option<Vec<ExperienceTag>>,
    pub interest_tags: Option<Vec<InterestTag>>,
    pub activity_tags: Option<Vec<ActivityTag>>,
    pub love_expectation_tags: Option<Vec<LoveExpectationTag>>,
    pub life_style_tags: Option<Vec<LifeStyleTag>>,
    pub required_fields: Vec<String>,
    pub is_stable: YesNo,
    /// 运营备注
    pub operation_remark: String,
    pub tags: Option<Vec<Tag>>,

    pub home_location_country_info: Option<LocationInfo>,
    pub home_location_state_info: Option<LocationInfo>,
    pub home_location_city_info: Option<LocationInfo>,

    #[ts(type = "number")]
    pub home_location_city_id: u64,
    #[ts(type = "number")]
    pub home_location_country_id: u64,
    #[ts(type = "number")]
    pub home_location_state_id: u64,
    #[ts(type = "number")]
    pub location_city_id: u64,
}

/// 地区字段与其粒度不符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotMismatch {
    /// 字段名（线上名称）
    pub slot: &'static str,
    /// 列表字段中的下标
    pub index: Option<usize>,
    pub expected: LocationType,
    pub found: LocationType,
}

impl std::fmt::Display for SlotMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(i) => write!(
                f,
                "{}[{}]: expected {}, found {}",
                self.slot, i, self.expected, self.found
            ),
            None => write!(
                f,
                "{}: expected {}, found {}",
                self.slot, self.expected, self.found
            ),
        }
    }
}

impl UserProfile {
    /// 检查每个已填写的地区字段是否与字段隐含的粒度一致
    pub fn location_slot_mismatches(&self) -> Vec<SlotMismatch> {
        let singles = [
            (
                "home_location_country_info",
                &self.home_location_country_info,
                LocationType::Country,
            ),
            (
                "home_location_state_info",
                &self.home_location_state_info,
                LocationType::Province,
            ),
            (
                "home_location_city_info",
                &self.home_location_city_info,
                LocationType::City,
            ),
            (
                "location_city_info",
                &self.location_city_info,
                LocationType::City,
            ),
        ];
        let lists = [
            ("find_location_city_ids", &self.find_location_city_ids),
            ("find_location_city_info", &self.find_location_city_info),
        ];

        let mut mismatches = Vec::new();
        for (slot, info, expected) in singles {
            if let Some(info) = info
                && info.kind != expected
            {
                mismatches.push(SlotMismatch {
                    slot,
                    index: None,
                    expected,
                    found: info.kind,
                });
            }
        }
        for (slot, list) in lists {
            for (index, info) in list.iter().flatten().enumerate() {
                if !info.is_city() {
                    mismatches.push(SlotMismatch {
                        slot,
                        index: Some(index),
                        expected: LocationType::City,
                        found: info.kind,
                    });
                }
            }
        }
        mismatches
    }

    /// 所有标签标题，按字段顺序排列
    pub fn tag_titles(&self) -> Vec<&str> {
        let mut out = Vec::new();
        extend_titles(&mut out, &self.experience_tags);
        extend_titles(&mut out, &self.interest_tags);
        extend_titles(&mut out, &self.activity_tags);
        extend_titles(&mut out, &self.love_expectation_tags);
        extend_titles(&mut out, &self.life_style_tags);
        extend_titles(&mut out, &self.tags);
        out
    }
}

fn extend_titles<'a, T: Labeled>(out: &mut Vec<&'a str>, tags: &'a Option<Vec<T>>) {
    out.extend(tags.iter().flatten().map(Labeled::title));
}
