//! 资料数据结构
//!
//! Web 端与后端共享的线上结构，由 ts-rs 导出 TypeScript 声明。

pub mod location;
pub mod profile;
pub mod tag;
pub mod yes_no;

pub use location::{LocationInfo, LocationType};
pub use profile::{SlotMismatch, UserProfile};
pub use tag::{
    ActivityTag, ExperienceTag, InterestTag, Labeled, LifeStyleTag, LoveExpectationTag, Tag,
};
pub use yes_no::YesNo;

/// 输出目录常量
pub const TS_EXPORT_PATH: &str = "../web/src/interface.generated.ts";
