//! 标签
//!
//! 资料中的五类标签（经历、兴趣、活动、恋爱期待、生活方式）线上结构完全相同，
//! 但各自是独立类型，避免把兴趣标签放进活动列表。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::TS_EXPORT_PATH;

/// 带标识与标题的标签
pub trait Labeled {
    fn id(&self) -> u64;
    fn title(&self) -> &str;
}

/// 声明一个标签类型：`{ id, title }`，实现 `Labeled`，并可与通用 `Tag` 互转
macro_rules! declare_tag {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = TS_EXPORT_PATH)]
        pub struct $name {
            #[ts(type = "number")]
            pub id: u64,
            pub title: String,
        }

        impl $name {
            pub fn new(id: u64, title: impl Into<String>) -> Self {
                Self {
                    id,
                    title: title.into(),
                }
            }
        }

        impl Labeled for $name {
            fn id(&self) -> u64 {
                self.id
            }

            fn title(&self) -> &str {
                &self.title
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, facet) => {
        declare_tag!($(#[$meta])* $name);

        impl From<Tag> for $name {
            fn from(tag: Tag) -> Self {
                Self {
                    id: tag.id,
                    title: tag.title,
                }
            }
        }

        impl From<$name> for Tag {
            fn from(tag: $name) -> Self {
                Self {
                    id: tag.id,
                    title: tag.title,
                }
            }
        }
    };
}

declare_tag!(
    /// 通用标签
    Tag
);
declare_tag!(
    /// 经历标签
    ExperienceTag,
    facet
);
declare_tag!(
    /// 兴趣标签
    InterestTag,
    facet
);
declare_tag!(
    /// 活动标签
    ActivityTag,
    facet
);
declare_tag!(
    /// 恋爱期待标签
    LoveExpectationTag,
    facet
);
declare_tag!(
    /// 生活方式标签
    LifeStyleTag,
    facet
);

/// 按顺序收集标题，不去重
pub fn titles<T: Labeled>(tags: &[T]) -> Vec<&str> {
    tags.iter().map(Labeled::title).collect()
}
