use serde_repr::{Deserialize_repr, Serialize_repr};
use strum::EnumIter;
use ts_rs::TS;

use super::TS_EXPORT_PATH;
use crate::errors::ProfileError;

/// 是/否状态码（0: 否 1: 是）
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize_repr,
    Deserialize_repr,
    TS,
    EnumIter,
)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[ts(repr(enum))]
#[repr(u8)]
pub enum YesNo {
    #[default]
    No = 0,
    Yes = 1,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

impl From<YesNo> for bool {
    fn from(value: YesNo) -> Self {
        value.is_yes()
    }
}

impl TryFrom<i32> for YesNo {
    type Error = ProfileError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::No),
            1 => Ok(Self::Yes),
            other => Err(ProfileError::invalid_yes_no(format!(
                "Unknown yes/no code: {}. Valid: 0 (no), 1 (yes)",
                other
            ))),
        }
    }
}
