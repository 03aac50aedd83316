//! 服务层：资料编解码与 TypeScript 导出

pub mod profile_codec;
pub mod type_export;

pub use profile_codec::{
    ProfileDocument, ProfileReport, check_profiles, decode_profile, decode_profiles,
    decode_response, document_from_value, encode_profile, encode_profiles, load_document,
    load_profiles, profiles_from_value,
};
pub use type_export::{GENERATED_BANNER, export_typescript, typescript_declarations};
