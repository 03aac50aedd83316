pub mod check;
pub mod config_gen;
pub mod export_types;
pub mod fmt;

pub use check::check_file;
pub use config_gen::config_generate;
pub use export_types::export_types;
pub use fmt::format_file;
