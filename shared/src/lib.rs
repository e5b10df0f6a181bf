pub mod models;
pub mod utils;

// Plain data models and Brazilian number/document formatting shared by the
// engine library and the `govnext` binary. Nothing in here validates checksums;
// that lives in `engine::validation`.
