#![allow(clippy::multiple_crate_versions)]

pub mod ignore;
pub mod junk;
pub mod platform;
pub mod targets;

pub use ignore::{DEFAULT_IGNORES, IgnorePredicate, IgnoreSpec};
pub use junk::{is_junk, is_not_junk};
pub use platform::{HostPlatform, TEMP_DIR_NAME, base_temp_dir};
pub use targets::{
    Arch, BasenameOptions, OFFICIAL_TARGETS, Platform, final_basename,
    official_platform_arch_combos, sanitize_app_name,
};
