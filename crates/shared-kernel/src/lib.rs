// crates/shared-kernel/src/lib.rs
pub mod path;

pub use path::{normalize_lexically, resolve_against, rooted_relative, to_slash};
