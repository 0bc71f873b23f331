//! Theme: palette and global styles for the studio page.

mod colors;
mod styles;

pub use colors::root_variables;
pub use styles::GLOBAL_STYLES;
