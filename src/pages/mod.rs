//! Page components.

mod studio;

pub use studio::{StudioPage, SECTION_IDS};
