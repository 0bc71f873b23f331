//! Page-specific components for the studio site.
//!
//! Sections built from content live here; the reusable layout section and
//! toned card come from `studioform_ui`.

mod contact_form;
mod hero;
pub mod icons;
mod nav_header;
mod site_footer;
mod team_card;
mod work_tile;

pub use contact_form::ContactForm;
pub use hero::Hero;
pub use icons::{Icon, LucideIcon};
pub use nav_header::NavHeader;
pub use site_footer::SiteFooter;
pub use team_card::TeamCard;
pub use work_tile::WorkTile;
