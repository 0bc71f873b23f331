//! Page copy for the studio site.
//!
//! Plain data; the page components decide how it is laid out.

use crate::components::Icon;

pub const STUDIO_NAME: &str = "STUDIO FORM";

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Pillar {
    pub title: &'static str,
    pub body: &'static str,
    pub icon: Icon,
}

/// Grid footprint of a portfolio tile on wide screens
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WorkSpan {
    /// Two columns, two rows
    Feature,
    /// Two columns, one row
    Wide,
    Single,
}

impl WorkSpan {
    pub fn class(&self) -> &'static str {
        match self {
            WorkSpan::Feature => "span-feature",
            WorkSpan::Wide => "span-wide",
            WorkSpan::Single => "span-single",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Work {
    pub title: &'static str,
    pub kind: &'static str,
    pub year: &'static str,
    pub location: &'static str,
    pub span: WorkSpan,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Step {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Philosophy", href: "#philosophy" },
    NavLink { label: "Works", href: "#works" },
    NavLink { label: "Process", href: "#process" },
    NavLink { label: "Team", href: "#team" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const PILLARS: [Pillar; 3] = [
    Pillar {
        title: "Spatial Clarity",
        body: "We strip noise away so light can script the day, and material can speak quietly.",
        icon: Icon::Sparkles,
    },
    Pillar {
        title: "Low-Impact Living",
        body: "Passive-first planning, airtight envelopes, and healthy, low-toxicity material systems.",
        icon: Icon::Leaf,
    },
    Pillar {
        title: "Craft at Every Junction",
        body: "From shadow lines to thresholds, every detail is resolved for calm and longevity.",
        icon: Icon::Building,
    },
];

pub const WORKS: [Work; 6] = [
    Work { title: "Northcote Light Court", kind: "Residential", year: "2025", location: "Northcote", span: WorkSpan::Feature },
    Work { title: "Elwood Courtyard House", kind: "Renovation", year: "2024", location: "Elwood", span: WorkSpan::Single },
    Work { title: "Brunswick Brick Pavilion", kind: "New Build", year: "2025", location: "Brunswick", span: WorkSpan::Single },
    Work { title: "Fitzroy Terrace Reframed", kind: "Adaptive Reuse", year: "2023", location: "Fitzroy", span: WorkSpan::Single },
    Work { title: "Brighton Coastal Residence", kind: "Residential", year: "2026", location: "Brighton", span: WorkSpan::Wide },
    Work { title: "Armadale Garden Rooms", kind: "Extension", year: "2024", location: "Armadale", span: WorkSpan::Single },
];

pub const STEPS: [Step; 4] = [
    Step { title: "Consult", body: "Brief, site and budget alignment with direct strategic recommendations." },
    Step { title: "Concept", body: "Options, daylight studies and material narratives shaped into one direction." },
    Step { title: "Design", body: "Approvals, consultant coordination, and precise construction documentation." },
    Step { title: "Build", body: "Tender review, site collaboration and finish-level quality stewardship." },
];

pub const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Amelia Hart",
        role: "Founding Director",
        bio: "Leads monolithic form, light modulation, and calm spatial sequencing.",
    },
    TeamMember {
        name: "Noah Reeves",
        role: "Associate Architect",
        bio: "Focuses on embodied-carbon reduction and high-performance detailing.",
    },
    TeamMember {
        name: "Sofia Lin",
        role: "Interiors & Materials",
        bio: "Curates tactile palettes of stone, timber and hand-finished surfaces.",
    },
];

pub const CONTACT_FIELDS: [&str; 3] = ["Name", "Email", "Project Type"];

/// Two-digit ordinal label: 0 → "01"
pub fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_are_in_page_anchors() {
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#'), "{}", link.href);
            assert!(link.href.len() > 1);
        }
    }

    #[test]
    fn portfolio_leads_with_one_feature_tile() {
        assert_eq!(WORKS[0].span, WorkSpan::Feature);
        assert_eq!(WORKS.iter().filter(|w| w.span == WorkSpan::Feature).count(), 1);
        assert_eq!(WorkSpan::Wide.class(), "span-wide");
    }

    #[test]
    fn ordinals_are_two_digits() {
        assert_eq!(ordinal(0), "01");
        assert_eq!(ordinal(3), "04");
        assert_eq!(ordinal(11), "12");
    }
}
