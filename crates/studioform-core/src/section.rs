//! Section configuration and anchor ids
//!
//! A layout section may carry an identifier. When it does, the section's
//! title gets a derived id (`{identifier}-title`) so in-page links can target
//! the heading directly.

use std::fmt;

use crate::error::{LayoutError, Result};

/// Suffix appended to a section identifier to form its title anchor
pub const TITLE_ANCHOR_SUFFIX: &str = "-title";

/// A non-empty, whitespace-free token usable as a DOM id
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct AnchorId(String);

impl AnchorId {
    /// Validate `raw` as an anchor id.
    ///
    /// HTML ids must contain at least one character and no ASCII whitespace;
    /// nothing else is restricted.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(LayoutError::EmptyIdentifier);
        }
        if raw.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(LayoutError::InvalidIdentifier(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive a sibling anchor by appending `suffix`
    pub fn with_suffix(&self, suffix: &str) -> String {
        format!("{}{}", self.0, suffix)
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Configuration captured by a section root for the lifetime of the instance
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SectionConfig {
    /// Anchor identifier of the section element
    pub identifier: Option<AnchorId>,
    /// Extra CSS classes appended to the section shell
    pub class: Option<String>,
}

impl SectionConfig {
    /// Section with a validated identifier and no extra styling
    pub fn with_identifier(raw: &str) -> Result<Self> {
        Ok(Self {
            identifier: Some(AnchorId::parse(raw)?),
            class: None,
        })
    }

    /// Build from optional caller input, dropping an unusable identifier.
    ///
    /// Sections render regardless of input, so an invalid identifier is
    /// logged and the section simply has no anchor.
    pub fn lenient(identifier: Option<&str>, class: Option<&str>) -> Self {
        let identifier = identifier.and_then(|raw| match AnchorId::parse(raw) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!("Ignoring section identifier: {}", e);
                None
            }
        });

        Self {
            identifier,
            class: class.filter(|c| !c.is_empty()).map(str::to_string),
        }
    }

    /// Anchor id for the section's title, if the section has an identifier
    pub fn title_anchor(&self) -> Option<String> {
        self.identifier
            .as_ref()
            .map(|id| id.with_suffix(TITLE_ANCHOR_SUFFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_id_rejects_empty() {
        assert_eq!(AnchorId::parse(""), Err(LayoutError::EmptyIdentifier));
    }

    #[test]
    fn anchor_id_rejects_whitespace() {
        assert_eq!(
            AnchorId::parse("our team"),
            Err(LayoutError::InvalidIdentifier("our team".to_string()))
        );
        assert!(AnchorId::parse("team\n").is_err());
    }

    #[test]
    fn anchor_id_accepts_tokens() {
        assert_eq!(AnchorId::parse("team").unwrap().as_str(), "team");
        assert_eq!(AnchorId::parse("works-2025").unwrap().to_string(), "works-2025");
    }

    #[test]
    fn title_anchor_derived_from_identifier() {
        let config = SectionConfig::with_identifier("team").unwrap();
        assert_eq!(config.title_anchor(), Some("team-title".to_string()));
    }

    #[test]
    fn title_anchor_absent_without_identifier() {
        assert_eq!(SectionConfig::default().title_anchor(), None);
    }

    #[test]
    fn lenient_drops_invalid_identifier() {
        let config = SectionConfig::lenient(Some(""), Some("grid"));
        assert_eq!(config.identifier, None);
        assert_eq!(config.class.as_deref(), Some("grid"));

        let config = SectionConfig::lenient(Some("works"), Some(""));
        assert_eq!(config.title_anchor().as_deref(), Some("works-title"));
        assert_eq!(config.class, None);
    }
}
