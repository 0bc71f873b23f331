//! Static HTML export.
//!
//! Renders the page once on the server side with motion disabled, so every
//! header is visible without scripts.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dioxus::prelude::*;
use studioform_ui::{MotionProvider, COMPONENT_STYLES};

use crate::pages::StudioPage;
use crate::theme::{root_variables, GLOBAL_STYLES};

#[component]
fn StaticPage() -> Element {
    rsx! {
        MotionProvider { enabled: false,
            StudioPage {}
        }
    }
}

/// Body markup of the page
pub fn render_page() -> String {
    let mut dom = VirtualDom::new(StaticPage);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Complete HTML document with inlined styles
pub fn render_document() -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>Studio Form · Melbourne Architecture Studio</title>\n<style>\n{}{}{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        root_variables(),
        GLOBAL_STYLES,
        COMPONENT_STYLES,
        render_page()
    )
}

/// Write the static document to `path`, creating parent directories
pub fn export_to(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let document = render_document();
    fs::write(path, &document).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Exported static page ({} bytes) to {:?}", document.len(), path);
    Ok(())
}
