use dioxus::prelude::*;
use studioform_ui::{MotionProvider, COMPONENT_STYLES};

use crate::context::settings;
use crate::pages::StudioPage;
use crate::theme::{root_variables, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles and the motion preference for the page.
#[component]
pub fn App() -> Element {
    let settings = use_hook(|| {
        let settings = settings();
        if settings.reduce_motion {
            tracing::info!("Motion reduced: headers start revealed, cards do not ease");
        }
        settings
    });
    let variables = use_hook(root_variables);

    rsx! {
        style { {variables} }
        style { {GLOBAL_STYLES} }
        style { {COMPONENT_STYLES} }
        MotionProvider { enabled: !settings.reduce_motion,
            StudioPage {}
        }
    }
}
