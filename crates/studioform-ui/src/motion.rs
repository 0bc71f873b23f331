//! Motion context and viewport hooks
//!
//! Visibility and scroll position come from the webview through
//! `document::eval` scripts that stream values back to Rust. The decisions
//! made on those values (reveal once, clamp progress) live in
//! `studioform_core`.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::document::{self, Eval};
use dioxus::prelude::*;
use studioform_core::{scroll_progress, RevealState, ViewportAmount};

static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(0);

/// Page-wide switch for entrance reveals and hover easing
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MotionPreference {
    pub enabled: bool,
}

impl Default for MotionPreference {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Read the motion preference; motion is on when no provider exists
pub fn use_motion_preference() -> MotionPreference {
    try_use_context::<MotionPreference>().unwrap_or_default()
}

/// Provides a [`MotionPreference`] to everything below it
#[component]
pub fn MotionProvider(
    /// Whether reveals and hover springs animate
    #[props(default = true)]
    enabled: bool,
    children: Element,
) -> Element {
    use_context_provider(|| MotionPreference { enabled });

    rsx! {
        {children}
    }
}

/// Unique DOM id for an element the scripts need to find
pub(crate) fn next_element_id(prefix: &str) -> String {
    let n = NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", prefix, n)
}

fn observer_script(element_id: &str, amount: ViewportAmount) -> String {
    format!(
        r#"
const el = document.getElementById("{element_id}");
if (el) {{
  const observer = new IntersectionObserver((entries) => {{
    for (const entry of entries) {{
      dioxus.send(entry.intersectionRatio);
    }}
  }}, {{ threshold: [0, {amount}] }});
  observer.observe(el);
  await dioxus.recv();
  observer.disconnect();
}}
"#,
        element_id = element_id,
        amount = amount.value(),
    )
}

const SCROLL_SCRIPT: &str = r#"
const report = () => {
  const doc = document.documentElement;
  dioxus.send([window.scrollY, doc.scrollHeight, window.innerHeight]);
};
window.addEventListener("scroll", report, { passive: true });
window.addEventListener("resize", report);
report();
await dioxus.recv();
window.removeEventListener("scroll", report);
window.removeEventListener("resize", report);
"#;

/// A running page script that parks on `dioxus.recv()` until told to stop.
///
/// Dropping the handle sends the stop message, so the script tears down its
/// listeners both when the hook is done with it and when the owning
/// component unmounts (which drops the task holding the handle).
struct PageScript {
    eval: Eval,
    label: String,
}

impl PageScript {
    fn new(eval: Eval, label: impl Into<String>) -> Self {
        Self {
            eval,
            label: label.into(),
        }
    }

    fn start(script: &str, label: impl Into<String>) -> Self {
        Self::new(document::eval(script), label)
    }
}

impl Drop for PageScript {
    fn drop(&mut self) {
        if let Err(e) = self.eval.send(true) {
            tracing::trace!("Script for {} already finished: {:?}", self.label, e);
        }
    }
}

/// One-shot reveal for the element with `element_id`.
///
/// The returned state starts hidden (or revealed, when motion is disabled)
/// and flips to revealed the first time `amount` of the element is visible.
/// The observer is disconnected right after the reveal, or when the
/// component unmounts first.
pub fn use_reveal(element_id: String, amount: ViewportAmount) -> Signal<RevealState> {
    let motion = use_motion_preference();
    let mut state = use_signal(|| {
        if motion.enabled {
            RevealState::new()
        } else {
            RevealState::revealed_initially()
        }
    });

    use_effect(move || {
        if state.peek().is_revealed() {
            return;
        }
        let element_id = element_id.clone();
        spawn(async move {
            let mut script =
                PageScript::start(&observer_script(&element_id, amount), element_id.clone());
            loop {
                match script.eval.recv::<f64>().await {
                    Ok(ratio) => {
                        let mut next = *state.peek();
                        if next.observe(ratio, amount) {
                            state.set(next);
                            tracing::debug!("Revealed {} at ratio {:.2}", element_id, ratio);
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Visibility observer for {} stopped: {:?}", element_id, e);
                        break;
                    }
                }
            }
        });
    });

    state
}

/// Fraction of the page scrolled, updated on scroll and resize.
///
/// Stays at 0 when motion is disabled. The window listeners are removed
/// when the component unmounts.
pub fn use_scroll_progress() -> Signal<f64> {
    let motion = use_motion_preference();
    let mut progress = use_signal(|| 0.0);

    use_effect(move || {
        if !motion.enabled {
            return;
        }
        spawn(async move {
            let mut script = PageScript::start(SCROLL_SCRIPT, "scroll progress");
            loop {
                match script.eval.recv::<[f64; 3]>().await {
                    Ok([top, height, viewport]) => {
                        progress.set(scroll_progress(top, height, viewport));
                    }
                    Err(e) => {
                        tracing::warn!("Scroll listener stopped: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    progress
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::task::{Context, Poll};

    use dioxus::document::{EvalError, Evaluator};
    use dioxus::signals::{AnyStorage, UnsyncStorage};

    use super::*;

    #[test]
    fn motion_enabled_by_default() {
        assert!(MotionPreference::default().enabled);
    }

    #[test]
    fn element_ids_are_unique() {
        let a = next_element_id("section-header");
        let b = next_element_id("section-header");
        assert_ne!(a, b);
        assert!(a.starts_with("section-header-"));
    }

    #[test]
    fn observer_script_targets_element_and_threshold() {
        let script = observer_script("section-header-7", ViewportAmount::default());
        assert!(script.contains(r#"getElementById("section-header-7")"#));
        assert!(script.contains("threshold: [0, 0.3]"));
        assert!(script.contains("observer.disconnect()"));
    }

    #[test]
    fn scroll_script_removes_listeners_after_stop() {
        let stop = SCROLL_SCRIPT.find("await dioxus.recv()").unwrap();
        let removal = SCROLL_SCRIPT.find("removeEventListener(\"scroll\"").unwrap();
        assert!(stop < removal);
    }

    /// Evaluator that records what Rust sends to the page
    struct RecordingEvaluator {
        sent: Rc<RefCell<Vec<serde_json::Value>>>,
    }

    impl Evaluator for RecordingEvaluator {
        fn send(&self, data: serde_json::Value) -> Result<(), EvalError> {
            self.sent.borrow_mut().push(data);
            Ok(())
        }

        fn poll_recv(
            &mut self,
            _: &mut Context<'_>,
        ) -> Poll<Result<serde_json::Value, EvalError>> {
            Poll::Pending
        }

        fn poll_join(
            &mut self,
            _: &mut Context<'_>,
        ) -> Poll<Result<serde_json::Value, EvalError>> {
            Poll::Pending
        }
    }

    #[test]
    fn dropping_script_tells_page_to_stop() {
        let sent = Rc::new(RefCell::new(Vec::new()));
        let owner = UnsyncStorage::owner();
        let evaluator = owner.insert(Box::new(RecordingEvaluator { sent: sent.clone() })
            as Box<dyn Evaluator>);

        let script = PageScript::new(Eval::new(evaluator), "section-header-3");
        assert!(sent.borrow().is_empty());

        drop(script);
        assert_eq!(*sent.borrow(), vec![serde_json::Value::Bool(true)]);
    }

    #[test]
    fn dropping_finished_script_is_quiet() {
        let owner = UnsyncStorage::owner();
        let evaluator = owner.insert(Box::new(RecordingEvaluator {
            sent: Rc::new(RefCell::new(Vec::new())),
        }) as Box<dyn Evaluator>);
        let script = PageScript::new(Eval::new(evaluator), "hero");

        // The page side released the query before the component unmounted
        drop(owner);
        drop(script);
    }
}
