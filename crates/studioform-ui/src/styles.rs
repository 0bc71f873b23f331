//! CSS for the layout section and toned card components.
//!
//! Relies on the custom properties declared by the app's global stylesheet
//! (`--font-display`, `--text-soft`, `--panel-*`).

pub const COMPONENT_STYLES: &str = r#"
/* === Layout Section === */
.layout-section {
  margin: 0 auto;
  max-width: 80rem;
  padding: 6rem 1.5rem;
}

@media (min-width: 1024px) {
  .layout-section {
    padding-left: 3rem;
    padding-right: 3rem;
  }
}

.layout-section__kicker {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.28em;
  color: rgba(255, 255, 255, 0.6);
}

.layout-section__title {
  font-family: var(--font-display);
  font-size: 2.25rem;
  font-weight: 400;
  line-height: 0.95;
}

@media (min-width: 640px) {
  .layout-section__title { font-size: 3rem; }
}

@media (min-width: 1024px) {
  .layout-section__title { font-size: 3.75rem; }
}

.layout-section__kicker + .layout-section__title {
  margin-top: 1rem;
}

.layout-section__lead {
  margin-top: 1.5rem;
  max-width: 42rem;
  color: var(--text-soft);
}

.layout-section__content {
  margin-top: 3rem;
}

/* === Toned Card === */
.glass-panel {
  position: relative;
  border-radius: 1.6rem;
  border: 1px solid rgba(255, 255, 255, 0.14);
  backdrop-filter: blur(24px);
  -webkit-backdrop-filter: blur(24px);
  will-change: transform;
}

.glass-warm {
  background: var(--panel-warm);
}

.glass-cool {
  background: var(--panel-cool);
}

.toned-card {
  padding: 2rem;
}

.toned-card__eyebrow {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.2em;
}

.toned-card__title {
  margin-top: 1rem;
  font-family: var(--font-display);
  font-size: 1.875rem;
  font-weight: 400;
  line-height: 1.25;
}

.toned-card__body {
  margin-top: 1rem;
  color: var(--text-soft);
}
"#;
