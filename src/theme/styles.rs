//! Global CSS styles for the Studio Form page.
//!
//! Palette variables come from `root_variables()`; section and card styles
//! ship with the component crate.

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-body);
  background: var(--ink);
  color: var(--parchment);
  line-height: 1.6;
  min-height: 100vh;
}

::selection {
  background: var(--accent-warm);
  color: var(--ink);
}

a {
  color: inherit;
  text-decoration: none;
}

.icon {
  width: 1.5rem;
  height: 1.5rem;
  flex-shrink: 0;
}

.icon--sm {
  width: 1rem;
  height: 1rem;
}

.icon--lg {
  width: 1.75rem;
  height: 1.75rem;
  color: var(--accent-warm);
}

/* === Backdrop === */
.backdrop {
  pointer-events: none;
  position: fixed;
  inset: 0;
  z-index: -10;
  overflow: hidden;
}

.aurora {
  position: absolute;
  width: 60vw;
  height: 60vw;
  border-radius: 50%;
  filter: blur(120px);
  opacity: 0.35;
  animation: aurora-drift 24s ease-in-out infinite alternate;
}

.aurora-1 {
  top: -20vw;
  left: -10vw;
  background: radial-gradient(circle, rgba(248, 176, 144, 0.5), transparent 70%);
}

.aurora-2 {
  bottom: -25vw;
  right: -15vw;
  background: radial-gradient(circle, rgba(173, 215, 255, 0.4), transparent 70%);
  animation-duration: 30s;
}

.noise-overlay {
  position: absolute;
  inset: 0;
  opacity: 0.05;
  background-image: repeating-radial-gradient(circle at 0 0, rgba(255, 255, 255, 0.4) 0, transparent 1px, transparent 3px);
}

@keyframes aurora-drift {
  from { transform: translate3d(0, 0, 0) scale(1); }
  to { transform: translate3d(4vw, 3vw, 0) scale(1.1); }
}

/* === Navigation === */
.site-nav {
  position: fixed;
  inset: 0 0 auto 0;
  z-index: 50;
  border-bottom: 1px solid var(--hairline);
  background: rgba(9, 11, 16, 0.55);
  backdrop-filter: blur(40px);
  -webkit-backdrop-filter: blur(40px);
  animation: nav-enter 600ms ease-out both;
}

.site-nav__inner {
  margin: 0 auto;
  display: flex;
  height: 5rem;
  max-width: 80rem;
  align-items: center;
  justify-content: space-between;
  padding: 0 1.5rem;
}

.wordmark {
  font-family: var(--font-display);
  font-size: 1.25rem;
  letter-spacing: 0.28em;
}

.site-nav__links {
  display: none;
  align-items: center;
  gap: 2rem;
}

.site-nav__link {
  font-size: 0.875rem;
  text-transform: uppercase;
  letter-spacing: 0.18em;
  color: rgba(255, 255, 255, 0.7);
  transition: color 200ms ease, transform 200ms ease;
}

.site-nav__link:hover {
  color: var(--accent-warm);
  transform: translateY(-2px);
}

.menu-toggle {
  background: none;
  border: none;
  color: var(--parchment);
  cursor: pointer;
}

.mobile-menu {
  overflow: hidden;
  max-height: 0;
  opacity: 0;
  border-top: 1px solid var(--hairline);
  background: rgba(9, 11, 16, 0.95);
  transition: max-height 300ms ease, opacity 300ms ease;
}

.mobile-menu.open {
  max-height: 24rem;
  opacity: 1;
}

.mobile-menu__links {
  padding: 1rem 1.5rem;
}

.mobile-menu__link {
  display: block;
  padding: 0.75rem 0;
  font-size: 0.875rem;
  text-transform: uppercase;
  letter-spacing: 0.16em;
  color: rgba(255, 255, 255, 0.7);
}

@media (min-width: 768px) {
  .site-nav__links { display: flex; }
  .menu-toggle, .mobile-menu { display: none; }
}

@media (min-width: 1024px) {
  .site-nav__inner { padding: 0 3rem; }
}

@keyframes nav-enter {
  from { opacity: 0; transform: translateY(-24px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Hero === */
.hero {
  position: relative;
  display: flex;
  min-height: 100vh;
  align-items: flex-end;
  overflow: hidden;
  padding: 8rem 1.5rem 4rem;
}

.hero__backdrop {
  position: absolute;
  inset: 0;
  will-change: transform;
}

.hero__glow {
  height: 100%;
  width: 100%;
  background:
    radial-gradient(circle at 18% 16%, rgba(253, 180, 143, 0.25), transparent 35%),
    radial-gradient(circle at 85% 5%, rgba(141, 196, 255, 0.15), transparent 28%),
    linear-gradient(130deg, #0d1016 5%, #090b10 56%, #06080d 100%);
}

.hero__grid {
  position: relative;
  margin: 0 auto;
  display: grid;
  width: 100%;
  max-width: 80rem;
  gap: 2.5rem;
}

.hero__intro {
  animation: rise 750ms ease-out both;
}

.hero__eyebrow {
  font-size: 0.875rem;
  text-transform: uppercase;
  letter-spacing: 0.22em;
  color: rgba(255, 255, 255, 0.65);
}

.hero__title {
  margin-top: 1.5rem;
  font-family: var(--font-display);
  font-size: 3rem;
  font-weight: 400;
  line-height: 0.88;
}

.hero__lead {
  margin-top: 2rem;
  max-width: 36rem;
  font-size: 1.125rem;
  color: var(--text-soft);
}

.hero__cta {
  margin-top: 2.5rem;
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  border-bottom: 1px solid var(--accent-warm);
  padding-bottom: 0.25rem;
  font-size: 0.875rem;
  text-transform: uppercase;
  letter-spacing: 0.16em;
  color: var(--accent-warm);
  transition: transform 200ms ease;
}

.hero__cta:hover {
  transform: translateX(4px);
}

.hero__panel {
  padding: 1.5rem;
  animation: slide-in 800ms ease-out 200ms both;
}

.spotlight-frame {
  aspect-ratio: 4 / 5;
  border-radius: 1.4rem;
  padding: 1.5rem;
  background:
    radial-gradient(circle at 70% 20%, rgba(255, 255, 255, 0.14), transparent 45%),
    linear-gradient(160deg, #1c2432, #0e131b);
}

.spotlight-frame__inner {
  display: flex;
  height: 100%;
  flex-direction: column;
  justify-content: space-between;
  color: rgba(255, 255, 255, 0.7);
}

.spotlight-frame__label {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.2em;
}

.spotlight-frame__caption {
  font-family: var(--font-display);
  font-size: 1.875rem;
  line-height: 1.25;
}

@media (min-width: 640px) {
  .hero__title { font-size: 4.5rem; }
}

@media (min-width: 1024px) {
  .hero { padding-left: 3rem; padding-right: 3rem; }
  .hero__grid { grid-template-columns: 1.1fr 0.9fr; }
  .hero__title { font-size: 6rem; }
}

@keyframes rise {
  from { opacity: 0; transform: translateY(24px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes slide-in {
  from { opacity: 0; transform: translateX(28px); }
  to { opacity: 1; transform: translateX(0); }
}

/* === Grids === */
.grid {
  display: grid;
  gap: 1.5rem;
}

.grid--tight {
  gap: 1rem;
}

.reveal-block > .glass-panel {
  height: 100%;
}

@media (min-width: 768px) {
  .grid-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
  .grid-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }
}

/* === Works === */
.works-grid {
  grid-auto-rows: 220px;
}

.work-tile {
  position: relative;
  height: 100%;
  overflow: hidden;
  border-radius: 1.4rem;
  border: 1px solid rgba(255, 255, 255, 0.15);
  background: linear-gradient(145deg, var(--ink-tile), #11161f);
  padding: 1.5rem;
  transition: transform 250ms ease;
}

.work-tile:hover {
  transform: translateY(-6px);
}

.work-tile__shade {
  position: absolute;
  inset: 0;
  background:
    radial-gradient(circle at 15% 20%, rgba(173, 215, 255, 0.22), transparent 35%),
    linear-gradient(to top, rgba(0, 0, 0, 0.65), transparent 52%);
}

.work-tile__body {
  position: relative;
  display: flex;
  height: 100%;
  flex-direction: column;
  justify-content: flex-end;
}

.work-tile__meta {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.18em;
  color: rgba(255, 255, 255, 0.75);
}

.work-tile__title {
  margin-top: 0.5rem;
  font-family: var(--font-display);
  font-size: 1.5rem;
  font-weight: 400;
  line-height: 1.25;
}

.work-tile__location {
  margin-top: 0.5rem;
  font-size: 0.875rem;
  color: rgba(255, 255, 255, 0.7);
}

@media (min-width: 768px) {
  .span-feature { grid-column: span 2; grid-row: span 2; }
  .span-wide { grid-column: span 2; grid-row: span 1; }
  .span-single { grid-column: span 1; grid-row: span 1; }
}

/* === Team === */
.team-card {
  overflow: hidden;
  height: 100%;
}

.team-card__portrait {
  aspect-ratio: 3 / 4;
  background: linear-gradient(165deg, #2a3346, #1b2330);
  padding: 1.5rem;
  font-family: var(--font-display);
  font-size: 1.5rem;
  color: rgba(255, 255, 255, 0.75);
}

.team-card__body {
  padding: 1.5rem;
}

.team-card__name {
  font-family: var(--font-display);
  font-size: 1.5rem;
  font-weight: 400;
}

.team-card__role {
  margin-top: 0.5rem;
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.16em;
  color: var(--accent-cool);
}

.team-card__bio {
  margin-top: 1rem;
  color: var(--text-soft);
}

/* === Contact === */
.contact {
  border-top: 1px solid var(--hairline);
  border-bottom: 1px solid var(--hairline);
  background: rgba(11, 15, 22, 0.8);
  backdrop-filter: blur(24px);
  padding: 6rem 0;
}

.contact__grid {
  margin: 0 auto;
  display: grid;
  max-width: 80rem;
  gap: 2.5rem;
  padding: 0 1.5rem;
}

.contact__kicker {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.24em;
  color: var(--text-muted);
}

.contact__title {
  margin-top: 1.25rem;
  font-family: var(--font-display);
  font-size: 3rem;
  font-weight: 400;
  line-height: 0.95;
}

.contact__lead {
  margin-top: 1.5rem;
  color: var(--text-soft);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 2rem;
}

.contact-form__label {
  display: block;
  font-size: 0.875rem;
  text-transform: uppercase;
  letter-spacing: 0.14em;
  color: rgba(255, 255, 255, 0.7);
}

.contact-form__input,
.contact-form__textarea {
  margin-top: 0.5rem;
  width: 100%;
  background: transparent;
  font: inherit;
  font-size: 1rem;
  text-transform: none;
  letter-spacing: normal;
  color: #fff;
  outline: none;
}

.contact-form__input {
  border: none;
  border-bottom: 1px solid rgba(255, 255, 255, 0.25);
  padding: 0.75rem 0;
}

.contact-form__textarea {
  border: 1px solid rgba(255, 255, 255, 0.2);
  border-radius: 0.75rem;
  padding: 0.75rem;
  resize: vertical;
}

.contact-form__input::placeholder,
.contact-form__textarea::placeholder {
  color: rgba(255, 255, 255, 0.4);
}

.contact-form__input:focus,
.contact-form__textarea:focus {
  border-color: var(--accent-warm);
}

.btn-enquiry {
  display: inline-flex;
  align-self: flex-start;
  align-items: center;
  gap: 0.5rem;
  border-radius: 9999px;
  border: 1px solid var(--accent-warm);
  background: transparent;
  padding: 0.75rem 1.5rem;
  font-size: 0.875rem;
  text-transform: uppercase;
  letter-spacing: 0.16em;
  color: var(--accent-warm);
  cursor: pointer;
}

.form-note {
  font-size: 0.75rem;
  color: var(--text-muted);
}

@media (min-width: 1024px) {
  .contact__grid { grid-template-columns: repeat(2, minmax(0, 1fr)); padding: 0 3rem; }
}

/* === Footer === */
.site-footer {
  margin: 0 auto;
  max-width: 80rem;
  padding: 2.5rem 1.5rem;
}

.site-footer__grid {
  display: grid;
  gap: 2rem;
}

.site-footer__tagline {
  margin-top: 0.5rem;
  font-size: 0.875rem;
  color: rgba(255, 255, 255, 0.65);
}

.site-footer__social {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.site-footer__social a {
  color: rgba(255, 255, 255, 0.7);
  transition: color 200ms ease, transform 200ms ease;
}

.site-footer__social a:hover {
  color: var(--accent-warm);
  transform: translateY(-2px);
}

.newsletter {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  border-bottom: 1px solid rgba(255, 255, 255, 0.25);
  padding-bottom: 0.5rem;
}

.newsletter__input {
  width: 100%;
  border: none;
  background: transparent;
  font: inherit;
  font-size: 0.875rem;
  color: #fff;
  outline: none;
}

.newsletter__submit {
  border: none;
  background: none;
  color: var(--accent-warm);
  cursor: pointer;
}

.site-footer__legal {
  margin-top: 2rem;
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.14em;
  color: rgba(255, 255, 255, 0.4);
}

@media (min-width: 768px) {
  .site-footer__grid { grid-template-columns: repeat(3, minmax(0, 1fr)); align-items: end; }
  .site-footer__social { justify-content: center; }
}

@media (min-width: 1024px) {
  .site-footer { padding-left: 3rem; padding-right: 3rem; }
}
"#;
