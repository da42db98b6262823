//! Global CSS for the portfolio.
//!
//! One stylesheet injected by the root component. Layout: fixed left
//! sidebar navigation, centered content column, rounded shadowed cards.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Light scheme */
  --paper: #fafafa;
  --ink: #1f2937;
  --ink-muted: #6b7280;
  --ink-faint: #9ca3af;
  --card-border: #e5e7eb;
  --link: #2563eb;

  /* Layout */
  --sidebar-width: 8rem;
  --content-max: 56rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-slow: 500ms ease-in-out;
}

@media (prefers-color-scheme: dark) {
  :root {
    --paper: #111827;
    --ink: #e5e7eb;
    --ink-muted: #9ca3af;
    --ink-faint: #6b7280;
    --card-border: #374151;
    --link: #60a5fa;
  }
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: ui-sans-serif, system-ui, 'Segoe UI', Helvetica, Arial, sans-serif;
  background: var(--paper);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Shell Layout === */
.shell {
  min-height: 100vh;
  padding: 1rem;
}

.sidebar {
  position: fixed;
  top: 0;
  left: 0;
  height: 100vh;
  width: var(--sidebar-width);
  display: flex;
  flex-direction: column;
  justify-content: center;
}

.content-column {
  max-width: var(--content-max);
  margin: 0 auto;
  padding: 1rem;
  display: flex;
  justify-content: center;
}

/* === Navigation === */
.nav-item {
  align-self: flex-start;
  margin: 0.75rem 0;
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  display: flex;
  align-items: center;
  gap: 0.5rem;
  cursor: pointer;
  color: var(--ink-faint);
  transition: all var(--transition-slow);
}

.nav-item:hover {
  color: var(--ink);
  margin-left: 0.5rem;
}

.nav-item.active {
  color: var(--ink);
  box-shadow: 0 4px 6px -1px rgb(0 0 0 / 0.1);
  transform: scale(1.05);
}

.nav-item.active:hover {
  margin-left: 0;
}

.nav-item__marker {
  font-size: 1.5rem;
  line-height: 1;
}

/* === Page === */
.page {
  display: flex;
  flex-direction: column;
  gap: 2rem;
  width: 100%;
}

.page-heading {
  font-size: 1.875rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 1rem;
}

.gallery {
  justify-content: center;
}

/* === Sections === */
.section-card {
  padding: 1.5rem;
  border-radius: 0.75rem;
  border-left: 1px solid var(--card-border);
  border-right: 1px solid var(--card-border);
  box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.1);
}

.section-card__title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.inner-section {
  padding: 1.5rem;
  border-radius: 0.75rem;
  box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.1);
  display: flex;
  flex-direction: column;
  height: 100%;
}

.inner-section__title {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.about-text {
  font-size: 1.125rem;
}

.bullet-list {
  list-style: disc inside;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.skill-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 1rem;
}

.skill-grid__cell {
  padding: 0.5rem;
}

/* === Experience Cards === */
.experience-card {
  padding: 1.5rem;
  border-radius: 0.75rem;
  border-left: 1px solid var(--card-border);
  border-right: 1px solid var(--card-border);
  box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.1);
}

.experience-card__title {
  font-size: 1.25rem;
  font-weight: 700;
}

.experience-card__company {
  color: var(--ink-muted);
  font-weight: 500;
}

.experience-card__duration {
  font-size: 0.875rem;
  font-style: italic;
  color: var(--ink-faint);
}

.experience-card__description {
  margin-top: 1rem;
}

/* === Showcase Cards === */
.showcase-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 1.5rem;
}

.showcase-card {
  padding: 1.5rem;
  border-radius: 0.75rem;
  box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.1);
}

.showcase-card__image {
  position: relative;
  width: 100%;
  height: 12rem;
  border-radius: 0.5rem;
  margin-bottom: 0.5rem;
  background-size: cover;
  background-position: center;
}

.showcase-card__scrim {
  position: absolute;
  inset: 0;
  border-radius: 0.5rem;
  background: linear-gradient(to bottom, rgba(0, 0, 0, 0) 50%, rgba(0, 0, 0, 1) 100%);
}

.showcase-card__title {
  position: absolute;
  bottom: 0.5rem;
  left: 0.5rem;
  color: #ffffff;
  font-size: 1.25rem;
  font-weight: 700;
}

.showcase-card__uid {
  color: var(--ink);
}

.showcase-card__uid--link {
  color: var(--link);
  text-decoration: underline;
  transition: color var(--transition-fast);
}
"#;
