//! Global CSS styles for the Travel Mood Board.
//!
//! Light neutral page, sky accents, responsive grids that step from one
//! column up to three (gallery) or six (palette).

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NEUTRAL */
  --neutral-50: #fafafa;
  --neutral-200: #e5e5e5;
  --neutral-500: #737373;
  --neutral-600: #525252;
  --neutral-700: #404040;
  --neutral-900: #171717;

  /* SKY */
  --sky-50: #f0f9ff;
  --sky-200: #bae6fd;
  --sky-700: #0369a1;
  --sky-800: #075985;
  --sky-900: #0c4a6e;
  --blue-50: #eff6ff;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;

  /* Surfaces */
  --radius: 0.75rem;
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
  --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
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
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  color: var(--neutral-900);
  line-height: 1.5;
}

h1 { font-size: var(--text-2xl); font-weight: 500; }
h2 { font-size: var(--text-xl); font-weight: 500; }
h3 { font-size: var(--text-lg); font-weight: 500; }
h4 { font-size: var(--text-base); font-weight: 500; }

/* === Page Container === */
.page {
  min-height: 100vh;
  background: var(--neutral-50);
}

.page__container {
  width: 100%;
  max-width: 1280px;
  margin: 0 auto;
  padding: 3rem 1rem;
}

.mood-board > * + * {
  margin-top: 3rem;
}

/* === Intro === */
.board-intro {
  text-align: center;
}

.board-intro__text {
  max-width: 42rem;
  margin: 1rem auto 0;
  color: var(--neutral-600);
}

/* === Sections === */
.board-section__header {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

/* === Badge === */
.badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.125rem 0.625rem;
  border-radius: 0.375rem;
  font-size: var(--text-xs);
  font-weight: 500;
  white-space: nowrap;
}

.badge--default {
  background: var(--sky-700);
  color: white;
}

.badge--secondary {
  background: var(--neutral-200);
  color: var(--neutral-900);
}

.badge--outline {
  border: 1px solid var(--neutral-200);
  color: var(--neutral-700);
}

.icon {
  flex-shrink: 0;
}

/* === Card === */
.card {
  background: white;
  border: 1px solid var(--neutral-200);
  border-radius: var(--radius);
  overflow: hidden;
}

.card--interactive {
  transition: box-shadow var(--transition-fast);
}

.card--interactive:hover {
  box-shadow: var(--shadow-lg);
}

.card--highlight {
  background: linear-gradient(to bottom right, var(--sky-50), var(--blue-50));
  border-color: var(--sky-200);
}

/* === Mood Tags === */
.mood-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

.mood-tag {
  padding: 0.5rem 1rem;
  background: linear-gradient(to right, var(--sky-50), var(--blue-50));
  border: 1px solid var(--sky-200);
  border-radius: 9999px;
  color: var(--sky-900);
}

/* === Gallery === */
.gallery {
  display: grid;
  grid-template-columns: repeat(1, minmax(0, 1fr));
  gap: 1rem;
}

.gallery__card:hover {
  box-shadow: var(--shadow-xl);
}

.gallery__frame {
  position: relative;
  aspect-ratio: 4 / 3;
  overflow: hidden;
}

.gallery__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-normal);
}

.gallery__frame:hover .gallery__img {
  transform: scale(1.05);
}

.image-fallback {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  height: 100%;
  background: #f3f4f6;
  text-align: center;
}

.image-fallback__frame {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  height: 100%;
}

/* === Palette === */
.palette {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1rem;
}

.swatch__block {
  height: 8rem;
  width: 100%;
}

.swatch__text {
  padding: 1rem;
}

.swatch__text > * + * {
  margin-top: 0.25rem;
}

.swatch__hex {
  color: var(--neutral-500);
  font-size: var(--text-xs);
}

.swatch__description {
  color: var(--neutral-600);
  font-size: var(--text-xs);
  font-style: italic;
}

/* === Typography === */
.typography {
  display: grid;
  grid-template-columns: repeat(1, minmax(0, 1fr));
  gap: 1.5rem;
}

.type-card {
  padding: 1.5rem;
}

.type-card > * + * {
  margin-top: 1rem;
}

.type-card__label {
  color: var(--neutral-500);
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.025em;
}

.type-card__note {
  color: var(--neutral-600);
  font-size: var(--text-xs);
}

.type-body { color: var(--neutral-900); }
.type-body-secondary { color: var(--neutral-700); }
.type-small { color: var(--neutral-600); font-size: var(--text-sm); }

/* === Principles === */
.principles {
  padding: 2rem;
}

.principles__title {
  color: var(--sky-900);
  margin-bottom: 1rem;
}

.principles__grid {
  display: grid;
  grid-template-columns: repeat(1, minmax(0, 1fr));
  gap: 1.5rem;
}

.principle__title {
  color: var(--sky-800);
  margin-bottom: 0.5rem;
}

.principle__text {
  color: var(--sky-700);
  font-size: var(--text-sm);
}

/* === Responsive === */
@media (min-width: 768px) {
  .gallery { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .palette { grid-template-columns: repeat(3, minmax(0, 1fr)); }
  .typography { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .principles__grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}

@media (min-width: 1024px) {
  .gallery { grid-template-columns: repeat(3, minmax(0, 1fr)); }
  .palette { grid-template-columns: repeat(6, minmax(0, 1fr)); }
}
"#;
