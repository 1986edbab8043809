//! Stylesheet for the learning cards section.
//!
//! Layout only. Colors are inline styles from [`StyleTable`](super::StyleTable).

pub const LEARNING_CARDS_STYLES: &str = r#"
/* === Learning Cards Section === */
.learning-cards {
  position: relative;
  z-index: 10;
  padding: 4rem 0;
}

.learning-cards__grid {
  display: grid;
  grid-template-columns: repeat(1, minmax(0, 1fr));
  gap: 1.5rem;
  width: 100%;
  max-width: 1280px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

@media (min-width: 640px) {
  .learning-cards__grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }
}

@media (min-width: 1024px) {
  .learning-cards__grid {
    grid-template-columns: repeat(4, minmax(0, 1fr));
  }
}

/* === Card === */
.learning-card {
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  max-width: 320px;
  min-height: 300px;
  padding: 1.5rem;
  border-radius: 0.75rem;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
  transition: transform 300ms ease, box-shadow 300ms ease;
}

.learning-card:hover {
  transform: scale(1.05);
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.learning-card__header {
  text-align: center;
}

.learning-card__badge-row {
  display: flex;
  justify-content: center;
  margin-bottom: 1rem;
}

.learning-card__title {
  font-size: 1.25rem;
  line-height: 1.75rem;
  font-weight: 700;
}

.learning-card__body {
  flex-grow: 1;
  display: flex;
  align-items: center;
  justify-content: center;
}

.learning-card__text {
  font-size: 1.125rem;
  line-height: 1.75rem;
  font-weight: 500;
}

/* === Icon Badge === */
.icon-badge {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 9999px;
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1);
}
"#;
