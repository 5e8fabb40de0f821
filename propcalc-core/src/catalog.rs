//! Instrument catalog: an immutable ordered list of presets plus the
//! category-then-index selection used by the position-size calculator.
//!
//! A custom catalog can be loaded from TOML:
//!
//! ```toml
//! [[instruments]]
//! name = "EUR/USD"
//! category = "forex"
//! tick_size = 0.0001
//! tick_value = 10.0
//! unit = "pip"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Category, InstrumentPreset};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentCatalog {
    instruments: Vec<InstrumentPreset>,
}

impl InstrumentCatalog {
    pub fn new(instruments: Vec<InstrumentPreset>) -> Result<Self, ConfigError> {
        if instruments.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self { instruments })
    }

    /// Load a catalog from a TOML file with `[[instruments]]` tables.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: InstrumentCatalog = toml::from_str(content)?;
        tracing::debug!(count = parsed.instruments.len(), "parsed instrument catalog");
        Self::new(parsed.instruments)
    }

    pub fn all(&self) -> &[InstrumentPreset] {
        &self.instruments
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Presets of one category, in catalog order.
    pub fn filtered(&self, category: Category) -> Vec<&InstrumentPreset> {
        self.instruments
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    /// Categories that have at least one preset, in picker order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.instruments.iter().any(|i| i.category == *c))
            .collect()
    }

    /// Built-in presets, one block per category.
    pub fn default_catalog() -> Self {
        use Category::*;

        let instruments = vec![
            InstrumentPreset::new("EUR/USD", Forex, 0.0001, 10.0, "pip"),
            InstrumentPreset::new("GBP/USD", Forex, 0.0001, 10.0, "pip"),
            InstrumentPreset::new("AUD/USD", Forex, 0.0001, 10.0, "pip"),
            InstrumentPreset::new("USD/JPY", Forex, 0.01, 6.5, "pip"),
            InstrumentPreset::new("USD/CAD", Forex, 0.0001, 7.3, "pip"),
            InstrumentPreset::new("ES (E-mini S&P 500)", Futures, 0.25, 12.5, "tick"),
            InstrumentPreset::new("MES (Micro E-mini S&P)", Futures, 0.25, 1.25, "tick"),
            InstrumentPreset::new("NQ (E-mini Nasdaq-100)", Futures, 0.25, 5.0, "tick"),
            InstrumentPreset::new("MNQ (Micro E-mini Nasdaq)", Futures, 0.25, 0.5, "tick"),
            InstrumentPreset::new("YM (E-mini Dow)", Futures, 1.0, 5.0, "tick"),
            InstrumentPreset::new("CL (Crude Oil)", Futures, 0.01, 10.0, "tick"),
            InstrumentPreset::new("GC (Gold)", Futures, 0.10, 10.0, "tick"),
            InstrumentPreset::new("US30", Cfd, 1.0, 1.0, "point"),
            InstrumentPreset::new("NAS100", Cfd, 1.0, 1.0, "point"),
            InstrumentPreset::new("SPX500", Cfd, 0.1, 0.1, "point"),
            InstrumentPreset::new("GER40", Cfd, 1.0, 1.0, "point"),
            InstrumentPreset::new("XAU/USD (Gold)", Commodities, 0.01, 1.0, "pip"),
            InstrumentPreset::new("XAG/USD (Silver)", Commodities, 0.001, 5.0, "pip"),
            InstrumentPreset::new("WTI Crude", Commodities, 0.01, 10.0, "pip"),
            InstrumentPreset::new("Natural Gas", Commodities, 0.001, 10.0, "pip"),
        ];
        Self { instruments }
    }
}

impl Default for InstrumentCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

/// Which preset is active: a category, then an index into that category's
/// filtered view.
///
/// The index is only meaningful relative to the filtered view, so switching
/// category always resets it to the first entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrumentSelection {
    category: Category,
    index: usize,
}

impl InstrumentSelection {
    pub fn new(category: Category) -> Self {
        Self { category, index: 0 }
    }

    /// First category that has presets, first preset within it.
    pub fn first_of(catalog: &InstrumentCatalog) -> Self {
        let category = catalog
            .categories()
            .first()
            .copied()
            .unwrap_or(Category::Forex);
        Self::new(category)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.index = 0;
    }

    /// Select by index, clamped into the category's filtered view.
    pub fn select_index(&mut self, index: usize, catalog: &InstrumentCatalog) {
        let len = catalog.filtered(self.category).len();
        self.index = index.min(len.saturating_sub(1));
    }

    pub fn next_instrument(&mut self, catalog: &InstrumentCatalog) {
        let len = catalog.filtered(self.category).len();
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn prev_instrument(&mut self, catalog: &InstrumentCatalog) {
        let len = catalog.filtered(self.category).len();
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Move to the next category that has presets.
    pub fn next_category(&mut self, catalog: &InstrumentCatalog) {
        self.step_category(catalog, Category::next);
    }

    pub fn prev_category(&mut self, catalog: &InstrumentCatalog) {
        self.step_category(catalog, Category::prev);
    }

    fn step_category(&mut self, catalog: &InstrumentCatalog, step: fn(Category) -> Category) {
        let mut candidate = step(self.category);
        for _ in 0..Category::ALL.len() {
            if !catalog.filtered(candidate).is_empty() {
                self.select_category(candidate);
                return;
            }
            candidate = step(candidate);
        }
    }

    /// The active preset; `None` only when the category has no presets.
    pub fn active<'a>(&self, catalog: &'a InstrumentCatalog) -> Option<&'a InstrumentPreset> {
        let filtered = catalog.filtered(self.category);
        let last = filtered.len().checked_sub(1)?;
        filtered.get(self.index.min(last)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_covers_every_category() {
        let catalog = InstrumentCatalog::default_catalog();
        assert_eq!(catalog.categories(), Category::ALL.to_vec());
        for c in Category::ALL {
            assert!(!catalog.filtered(c).is_empty(), "{} is empty", c.label());
        }
    }

    #[test]
    fn default_catalog_values_are_positive() {
        for preset in InstrumentCatalog::default_catalog().all() {
            assert!(preset.tick_size > 0.0, "{}", preset.name);
            assert!(preset.tick_value > 0.0, "{}", preset.name);
        }
    }

    #[test]
    fn filtered_view_keeps_catalog_order() {
        let catalog = InstrumentCatalog::default_catalog();
        let futures = catalog.filtered(Category::Futures);
        assert!(futures[0].name.starts_with("ES"));
        assert!(futures.iter().all(|p| p.category == Category::Futures));
    }

    #[test]
    fn switching_category_resets_index() {
        let catalog = InstrumentCatalog::default_catalog();
        let mut sel = InstrumentSelection::new(Category::Futures);
        sel.select_index(3, &catalog);
        assert_eq!(sel.index(), 3);

        sel.select_category(Category::Cfd);
        assert_eq!(sel.index(), 0);
        assert_eq!(sel.active(&catalog).unwrap().category, Category::Cfd);
    }

    #[test]
    fn select_index_clamps() {
        let catalog = InstrumentCatalog::default_catalog();
        let mut sel = InstrumentSelection::new(Category::Cfd);
        sel.select_index(99, &catalog);
        assert_eq!(sel.index(), catalog.filtered(Category::Cfd).len() - 1);
    }

    #[test]
    fn instrument_cycle_wraps() {
        let catalog = InstrumentCatalog::default_catalog();
        let len = catalog.filtered(Category::Forex).len();
        let mut sel = InstrumentSelection::new(Category::Forex);
        sel.prev_instrument(&catalog);
        assert_eq!(sel.index(), len - 1);
        sel.next_instrument(&catalog);
        assert_eq!(sel.index(), 0);
    }

    #[test]
    fn active_is_always_in_selected_category() {
        let catalog = InstrumentCatalog::default_catalog();
        let mut sel = InstrumentSelection::first_of(&catalog);
        for _ in 0..10 {
            sel.next_instrument(&catalog);
            sel.next_category(&catalog);
            let active = sel.active(&catalog).unwrap();
            assert_eq!(active.category, sel.category());
        }
    }

    #[test]
    fn category_stepping_skips_empty_categories() {
        let catalog = InstrumentCatalog::new(vec![
            InstrumentPreset::new("EUR/USD", Category::Forex, 0.0001, 10.0, "pip"),
            InstrumentPreset::new("XAU/USD", Category::Commodities, 0.01, 1.0, "pip"),
        ])
        .unwrap();
        let mut sel = InstrumentSelection::first_of(&catalog);
        assert_eq!(sel.category(), Category::Forex);
        sel.next_category(&catalog);
        assert_eq!(sel.category(), Category::Commodities);
        sel.next_category(&catalog);
        assert_eq!(sel.category(), Category::Forex);
        sel.prev_category(&catalog);
        assert_eq!(sel.category(), Category::Commodities);
    }

    #[test]
    fn empty_category_has_no_active_preset() {
        let catalog = InstrumentCatalog::new(vec![InstrumentPreset::new(
            "ES",
            Category::Futures,
            0.25,
            12.5,
            "tick",
        )])
        .unwrap();
        let sel = InstrumentSelection::new(Category::Forex);
        assert!(sel.active(&catalog).is_none());
    }

    #[test]
    fn parses_custom_catalog() {
        let toml = r#"
            [[instruments]]
            name = "ES"
            category = "futures"
            tick_size = 0.25
            tick_value = 12.5
            unit = "tick"

            [[instruments]]
            name = "EUR/USD"
            category = "forex"
            tick_size = 0.0001
            tick_value = 10.0
            unit = "pip"
        "#;
        let catalog = InstrumentCatalog::from_toml(toml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.categories(), vec![Category::Forex, Category::Futures]);
    }

    #[test]
    fn loads_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instruments.toml");
        std::fs::write(
            &path,
            "[[instruments]]\nname = \"NQ\"\ncategory = \"futures\"\n\
             tick_size = 0.25\ntick_value = 5.0\nunit = \"tick\"\n",
        )
        .unwrap();

        let catalog = InstrumentCatalog::from_file(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.all()[0].name, "NQ");
        assert_eq!(catalog.all()[0].tick_value, 5.0);
    }

    #[test]
    fn missing_catalog_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = InstrumentCatalog::from_file(&path).unwrap_err();
        match err {
            ConfigError::Read { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("Expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = InstrumentCatalog::from_toml("instruments = []").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyCatalog));
    }

    #[test]
    fn unknown_category_is_a_parse_error() {
        let toml = r#"
            [[instruments]]
            name = "BTC"
            category = "crypto"
            tick_size = 1.0
            tick_value = 1.0
            unit = "point"
        "#;
        assert!(matches!(
            InstrumentCatalog::from_toml(toml),
            Err(ConfigError::Parse(_))
        ));
    }
}
