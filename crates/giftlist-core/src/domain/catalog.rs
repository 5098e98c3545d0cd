//! The seed catalog.
//!
//! An empty store is populated exactly once from this list. Seeding is a
//! no-op for a store that already holds any record.

use std::collections::HashSet;

/// Gift names of the event page, in display order.
pub const DEFAULT_GIFT_NAMES: &[&str] = &[
    "Escorredor de Pratos",
    "Cafeteira",
    "Filtro de Barro",
    "Garrafa de Café",
    "Jarro de Vidro",
    "Kit de Xícaras",
    "Sanduicheira",
    "Chaleira Elétrica",
    "Jogo de Copos",
    "Jogo de Colheres de Silicone",
    "Jogo de Facas",
    "Jogo de Formas",
    "Jogo de Marinex",
    "Jogo de Vasilhas",
    "Jogo de Porta Temperos Multifuncional",
    "Cesto Organizador de Cozinha",
    "Cortador Multifuncional",
    "Liquidificador",
    "Jogo de Panelas",
    "Panela de Pressão",
    "Jogo de Pratos",
    "Jogo de Talheres",
];

/// Ordered, de-duplicated list of gift names used to seed an empty store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedCatalog {
    names: Vec<String>,
}

impl SeedCatalog {
    /// Build a catalog, dropping blank names and repeated names.
    ///
    /// Names are trimmed. The first occurrence of a name wins.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for name in names {
            let name: String = name.into();
            let trimmed = name.trim();
            if trimmed.is_empty() {
                tracing::warn!("Dropping blank gift name from seed catalog");
                continue;
            }
            if !seen.insert(trimmed.to_string()) {
                tracing::warn!(name = %trimmed, "Dropping duplicate gift name from seed catalog");
                continue;
            }
            kept.push(trimmed.to_string());
        }

        Self { names: kept }
    }

    /// Names in seeding order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_GIFT_NAMES.iter().copied())
    }
}
