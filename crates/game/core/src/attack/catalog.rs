//! Attack lookup.

use std::sync::Arc;

use strum::IntoEnumIterator;

use crate::env::RollSource;
use crate::error::{ErrorSeverity, FightError};

use super::{Attack, AttackType};

/// Errors from attack lookup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown attack: {0}")]
    NotFound(String),

    #[error("duplicate attack name: {0}")]
    Duplicate(String),

    #[error("catalog has no attacks to choose from")]
    Empty,
}

impl FightError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) => ErrorSeverity::Recoverable,
            Self::Duplicate(_) => ErrorSeverity::Validation,
            Self::Empty => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "CATALOG_NOT_FOUND",
            Self::Duplicate(_) => "CATALOG_DUPLICATE",
            Self::Empty => "CATALOG_EMPTY",
        }
    }
}

/// Read-only source of attacks.
///
/// How attacks are loaded is up to the implementor; the rules only need
/// lookup by name, lookup by type and a uniform random pick.
pub trait AttackCatalog: Send + Sync {
    /// Attack with `name` (ASCII case-insensitive).
    fn by_name(&self, name: &str) -> Result<Arc<Attack>, CatalogError>;

    /// Every attack of `kind`, in catalog order.
    fn by_type(&self, kind: AttackType) -> Vec<Arc<Attack>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Uniform over non-Custom types that have attacks, then uniform within
    /// the chosen type.
    fn random(&self, rng: &mut dyn RollSource) -> Result<Arc<Attack>, CatalogError> {
        let mut groups: Vec<Vec<Arc<Attack>>> = AttackType::iter()
            .filter(|kind| kind.special().is_some())
            .map(|kind| self.by_type(kind))
            .filter(|group| !group.is_empty())
            .collect();

        if groups.is_empty() {
            return Err(CatalogError::Empty);
        }

        let group_index = rng.pick(groups.len());
        let mut group = groups.swap_remove(group_index);
        let attack_index = rng.pick(group.len());
        Ok(group.swap_remove(attack_index))
    }
}

/// In-memory catalog preserving insertion order.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    attacks: Vec<Arc<Attack>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate names.
    pub fn from_attacks(
        attacks: impl IntoIterator<Item = Attack>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for attack in attacks {
            catalog.insert(attack)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, attack: Attack) -> Result<Arc<Attack>, CatalogError> {
        if self.find(&attack.name).is_some() {
            return Err(CatalogError::Duplicate(attack.name));
        }
        let attack = Arc::new(attack);
        self.attacks.push(Arc::clone(&attack));
        Ok(attack)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Attack>> {
        self.attacks.iter()
    }

    fn find(&self, name: &str) -> Option<&Arc<Attack>> {
        self.attacks
            .iter()
            .find(|attack| attack.name.eq_ignore_ascii_case(name))
    }
}

impl AttackCatalog for StaticCatalog {
    fn by_name(&self, name: &str) -> Result<Arc<Attack>, CatalogError> {
        self.find(name)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(name.to_owned()))
    }

    fn by_type(&self, kind: AttackType) -> Vec<Arc<Attack>> {
        self.attacks
            .iter()
            .filter(|attack| attack.kind == kind)
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.attacks.len()
    }
}
