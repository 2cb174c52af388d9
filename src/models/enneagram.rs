//! Enneagram personality types and their starting-attention offsets.
//!
//! A type applies a one-time additive offset to the initial attention of a
//! sequential run. Offsets live in an explicit table passed to the engine;
//! ids without an entry leave attention unchanged.

use serde::{Deserialize, Serialize};

/// An Enneagram type with its transmutation practices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnneagramType {
    /// Type number (1..=9 in the standard catalog).
    pub id: u8,
    pub name: String,
    /// Named practices associated with the type.
    pub practices: Vec<String>,
}

impl EnneagramType {
    pub fn new(id: u8, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            practices: Vec::new(),
        }
    }

    /// Adds a practice.
    pub fn with_practice(mut self, practice: impl Into<String>) -> Self {
        self.practices.push(practice.into());
        self
    }
}

/// One row of the offset table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnneagramOffset {
    pub type_id: u8,
    pub offset: f64,
}

/// Offset table keyed by type id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnneagramOffsets(Vec<EnneagramOffset>);

impl EnneagramOffsets {
    /// A table with no offsets.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Sets the offset for a type id, replacing any existing row.
    pub fn with_offset(mut self, type_id: u8, offset: f64) -> Self {
        self.0.retain(|row| row.type_id != type_id);
        self.0.push(EnneagramOffset { type_id, offset });
        self
    }

    /// Offset for a type id (0 if undefined).
    pub fn offset_for(&self, type_id: u8) -> f64 {
        self.0
            .iter()
            .find(|row| row.type_id == type_id)
            .map_or(0.0, |row| row.offset)
    }

    /// Applies the offset for `enneagram` to `attention`.
    pub fn apply(&self, enneagram: &EnneagramType, attention: f64) -> f64 {
        attention + self.offset_for(enneagram.id)
    }
}

impl Default for EnneagramOffsets {
    /// Reformer +5, Helper +3.
    fn default() -> Self {
        Self::empty().with_offset(1, 5.0).with_offset(2, 3.0)
    }
}

/// The list of selectable types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnneagramCatalog {
    pub types: Vec<EnneagramType>,
}

impl EnneagramCatalog {
    /// The nine standard types.
    pub fn standard() -> Self {
        const TYPES: [(u8, &str, [&str; 2]); 9] = [
            (1, "Reformer", ["Precision", "Discipline"]),
            (2, "Helper", ["Empathy", "Generosity"]),
            (3, "Achiever", ["Focus", "Drive"]),
            (4, "Individualist", ["Creativity", "Authenticity"]),
            (5, "Investigator", ["Observation", "Analysis"]),
            (6, "Loyalist", ["Loyalty", "Responsibility"]),
            (7, "Enthusiast", ["Enthusiasm", "Curiosity"]),
            (8, "Challenger", ["Strength", "Protection"]),
            (9, "Peacemaker", ["Harmony", "Peace"]),
        ];

        let types = TYPES
            .iter()
            .map(|(id, name, practices)| {
                practices
                    .iter()
                    .fold(EnneagramType::new(*id, *name), |t, p| t.with_practice(*p))
            })
            .collect();
        Self { types }
    }

    /// Looks up a type by id.
    pub fn get(&self, type_id: u8) -> Option<&EnneagramType> {
        self.types.iter().find(|t| t.id == type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = EnneagramCatalog::standard();
        assert_eq!(catalog.types.len(), 9);
        let helper = catalog.get(2).unwrap();
        assert_eq!(helper.name, "Helper");
        assert_eq!(helper.practices, vec!["Empathy", "Generosity"]);
        assert!(catalog.get(10).is_none());
    }

    #[test]
    fn test_default_offsets() {
        let catalog = EnneagramCatalog::standard();
        let offsets = EnneagramOffsets::default();
        assert_eq!(offsets.apply(catalog.get(1).unwrap(), 50.0), 55.0);
        assert_eq!(offsets.apply(catalog.get(2).unwrap(), 50.0), 53.0);
    }

    #[test]
    fn test_undefined_types_are_noops() {
        let catalog = EnneagramCatalog::standard();
        let offsets = EnneagramOffsets::default();
        for id in 3..=9 {
            assert_eq!(offsets.apply(catalog.get(id).unwrap(), 50.0), 50.0);
        }
    }

    #[test]
    fn test_with_offset_replaces() {
        let offsets = EnneagramOffsets::default().with_offset(1, -2.0);
        assert_eq!(offsets.offset_for(1), -2.0);
        assert_eq!(offsets.offset_for(2), 3.0);
        assert_eq!(EnneagramOffsets::empty().offset_for(1), 0.0);
    }
}
