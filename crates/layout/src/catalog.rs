//! Prototype catalog.
//!
//! The 3D asset library itself is external; all the layout passes need
//! from it is, per named prototype, its footprint along the placement
//! axis. The catalog is read-only input.

use serde::{Deserialize, Serialize};

/// A named prototype object and its footprint (extent along the
/// object's forward placement axis, world units).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prototype {
    pub name: String,
    pub footprint: f32,
}

impl Prototype {
    pub fn new(name: impl Into<String>, footprint: f32) -> Self {
        Self {
            name: name.into(),
            footprint,
        }
    }
}

/// An ordered list of prototypes.
///
/// Iteration order matters: the segment packer visits items in catalog
/// order, and its per-item repetition cap exempts the last item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    items: Vec<Prototype>,
}

impl Catalog {
    pub fn new(items: Vec<Prototype>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Prototype] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Footprint of a prototype by name, if present.
    pub fn footprint(&self, name: &str) -> Option<f32> {
        self.items.iter().find(|p| p.name == name).map(|p| p.footprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_lookup_by_name() {
        let cat = Catalog::new(vec![
            Prototype::new("House3", 4.0),
            Prototype::new("House4", 6.5),
        ]);
        assert_eq!(cat.footprint("House4"), Some(6.5));
        assert_eq!(cat.footprint("House9"), None);
    }
}
