//! Nodes of the similarity graph
//!
//! A similarity node is an id plus a sorted element array. Equivalence
//! classes are compared either by their terms or by their columns.

use crate::features::id_set::ImmutableIdSet;
use crate::shared::models::EquivalenceClass;
use serde::{Deserialize, Serialize};

/// Anything that can be compared by element overlap
pub trait SimilarityNode: Sync {
    fn id(&self) -> u32;

    /// Sorted unique element ids
    fn elements(&self) -> &ImmutableIdSet;
}

impl<T: SimilarityNode + ?Sized> SimilarityNode for &T {
    fn id(&self) -> u32 {
        (**self).id()
    }

    fn elements(&self) -> &ImmutableIdSet {
        (**self).elements()
    }
}

/// Which element array of an equivalence class is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementSource {
    #[default]
    Terms,
    Columns,
}

impl ElementSource {
    /// View a class through this element source
    pub fn view(self, class: &EquivalenceClass) -> ClassElements<'_> {
        ClassElements {
            class,
            source: self,
        }
    }
}

/// An equivalence class seen as a similarity node
#[derive(Debug, Clone, Copy)]
pub struct ClassElements<'a> {
    class: &'a EquivalenceClass,
    source: ElementSource,
}

impl<'a> ClassElements<'a> {
    pub fn class(&self) -> &'a EquivalenceClass {
        self.class
    }
}

impl SimilarityNode for ClassElements<'_> {
    fn id(&self) -> u32 {
        self.class.id()
    }

    fn elements(&self) -> &ImmutableIdSet {
        match self.source {
            ElementSource::Terms => self.class.terms(),
            ElementSource::Columns => self.class.columns(),
        }
    }
}
