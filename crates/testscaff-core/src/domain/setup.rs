//! Setup fragments derived from a class's constructor dependencies.
//!
//! Ephemeral values: a [`SetupFragment`] exists only between derivation and
//! its injection into a rendered unit test; it is never persisted.

use crate::domain::class_reference::ClassReference;

/// One constructor parameter of a class, as reported by the injected
/// inspector: the dependency's type and the property it is assigned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorParam {
    pub type_ref: ClassReference,
    pub property: String,
}

/// Import statements plus initialization statements for one dependency list,
/// both in the dependency's declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupFragment {
    pub usages: Vec<String>,
    pub setup: Vec<String>,
}

impl SetupFragment {
    /// True when the class has no constructor dependencies — injection is
    /// skipped entirely rather than splicing empty blocks.
    pub fn is_empty(&self) -> bool {
        self.usages.is_empty() && self.setup.is_empty()
    }
}
