use std::fmt;

use super::Product;

/// Kind of inventory mutation recorded in the change log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Produced by a successful product registration.
    Add,
    /// Produced by a successful product removal.
    Remove,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Add => f.write_str("add"),
            ChangeKind::Remove => f.write_str("remove"),
        }
    }
}

/// One logged inventory mutation. The product is a snapshot taken by value,
/// so undo restores an independent copy.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEntry {
    pub kind: ChangeKind,
    pub product: Product,
}

impl ChangeEntry {
    pub fn added(product: Product) -> Self {
        Self {
            kind: ChangeKind::Add,
            product,
        }
    }

    pub fn removed(product: Product) -> Self {
        Self {
            kind: ChangeKind::Remove,
            product,
        }
    }
}
