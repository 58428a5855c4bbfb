use std::fmt::{Display, Formatter};


#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum StoreKind {
    #[default]
    Regular,
    /// Self-service DVD kiosk. Smaller catalog, no rewind checks, no late fees.
    VendingMachine,
}

impl StoreKind {
    pub fn capacity(&self) -> usize {
        match self {
            StoreKind::Regular => 10,
            StoreKind::VendingMachine => 5,
        }
    }

    /// Whether returns are checked for rewinding and charged when late.
    pub(super) fn enforces_return_rules(&self) -> bool {
        matches!(self, StoreKind::Regular)
    }
}

impl Display for StoreKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKind::Regular => write!(f, "regular"),
            StoreKind::VendingMachine => write!(f, "vending_machine"),
        }
    }
}
