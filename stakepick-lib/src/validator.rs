//! The validator record and its row identity.

/// Identifier for a validator row, assigned at ingestion in insertion order.
///
/// Selection and row identity key off this id rather than the display name,
/// so two validators sharing a name never alias each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidatorId(usize);

impl ValidatorId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for ValidatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validator#{}", self.0)
    }
}

/// One staking node as shown in the picker.
///
/// `apr` and `delegated` are sortable; the rest is display-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Validator {
    pub name: String,
    /// Voting power, display-only.
    pub voting_power: f64,
    /// Annual percentage rate, rendered with two fraction digits.
    pub apr: f64,
    /// Delegated stake, rendered as a grouped amount.
    pub delegated: f64,
    /// Token price, display-only.
    pub price: f64,
    /// Opaque image reference. Unused for ordering.
    pub logo: String,
}

impl Validator {
    pub fn new(
        name: impl Into<String>,
        logo: impl Into<String>,
        voting_power: f64,
        apr: f64,
        delegated: f64,
        price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            voting_power,
            apr,
            delegated,
            price,
            logo: logo.into(),
        }
    }
}
