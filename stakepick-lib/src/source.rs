//! Data-provider seam for the table engine.

use crate::validator::Validator;

/// Supplies the record sequence the table is built over.
///
/// The engine never refreshes: a table instance snapshots the source once at
/// construction. A real deployment would back this with a fetch layer; the
/// built-in implementation is a fixed list.
pub trait ValidatorSource {
    fn validators(&self) -> Vec<Validator>;
}

/// A source backed by a fixed, in-memory list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    validators: Vec<Validator>,
}

impl StaticSource {
    pub fn new(validators: Vec<Validator>) -> Self {
        Self { validators }
    }
}

impl ValidatorSource for StaticSource {
    fn validators(&self) -> Vec<Validator> {
        self.validators.clone()
    }
}

/// The built-in sample node list.
pub fn sample_validators() -> Vec<Validator> {
    vec![
        Validator::new("Coinbase Custody", "", 13.9, 3.54, 23095.22, 4551.98),
        Validator::new("Binance Staking", "", 13.9, 3.23, 21000.0, 4551.98),
        Validator::new("Kraken", "", 10.2, 3.41, 18455.07, 4551.98),
        Validator::new("Figment", "", 8.7, 3.62, 15211.5, 4551.98),
        Validator::new("Everstake", "", 7.4, 3.58, 13870.33, 4551.98),
        Validator::new("Chorus One", "", 6.1, 3.49, 11024.96, 4551.98),
        Validator::new("P2P Validator", "", 5.5, 3.66, 9733.12, 4551.98),
        Validator::new("Staked", "", 4.8, 3.37, 8402.75, 4551.98),
    ]
}
