use serde::{Deserialize, Serialize};

use super::status::SupplierStatus;
use super::supplier::Supplier;

/// Predicate selecting which suppliers the displayed list shows.
/// `SupplierFilter::All` is the "show all suppliers" reset applied after
/// mutating commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierFilter {
    All,
    /// Case-insensitive whole-word match of any keyword against the name.
    NameContains(Vec<String>),
    Status(SupplierStatus),
}

impl SupplierFilter {
    pub fn matches(&self, supplier: &Supplier) -> bool {
        match self {
            SupplierFilter::All => true,
            SupplierFilter::NameContains(keywords) => {
                let words: Vec<String> = supplier
                    .name
                    .split_whitespace()
                    .map(|w| w.to_ascii_lowercase())
                    .collect();
                keywords
                    .iter()
                    .any(|kw| words.iter().any(|w| w == &kw.to_ascii_lowercase()))
            }
            SupplierFilter::Status(status) => supplier.status == *status,
        }
    }
}
