use std::fmt;

use serde::{Deserialize, Serialize};

use super::status::SupplierStatus;

/// An immutable supplier record. "Changing" a field means constructing a new
/// record and having the owning collection swap the old reference out; see
/// [`Supplier::with_status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    pub product: String,
    pub status: SupplierStatus,
}

impl Supplier {
    pub fn new(
        name: String,
        phone: String,
        email: String,
        company: String,
        product: String,
        status: SupplierStatus,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            company,
            product,
            status,
        }
    }

    /// Returns a new record sharing every field except `status`.
    pub fn with_status(&self, status: SupplierStatus) -> Self {
        Self {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            product: self.product.clone(),
            status,
        }
    }

    /// Identity for duplicate detection: two records describe the same
    /// supplier when their names match, case-insensitively. Weaker than
    /// value equality, which compares every field.
    pub fn is_same_supplier(&self, other: &Supplier) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl fmt::Display for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Company: {}; Product: {}; Status: {}",
            self.name, self.phone, self.email, self.company, self.product, self.status
        )
    }
}
