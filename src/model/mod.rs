use crate::core::{Supplier, SupplierFilter};
use crate::error::{Result, SupplierError};

/// Capabilities the commands consume. Commands never touch the backing
/// collection directly; everything goes through this seam so tests can run
/// against the same implementation the binary uses.
pub trait Model {
    /// The ordered view currently shown to the user. Display indices are
    /// positions in this slice, not in the full collection.
    fn filtered_supplier_list(&self) -> &[Supplier];

    /// The full backing collection, in insertion order.
    fn supplier_list(&self) -> &[Supplier];

    /// Replaces `old` with `new` at the same position in the backing
    /// collection. `old` is located by value equality.
    fn set_supplier(&mut self, old: &Supplier, new: Supplier) -> Result<()>;

    fn update_filtered_supplier_list(&mut self, filter: SupplierFilter);

    fn add_supplier(&mut self, supplier: Supplier) -> Result<()>;

    fn delete_supplier(&mut self, supplier: &Supplier) -> Result<()>;

    /// Whether any record shares `supplier`'s identity (name).
    fn has_supplier(&self, supplier: &Supplier) -> bool;

    fn clear(&mut self);
}

/// In-memory supplier book with a filtered display view. The view is a
/// recomputed cache, refreshed after every mutation or filter change.
pub struct AddressBookModel {
    suppliers: Vec<Supplier>,
    filter: SupplierFilter,
    filtered: Vec<Supplier>,
}

impl AddressBookModel {
    pub fn new(suppliers: Vec<Supplier>) -> Self {
        let mut model = Self {
            suppliers,
            filter: SupplierFilter::All,
            filtered: Vec::new(),
        };
        model.refresh();
        model
    }

    pub fn into_suppliers(self) -> Vec<Supplier> {
        self.suppliers
    }

    fn refresh(&mut self) {
        self.filtered = self
            .suppliers
            .iter()
            .filter(|s| self.filter.matches(s))
            .cloned()
            .collect();
    }
}

impl Model for AddressBookModel {
    fn filtered_supplier_list(&self) -> &[Supplier] {
        &self.filtered
    }

    fn supplier_list(&self) -> &[Supplier] {
        &self.suppliers
    }

    fn set_supplier(&mut self, old: &Supplier, new: Supplier) -> Result<()> {
        let position = self.suppliers.iter().position(|s| s == old).ok_or_else(|| {
            SupplierError::SupplierNotFound {
                context: format!("No supplier matching '{}' in the book", old.name),
            }
        })?;
        self.suppliers[position] = new;
        self.refresh();
        Ok(())
    }

    fn update_filtered_supplier_list(&mut self, filter: SupplierFilter) {
        self.filter = filter;
        self.refresh();
    }

    fn add_supplier(&mut self, supplier: Supplier) -> Result<()> {
        if self.has_supplier(&supplier) {
            return Err(SupplierError::DuplicateSupplier {
                name: supplier.name,
            });
        }
        self.suppliers.push(supplier);
        self.refresh();
        Ok(())
    }

    fn delete_supplier(&mut self, supplier: &Supplier) -> Result<()> {
        let position = self
            .suppliers
            .iter()
            .position(|s| s == supplier)
            .ok_or_else(|| SupplierError::SupplierNotFound {
                context: format!("No supplier matching '{}' in the book", supplier.name),
            })?;
        self.suppliers.remove(position);
        self.refresh();
        Ok(())
    }

    fn has_supplier(&self, supplier: &Supplier) -> bool {
        self.suppliers.iter().any(|s| s.is_same_supplier(supplier))
    }

    fn clear(&mut self) {
        self.suppliers.clear();
        self.refresh();
    }
}
