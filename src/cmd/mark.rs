use crate::cmd::CommandResult;
use crate::core::{Index, SupplierFilter, SupplierStatus};
use crate::error::{Result, SupplierError};
use crate::model::Model;

/// Marks the supplier at a display index as active or inactive.
///
/// The record itself is immutable; marking builds a replacement sharing every
/// field except status and has the model swap it in at the same position.
#[derive(Debug)]
pub struct MarkSupplierCommand {
    target_index: Index,
    status: SupplierStatus,
}

impl MarkSupplierCommand {
    pub fn new(target_index: Index, status: SupplierStatus) -> Self {
        Self {
            target_index,
            status,
        }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        // The displayed list may have changed since the command was built,
        // so the index is validated here, not at construction.
        if self.target_index.zero_based() >= model.filtered_supplier_list().len() {
            return Err(SupplierError::InvalidIndex);
        }

        let supplier_to_mark =
            model.filtered_supplier_list()[self.target_index.zero_based()].clone();
        let marked_supplier = supplier_to_mark.with_status(self.status);

        model.set_supplier(&supplier_to_mark, marked_supplier)?;
        model.update_filtered_supplier_list(SupplierFilter::All);

        tracing::debug!(index = %self.target_index, status = %self.status, "marked supplier");

        // The message reports the record as it looked before the mark.
        Ok(CommandResult::new(format!(
            "Marked Supplier: {} as {}",
            supplier_to_mark, self.status
        )))
    }
}

// Equality is by target index only; the requested status is not compared.
// Long-standing behavior, pinned by tests. See DESIGN.md before changing.
impl PartialEq for MarkSupplierCommand {
    fn eq(&self, other: &Self) -> bool {
        self.target_index == other.target_index
    }
}
