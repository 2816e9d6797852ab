use crate::cmd::CommandResult;
use crate::core::Index;
use crate::error::{Result, SupplierError};
use crate::model::Model;

/// Deletes the supplier at a display index. Unlike mark and edit, this does
/// not reset the active filter; a narrowed view stays narrowed.
pub struct DeleteSupplierCommand {
    target_index: Index,
}

impl DeleteSupplierCommand {
    pub fn new(target_index: Index) -> Self {
        Self { target_index }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        if self.target_index.zero_based() >= model.filtered_supplier_list().len() {
            return Err(SupplierError::InvalidIndex);
        }

        let supplier_to_delete =
            model.filtered_supplier_list()[self.target_index.zero_based()].clone();
        model.delete_supplier(&supplier_to_delete)?;

        Ok(CommandResult::new(format!(
            "Deleted Supplier: {}",
            supplier_to_delete
        )))
    }
}
