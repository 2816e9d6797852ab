use crate::cmd::CommandResult;
use crate::core::SupplierFilter;
use crate::error::Result;
use crate::model::Model;

/// Resets the displayed list to show every supplier and returns the listing.
pub struct ListSupplierCommand;

impl ListSupplierCommand {
    pub fn execute(model: &mut dyn Model) -> Result<CommandResult> {
        model.update_filtered_supplier_list(SupplierFilter::All);
        let listed = model.filtered_supplier_list().to_vec();
        Ok(CommandResult::with_listing("Listed all suppliers", listed))
    }
}
