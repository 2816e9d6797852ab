use crate::cmd::CommandResult;
use crate::core::SupplierFilter;
use crate::error::Result;
use crate::model::Model;

/// Wipes the whole supplier book.
pub struct ClearCommand;

impl ClearCommand {
    pub fn execute(model: &mut dyn Model) -> Result<CommandResult> {
        model.clear();
        model.update_filtered_supplier_list(SupplierFilter::All);
        Ok(CommandResult::new("Supplier book has been cleared!"))
    }
}
