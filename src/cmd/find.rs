use crate::cmd::CommandResult;
use crate::core::SupplierFilter;
use crate::error::{Result, SupplierError};
use crate::model::Model;

/// Narrows the displayed list to suppliers whose name contains any of the
/// given keywords (case-insensitive whole-word match).
#[derive(Debug)]
pub struct FindSupplierCommand {
    keywords: Vec<String>,
}

impl FindSupplierCommand {
    pub fn new(keywords: Vec<String>) -> Result<Self> {
        if keywords.iter().all(|kw| kw.trim().is_empty()) {
            return Err(SupplierError::InvalidArgument(
                "find needs at least one keyword".to_string(),
            ));
        }
        Ok(Self {
            keywords: keywords
                .into_iter()
                .filter(|kw| !kw.trim().is_empty())
                .map(|kw| kw.trim().to_string())
                .collect(),
        })
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        model.update_filtered_supplier_list(SupplierFilter::NameContains(self.keywords.clone()));
        let listed = model.filtered_supplier_list().to_vec();
        Ok(CommandResult::with_listing(
            format!("{} suppliers listed!", listed.len()),
            listed,
        ))
    }
}
