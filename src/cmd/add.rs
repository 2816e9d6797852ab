use crate::cli::AddArgs;
use crate::cmd::CommandResult;
use crate::core::{
    validate_email, validate_free_form, validate_name, validate_phone, Supplier, SupplierFilter,
    SupplierStatus, ValidationWarning,
};
use crate::error::Result;
use crate::model::Model;

/// Adds a supplier to the book. Duplicate identities (same name) are
/// rejected by the model.
#[derive(Debug)]
pub struct AddSupplierCommand {
    supplier: Supplier,
}

impl AddSupplierCommand {
    /// Validates the raw CLI fields and builds the record. Warnings for
    /// non-fatal oddities are returned alongside so the caller can print
    /// them before executing.
    pub fn from_args(args: &AddArgs) -> Result<(Self, Vec<ValidationWarning>)> {
        let mut warnings = Vec::new();

        let name = validate_name(&args.name)?;
        let phone = validate_phone(&args.phone)?;
        warnings.extend(phone.warnings.clone());
        let email = validate_email(&args.email)?;
        warnings.extend(email.warnings.clone());
        let company = validate_free_form("company", &args.company)?;
        let product = validate_free_form("product", &args.product)?;

        let supplier = Supplier::new(
            name.normalized,
            phone.normalized,
            email.normalized,
            company.normalized,
            product.normalized,
            args.status.unwrap_or(SupplierStatus::Active),
        );

        Ok((Self { supplier }, warnings))
    }

    pub fn execute(self, model: &mut dyn Model) -> Result<CommandResult> {
        let message = format!("New supplier added: {}", self.supplier);
        model.add_supplier(self.supplier)?;
        model.update_filtered_supplier_list(SupplierFilter::All);
        Ok(CommandResult::new(message))
    }
}
