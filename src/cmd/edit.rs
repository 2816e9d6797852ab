use crate::cli::EditArgs;
use crate::cmd::CommandResult;
use crate::core::{
    validate_email, validate_free_form, validate_name, validate_phone, Index, Supplier,
    SupplierFilter, SupplierStatus, ValidationWarning,
};
use crate::error::{Result, SupplierError};
use crate::model::Model;

/// Fields to overwrite on the target supplier. Unset fields keep their
/// current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSupplierDescriptor {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub product: Option<String>,
    pub status: Option<SupplierStatus>,
}

impl EditSupplierDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.company.is_some()
            || self.product.is_some()
            || self.status.is_some()
    }
}

#[derive(Debug)]
pub struct EditSupplierCommand {
    target_index: Index,
    descriptor: EditSupplierDescriptor,
}

impl EditSupplierCommand {
    pub fn from_args(args: &EditArgs) -> Result<(Self, Vec<ValidationWarning>)> {
        let target_index = Index::from_one_based(args.index).ok_or_else(|| {
            SupplierError::InvalidArgument("INDEX must be a positive integer".to_string())
        })?;

        let mut warnings = Vec::new();
        let mut descriptor = EditSupplierDescriptor::default();

        if let Some(name) = &args.name {
            descriptor.name = Some(validate_name(name)?.normalized);
        }
        if let Some(phone) = &args.phone {
            let result = validate_phone(phone)?;
            warnings.extend(result.warnings.clone());
            descriptor.phone = Some(result.normalized);
        }
        if let Some(email) = &args.email {
            let result = validate_email(email)?;
            warnings.extend(result.warnings.clone());
            descriptor.email = Some(result.normalized);
        }
        if let Some(company) = &args.company {
            descriptor.company = Some(validate_free_form("company", company)?.normalized);
        }
        if let Some(product) = &args.product {
            descriptor.product = Some(validate_free_form("product", product)?.normalized);
        }
        descriptor.status = args.status;

        if !descriptor.is_any_field_edited() {
            return Err(SupplierError::InvalidArgument(
                "At least one field to edit must be provided".to_string(),
            ));
        }

        Ok((
            Self {
                target_index,
                descriptor,
            },
            warnings,
        ))
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        if self.target_index.zero_based() >= model.filtered_supplier_list().len() {
            return Err(SupplierError::InvalidIndex);
        }

        let supplier_to_edit =
            model.filtered_supplier_list()[self.target_index.zero_based()].clone();
        let edited_supplier = apply_descriptor(&supplier_to_edit, &self.descriptor);

        // A rename must not collide with a different existing supplier.
        if !supplier_to_edit.is_same_supplier(&edited_supplier)
            && model.has_supplier(&edited_supplier)
        {
            return Err(SupplierError::DuplicateSupplier {
                name: edited_supplier.name,
            });
        }

        model.set_supplier(&supplier_to_edit, edited_supplier.clone())?;
        model.update_filtered_supplier_list(SupplierFilter::All);

        Ok(CommandResult::new(format!(
            "Edited Supplier: {}",
            edited_supplier
        )))
    }
}

fn apply_descriptor(supplier: &Supplier, descriptor: &EditSupplierDescriptor) -> Supplier {
    Supplier::new(
        descriptor.name.clone().unwrap_or_else(|| supplier.name.clone()),
        descriptor
            .phone
            .clone()
            .unwrap_or_else(|| supplier.phone.clone()),
        descriptor
            .email
            .clone()
            .unwrap_or_else(|| supplier.email.clone()),
        descriptor
            .company
            .clone()
            .unwrap_or_else(|| supplier.company.clone()),
        descriptor
            .product
            .clone()
            .unwrap_or_else(|| supplier.product.clone()),
        descriptor.status.unwrap_or(supplier.status),
    )
}
