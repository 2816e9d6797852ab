pub mod filter;
pub mod index;
pub mod status;
pub mod supplier;
pub mod validation;

pub use filter::SupplierFilter;
pub use index::Index;
pub use status::SupplierStatus;
pub use supplier::Supplier;
pub use validation::{
    validate_email, validate_free_form, validate_name, validate_phone, FieldValidationResult,
    ValidationWarning,
};
