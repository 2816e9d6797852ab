pub mod add;
pub mod clear;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod find;
pub mod list;
pub mod mark;

pub use add::AddSupplierCommand;
pub use clear::ClearCommand;
pub use completions::CompletionsCommand;
pub use delete::DeleteSupplierCommand;
pub use edit::EditSupplierCommand;
pub use find::FindSupplierCommand;
pub use list::ListSupplierCommand;
pub use mark::MarkSupplierCommand;

use crate::core::Supplier;

/// What a successful command hands back to the dispatcher: a user-facing
/// message, plus the suppliers to print when the command changes what is
/// displayed (find, list).
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    pub message: String,
    pub listed: Option<Vec<Supplier>>,
}

impl CommandResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            listed: None,
        }
    }

    pub fn with_listing(message: impl Into<String>, suppliers: Vec<Supplier>) -> Self {
        Self {
            message: message.into(),
            listed: Some(suppliers),
        }
    }
}
