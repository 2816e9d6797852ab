use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupplierError {
    #[error("The supplier index provided is invalid")]
    InvalidIndex,

    #[error("This supplier already exists in the supplier book")]
    DuplicateSupplier { name: String },

    #[error("Supplier not found")]
    SupplierNotFound { context: String },

    #[error("Storage operation failed")]
    Storage {
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: String,
    },

    #[error("Data file locked")]
    Conflict {
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Other(String),
}

impl SupplierError {
    pub fn exit_code(&self) -> i32 {
        match self {
            SupplierError::InvalidIndex => 3,
            SupplierError::DuplicateSupplier { .. } => 4,
            SupplierError::SupplierNotFound { .. } => 5,
            SupplierError::Storage { .. } => 10,
            SupplierError::Conflict { .. } => 13,
            SupplierError::InvalidArgument(_) => 2,
            SupplierError::Other(_) => 1,
        }
    }

    pub fn format_detailed(&self, use_color: bool) -> String {
        let (error_label, cause_label, fix_label) = if use_color {
            (
                "\x1b[1;31mError:\x1b[0m",
                "\x1b[1;33mCause:\x1b[0m",
                "\x1b[1;32mFix:\x1b[0m",
            )
        } else {
            ("Error:", "Cause:", "Fix:")
        };

        let (cause, fix) = self.get_cause_and_fix();

        let mut output = format!("{} {}", error_label, self);

        if let Some(cause_text) = cause {
            output.push_str(&format!("\n{} {}", cause_label, cause_text));
        }

        if let Some(fix_text) = fix {
            output.push_str(&format!("\n{} {}", fix_label, fix_text));
        }

        output
    }

    pub fn get_fix(&self) -> Option<String> {
        let (_, fix) = self.get_cause_and_fix();
        fix
    }

    fn get_cause_and_fix(&self) -> (Option<String>, Option<String>) {
        match self {
            SupplierError::InvalidIndex => (
                Some("The index does not match any supplier in the displayed list".to_string()),
                Some("Run 'supplierctl list' to see current indices".to_string()),
            ),
            SupplierError::DuplicateSupplier { name } => (
                Some(format!("A supplier named '{}' is already in the book", name)),
                Some("Use 'supplierctl edit' to change the existing entry".to_string()),
            ),
            SupplierError::SupplierNotFound { context } => (
                Some(context.clone()),
                Some("The book may have changed; run 'supplierctl list' and retry".to_string()),
            ),
            SupplierError::Storage { context, .. } => (
                Some(context.clone()),
                Some("Check the data file path and permissions".to_string()),
            ),
            SupplierError::Conflict { context, .. } => (
                Some(context.clone()),
                Some("Wait for the other supplierctl instance to finish".to_string()),
            ),
            SupplierError::InvalidArgument(msg) => (Some(msg.clone()), None),
            SupplierError::Other(msg) => (Some(msg.clone()), None),
        }
    }
}

pub type Result<T> = std::result::Result<T, SupplierError>;
