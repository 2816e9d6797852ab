use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal, Write};

use crate::cmd::CommandResult;
use crate::core::{Supplier, ValidationWarning};

pub fn use_color() -> bool {
    std::io::stdout().is_terminal() && supports_color::on(supports_color::Stream::Stdout).is_some()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Result {
        version: u32,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        suppliers: Option<Vec<Supplier>>,
    },
    Warning {
        version: u32,
        message: String,
    },
    Error {
        version: u32,
        code: i32,
        message: String,
        suggestion: Option<String>,
    },
}

impl Event {
    pub fn from_result(result: &CommandResult) -> Self {
        Event::Result {
            version: 1,
            message: result.message.clone(),
            suppliers: result.listed.clone(),
        }
    }

    pub fn emit_json(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        serde_json::to_writer(&mut stdout, self).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("JSON serialization failed: {}", e),
            )
        })?;
        writeln!(stdout)?;
        stdout.flush()
    }
}

pub struct HumanOutput {
    use_color: bool,
}

impl HumanOutput {
    pub fn new() -> Self {
        Self {
            use_color: use_color(),
        }
    }

    pub fn print_result(&self, result: &CommandResult) -> io::Result<()> {
        let mut stdout = io::stdout();

        writeln!(stdout, "{}", result.message)?;

        if let Some(suppliers) = &result.listed {
            for (position, supplier) in suppliers.iter().enumerate() {
                let index_label = if self.use_color {
                    format!("\x1b[1m{}.\x1b[0m", position + 1)
                } else {
                    format!("{}.", position + 1)
                };
                writeln!(stdout, "{} {}", index_label, supplier)?;
            }
        }

        stdout.flush()
    }

    pub fn print_warning(&self, warning: &ValidationWarning) -> io::Result<()> {
        let mut stderr = io::stderr();
        let label = if self.use_color {
            "\x1b[1;33mWarning:\x1b[0m"
        } else {
            "Warning:"
        };
        writeln!(stderr, "{} {}", label, warning_text(warning))?;
        stderr.flush()
    }
}

impl Default for HumanOutput {
    fn default() -> Self {
        Self::new()
    }
}

pub fn warning_text(warning: &ValidationWarning) -> String {
    match warning {
        ValidationWarning::PhoneTooShort { phone, length } => format!(
            "phone number '{}' is only {} digits; double-check it",
            phone, length
        ),
        ValidationWarning::EmailDomainWithoutDot { email } => {
            format!("email '{}' has a domain without a dot", email)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SupplierStatus;

    #[test]
    fn test_result_event_serialization() {
        let result = CommandResult::new("Marked Supplier: Alice as active");
        let event = Event::from_result(&result);

        let json = serde_json::to_string(&event).expect("Failed to serialize");
        assert!(json.contains("\"event\":\"result\""));
        assert!(json.contains("\"version\":1"));
        assert!(!json.contains("\"suppliers\""));
    }

    #[test]
    fn test_listing_event_serialization() {
        let supplier = Supplier::new(
            "Alice".to_string(),
            "111".to_string(),
            "a@x".to_string(),
            "ACo".to_string(),
            "Widgets".to_string(),
            SupplierStatus::Inactive,
        );
        let result = CommandResult::with_listing("1 suppliers listed!", vec![supplier]);
        let event = Event::from_result(&result);

        let json = serde_json::to_string(&event).expect("Failed to serialize");
        assert!(json.contains("\"suppliers\""));
        assert!(json.contains("\"name\":\"Alice\""));
    }

    #[test]
    fn test_error_event() {
        let event = Event::Error {
            version: 1,
            code: 3,
            message: "The supplier index provided is invalid".to_string(),
            suggestion: Some("Run 'supplierctl list' to see current indices".to_string()),
        };

        let json = serde_json::to_string(&event).expect("Failed to serialize");
        assert!(json.contains("\"event\":\"error\""));
        assert!(json.contains("\"code\":3"));
    }

    #[test]
    fn test_warning_text() {
        let warning = ValidationWarning::PhoneTooShort {
            phone: "111".to_string(),
            length: 3,
        };
        assert!(warning_text(&warning).contains("111"));
    }
}
