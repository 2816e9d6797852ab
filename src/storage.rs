use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{
    validate_email, validate_free_form, validate_name, validate_phone, Supplier,
};
use crate::error::{Result, SupplierError};
use crate::output::warning_text;

const FILE_VERSION: u32 = 1;

/// On-disk shape of the supplier book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressBookFile {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub suppliers: Vec<Supplier>,
}

/// Loads the book. A missing file is an empty book; unreadable or corrupt
/// data is a storage error.
pub fn load(path: &Path) -> Result<Vec<Supplier>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no data file, starting empty");
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(SupplierError::Storage {
                source: Some(Box::new(err)),
                context: format!("Failed to read {}", path.display()),
            });
        }
    };

    let file: AddressBookFile =
        serde_json::from_str(&contents).map_err(|err| SupplierError::Storage {
            source: Some(Box::new(err)),
            context: format!("Corrupt data file {}", path.display()),
        })?;

    if file.version > FILE_VERSION {
        return Err(SupplierError::Storage {
            source: None,
            context: format!(
                "Data file version {} is newer than supported version {}",
                file.version, FILE_VERSION
            ),
        });
    }

    for finding in audit(&file.suppliers) {
        tracing::debug!(path = %path.display(), "{}", finding);
    }

    tracing::debug!(path = %path.display(), count = file.suppliers.len(), "loaded supplier book");
    Ok(file.suppliers)
}

/// Checks records coming off disk against the field validators. Loaded data
/// bypasses the CLI boundary, so a hand-edited file can hold anything; the
/// findings are reported, not rejected, to keep an old book loadable.
pub fn audit(suppliers: &[Supplier]) -> Vec<String> {
    let mut findings = Vec::new();
    for (position, supplier) in suppliers.iter().enumerate() {
        let mut note =
            |text: String| findings.push(format!("record {}: {}", position + 1, text));

        if let Err(err) = validate_name(&supplier.name) {
            note(fault_text(err));
        }
        match validate_phone(&supplier.phone) {
            Err(err) => note(fault_text(err)),
            Ok(result) => {
                for warning in result.warnings {
                    note(warning_text(&warning));
                }
            }
        }
        match validate_email(&supplier.email) {
            Err(err) => note(fault_text(err)),
            Ok(result) => {
                for warning in result.warnings {
                    note(warning_text(&warning));
                }
            }
        }
        if let Err(err) = validate_free_form("company", &supplier.company) {
            note(fault_text(err));
        }
        if let Err(err) = validate_free_form("product", &supplier.product) {
            note(fault_text(err));
        }
    }
    findings
}

fn fault_text(err: SupplierError) -> String {
    match err {
        SupplierError::InvalidArgument(msg) => msg,
        other => other.to_string(),
    }
}

/// Saves the book atomically: write a sibling temp file, then rename it over
/// the target.
pub fn save(path: &Path, suppliers: &[Supplier]) -> Result<()> {
    let file = AddressBookFile {
        version: FILE_VERSION,
        saved_at: Utc::now(),
        suppliers: suppliers.to_vec(),
    };

    let json = serde_json::to_string_pretty(&file).map_err(|err| SupplierError::Storage {
        source: Some(Box::new(err)),
        context: "Failed to serialize supplier book".to_string(),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|err| SupplierError::Storage {
                source: Some(Box::new(err)),
                context: format!("Failed to create {}", parent.display()),
            })?;
        }
    }

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json).map_err(|err| SupplierError::Storage {
        source: Some(Box::new(err)),
        context: format!("Failed to write {}", tmp_path.display()),
    })?;
    fs::rename(&tmp_path, path).map_err(|err| SupplierError::Storage {
        source: Some(Box::new(err)),
        context: format!("Failed to replace {}", path.display()),
    })?;

    tracing::debug!(path = %path.display(), count = suppliers.len(), "saved supplier book");
    Ok(())
}
