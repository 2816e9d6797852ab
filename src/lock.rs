use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs4::FileExt;

use crate::error::{Result, SupplierError};

/// Advisory lock scoped to one supplier book. The lock file sits next to the
/// data file, so instances opened on different books (or different `--file`
/// overrides) never contend, while two instances on the same book do. Held
/// for the whole load-execute-save cycle.
#[derive(Debug)]
pub struct LockGuard {
    _file: File,
}

impl LockGuard {
    pub fn acquire(data_path: &Path) -> Result<Self> {
        let path = lock_path(data_path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|err| lock_io_error(err, &path))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|err| lock_io_error(err, &path))?;

        let mut locked = file.try_lock_exclusive().is_ok();
        if !locked {
            // flock dies with its process, so a stamped PID that is no
            // longer alive means the holder went away between our attempt
            // and this read; retry once.
            match stamped_pid(&mut file) {
                Some(pid) if pid_is_alive(pid) => {
                    return Err(SupplierError::Conflict {
                        source: None,
                        context: format!(
                            "Supplier book {} is in use by PID {}",
                            data_path.display(),
                            pid
                        ),
                    });
                }
                Some(_) => locked = file.try_lock_exclusive().is_ok(),
                None => {}
            }
        }
        if !locked {
            return Err(SupplierError::Conflict {
                source: None,
                context: format!(
                    "Supplier book {} is in use by another supplierctl instance",
                    data_path.display()
                ),
            });
        }

        stamp_pid(&mut file).map_err(|err| lock_io_error(err, &path))?;
        tracing::debug!(path = %path.display(), "acquired data file lock");
        Ok(Self { _file: file })
    }
}

/// `address_book.json` locks as `address_book.json.lock`.
fn lock_path(data_path: &Path) -> PathBuf {
    let mut name = data_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    data_path.with_file_name(name)
}

fn stamp_pid(file: &mut File) -> io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    write!(file, "{}", std::process::id())?;
    file.flush()
}

fn stamped_pid(file: &mut File) -> Option<u32> {
    let mut contents = String::new();
    file.seek(SeekFrom::Start(0)).ok()?;
    file.read_to_string(&mut contents).ok()?;
    contents.trim().parse().ok()
}

fn lock_io_error(err: io::Error, path: &Path) -> SupplierError {
    SupplierError::Storage {
        source: Some(Box::new(err)),
        context: format!("Failed to prepare lock file {}", path.display()),
    }
}

fn pid_is_alive(pid: u32) -> bool {
    #[cfg(unix)]
    unsafe {
        let result = libc::kill(pid as i32, 0);
        if result == 0 {
            return true;
        }
        let err = std::io::Error::last_os_error();
        matches!(err.raw_os_error(), Some(libc::EPERM))
    }

    #[cfg(not(unix))]
    {
        let _ = pid;
        true
    }
}
