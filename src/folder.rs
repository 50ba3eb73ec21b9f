use std::fmt::Display;
use std::fs::create_dir;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use datetime::LocalDate;

use crate::clock::Clock;
use crate::date_to_string;

/// A directory named after a single calendar day, e.g. `2024-03-07`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateFolder {
    pub name: String,
}

/// What happened when the folder was requested.
///
/// Every variant other than `Created` renders as the same failure line.
#[derive(Debug)]
pub enum Outcome {
    Created,
    AlreadyExists,
    PermissionDenied,
    Other(io::Error),
}

impl DateFolder {
    pub fn new(date: &LocalDate) -> DateFolder {
        DateFolder {
            name: date_to_string::to_folder_name(date),
        }
    }

    pub fn path_in(&self, base: &Path) -> PathBuf {
        base.join(&self.name)
    }

    /// Creates the folder directly under `base`. Parents are never created and
    /// existence is not checked first.
    pub fn create_in(&self, base: &Path) -> Outcome {
        match create_dir(self.path_in(base)) {
            Ok(_) => Outcome::Created,
            Err(e) => Outcome::from_io_error(e),
        }
    }

    pub fn message(&self, outcome: &Outcome) -> String {
        if outcome.is_created() {
            format!("Folder '{}' created successfully!", self.name)
        } else {
            format!(
                "Failed to create folder '{}'. It may already exist.",
                self.name
            )
        }
    }
}

impl Outcome {
    pub fn from_io_error(err: io::Error) -> Outcome {
        match err.kind() {
            io::ErrorKind::AlreadyExists => Outcome::AlreadyExists,
            io::ErrorKind::PermissionDenied => Outcome::PermissionDenied,
            _ => Outcome::Other(err),
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Outcome::Created)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Created => write!(f, "created"),
            Outcome::AlreadyExists => write!(f, "already exists"),
            Outcome::PermissionDenied => write!(f, "permission denied"),
            Outcome::Other(e) => write!(f, "{}", e),
        }
    }
}

/// Names today's folder, tries to create it under `base` and writes the one
/// line outcome to `out`.
///
/// Only a clock failure is an error. A failed write of the outcome line goes to
/// stderr so the caller still exits normally.
pub fn run(
    clock: &impl Clock,
    base: &Path,
    out: &mut impl Write,
) -> anyhow::Result<(DateFolder, Outcome)> {
    let today = clock.today()?;
    let folder = DateFolder::new(&today);
    let outcome = folder.create_in(base);

    if let Err(e) = writeln!(out, "{}", folder.message(&outcome)) {
        eprintln!("couldn't print outcome for '{}': {}", folder.name, e);
    }

    return Ok((folder, outcome));
}
