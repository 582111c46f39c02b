use std::path::PathBuf;

/// Where a stub ended up, and whether this run wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Generated {
    pub path: PathBuf,
    pub created: bool,
}
