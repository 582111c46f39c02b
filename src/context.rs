use std::path::PathBuf;

use anyhow::bail;

const DEFAULT_EDITOR: &str = "atom";

/// Settings taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Context {
    pub editor: String,
    pub post_dir: PathBuf,
}

impl Context {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("POSTGEN_EDITOR").ok(),
            std::env::var("POSTGEN_DIR").ok(),
        )
    }

    fn from_vars(editor: Option<String>, post_dir: Option<String>) -> anyhow::Result<Self> {
        let editor = editor.unwrap_or(DEFAULT_EDITOR.to_string());
        if editor.trim().is_empty() {
            bail!("POSTGEN_EDITOR must not be empty.");
        }

        let post_dir = match post_dir {
            Some(dir) => {
                let dir = PathBuf::from(dir);
                if !dir.is_dir() {
                    bail!("POSTGEN_DIR must be a directory.");
                }
                dir
            }
            None => PathBuf::new(),
        };

        Ok(Self { editor, post_dir })
    }
}
