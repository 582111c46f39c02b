use std::{
    path::Path,
    process::{Command, ExitStatus},
};

use anyhow::Context;
use log::{debug, warn};

/// Opens a post for editing.
pub(crate) trait Launcher {
    fn launch(&self, path: &Path) -> anyhow::Result<ExitStatus>;
}

/// Runs `command <path>` and waits for it to exit.
pub(crate) struct CommandLauncher {
    pub command: String,
}

impl Launcher for CommandLauncher {
    fn launch(&self, path: &Path) -> anyhow::Result<ExitStatus> {
        debug!("Running {} {path:?}", self.command);
        Command::new(&self.command)
            .arg(path)
            .status()
            .with_context(|| format!("while launching editor {:?}", self.command))
    }
}

/// Launches the editor on `path`. A missing editor or a non-zero exit is only logged.
pub(crate) fn open(launcher: &dyn Launcher, path: &Path) {
    match launcher.launch(path) {
        Ok(status) if !status.success() => warn!("Editor exited with {status}"),
        Ok(_) => {}
        Err(e) => warn!("{e:#}"),
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, path::PathBuf};

    use anyhow::bail;

    use super::*;

    struct Recording(RefCell<Vec<PathBuf>>);

    impl Launcher for Recording {
        fn launch(&self, path: &Path) -> anyhow::Result<ExitStatus> {
            self.0.borrow_mut().push(path.to_owned());
            bail!("no editor here")
        }
    }

    #[test]
    fn open_passes_path_and_swallows_errors() {
        let launcher = Recording(RefCell::new(vec![]));

        open(&launcher, Path::new("2024-01-02-Hello.md"));

        assert_eq!(
            *launcher.0.borrow(),
            vec![PathBuf::from("2024-01-02-Hello.md")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn command_launcher_reports_exit_status() {
        let ok = CommandLauncher {
            command: "true".to_string(),
        };
        assert!(ok.launch(Path::new("x.md")).unwrap().success());

        let failing = CommandLauncher {
            command: "false".to_string(),
        };
        assert!(!failing.launch(Path::new("x.md")).unwrap().success());
    }

    #[test]
    fn command_launcher_fails_on_unknown_command() {
        let launcher = CommandLauncher {
            command: "postgen-no-such-editor".to_string(),
        };
        let err = launcher.launch(Path::new("x.md")).unwrap_err();
        assert!(format!("{err}").contains("postgen-no-such-editor"));
    }
}
