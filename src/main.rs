use std::ffi::OsString;

use anyhow::Context as _;
use clap::{command, value_parser, Arg};
use clock::LocalClock;
use context::Context;
use editor::CommandLauncher;
use log::{info, warn};

mod clock;
mod context;
mod editor;
mod generator;
mod metadata;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // every argument is a title, even `--help` or `-V`
    let matches = command!()
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("title")
                .help("Title of the post. Spaces become hyphens in the file name.")
                .value_parser(value_parser!(OsString))
                .allow_hyphen_values(true)
                .required(true),
        )
        .get_matches();

    let title: &OsString = matches.get_one("title").context("title is required")?;
    if title.to_str().is_none() {
        warn!("Title is not valid UTF-8. Invalid bytes are replaced with U+FFFD.");
    }
    let title = title.to_string_lossy();
    let ctx = Context::from_env()?;

    let generated = generator::generate(&ctx.post_dir, &title, &LocalClock)?;
    if generated.created {
        info!("Created {:?}", generated.path);
    } else {
        info!("{:?} already exists. keeping its content.", generated.path);
    }

    editor::open(
        &CommandLauncher {
            command: ctx.editor,
        },
        &generated.path,
    );

    Ok(())
}
