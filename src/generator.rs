use std::{
    fs::OpenOptions,
    io::{ErrorKind, Write},
    path::Path,
};

use anyhow::Context;
use log::debug;

use crate::{clock::Clock, metadata::PostStub};

mod data;

pub(crate) use data::Generated;

/// Dates `title` with `clock` and writes its stub into `post_dir`.
pub(crate) fn generate(post_dir: &Path, title: &str, clock: &dyn Clock) -> anyhow::Result<Generated> {
    let stub = PostStub::new(title, clock.today());
    write_stub(post_dir, &stub)
}

/// Writes the front-matter of `stub` into `post_dir`, unless a file with that name is already
/// there. An existing file is left untouched.
pub(crate) fn write_stub(post_dir: &Path, stub: &PostStub) -> anyhow::Result<Generated> {
    let path = post_dir.join(stub.file_name());
    debug!("Stub path: {path:?}");

    // create_new makes the existence check and the creation a single step
    let mut fd = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(fd) => fd,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Ok(Generated {
                path,
                created: false,
            });
        }
        Err(e) => return Err(e).with_context(|| format!("while creating {path:?}")),
    };

    fd.write_all(stub.front_matter().as_bytes())
        .with_context(|| format!("while writing {path:?}"))?;

    Ok(Generated {
        path,
        created: true,
    })
}
