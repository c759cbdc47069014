// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

//! Helpers shared by the unit tests.

use std::path::{Path, PathBuf};

use crate::{BIN_DIR, EnvCreator};

/// Executables laid down by [`FakeCreator`], mirroring a real venv.
pub const FAKE_EXECUTABLES: &[&str] = &["python", "python3", "pip", "pip3"];

/// Creator that writes a minimal venv-like layout without running python.
///
/// Every executable is a shell script that echoes its own name and args.
pub struct FakeCreator;

impl EnvCreator for FakeCreator {
    fn create(&self, path: &Path) -> std::io::Result<()> {
        let bin = path.join(BIN_DIR);
        std::fs::create_dir_all(&bin)?;
        for name in FAKE_EXECUTABLES {
            write_script(&bin.join(name), &format!("echo {name} \"$@\"\n"))?;
        }
        Ok(())
    }
}

/// Creator that always fails like a venv module refusing the target.
pub struct FailingCreator;

impl EnvCreator for FailingCreator {
    fn create(&self, _path: &Path) -> std::io::Result<()> {
        Err(std::io::Error::other("python -m venv exited with exit status: 1"))
    }
}

/// Write an executable shell script.
pub fn write_script(path: &Path, body: &str) -> std::io::Result<PathBuf> {
    std::fs::write(path, format!("#!/bin/sh\n{body}"))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))?;
    }
    Ok(path.to_path_buf())
}

/// A python on PATH able to create venvs with pip, for tests that need one.
pub fn venv_python() -> Option<PathBuf> {
    let python = ["python3", "python"]
        .iter()
        .find_map(|candidate| which::which(candidate).ok())?;

    let usable = std::process::Command::new(&python)
        .args(["-c", "import venv, ensurepip"])
        .status()
        .is_ok_and(|status| status.success());
    usable.then_some(python)
}
