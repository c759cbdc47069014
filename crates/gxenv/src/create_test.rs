// Copyright (c) Contributors to the gxenv project.
// SPDX-License-Identifier: Apache-2.0

use rstest::{fixture, rstest};
use tempfile::TempDir;

use super::*;
use crate::test_utils::{FAKE_EXECUTABLES, FailingCreator, FakeCreator, venv_python};
use crate::{BIN_DIR, check_env_exists, which};

#[fixture]
fn base() -> TempDir {
    TempDir::new().unwrap()
}

#[rstest]
fn test_create_then_exists(base: TempDir) {
    let config = Config::new(base.path());

    assert!(check_env_exists(&config, "testenv").is_err());
    create_env(&config, "testenv", &FakeCreator).expect("Should create env");
    check_env_exists(&config, "testenv").expect("Created env should exist");

    for name in FAKE_EXECUTABLES {
        assert!(base.path().join("testenv").join(BIN_DIR).join(name).is_file());
    }
}

#[rstest]
fn test_create_failure_is_wrapped(base: TempDir) {
    let config = Config::new(base.path());

    let err = create_env(&config, "testenv", &FailingCreator).unwrap_err();
    assert_eq!(err.exit_code(), 5);
    match err {
        crate::Error::CreateFailed { env, path, .. } => {
            assert_eq!(env, "testenv");
            assert_eq!(path, base.path().join("testenv"));
        }
        other => panic!("Expected CreateFailed, got: {:?}", other),
    }
}

#[rstest]
fn test_venv_command_arguments(base: TempDir) {
    let creator = VenvCreator {
        python: Some(PathBuf::from("/opt/python/bin/python3")),
    };
    let target = base.path().join("testenv");

    let cmd = creator.command(&target).unwrap();
    assert_eq!(cmd.get_program(), "/opt/python/bin/python3");

    let args: Vec<_> = cmd.get_args().collect();
    assert_eq!(args[0], "-m");
    assert_eq!(args[1], "venv");
    assert_eq!(args.last().copied(), Some(target.as_os_str()));
    // site packages stay isolated and an existing env is never cleared
    assert!(!args.iter().any(|a| *a == "--system-site-packages"));
    assert!(!args.iter().any(|a| *a == "--clear"));
    assert!(!args.iter().any(|a| *a == "--without-pip"));
    #[cfg(unix)]
    assert!(args.iter().any(|a| *a == "--symlinks"));
}

#[rstest]
fn test_from_config_uses_configured_python() {
    let mut config = Config::new("/srv/envs");
    config.python = Some(PathBuf::from("/usr/bin/python3.11"));

    let creator = VenvCreator::from_config(&config);
    assert_eq!(creator.python, config.python);
}

#[cfg(unix)]
#[rstest]
fn test_real_venv_layout(base: TempDir) {
    let Some(python) = venv_python() else {
        eprintln!("skipping: no python able to create venvs");
        return;
    };
    let config = Config::new(base.path());
    let creator = VenvCreator {
        python: Some(python),
    };

    if let Err(err) = create_env(&config, "testenv", &creator) {
        eprintln!("skipping: venv creation is unavailable here: {err:?}");
        return;
    }

    for executable in ["python", "python3", "pip", "pip3"] {
        let found = which(&config, "testenv", executable);
        assert!(found.is_some(), "executable `{executable}` was not found");
    }

    let pip_found = which(&config, "testenv", "pip").unwrap();
    let pip_ideal = crate::env_path(&config, "testenv", &[BIN_DIR, "pip"]);
    assert_eq!(pip_found, pip_ideal);

    let out_found = std::process::Command::new(&pip_found)
        .arg("-V")
        .output()
        .unwrap();
    let out_ideal = std::process::Command::new(&pip_ideal)
        .arg("-V")
        .output()
        .unwrap();
    assert_eq!(out_found.stdout, out_ideal.stdout);
}
