use std::path::Path;

use kuching::application::ports::SpeechEngineError;
use kuching::config::EngineSettings;
use kuching::infrastructure::engine::resolve_engine_binary;

fn settings(executable_path: &Path, install_root: &Path) -> EngineSettings {
    EngineSettings {
        executable_path: executable_path.to_string_lossy().into_owned(),
        install_root: install_root.to_string_lossy().into_owned(),
        ..Default::default()
    }
}

fn touch(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, b"#!/bin/sh\n").unwrap();
}

#[test]
fn given_configured_executable_when_resolving_then_it_wins_over_install_root() {
    let dir = tempfile::tempdir().unwrap();
    let configured = dir.path().join("custom-whisper");
    touch(&configured);
    touch(&dir.path().join("build").join("bin").join("whisper-cli"));

    let resolved = resolve_engine_binary(&settings(&configured, dir.path())).unwrap();

    assert_eq!(resolved, configured);
}

#[test]
fn given_cmake_layout_when_resolving_then_build_binary_wins_over_legacy_main() {
    let dir = tempfile::tempdir().unwrap();
    let cmake_binary = dir.path().join("build").join("bin").join("whisper-cli");
    touch(&cmake_binary);
    touch(&dir.path().join("main"));

    let missing = dir.path().join("not-configured");
    let resolved = resolve_engine_binary(&settings(&missing, dir.path())).unwrap();

    assert_eq!(resolved, cmake_binary);
}

#[test]
fn given_only_legacy_main_when_resolving_then_third_candidate_found() {
    let dir = tempfile::tempdir().unwrap();
    let legacy_main = dir.path().join("main");
    touch(&legacy_main);

    let missing = dir.path().join("not-configured");
    let resolved = resolve_engine_binary(&settings(&missing, dir.path())).unwrap();

    assert_eq!(resolved, legacy_main);
}

#[test]
fn given_no_candidate_exists_when_resolving_then_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("not-configured");
    let result = resolve_engine_binary(&settings(&missing, dir.path()));

    assert!(matches!(result, Err(SpeechEngineError::NotFound(_))));
}

#[test]
fn given_install_appearing_between_calls_when_resolving_then_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("not-configured");
    let config = settings(&missing, dir.path());

    assert!(resolve_engine_binary(&config).is_err());

    let legacy_main = dir.path().join("main");
    touch(&legacy_main);

    assert_eq!(resolve_engine_binary(&config).unwrap(), legacy_main);
}
