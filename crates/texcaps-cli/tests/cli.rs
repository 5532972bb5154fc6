#![cfg(not(target_arch = "wasm32"))]

use assert_cmd::Command;
use predicates::prelude::*;

fn texcaps() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_texcaps"));
    cmd.env_remove("TEXCAPS_FEATURES")
        .env_remove("TEXCAPS_COMPAT")
        .env_remove("TEXCAPS_LOG");
    cmd
}

#[test]
fn help_lists_subcommands_and_env_vars() {
    texcaps()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bytes-per-sample"))
        .stdout(predicate::str::contains("TEXCAPS_FEATURES"))
        .stdout(predicate::str::contains("TEXCAPS_LOG"));
}

#[test]
fn list_group_prints_one_identifier_per_line() {
    texcaps()
        .args(["list", "--group", "sized-depth-stencil"])
        .assert()
        .success()
        .stdout("stencil8\ndepth16unorm\ndepth32float\n");
}

#[test]
fn enabled_only_honours_features_env() {
    texcaps()
        .args(["list", "--group", "bc", "--enabled-only"])
        .assert()
        .success()
        .stdout("");

    let out = texcaps()
        .env("TEXCAPS_FEATURES", "texture-compression-bc")
        .args(["list", "--group", "bc", "--enabled-only"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 14);
}

#[test]
fn unknown_format_fails() {
    texcaps()
        .args(["show", "rgba9unorm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown texture format identifier"));
}

#[test]
fn unknown_feature_fails_with_context() {
    texcaps()
        .args(["caps", "r8unorm", "--features", "not-a-feature"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid feature list"))
        .stderr(predicate::str::contains("unknown feature identifier"));
}

#[test]
fn caps_reflect_tier1() {
    texcaps()
        .args(["caps", "r16unorm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("render-attachment: no"));

    texcaps()
        .args(["caps", "r16unorm", "--features", "texture-formats-tier1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("render-attachment: yes"))
        .stdout(predicate::str::contains("multisample: yes"));
}

#[test]
fn compat_env_denies_multisample() {
    texcaps()
        .env("TEXCAPS_COMPAT", "1")
        .args(["caps", "rgba16float"])
        .assert()
        .success()
        .stdout(predicate::str::contains("multisample: no"));
}

#[test]
fn bytes_per_sample_aligns_each_attachment() {
    texcaps()
        .args(["bytes-per-sample", "r8unorm", "rgba32float"])
        .assert()
        .success()
        .stdout("20\n");

    texcaps()
        .args(["bytes-per-sample", "r8unorm", "depth16unorm"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("never a color render target"));
}

#[test]
fn aspect_resolves_combined_formats() {
    texcaps()
        .args(["aspect", "depth24plus-stencil8", "stencil-only"])
        .assert()
        .success()
        .stdout("stencil8\n");
}

#[test]
fn show_json_is_machine_readable() {
    let out = texcaps()
        .args(["--json", "show", "rgba8unorm-srgb"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["format"], "rgba8unorm-srgb");
    assert_eq!(json["base_format"], "rgba8unorm");
    assert_eq!(json["color_render"]["byte_cost"], 8);
}
