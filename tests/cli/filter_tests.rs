use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::AppFixture;

fn pack_filter(app: &AppFixture) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pack-filter"));
    cmd.current_dir(app.path()).args(["--name", "myapp", "--dir", "."]);
    cmd
}

#[test]
fn lists_kept_files_with_defaults() {
    let app = AppFixture::typical();

    pack_filter(&app)
        .assert()
        .success()
        .stdout("index.js\nnode_modules/dep/index.js\npackage.json\nsrc/main.js\nsrc/main.js.map\n");
}

#[test]
fn user_patterns_add_to_defaults() {
    let app = AppFixture::typical();

    pack_filter(&app)
        .args(["--ignore", r"\.map$", "--ignore", "^/node_modules"])
        .assert()
        .success()
        .stdout("index.js\npackage.json\nsrc/main.js\n");
}

#[test]
fn no_junk_keeps_ds_store() {
    let app = AppFixture::typical();

    pack_filter(&app)
        .arg("--no-junk")
        .assert()
        .success()
        .stdout(predicate::str::contains(".DS_Store"));
}

#[test]
fn previous_build_output_is_skipped() {
    let app = AppFixture::typical();
    app.write_file("myapp-darwin-arm64/myapp.app/Contents/Info.plist", "x");
    app.write_file("myapp-win32-x64/myapp.exe", "x");

    pack_filter(&app)
        .assert()
        .success()
        .stdout(predicate::str::contains("myapp-").not());
}

#[test]
fn explicit_out_only_skips_that_directory() {
    let app = AppFixture::typical();
    app.write_file("dist/bundle.js", "x");
    app.write_file("myapp-linux-x64/myapp", "x");

    pack_filter(&app)
        .args(["--out", "dist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dist/").not())
        .stdout(predicate::str::contains("myapp-linux-x64/myapp"));
}

#[test]
fn json_report_lists_output_dirs() {
    let app = AppFixture::typical();

    let output = pack_filter(&app)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["ignored_output_dirs"].as_array().map(Vec::len), Some(14));
    assert_eq!(report["kept"][0], "index.js");
}

#[test]
fn invalid_pattern_fails() {
    let app = AppFixture::typical();

    pack_filter(&app)
        .args(["--ignore", "("])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid ignore pattern"));
}
