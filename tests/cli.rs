use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("griddiff_cli_tests").join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn griddiff(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_griddiff"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to spawn griddiff")
}

#[test]
fn three_arguments_write_difference_image() {
    let dir = scratch("positional");
    fs::write(dir.join("a.txt"), "x.\n.x\n").unwrap();
    fs::write(dir.join("b.txt"), ".x\n.x\n").unwrap();

    let out = griddiff(&dir, &["a.txt", "b.txt", "diff.png"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let img = image::open(dir.join("diff.png")).unwrap().into_rgb8();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(img.get_pixel(1, 0).0, [255, 255, 0]);
    assert_eq!(img.get_pixel(1, 1).0, [150, 150, 150]);

    let debug_log = fs::read_to_string(dir.join("debug.log")).unwrap();
    assert!(debug_log.contains("[INFO]"));
}

#[test]
fn wrong_argument_count_prints_usage() {
    let dir = scratch("usage");
    let out = griddiff(&dir, &["only.txt", "two.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage:"));

    let out = griddiff(&dir, &[]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn mismatched_grids_fail_without_output() {
    let dir = scratch("mismatch");
    fs::write(dir.join("a.txt"), "x.\nx.\n").unwrap();
    fs::write(dir.join("b.txt"), "x.\n").unwrap();

    let out = griddiff(&dir, &["compare", "a.txt", "b.txt", "diff.png"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("dimension mismatch"));
    assert!(!dir.join("diff.png").exists());

    let error_log = fs::read_to_string(dir.join("error.log")).unwrap();
    assert!(error_log.contains("dimension mismatch"));
}

#[test]
fn unknown_symbol_fails() {
    let dir = scratch("symbol");
    fs::write(dir.join("a.txt"), "x?\n").unwrap();

    let out = griddiff(&dir, &["render", "a.txt", "a.png"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unrecognized symbol"));
}

#[test]
fn compare_report_from_config() {
    let dir = scratch("config");
    fs::write(dir.join("a.txt"), "xx\n").unwrap();
    fs::write(dir.join("griddiff.config"), "report = tally.json\nerror-log = err.txt\n").unwrap();

    let out = griddiff(&dir, &["compare", "a.txt", "a.txt", "same.png"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("tally.json")).unwrap()).unwrap();
    assert_eq!(json["agree_member"], 2);
    assert_eq!(json["mismatched"], 0);
    assert!(dir.join("err.txt").exists());
}

#[test]
fn embed_uses_symbol_flag() {
    let dir = scratch("embed");
    fs::write(dir.join("link.ld"), [0x53u8, 0x0a]).unwrap();

    let out = griddiff(&dir, &["embed", "link.ld", "ld.h", "--symbol", "LD"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        fs::read_to_string(dir.join("ld.h")).unwrap(),
        "char LD[] = {0x53, 0xa, 0x00};\n"
    );
}

#[test]
fn bad_flag_reports_error_and_usage() {
    let dir = scratch("bad_flag");
    let out = griddiff(&dir, &["compare", "--no-such-flag"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("--no-such-flag"));
    assert!(stderr.contains("Usage: griddiff input_file1"));
}

#[test]
fn help_goes_to_stdout_and_succeeds() {
    let dir = scratch("help");
    let out = griddiff(&dir, &["--help"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("embed"));
}
