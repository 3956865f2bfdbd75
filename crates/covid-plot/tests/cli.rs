// File: crates/covid-plot/tests/cli.rs
// Purpose: End-to-end runs of the covid-plot binary against temporary CSV files.

use std::path::Path;
use std::process::{Command, Output};

const SAMPLE: &str = "day,cases,deaths\n0,10,1\n1,20,2\n2,15,3\n";

fn run(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_covid-plot"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .output()
        .expect("spawn covid-plot")
}

#[test]
fn prints_totals_and_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("data.csv"), SAMPLE).unwrap();

    let out = run(&["data.csv"], dir.path());
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "Cases: 45\tDeaths: 6\n");

    let png = dir.path().join("data.png");
    let img = image::open(&png).expect("png written next to input");
    assert_eq!((img.width(), img.height()), (1920, 1440));
}

#[test]
fn line_style_to_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("uk.csv"), SAMPLE).unwrap();

    let out = run(
        &["uk.csv", "--style", "line", "--no-smoothing", "--dpi", "100", "-o", "charts/uk_line.png"],
        dir.path(),
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let img = image::open(dir.path().join("charts/uk_line.png")).expect("explicit output written");
    assert_eq!((img.width(), img.height()), (640, 480));
    assert!(!dir.path().join("uk.png").exists());
}

#[test]
fn no_arguments_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(&[], dir.path());
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(&["nope.csv"], dir.path());
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn bad_row_fails_without_chart() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.csv"), "day,cases,deaths\n0,10,1\n1,ten,2\n").unwrap();
    let out = run(&["bad.csv"], dir.path());
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(!dir.path().join("bad.png").exists());
}
