use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{no_config, temp_input, tfy};

const PEOPLE_CSV: &str = "Name,Age\nBob,30\n";

#[test]
fn test_render_csv_file() {
    let cfg = no_config("render_csv_file");
    let input = temp_input("render_csv_file", "csv", PEOPLE_CSV);

    tfy()
        .args(["--config", &cfg, "render", &input, "--input", "csv"])
        .assert()
        .success()
        .stdout("Name   Age\n----------\nBob    30 \n");
}

#[test]
fn test_render_csv_stdin() {
    let cfg = no_config("render_csv_stdin");

    tfy()
        .args(["--config", &cfg, "render"])
        .write_stdin(PEOPLE_CSV)
        .assert()
        .success()
        .stdout("Name   Age\n----------\nBob    30 \n");
}

#[test]
fn test_render_margin_and_no_split_line() {
    let cfg = no_config("render_margin");
    let input = temp_input("render_margin", "csv", PEOPLE_CSV);

    tfy()
        .args([
            "--config",
            &cfg,
            "render",
            &input,
            "--margin",
            "1",
            "--no-split-line",
        ])
        .assert()
        .success()
        .stdout("Name Age\nBob  30 \n");
}

#[test]
fn test_render_json_with_formats() {
    let cfg = no_config("render_json_formats");
    let input = temp_input(
        "render_json_formats",
        "json",
        r#"[{"name": "Bob", "score": 3.14159}]"#,
    );

    tfy()
        .args([
            "--config",
            &cfg,
            "render",
            &input,
            "-i",
            "json",
            "--formats",
            ",%.1f",
        ])
        .assert()
        .success()
        .stdout("name   score\n------------\nBob    3.1  \n");
}

#[test]
fn test_render_empty_json_with_empty_text() {
    let cfg = no_config("render_empty_json");
    let input = temp_input("render_empty_json", "json", "[]");

    tfy()
        .args([
            "--config",
            &cfg,
            "render",
            &input,
            "-i",
            "json",
            "--columns",
            "a,b",
            "--empty-text",
            "no data",
        ])
        .assert()
        .success()
        .stdout("a   b\n-----\nno data\n");
}

#[test]
fn test_render_rejects_wrong_width_count() {
    let cfg = no_config("render_wrong_widths");
    let input = temp_input("render_wrong_widths", "csv", PEOPLE_CSV);

    tfy()
        .args(["--config", &cfg, "render", &input, "--widths", "1,2,3"])
        .assert()
        .failure()
        .stderr(contains("Invalid configuration"));

    tfy()
        .args(["--config", &cfg, "render", &input, "--widths", "6,x"])
        .assert()
        .failure()
        .stderr(contains("width is not an integer"));
}

#[test]
fn test_render_rejects_non_list_json() {
    let cfg = no_config("render_json_object");
    let input = temp_input("render_json_object", "json", r#"{"name": "Bob"}"#);

    tfy()
        .args(["--config", &cfg, "render", &input, "-i", "json"])
        .assert()
        .failure()
        .stderr(contains("Invalid input").and(contains("not an array")));
}

#[test]
fn test_render_rejects_ragged_csv() {
    let cfg = no_config("render_ragged_csv");
    let input = temp_input("render_ragged_csv", "csv", "Name,Age\nBob,30\nAnn\n");

    tfy()
        .args(["--config", &cfg, "render", &input])
        .assert()
        .failure()
        .stdout(contains("Bob").not())
        .stderr(contains("Invalid input"));
}

#[test]
fn test_config_file_defaults_apply() {
    let cfg = temp_input(
        "config_defaults_apply",
        "conf",
        "margin: 1\nsplit_line: false\nempty_text: ''\ndefault_input: csv\n",
    );
    let input = temp_input("config_defaults_apply", "csv", PEOPLE_CSV);

    tfy()
        .args(["--config", &cfg, "render", &input])
        .assert()
        .success()
        .stdout("Name Age\nBob  30 \n");
}

#[test]
fn test_config_init_and_print() {
    let cfg = no_config("config_init_print");

    tfy()
        .args(["--config", &cfg, "config", "--init"])
        .assert()
        .success()
        .stdout(contains("Config file:"));

    tfy()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("margin: 3").and(contains("default_input: csv")));
}
