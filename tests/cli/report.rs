use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const HEADER: &str = r#"msgid ""
msgstr ""
"Language: de\n"
"#;

#[test]
fn test_report_sample_catalogs() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let output = run(test.report_command())?;

    assert_eq!(output.code, Some(0));
    let lines: Vec<&str> = output.stdout.lines().collect();
    assert_eq!(
        &lines[..5],
        &[
            "File name               Translated  Untranslated  Not Allowed Translations  Total Per File",
            "allowed_not_allowed.po           1             0                         1               2",
            "sample.po                        4             1                         1               6",
            "------------------------------------------------------------------------------------------",
            "2 files                          5             1                         2               8",
        ]
    );
    assert!(output.stdout.contains("Scanned 2 catalogs in"));
    assert_eq!(output.stderr, "");

    Ok(())
}

#[test]
fn test_report_totals_last_when_sorted_descending() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let mut cmd = test.report_command();
    cmd.args(["--sort", "total", "--order", "desc"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    let lines: Vec<&str> = output.stdout.lines().collect();
    assert!(lines[1].starts_with("sample.po"));
    assert!(lines[2].starts_with("allowed_not_allowed.po"));
    assert!(lines[4].starts_with("2 files"));

    Ok(())
}

#[test]
fn test_report_json() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let mut cmd = test.report_command();
    cmd.args(["--format", "json", "--sort", "translated", "--order", "desc"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    let value: serde_json::Value = serde_json::from_str(&output.stdout)?;
    let names: Vec<&str> = value["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["file_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["sample.po", "allowed_not_allowed.po", "2 files"]);
    assert_eq!(value["rows"][2]["not_allowed_translations"], 2);
    assert_eq!(value["header"][4]["label"], "Total Per File");

    Ok(())
}

#[test]
fn test_report_empty_folder_warns() -> Result<()> {
    let test = CliTest::with_file("translations/notes.txt", "nothing to see")?;

    let output = run(test.report_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "");
    assert!(output.stderr.starts_with("warning: No po file was found in"));

    Ok(())
}

#[test]
fn test_report_malformed_header_aborts() -> Result<()> {
    let test = CliTest::with_fixtures()?;
    test.write_file(
        "translations/broken.po",
        "msgid \"Hello\"\nmsgstr \"Hallo\"\n",
    )?;

    let output = run(test.report_command())?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stdout, "");
    assert!(output.stderr.contains("broken.po: missing or malformed header"));
    assert!(output.stderr.contains("Report aborted"));

    Ok(())
}

#[test]
fn test_report_broken_entry_aborts() -> Result<()> {
    let test = CliTest::with_file(
        "translations/de.po",
        &format!("{}\nmsgid \"Hello\"\nmsgstr \"Hallo\n", HEADER),
    )?;

    let output = run(test.report_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("de.po: line"));

    Ok(())
}

#[test]
fn test_report_does_not_recurse() -> Result<()> {
    let test = CliTest::with_file(
        "translations/de.po",
        &format!("{}\nmsgid \"Hello\"\nmsgstr \"Hallo\"\n", HEADER),
    )?;
    test.write_file("translations/nested/broken.po", "not a catalog")?;

    let output = run(test.report_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("One file"));
    assert!(!output.stdout.contains("broken.po"));

    Ok(())
}

#[test]
fn test_report_folder_flag_and_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "locales/de.po",
        &format!(
            "{}\nmsgid \"1 file\"\nmsgid_plural \"@count files\"\nmsgstr[0] \"1 Datei\"\nmsgstr[1] \"\"\n",
            HEADER
        ),
    )?;

    // Relative folder from the command line
    let mut cmd = test.report_command();
    cmd.args(["--folder", "locales"]);
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains(
        "de.po               1             1                         0               2"
    ));

    // Same folder from the config file
    test.write_file(".poreportrc.json", r#"{ "folderPath": "locales" }"#)?;
    let output = run(test.report_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("One file"));

    Ok(())
}

#[test]
fn test_report_config_folder_relative_to_config_file() -> Result<()> {
    let test = CliTest::with_file(
        "locales/de.po",
        &format!("{}\nmsgid \"Hello\"\nmsgstr \"Hallo\"\n", HEADER),
    )?;
    test.write_file(".poreportrc.json", r#"{ "folderPath": "locales" }"#)?;
    test.write_file("app/src/main.txt", "")?;

    let mut cmd = test.report_command();
    cmd.current_dir(test.root().join("app/src"));
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("de.po"));

    Ok(())
}

#[test]
fn test_report_header_without_fields() -> Result<()> {
    let test = CliTest::with_file(
        "translations/de.po",
        "msgid \"\"\nmsgstr \"\"\n\nmsgid \"Hello\"\nmsgstr \"Hallo\"\n",
    )?;
    test.write_file(
        "translations/fr.po",
        "\u{feff}msgid \"\"\nmsgstr \"\"\n\"Language: fr\\n\"\n\nmsgid \"Hello\"\nmsgstr \"\"\n",
    )?;

    let output = run(test.report_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains(
        "2 files             1             1                         0               2"
    ));

    Ok(())
}

#[test]
fn test_report_verbose_shows_language() -> Result<()> {
    let test = CliTest::with_fixtures()?;

    let mut cmd = test.report_command();
    cmd.arg("-v");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stderr.contains("scanned sample.po [fr]: 6 string(s)"));

    Ok(())
}

#[test]
fn test_report_missing_folder_is_config_error() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.report_command();
    cmd.args(["--folder", "does-not-exist"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: "));
    assert!(output.stderr.contains("does-not-exist is not a directory."));

    Ok(())
}

#[test]
fn test_report_custom_extension() -> Result<()> {
    let test = CliTest::with_file(
        "translations/de.gettext",
        &format!("{}\nmsgid \"Hello\"\nmsgstr \"Hallo\"\n", HEADER),
    )?;

    let mut cmd = test.report_command();
    cmd.args(["--extension", "gettext"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("de.gettext"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("report"));
    assert!(output.stdout.contains("init"));

    Ok(())
}
