use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.init_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .poreportrc.json"));

    let config: serde_json::Value = serde_json::from_str(&test.read_file(".poreportrc.json")?)?;
    assert_eq!(config["folderPath"], "./translations");
    assert_eq!(config["extension"], "po");
    assert_eq!(config["sort"], "file_name");
    assert_eq!(config["order"], "asc");

    Ok(())
}

#[test]
fn test_init_with_folder() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.init_command();
    cmd.args(["--folder", "locales"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    let config: serde_json::Value = serde_json::from_str(&test.read_file(".poreportrc.json")?)?;
    assert_eq!(config["folderPath"], "locales");

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".poreportrc.json", r#"{ "folderPath": "mine" }"#)?;

    let output = run(test.init_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains(".poreportrc.json already exists"));
    assert_eq!(test.read_file(".poreportrc.json")?, r#"{ "folderPath": "mine" }"#);
    assert!(test.root().join(".poreportrc.json").exists());

    Ok(())
}
