use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.init_command(), @r###"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .relabelrc.json

    ----- stderr -----
    "###);

    let content = test.read_file(".relabelrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["root"], "./");
    assert_eq!(parsed["rules"]["Cancel"], "actions.cancel");
    assert_eq!(parsed["rules"]["Delete"], "help.delete");
    assert_eq!(parsed["sortByLength"], false);
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".relabelrc.json", "{}")?;

    assert_cmd_snapshot!(test.init_command(), @r###"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .relabelrc.json already exists
    "###);

    assert_eq!(test.read_file(".relabelrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.init_command().output()?;
    test.write_file("View.swift", "Button(\"Stop\")\n")?;
    let _settings = test.snapshot_settings().bind_to_scope();

    let mut cmd = test.rewrite_command();
    cmd.args(["--apply", "View.swift"]);
    assert_cmd_snapshot!(cmd, @r###"
    success: true
    exit_code: 0
    ----- stdout -----
    Processing [PROJECT]/View.swift
      ✓ updated (1 replacement(s))

    ✓ Done. Updated 1 of 1 file(s) (1 replacement(s)).

    ----- stderr -----
    "###);

    assert_eq!(test.read_file("View.swift")?, "Button(\"actions.stop\")\n");
    Ok(())
}
