use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_rules_lists_builtin_table() -> Result<()> {
    let test = CliTest::new()?;

    // "Delete" appears once, with the help-text key
    assert_cmd_snapshot!(test.rules_command(), @r###"
    success: true
    exit_code: 0
    ----- stdout -----
    "OK"                     -> "actions.ok"
    "Cancel"                 -> "actions.cancel"
    "Stop"                   -> "actions.stop"
    "Delete"                 -> "help.delete"
    "Move to Trash"          -> "actions.moveToTrash"
    "Save"                   -> "actions.save"
    "Edit"                   -> "actions.edit"
    "Refresh"                -> "actions.refresh"
    "New"                    -> "actions.new"
    "Resume"                 -> "actions.resume"
    "Open in Terminal"       -> "actions.openInTerminal"
    "Open in iTerm2"         -> "actions.openInIterm2"
    "Open in Warp"           -> "actions.openInWarp"
    "Open Embedded Terminal" -> "actions.openEmbeddedTerminal"
    "Use Preferred Launch"   -> "actions.usePreferredLaunch"
    "Change…"                -> "actions.change"
    "Restore Defaults"       -> "actions.restoreDefaults"
    "View…"                  -> "actions.view"
    "Select"                 -> "actions.select"
    "Add"                    -> "actions.add"
    "Remove"                 -> "actions.remove"
    "Test"                   -> "actions.test"
    "Close"                  -> "actions.close"
    "Settings"               -> "title.settings"
    "General Settings"       -> "settings.general.title"
    "Terminal Settings"      -> "settings.terminal.title"
    "Command Settings"       -> "settings.command.title"
    "About CodMate"          -> "about.title"
    "Refresh session index"  -> "help.refreshSessionIndex"
    "Reveal in Finder"       -> "help.revealInFinder"
    "Select a session"       -> "placeholder.selectSession"
    "Search"                 -> "placeholder.search"
    "Loading..."             -> "status.loading"
    "No sessions"            -> "status.noSessions"
    34 rule(s)

    ----- stderr -----
    "###);
    Ok(())
}

#[test]
fn test_rules_from_config_sorted_by_length() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".relabelrc.json",
        r#"{
            "rules": { "OK": "actions.ok", "Move to Trash": "actions.moveToTrash" },
            "sortByLength": true
        }"#,
    )?;

    assert_cmd_snapshot!(test.rules_command(), @r###"
    success: true
    exit_code: 0
    ----- stdout -----
    "Move to Trash" -> "actions.moveToTrash"
    "OK"            -> "actions.ok"
    2 rule(s)

    ----- stderr -----
    "###);
    Ok(())
}

#[test]
fn test_rules_warns_about_chained_rules() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("keys.json", r#"{"OK": "Done", "Done": "actions.done"}"#)?;

    let mut cmd = test.rules_command();
    cmd.args(["--rules", "keys.json"]);
    assert_cmd_snapshot!(cmd, @r###"
    success: true
    exit_code: 0
    ----- stdout -----
    "OK"   -> "Done"
    "Done" -> "actions.done"
    2 rule(s)

    ----- stderr -----
    warning: target of "OK" is rewritten again by rule "Done"
    "###);
    Ok(())
}

#[test]
fn test_rules_missing_rules_file() -> Result<()> {
    let test = CliTest::new()?;

    let mut settings = test.snapshot_settings();
    settings.add_filter(r"nope\.json: .+", "nope.json: [OS ERROR]");
    let _settings = settings.bind_to_scope();

    let mut cmd = test.rules_command();
    cmd.args(["--rules", "nope.json"]);
    assert_cmd_snapshot!(cmd, @r###"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to read rules file: nope.json: [OS ERROR]
    "###);
    Ok(())
}
