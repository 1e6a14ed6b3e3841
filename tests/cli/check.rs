use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const SOURCE: &str = r#"
fn main() {
    let hello = fl!("hello");
    let bye = fl!("bye");
    println!("{hello} {bye}");
}
"#;

#[test]
fn test_all_languages_valid() -> Result<()> {
    let test = CliTest::with_file("src/main.rs", SOURCE)?;
    test.write_file("i18n/es/app.ftl", "hello = Hola\nbye = Adios\n")?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\
Found 2 translation keys in 1 source file

Checking language: es
Validating file: i18n/es/app.ftl

\u{2713} The following languages were validated successfully: es
"
    );

    Ok(())
}

#[test]
fn test_missing_key() -> Result<()> {
    let test = CliTest::with_file(
        "src/lib.rs",
        "fl!(\"greeting\");\nfl!(\"farewell\");\n",
    )?;
    test.write_file("i18n/en/app.ftl", "greeting = Hi\n")?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: \"farewell\"  missing-key"));
    assert!(output.stdout.contains("  --> i18n/en/app.ftl\n"));
    assert!(
        output
            .stdout
            .contains("The following languages failed to validate: en")
    );

    Ok(())
}

#[test]
fn test_duplicate_key_is_a_warning() -> Result<()> {
    let test = CliTest::with_file("src/lib.rs", "fl!(\"greeting\");\n")?;
    test.write_file("i18n/en/app.ftl", "greeting = Hi\ngreeting = Hi\n")?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"greeting\"  duplicate-key"));
    assert!(output.stdout.contains("  --> i18n/en/app.ftl:2\n"));
    assert!(output.stdout.contains("one of them can be removed"));
    assert!(
        output
            .stdout
            .contains("The following languages were validated successfully: en")
    );

    Ok(())
}

#[test]
fn test_unused_key_is_a_warning() -> Result<()> {
    let test = CliTest::with_file("src/lib.rs", "fl!(\"greeting\");\n")?;
    test.write_file("i18n/en/app.ftl", "greeting = Hi\nunused_key = X\n")?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"unused_key\"  unused-key"));
    assert!(output.stdout.contains("unused fluent key"));

    Ok(())
}

#[test]
fn test_wrong_extension_fails_language() -> Result<()> {
    let test = CliTest::with_file("src/lib.rs", "fl!(\"greeting\");\n")?;
    test.write_file("i18n/en/app.txt", "greeting = Hi\n")?;
    test.write_file("i18n/fr/app.ftl", "greeting = Salut\n")?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("error: \"i18n/en/app.txt\"  wrong-extension")
    );
    assert!(output.stdout.contains("it should be: app.ftl"));
    assert!(
        output
            .stdout
            .contains("The following languages failed to validate: en\n")
    );

    Ok(())
}

#[test]
fn test_no_keys_in_source() -> Result<()> {
    let test = CliTest::with_file("src/main.rs", "fn main() {}\n")?;
    test.write_file("i18n/en/app.ftl", "greeting = Hi\n")?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("error: no translation keys found in src (extension: .rs)")
    );
    assert!(!output.stdout.contains("Checking language"));

    Ok(())
}

#[test]
fn test_missing_i18n_directory() -> Result<()> {
    let test = CliTest::with_file("src/main.rs", SOURCE)?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stdout, "error: i18n directory not found: i18n\n");

    Ok(())
}

#[test]
fn test_missing_source_directory() -> Result<()> {
    let test = CliTest::with_file("i18n/en/app.ftl", "hello = Hello\n")?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stdout, "error: source directory not found: src\n");

    Ok(())
}

#[test]
fn test_repeated_runs_match() -> Result<()> {
    let test = CliTest::with_file("src/main.rs", SOURCE)?;
    test.write_file("src/ui/menu.rs", "fl!(\"menu\");\n")?;
    test.write_file("i18n/en/app.ftl", "hello = Hello\nbye = Bye\nmenu = Menu\n")?;
    test.write_file("i18n/de/app.ftl", "hello = Hallo\nstale = Alt\n")?;

    let first = run(test.command())?;
    let second = run(test.command())?;

    assert_eq!(first.code, Some(1));
    assert_eq!(first.code, second.code);
    assert_eq!(first.stdout, second.stdout);

    Ok(())
}

#[test]
fn test_custom_flags() -> Result<()> {
    let test = CliTest::with_file(
        "app/components/menu.tsx",
        "export const Menu = () => <p>{t(\"menu.open\")}</p>;\n",
    )?;
    test.write_file("locales/ja/menu.ftl", "menu.open = 開く\n")?;

    let mut cmd = test.command();
    cmd.args([
        "-i",
        "locales",
        "-s",
        "app",
        "-e",
        ".tsx",
        "-m",
        "t(",
        "-r",
        r#"t\("(.*?)"\)"#,
    ]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);
    assert!(output.stdout.contains("Validating file: locales/ja/menu.ftl"));
    assert!(
        output
            .stdout
            .contains("The following languages were validated successfully: ja")
    );

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".fluent-check.json",
        r#"{
         "i18nRoot": "resources/i18n",
         "ignores": ["**/generated/**"]
     }"#,
    )?;
    test.write_file("src/main.rs", "fl!(\"title\");\n")?;
    test.write_file("src/generated/strings.rs", "fl!(\"generated-only\");\n")?;
    test.write_file("resources/i18n/en/app.ftl", "title = Title\n")?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);
    assert!(output.stdout.contains("Found 1 translation key in 1 source file"));

    Ok(())
}

#[test]
fn test_flags_override_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".fluent-check.json", r#"{ "i18nRoot": "missing" }"#)?;
    test.write_file("src/main.rs", "fl!(\"title\");\n")?;
    test.write_file("i18n/en/app.ftl", "title = Title\n")?;

    let mut cmd = test.command();
    cmd.args(["-i", "i18n"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);

    Ok(())
}

#[test]
fn test_file_scope_reports_keys_from_sibling_files() -> Result<()> {
    let test = CliTest::with_file("src/main.rs", "fl!(\"menu\");\nfl!(\"dialog\");\n")?;
    test.write_file("i18n/en/menu.ftl", "menu = Menu\n")?;
    test.write_file("i18n/en/dialog.ftl", "dialog = Dialog\n")?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: \"menu\"  missing-key"));
    assert!(output.stdout.contains("error: \"dialog\"  missing-key"));

    Ok(())
}

#[test]
fn test_language_scope_merges_files() -> Result<()> {
    let test = CliTest::with_file("src/main.rs", "fl!(\"menu\");\nfl!(\"dialog\");\n")?;
    test.write_file("i18n/en/menu.ftl", "menu = Menu\n")?;
    test.write_file("i18n/en/dialog.ftl", "dialog = Dialog\n")?;

    let mut cmd = test.command();
    cmd.args(["--scope", "language"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);
    assert!(!output.stdout.contains("missing-key"));

    Ok(())
}

#[test]
fn test_invalid_regex_is_an_error() -> Result<()> {
    let test = CliTest::with_file("src/main.rs", SOURCE)?;
    test.write_file("i18n/en/app.ftl", "hello = Hello\n")?;

    let mut cmd = test.command();
    cmd.args(["-r", "fl!(\"(.*?)\""]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: Invalid key pattern"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("-i, --i18n-root <PATH>"));
    assert!(output.stdout.contains("-r, --regex <PATTERN>"));
    assert!(output.stdout.contains("init"));

    Ok(())
}
