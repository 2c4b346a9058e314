use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn lprojkit_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("lprojkit"))
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn build_project(root: &Path) {
    write_file(
        &root.join("en.lproj/Localizable.strings"),
        "/* Greeting shown on launch */\n\"greeting\" = \"Hello\";\n\n\"farewell\" = \"Goodbye\";\n",
    );
    write_file(
        &root.join("es.lproj/Localizable.strings"),
        "\"greeting\" = \"Hola\";\n\n\"farewell\" = \"Adiós\";\n",
    );
    write_file(
        &root.join("Base.lproj/Localizable.strings"),
        "\"greeting\" = \"Greeting\";\n",
    );
}

fn run_ok(command: &mut Command) -> String {
    let output = command.output().unwrap();
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_detect_command_prints_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Shop");
    build_project(&root);

    let stdout = run_ok(lprojkit_cmd().args(["detect", root.to_str().unwrap()]));
    assert!(stdout.contains("Project: Shop"));
    assert!(stdout.contains("Default language: Spanish (es)"));
    assert!(stdout.contains("English (en)"));
    assert!(stdout.contains("Base (Base)"));
    assert!(stdout.contains("Selected table: Localizable"));
}

#[test]
fn test_detect_command_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Shop");
    build_project(&root);

    let stdout = run_ok(lprojkit_cmd().args(["detect", root.to_str().unwrap(), "--json"]));
    let config: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(config["default_language"], "es");
    assert_eq!(config["available_languages"][0], "es");
    assert_eq!(config["selected_table_name"], "Localizable");
}

#[test]
fn test_detect_command_fails_without_tables() {
    let temp_dir = TempDir::new().unwrap();

    let output = lprojkit_cmd()
        .args(["detect", temp_dir.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No string tables found"));
}

#[test]
fn test_detect_save_and_recent_management() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Shop");
    build_project(&root);
    let store = temp_dir.path().join("recent.json");
    let store_env = store.to_str().unwrap().to_string();

    let stdout = run_ok(
        lprojkit_cmd()
            .args(["detect", root.to_str().unwrap(), "--save"])
            .env("LPROJKIT_RECENT_STORE", &store_env),
    );
    assert!(stdout.contains("📌 Saved to recent projects"));
    assert!(store.is_file());

    let stdout = run_ok(lprojkit_cmd().arg("recent").env("LPROJKIT_RECENT_STORE", &store_env));
    assert!(stdout.contains("1. Shop"));
    assert!(stdout.contains("Default language: Spanish (es)"));

    let stdout = run_ok(
        lprojkit_cmd()
            .args(["recent", "--remove", root.to_str().unwrap()])
            .env("LPROJKIT_RECENT_STORE", &store_env),
    );
    assert!(stdout.contains("✅ Removed"));

    let stdout = run_ok(lprojkit_cmd().arg("recent").env("LPROJKIT_RECENT_STORE", &store_env));
    assert!(stdout.contains("No recent projects"));
}

#[test]
fn test_view_command_filters_by_language() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Shop");
    build_project(&root);

    let stdout = run_ok(lprojkit_cmd().args(["view", root.to_str().unwrap(), "-l", "es"]));
    assert!(stdout.contains("=== Spanish (es) ==="));
    assert!(stdout.contains("greeting = Hola"));
    assert!(stdout.contains("farewell = Adiós"));
    assert!(!stdout.contains("Hello"));
}

#[test]
fn test_view_command_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Shop");
    build_project(&root);

    let stdout = run_ok(lprojkit_cmd().args(["view", root.to_str().unwrap(), "-l", "en", "--json"]));
    let languages: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(languages[0]["language"], "en");
    assert_eq!(languages[0]["table"], "Localizable");
    assert_eq!(languages[0]["entries"][0]["key"], "greeting");
    assert_eq!(languages[0]["entries"][0]["value"], "Hello");
}

#[test]
fn test_stats_command_reports_completion() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Shop");
    build_project(&root);

    let stdout = run_ok(lprojkit_cmd().args(["stats", root.to_str().unwrap()]));
    assert!(stdout.contains("=== Stats ==="));
    assert!(stdout.contains("Unique keys: 2"));
    // Base carries only one of the two default keys.
    assert!(stdout.contains("Missing: 1"));
    assert!(stdout.contains("Completion: 50.00%"));
    assert!(stdout.contains("Completion: 100.00%"));
}

#[test]
fn test_stats_command_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Shop");
    build_project(&root);

    let stdout = run_ok(lprojkit_cmd().args(["stats", root.to_str().unwrap(), "--json"]));
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["project"], "Shop");
    assert_eq!(report["default_language"], "es");
    assert_eq!(report["unique_keys"], 2);
    assert_eq!(report["languages"][0]["language"], "es");
    assert_eq!(report["languages"][0]["completion_percent"], 100.0);
}

#[test]
fn test_import_command_applies_source_rows() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Shop");
    build_project(&root);
    let source = temp_dir.path().join("translations.csv");
    write_file(
        &source,
        "Bundle Code,Locale,Text Key,Text Value\n\
         10,es_ES,checkout_title,Pagar\n\
         10,es_ES,greeting,Hola\n\
         10,en_GB,checkout_title,Checkout\n",
    );
    let report_path = temp_dir.path().join("report.json");

    let stdout = run_ok(lprojkit_cmd().args([
        "import",
        source.to_str().unwrap(),
        root.to_str().unwrap(),
        "--report-json",
        report_path.to_str().unwrap(),
    ]));
    assert!(stdout.contains("📁 Source file:"));
    assert!(stdout.contains("✅ Import completed!"));
    assert!(stdout.contains("➕ Added keys:"));
    assert!(stdout.contains("Report JSON written:"));

    let es = fs::read_to_string(root.join("es.lproj/Localizable.strings")).unwrap();
    assert!(es.contains("\"checkout_title\" = \"Pagar\";"));
    let en = fs::read_to_string(root.join("en.lproj/Localizable.strings")).unwrap();
    assert!(en.contains("\"checkout_title\" = \"Checkout\";"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["files_processed"], 2);
    assert_eq!(report["updated"], 0);
    assert_eq!(report["inserted"], 2);
    assert_eq!(report["inserted_keys"][0], "checkout_title");
}

#[test]
fn test_import_command_rejects_missing_columns() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Shop");
    build_project(&root);
    let source = temp_dir.path().join("broken.csv");
    write_file(&source, "Bundle Code,Text Key,Text Value\n10,a,b\n");

    let output = lprojkit_cmd()
        .args(["import", source.to_str().unwrap(), root.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing required columns: Locale"));
}

#[test]
fn test_delete_command_removes_keys() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Shop");
    build_project(&root);

    let stdout = run_ok(lprojkit_cmd().args(["delete", root.to_str().unwrap(), "farewell"]));
    assert!(stdout.contains("🗑️  Starting deletion process..."));
    assert!(stdout.contains("es: deleted 1"));
    assert!(stdout.contains("✅ Deletion completed!"));

    let es = fs::read_to_string(root.join("es.lproj/Localizable.strings")).unwrap();
    assert_eq!(es, "\"greeting\" = \"Hola\";\n");
    let en = fs::read_to_string(root.join("en.lproj/Localizable.strings")).unwrap();
    assert!(!en.contains("farewell"));
}

#[test]
fn test_delete_command_reads_keys_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Shop");
    build_project(&root);
    let keys_file = temp_dir.path().join("keys.txt");
    write_file(&keys_file, "farewell\n\n greeting \n");

    run_ok(lprojkit_cmd().args([
        "delete",
        root.to_str().unwrap(),
        "--keys-file",
        keys_file.to_str().unwrap(),
    ]));

    let es = fs::read_to_string(root.join("es.lproj/Localizable.strings")).unwrap();
    assert_eq!(es, "");
}

#[test]
fn test_delete_command_requires_keys() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Shop");
    build_project(&root);

    let output = lprojkit_cmd()
        .args(["delete", root.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No keys given"));
}

#[test]
fn test_locales_command_lists_table() {
    let stdout = run_ok(lprojkit_cmd().arg("locales"));
    assert!(stdout.contains("en_GB"));
    assert!(stdout.contains("en.lproj"));
    assert!(stdout.contains("zh_TW"));
}

#[test]
fn test_locales_command_resolves_single_locale() {
    let stdout = run_ok(lprojkit_cmd().args(["locales", "es_ES"]));
    assert_eq!(stdout.trim(), "es_ES -> es.lproj");
}

#[test]
fn test_locales_command_fails_for_unsupported_locale() {
    let output = lprojkit_cmd().args(["locales", "xx_XX"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported locale: xx_XX"));
}

#[test]
fn test_completions_command_generates_script() {
    let stdout = run_ok(lprojkit_cmd().args(["completions", "bash"]));
    assert!(stdout.contains("lprojkit"));
}
