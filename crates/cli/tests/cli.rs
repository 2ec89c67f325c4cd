use assert_cmd::Command;

fn bookstore() -> Command {
    let mut cmd = Command::cargo_bin("bookstore").unwrap();
    cmd.env("BOOKSTORE_CONFIG_DIR", std::env::temp_dir().join("bookstore-cli-no-config"))
        .env_remove("BOOKSTORE_ENV");
    cmd
}

#[test]
fn routes_lists_book_endpoints() {
    let output = bookstore().arg("routes").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("GET     /api/book\n"));
    assert!(stdout.contains("PUT     /api/book/{id}\n"));
}

#[test]
fn config_masks_function_keys() {
    let output = bookstore()
        .env("BOOKSTORE_AUTH__FUNCTION_KEYS", "alpha,beta")
        .arg("config")
        .output()
        .unwrap();
    assert!(output.status.success());

    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["auth"]["function_keys"], serde_json::json!(["***", "***"]));
    assert_eq!(config["server"]["port"], 7071);
}

#[test]
fn unknown_environment_fails() {
    bookstore()
        .env("BOOKSTORE_ENV", "qa")
        .arg("config")
        .assert()
        .failure();
}
