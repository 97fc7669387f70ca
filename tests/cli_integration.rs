use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn encdec(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("encdec").unwrap();
    cmd.env("ENCDEC_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_encrypt_literal_to_console() {
    let temp_dir = tempfile::tempdir().unwrap();

    encdec(temp_dir.path())
        .args(["-mode", "enc", "-key", "5", "-data", "This is a message!"])
        .assert()
        .success()
        .stdout("Ymnx nx f rjxxflj!\n");
}

#[test]
fn test_decrypt_with_long_flags() {
    let temp_dir = tempfile::tempdir().unwrap();

    encdec(temp_dir.path())
        .args(["--mode", "dec", "--key", "5", "--data", "Ymnx nx f rjxxflj!"])
        .assert()
        .success()
        .stdout("This is a message!\n");
}

#[test]
fn test_negative_key_and_default_mode() {
    let temp_dir = tempfile::tempdir().unwrap();

    encdec(temp_dir.path())
        .args(["-key", "-1", "-data", "abc"])
        .assert()
        .success()
        .stdout("zab\n");
}

#[test]
fn test_unicode_algorithm() {
    let temp_dir = tempfile::tempdir().unwrap();

    encdec(temp_dir.path())
        .args(["-alg", "unicode", "-key", "1", "-data", "Hello, z!"])
        .assert()
        .success()
        .stdout("Ifmmp-!{\"\n");
}

#[test]
fn test_file_in_file_out() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("road_to_treasure.txt");
    let output = temp_dir.path().join("protected.txt");
    std::fs::write(&input, "Welcome to hyperskill!\nSee you\n").unwrap();

    encdec(temp_dir.path())
        .arg("-in")
        .arg(&input)
        .arg("-out")
        .arg(&output)
        .args(["-key", "3", "-mode", "enc"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, "Zhofrph wr kbshuvnloo! Vhh brx");

    // And back again
    encdec(temp_dir.path())
        .arg("-in")
        .arg(&output)
        .args(["-key", "3", "-mode", "dec"])
        .assert()
        .success()
        .stdout("Welcome to hyperskill! See you\n");
}

#[test]
fn test_literal_data_beats_input_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("in.txt");
    std::fs::write(&input, "from file").unwrap();

    encdec(temp_dir.path())
        .args(["-data", "abc", "-key", "1", "-in"])
        .arg(&input)
        .assert()
        .success()
        .stdout("bcd\n");
}

#[test]
fn test_unknown_algorithm_falls_back_to_shift() {
    let temp_dir = tempfile::tempdir().unwrap();

    encdec(temp_dir.path())
        .args(["-alg", "rot13", "-key", "1", "-data", "a b!"])
        .assert()
        .success()
        .stdout("b c!\n")
        .stderr(predicate::str::contains("falling back to shift"));
}

#[test]
fn test_strict_config_rejects_unknown_algorithm() {
    let temp_dir = tempfile::tempdir().unwrap();

    encdec(temp_dir.path())
        .args(["config", "strict-alg", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strict-alg set to true"));

    encdec(temp_dir.path())
        .args(["-alg", "rot13", "-data", "abc"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown algorithm: rot13"));
}

#[test]
fn test_configured_default_algorithm() {
    let temp_dir = tempfile::tempdir().unwrap();

    encdec(temp_dir.path())
        .args(["config", "default-alg", "unicode"])
        .assert()
        .success();

    encdec(temp_dir.path())
        .args(["config", "default-alg"])
        .assert()
        .success()
        .stdout("default-alg = unicode\n");

    encdec(temp_dir.path())
        .args(["-key", "1", "-data", "a b"])
        .assert()
        .success()
        .stdout("b!c\n");
}

#[test]
fn test_config_show_all() {
    let temp_dir = tempfile::tempdir().unwrap();

    encdec(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default-alg = shift"))
        .stdout(predicate::str::contains("strict-alg = false"))
        .stdout(predicate::str::contains("line-sep = \" \""));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    encdec(temp_dir.path())
        .args(["config", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn test_missing_input_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    encdec(temp_dir.path())
        .arg("-in")
        .arg(&missing)
        .args(["-key", "1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error:").and(predicate::str::contains("missing.txt")));
}

#[test]
fn test_unknown_flag_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    encdec(temp_dir.path())
        .args(["-foo", "bar", "-data", "abc"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_non_integer_key_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    encdec(temp_dir.path())
        .args(["-key", "five", "-data", "abc"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("five"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp_dir = tempfile::tempdir().unwrap();

    encdec(temp_dir.path())
        .args(["-v", "-key", "2", "-data", "xyz"])
        .assert()
        .success()
        .stdout("zab\n")
        .stderr(predicate::str::contains("Transforming 3 chars"));
}

#[test]
fn test_unknown_mode_keeps_encrypt() {
    let temp_dir = tempfile::tempdir().unwrap();

    encdec(temp_dir.path())
        .args(["-mode", "foo", "-key", "1", "-data", "abc"])
        .assert()
        .success()
        .stdout("bcd\n")
        .stderr(predicate::str::contains("Unknown mode 'foo'"));
}

#[test]
fn test_malformed_config_is_not_overwritten() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, "{ not json").unwrap();

    encdec(temp_dir.path())
        .args(["config", "strict-alg", "true"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Config error"));

    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "{ not json");
}
