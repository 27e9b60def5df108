use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd(bin: &str, config: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(bin).unwrap();
    cmd.env_remove("RISKIQ_API_TOKEN")
        .env_remove("RISKIQ_API_KEY")
        .env_remove("RISKIQ_CONFIG")
        .arg("--config")
        .arg(config.path().join("config.toml"))
        .arg("--no-color");
    cmd
}

mod config {
    use super::*;

    #[test]
    fn setup_then_show_masks_secrets() {
        let dir = TempDir::new().unwrap();

        cmd("riq-config", &dir)
            .args(["setup", "--token", "tok-abcdefghijkl", "--key", "key-0123456789"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Credentials saved"));

        let stored = fs::read_to_string(dir.path().join("config.toml")).unwrap();
        assert!(stored.contains("tok-abcdefghijkl"));

        cmd("riq-config", &dir)
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("tok-...ijkl"))
            .stdout(predicate::str::contains("tok-abcdefghijkl").not())
            .stdout(predicate::str::contains("key-...6789"));
    }

    #[test]
    fn show_json_without_config() {
        let dir = TempDir::new().unwrap();

        cmd("riq-config", &dir)
            .args(["show", "-o", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"token\": null"));
    }

    #[test]
    fn setup_requires_both_values() {
        let dir = TempDir::new().unwrap();

        cmd("riq-config", &dir)
            .args(["setup", "--token", "only-token"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--key"));

        assert!(!dir.path().join("config.toml").exists());
    }

    #[test]
    fn path_prints_location() {
        let dir = TempDir::new().unwrap();

        cmd("riq-config", &dir)
            .arg("path")
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn set_proxy_keeps_credentials() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "token = \"stored-token\"\nkey = \"stored-key\"\n",
        )
        .unwrap();

        cmd("riq-config", &dir)
            .args(["set", "https_proxy", "http://proxy.local:3128"])
            .assert()
            .success();

        let stored = fs::read_to_string(dir.path().join("config.toml")).unwrap();
        assert!(stored.contains("stored-token"));
        assert!(stored.contains("http://proxy.local:3128"));
    }

    #[test]
    fn setup_replaces_unreadable_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "token = [unterminated").unwrap();

        cmd("riq-config", &dir)
            .args(["setup", "--token", "tok-abcdefghijkl", "--key", "key-0123456789"])
            .assert()
            .success();

        let stored = fs::read_to_string(dir.path().join("config.toml")).unwrap();
        assert!(stored.contains("tok-abcdefghijkl"));
    }

    #[test]
    fn set_unknown_field_fails() {
        let dir = TempDir::new().unwrap();

        cmd("riq-config", &dir)
            .args(["set", "password", "hunter2"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config field"));
    }
}

mod lookups {
    use super::*;

    #[test]
    fn pdns_without_credentials_fails() {
        let dir = TempDir::new().unwrap();

        cmd("riq-pdns", &dir)
            .args(["name", "example.com"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing API token and key"));
    }

    #[test]
    fn failed_save_warns_and_continues() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let mut cmd = Command::cargo_bin("riq-pdns").unwrap();
        cmd.env_remove("RISKIQ_API_TOKEN")
            .env_remove("RISKIQ_API_KEY")
            .env_remove("RISKIQ_CONFIG")
            .env_remove("NO_PROXY")
            .env_remove("no_proxy")
            .env("HTTPS_PROXY", "http://127.0.0.1:9")
            .env("https_proxy", "http://127.0.0.1:9")
            .arg("--config")
            .arg(blocker.join("config.toml"))
            .args(["--no-color", "--token", "t", "--key", "k", "--save"])
            .args(["name", "example.com", "--timeout", "5"]);

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("could not save credentials"))
            .stderr(predicate::str::contains("missing API").not())
            .stderr(
                predicate::str::contains("transport error").or(predicate::str::contains("API error")),
            );
    }

    #[test]
    fn oversized_timeout_is_rejected() {
        let dir = TempDir::new().unwrap();

        cmd("riq-pdns", &dir)
            .args(["--token", "t", "--key", "k"])
            .args(["name", "example.com", "--timeout", "18446744073709551615"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid parameter"))
            .stderr(predicate::str::contains("panicked").not());
    }

    #[test]
    fn oversized_day_window_is_rejected() {
        let dir = TempDir::new().unwrap();

        cmd("riq-blacklist", &dir)
            .args(["--token", "t", "--key", "k"])
            .args(["list", "--days", "4294967295"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("out of range"))
            .stderr(predicate::str::contains("panicked").not());
    }

    #[test]
    fn blacklist_lookup_needs_a_url() {
        let dir = TempDir::new().unwrap();

        cmd("riq-blacklist", &dir).arg("lookup").assert().failure();
    }

    #[test]
    fn help_lists_subcommands() {
        let dir = TempDir::new().unwrap();

        cmd("riq-pdns", &dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("name"))
            .stdout(predicate::str::contains("ip"))
            .stdout(predicate::str::contains("data"));

        cmd("riq-blacklist", &dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("exploit-binary"));
    }
}
