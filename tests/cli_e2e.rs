//! End-to-end CLI tests for chatstats.
//!
//! These tests verify the complete CLI workflow by running the actual binary
//! with various arguments and checking the output.
//!
//! # Test Categories
//!
//! - **Report**: Text and JSON statistics output
//! - **Filters**: Per-author reports and the user list
//! - **Export**: CSV, JSON, JSONL record files
//! - **Error handling**: Proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const US_CHAT: &str = "\
12/30/22, 8:15 PM - Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them.
12/30/22, 8:16 PM - Alice added Bob
12/30/22, 8:17 PM - Alice: Who is up for hiking on Saturday?
I can drive
12/30/22, 8:20 PM - Bob: me! 🎉🎉
12/31/22, 11:58 PM - Bob: Happy new year everyone
1/1/23, 12:01 AM - Alice: Happy new year
1/1/23, 12:05 AM - Bob: <Media omitted>
1/2/23, 9:03 AM - Carol: trail map at https://example.com/trails
";

const EU_CHAT: &str = "\
25/12/22, 21:45 - Ana: Feliz Navidad 🎄
26/12/22, 09:10 - Luis: igualmente
";

/// Creates a temporary directory with test fixtures.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("us_chat.txt"), US_CHAT).unwrap();
    fs::write(dir.path().join("eu_chat.txt"), EU_CHAT).unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(dir.path().join("stop.txt"), "is up for on\nthe at\n").unwrap();
    dir
}

fn chatstats_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatstats"));
    let mut cmd = Command::from_std(cmd);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn json_report(args: &[&str]) -> serde_json::Value {
    let output = chatstats_cmd().args(args).arg("--json").output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Report Tests
// ============================================================================

mod report {
    use super::*;

    #[test]
    fn test_text_report() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([&fixture(&fixtures, "us_chat.txt"), "-d", "month-first"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Parsed 6 records"))
            .stdout(predicate::str::contains("Messages:      6"))
            .stdout(predicate::str::contains("Media shared:  1"))
            .stdout(predicate::str::contains("Links shared:  1"))
            .stdout(predicate::str::contains("December-2022"))
            .stdout(predicate::str::contains("January-2023"))
            .stdout(predicate::str::contains("🏆 Busiest users"))
            .stdout(predicate::str::contains("🎉"));
    }

    #[test]
    fn test_json_report() {
        let fixtures = setup_fixtures();
        let value = json_report(&[&fixture(&fixtures, "us_chat.txt"), "-d", "mdy"]);

        assert_eq!(value["filter"], "Overall");
        assert_eq!(value["stats"]["messages"], 6);
        assert_eq!(value["stats"]["media"], 1);
        assert_eq!(value["emoji"]["rows"][0]["key"], "🎉");
        assert_eq!(value["emoji"]["rows"][0]["count"], 2);

        let months: Vec<&str> = value["monthly_timeline"]["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["key"].as_str().unwrap())
            .collect();
        assert_eq!(months, ["December-2022", "January-2023"]);
    }

    #[test]
    fn test_json_stdout_has_no_decorations() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([&fixture(&fixtures, "us_chat.txt"), "-d", "mdy", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("{"))
            .stdout(predicate::str::contains("chatstats v").not());
    }

    #[test]
    fn test_day_first_24_hour_export() {
        let fixtures = setup_fixtures();
        let value = json_report(&[&fixture(&fixtures, "eu_chat.txt"), "-d", "day-first"]);

        assert_eq!(value["stats"]["messages"], 2);
        assert_eq!(value["monthly_timeline"]["rows"][0]["key"], "December-2022");
        assert_eq!(value["busy_days"]["rows"][0]["key"], "Sunday");
    }

    #[test]
    fn test_wrong_date_order_leaves_records_undated() {
        let fixtures = setup_fixtures();
        let value = json_report(&[&fixture(&fixtures, "eu_chat.txt"), "-d", "month-first"]);

        assert_eq!(value["stats"]["messages"], 2);
        assert_eq!(value["monthly_timeline"]["rows"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_streaming_matches_in_memory() {
        let fixtures = setup_fixtures();
        let input = fixture(&fixtures, "us_chat.txt");

        let in_memory = json_report(&[&input, "-d", "mdy"]);
        let streamed = json_report(&[&input, "-d", "mdy", "--streaming"]);
        assert_eq!(in_memory, streamed);
    }

    #[test]
    fn test_event_lines_flag_keeps_system_events() {
        let fixtures = setup_fixtures();
        let input = fixture(&fixtures, "us_chat.txt");

        chatstats_cmd()
            .args([&input, "-d", "mdy", "--event-lines"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Parsed 8 records"));

        let value = json_report(&[&input, "-d", "mdy", "--event-lines"]);
        assert_eq!(value["stats"]["messages"], 8);
        assert_eq!(value["stats"]["media"], 1);
    }

    #[test]
    fn test_empty_export() {
        let fixtures = setup_fixtures();
        let value = json_report(&[&fixture(&fixtures, "empty.txt"), "-d", "mdy"]);

        assert_eq!(value["stats"]["messages"], 0);
        assert_eq!(value["busy_users"]["shares"].as_array().unwrap().len(), 0);
    }
}

// ============================================================================
// Filter Tests
// ============================================================================

mod filters {
    use super::*;

    #[test]
    fn test_user_filter() {
        let fixtures = setup_fixtures();
        let value = json_report(&[&fixture(&fixtures, "us_chat.txt"), "-d", "mdy", "-u", "Bob"]);

        assert_eq!(value["filter"], "Bob");
        assert_eq!(value["stats"]["messages"], 3);
        assert_eq!(value["stats"]["media"], 1);
    }

    #[test]
    fn test_unknown_user_gives_empty_report() {
        let fixtures = setup_fixtures();
        let value = json_report(&[
            &fixture(&fixtures, "us_chat.txt"),
            "-d",
            "mdy",
            "--user",
            "Nobody",
        ]);

        assert_eq!(value["stats"]["messages"], 0);
        assert_eq!(value["emoji"]["rows"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_list_users() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([&fixture(&fixtures, "us_chat.txt"), "-d", "mdy", "--list-users"])
            .assert()
            .success()
            .stdout("Overall\nAlice\nBob\nCarol\n");
    }

    #[test]
    fn test_stop_words_file() {
        let fixtures = setup_fixtures();
        let value = json_report(&[
            &fixture(&fixtures, "us_chat.txt"),
            "-d",
            "mdy",
            "--stop-words",
            &fixture(&fixtures, "stop.txt"),
        ]);

        let words: Vec<&str> = value["most_common_words"]["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["key"].as_str().unwrap())
            .collect();
        assert!(words.contains(&"hiking"));
        assert!(!words.contains(&"up"));
        assert!(!words.contains(&"for"));
    }

    #[test]
    fn test_missing_stop_words_is_not_fatal() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([
                &fixture(&fixtures, "us_chat.txt"),
                "-d",
                "mdy",
                "--stop-words",
                &fixture(&fixtures, "missing_stop.txt"),
            ])
            .assert()
            .success()
            .stderr(predicate::str::contains("stop words unavailable"));
    }
}

// ============================================================================
// Export Tests
// ============================================================================

mod export {
    use super::*;

    #[test]
    fn test_export_csv() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "records.csv");

        chatstats_cmd()
            .args([
                &fixture(&fixtures, "us_chat.txt"),
                "-d",
                "mdy",
                "--export",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Exported 6 records as CSV"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("Author;Body\n"));
        assert!(content.contains("Alice;Who is up for hiking on Saturday? I can drive"));
        assert!(!content.contains("group_notification"));
        assert!(!content.contains("Alice added Bob"));
    }

    #[test]
    fn test_export_csv_with_timestamps() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "records.csv");

        chatstats_cmd()
            .args([
                &fixture(&fixtures, "us_chat.txt"),
                "-d",
                "mdy",
                "--export",
                output.to_str().unwrap(),
                "-t",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("Timestamp;Author;Body\n"));
        assert!(content.contains("2022-12-30 20:17:00;Alice;"));
    }

    #[test]
    fn test_export_format_from_extension() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "records.jsonl");

        chatstats_cmd()
            .args([
                &fixture(&fixtures, "us_chat.txt"),
                "-d",
                "mdy",
                "--export",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 6);
        for line in content.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("author").is_some());
        }
    }

    #[test]
    fn test_export_json_skip_notifications() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "records.out");

        chatstats_cmd()
            .args([
                &fixture(&fixtures, "us_chat.txt"),
                "-d",
                "mdy",
                "--export",
                output.to_str().unwrap(),
                "--format",
                "json",
                "--skip-notifications",
                "--event-lines",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 6);
        assert!(!content.contains("group_notification"));
    }

    #[test]
    fn test_export_with_json_report() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "records.csv");

        let out = chatstats_cmd()
            .args([
                &fixture(&fixtures, "us_chat.txt"),
                "-d",
                "mdy",
                "--json",
                "--export",
                output.to_str().unwrap(),
            ])
            .output()
            .unwrap();

        assert!(out.status.success());
        let _: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
        assert!(output.exists());
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_input_file() {
        chatstats_cmd()
            .args(["does_not_exist.txt", "-d", "mdy"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("❌ Error"));
    }

    #[test]
    fn test_missing_date_order() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .arg(fixture(&fixtures, "us_chat.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("--date-order"));
    }

    #[test]
    fn test_invalid_date_order() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([&fixture(&fixtures, "us_chat.txt"), "-d", "ymd"])
            .assert()
            .failure();
    }

    #[test]
    fn test_invalid_utf8_input() {
        let fixtures = setup_fixtures();
        let path = output_path(&fixtures, "binary.txt");
        fs::write(&path, b"1/1/23, 9:00 AM - A: \xff\xfe\n").unwrap();

        chatstats_cmd()
            .args([path.to_str().unwrap(), "-d", "mdy"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("UTF-8"));
    }

    #[test]
    fn test_export_into_missing_directory() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "no/such/dir/out.csv");

        chatstats_cmd()
            .args([
                &fixture(&fixtures, "us_chat.txt"),
                "-d",
                "mdy",
                "--export",
                output.to_str().unwrap(),
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("❌ Error"));
    }

    #[test]
    fn test_help_and_version() {
        chatstats_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--date-order"))
            .stdout(predicate::str::contains("EXAMPLES"));

        chatstats_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================================================
// Logging Tests
// ============================================================================

mod logging {
    use super::*;

    #[test]
    fn test_verbose_logs_go_to_stderr() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([&fixture(&fixtures, "us_chat.txt"), "-d", "mdy", "--json", "-vv"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("{"))
            .stderr(predicate::str::contains("parsed transcript"));
    }

    #[test]
    fn test_quiet_by_default() {
        let fixtures = setup_fixtures();

        chatstats_cmd()
            .args([&fixture(&fixtures, "us_chat.txt"), "-d", "mdy"])
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }
}
