//! Integration tests for exec mode against mocked services.


use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

/// Creates a temp HYPE_HOME directory for test isolation.
fn temp_hype_home() -> TempDir {
    TempDir::new().expect("create temp hype home")
}

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

const BRIEF_MARKDOWN: &str = "# Falcons\n\n## Core Narrative\nHometown heroes.\n\n\
                              ## Key Themes\n- **Legacy:** decades of spirit\n";

#[tokio::test]
async fn test_exec_generates_full_campaign_from_services() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let hype_home = temp_hype_home();
    let mock_server = MockServer::start().await;

    fixtures::write_production_config(hype_home.path(), "https://tracks.example.com");

    // brief generation (x2) and image-prompt summarization share the endpoint
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(fixtures::chat_completion(BRIEF_MARKDOWN))
        .expect(3)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/generations"))
        .respond_with(fixtures::generation_job("gen-123"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/generations/gen-123"))
        .respond_with(fixtures::generation_poll("https://images.example.com/falcons.jpg"))
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("hype")
        .env("HYPE_HOME", hype_home.path())
        .env("HYPE_BLOCK_REAL_API", "1")
        .env("BRIEF_API_KEY", "test-brief-key")
        .env("BRIEF_BASE_URL", mock_server.uri())
        .env("VISUAL_API_KEY", "test-visual-key")
        .env("VISUAL_BASE_URL", mock_server.uri())
        .args([
            "exec",
            "--team",
            "Falcons",
            "--passcode",
            "KBS2025",
            "--genre",
            "rock-anthem",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Falcons Campaign"))
        .stdout(predicate::str::contains("Hometown heroes."))
        .stdout(predicate::str::contains("https://images.example.com/falcons.jpg"))
        .stdout(predicate::str::contains("Rock Anthem Victory Anthem"))
        .stdout(predicate::str::contains("https://tracks.example.com/rock-anthem-"));
}

#[tokio::test]
async fn test_exec_legacy_visual_credential_alias() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let hype_home = temp_hype_home();
    let mock_server = MockServer::start().await;

    fixtures::write_production_config(hype_home.path(), "https://tracks.example.com");

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(fixtures::chat_completion(BRIEF_MARKDOWN))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/generations"))
        .respond_with(fixtures::generation_job("gen-456"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/generations/gen-456"))
        .respond_with(fixtures::generation_poll("https://images.example.com/legacy.jpg"))
        .mount(&mock_server)
        .await;

    // the visual key is provisioned only under the historical variable name
    cargo_bin_cmd!("hype")
        .env("HYPE_HOME", hype_home.path())
        .env("HYPE_BLOCK_REAL_API", "1")
        .env("BRIEF_API_KEY", "test-brief-key")
        .env("BRIEF_BASE_URL", mock_server.uri())
        .env("LEORNADO_API_KEY", "legacy-visual-key")
        .env("VISUAL_BASE_URL", mock_server.uri())
        .args(["exec", "--team", "Falcons", "--passcode", "kbs2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://images.example.com/legacy.jpg"));
}

#[test]
fn test_exec_rejects_wrong_passcode() {
    let hype_home = temp_hype_home();

    cargo_bin_cmd!("hype")
        .env("HYPE_HOME", hype_home.path())
        .args(["exec", "--team", "Falcons", "--passcode", "KBS2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid passcode"));
}

#[test]
fn test_exec_rejects_unknown_genre() {
    let hype_home = temp_hype_home();

    cargo_bin_cmd!("hype")
        .env("HYPE_HOME", hype_home.path())
        .args([
            "exec",
            "--team",
            "Falcons",
            "--passcode",
            "kbs2025",
            "--genre",
            "polka",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown genre"));
}

#[test]
fn test_exec_rejects_out_of_range_brief_choice() {
    let hype_home = temp_hype_home();

    cargo_bin_cmd!("hype")
        .env("HYPE_HOME", hype_home.path())
        .args([
            "exec",
            "--team",
            "Falcons",
            "--passcode",
            "kbs2025",
            "--brief",
            "3",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--brief must be 1 or 2"));
}

#[test]
fn test_exec_test_mode_uses_local_generators() {
    let hype_home = temp_hype_home();
    // default config: test mode; zero the simulated latency for CI speed
    std::fs::write(
        hype_home.path().join("config.toml"),
        "mode = \"test\"\nsimulated_delay_ms = 0\n",
    )
    .unwrap();

    cargo_bin_cmd!("hype")
        .env("HYPE_HOME", hype_home.path())
        .env("HYPE_BLOCK_REAL_API", "1")
        .args([
            "exec",
            "--team",
            "Falcons",
            "--passcode",
            "Kbs2025",
            "--brief",
            "2",
            "--genre",
            "orchestral-epic",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Falcons Campaign"))
        .stdout(predicate::str::contains("## Strategic Narrative"))
        .stdout(predicate::str::contains("Campaign Visual (sample)"))
        .stdout(predicate::str::contains("Orchestral Epic Anthem"));
}
