//! Exit status and output of the `instagram_report` binary.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CREDENTIALS: [(&str, &str); 3] = [
    ("METRICOOL_USER_TOKEN", "TOK"),
    ("METRICOOL_USER_ID", "UID"),
    ("METRICOOL_BLOG_ID", "BID"),
];

/// Runs from an empty directory with no Metricool variables inherited, so a
/// developer's `.env` or shell exports cannot leak in.
fn cmd(workdir: &TempDir, base_url: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("instagram_report");
    cmd.current_dir(workdir.path()).env("METRICOOL_BASE_URL", base_url);
    for (name, _) in CREDENTIALS {
        cmd.env_remove(name);
    }
    cmd
}

fn with_credentials(mut cmd: Command) -> Command {
    cmd.envs(CREDENTIALS);
    cmd
}

async fn server_answering(body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_credentials_exit_non_zero_without_requests() {
    let server = server_answering(json!([])).await;
    let workdir = TempDir::new().expect("create temp dir");

    // Any one, any two, or all three credentials absent.
    for mask in 0..7usize {
        let mut command = cmd(&workdir, &server.uri());
        for (i, (name, value)) in CREDENTIALS.iter().enumerate() {
            if mask & (1 << i) != 0 {
                command.env(name, value);
            }
        }

        command
            .assert()
            .failure()
            .stdout("")
            .stderr(contains("Config: missing required environment variables"));
    }

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn successful_run_exits_zero_with_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/instagram/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [1, 2, 3] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let workdir = TempDir::new().expect("create temp dir");

    with_credentials(cmd(&workdir, &server.uri()))
        .assert()
        .success()
        .stdout(
            "instagram_posts: 3 items\n\
             instagram_reels: 0 items\n\
             instagram_stories: 0 items\n\
             analytics_posts: 0 items\n\
             analytics_reels: 0 items\n\
             analytics_stories: 0 items\n\
             analytics_posts_hashtags: 0 items\n",
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn http_failure_exits_non_zero_naming_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/analytics/reels/instagram"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid userToken"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let workdir = TempDir::new().expect("create temp dir");

    with_credentials(cmd(&workdir, &server.uri()))
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("Fetch analytics_reels"))
        .stderr(contains("401"));
}
