use assert_cmd::Command;
use predicates::prelude::*;

fn vertex_chat() -> Command {
    let mut cmd = Command::cargo_bin("vertex-chat").expect("binary");
    cmd.env("RUST_LOG", "info")
        .env_remove("VERTEX_CHAT_LATENCY_MS");
    cmd
}

#[test]
fn version_prints_package_version() {
    vertex_chat()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn ask_echoes_unmatched_query() {
    vertex_chat()
        .args(["--latency-ms", "0", "ask", "What's the weather?"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"You said: "What's the weather?""#))
        .stdout(predicate::str::contains(
            "[1] sheets -> https://vuetifyjs.com/en/components/sheets/",
        ));
}

#[test]
fn ask_without_query_points_at_docs() {
    vertex_chat()
        .args(["--latency-ms", "0", "ask"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"href="https://vuetifyjs.com""#));
}

#[test]
fn ask_reads_latency_from_env() {
    vertex_chat()
        .env("VERTEX_CHAT_LATENCY_MS", "0")
        .args(["ask", "hi", "there"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://vuetifyjs.com/en/introduction/why-vuetify/",
        ));
}

#[test]
fn invalid_latency_env_fails() {
    vertex_chat()
        .env("VERTEX_CHAT_LATENCY_MS", "soon")
        .args(["ask", "hi"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Invalid latency 'soon'"));
}

#[test]
fn click_logs_href() {
    vertex_chat()
        .args(["click", "https://example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chat action href: https://example.com"));
}

#[test]
fn chat_session_opens_links() {
    vertex_chat()
        .args(["--latency-ms", "0", "chat"])
        .write_stdin("Can you show me the docs?\n:open 2\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Here’s something useful:"))
        .stdout(predicate::str::contains(
            "chat action href: https://vuetifyjs.com/en/components/progress-linear/",
        ));
}
