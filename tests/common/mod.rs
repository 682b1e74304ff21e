#![allow(dead_code)]

use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};

/// Path of the compiled binary under test.
pub const BIN: &str = env!("CARGO_BIN_EXE_aacbook");

/// Runs `aacbook` with `args` to completion.
pub fn run(args: &[&str]) -> Output {
    std::process::Command::new(BIN)
        .args(args)
        .env_remove("AACBOOK_CONFIG")
        .env_remove("AACBOOK_DOCS_DIR")
        .env_remove("AACBOOK_DOCS_URL")
        .env_remove("AACBOOK_LOG_LEVEL")
        .output()
        .expect("failed to run aacbook")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Writes a docs directory with two chapters and a two-slide deck.
pub fn write_fixture(dir: &Path) {
    std::fs::write(
        dir.join("01_inledning.md"),
        "# Inledning\n\nArkitektur som kod beskriver [versionshantering](03_versionhantering.md).\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("03_versionhantering.md"),
        "# Versionshantering\n\n```mermaid\ngraph TD\n  A --> B\n```\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("slides.json"),
        r#"[
            {"id": "intro", "title": "Intro", "mdPath": "intro.md", "x": 0, "y": 0},
            {"id": "iac", "title": "IaC", "mdPath": "iac.md", "x": 800, "y": 0, "zoom": 1.5}
        ]"#,
    )
    .unwrap();
}

/// A running `aacbook serve` on an ephemeral port.
pub struct SiteProcess {
    child: Child,
    pub base_url: String,
    pub client: reqwest::Client,
}

impl SiteProcess {
    /// Spawns the server and reads stderr until it reports its address.
    pub async fn start(docs_dir: &Path, extra: &[&str]) -> Self {
        let mut args = vec![
            "serve",
            "--bind",
            "127.0.0.1:0",
            "--docs-dir",
            docs_dir.to_str().unwrap(),
            "--submit-delay",
            "10ms",
            "-v",
            "--color",
            "never",
        ];
        args.extend_from_slice(extra);

        let mut child = Command::new(BIN)
            .args(&args)
            .env_remove("AACBOOK_CONFIG")
            .env_remove("AACBOOK_LOG_LEVEL")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .expect("failed to spawn aacbook");

        let stderr = child.stderr.take().expect("stderr not captured");
        let mut reader = BufReader::new(stderr);
        let mut line = String::new();
        let mut port: Option<u16> = None;

        let deadline = tokio::time::Instant::now() + Duration::from_secs(10);
        while tokio::time::Instant::now() < deadline {
            line.clear();
            let read = tokio::time::timeout(Duration::from_secs(5), reader.read_line(&mut line))
                .await
                .expect("timed out waiting for server startup")
                .expect("failed to read stderr");
            assert!(read > 0, "server exited before reporting its address");

            if line.contains("HTTP server listening") {
                if let Some(start) = line.find("127.0.0.1:") {
                    let digits: String = line[start + "127.0.0.1:".len()..]
                        .chars()
                        .take_while(char::is_ascii_digit)
                        .collect();
                    port = digits.parse().ok();
                }
                break;
            }
        }

        // Keep draining stderr so the child never blocks on a full pipe.
        tokio::spawn(async move {
            let mut sink = String::new();
            while reader.read_line(&mut sink).await.unwrap_or(0) > 0 {
                sink.clear();
            }
        });

        let port = port.expect("failed to discover server port from stderr");
        Self {
            child,
            base_url: format!("http://127.0.0.1:{port}"),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("request failed")
    }

    /// Sends SIGTERM and waits for the exit status code.
    pub async fn terminate(mut self) -> Option<i32> {
        let pid = self.child.id().expect("child already exited");
        std::process::Command::new("kill")
            .args(["-TERM", &pid.to_string()])
            .status()
            .expect("failed to send SIGTERM");
        let status = tokio::time::timeout(Duration::from_secs(10), self.child.wait())
            .await
            .expect("server did not shut down")
            .expect("failed to wait for server");
        status.code()
    }
}
