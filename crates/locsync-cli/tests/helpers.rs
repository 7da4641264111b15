#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::process::Command;
use std::sync::{Arc, Mutex};
use std::{fs, thread};

const SETTINGS: &[&str] = &[
    "translations_folder",
    "base_language",
    "target_languages",
    "openai_api_key",
    "openai_model",
    "openai_base_url",
    "request_timeout_ms",
    "prune_stale",
    "log_dir",
    "RUST_LOG",
];

/// Binary with a clean environment: no inherited settings, no user config,
/// working directory inside `cwd`.
pub fn bin_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("locsync-cli").expect("locsync-cli built");
    for name in SETTINGS {
        cmd.env_remove(name);
    }
    cmd.env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env("NO_COLOR", "1")
        .current_dir(cwd);
    cmd
}

pub fn write_rel(root: &Path, rel: &str, content: &str) {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, content).unwrap();
}

pub fn read_rel(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap_or_else(|e| panic!("read {rel}: {e}"))
}

/// Minimal chat-completions stand-in. Answers `[locale] text` inside a code
/// fence, or no choices at all when the text contains `FAIL`.
pub struct FakeBackend {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl FakeBackend {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake backend");
        let addr = listener.local_addr().expect("local addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                serve_one(stream, &seen);
            }
        });
        Self {
            base_url: format!("http://{addr}/v1"),
            requests,
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

fn serve_one(mut stream: TcpStream, seen: &Mutex<Vec<serde_json::Value>>) -> Option<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };
    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let len = head
        .lines()
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            name.trim()
                .eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    while buf.len() < header_end + len {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let request: serde_json::Value = serde_json::from_slice(&buf[header_end..]).ok()?;
    // recorded before answering so the count is final once the client exits
    seen.lock().unwrap().push(request.clone());

    let prompt = request["messages"][1]["content"].as_str().unwrap_or_default();
    let rest = prompt.strip_prefix("Translate this text to ").unwrap_or(prompt);
    let (locale, text) = rest.split_once(": ").unwrap_or(("?", rest));
    let answer = if text.contains("FAIL") {
        serde_json::json!({ "choices": [] })
    } else {
        serde_json::json!({
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": format!("```\n[{locale}] {text}\n```") }
            }]
        })
    };
    let body = answer.to_string();
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).ok()?;
    stream.flush().ok()
}
