//! Test doubles for registry lookups.

use super::PackageChecker;
use crate::types::RegistryCheck;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// In-memory checker. Names without an entry answer 404.
#[derive(Default)]
pub struct StaticChecker {
    answers: HashMap<String, RegistryCheck>,
    calls: Mutex<Vec<String>>,
}

impl StaticChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, answer: RegistryCheck) -> Self {
        self.answers.insert(name.to_string(), answer);
        self
    }

    /// Names checked so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PackageChecker for StaticChecker {
    async fn check(&self, package_name: &str) -> RegistryCheck {
        self.calls.lock().unwrap().push(package_name.to_string());
        self.answers
            .get(package_name)
            .cloned()
            .unwrap_or(RegistryCheck::Unavailable { status: 404 })
    }
}

/// Serve `status` for each request path in `routes` and 404 for the rest.
/// Returns the base URL (`http://127.0.0.1:PORT`).
pub async fn serve_statuses(routes: &[(&str, u16)]) -> String {
    let routes: Vec<(&str, u16, Option<&str>)> = routes
        .iter()
        .map(|(path, status)| (*path, *status, None))
        .collect();
    serve_routes(&routes).await
}

/// Like [`serve_statuses`], with an optional `Location` header per route.
pub async fn serve_routes(routes: &[(&str, u16, Option<&str>)]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes: HashMap<String, (u16, Option<String>)> = routes
        .iter()
        .map(|(path, status, location)| {
            (path.to_string(), (*status, (*location).map(str::to_string)))
        })
        .collect();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let head = String::from_utf8_lossy(&request);
                let path = head.split_whitespace().nth(1).unwrap_or("/");
                let (status, location) = routes.get(path).cloned().unwrap_or((404, None));
                let reason = match status {
                    200 => "OK",
                    301 => "Moved Permanently",
                    404 => "Not Found",
                    _ => "Other",
                };
                let location = location
                    .map(|l| format!("Location: {}\r\n", l))
                    .unwrap_or_default();
                let response = format!(
                    "HTTP/1.1 {} {}\r\n{}Content-Length: 0\r\nConnection: close\r\n\r\n",
                    status, reason, location
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

/// A base URL on which nothing is listening.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
