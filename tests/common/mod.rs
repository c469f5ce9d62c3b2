//! One-shot HTTP stub used by the fetch and end-to-end tests.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

pub struct StubServer {
    pub base_url: String,
    request_rx: Receiver<String>,
}

impl StubServer {
    /// Serve exactly one request with the given status line and body.
    pub fn respond_with(status: u16, reason: &'static str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let body = body.to_string();
        let (tx, request_rx) = mpsc::channel();

        thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };

            // Drain the request head before answering.
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = tx.send(String::from_utf8_lossy(&request).into_owned());

            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        });

        StubServer {
            base_url: format!("http://{addr}"),
            request_rx,
        }
    }

    /// The raw request the stub received (start line plus headers).
    #[allow(dead_code)]
    pub fn request(&self) -> String {
        self.request_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("stub server saw no request")
    }
}
