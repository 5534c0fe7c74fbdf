//! Mock implementations for testing
//!
//! Provides a scripted recipient daemon and a capturing report sink for unit
//! tests that exercise real sockets.

use crate::debug_log::ReportSink;

use std::io::{ErrorKind, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Report sink that keeps every report in memory
#[derive(Debug, Default)]
pub struct CapturingSink {
    info: Mutex<Vec<String>>,
    error: Mutex<Vec<String>>,
}

impl CapturingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Informational reports received so far
    pub fn infos(&self) -> Vec<String> {
        self.info.lock().unwrap().clone()
    }

    /// Error reports received so far
    pub fn errors(&self) -> Vec<String> {
        self.error.lock().unwrap().clone()
    }
}

impl ReportSink for CapturingSink {
    fn info(&self, text: &str) {
        self.info.lock().unwrap().push(text.to_string());
    }

    fn error(&self, text: &str) {
        self.error.lock().unwrap().push(text.to_string());
    }
}

/// How the mock daemon behaves after replying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterReply {
    /// Keep the connection open until the client closes it
    HoldOpen,
    /// Close the connection immediately
    Close,
}

/// Recipient daemon serving a fixed number of connections with one reply
pub struct MockDaemon {
    port: u16,
    requests: Receiver<String>,
    handle: Option<JoinHandle<()>>,
}

impl MockDaemon {
    /// Start a daemon on an ephemeral localhost port
    pub fn start(reply: &[u8], after: AfterReply, connections: usize) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = mpsc::channel();
        let reply = reply.to_vec();

        let handle = thread::spawn(move || {
            let mut workers = Vec::new();
            for _ in 0..connections {
                let Ok((stream, _)) = listener.accept() else {
                    break;
                };
                let tx = tx.clone();
                let reply = reply.clone();
                workers.push(thread::spawn(move || serve(stream, &reply, after, tx)));
            }
            for worker in workers {
                let _ = worker.join();
            }
        });

        Self {
            port,
            requests: rx,
            handle: Some(handle),
        }
    }

    /// Port the daemon listens on
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Next request received, waiting up to five seconds
    pub fn next_request(&self) -> Option<String> {
        self.requests.recv_timeout(Duration::from_secs(5)).ok()
    }
}

impl Drop for MockDaemon {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn serve(mut stream: TcpStream, reply: &[u8], after: AfterReply, tx: Sender<String>) {
    let _ = stream.set_read_timeout(Some(Duration::from_millis(100)));

    // The client never half-closes, so a short silence ends the request.
    let mut request = Vec::new();
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut buf = [0u8; 1024];
    while Instant::now() < deadline {
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => request.extend_from_slice(&buf[..n]),
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                if !request.is_empty() {
                    break;
                }
            }
            Err(_) => break,
        }
    }

    let _ = stream.write_all(reply);
    let _ = stream.flush();

    if after == AfterReply::HoldOpen {
        let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
        let _ = stream.read(&mut buf);
    }

    let _ = tx.send(String::from_utf8_lossy(&request).into_owned());
}

/// A localhost port with nothing listening on it
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
