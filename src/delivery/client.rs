//! TCP client for the recipient daemon

use super::reply::{classify_reply, ReplyClass};
use crate::error::DeliveryError;
use std::io::{self, ErrorKind, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

/// Time allowed for the TCP handshake
pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Silence after which the daemon's reply is considered complete
pub const READ_TIMEOUT: Duration = Duration::from_millis(1000);

/// Result of one delivery attempt
#[derive(Debug)]
pub enum DeliveryOutcome {
    /// Daemon acknowledged the request
    Success,
    /// Daemon replied, but not with `answer <n>` / `success`
    MalformedReply {
        /// Reply exactly as received
        response: String,
    },
    /// Connection, write or read failed
    TransportError(DeliveryError),
}

impl DeliveryOutcome {
    /// Whether the daemon acknowledged the request
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Short label for output and logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::MalformedReply { .. } => "malformed-reply",
            Self::TransportError(_) => "transport-error",
        }
    }
}

/// Client for the newline-delimited daemon protocol
///
/// Each call to [`DeliveryClient::deliver`] opens its own connection and
/// closes it before returning, whatever the outcome.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryClient {
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl DeliveryClient {
    /// Create a client with the protocol's default timeouts
    pub fn new() -> Self {
        Self {
            connect_timeout: CONNECT_TIMEOUT,
            read_timeout: READ_TIMEOUT,
        }
    }

    /// Create a client with custom timeouts
    ///
    /// Zero durations are rejected by the socket layer, so they are raised
    /// to one millisecond.
    pub fn with_timeouts(connect_timeout: Duration, read_timeout: Duration) -> Self {
        let floor = Duration::from_millis(1);
        Self {
            connect_timeout: connect_timeout.max(floor),
            read_timeout: read_timeout.max(floor),
        }
    }

    /// Connect timeout in use
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Read timeout in use
    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Send `body` to the daemon and classify its reply
    pub fn deliver(&self, host: &str, port: u16, body: &str) -> DeliveryOutcome {
        match self.exchange(host, port, body) {
            Ok(raw) => match classify_reply(&raw) {
                ReplyClass::Success => {
                    log::debug!("Daemon at {}:{} acknowledged request", host, port);
                    DeliveryOutcome::Success
                }
                ReplyClass::Malformed => DeliveryOutcome::MalformedReply {
                    response: String::from_utf8_lossy(&raw).into_owned(),
                },
            },
            Err(e) => DeliveryOutcome::TransportError(e),
        }
    }

    /// Write the request and collect the raw reply
    ///
    /// The stream is owned by this frame and dropped on every return path,
    /// which closes the connection.
    fn exchange(&self, host: &str, port: u16, body: &str) -> Result<Vec<u8>, DeliveryError> {
        let mut stream = self.connect(host, port)?;
        stream
            .set_read_timeout(Some(self.read_timeout))
            .map_err(DeliveryError::Read)?;

        stream
            .write_all(body.as_bytes())
            .and_then(|()| stream.flush())
            .map_err(DeliveryError::Write)?;
        log::debug!("Wrote {} byte request to {}:{}", body.len(), host, port);

        read_reply(&mut stream)
    }

    /// Connect to the first reachable address `host` resolves to
    ///
    /// All resolved addresses share one `connect_timeout` budget.
    fn connect(&self, host: &str, port: u16) -> Result<TcpStream, DeliveryError> {
        let addrs = (host, port)
            .to_socket_addrs()
            .map_err(|source| DeliveryError::Unresolved {
                host: host.to_string(),
                port,
                source,
            })?;

        connect_within(addrs, self.connect_timeout, |addr, timeout| {
            TcpStream::connect_timeout(addr, timeout)
        })
        .map_err(|last_err| match last_err {
            Some(source) => DeliveryError::Connect {
                address: format!("{}:{}", host, port),
                source,
            },
            None => DeliveryError::Unresolved {
                host: host.to_string(),
                port,
                source: io::Error::new(ErrorKind::NotFound, "no addresses returned"),
            },
        })
    }
}

/// Try `addrs` in order until one connects or `budget` runs out
///
/// Each attempt gets only what is left of the budget. Returns the last
/// attempt's error, or `None` when there was nothing to try.
fn connect_within<T, I, F>(addrs: I, budget: Duration, mut attempt: F) -> Result<T, Option<io::Error>>
where
    I: IntoIterator<Item = SocketAddr>,
    F: FnMut(&SocketAddr, Duration) -> io::Result<T>,
{
    let started = Instant::now();
    let mut last_err = None;

    for addr in addrs {
        let remaining = budget.saturating_sub(started.elapsed());
        if remaining.is_zero() {
            log::debug!("Connect budget spent, skipping {}", addr);
            break;
        }
        match attempt(&addr, remaining) {
            Ok(connection) => return Ok(connection),
            Err(e) => {
                log::debug!("Connect to {} failed: {}", addr, e);
                last_err = Some(e);
            }
        }
    }

    Err(last_err)
}

impl Default for DeliveryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Read until the peer closes or stays silent for the read timeout
///
/// The daemon keeps the connection open after replying, so a timeout marks
/// the end of the reply rather than a failure.
pub(crate) fn read_reply<R: Read>(reader: &mut R) -> Result<Vec<u8>, DeliveryError> {
    let mut reply = Vec::new();
    let mut buf = [0u8; 512];

    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => reply.extend_from_slice(&buf[..n]),
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => break,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(DeliveryError::Read(e)),
        }
    }

    Ok(reply)
}
