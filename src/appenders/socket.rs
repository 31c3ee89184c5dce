//! Socket appender for remote logging
//!
//! Sends formatted lines to a remote collector over TCP, UDP or a unix
//! domain socket. Each line is terminated with `\n`; over UDP each line is
//! one datagram.

use crate::core::{Appender, LogLevel, LoggerError, Result};
use std::fmt;
use std::io::{self, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs, UdpSocket};
#[cfg(unix)]
use std::os::unix::net::UnixStream;
use std::str::FromStr;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Transport named by a socket filter's `protocol` property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketProtocol {
    Tcp,
    Udp,
    Unix,
}

impl SocketProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocketProtocol::Tcp => "tcp",
            SocketProtocol::Udp => "udp",
            SocketProtocol::Unix => "unix",
        }
    }
}

impl fmt::Display for SocketProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocketProtocol {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tcp" | "tcp4" | "tcp6" => Ok(SocketProtocol::Tcp),
            "udp" | "udp4" | "udp6" => Ok(SocketProtocol::Udp),
            "unix" => Ok(SocketProtocol::Unix),
            _ => Err(LoggerError::config(
                "socket sink",
                format!("unsupported protocol '{}'", s),
            )),
        }
    }
}

enum Transport {
    Tcp(TcpStream),
    Udp(UdpSocket),
    #[cfg(unix)]
    Unix(UnixStream),
}

impl Transport {
    fn connect(protocol: SocketProtocol, endpoint: &str) -> Result<Self> {
        match protocol {
            SocketProtocol::Tcp => {
                let stream = connect_tcp(endpoint)?;
                // Set timeouts to prevent hanging
                stream.set_write_timeout(Some(WRITE_TIMEOUT))?;
                // Enable TCP_NODELAY for low-latency logging
                stream.set_nodelay(true)?;
                Ok(Transport::Tcp(stream))
            }
            SocketProtocol::Udp => {
                let remote = resolve(endpoint)?[0];
                let local: SocketAddr = if remote.is_ipv4() {
                    ([0u8; 4], 0).into()
                } else {
                    ([0u16; 8], 0).into()
                };
                let socket = UdpSocket::bind(local)?;
                socket.connect(remote)?;
                socket.set_write_timeout(Some(WRITE_TIMEOUT))?;
                Ok(Transport::Udp(socket))
            }
            #[cfg(unix)]
            SocketProtocol::Unix => {
                let stream = UnixStream::connect(endpoint)?;
                stream.set_write_timeout(Some(WRITE_TIMEOUT))?;
                Ok(Transport::Unix(stream))
            }
            #[cfg(not(unix))]
            SocketProtocol::Unix => Err(LoggerError::config(
                "socket sink",
                "unix sockets are not supported on this platform",
            )),
        }
    }

    fn send(&mut self, payload: &[u8]) -> io::Result<()> {
        match self {
            Transport::Tcp(stream) => stream.write_all(payload),
            Transport::Udp(socket) => socket.send(payload).map(|_| ()),
            #[cfg(unix)]
            Transport::Unix(stream) => stream.write_all(payload),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Transport::Tcp(stream) => stream.flush(),
            Transport::Udp(_) => Ok(()),
            #[cfg(unix)]
            Transport::Unix(stream) => stream.flush(),
        }
    }
}

/// Every address `endpoint` resolves to, never empty
fn resolve(endpoint: &str) -> io::Result<Vec<SocketAddr>> {
    let addrs: Vec<SocketAddr> = endpoint.to_socket_addrs()?.collect();
    if addrs.is_empty() {
        return Err(no_address(endpoint));
    }
    Ok(addrs)
}

fn no_address(endpoint: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("no address found for '{}'", endpoint),
    )
}

/// Try each resolved address in turn, bounding every attempt
fn connect_tcp(endpoint: &str) -> io::Result<TcpStream> {
    let mut last_err = None;
    for addr in resolve(endpoint)? {
        match TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT) {
            Ok(stream) => return Ok(stream),
            Err(e) => last_err = Some(e),
        }
    }
    Err(last_err.unwrap_or_else(|| no_address(endpoint)))
}

/// Appender that writes each line to a connected socket
///
/// # Example
///
/// ```no_run
/// use timber::appenders::SocketAppender;
///
/// let appender = SocketAppender::new("tcp", "127.0.0.1:5140")
///     .expect("Failed to connect to log collector");
/// ```
pub struct SocketAppender {
    transport: Option<Transport>,
    protocol: SocketProtocol,
    endpoint: String,
    reconnect_on_error: bool,
}

impl SocketAppender {
    /// Connect to `endpoint` using `protocol` (`tcp`, `udp` or `unix`)
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for an unknown protocol, `IoError` if the
    /// connection can't be established.
    pub fn new(protocol: &str, endpoint: &str) -> Result<Self> {
        let protocol: SocketProtocol = protocol.parse()?;
        let transport = Transport::connect(protocol, endpoint)?;

        Ok(Self {
            transport: Some(transport),
            protocol,
            endpoint: endpoint.to_string(),
            reconnect_on_error: true,
        })
    }

    /// Enable or disable automatic reconnection on errors
    ///
    /// Default: enabled
    #[must_use]
    pub fn with_reconnect(mut self, enable: bool) -> Self {
        self.reconnect_on_error = enable;
        self
    }

    pub fn protocol(&self) -> SocketProtocol {
        self.protocol
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn reconnect(&mut self) -> Result<()> {
        self.transport = Some(Transport::connect(self.protocol, &self.endpoint)?);
        Ok(())
    }
}

impl Appender for SocketAppender {
    fn append(&mut self, _level: LogLevel, line: &str) -> Result<()> {
        let mut payload = String::with_capacity(line.len() + 1);
        payload.push_str(line);
        payload.push('\n');

        if self.transport.is_none() {
            if !self.reconnect_on_error {
                return Err(LoggerError::writer("Socket not connected"));
            }
            // An earlier reconnect failed; retry before dropping this line
            self.reconnect()?;
        }

        let result = match self.transport {
            Some(ref mut transport) => transport.send(payload.as_bytes()),
            None => return Err(LoggerError::writer("Socket not connected")),
        };

        let e = match result {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };

        // Connection lost
        self.transport = None;
        if !self.reconnect_on_error {
            return Err(e.into());
        }

        match self.reconnect() {
            Ok(()) => {
                if let Some(ref mut transport) = self.transport {
                    transport.send(payload.as_bytes())?;
                }
                Ok(())
            }
            Err(reconnect_err) => Err(LoggerError::writer(format!(
                "Failed to send log and reconnect: {} (reconnect: {})",
                e, reconnect_err
            ))),
        }
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut transport) = self.transport {
            transport.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "socket"
    }
}

impl Drop for SocketAppender {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
