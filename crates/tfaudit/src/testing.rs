//! One-shot loopback HTTP stub for exercising the fetcher.
//!
//! Binds `127.0.0.1:0`, serves exactly one canned response, and records the
//! request head so tests can inspect the query string and headers.

use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};

use url::Url;

/// Path the stub pretends to serve.
pub const AUDIT_TRAIL_PATH: &str = "/api/v2/organization/audit-trail";

/// Upper bound on the request head we are willing to buffer.
const MAX_HEAD_BYTES: usize = 16 * 1024;

/// A server that answers a single request and then exits.
pub struct StubServer {
    addr: SocketAddr,
    handle: JoinHandle<io::Result<RecordedRequest>>,
}

impl StubServer {
    /// Starts a stub answering with `status` and a JSON `body`.
    pub fn respond(status: u16, body: impl Into<String>) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        let body = body.into();

        let handle = thread::spawn(move || serve_once(&listener, status, &body));

        Ok(Self { addr, handle })
    }

    /// Full audit-trail endpoint URL pointing at this stub.
    pub fn endpoint(&self) -> String {
        format!("http://{}{AUDIT_TRAIL_PATH}", self.addr)
    }

    /// Waits for the request to be served and returns what was received.
    ///
    /// Blocks forever if nothing ever connects.
    pub fn request(self) -> io::Result<RecordedRequest> {
        self.handle
            .join()
            .map_err(|_| io::Error::other("stub server thread panicked"))?
    }
}

/// The request line and headers of the served request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    headers: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Path component of the request target.
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    /// Decoded value of a query parameter.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let url = Url::parse(&format!("http://stub{}", self.target)).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

fn serve_once(listener: &TcpListener, status: u16, body: &str) -> io::Result<RecordedRequest> {
    let (mut stream, _) = listener.accept()?;

    let head = read_head(&mut stream)?;
    let request = parse_head(&head)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "malformed request head"))?;

    stream.write_all(http_response(status, "application/json", body).as_bytes())?;
    stream.flush()?;

    Ok(request)
}

fn read_head(stream: &mut impl Read) -> io::Result<String> {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];

    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf)?;
        if n == 0 || head.len() > MAX_HEAD_BYTES {
            break;
        }
        head.extend_from_slice(&buf[..n]);
    }

    Ok(String::from_utf8_lossy(&head).into_owned())
}

/// Parses "GET /path?query HTTP/1.1" plus headers.
fn parse_head(head: &str) -> Option<RecordedRequest> {
    let mut lines = head.split("\r\n");
    let mut parts = lines.next()?.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();

    let headers = lines
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect();

    Some(RecordedRequest {
        method,
        target,
        headers,
    })
}

/// Builds a minimal HTTP/1.1 response.
fn http_response(status: u16, content_type: &str, body: &str) -> String {
    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    };

    format!(
        "HTTP/1.1 {status} {reason}\r\n\
         Content-Type: {content_type}\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {body}",
        body.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_head() {
        let request = parse_head(
            "GET /api/v2/organization/audit-trail?since=2024-01-01T00%3A00%3A00Z HTTP/1.1\r\n\
             authorization: Bearer abc\r\n\
             host: 127.0.0.1\r\n\r\n",
        )
        .unwrap();

        assert_eq!(request.method, "GET");
        assert_eq!(request.path(), AUDIT_TRAIL_PATH);
        assert_eq!(request.header("Authorization"), Some("Bearer abc"));
        assert_eq!(
            request.query_param("since").as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
        assert_eq!(request.query_param("page"), None);
    }

    #[test]
    fn test_parse_head_rejects_empty() {
        assert!(parse_head("").is_none());
    }

    #[test]
    fn test_http_response_format() {
        let resp = http_response(401, "application/json", "{}");
        assert!(resp.starts_with("HTTP/1.1 401 Unauthorized\r\n"));
        assert!(resp.contains("Content-Length: 2\r\n"));
        assert!(resp.ends_with("{}"));
    }
}
