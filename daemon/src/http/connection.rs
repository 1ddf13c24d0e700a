use std::io::{self, Read, Write};

use serde::{Serialize, de::DeserializeOwned};

use super::{
    Error,
    HttpResult,
    headers::{
        ContentHeaders,
        ContentType,
        HttpMethod,
        ResponseHeaders,
        find_content_length,
        parse_request_line,
    },
};

const HEADER_LIMIT: usize = 8 * 1024;
const BODY_LIMIT: usize = 4 * 1024;
const RX_CHUNK_SIZE: usize = 512;

/// HTTP connection context
pub struct HttpConnection<S> {
    pub method: HttpMethod,
    pub path: String,

    stream: S,
    content_length: usize,
    /// Body bytes received together with the headers
    body_head: Vec<u8>,
}

impl<S: Read + Write> HttpConnection<S> {
    /// Read the request line and headers from `stream`.
    pub fn from_stream(mut stream: S) -> Result<Self, Error> {
        let (buf, header_end) = read_heading(&mut stream)?;

        let header_str = std::str::from_utf8(&buf[..header_end]).map_err(|_| Error::Parse)?;
        let (method, path, rest) = parse_request_line(header_str).ok_or(Error::Parse)?;
        let content_length = find_content_length(rest).unwrap_or(0);
        if content_length > BODY_LIMIT {
            return Err(Error::TooLarge(BODY_LIMIT));
        }

        Ok(Self {
            method,
            path: path.to_owned(),
            stream,
            content_length,
            body_head: buf[header_end..].to_vec(),
        })
    }

    /// Get request method and path
    pub fn route(&self) -> (HttpMethod, &str) {
        (self.method, self.path.as_str())
    }

    pub fn write_headers(&mut self, headers: &ResponseHeaders) -> HttpResult {
        headers.write_to(&mut self.stream)?;
        self.stream.flush()?;
        Ok(())
    }

    pub fn write_body(&mut self, body: &[u8]) -> HttpResult {
        self.stream.write_all(body)?;
        self.stream.flush()?;
        Ok(())
    }

    /// Write `data` as a JSON response with `headers` status.
    pub fn write_json_with<T: Serialize>(
        &mut self,
        headers: ResponseHeaders,
        data: &T,
    ) -> HttpResult {
        let body = serde_json::to_vec(data)?;
        let headers =
            headers.with_content(ContentHeaders::new(ContentType::Json).with_length(body.len()));
        self.write_headers(&headers)?;
        self.write_body(&body)
    }

    /// Write `data` as a successful JSON response.
    pub fn write_json<T: Serialize>(&mut self, data: &T) -> HttpResult {
        self.write_json_with(ResponseHeaders::success(), data)
    }

    /// Read JSON from the request body
    pub fn read_json<T: DeserializeOwned>(&mut self) -> Result<T, Error> {
        let body = self.read_body()?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn read_body(&mut self) -> Result<Vec<u8>, Error> {
        if self.content_length == 0 {
            return Err(Error::NoData);
        }

        let mut body = std::mem::take(&mut self.body_head);
        let mut chunk = [0u8; RX_CHUNK_SIZE];
        while body.len() < self.content_length {
            let n = self.stream.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..n]);
        }
        body.truncate(self.content_length);

        Ok(body)
    }

    #[cfg(test)]
    pub(super) fn into_stream(self) -> S {
        self.stream
    }
}

/// Read the start line and headers.
///
/// Returns the received bytes and the position right after the blank line
/// ending the headers.
fn read_heading(stream: &mut impl Read) -> Result<(Vec<u8>, usize), Error> {
    let mut buf = Vec::with_capacity(RX_CHUNK_SIZE);
    let mut chunk = [0u8; RX_CHUNK_SIZE];
    loop {
        let n = stream.read(&mut chunk)?;
        if n == 0 && buf.is_empty() {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        if n == 0 {
            return Err(Error::Parse);
        }
        // The terminator may straddle two reads.
        let search_from = buf.len().saturating_sub(3);
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf[search_from..].windows(4).position(|w| w == b"\r\n\r\n") {
            return Ok((buf, search_from + pos + 4));
        }
        if buf.len() >= HEADER_LIMIT {
            return Err(Error::TooLarge(HEADER_LIMIT));
        }
    }
}
