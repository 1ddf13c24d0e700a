use std::{
    io::{self, Read, Write},
    net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use super::{HttpResult, ResponseHeaders, connection::HttpConnection};

const READ_TIMEOUT: Duration = Duration::from_secs(30);

pub trait HttpHandler {
    fn handle_request<S: Read + Write>(&self, conn: HttpConnection<S>) -> HttpResult;
}

pub struct HttpServer<T: HttpHandler> {
    handler: Arc<T>,
    listener: TcpListener,
}

impl<T> HttpServer<T>
where
    T: HttpHandler + Send + Sync + 'static,
{
    pub fn bind(handler: T, addr: impl ToSocketAddrs) -> io::Result<Self> {
        let listener = TcpListener::bind(addr)?;
        if let Ok(addr) = listener.local_addr() {
            log::info!("HTTP server listening on http://{addr}");
        }
        Ok(Self {
            handler: Arc::new(handler),
            listener,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections until `stop` is set.
    ///
    /// Every connection is served on its own thread. The flag is checked
    /// between connections.
    pub fn listen_and_serve(&self, stop: &Arc<AtomicBool>) {
        for stream in self.listener.incoming() {
            if stop.load(Ordering::Relaxed) {
                break;
            }

            let stream = match stream {
                Ok(stream) => stream,
                Err(err) => {
                    log::warn!("http_server: accept error: {err}");
                    continue;
                }
            };

            let handler = self.handler.clone();
            let spawned = thread::Builder::new()
                .name("http-conn".to_owned())
                .spawn(move || serve_tcp(handler.as_ref(), stream));
            if let Err(err) = spawned {
                log::warn!("http_server: unable to spawn connection thread: {err}");
            }
        }
    }
}

fn serve_tcp<T: HttpHandler>(handler: &T, stream: TcpStream) {
    let peer = stream.peer_addr().ok();
    if let Err(err) = stream.set_read_timeout(Some(READ_TIMEOUT)) {
        log::warn!("http_server: unable to set read timeout: {err}");
    }
    log::trace!("http_server: connection from {peer:?}");
    serve_connection(handler, stream);
}

/// Read one request from `stream` and answer it.
///
/// Requests that can not be parsed are answered with their error status.
fn serve_connection<T: HttpHandler, S: Read + Write>(handler: &T, mut stream: S) {
    let conn = match HttpConnection::from_stream(&mut stream) {
        Ok(conn) => conn,
        Err(err) => {
            log::debug!("http_server: connection startup error: {err}");
            if let Some(code) = err.status_code() {
                if let Err(err) = ResponseHeaders::from_code(code).write_to(&mut stream) {
                    log::debug!("http_server: unable to reject request: {err}");
                }
            }
            return;
        }
    };
    log::debug!("{:?} {}", conn.method, conn.path);

    if let Err(err) = handler.handle_request(conn) {
        log::warn!("http_server: connection error: {err}");
    }
}

#[cfg(test)]
mod tests {
    use glowstrip::{AnimationConfig, AnimationStore, Mode};

    use super::*;
    use crate::{
        config::StripConfig,
        driver::{MAX_LEDS, Strip},
        http::{ControlRoutes, connection::tests::MockStream},
    };

    fn store() -> Arc<AnimationStore<Strip, MAX_LEDS>> {
        let strip = Strip::dry_run(&StripConfig::default());
        Arc::new(AnimationStore::new(strip, &AnimationConfig::default()))
    }

    #[test]
    fn test_idle_connection_does_not_block_requests() {
        let store = store();
        let server = HttpServer::bind(ControlRoutes::new(store.clone()), "127.0.0.1:0").unwrap();
        let addr = server.local_addr().unwrap();
        let stop = Arc::new(AtomicBool::new(false));
        thread::spawn(move || server.listen_and_serve(&stop));

        let _idle = TcpStream::connect(addr).unwrap();

        let mut client = TcpStream::connect(addr).unwrap();
        client
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        client
            .write_all(b"POST /api/toggle HTTP/1.1\r\nHost: strip\r\n\r\n")
            .unwrap();
        let mut response = String::new();
        client.read_to_string(&mut response).unwrap();

        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert_eq!(store.snapshot().mode, Mode::Solid);
    }

    #[test]
    fn test_oversized_request_is_answered() {
        let routes = ControlRoutes::new(store());
        let mut stream =
            MockStream::new("POST /api/color HTTP/1.1\r\nContent-Length: 100000\r\n\r\n");
        serve_connection(&routes, &mut stream);
        assert!(stream.response().starts_with("HTTP/1.1 413 Request Entity Too Large\r\n"));
    }

    #[test]
    fn test_malformed_request_is_answered() {
        let routes = ControlRoutes::new(store());
        let mut stream = MockStream::new("BREW /pot HTTP/1.1\r\n\r\n");
        serve_connection(&routes, &mut stream);
        assert!(stream.response().starts_with("HTTP/1.1 400 Bad Request\r\n"));
    }

    #[test]
    fn test_closed_connection_is_not_answered() {
        let routes = ControlRoutes::new(store());
        let mut stream = MockStream::new("");
        serve_connection(&routes, &mut stream);
        assert!(stream.response().is_empty());
    }
}
