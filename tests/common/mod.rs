//! A one-shot HTTP stub for driving the binary end to end.

#![allow(clippy::unwrap_used, dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

/// A request as seen by the stub.
#[derive(Debug)]
pub struct Captured {
    pub request_line: String,
    pub body: String,
}

/// Serves exactly one request with `body`, then shuts down.
pub struct Stub {
    pub url: String,
    captured: Receiver<Captured>,
}

impl Stub {
    pub fn serve(body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/api", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let Ok((stream, _)) = listener.accept() else {
                return;
            };
            let mut reader = BufReader::new(stream);

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':')
                    && name.eq_ignore_ascii_case("content-length")
                {
                    content_length = value.trim().parse().unwrap();
                }
            }

            let mut request_body = vec![0; content_length];
            reader.read_exact(&mut request_body).unwrap();

            let response = format!(
                "HTTP/1.1 200 OK\r\n\
                 Content-Type: application/json; charset=utf-8\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            let _ = tx.send(Captured {
                request_line: request_line.trim_end().to_string(),
                body: String::from_utf8(request_body).unwrap(),
            });
        });

        Self { url, captured: rx }
    }

    /// Returns `true` if no request has reached the stub so far.
    pub fn untouched(&self) -> bool {
        self.captured.try_recv().is_err()
    }

    /// The request the stub answered, if any arrived.
    pub fn captured(&self) -> Option<Captured> {
        self.captured.recv_timeout(Duration::from_secs(5)).ok()
    }
}
