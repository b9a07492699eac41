#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub const SAMPLE_RESPONSE: &str = r#"{
    "documents": [{
        "doc_identifier": "NIST_CSF_2.0",
        "name": "NIST Cybersecurity Framework",
        "version": "2.0",
        "website": "https://www.nist.gov/cyberframework"
    }],
    "elements": [{
        "doc_identifier": "NIST_CSF_2.0",
        "element_type": "function",
        "element_identifier": "GV",
        "title": "Govern",
        "text": "Establish and monitor cybersecurity risk management strategy."
    }],
    "relationship_types": [{
        "relationship_identifier": "mapped_to",
        "description": "Maps one element to another",
        "value": "mapped_to"
    }],
    "relationships": [{
        "source_element_identifier": "GV",
        "source_doc_identifier": "NIST_CSF_2.0",
        "dest_element_identifier": "ID.AM-1",
        "dest_doc_identifier": "NIST_CSF_2.0",
        "provenance_doc_identifier": "NIST_CSF_2.0",
        "relationship_identifier": "mapped_to"
    }]
}"#;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Loopback HTTP server answering each connection with the next canned response
pub struct MockServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub fn start(responses: Vec<(u16, &str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        let responses: Vec<(u16, String)> = responses
            .into_iter()
            .map(|(status, body)| (status, body.to_string()))
            .collect();

        thread::spawn(move || {
            for (status, body) in responses {
                let Ok((stream, _)) = listener.accept() else {
                    return;
                };
                serve(stream, status, &body, &recorded);
            }
        });

        Self { addr, requests }
    }

    /// Accepts connections but never answers
    pub fn silent() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");

        thread::spawn(move || {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept() {
                held.push(stream);
                thread::sleep(Duration::from_millis(50));
            }
        });

        Self {
            addr,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn serve(stream: TcpStream, status: u16, body: &str, recorded: &Mutex<Vec<RecordedRequest>>) {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    // Record before answering so the client observes the request once it has a response
    recorded.lock().unwrap().push(RecordedRequest {
        method,
        path,
        headers,
    });

    let mut stream = stream;
    let response = format!(
        "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
