use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::process::{Command, Output};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub struct BackendHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for BackendHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

#[derive(Debug)]
pub struct CapturedPublish {
    pub body: String,
}

/// 60-point error-rate fixture with a known breach distribution: no values
/// above 0.1, two above 0.01, fourteen above 0.005, fifty-nine above 0.001.
/// Timestamps are epoch milliseconds, one point per minute.
#[must_use]
pub fn reference_pointlist() -> Vec<(f64, f64)> {
    (0..60)
        .map(|index: usize| {
            let value = if index == 10 || index == 40 {
                0.02
            } else if index % 5 == 1 {
                0.007
            } else if index == 25 {
                0.0005
            } else {
                0.002
            };
            (1_583_603_820_000.0 + index as f64 * 60_000.0, value)
        })
        .collect()
}

fn query_body() -> Result<String, String> {
    let fixture = serde_json::json!({
        "status": "ok",
        "series": [
            {"metric": "requests.errors", "pointlist": reference_pointlist()}
        ]
    });
    serde_json::to_string(&fixture).map_err(|err| format!("encode fixture failed: {}", err))
}

/// Spawn a mock of the two backend endpoints. Publish bodies are forwarded
/// through the returned channel.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_backend()
-> Result<(String, mpsc::Receiver<CapturedPublish>, BackendHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind mock backend failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("mock backend addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let (capture_tx, capture_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let capture = capture_tx.clone();
                    thread::spawn(move || handle_client(stream, &capture));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        capture_rx,
        BackendHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

fn handle_client(mut stream: TcpStream, capture: &mpsc::Sender<CapturedPublish>) {
    let Some((request_line, body)) = read_request(&mut stream) else {
        return;
    };

    let response = if request_line.starts_with("GET /api/v1/query") {
        match query_body() {
            Ok(body_text) => http_response(200, "OK", &body_text),
            Err(_) => http_response(500, "Internal Server Error", "{}"),
        }
    } else if request_line.starts_with("POST /api/v1/series") {
        drop(capture.send(CapturedPublish { body }));
        http_response(202, "Accepted", r#"{"status": "ok"}"#)
    } else {
        http_response(404, "Not Found", r#"{"errors": ["not found"]}"#)
    };

    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

fn read_request(stream: &mut TcpStream) -> Option<(String, String)> {
    let mut buffer: Vec<u8> = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];
    let header_end;

    loop {
        let bytes = stream.read(&mut chunk).ok()?;
        if bytes == 0 {
            return None;
        }
        buffer.extend_from_slice(chunk.get(..bytes)?);
        if let Some(pos) = find_header_end(&buffer) {
            header_end = pos;
            break;
        }
    }

    let header_text = String::from_utf8_lossy(buffer.get(..header_end)?).into_owned();
    let request_line = header_text.lines().next()?.to_owned();
    let content_length = header_text
        .lines()
        .find_map(|line| {
            let (key, value) = line.split_once(':')?;
            if key.trim().eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    let body_start = header_end.checked_add(4)?;
    let mut body = buffer.get(body_start..).unwrap_or_default().to_vec();
    while body.len() < content_length {
        let bytes = stream.read(&mut chunk).ok()?;
        if bytes == 0 {
            break;
        }
        body.extend_from_slice(chunk.get(..bytes)?);
    }

    Some((request_line, String::from_utf8_lossy(&body).into_owned()))
}

fn find_header_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}

fn http_response(status: u16, reason: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    )
}

/// Run the `availr` binary with only the given environment and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_availr(envs: &[(String, String)]) -> Result<Output, String> {
    let bin = availr_bin()?;
    let mut command = Command::new(bin);
    command.env_clear().env("RUST_LOG", "error");
    for (key, value) in envs {
        command.env(key, value);
    }
    command
        .output()
        .map_err(|err| format!("run availr failed: {}", err))
}

fn availr_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_availr").map_or_else(
        || Err("CARGO_BIN_EXE_availr missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
