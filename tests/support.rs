use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::process::{Command, Output};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a scripted HTTP server: the first `ok_responses` requests get
/// 200 with rate-limit headers, every later request gets 429 with
/// `Retry-After`. Returns `None` when the sandbox forbids binding.
///
/// # Errors
///
/// Returns an error if the listener cannot be configured.
pub fn spawn_rate_limit_server_or_skip(
    ok_responses: usize,
) -> Result<Option<(String, ServerHandle)>, String> {
    let listener = match TcpListener::bind("127.0.0.1:0") {
        Ok(listener) => listener,
        Err(_) => return Ok(None),
    };
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let served = Arc::new(AtomicUsize::new(0));

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let served = Arc::clone(&served);
                    thread::spawn(move || {
                        let request_index = served.fetch_add(1, Ordering::SeqCst);
                        handle_client(stream, request_index < ok_responses);
                    });
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok(Some((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    )))
}

fn handle_client(mut stream: TcpStream, ok: bool) {
    let mut buffer = [0u8; 1024];
    if stream.read(&mut buffer).is_err() {
        return;
    }
    let response: &[u8] = if ok {
        b"HTTP/1.1 200 OK\r\n\
          X-Rate-Limit-Limit: 100\r\n\
          X-Rate-Limit-Remaining: 5\r\n\
          X-Rate-Limit-Reset: 1700000000\r\n\
          Content-Length: 2\r\n\
          Connection: close\r\n\r\nOK"
    } else {
        b"HTTP/1.1 429 Too Many Requests\r\n\
          X-Rate-Limit-Limit: 100\r\n\
          X-Rate-Limit-Remaining: 0\r\n\
          Retry-After: 30\r\n\
          Content-Length: 2\r\n\
          Connection: close\r\n\r\nNO"
    };
    if stream.write_all(response).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Reserve an ephemeral port and free it again, so connecting to it
/// gets refused.
///
/// # Errors
///
/// Returns an error if no port can be reserved.
pub fn closed_port() -> Result<u16, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind for closed port failed: {}", err))?;
    listener
        .local_addr()
        .map(|addr| addr.port())
        .map_err(|err| format!("closed port addr failed: {}", err))
}

/// Run the `rlprobe` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_rlprobe<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = rlprobe_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .map_err(|err| format!("run rlprobe failed: {}", err))
}

fn rlprobe_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_rlprobe").map_or_else(
        || Err("CARGO_BIN_EXE_rlprobe missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
