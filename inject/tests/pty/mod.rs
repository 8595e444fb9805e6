//! PTY-based integration tests for ttyinject.
//!
//! These tests run the ttyinject binary with a pseudo-terminal as its
//! controlling terminal and standard error, then watch the master side:
//! bytes pushed into the input queue are echoed back by the line
//! discipline.

use portable_pty::{native_pty_system, CommandBuilder, PtySize};
use std::io::Read;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Kernels built without legacy TIOCSTI refuse it to unprivileged callers.
fn tiocsti_enabled() -> bool {
    match std::fs::read_to_string("/proc/sys/dev/tty/legacy_tiocsti") {
        Ok(s) => s.trim() != "0",
        Err(_) => true,
    }
}

/// Spawn a thread forwarding everything read from the PTY master.
fn spawn_reader<R: Read + Send + 'static>(mut reader: R) -> mpsc::Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = [0u8; 4096];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break, // EOF
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    rx
}

/// Collect master output until `needle` shows up or `timeout` passes.
fn read_until(rx: &mpsc::Receiver<Vec<u8>>, needle: &[u8], timeout: Duration) -> Vec<u8> {
    let deadline = Instant::now() + timeout;
    let mut out = Vec::new();
    while !out.windows(needle.len()).any(|w| w == needle) {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        match rx.recv_timeout(deadline - now) {
            Ok(chunk) => out.extend_from_slice(&chunk),
            Err(_) => break,
        }
    }
    out
}

/// Run ttyinject on a fresh PTY, returning its exit code and the echo.
fn run_in_pty(text: &str, echo: &[u8]) -> (u32, Vec<u8>) {
    let pty_system = native_pty_system();
    let pair = pty_system
        .openpty(PtySize {
            rows: 25,
            cols: 80,
            pixel_width: 0,
            pixel_height: 0,
        })
        .unwrap();

    let mut cmd = CommandBuilder::new(env!("CARGO_BIN_EXE_ttyinject"));
    cmd.arg(text);

    let mut child = pair.slave.spawn_command(cmd).unwrap();
    drop(pair.slave);

    let rx = spawn_reader(pair.master.try_clone_reader().unwrap());
    let status = child.wait().unwrap();
    let output = if echo.is_empty() {
        Vec::new()
    } else {
        read_until(&rx, echo, Duration::from_secs(5))
    };

    (status.exit_code(), output)
}

/// Test: typed text is echoed by the terminal in order.
#[test]
fn test_pty_inject_echo() {
    if !tiocsti_enabled() {
        eprintln!("skipping: TIOCSTI disabled by dev.tty.legacy_tiocsti");
        return;
    }

    let (code, output) = run_in_pty("hi", b"hi");
    assert_eq!(code, 0);
    assert!(
        output.windows(2).any(|w| w == b"hi"),
        "echo not seen: {:?}",
        String::from_utf8_lossy(&output)
    );
}

/// Test: a longer command line keeps its byte order.
#[test]
fn test_pty_inject_order() {
    if !tiocsti_enabled() {
        eprintln!("skipping: TIOCSTI disabled by dev.tty.legacy_tiocsti");
        return;
    }

    let text = "echo 0123456789";
    let (code, output) = run_in_pty(text, text.as_bytes());
    assert_eq!(code, 0);
    assert!(
        output.windows(text.len()).any(|w| w == text.as_bytes()),
        "echo not seen: {:?}",
        String::from_utf8_lossy(&output)
    );
}

/// Test: empty text succeeds on a real terminal.
#[test]
fn test_pty_inject_empty() {
    let (code, _output) = run_in_pty("", b"");
    assert_eq!(code, 0);
}
