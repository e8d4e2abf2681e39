use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process::Command;
use std::thread;

const SUCCESS_PREFIX: &str = "GET http://localhost:10300/motion status: ";
const FAILURE_PREFIX: &str = "Error making GET request: ";

fn run() -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_motion-probe"))
        .output()
        .expect("failed to run motion-probe")
}

fn reply_ok(mut stream: TcpStream) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    let _ = stream.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK");
}

#[test]
fn prints_one_line_and_exits_zero() {
    let output = run();

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with(SUCCESS_PREFIX) || stdout.starts_with(FAILURE_PREFIX),
        "unexpected output: {stdout}"
    );
    assert!(stdout.ends_with('\n'));
}

#[test]
fn reports_sensor_reply_on_motion_port() {
    // Port 10300 is fixed; skip when something else already holds it.
    let Ok(listener) = TcpListener::bind("127.0.0.1:10300") else {
        return;
    };
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            reply_ok(stream);
        }
    });

    let output = run();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "GET http://localhost:10300/motion status: 200, response: OK\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn ignores_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_motion-probe"))
        .arg("--port")
        .arg("1")
        .output()
        .expect("failed to run motion-probe");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(SUCCESS_PREFIX) || stdout.starts_with(FAILURE_PREFIX));
}
