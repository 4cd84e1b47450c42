//! Tests de integración para el servidor de contenido estático
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor en un puerto efímero, con un
//! directorio temporal como raíz de contenido.

use static_server::config::Config;
use static_server::server::Server;
use std::fs;
use std::io::{ErrorKind, Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

const INDEX: &str = "<!doctype html><title>inicio</title>";

/// Helper: crea la raíz de contenido con algunos archivos
fn content_root() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), INDEX).unwrap();
    fs::write(dir.path().join("app.js"), "a".repeat(50)).unwrap();
    fs::write(dir.path().join("style.css"), "body { margin: 0; }").unwrap();
    fs::write(dir.path().join("logo.png"), [0x89, b'P', b'N', b'G', 0x00, 0xFF]).unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs").join("notes.md"), "# notas").unwrap();
    dir
}

/// Helper: levanta el servidor en un thread y retorna su dirección
fn start_server(dir: &TempDir) -> SocketAddr {
    let config = Config {
        port: 0,
        host: "127.0.0.1".to_string(),
        root: dir.path().to_path_buf(),
        index: "index.html".into(),
        ..Config::default()
    };

    let server = Server::bind(&config).expect("bind");
    let addr = server.local_addr().unwrap();

    // El accept loop nunca retorna; el thread muere con el proceso de test
    thread::spawn(move || server.run());

    addr
}

/// Helper: envía bytes crudos y retorna la response completa
fn send_raw(addr: SocketAddr, raw: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();

    stream.write_all(raw).unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();
    response
}

fn send_request(addr: SocketAddr, path: &str) -> Vec<u8> {
    send_raw(addr, format!("GET {} HTTP/1.1\r\nHost: localhost\r\n\r\n", path).as_bytes())
}

/// Helper: separa headers y body
fn split_response(response: &[u8]) -> (String, Vec<u8>) {
    let pos = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response sin separador de headers");

    let head = String::from_utf8(response[..pos].to_vec()).unwrap();
    (head, response[pos + 4..].to_vec())
}

#[test]
fn test_root_serves_default_document() {
    let dir = content_root();
    let addr = start_server(&dir);

    let response = send_request(addr, "/");
    let (head, body) = split_response(&response);

    assert_eq!(
        head,
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=UTF-8\r\nContent-Length: {}\r\nConnection: close",
            INDEX.len()
        )
    );
    assert_eq!(body, INDEX.as_bytes());
}

#[test]
fn test_index_html_serves_default_document() {
    let dir = content_root();
    let addr = start_server(&dir);

    assert_eq!(send_request(addr, "/index.html"), send_request(addr, "/"));
}

#[test]
fn test_missing_file_returns_exact_404() {
    let dir = content_root();
    let addr = start_server(&dir);

    let response = send_request(addr, "/missing.txt");

    assert_eq!(
        response,
        b"HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 13\r\nConnection: close\r\n\r\n404 Not Found".to_vec()
    );
}

#[test]
fn test_script_with_exact_length() {
    let dir = content_root();
    let addr = start_server(&dir);

    let (head, body) = split_response(&send_request(addr, "/app.js"));

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("Content-Type: application/javascript\r\n"));
    assert!(head.contains("Content-Length: 50\r\n"));
    assert_eq!(body.len(), 50);
}

#[test]
fn test_binary_file_is_byte_identical() {
    let dir = content_root();
    let addr = start_server(&dir);

    let (head, body) = split_response(&send_request(addr, "/logo.png"));

    assert!(head.contains("Content-Type: image/png\r\n"));
    assert_eq!(body, fs::read(dir.path().join("logo.png")).unwrap());
}

#[test]
fn test_nested_path_and_unknown_suffix() {
    let dir = content_root();
    let addr = start_server(&dir);

    let (head, body) = split_response(&send_request(addr, "/docs/notes.md"));

    assert!(head.contains("Content-Type: text/plain\r\n"));
    assert_eq!(body, b"# notas");
}

#[test]
fn test_directory_returns_404() {
    let dir = content_root();
    let addr = start_server(&dir);

    let response = send_request(addr, "/docs");
    assert!(response.starts_with(b"HTTP/1.1 404 Not Found\r\n"));
}

#[test]
fn test_unparsable_request_serves_default_document() {
    let dir = content_root();
    let addr = start_server(&dir);

    let (_, body) = split_response(&send_raw(addr, b"hola\r\n\r\n"));
    assert_eq!(body, INDEX.as_bytes());
}

#[test]
fn test_client_closing_without_data_does_not_stop_server() {
    let dir = content_root();
    let addr = start_server(&dir);

    drop(TcpStream::connect(addr).unwrap());

    let response = send_request(addr, "/style.css");
    assert!(response.starts_with(b"HTTP/1.1 200 OK\r\n"));
}

#[test]
fn test_multiple_requests_sequentially() {
    let dir = content_root();
    let addr = start_server(&dir);

    for i in 0..5 {
        let response = send_request(addr, "/style.css");
        assert!(response.starts_with(b"HTTP/1.1 200 OK\r\n"), "Request {} failed", i);
    }
}

#[test]
fn test_second_client_waits_for_first() {
    let dir = content_root();
    let addr = start_server(&dir);

    // El primer cliente conecta pero todavía no envía nada
    let mut first = TcpStream::connect(addr).unwrap();
    thread::sleep(Duration::from_millis(100));

    let mut second = TcpStream::connect(addr).unwrap();
    second.write_all(b"GET /app.js HTTP/1.1\r\n\r\n").unwrap();
    second
        .set_read_timeout(Some(Duration::from_millis(300)))
        .unwrap();

    let mut buf = [0u8; 64];
    let err = second.read(&mut buf).expect_err("el segundo cliente no debe ser atendido aún");
    assert!(matches!(err.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut));

    // Al completar el primero, el segundo recibe su respuesta
    first.write_all(b"GET / HTTP/1.1\r\n\r\n").unwrap();
    let mut first_response = Vec::new();
    first.read_to_end(&mut first_response).unwrap();
    assert!(first_response.ends_with(INDEX.as_bytes()));

    second.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    let mut second_response = Vec::new();
    second.read_to_end(&mut second_response).unwrap();
    assert!(second_response.starts_with(b"HTTP/1.1 200 OK\r\n"));
    assert!(second_response.ends_with("a".repeat(50).as_bytes()));
}
