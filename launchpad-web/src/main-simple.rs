//! Static file server for the launchpad front end
//!
//! Serves the Leptos WASM app from the dist/ directory on port 8080.
//! Unknown paths fall back to index.html so client-side routes deep-link.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;

fn main() {
    let addr = "127.0.0.1:8080";
    let listener = TcpListener::bind(addr).expect("Failed to bind to port 8080");

    println!("Launchpad server running at http://{}", addr);
    println!("Serving from dist/ directory");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = full_path.split_once('?').map(|(p, _)| p).unwrap_or(full_path);

    // Map the request onto dist/; directories and missing files fall back
    // to index.html for client-side routing.
    let mut file_path = PathBuf::from("dist");
    file_path.push(path.strip_prefix('/').unwrap_or(path));
    if path == "/" || path.is_empty() || file_path.is_dir() || !file_path.exists() {
        file_path = PathBuf::from("dist/index.html");
    }

    let content_type = match file_path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    };

    let (status, body, content_type) = match fs::read(&file_path) {
        Ok(contents) => ("200 OK", contents, content_type),
        Err(_) => {
            eprintln!("File not found: {}", file_path.display());
            (
                "404 NOT FOUND",
                b"<!DOCTYPE html><html><body><h1>Not found</h1></body></html>".to_vec(),
                "text/html; charset=utf-8",
            )
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {}", e);
    }
    let _ = stream.flush();
}
