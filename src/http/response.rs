//! # Construcción de Respuestas HTTP
//!
//! Toda respuesta lleva exactamente los mismos headers, en el mismo orden,
//! seguidos de una línea vacía y el body:
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: application/javascript\r\n
//! Content-Length: 50\r\n
//! Connection: close\r\n
//! \r\n
//! <50 bytes del archivo>
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use static_server::http::{Response, StatusCode};
//!
//! let response = Response::not_found();
//! assert_eq!(response.status(), StatusCode::NotFound);
//!
//! let bytes = response.to_bytes();
//! // Ahora puedes enviar `bytes` por el socket
//! ```

use super::mime::content_type_for;
use super::StatusCode;
use std::fs;
use std::path::Path;

/// Body fijo de la respuesta 404
pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// Representa una respuesta HTTP/1.1 completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200 o 404)
    status: StatusCode,

    /// Headers en el orden en que se escriben
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta con los headers fijos del servidor
    ///
    /// `Content-Length` se calcula a partir del body.
    fn new(status: StatusCode, content_type: &str, body: Vec<u8>) -> Self {
        let headers = vec![
            ("Content-Type".to_string(), content_type.to_string()),
            ("Content-Length".to_string(), body.len().to_string()),
            ("Connection".to_string(), "close".to_string()),
        ];

        Self {
            status,
            headers,
            body,
        }
    }

    /// Respuesta exitosa con el contenido de un archivo
    ///
    /// # Ejemplo
    /// ```
    /// use static_server::http::{Response, StatusCode};
    ///
    /// let response = Response::file(b"body { }".to_vec(), "text/css");
    /// assert_eq!(response.status(), StatusCode::Ok);
    /// assert_eq!(response.header("Content-Length"), Some("8"));
    /// ```
    pub fn file(body: Vec<u8>, content_type: &str) -> Self {
        Self::new(StatusCode::Ok, content_type, body)
    }

    /// Respuesta 404 con body `404 Not Found` en texto plano
    pub fn not_found() -> Self {
        Self::new(
            StatusCode::NotFound,
            "text/plain",
            NOT_FOUND_BODY.as_bytes().to_vec(),
        )
    }

    /// Lee el archivo completo y construye la respuesta
    ///
    /// Cualquier fallo al abrir o leer (no existe, sin permisos, es un
    /// directorio) produce la respuesta 404.
    pub fn from_file(path: &Path) -> Self {
        match fs::read(path) {
            Ok(body) => Self::file(body, content_type_for(path)),
            Err(e) => {
                tracing::debug!("No se pudo leer {}: {}", path.display(), e);
                Self::not_found()
            }
        }
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(128 + self.body.len());

        let status_line = format!("HTTP/1.1 {}\r\n", self.status);
        result.extend_from_slice(status_line.as_bytes());

        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene el valor de un header específico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header_name, _)| header_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
