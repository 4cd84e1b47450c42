//! # Lectura de Requests
//! src/http/request.rs
//!
//! Del request solo nos interesa el path del recurso. Los bytes recibidos se
//! separan por espacios en blanco y los tres primeros tokens se interpretan
//! por posición:
//!
//! ```text
//! GET /css/site.css HTTP/1.1\r\n
//! Host: localhost:8080\r\n      <- ignorado
//! \r\n
//! ```
//!
//! El parsing nunca falla: si no hay al menos tres tokens el path es `/`.
//! Método y versión no se validan porque nadie los usa después.

/// Tamaño del buffer de lectura
///
/// El request se lee con una sola llamada a `read`. Si el cliente manda más
/// bytes, o los manda en fragmentos, solo se considera lo que llegó en esa
/// primera lectura.
pub const READ_BUFFER_SIZE: usize = 4096;

/// Path usado cuando la request line no se puede interpretar
pub const DEFAULT_PATH: &str = "/";

/// Vista de solo lectura sobre la request line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Método tal como llegó (ej: "GET"); vacío si la línea era inválida
    method: String,

    /// Path solicitado (ej: "/app.js")
    path: String,

    /// Versión tal como llegó (ej: "HTTP/1.1"); vacía si la línea era inválida
    version: String,
}

impl Request {
    /// Parsea los bytes recibidos del cliente
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use static_server::http::Request;
    ///
    /// let request = Request::parse(b"GET /app.js HTTP/1.1\r\n\r\n");
    /// assert_eq!(request.path(), "/app.js");
    ///
    /// let request = Request::parse(b"garbage");
    /// assert_eq!(request.path(), "/");
    /// ```
    pub fn parse(buffer: &[u8]) -> Self {
        let text = String::from_utf8_lossy(buffer);
        let mut tokens = text.split_ascii_whitespace();

        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(method), Some(path), Some(version)) => Request {
                method: method.to_string(),
                path: path.to_string(),
                version: version.to_string(),
            },
            _ => Request {
                method: String::new(),
                path: DEFAULT_PATH.to_string(),
                version: String::new(),
            },
        }
    }

    /// Obtiene el método del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }
}
