//! # Módulo HTTP
//!
//! Subconjunto mínimo de HTTP/1.1 para servir archivos estáticos:
//!
//! - Lectura de la request line (solo importa el path)
//! - Construcción de responses con headers fijos
//! - Códigos de estado 200 y 404
//! - Inferencia de `Content-Type` por sufijo
//!
//! ### Formato de Request
//!
//! ```text
//! GET /path HTTP/1.1\r\n
//! ...resto ignorado...
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/css\r\n
//! Content-Length: 8\r\n
//! Connection: close\r\n
//! \r\n
//! body { }
//! ```

pub mod mime;
pub mod request;
pub mod response;
pub mod status;

pub use request::Request;
pub use response::Response;
pub use status::StatusCode;
