//! # Inferencia de Content-Type
//!
//! El tipo se decide únicamente por el sufijo del path resuelto. La
//! comparación distingue mayúsculas (`INDEX.HTML` cae en `text/plain`) y
//! la tabla se recorre en orden: la primera coincidencia gana.

use std::path::Path;

/// Tipo usado cuando ningún sufijo coincide
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Sufijos reconocidos, en orden de prioridad
const CONTENT_TYPES: &[(&str, &str)] = &[
    (".html", "text/html; charset=UTF-8"),
    (".js", "application/javascript"),
    (".css", "text/css"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
];

/// Selecciona el `Content-Type` para un archivo según su sufijo
///
/// # Ejemplo
/// ```
/// use static_server::http::mime::content_type_for;
/// use std::path::Path;
///
/// assert_eq!(content_type_for(Path::new("site/app.js")), "application/javascript");
/// assert_eq!(content_type_for(Path::new("notes.md")), "text/plain");
/// ```
pub fn content_type_for(path: &Path) -> &'static str {
    let path = path.to_string_lossy();

    CONTENT_TYPES
        .iter()
        .find(|(suffix, _)| path.ends_with(suffix))
        .map(|(_, content_type)| *content_type)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
