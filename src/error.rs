//! # Errores del Servidor
//! src/error.rs
//!
//! Dos familias de errores:
//!
//! - [`ServerError`]: fatales. Ocurren al preparar el socket pasivo y
//!   terminan el proceso con estado distinto de cero.
//! - [`ConnectionError`]: afectan a una sola conexión. Se registran en el
//!   log y el accept loop sigue atendiendo.
//!
//! Un archivo inexistente no es un error: se responde 404.

use std::io;
use thiserror::Error;

/// Errores fatales durante el arranque del servidor
#[derive(Debug, Error)]
pub enum ServerError {
    /// La configuración no es utilizable
    #[error("configuración inválida: {0}")]
    InvalidConfig(String),

    /// No se pudo crear el socket
    #[error("socket: {0}")]
    Socket(#[source] io::Error),

    /// No se pudo configurar una opción del socket (ej: SO_REUSEADDR)
    #[error("setsockopt {option}: {source}")]
    SetOption {
        option: &'static str,
        #[source]
        source: io::Error,
    },

    /// No se pudo asociar el socket a la dirección
    #[error("bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    /// No se pudo marcar el socket como pasivo
    #[error("listen (backlog {backlog}): {source}")]
    Listen {
        backlog: i32,
        #[source]
        source: io::Error,
    },
}

/// Errores que abortan el manejo de una conexión
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// Falló el `accept` (ej: llamada interrumpida)
    #[error("accept: {0}")]
    Accept(#[source] io::Error),

    /// Falló la lectura del request
    #[error("recv: {0}")]
    Read(#[source] io::Error),

    /// Falló el envío de la respuesta para `path`
    #[error("send {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}
