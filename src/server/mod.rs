//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto (socket pasivo con SO_REUSEADDR)
//! 2. Acepta una conexión a la vez
//! 3. Lee la request line y resuelve el archivo
//! 4. Envía la respuesta y cierra la conexión

pub mod socket;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use socket::Listener;
pub use tcp::Server;
