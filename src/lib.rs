//! # Static Server
//! src/lib.rs
//!
//! Servidor HTTP mínimo para contenido estático (HTML/CSS/JS/imágenes)
//! sobre TCP. Atiende una conexión a la vez y la cierra después de cada
//! respuesta.
//!
//! ## Arquitectura
//!
//! - `server`: socket pasivo y accept loop
//! - `http`: lectura del request y construcción de la respuesta
//! - `resolver`: mapeo de paths a archivos bajo la raíz de contenido
//! - `config`: argumentos de línea de comandos
//! - `error`: errores fatales y errores por conexión
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use static_server::config::Config;
//! use static_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::bind(&config).expect("Error al iniciar servidor");
//! server.run();
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod resolver;
pub mod server;
