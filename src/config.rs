//! # Configuración del Servidor
//! src/config.rs
//!
//! El único argumento obligatorio es el puerto. Si falta o no es un número
//! válido, clap imprime el uso en stderr y el proceso termina con estado
//! distinto de cero antes de crear cualquier socket.
//!
//! ## Ejemplos de uso
//!
//! ```bash
//! ./static_server 8080
//! ./static_server 8080 --root ./public --index index.html
//! ./static_server 3000 --host 127.0.0.1 --backlog 16 -v
//! ```

use crate::error::ServerError;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Backlog por defecto del socket pasivo
pub const DEFAULT_BACKLOG: i32 = 8;

/// Configuración del servidor de contenido estático
#[derive(Debug, Clone, Parser)]
#[command(name = "static_server")]
#[command(about = "Servidor HTTP de contenido estático, una conexión a la vez")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto TCP en el que escucha el servidor
    pub port: u16,

    /// Host/IP en el que escucha (por defecto todas las interfaces)
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Raíz de contenido contra la que se resuelven los paths
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Documento servido para `/` y `/index.html`, relativo a la raíz
    #[arg(long, default_value = "backend/index.html")]
    pub index: PathBuf,

    /// Tamaño de la cola de conexiones pendientes
    #[arg(long, default_value_t = DEFAULT_BACKLOG)]
    pub backlog: i32,

    /// Habilita logs de nivel debug
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// El host debe ser una IP literal, v4 o v6.
    ///
    /// # Ejemplo
    /// ```rust
    /// use static_server::config::Config;
    ///
    /// let mut config = Config::default();
    /// assert_eq!(config.address().unwrap().to_string(), "0.0.0.0:8080");
    ///
    /// config.host = "::1".to_string();
    /// assert_eq!(config.address().unwrap().to_string(), "[::1]:8080");
    /// ```
    pub fn address(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            ServerError::InvalidConfig(format!(
                "host must be an IP address, got '{}'",
                self.host
            ))
        })?;

        Ok(SocketAddr::new(ip, self.port))
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), ServerError> {
        self.address()?;

        if self.backlog < 1 {
            return Err(ServerError::InvalidConfig(
                "backlog must be >= 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        tracing::info!("Host:       {}", self.host);
        tracing::info!("Puerto:     {}", self.port);
        tracing::info!("Raíz:       {}", self.root.display());
        tracing::info!("Documento:  {}", self.index.display());
        tracing::info!("Backlog:    {}", self.backlog);
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".to_string(),
            root: PathBuf::from("."),
            index: PathBuf::from("backend/index.html"),
            backlog: DEFAULT_BACKLOG,
            verbose: false,
        }
    }
}
