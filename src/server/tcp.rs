//! # Servidor TCP Secuencial
//! src/server/tcp.rs
//!
//! Atiende una conexión a la vez, de principio a fin:
//!
//! ```text
//! accept → read → resolve → build → send → close → accept ...
//! ```
//!
//! Mientras una conexión está en curso las demás esperan en el backlog del
//! kernel. Un cliente lento o que no envía nada bloquea al servidor: no hay
//! timeouts.

use crate::config::Config;
use crate::error::{ConnectionError, ServerError};
use crate::http::request::READ_BUFFER_SIZE;
use crate::http::{Request, Response};
use crate::resolver::Resolver;
use crate::server::socket::{self, Listener};
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener};

/// Servidor de contenido estático
pub struct Server<L: Listener = TcpListener> {
    listener: L,
    resolver: Resolver,
}

impl Server<TcpListener> {
    /// Valida la configuración y deja el socket escuchando
    pub fn bind(config: &Config) -> Result<Self, ServerError> {
        config.validate()?;

        let address = config.address()?;
        let listener = socket::bind_listener(address, config.backlog)?;
        let port = listener.local_addr().map(|a| a.port()).unwrap_or(config.port);
        tracing::info!("Servidor corriendo en el puerto {}", port);

        let resolver = Resolver::new(&config.root, &config.index);
        tracing::info!("Sirviendo archivos desde {}", resolver.root().display());
        let default_document = resolver.default_document_path();
        if !default_document.is_file() {
            tracing::warn!(
                "No se encontró el documento por defecto {}; `/` responderá 404",
                default_document.display()
            );
        }

        Ok(Self::new(listener, resolver))
    }
}

impl<L: Listener> Server<L> {
    pub fn new(listener: L, resolver: Resolver) -> Self {
        Self { listener, resolver }
    }

    /// Dirección en la que escucha el servidor
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept loop. Nunca retorna: los errores de una conexión se registran
    /// y se pasa a la siguiente.
    pub fn run(&self) -> ! {
        loop {
            if let Err(e) = self.accept_one() {
                tracing::warn!("Conexión abandonada: {}", e);
            }
        }
    }

    /// Acepta una conexión y la atiende completa
    ///
    /// La conexión se cierra al terminar, haya o no respuesta.
    pub fn accept_one(&self) -> Result<(), ConnectionError> {
        tracing::info!("Esperando conexiones...");

        let (stream, peer) = self.listener.accept().map_err(ConnectionError::Accept)?;
        tracing::debug!("Nueva conexión desde {}", peer);

        self.handle_connection(stream)
    }

    /// Procesa una conexión: una sola lectura, resolución y respuesta
    ///
    /// Si el cliente cerró sin enviar nada no se responde. El stream se
    /// consume y se cierra al salir en todos los caminos.
    pub fn handle_connection<S: Read + Write>(&self, mut stream: S) -> Result<(), ConnectionError> {
        let mut buffer = [0u8; READ_BUFFER_SIZE];
        let bytes_read = stream.read(&mut buffer).map_err(ConnectionError::Read)?;

        if bytes_read == 0 {
            tracing::debug!("El cliente cerró la conexión sin enviar datos");
            return Ok(());
        }

        let request = Request::parse(&buffer[..bytes_read]);
        let file_path = self.resolver.resolve(request.path());
        tracing::debug!(
            "{} {} {} -> {}",
            request.method(),
            request.path(),
            request.version(),
            file_path.display()
        );

        let response = Response::from_file(&file_path);

        stream
            .write_all(&response.to_bytes())
            .and_then(|_| stream.flush())
            .map_err(|source| ConnectionError::Write {
                path: request.path().to_string(),
                source,
            })?;

        tracing::info!(
            "{} {} ({} bytes)",
            request.path(),
            response.status(),
            response.body().len()
        );

        Ok(())
    }
}
