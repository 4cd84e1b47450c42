//! # Socket Pasivo
//! src/server/socket.rs
//!
//! Creación del socket que escucha y la interfaz mínima que el accept loop
//! necesita de él. Las diferencias entre plataformas quedan dentro de
//! `socket2`; el resto del servidor solo ve un [`Listener`].

use crate::error::ServerError;
use socket2::{Domain, Protocol, Socket, Type};
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};

/// Capacidad de aceptar conexiones entrantes
pub trait Listener {
    /// Conexión aceptada: un stream bidireccional de bytes
    type Conn: Read + Write;

    /// Bloquea hasta que llega una conexión
    fn accept(&self) -> io::Result<(Self::Conn, SocketAddr)>;

    /// Dirección local en la que escucha
    fn local_addr(&self) -> io::Result<SocketAddr>;
}

impl Listener for TcpListener {
    type Conn = TcpStream;

    fn accept(&self) -> io::Result<(TcpStream, SocketAddr)> {
        TcpListener::accept(self)
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        TcpListener::local_addr(self)
    }
}

/// Crea el socket pasivo: socket → SO_REUSEADDR → bind → listen
///
/// Si algún paso falla el socket se cierra al salir de la función (drop)
/// y se retorna el error correspondiente.
pub fn bind_listener(address: SocketAddr, backlog: i32) -> Result<TcpListener, ServerError> {
    let socket = Socket::new(
        Domain::for_address(address),
        Type::STREAM,
        Some(Protocol::TCP),
    )
    .map_err(ServerError::Socket)?;

    // Permite reiniciar el servidor sin esperar a que expire TIME_WAIT
    socket
        .set_reuse_address(true)
        .map_err(|source| ServerError::SetOption {
            option: "SO_REUSEADDR",
            source,
        })?;

    socket
        .bind(&address.into())
        .map_err(|source| ServerError::Bind {
            address: address.to_string(),
            source,
        })?;

    socket
        .listen(backlog)
        .map_err(|source| ServerError::Listen { backlog, source })?;

    Ok(socket.into())
}
