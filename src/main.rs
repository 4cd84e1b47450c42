//! # Static Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor de contenido estático.

use static_server::config::Config;
use static_server::server::Server;
use tracing::Level;

fn main() {
    // Sin puerto válido clap termina aquí con el uso en stderr
    let config = Config::new();

    let level = if config.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level)
        .init();

    config.print_summary();

    let server = match Server::bind(&config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Error fatal: {}", e);
            std::process::exit(1);
        }
    };

    server.run()
}
