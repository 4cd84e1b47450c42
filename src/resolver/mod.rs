//! # Resolución de Recursos
//! src/resolver/mod.rs
//!
//! Mapea el path del request a un archivo bajo la raíz de contenido.
//!
//! ```text
//! Request → Resolver → PathBuf → Response
//! ```
//!
//! - `/` y `/index.html` apuntan al documento por defecto.
//! - Cualquier otro path pierde su `/` inicial y se une a la raíz.
//!
//! No se normalizan segmentos `..`, no se siguen symlinks y no se
//! canonicaliza nada: `/../secreto.txt` resuelve a `<raíz>/../secreto.txt`.
//! Un path con doble barra (`//etc/hosts`) queda absoluto tras quitar la
//! primera y `Path::join` lo usa tal cual.

use std::path::{Path, PathBuf};

/// Paths que se sirven con el documento por defecto
const DEFAULT_DOCUMENT_PATHS: [&str; 2] = ["/", "/index.html"];

/// Resuelve paths de requests a rutas del sistema de archivos
#[derive(Debug, Clone)]
pub struct Resolver {
    /// Directorio base para los paths que no son el documento por defecto
    root: PathBuf,

    /// Documento servido para `/` y `/index.html`, relativo a `root`
    default_document: PathBuf,
}

impl Resolver {
    /// Crea un resolver para una raíz y un documento por defecto
    ///
    /// # Ejemplo
    /// ```
    /// use static_server::resolver::Resolver;
    /// use std::path::Path;
    ///
    /// let resolver = Resolver::new(".", "backend/index.html");
    /// assert_eq!(resolver.resolve("/"), Path::new("./backend/index.html"));
    /// assert_eq!(resolver.resolve("/app.js"), Path::new("./app.js"));
    /// ```
    pub fn new(root: impl Into<PathBuf>, default_document: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            default_document: default_document.into(),
        }
    }

    /// Resuelve el path de un request a un archivo
    pub fn resolve(&self, requested_path: &str) -> PathBuf {
        if DEFAULT_DOCUMENT_PATHS.contains(&requested_path) {
            return self.default_document_path();
        }

        // Solo se quita una barra; sin barra inicial el path se usa tal cual
        let relative = requested_path
            .strip_prefix('/')
            .unwrap_or(requested_path);

        self.root.join(relative)
    }

    /// Ruta completa del documento por defecto
    pub fn default_document_path(&self) -> PathBuf {
        self.root.join(&self.default_document)
    }

    /// Raíz de contenido
    pub fn root(&self) -> &Path {
        &self.root
    }
}
