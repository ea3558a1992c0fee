mod backend;
mod io;
pub mod logging;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use io::atomic_write_str;
pub use logging::{LogFormat, LoggingConfig, init_logging};
pub use paths::{AriaPaths, BASE_DIR_ENV, ConfigError};

use once_cell::sync::OnceCell;

static CONFIG_BACKEND: OnceCell<TomlConfigBackend> = OnceCell::new();

/// Backend global del proceso, inicializado la primera vez que se pide.
///
/// Resolver los directorios puede fallar (sin `$HOME`, permisos...), así que
/// el error se propaga y un intento posterior vuelve a probar.
pub fn backend() -> Result<&'static TomlConfigBackend, ConfigError> {
  CONFIG_BACKEND.get_or_try_init(|| AriaPaths::detect().map(TomlConfigBackend::new))
}
