//! Arranque del subscriber de `tracing` a partir de la sección `[logging]`.

use crate::backend::ConfigBackend;
use crate::paths::ConfigError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Formato de salida de los logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
  /// Multilínea, pensado para desarrollo.
  Pretty,
  /// Una línea por evento.
  #[default]
  Compact,
  /// JSON estructurado, una línea por evento.
  Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
  /// Directiva de filtro (`"info"`, `"aria_core=debug"`, ...). `RUST_LOG` tiene prioridad.
  #[serde(default = "default_level")]
  pub level: String,

  #[serde(default)]
  pub format: LogFormat,

  /// Mostrar el módulo de origen de cada evento.
  #[serde(default = "default_display_target")]
  pub display_target: bool,
}

fn default_level() -> String {
  "info".into()
}

fn default_display_target() -> bool {
  true
}

impl Default for LoggingConfig {
  fn default() -> Self {
    LoggingConfig {
      level: default_level(),
      format: LogFormat::default(),
      display_target: default_display_target(),
    }
  }
}

impl LoggingConfig {
  pub const SECTION: &'static str = "logging";

  /// Carga `[logging]` (con valores por defecto) y la vuelve a escribir
  /// para que el fichero refleje la configuración efectiva.
  pub fn load() -> Result<Self, ConfigError> {
    let backend = crate::backend()?;
    let cfg = backend.load_section_with_default(Self::SECTION)?;
    backend.save_section(Self::SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    crate::backend()?.save_section(Self::SECTION, self)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    backend.load_section(Self::SECTION)
  }

  /// Construye el filtro: `RUST_LOG` si está definido, si no `level`.
  pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_from_default_env()
      .or_else(|_| EnvFilter::try_new(&self.level))
      .map_err(|e| ConfigError::Other(format!("invalid log filter {:?}: {e}", self.level)))
  }
}

/// Instala el subscriber global. Solo puede hacerse una vez por proceso;
/// los intentos posteriores devuelven error.
pub fn init_logging(cfg: &LoggingConfig) -> Result<(), ConfigError> {
  let builder = tracing_subscriber::fmt()
    .with_env_filter(cfg.env_filter()?)
    .with_target(cfg.display_target);

  let installed = match cfg.format {
    LogFormat::Pretty => builder.pretty().try_init(),
    LogFormat::Compact => builder.compact().try_init(),
    LogFormat::Json => builder.json().try_init(),
  };

  installed.map_err(|e| ConfigError::Other(format!("logging already initialised: {e}")))
}
