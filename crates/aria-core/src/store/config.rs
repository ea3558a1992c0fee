use aria_config::{ConfigBackend, ConfigError};
use serde::{Deserialize, Serialize};

/// Sección `[catalog]` de `aria.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
  /// Mantener un índice móvil -> usuario en lugar de recorrer la lista.
  /// No cambia el resultado: con móviles repetidos sigue ganando el primero.
  #[serde(default)]
  pub index_users_by_mobile: bool,
}

impl CatalogConfig {
  pub const SECTION: &'static str = "catalog";

  pub fn load() -> Result<Self, ConfigError> {
    let backend = aria_config::backend()?;
    let cfg = backend.load_section_with_default(Self::SECTION)?;
    backend.save_section(Self::SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    aria_config::backend()?.save_section(Self::SECTION, self)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    backend.load_section(Self::SECTION)
  }
}
