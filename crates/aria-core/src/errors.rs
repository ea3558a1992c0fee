use std::fmt;
use thiserror::Error;

/// Tipo de entidad cuya búsqueda falló.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
  User,
  Artist,
  Album,
  Playlist,
  Song,
}

impl fmt::Display for EntityKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      EntityKind::User => "user",
      EntityKind::Artist => "artist",
      EntityKind::Album => "album",
      EntityKind::Playlist => "playlist",
      EntityKind::Song => "song",
    };
    f.write_str(name)
  }
}

/// Error del núcleo de Aria.
///
/// El catálogo solo puede fallar al no encontrar una entidad; los duplicados
/// están permitidos y ninguna operación muta nada antes de fallar. Las capas
/// superiores deciden cómo presentarlo.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
  #[error("{entity} not found: {key}")]
  NotFound { entity: EntityKind, key: String },
}

impl CoreError {
  pub fn not_found(entity: EntityKind, key: impl Into<String>) -> Self {
    CoreError::NotFound { entity, key: key.into() }
  }

  /// Entidad afectada, útil para mapear a respuestas externas.
  pub fn entity(&self) -> EntityKind {
    match self {
      CoreError::NotFound { entity, .. } => *entity,
    }
  }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn message_names_entity_and_key() {
    let err = CoreError::not_found(EntityKind::Album, "Blue Train");

    assert_eq!(err.to_string(), "album not found: Blue Train");
    assert_eq!(err.entity(), EntityKind::Album);
  }
}
