use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Declara un identificador opaco respaldado por un UUID v4.
///
/// Las entidades del catálogo se distinguen por identidad, no por nombre:
/// dos artistas llamados igual siguen siendo artistas distintos.
macro_rules! uuid_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct $name(Uuid);

    impl $name {
      /// Genera un nuevo identificador único.
      pub fn new() -> Self {
        $name(Uuid::new_v4())
      }

      pub fn from_uuid(u: Uuid) -> Self {
        $name(u)
      }

      pub fn as_uuid(&self) -> Uuid {
        self.0
      }
    }

    impl Default for $name {
      fn default() -> Self {
        Self::new()
      }
    }

    impl From<Uuid> for $name {
      fn from(u: Uuid) -> Self {
        $name(u)
      }
    }

    impl From<$name> for Uuid {
      fn from(id: $name) -> Self {
        id.0
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
      }
    }
  };
}

uuid_id!(
  /// Identificador de un [`Artist`](crate::domain::Artist).
  ArtistId
);
uuid_id!(
  /// Identificador de un [`Album`](crate::domain::Album).
  AlbumId
);
uuid_id!(
  /// Identificador de una [`Song`](crate::domain::Song).
  SongId
);
uuid_id!(
  /// Identificador de una [`Playlist`](crate::domain::Playlist).
  PlaylistId
);
uuid_id!(
  /// Identificador de un [`User`](crate::domain::User).
  UserId
);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fresh_ids_are_distinct() {
    assert_ne!(SongId::new(), SongId::new());
  }

  #[test]
  fn uuid_conversions_preserve_value() {
    let raw = Uuid::new_v4();
    let id = ArtistId::from(raw);

    assert_eq!(id.as_uuid(), raw);
    assert_eq!(Uuid::from(id), raw);
    assert_eq!(id.to_string(), raw.to_string());
  }
}
