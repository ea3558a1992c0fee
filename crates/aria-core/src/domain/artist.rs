use crate::domain::ids::ArtistId;
use serde::{Deserialize, Serialize};

/// Un artista del catálogo.
///
/// Los álbumes que le pertenecen no viven aquí sino en la tabla de
/// relaciones del [`CatalogStore`](crate::store::CatalogStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
  pub id: ArtistId,

  /// Nombre tal como se registró. No es único.
  pub name: String,

  /// Me gusta acumulados por sus canciones (uno por cada like nuevo).
  pub likes: u32,
}

impl Artist {
  pub fn new(name: impl Into<String>) -> Self {
    Self { id: ArtistId::new(), name: name.into(), likes: 0 }
  }
}
