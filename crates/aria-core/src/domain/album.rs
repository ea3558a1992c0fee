use crate::domain::ids::AlbumId;
use serde::{Deserialize, Serialize};

/// Un álbum. Pertenece a exactamente un artista desde su creación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
  pub id: AlbumId,
  pub title: String,
}

impl Album {
  pub fn new(title: impl Into<String>) -> Self {
    Self { id: AlbumId::new(), title: title.into() }
  }
}
