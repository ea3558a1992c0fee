use crate::domain::ids::SongId;
use serde::{Deserialize, Serialize};

/// Una canción. Pertenece a exactamente un álbum desde su creación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
  pub id: SongId,
  pub title: String,

  /// Duración en segundos.
  pub length: u32,

  /// Siempre igual al número de usuarios distintos que le dieron like.
  pub likes: u32,
}

impl Song {
  pub fn new(title: impl Into<String>, length: u32) -> Self {
    Self { id: SongId::new(), title: title.into(), length, likes: 0 }
  }
}
