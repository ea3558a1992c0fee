use crate::domain::ids::PlaylistId;
use serde::{Deserialize, Serialize};

/// Una playlist. Sus canciones y oyentes se guardan como relaciones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
  pub id: PlaylistId,
  pub title: String,
}

impl Playlist {
  pub fn new(title: impl Into<String>) -> Self {
    Self { id: PlaylistId::new(), title: title.into() }
  }
}
