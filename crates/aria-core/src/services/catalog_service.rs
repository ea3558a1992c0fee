use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{Album, Artist, Playlist, Song, User};
use crate::errors::CoreError;
use crate::store::{CatalogConfig, CatalogStats, CatalogStore};

/// Acceso compartido y seguro entre hilos a un único [`CatalogStore`].
///
/// Cada operación se ejecuta bajo un mismo lock, así que los llamadores de
/// distintos hilos ven la misma semántica secuencial que un dueño único del
/// store. Clonar el handle comparte el catálogo subyacente.
#[derive(Debug, Clone, Default)]
pub struct CatalogService {
  store: Arc<Mutex<CatalogStore>>,
}

impl CatalogService {
  pub fn new(store: CatalogStore) -> Self {
    Self { store: Arc::new(Mutex::new(store)) }
  }

  pub fn with_config(config: &CatalogConfig) -> Self {
    Self::new(CatalogStore::with_config(config))
  }

  /// Un panic en una operación anterior no deja el store a medio mutar (las
  /// operaciones validan antes de mutar), así que un lock envenenado se reutiliza.
  fn lock(&self) -> MutexGuard<'_, CatalogStore> {
    self.store.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Ejecuta `f` con acceso de lectura, para consultas no expuestas abajo.
  pub fn read<R>(&self, f: impl FnOnce(&CatalogStore) -> R) -> R {
    f(&self.lock())
  }

  /// Ejecuta `f` con acceso exclusivo, p. ej. para encadenar varias operaciones de forma atómica.
  pub fn write<R>(&self, f: impl FnOnce(&mut CatalogStore) -> R) -> R {
    f(&mut self.lock())
  }

  // -------- COMMAND --------

  pub fn create_user(&self, name: &str, mobile: &str) -> User {
    self.lock().create_user(name, mobile)
  }

  pub fn create_artist(&self, name: &str) -> Artist {
    self.lock().create_artist(name)
  }

  pub fn create_album(&self, title: &str, artist_name: &str) -> Album {
    self.lock().create_album(title, artist_name)
  }

  pub fn create_song(&self, title: &str, album_title: &str, length: u32) -> Result<Song, CoreError> {
    self.lock().create_song(title, album_title, length)
  }

  pub fn create_playlist_on_length(&self, mobile: &str, title: &str, length: u32) -> Result<Playlist, CoreError> {
    self.lock().create_playlist_on_length(mobile, title, length)
  }

  pub fn create_playlist_on_name<S: AsRef<str>>(
    &self,
    mobile: &str,
    title: &str,
    song_titles: &[S],
  ) -> Result<Playlist, CoreError> {
    self.lock().create_playlist_on_name(mobile, title, song_titles)
  }

  pub fn find_playlist(&self, mobile: &str, title: &str) -> Result<Playlist, CoreError> {
    self.lock().find_playlist(mobile, title)
  }

  pub fn like_song(&self, mobile: &str, title: &str) -> Result<Song, CoreError> {
    self.lock().like_song(mobile, title)
  }

  // -------- QUERY --------

  pub fn most_popular_artist(&self) -> Option<String> {
    self.lock().most_popular_artist()
  }

  pub fn most_popular_song(&self) -> Option<String> {
    self.lock().most_popular_song()
  }

  pub fn stats(&self) -> CatalogStats {
    self.lock().stats()
  }
}
