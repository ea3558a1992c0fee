use aria_config::{LoggingConfig, init_logging};
use aria_core::{CatalogConfig, CatalogStore, CoreError};

fn main() -> Result<(), CoreError> {
  // Sin directorio de configuración utilizable se sigue con los valores por defecto.
  let logging = LoggingConfig::load().unwrap_or_default();
  if let Err(e) = init_logging(&logging) {
    eprintln!("logging disabled: {e}");
  }

  let catalog_cfg = CatalogConfig::load().unwrap_or_else(|e| {
    tracing::warn!(error = %e, "catalog config unavailable, using defaults");
    CatalogConfig::default()
  });
  let mut store = CatalogStore::with_config(&catalog_cfg);

  // Escenario mínimo: un usuario, un álbum con artista autocreado y dos canciones.
  store.create_user("Smoke", "000-0000");
  store.create_album("Album1", "Test");
  store.create_song("S1", "Album1", 200)?;
  store.create_song("S2", "Album1", 200)?;

  let playlist = store.create_playlist_on_length("000-0000", "Two hundred", 200)?;
  println!("Playlist {:?} has {} songs", playlist.title, store.playlist_songs(playlist.id).len());

  // El segundo like del mismo usuario no debe contar.
  let song = store.like_song("000-0000", "S1")?;
  store.like_song("000-0000", "S1")?;
  println!("Song {:?} likes = {}", song.title, song.likes);
  println!("Artist likes = {}", store.find_artist("Test")?.likes);

  println!("Most popular artist: {:?}", store.most_popular_artist());
  println!("Most popular song: {:?}", store.most_popular_song());
  println!("{:?}", store.stats());

  Ok(())
}
