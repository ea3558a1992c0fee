//! Catálogo en memoria de usuarios, artistas, álbumes, canciones y playlists.
//!
//! [`CatalogStore`] es dueño de todas las entidades y de las tablas de
//! relación entre ellas. Toda búsqueda por nombre/título/móvil devuelve la
//! *primera* coincidencia en orden de creación; se permiten duplicados.
//!
//! El store no está sincronizado. Para compartirlo entre hilos hay que
//! envolverlo en un [`CatalogService`](crate::services::CatalogService).

mod config;
mod relation;

pub use config::CatalogConfig;
pub use relation::Relation;

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{Album, AlbumId, Artist, ArtistId, Playlist, PlaylistId, Song, SongId, User, UserId};
use crate::errors::{CoreError, EntityKind, Result};

/// Contadores agregados de todo el catálogo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
  pub users: usize,
  pub artists: usize,
  pub albums: usize,
  pub songs: usize,
  pub playlists: usize,
  pub song_likes: u64,
}

#[derive(Debug, Default)]
pub struct CatalogStore {
  users: Vec<User>,
  artists: Vec<Artist>,
  albums: Vec<Album>,
  songs: Vec<Song>,
  playlists: Vec<Playlist>,

  artist_albums: Relation<ArtistId, AlbumId>,
  album_songs: Relation<AlbumId, SongId>,
  playlist_songs: Relation<PlaylistId, SongId>,
  playlist_listeners: Relation<PlaylistId, UserId>,
  latest_playlist: HashMap<UserId, PlaylistId>,
  user_playlists: Relation<UserId, PlaylistId>,
  song_likers: Relation<SongId, UserId>,

  /// móvil -> posición en `users` del primer usuario registrado con él.
  mobile_index: Option<HashMap<String, usize>>,
}

impl CatalogStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: &CatalogConfig) -> Self {
    Self { mobile_index: config.index_users_by_mobile.then(HashMap::new), ..Self::default() }
  }

  // -------- creation --------

  pub fn create_user(&mut self, name: &str, mobile: &str) -> User {
    let user = User::new(name, mobile);
    if let Some(index) = &mut self.mobile_index {
      index.entry(user.mobile.clone()).or_insert(self.users.len());
    }
    debug!(user_id = %user.id, mobile, "user created");
    self.users.push(user.clone());
    user
  }

  pub fn create_artist(&mut self, name: &str) -> Artist {
    let artist = Artist::new(name);
    debug!(artist_id = %artist.id, name, "artist created");
    self.artists.push(artist.clone());
    artist
  }

  /// Crea un álbum bajo el primer artista llamado `artist_name`; si no
  /// existe ninguno, lo registra antes.
  pub fn create_album(&mut self, title: &str, artist_name: &str) -> Album {
    let artist_id = match self.artist_pos(artist_name) {
      Some(pos) => self.artists[pos].id,
      None => self.create_artist(artist_name).id,
    };

    let album = Album::new(title);
    self.albums.push(album.clone());
    self.artist_albums.push(artist_id, album.id);
    debug!(album_id = %album.id, title, artist = artist_name, "album created");
    album
  }

  pub fn create_song(&mut self, title: &str, album_title: &str, length: u32) -> Result<Song> {
    let album_id = self
      .album_pos(album_title)
      .map(|pos| self.albums[pos].id)
      .ok_or_else(|| CoreError::not_found(EntityKind::Album, album_title))?;

    let song = Song::new(title, length);
    self.songs.push(song.clone());
    self.album_songs.push(album_id, song.id);
    debug!(song_id = %song.id, title, album = album_title, length, "song created");
    Ok(song)
  }

  /// Crea una playlist con todas las canciones que duran exactamente
  /// `length` segundos, en orden global de creación.
  pub fn create_playlist_on_length(&mut self, mobile: &str, title: &str, length: u32) -> Result<Playlist> {
    let user_id = self.user(mobile)?.id;
    let songs = self.songs.iter().filter(|s| s.length == length).map(|s| s.id).collect();
    Ok(self.register_playlist(user_id, title, songs))
  }

  /// Crea una playlist con todas las canciones cuyo título aparece en
  /// `song_titles`, en orden global de creación.
  pub fn create_playlist_on_name<S: AsRef<str>>(
    &mut self,
    mobile: &str,
    title: &str,
    song_titles: &[S],
  ) -> Result<Playlist> {
    let user_id = self.user(mobile)?.id;
    let wanted: HashSet<&str> = song_titles.iter().map(AsRef::as_ref).collect();
    let songs = self.songs.iter().filter(|s| wanted.contains(s.title.as_str())).map(|s| s.id).collect();
    Ok(self.register_playlist(user_id, title, songs))
  }

  fn register_playlist(&mut self, creator: UserId, title: &str, songs: Vec<SongId>) -> Playlist {
    let playlist = Playlist::new(title);
    debug!(playlist_id = %playlist.id, title, songs = songs.len(), %creator, "playlist created");

    self.playlists.push(playlist.clone());
    self.playlist_songs.insert(playlist.id, songs);
    self.playlist_listeners.insert(playlist.id, vec![creator]);
    self.latest_playlist.insert(creator, playlist.id);
    self.user_playlists.push(creator, playlist.id);
    playlist
  }

  // -------- interaction --------

  /// Devuelve la primera playlist titulada `title` y registra al usuario
  /// como oyente si todavía no lo era.
  pub fn find_playlist(&mut self, mobile: &str, title: &str) -> Result<Playlist> {
    let user_id = self.user(mobile)?.id;
    let playlist = self.find_playlist_by_title(title)?.clone();

    if self.playlist_listeners.push_unique(playlist.id, user_id) {
      info!(playlist = title, mobile, "listener added");
    }
    Ok(playlist)
  }

  /// Registra el like del usuario en la primera canción titulada `title`.
  ///
  /// Repetir el like no hace nada. Un like nuevo cuenta también para el
  /// artista dueño del álbum de la canción.
  pub fn like_song(&mut self, mobile: &str, title: &str) -> Result<Song> {
    let user_id = self.user(mobile)?.id;
    let pos = self.song_pos(title).ok_or_else(|| CoreError::not_found(EntityKind::Song, title))?;
    let song_id = self.songs[pos].id;

    if !self.song_likers.push_unique(song_id, user_id) {
      debug!(song = title, mobile, "repeat like ignored");
      return Ok(self.songs[pos].clone());
    }

    self.songs[pos].likes += 1;
    info!(song = title, mobile, likes = self.songs[pos].likes, "song liked");

    match self.owning_artist_pos(song_id) {
      Some(artist_pos) => self.artists[artist_pos].likes += 1,
      None => warn!(song = title, "like not attributed: no owning album/artist"),
    }

    Ok(self.songs[pos].clone())
  }

  fn owning_artist_pos(&self, song_id: SongId) -> Option<usize> {
    let album = self.albums.iter().find(|a| self.album_songs.contains(&a.id, &song_id))?;
    self.artists.iter().position(|ar| self.artist_albums.contains(&ar.id, &album.id))
  }

  // -------- statistics --------

  /// Nombre del artista con más likes; en caso de empate gana el más antiguo.
  pub fn most_popular_artist(&self) -> Option<String> {
    first_max_by(&self.artists, |a| a.likes).map(|a| a.name.clone())
  }

  /// Título de la canción con más likes; en caso de empate gana la más antigua.
  pub fn most_popular_song(&self) -> Option<String> {
    first_max_by(&self.songs, |s| s.likes).map(|s| s.title.clone())
  }

  pub fn stats(&self) -> CatalogStats {
    CatalogStats {
      users: self.users.len(),
      artists: self.artists.len(),
      albums: self.albums.len(),
      songs: self.songs.len(),
      playlists: self.playlists.len(),
      song_likes: self.songs.iter().map(|s| u64::from(s.likes)).sum(),
    }
  }

  // -------- lookup --------

  pub fn users(&self) -> &[User] {
    &self.users
  }

  pub fn artists(&self) -> &[Artist] {
    &self.artists
  }

  pub fn albums(&self) -> &[Album] {
    &self.albums
  }

  pub fn songs(&self) -> &[Song] {
    &self.songs
  }

  pub fn playlists(&self) -> &[Playlist] {
    &self.playlists
  }

  pub fn find_user(&self, mobile: &str) -> Result<&User> {
    self.user(mobile)
  }

  pub fn find_artist(&self, name: &str) -> Result<&Artist> {
    self.artist_pos(name).map(|pos| &self.artists[pos]).ok_or_else(|| CoreError::not_found(EntityKind::Artist, name))
  }

  pub fn find_album(&self, title: &str) -> Result<&Album> {
    self.album_pos(title).map(|pos| &self.albums[pos]).ok_or_else(|| CoreError::not_found(EntityKind::Album, title))
  }

  pub fn find_song(&self, title: &str) -> Result<&Song> {
    self.song_pos(title).map(|pos| &self.songs[pos]).ok_or_else(|| CoreError::not_found(EntityKind::Song, title))
  }

  /// Versión de solo lectura de [`find_playlist`](Self::find_playlist).
  pub fn find_playlist_by_title(&self, title: &str) -> Result<&Playlist> {
    self
      .playlists
      .iter()
      .find(|p| p.title == title)
      .ok_or_else(|| CoreError::not_found(EntityKind::Playlist, title))
  }

  pub fn albums_of(&self, artist: ArtistId) -> &[AlbumId] {
    self.artist_albums.get(&artist)
  }

  pub fn songs_of(&self, album: AlbumId) -> &[SongId] {
    self.album_songs.get(&album)
  }

  pub fn playlist_songs(&self, playlist: PlaylistId) -> &[SongId] {
    self.playlist_songs.get(&playlist)
  }

  pub fn playlist_listeners(&self, playlist: PlaylistId) -> &[UserId] {
    self.playlist_listeners.get(&playlist)
  }

  /// Última playlist creada por el usuario.
  pub fn latest_playlist_of(&self, user: UserId) -> Option<PlaylistId> {
    self.latest_playlist.get(&user).copied()
  }

  /// Todas las playlists creadas por el usuario, de la más antigua a la más reciente.
  pub fn playlists_created_by(&self, user: UserId) -> &[PlaylistId] {
    self.user_playlists.get(&user)
  }

  pub fn song_likers(&self, song: SongId) -> &[UserId] {
    self.song_likers.get(&song)
  }

  pub fn album_artist(&self, album: AlbumId) -> Option<&Artist> {
    self.artists.iter().find(|ar| self.artist_albums.contains(&ar.id, &album))
  }

  pub fn song_album(&self, song: SongId) -> Option<&Album> {
    self.albums.iter().find(|a| self.album_songs.contains(&a.id, &song))
  }

  fn user(&self, mobile: &str) -> Result<&User> {
    let pos = match &self.mobile_index {
      Some(index) => index.get(mobile).copied(),
      None => self.users.iter().position(|u| u.mobile == mobile),
    };
    pos.map(|p| &self.users[p]).ok_or_else(|| CoreError::not_found(EntityKind::User, mobile))
  }

  fn artist_pos(&self, name: &str) -> Option<usize> {
    self.artists.iter().position(|a| a.name == name)
  }

  fn album_pos(&self, title: &str) -> Option<usize> {
    self.albums.iter().position(|a| a.title == title)
  }

  fn song_pos(&self, title: &str) -> Option<usize> {
    self.songs.iter().position(|s| s.title == title)
  }
}

/// Como `Iterator::max_by_key`, pero ante empates se queda con el *primer* máximo.
fn first_max_by<T>(items: &[T], key: impl Fn(&T) -> u32) -> Option<&T> {
  items.iter().reduce(|best, item| if key(item) > key(best) { item } else { best })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn store_with_user() -> CatalogStore {
    let mut store = CatalogStore::new();
    store.create_user("Ana", "555-0100");
    store
  }

  #[test]
  fn create_album_auto_creates_missing_artist() {
    let mut store = CatalogStore::new();

    let album = store.create_album("Album1", "Test");

    let artist = store.find_artist("Test").unwrap();
    assert_eq!(store.artists().len(), 1);
    assert_eq!(store.albums_of(artist.id), &[album.id]);
  }

  #[test]
  fn create_album_reuses_first_artist_with_that_name() {
    let mut store = CatalogStore::new();
    let first = store.create_artist("Dup");
    store.create_artist("Dup");

    let album = store.create_album("A", "Dup");

    assert_eq!(store.artists().len(), 2);
    assert_eq!(store.albums_of(first.id), &[album.id]);
    assert_eq!(store.album_artist(album.id).map(|a| a.id), Some(first.id));
  }

  #[test]
  fn create_song_on_missing_album_fails_without_mutation() {
    let mut store = CatalogStore::new();

    let err = store.create_song("S1", "Nope", 200).unwrap_err();

    assert_eq!(err, CoreError::not_found(EntityKind::Album, "Nope"));
    assert!(store.songs().is_empty());
  }

  #[test]
  fn playlist_on_length_spans_albums_in_creation_order() {
    let mut store = store_with_user();
    store.create_album("A", "X");
    store.create_album("B", "Y");
    let s1 = store.create_song("s1", "B", 180).unwrap();
    store.create_song("s2", "A", 200).unwrap();
    let s3 = store.create_song("s3", "A", 180).unwrap();

    let playlist = store.create_playlist_on_length("555-0100", "Short", 180).unwrap();

    assert_eq!(store.playlist_songs(playlist.id), &[s1.id, s3.id]);
  }

  #[test]
  fn playlist_on_name_matches_every_song_sharing_a_title() {
    let mut store = store_with_user();
    store.create_album("A", "X");
    let a = store.create_song("Intro", "A", 60).unwrap();
    store.create_song("Other", "A", 60).unwrap();
    let b = store.create_song("Intro", "A", 90).unwrap();

    let playlist = store.create_playlist_on_name("555-0100", "Intros", &["Intro", "Missing"]).unwrap();

    assert_eq!(store.playlist_songs(playlist.id), &[a.id, b.id]);
  }

  #[test]
  fn playlist_creation_tracks_creator() {
    let mut store = store_with_user();
    let user = store.find_user("555-0100").unwrap().id;

    let first = store.create_playlist_on_length("555-0100", "One", 1).unwrap();
    let second = store.create_playlist_on_name("555-0100", "Two", &[] as &[&str]).unwrap();

    assert_eq!(store.playlist_listeners(first.id), &[user]);
    assert_eq!(store.latest_playlist_of(user), Some(second.id));
    assert_eq!(store.playlists_created_by(user), &[first.id, second.id]);
  }

  #[test]
  fn playlist_for_unknown_user_fails() {
    let mut store = CatalogStore::new();

    let err = store.create_playlist_on_length("nobody", "P", 10).unwrap_err();

    assert_eq!(err.entity(), EntityKind::User);
    assert!(store.playlists().is_empty());
  }

  #[test]
  fn find_playlist_adds_listener_once() {
    let mut store = store_with_user();
    store.create_user("Ben", "555-0200");
    let playlist = store.create_playlist_on_length("555-0100", "Mix", 100).unwrap();

    store.find_playlist("555-0200", "Mix").unwrap();
    store.find_playlist("555-0200", "Mix").unwrap();
    store.find_playlist("555-0100", "Mix").unwrap();

    assert_eq!(store.playlist_listeners(playlist.id).len(), 2);
  }

  #[test]
  fn find_playlist_reports_missing_playlist() {
    let mut store = store_with_user();

    let err = store.find_playlist("555-0100", "Ghost").unwrap_err();

    assert_eq!(err, CoreError::not_found(EntityKind::Playlist, "Ghost"));
  }

  #[test]
  fn like_song_counts_once_per_user() {
    let mut store = store_with_user();
    store.create_album("Album1", "Test");
    store.create_song("S1", "Album1", 200).unwrap();

    let liked = store.like_song("555-0100", "S1").unwrap();
    let again = store.like_song("555-0100", "S1").unwrap();

    assert_eq!(liked.likes, 1);
    assert_eq!(again.likes, 1);
    assert_eq!(store.find_artist("Test").unwrap().likes, 1);
    assert_eq!(store.song_likers(liked.id).len(), 1);
  }

  #[test]
  fn like_song_unknown_song_fails() {
    let mut store = store_with_user();

    let err = store.like_song("555-0100", "Nope").unwrap_err();

    assert_eq!(err.entity(), EntityKind::Song);
  }

  #[test]
  fn most_popular_is_absent_on_empty_catalog() {
    let store = CatalogStore::new();

    assert_eq!(store.most_popular_artist(), None);
    assert_eq!(store.most_popular_song(), None);
  }

  #[test]
  fn most_popular_ties_go_to_first_created() {
    let mut store = CatalogStore::new();
    store.create_artist("First");
    store.create_artist("Second");
    store.create_album("A", "First");
    store.create_song("a", "A", 1).unwrap();
    store.create_song("b", "A", 1).unwrap();

    assert_eq!(store.most_popular_artist().as_deref(), Some("First"));
    assert_eq!(store.most_popular_song().as_deref(), Some("a"));
  }

  #[test]
  fn mobile_index_keeps_first_match_semantics() {
    let mut store = CatalogStore::with_config(&CatalogConfig { index_users_by_mobile: true });
    let first = store.create_user("One", "dup");
    store.create_user("Two", "dup");

    assert_eq!(store.find_user("dup").unwrap().id, first.id);
    assert!(store.find_user("other").is_err());
  }

  #[test]
  fn stats_count_entities_and_likes() {
    let mut store = store_with_user();
    store.create_user("Ben", "555-0200");
    store.create_album("A", "X");
    store.create_song("s", "A", 1).unwrap();
    store.like_song("555-0100", "s").unwrap();
    store.like_song("555-0200", "s").unwrap();

    let stats = store.stats();

    assert_eq!(stats.users, 2);
    assert_eq!(stats.artists, 1);
    assert_eq!(stats.songs, 1);
    assert_eq!(stats.song_likes, 2);
  }
}
