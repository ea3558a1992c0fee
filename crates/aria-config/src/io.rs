use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Escribe `contents` en un temporal hermano y lo renombra sobre `path`,
/// de modo que un lector nunca vea el fichero a medias.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = path.with_extension("toml.tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn replaces_existing_file_and_leaves_no_temp() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("aria.toml");
    fs::write(&path, "old = true\n").unwrap();

    atomic_write_str(&path, "new = true\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new = true\n");
    assert!(!path.with_extension("toml.tmp").exists());
  }
}
