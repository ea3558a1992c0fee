use std::collections::HashMap;
use std::hash::Hash;

/// Tabla de relación uno-a-muchos: clave -> secuencia ordenada de valores.
///
/// Solo admite añadir; nada se borra nunca. Una clave sin entradas se
/// comporta igual que una clave con la lista vacía.
#[derive(Debug, Clone)]
pub struct Relation<K, V> {
  entries: HashMap<K, Vec<V>>,
}

impl<K, V> Default for Relation<K, V> {
  fn default() -> Self {
    Self { entries: HashMap::new() }
  }
}

impl<K, V> Relation<K, V>
where
  K: Eq + Hash,
  V: PartialEq,
{
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, key: K, value: V) {
    self.entries.entry(key).or_default().push(value);
  }

  /// Añade `value` salvo que ya esté presente. Devuelve `true` si se añadió.
  pub fn push_unique(&mut self, key: K, value: V) -> bool {
    let values = self.entries.entry(key).or_default();
    if values.contains(&value) {
      return false;
    }
    values.push(value);
    true
  }

  /// Fija la lista completa de una clave nueva.
  pub fn insert(&mut self, key: K, values: Vec<V>) {
    self.entries.insert(key, values);
  }

  pub fn get(&self, key: &K) -> &[V] {
    self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn contains(&self, key: &K, value: &V) -> bool {
    self.get(key).contains(value)
  }
}
