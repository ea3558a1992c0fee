use crate::domain::ids::UserId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id: UserId,
  pub name: String,

  /// Clave de búsqueda de usuarios. No se valida su unicidad: ante
  /// duplicados gana siempre el primero registrado.
  pub mobile: String,
}

impl User {
  pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
    Self { id: UserId::new(), name: name.into(), mobile: mobile.into() }
  }
}
