//! Records - flat, typed rows exposed as CRUD resources.
//!
//! A record is a plain struct of primitive fields with exactly one primary
//! identifier. The identifier is either generated by the store on first save
//! (`i64`, where `0` means "not yet assigned") or supplied by the caller as a
//! natural key (`String`).
//!
//! ## Example
//!
//! ```ignore
//! use campus_crud::record::Record;
//!
//! #[derive(Serialize, Deserialize, Clone)]
//! #[serde(rename_all = "camelCase")]
//! struct Station {
//!     #[serde(default)]
//!     pub id: i64,
//!     pub name: String,
//! }
//!
//! impl Record for Station {
//!     const COLLECTION: &'static str = "stations";
//!     const TYPE_NAME: &'static str = "Station";
//!     const LABEL: &'static str = "Station";
//!     type Key = i64;
//!     type Create = NewStation;
//!
//!     fn key(&self) -> Option<i64> { (self.id != 0).then_some(self.id) }
//!     fn set_key(&mut self, key: i64) { self.id = key; }
//!     fn from_create(params: NewStation) -> Self { Self { id: 0, name: params.name } }
//!     fn overwrite_from(&mut self, incoming: Self) { *self = Self { id: self.id, ..incoming }; }
//! }
//! ```

mod key;

use serde::{de::DeserializeOwned, Serialize};

pub use key::RecordKey;

/// Trait for types stored and served as CRUD resources.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Storage collection for this record type. Maps to a table prefix in SQL
    /// and a bucket in the in-memory store.
    const COLLECTION: &'static str;

    /// Name used in not-found messages (`"<TYPE_NAME> with id 7 not found"`).
    const TYPE_NAME: &'static str;

    /// Name used in delete confirmations (`"<LABEL> with id 7 deleted"`).
    const LABEL: &'static str;

    /// Query parameter carrying the identifier on get, update and delete.
    const ID_PARAM: &'static str = "id";

    /// Primary identifier type.
    type Key: RecordKey;

    /// Parameters accepted by the create route.
    type Create: DeserializeOwned + Send + 'static;

    /// Returns the identifier, or `None` when it has not been assigned yet.
    fn key(&self) -> Option<Self::Key>;

    fn set_key(&mut self, key: Self::Key);

    /// Builds a new record from create parameters. Generated identifiers are
    /// left unset.
    fn from_create(params: Self::Create) -> Self;

    /// Replaces every field with the incoming one, keeping this record's
    /// identifier.
    fn overwrite_from(&mut self, incoming: Self);
}
