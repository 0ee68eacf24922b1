use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Primary identifier of a record.
///
/// Implemented for `i64` (store-generated, monotonic) and `String`
/// (caller-supplied natural key).
pub trait RecordKey: Clone + Debug + Display + Eq + Hash + Send + Sync + 'static {
    /// The key for the `seq`-th generated identifier, or `None` when this key
    /// type is never generated by the store.
    fn generated(seq: u64) -> Option<Self>;

    /// Position of this key in the generated sequence, if it has one.
    fn sequence(&self) -> Option<u64>;

    /// Parse a key from a query parameter.
    fn parse(raw: &str) -> Option<Self>;
}

impl RecordKey for i64 {
    fn generated(seq: u64) -> Option<Self> {
        i64::try_from(seq).ok()
    }

    fn sequence(&self) -> Option<u64> {
        u64::try_from(*self).ok()
    }

    fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl RecordKey for String {
    fn generated(_seq: u64) -> Option<Self> {
        None
    }

    fn sequence(&self) -> Option<u64> {
        None
    }

    fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(raw.to_string())
        }
    }
}
