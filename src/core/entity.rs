//! Entity trait defining the minimal contract for store-managed records

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Base trait for all records managed by an entity module.
///
/// An entity is any serializable record with a unique string identifier.
/// The id is optional on the value itself: a create payload has no id yet,
/// the server assigns one and the server-returned entity is authoritative.
///
/// The shape of the record is entirely up to the application; the store
/// only ever inspects the id.
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The unique identifier, or `None` for a not-yet-persisted payload
    fn id(&self) -> Option<&str>;

    /// Check whether this entity has the same id as another
    ///
    /// Two entities without ids are never considered the same record.
    fn same_record(&self, other: &Self) -> bool {
        match (self.id(), other.id()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    struct TestEntity {
        id: Option<String>,
        name: String,
    }

    impl Entity for TestEntity {
        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }
    }

    #[test]
    fn test_same_record_by_id() {
        let a = TestEntity {
            id: Some("1".to_string()),
            name: "first".to_string(),
        };
        let b = TestEntity {
            id: Some("1".to_string()),
            name: "renamed".to_string(),
        };
        assert!(a.same_record(&b));
    }

    #[test]
    fn test_unpersisted_entities_are_never_the_same_record() {
        let a = TestEntity {
            id: None,
            name: "draft".to_string(),
        };
        let b = a.clone();
        assert!(!a.same_record(&b));
    }
}
