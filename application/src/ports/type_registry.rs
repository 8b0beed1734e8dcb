//! Content-type registry port.

use std::collections::HashSet;

/// Port exposing the host's registered content-type names.
///
/// Used to validate that the recognized configuration type actually exists
/// before querying for entries of that type.
pub trait TypeRegistry: Send + Sync {
    /// All registered content-type machine names.
    fn registered_type_names(&self) -> HashSet<String>;
}
