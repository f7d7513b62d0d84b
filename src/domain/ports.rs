use serde_json::{Map, Value};

/// Common surface of every processing-format record: JSON output and
/// explicit, non-throwing validation.
pub trait ProcessingFormat {
    fn to_json(&self) -> Map<String, Value>;

    /// Human-readable problems with the record, in a stable order.
    fn errors(&self) -> Vec<String>;

    fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}
