/// A purchase request waiting to be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Assigned by the ledger at registration.
    pub id: u32,
    pub description: String,
}

impl Request {
    pub fn new(id: u32, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }
}
