/// A client on the waiting list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitingClient {
    pub id: u32,
    pub name: String,
}

impl WaitingClient {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
