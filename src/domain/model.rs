use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
}

impl Venue {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
