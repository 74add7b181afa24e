use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Plain `{"message": ...}` success body.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// `{"error": ...}` failure body returned for every rejected request.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize, Debug)]
pub struct Sitemap {
    pub endpoints: Vec<String>,
}
