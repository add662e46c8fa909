/// One entry as the secret store hands it over, before normalization.
///
/// Fields keep the order the store reported them in. A key may appear
/// more than once; lookups return the first value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEntry {
    pub name: String,
    pub fields: Vec<(String, String)>,
    pub password: String,
    pub body: String,
}

impl RawEntry {
    /// Create an empty entry with the given store name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the distinguished password value.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the free-text body blob.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Append a key/value field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// All field keys, in store order.
    pub fn keys(&self) -> Vec<&str> {
        self.fields.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Returns the value for the given key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
