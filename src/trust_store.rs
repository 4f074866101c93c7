// src/trust_store.rs

/// Trust stores known to the `getRootCertsRaw` API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum TrustStore {
    #[default]
    Mozilla = 1,
    MacOs = 2,
    Android = 3,
    Java = 4,
    Windows = 5,
}

impl TrustStore {
    /// Wire value of the `trustStore` query parameter.
    pub fn as_param(self) -> String {
        (self as u8).to_string()
    }
}
