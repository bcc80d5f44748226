use serde::{Deserialize, Serialize};

/// One submitted job application. Every field is a free-form string; the
/// form is responsible for making sure each one is filled in before the
/// record goes on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub address: String,
    pub position: String,
}
