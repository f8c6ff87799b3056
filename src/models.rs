use serde::{Deserialize, Serialize};

/// Stat values come back as strings for most fields, but some
/// endpoints hand out bare numbers for the same keys.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StringOrNum {
    String(String),
    Number(serde_json::Number),
}

impl Default for StringOrNum {
    fn default() -> Self {
        StringOrNum::String(String::new())
    }
}

impl StringOrNum {
    pub fn to_str(&self) -> String {
        match self {
            StringOrNum::String(str) => str.to_owned(),
            StringOrNum::Number(n) => n.to_string(),
        }
    }
}
