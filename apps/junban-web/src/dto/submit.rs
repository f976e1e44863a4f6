//! Form body for page submission

use serde::{de, Deserialize, Deserializer};

/// Fields posted by the submission form
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    /// One name per line
    pub names: String,
    /// Checkbox; absent means false
    #[serde(
        default,
        rename = "enableLikes",
        alias = "enable_likes",
        deserialize_with = "checkbox"
    )]
    pub enable_likes: bool,
}

/// Accept the usual HTML checkbox and boolean spellings
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" | "" => Ok(false),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"a boolean checkbox value",
        )),
    }
}
