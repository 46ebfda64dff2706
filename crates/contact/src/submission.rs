use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// The three-field payload a visitor submits through the contact form.
///
/// Absent and `null` fields deserialize to empty strings so that they are
/// reported by [`Validate`] rather than rejected while parsing the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(min = 1))]
    pub message: String,
}

fn nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
