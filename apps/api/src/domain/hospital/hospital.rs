use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Persisted hospital record
///
/// # Invariants
/// - `id` is assigned by storage and never changes afterwards
/// - `password_hash` is only ever a bcrypt hash
/// - `email` and `contact` are not guaranteed unique
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Hospital {
    pub id: i32,
    pub name: String,
    pub branch: String,
    pub experience: i32,
    pub email: String,
    pub password_hash: String,
    pub contact: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full hospital record as supplied by a caller
///
/// Form clients send numbers as strings, so `id` and `experience` accept
/// either; a blank `id` counts as absent. A blank or missing `password`
/// means "keep the stored one" on update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HospitalInput {
    #[serde(default, deserialize_with = "optional_int")]
    pub id: Option<i32>,
    pub name: String,
    pub branch: String,
    #[serde(deserialize_with = "required_int")]
    pub experience: i32,
    pub email: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub password: Option<String>,
    pub contact: String,
}

/// Hospital record ready for persistence
///
/// Same shape as [`HospitalInput`] with the password already hashed.
/// `id == None` inserts, `id == Some(_)` updates an existing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalDraft {
    pub id: Option<i32>,
    pub name: String,
    pub branch: String,
    pub experience: i32,
    pub email: String,
    pub password_hash: String,
    pub contact: String,
}

impl HospitalDraft {
    /// Builds a draft from caller input and an already computed hash
    pub fn from_input(input: HospitalInput, password_hash: String) -> Self {
        Self {
            id: input.id,
            name: input.name,
            branch: input.branch,
            experience: input.experience,
            email: input.email,
            password_hash,
            contact: input.contact,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrText {
    Int(i64),
    Text(String),
}

fn parse_int<E: serde::de::Error>(raw: Option<IntOrText>) -> Result<Option<i32>, E> {
    match raw {
        None => Ok(None),
        Some(IntOrText::Int(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| E::custom(format!("number out of range: {}", n))),
        Some(IntOrText::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse()
                .map(Some)
                .map_err(|_| E::custom(format!("expected an integer, got {:?}", s)))
        }
    }
}

fn optional_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    parse_int(Option::<IntOrText>::deserialize(deserializer)?)
}

fn required_int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    parse_int(Option::<IntOrText>::deserialize(deserializer)?)?
        .ok_or_else(|| serde::de::Error::custom("expected an integer, got nothing"))
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}
