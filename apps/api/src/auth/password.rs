// Password hashing utilities
// Uses bcrypt so stored hospital credentials are never plaintext

use bcrypt::hash;

use crate::domain::errors::HospitalResult;

/// Hashes a password using bcrypt
///
/// # Arguments
/// * `password` - The plaintext password to hash
/// * `cost` - bcrypt work factor (4..=31)
///
/// # Returns
/// * `Ok(String)` - The bcrypt hash
/// * `Err(HospitalError::PasswordHash)` - If the cost is out of range
///
/// # Example
/// ```
/// use hospital_api::auth::password::hash_password;
///
/// let hash = hash_password("my_password", 4).expect("valid hash");
/// assert!(hash.starts_with("$2"));
/// ```
pub fn hash_password(password: &str, cost: u32) -> HospitalResult<String> {
    Ok(hash(password, cost)?)
}
