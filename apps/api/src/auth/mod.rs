// Credential handling
// Hospital passwords are stored as bcrypt hashes only

pub mod password;
