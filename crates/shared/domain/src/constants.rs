//! Domain-level constants.

/// Base path of the users resource
pub const USERS_BASE_PATH: &str = "/api/users";

