// Registry errors.
pub const ERR08_ALREADY_INITIALIZED: &str = "E08: Already initialized";

// Owner errors
pub const ERR20_NOT_ALLOW: &str = "E20: The action is allowed by only owner";
pub const ERR21_INVALID_OWNER: &str = "E21: Invalid new owner address";

// Pause errors
pub const ERR30_PAUSED: &str = "E30: Registry was paused";
