//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Listing
// =============================================================================

/// Query value selecting descending order on list endpoints
pub const SORT_DESC: &str = "desc";

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default JWT token lifetime in seconds
pub const DEFAULT_JWT_EXPIRES_IN_SECONDS: i64 = 300;

/// Upper bound accepted for JWT_EXPIRES_IN (one year)
pub const MAX_JWT_EXPIRES_IN_SECONDS: i64 = 365 * 24 * 60 * 60;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Secret used by debug builds when JWT_SECRET is unset
pub const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.db?mode=rwc";

/// Default upper bound of pooled connections
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Default connect/acquire timeout in seconds
pub const DEFAULT_DATABASE_TIMEOUT_SECONDS: u64 = 5;
