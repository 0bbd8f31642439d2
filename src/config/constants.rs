//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Listing
// =============================================================================

/// Default number of records skipped by the list endpoint
pub const DEFAULT_LIST_SKIP: i64 = 0;

/// Default maximum number of records returned by the list endpoint
pub const DEFAULT_LIST_LIMIT: i64 = 100;

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

/// Default database connection URL (SQLite file, created on first use)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://cats.db?mode=rwc";

/// Default size of the connection pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// CORS
// =============================================================================

/// Origins allowed to make cross-origin requests when `CORS_ORIGINS` is unset
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["https://nimlordia.github.io"];

/// Pre-flight cache lifetime in seconds
pub const CORS_MAX_AGE_SECONDS: u64 = 3600;

// =============================================================================
// Responses
// =============================================================================

/// Status reported by the liveness endpoint
pub const STATUS_HEALTHY: &str = "healthy";

/// Status reported by the readiness endpoint when a dependency is down
pub const STATUS_DEGRADED: &str = "degraded";

/// Status reported for an unreachable dependency
pub const STATUS_UNHEALTHY: &str = "unhealthy";

/// Confirmation message returned after a successful delete
pub const MSG_CAT_DELETED: &str = "Cat deleted successfully";

/// Entity label used in not-found responses
pub const ENTITY_CAT: &str = "Cat";

// =============================================================================
// Request Logging
// =============================================================================

/// Client identity used when neither proxy headers nor a peer address are available
pub const UNKNOWN_CLIENT: &str = "Unknown";

/// Proxy header carrying the originating client chain
pub const HEADER_FORWARDED_FOR: &str = "x-forwarded-for";

/// Proxy header carrying the originating client address
pub const HEADER_REAL_IP: &str = "x-real-ip";
