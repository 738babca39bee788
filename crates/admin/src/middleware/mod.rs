//! HTTP middleware stack for the operations service.
//!
//! # Middleware order (outermost first)
//!
//! 1. Sentry layers (capture errors, start transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. CORS (when origins are configured)
//! 4. Session layer (tower-sessions, in-memory store)
//! 5. Session expiry on 401 responses
//! 6. Rate limiting (governor, credential routes only)

pub mod auth;
pub mod rate_limit;
pub mod session;

pub use auth::{
    AdminSession, PartnerSession, RequireAdmin, RequirePartner, RequireVendor, VendorSession,
    clear_admin, clear_partner, clear_vendor, establish_admin, establish_partner,
    establish_vendor,
};
pub use rate_limit::auth_rate_limiter;
pub use session::{create_session_layer, expire_auth_on_unauthorized};
