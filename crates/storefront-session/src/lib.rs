//! Mock session management for the storefront.
//!
//! There is no real backend: "logging in" compares credentials against a
//! fixed in-memory allow-list and writes a session record into a typed
//! session store with a 7-day horizon. The store interface keeps the
//! medium (memory here, browser cookies in a real deployment) swappable
//! without touching view logic.

mod cookie;
mod directory;
mod error;
mod gate;
mod session;
mod store;
mod user;

pub use cookie::{decode_user_cookie, encode_user_cookie};
pub use directory::{Directory, SIMULATED_LATENCY_MS};
pub use error::AuthError;
pub use gate::{login_redirect_path, GateOutcome, SessionGate};
pub use session::Session;
pub use store::{
    clear_session, load_session, persist_session, MemoryStore, SessionStore, AUTH_KEY, USER_KEY,
};
pub use user::SessionUser;
