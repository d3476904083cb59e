//! Row-level persistence, one module per entity.
//!
//! Functions take any `PgExecutor`, so a handler can run a single query
//! against the pool or compose several into one open transaction. The
//! transaction boundary always belongs to the caller.

pub mod profile;
pub mod registration;
pub mod reservation;
pub mod skill;
pub mod slot;
pub mod token;
pub mod user;
