//! Repository functions, generic over [`sqlx::Executor`] so they run against
//! a pool, a single connection, or an open transaction.

pub mod category;
pub mod question;
