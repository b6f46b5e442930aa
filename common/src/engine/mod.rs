//! Record presentation and notification dispatch engine.
//!
//! Pure logic shared by every record type: header role inference
//! ([`roles`]), table normalization ([`normalize`]), search and pagination
//! ([`filter`]), email templating ([`template`]), the per-record card view
//! model ([`card`]), dispatch request construction ([`dispatch`]) and the
//! per-type configuration that parameterizes all of it ([`config`]).
//!
//! Nothing in here performs I/O; the frontend component owns the HTTP side
//! effects and feeds results back through these functions.

pub mod card;
pub mod config;
pub mod dispatch;
pub mod filter;
pub mod normalize;
pub mod roles;
pub mod template;
