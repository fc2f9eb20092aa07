//! Structured logging vocabulary shared by every layer of the reconciler.

pub mod events;
pub mod fields;
