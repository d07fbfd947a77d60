//! Shared DTOs between the translation dashboard and the REST backend.
//!
//! Everything here is plain data plus pure helpers (status transition tables,
//! status classification, word counting). No I/O.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
