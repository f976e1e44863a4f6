//! Request and response bodies

pub mod like;
pub mod submit;
