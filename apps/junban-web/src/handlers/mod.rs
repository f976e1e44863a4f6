//! HTTP handlers

pub mod error;
pub mod like;
pub mod pages;
