//! HTTP route handlers

pub mod admin;
pub mod check;
pub mod levels;
pub mod words;
