#![forbid(unsafe_code)]

pub mod loader;
pub mod repository;
pub mod sqlite;
