// --- File: crates/turnero_gcal/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
pub mod catalog;
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
#[cfg(test)]
mod logic_test;
pub mod routes;
pub mod service;
