//! HTTP request handlers for the harvest API.

pub mod collection;
pub mod unit;
