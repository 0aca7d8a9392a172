//! Request data transfer objects
//!
//! Responses are the domain records and service result types themselves,
//! which already serialize to the persisted layout.

pub mod policyholders;
pub mod claims;
