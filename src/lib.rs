//! Rebates
//!
//! Rebates calculates the monetary rebate owed for a rebate definition, a product and a purchase
//! volume, and records the result against the rebate.

pub mod calculator;
pub mod fixtures;
pub mod incentives;
pub mod money;
pub mod observability;
pub mod prelude;
pub mod products;
pub mod rebates;
pub mod service;
pub mod stores;
