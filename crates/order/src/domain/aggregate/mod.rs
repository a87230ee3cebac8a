//! Aggregate Module

pub mod order;
pub mod product;
