//! Aggregate Module

pub mod customer;
