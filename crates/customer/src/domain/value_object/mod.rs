//! Value Object Module

pub mod customer_name;
