//! Value Object Module

pub mod money;
pub mod order_item;
pub mod order_status;
pub mod sku;
