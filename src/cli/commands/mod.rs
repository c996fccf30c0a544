pub mod batch;
pub mod calldata;
pub mod dst_amount;
pub mod quote;
