pub mod enrichment;
pub mod notify;
