pub mod backfill;
pub mod store;
