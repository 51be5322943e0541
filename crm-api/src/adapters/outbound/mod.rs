#[cfg(test)]
pub mod mock;
pub mod record_store;
