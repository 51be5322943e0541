mod record_store;

pub use self::record_store::*;
