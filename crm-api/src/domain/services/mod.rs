mod account_leads;
mod boards;
pub mod records;
mod tasks;

pub use account_leads::*;
pub use boards::*;
pub use records::RecordService;
pub use tasks::*;
