mod account;
mod account_lead;
mod board;
mod collection;
mod column;
mod industry_type;
mod lead;
mod page;
mod project;
mod relation;
mod task;

pub use account::*;
pub use account_lead::*;
pub use board::*;
pub use collection::*;
pub use column::*;
pub use industry_type::*;
pub use lead::*;
pub use page::*;
pub use project::*;
pub use relation::*;
pub use task::*;
