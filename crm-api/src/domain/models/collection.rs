use strum::{AsRefStr, Display, EnumIter};

/// Collections of the record store this service reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Collection {
    Accounts,
    Leads,
    AccountLeads,
    Types,
    Projects,
    ProjectBoards,
    ProjectTasks,
}
