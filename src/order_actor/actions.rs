/// Custom actions for Order entities.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Sets the status to any value. No transition graph is enforced:
    /// a completed order can go back to pending.
    ChangeStatus(String),
}
