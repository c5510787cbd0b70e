use crate::RequestId;

/// Side effects requested by `update`, executed by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchProducts { request_id: RequestId },
    FetchCategories { request_id: RequestId },
}
