use std::path::PathBuf;

use super::GenerationRequest;

/// Work requested by a view. The leading `u64` is the mount token of the view
/// that asked, echoed back on the resulting event.
pub enum Action {
    CheckStatus(u64),
    CopyToClipboard(u64, String),
    DownloadResult(u64, PathBuf, String),
    GenerateTasks(u64, GenerationRequest),
}
