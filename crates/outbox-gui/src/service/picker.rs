//! Attachment picker effect.

use std::path::PathBuf;

/// Opens the platform file picker and resolves to the chosen path, or
/// `None` when the user cancels.
///
/// No type filter is applied - any file may be attached. There is no
/// cancellation protocol: once dispatched the dialog runs to completion
/// and a stale result is simply ignored on return.
pub async fn pick_attachment() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Attach File")
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}
