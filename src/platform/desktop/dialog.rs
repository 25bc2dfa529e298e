use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
pub fn pick_snapshot_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open market snapshot")
        .add_filter("Market snapshot", &["json", "csv"])
        .pick_file()
}

// No blocking dialogs in the browser.
#[cfg(target_arch = "wasm32")]
pub fn pick_snapshot_file() -> Option<PathBuf> {
    None
}
