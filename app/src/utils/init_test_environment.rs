use std::path::PathBuf;

/// a fresh path for a test image file under the temp directory
///
/// any leftover file from an earlier run is removed first.
pub fn test_image_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("kvfs_{name}_{}.img", std::process::id()));
    if path.exists() {
        std::fs::remove_file(&path).expect("Failed to remove old test image");
    }
    path
}
