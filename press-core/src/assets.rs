use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Copy everything under `assets_dir` into `output_dir`, keeping the
/// directory structure. Returns how many files were copied. A missing
/// assets directory copies nothing.
pub fn copy_assets(assets_dir: &Path, output_dir: &Path) -> io::Result<u64> {
    if !assets_dir.is_dir() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(assets_dir).into_iter().filter_map(|e| e.ok()) {
        let Ok(relative) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        let target = output_dir.join(relative);
        if entry.path().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}
