use super::LOG_TARGET;
use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use walkdir::WalkDir;

/// Find every regular file named `file_name` below `root`.
///
/// Symbolic links are not followed. Entries are visited in file name order within
/// each directory, so the result is stable for an unchanged tree. Any traversal
/// error aborts the scan.
#[expect(clippy::filetype_is_file, reason = "only regular files can be metadata documents")]
pub fn find_metadata(root: &Utf8Path, file_name: &str) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();

    for entry_result in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry_result.into_app_err_with(|| format!("could not walk directory '{root}'"))?;

        if !entry.file_type().is_file() || entry.file_name() != file_name {
            continue;
        }

        let path = Utf8PathBuf::from_path_buf(entry.into_path())
            .map_err(|path| app_err!("metadata path '{}' is not valid UTF-8", path.display()))?;

        log::debug!(target: LOG_TARGET, "Found metadata document '{path}'");
        files.push(path);
    }

    Ok(files)
}
