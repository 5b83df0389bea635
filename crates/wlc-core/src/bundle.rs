//! Packaging of uploaded files into a mountable artifact bundle.
//!
//! The longest directory prefix shared by every path becomes the mount point, and the files are
//! re-keyed relative to it.
use tracing::debug;
use wlc_model::FileBundle;

/// Path separator used in bundle keys.
const SEPARATOR: char = '/';

/// Result of [`package`]: where to mount the bundle and the re-keyed files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackagedBundle {
    /// Common root of all input paths, ending in `/`; empty when there is none.
    pub mount_point: String,
    /// Files keyed relative to `mount_point`.
    pub files: FileBundle,
}

/// Longest prefix ending in `/` shared by every key of `bundle`.
///
/// Candidates are taken from the first key, cut back one separator at a time.
/// Returns an empty string for an empty bundle or when the keys share no directory.
pub fn common_root(bundle: &FileBundle) -> String {
    let Some(first) = bundle.paths().next() else {
        return String::new();
    };

    let mut end = first.rfind(SEPARATOR);
    while let Some(idx) = end {
        let candidate = &first[..=idx];
        if bundle.paths().all(|p| p.starts_with(candidate)) {
            return candidate.to_string();
        }
        end = first[..idx].rfind(SEPARATOR);
    }
    String::new()
}

/// Split `bundle` into a mount point and files relative to it.
///
/// Never fails: paths without a common directory pass through unchanged under an empty mount point.
pub fn package(bundle: FileBundle) -> PackagedBundle {
    if bundle.is_empty() {
        return PackagedBundle::default();
    }

    let root = common_root(&bundle);
    debug!(root = %root, files = bundle.len(), "extracted common root for bundle");

    if root.is_empty() {
        return PackagedBundle {
            mount_point: root,
            files: bundle,
        };
    }

    let files = bundle
        .0
        .into_iter()
        .map(|(path, payload)| {
            let relative = path.strip_prefix(root.as_str()).unwrap_or(&path).to_string();
            (relative, payload)
        })
        .collect();

    PackagedBundle {
        mount_point: root,
        files,
    }
}
