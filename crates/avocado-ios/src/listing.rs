//! Directory listing helpers shared by the podspec and workspace scans

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;

/// Names of the immediate entries of `dir`, sorted so that first-match
/// lookups do not depend on filesystem iteration order.
///
/// Names are kept as `OsString` so they join back onto `dir` unchanged.
pub(crate) fn sorted_entry_names(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names: Vec<OsString> = fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.file_name())
        .collect();
    names.sort();
    Ok(names)
}

fn has_suffix(name: &OsStr, suffix: &str) -> bool {
    name.to_string_lossy().ends_with(suffix)
}

pub(crate) fn first_with_suffix<'a>(names: &'a [OsString], suffix: &str) -> Option<&'a OsStr> {
    names
        .iter()
        .map(OsString::as_os_str)
        .find(|name| has_suffix(name, suffix))
}

pub(crate) fn count_with_suffix(names: &[OsString], suffix: &str) -> usize {
    names.iter().filter(|name| has_suffix(name, suffix)).count()
}
