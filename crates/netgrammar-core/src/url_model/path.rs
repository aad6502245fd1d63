//! Path merging and dot-segment removal.

/// Merges a relative path onto a base path.
///
/// Everything after the base path's last `/` is replaced by `relative`. When the
/// base has no `/` at all, `/` is inserted if the URL has an authority.
pub(crate) fn merge_paths(base: &str, relative: &str, has_authority: bool) -> String {
    match base.rfind('/') {
        Some(slash) => format!("{}{}", &base[..=slash], relative),
        None if has_authority => format!("/{relative}"),
        None => relative.to_string(),
    }
}

/// Removes `.` and `..` segments from a path.
///
/// - every `/./` becomes `/`
/// - `/seg/../` collapses to `/`, unless `seg` is itself `..`
/// - a `/../` at the very start is dropped
/// - a trailing `/..` removes the last complete segment
/// - a leading `./` is dropped when more text follows
/// - a trailing `/.` loses its `.`
pub fn remove_dot_segments(path: &str) -> String {
    let mut path = path.to_string();

    while let Some(i) = path.find("/./") {
        path.replace_range(i..i + 2, "");
    }

    let mut from = 0;
    while let Some(found) = path[from..].find("/../").map(|i| i + from) {
        if found == 0 {
            path.replace_range(..3, "");
            from = 0;
            continue;
        }
        match path[..found].rfind('/') {
            Some(prev) if &path[prev..found] != "/.." => {
                path.replace_range(prev..found + 3, "");
                from = 0;
            }
            _ => from = found + 3,
        }
    }

    while path.ends_with("/..") {
        let i = path.len() - 3;
        match path[..i].rfind('/') {
            Some(prev) if &path[prev..i] != "/.." => path.truncate(prev + 1),
            _ => break,
        }
    }

    if path.starts_with("./") && path.len() > 2 {
        path.replace_range(..2, "");
    }

    if path.ends_with("/.") {
        path.pop();
    }

    path
}
