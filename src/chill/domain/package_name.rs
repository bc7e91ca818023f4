/// Normalizes a distribution or extra name into its comparison key
///
/// Lowercases the name and collapses every run of `-`, `_` and `.` into a
/// single `-` (PEP 503), so `Foo_Bar`, `foo-bar` and `foo.bar` share one key.
/// Dots fold along with underscores, matching how installers look names up.
pub fn canonicalize_name(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.trim().chars() {
        if matches!(c, '-' | '_' | '.') {
            pending_separator = true;
            continue;
        }
        if pending_separator {
            key.push('-');
            pending_separator = false;
        }
        key.extend(c.to_lowercase());
    }

    if pending_separator {
        key.push('-');
    }
    key
}
