/// Export filename: `{stem}.{extension}`, where the stem is the lower-cased
/// title with every non-alphanumeric character removed.
pub fn export_filename(title: &str, extension: &str) -> String {
    format!("{}.{extension}", filename_stem(title))
}

/// Falls back to `untitled` when no alphanumeric character survives.
pub fn filename_stem(title: &str) -> String {
    let stem: String = title
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if stem.is_empty() {
        "untitled".to_string()
    } else {
        stem
    }
}
