/// Normalize a Notion label into an Obsidian tag
/// "Personal Notes" -> "personal-notes", "Work/Meetings" -> "work-meetings"
fn normalize_tag(label: &str) -> String {
    label.to_lowercase().replace(' ', "-").replace('/', "-")
}

/// Build a front-matter tag block from a Notion labels value
/// "Work, Personal Notes" -> "---\nTags:\n- work\n- personal-notes\n---"
///
/// Labels are split on ", " only, and duplicates are kept in order.
pub fn format_tags(labels: &str) -> String {
    let mut output = String::from("---\nTags:\n");
    for tag in labels.split(", ").map(normalize_tag) {
        output.push_str(&format!("- {}\n", tag));
    }
    output.push_str("---");
    output
}
