use std::collections::BTreeMap;
use std::fmt::Write;

use similar::{ChangeTag, TextDiff};

use super::error::DiffError;
use super::structured::{Change, ChangeType, ValueRepr};

/// Unified diff between two text dumps, prefixed by a line count summary.
pub fn generate_text_diff(
    base_text: &str,
    changed_text: &str,
    base_filename: &str,
    changed_filename: &str,
    context_radius: usize,
) -> Result<String, DiffError> {
    let diff = TextDiff::from_lines(base_text, changed_text);

    let (mut added, mut removed) = (0, 0);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => added += 1,
            ChangeTag::Delete => removed += 1,
            ChangeTag::Equal => (),
        }
    }

    let mut output = String::new();
    writeln!(
        output,
        "## Summary of Changes\n\n- Lines Added: {}\n- Lines Removed: {}\n\n---\n",
        added, removed
    )?;
    write!(
        output,
        "{}",
        diff.unified_diff()
            .context_radius(context_radius)
            .header(base_filename, changed_filename)
    )?;
    Ok(output)
}

/// Human-readable list of structural changes, grouped by slide.
pub fn generate_readable_summary(changes: &[Change]) -> Result<String, DiffError> {
    if changes.is_empty() {
        return Ok("No changes detected.\n".to_string());
    }

    let mut by_slide: BTreeMap<usize, Vec<&Change>> = BTreeMap::new();
    let mut document_level: Vec<&Change> = Vec::new();
    for change in changes {
        match change.slide_index() {
            Some(index) => by_slide.entry(index).or_default().push(change),
            None => document_level.push(change),
        }
    }

    let count = |kind: ChangeType| changes.iter().filter(|c| c.change_type == kind).count();
    let mut output = String::new();
    writeln!(
        output,
        "{} changes ({} added, {} removed, {} modified)",
        changes.len(),
        count(ChangeType::Added),
        count(ChangeType::Removed),
        count(ChangeType::Modified)
    )?;

    if !document_level.is_empty() {
        writeln!(output, "\nDocument:")?;
        for change in document_level {
            writeln!(output, "  {}", describe(change, &change.path))?;
        }
    }
    for (index, slide_changes) in by_slide {
        writeln!(output, "\nSlide {}:", index + 1)?;
        for change in slide_changes {
            writeln!(output, "  {}", describe(change, change.slide_path()))?;
        }
    }
    Ok(output)
}

fn describe(change: &Change, path: &str) -> String {
    let show = |value: &Option<ValueRepr>| {
        value
            .as_ref()
            .map(|v| v.format_for_display())
            .unwrap_or_default()
    };
    match change.change_type {
        ChangeType::Added => format!("+ {}: {}", path, show(&change.new_value)),
        ChangeType::Removed => format!("- {}: {}", path, show(&change.old_value)),
        ChangeType::Modified => format!(
            "~ {}: {} -> {}",
            path,
            show(&change.old_value),
            show(&change.new_value)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_diff_has_summary_and_hunks() {
        let output = generate_text_diff("a\nb\nc\n", "a\nB\nc\n", "a/deck.md", "b/deck.md", 3)
            .expect("diff");
        assert!(output.contains("- Lines Added: 1\n- Lines Removed: 1"));
        assert!(output.contains("--- a/deck.md"));
        assert!(output.contains("+++ b/deck.md"));
        assert!(output.contains("@@"));
        assert!(output.contains("-b\n+B\n"));
    }

    #[test]
    fn test_summary_groups_by_slide() {
        let changes = vec![
            Change {
                path: "layoutName".to_string(),
                change_type: ChangeType::Modified,
                old_value: Some(ValueRepr::String("LAYOUT_16x9".to_string())),
                new_value: Some(ValueRepr::String("LAYOUT_4x3".to_string())),
            },
            Change {
                path: "slides[1].primitives[2]".to_string(),
                change_type: ChangeType::Removed,
                old_value: Some(ValueRepr::Object("{text}".to_string())),
                new_value: None,
            },
        ];
        let summary = generate_readable_summary(&changes).expect("summary");
        assert!(summary.starts_with("2 changes (0 added, 1 removed, 1 modified)"));
        assert!(summary.contains("Document:\n  ~ layoutName: 'LAYOUT_16x9' -> 'LAYOUT_4x3'"));
        assert!(summary.contains("Slide 2:\n  - primitives[2]: {text}"));
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(generate_readable_summary(&[]).expect("summary"), "No changes detected.\n");
    }
}
