use crate::errors::Result;
use crate::layout::text::extract_text;
use crate::models::{
    document::{Document, Primitive, SlidePage, TablePrimitive},
    slide::Presentation,
};
use std::cmp::Ordering;
use std::fmt::Write;

/// Compares two primitives by their top edge, then their left edge.
fn compare_primitives_by_position(a: &Primitive, b: &Primitive) -> Ordering {
    let (a, b) = (a.frame(), b.frame());
    a.y.partial_cmp(&b.y)
        .unwrap_or(Ordering::Equal)
        .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
}

/// Formats a table as one line per row, cells separated by ` | `.
fn table_text(table: &TablePrimitive) -> Option<String> {
    let rows: Vec<String> = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.text.trim())
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .filter(|row| !row.is_empty())
        .collect();
    if rows.is_empty() {
        None
    } else {
        Some(rows.join("\n"))
    }
}

/// Text of one page in reading order. Shapes carry no text and are skipped.
fn page_text(page: &SlidePage) -> Option<String> {
    let mut sorted: Vec<&Primitive> = page.primitives.iter().collect();
    sorted.sort_by(|a, b| compare_primitives_by_position(a, b));

    let parts: Vec<String> = sorted
        .into_iter()
        .filter_map(|primitive| match primitive {
            Primitive::Text(text) => {
                let trimmed = text.text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Primitive::Table(table) => table_text(table),
            Primitive::Shape(_) => None,
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}

/// Renders the text of an assembled document as Markdown, one section per
/// page. Pages without any text are left out.
pub fn document_to_markdown(document: &Document) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "# Presentation")?;
    match document.metadata.as_ref().and_then(|m| m.title.as_deref()) {
        Some(title) => writeln!(out, "{}\n", title)?,
        None => out.push('\n'),
    }

    let mut first = true;
    for page in &document.slides {
        let Some(content) = page_text(page) else {
            continue;
        };
        if !first {
            writeln!(out, "\n---\n")?;
        }
        first = false;
        writeln!(out, "## Slide {}\n", page.index + 1)?;
        writeln!(out, "{}", content)?;
    }
    Ok(out)
}

/// Outlines the input presentation without laying it out: each slide's
/// title, subtitle and flattened content text.
pub fn presentation_outline(presentation: &Presentation) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "# Presentation")?;
    match presentation.metadata.as_ref().and_then(|m| m.title.as_deref()) {
        Some(title) => writeln!(out, "{}\n", title)?,
        None => out.push('\n'),
    }

    for (index, slide) in presentation.slides.iter().enumerate() {
        if index > 0 {
            writeln!(out, "\n---\n")?;
        }
        writeln!(out, "## Slide {}\n", index + 1)?;
        if !slide.title.is_empty() {
            writeln!(out, "### {}", slide.title)?;
        }
        if let Some(subtitle) = &slide.subtitle {
            writeln!(out, "_{}_", subtitle)?;
        }
        if let Some(content) = &slide.content {
            let text = extract_text(content);
            if !text.is_empty() {
                writeln!(out, "\n{}", text)?;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::deck::convert_presentation;
    use crate::models::slide::Metadata;
    use serde_json::json;

    fn sample() -> Presentation {
        serde_json::from_value(json!({
            "slides": [
                {
                    "title": "Numbers",
                    "content": {
                        "tag": "table",
                        "children": [
                            { "tag": "tr", "children": [
                                { "tag": "th", "children": ["Region"] },
                                { "tag": "th", "children": ["Sales"] }
                            ]},
                            { "tag": "tr", "children": [
                                { "tag": "td", "children": ["North"] },
                                { "tag": "td", "children": ["12"] }
                            ]}
                        ]
                    }
                },
                { "title": "" },
                { "title": "Wrap-up", "subtitle": "Next steps", "content": { "tag": "p", "children": ["Ship it"] } }
            ]
        }))
        .expect("sample presentation")
    }

    #[test]
    fn test_document_markdown_reads_top_to_bottom() {
        let document = convert_presentation(&sample()).expect("conversion");
        let markdown = document_to_markdown(&document).expect("markdown");

        assert!(markdown.starts_with("# Presentation\n\n## Slide 1\n\nNumbers\n"));
        assert!(markdown.contains("Region | Sales\nNorth | 12"));
        // The second slide draws only its accent rule.
        assert!(!markdown.contains("## Slide 2"));
        assert!(markdown.contains("\n---\n\n## Slide 3\n\nWrap-up\nNext steps\nShip it\n"));
    }

    #[test]
    fn test_outline_lists_every_slide() {
        let mut presentation = sample();
        presentation.metadata = Some(Metadata {
            title: Some("Quarterly".to_string()),
            ..Default::default()
        });
        let outline = presentation_outline(&presentation).expect("outline");
        assert!(outline.starts_with("# Presentation\nQuarterly\n\n## Slide 1\n\n### Numbers\n"));
        assert!(outline.contains("## Slide 2"));
        assert!(outline.contains("North"));
        assert!(outline.ends_with("### Wrap-up\n_Next steps_\n\nShip it\n"));
    }
}
