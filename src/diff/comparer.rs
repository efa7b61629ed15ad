use serde_json::Value as JsonValue;
use treediff::diff;

use super::error::DiffError;
use super::report::{generate_readable_summary, generate_text_diff};
use super::structured::{Change, ChangeCollector};
use crate::converters::markdown::document_to_markdown;
use crate::models::document::Document;

const DEFAULT_CONTEXT_RADIUS: usize = 3;

/// Builder for a [`Comparer`] holding the base document.
#[derive(Default)]
pub struct ComparerBuilder {
    base: Option<Document>,
    context_radius: Option<usize>,
}

impl ComparerBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the document later documents are compared against.
    pub fn set_base(mut self, base: Document) -> Self {
        self.base = Some(base);
        self
    }

    /// Lines of context around each hunk of the text diffs.
    pub fn set_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = Some(radius);
        self
    }

    pub fn build(self) -> Result<Comparer, DiffError> {
        let base = self.base.ok_or(DiffError::MissingBase)?;
        Ok(Comparer {
            base,
            context_radius: self.context_radius.unwrap_or(DEFAULT_CONTEXT_RADIUS),
        })
    }
}

/// Compares documents against a stored base.
pub struct Comparer {
    base: Document,
    context_radius: usize,
}

impl Comparer {
    pub fn compare(&self, other: &Document) -> Result<ComparisonResult, DiffError> {
        let base_val: JsonValue = serde_json::to_value(&self.base)?;
        let other_val: JsonValue = serde_json::to_value(other)?;

        let mut collector = ChangeCollector::new();
        diff(&base_val, &other_val, &mut collector);
        log::debug!("[diff] {} structural changes", collector.changes.len());

        Ok(ComparisonResult {
            base: self.base.clone(),
            compared: other.clone(),
            changes: collector.changes,
            context_radius: self.context_radius,
        })
    }
}

/// The outcome of comparing two documents.
pub struct ComparisonResult {
    base: Document,
    compared: Document,
    changes: Vec<Change>,
    context_radius: usize,
}

impl ComparisonResult {
    pub fn is_identical(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn get_structured_diff(&self) -> &[Change] {
        &self.changes
    }

    /// Unified diff of the two documents' pretty JSON.
    pub fn get_json_diff(&self) -> Result<String, DiffError> {
        let old = serde_json::to_string_pretty(&self.base)?;
        let new = serde_json::to_string_pretty(&self.compared)?;
        generate_text_diff(&old, &new, "a/deck.json", "b/deck.json", self.context_radius)
    }

    /// Unified diff of the two documents' Markdown text dumps.
    pub fn get_text_diff(&self) -> Result<String, DiffError> {
        let old = document_to_markdown(&self.base)?;
        let new = document_to_markdown(&self.compared)?;
        generate_text_diff(&old, &new, "a/deck.md", "b/deck.md", self.context_radius)
    }

    pub fn get_readable_diff(&self) -> Result<String, DiffError> {
        generate_readable_summary(&self.changes)
    }
}
