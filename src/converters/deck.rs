//! Assembles a [`Document`] from a [`Presentation`]: one page per slide, each
//! with an optional metadata header, a title band and the laid-out content.

use log::{debug, info};

use crate::config::DeckConfig;
use crate::emitter::SlideEmitter;
use crate::errors::Result;
use crate::layout::LayoutEngine;
use crate::models::{
    colors::Color,
    document::{Document, Fill, ShapeAttributes, ShapeKind, SlidePage, TextAttributes},
    geometry::LayoutBox,
    slide::{Metadata, Presentation, Slide},
    style::{TextAlign, VerticalAlign},
};
use crate::style::palette;

// Header band
const HEADER_TOP: f64 = 0.25;
const COMPANY_WIDTH: f64 = 5.0;
const COMPANY_HEIGHT: f64 = 0.25;
const COMPANY_ADVANCE: f64 = 0.28;
const REPORT_TITLE_HEIGHT: f64 = 0.2;
const REPORT_TITLE_ADVANCE: f64 = 0.22;
const DETAILS_WIDTH: f64 = 2.2;
const DETAILS_HEIGHT: f64 = 0.4;
const HEADER_RULE_GAP: f64 = 0.08;
const HEADER_RULE_MIN_Y: f64 = 0.68;
const HEADER_RULE_HEIGHT: f64 = 0.015;
const HEADER_RULE_ADVANCE: f64 = 0.15;
/// Where the title band starts on slides without a header.
const NO_HEADER_TOP: f64 = 0.6;

// Title band
const TITLE_HEIGHT: f64 = 0.4;
const TITLE_ADVANCE: f64 = 0.42;
const SUBTITLE_HEIGHT: f64 = 0.25;
const SUBTITLE_ADVANCE: f64 = 0.28;
const ACCENT_HEIGHT: f64 = 0.03;
const ACCENT_ADVANCE: f64 = 0.12;
const MIN_CONTENT_HEIGHT: f64 = 0.5;

/// Builder for a [`DeckAssembler`].
#[derive(Default)]
pub struct DeckAssemblerBuilder {
    config: Option<DeckConfig>,
}

impl DeckAssemblerBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the page configuration; defaults to [`DeckConfig::default`].
    pub fn config(mut self, config: DeckConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the assembler, rejecting configurations without a usable page.
    pub fn build(self) -> Result<DeckAssembler> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        Ok(DeckAssembler { config })
    }
}

/// Turns presentations into documents. Slides are independent of each other.
#[derive(Debug, Clone)]
pub struct DeckAssembler {
    config: DeckConfig,
}

impl DeckAssembler {
    pub fn builder() -> DeckAssemblerBuilder {
        DeckAssemblerBuilder::new()
    }

    /// Lays out every slide of `presentation`, keeping input order.
    pub fn convert_presentation(&self, presentation: &Presentation) -> Result<Document> {
        let metadata = presentation.metadata.as_ref();
        let slides: Vec<SlidePage> = presentation
            .slides
            .iter()
            .enumerate()
            .map(|(index, slide)| self.render_slide(index, slide, metadata))
            .collect();
        info!("[deck] assembled {} slides", slides.len());

        Ok(Document {
            canvas: self.config.canvas,
            layout_name: self.config.layout_name.clone(),
            metadata: presentation.metadata.clone(),
            slides,
        })
    }

    /// Renders one slide: header band, title band, then the content tree.
    pub fn render_slide(&self, index: usize, slide: &Slide, metadata: Option<&Metadata>) -> SlidePage {
        let mut emitter = SlideEmitter::new();
        let top = self
            .header_band(&mut emitter, metadata, slide)
            .unwrap_or(NO_HEADER_TOP);
        let content_top = self.title_band(&mut emitter, slide, top);

        if let Some(content) = &slide.content {
            let frame = self.content_frame(content_top);
            debug!("[deck] slide {} content box {:?}", index + 1, frame);
            LayoutEngine::new(&mut emitter).layout_root(content, frame);
        }

        SlidePage {
            index,
            background: self.config.background,
            primitives: emitter.finish(),
        }
    }

    /// The region the content tree is laid out in, below a title band ending at `top`.
    pub fn content_frame(&self, top: f64) -> LayoutBox {
        let height = (self.config.canvas.height - top - self.config.bottom_margin).max(MIN_CONTENT_HEIGHT);
        LayoutBox::new(self.config.margin_x, top, self.config.content_width, height)
    }

    /// Draws the metadata header and returns where the title band starts, or
    /// `None` when no metadata field is shown on this slide.
    fn header_band(
        &self,
        emitter: &mut SlideEmitter,
        metadata: Option<&Metadata>,
        slide: &Slide,
    ) -> Option<f64> {
        let metadata = metadata?;
        let x = self.config.margin_x;
        let mut cursor = HEADER_TOP;
        let mut baseline = HEADER_TOP;
        let mut shown = false;

        if let Some(company) = present(&metadata.company) {
            emitter.text(
                LayoutBox::new(x, cursor, COMPANY_WIDTH, COMPANY_HEIGHT),
                company,
                plain_text(14.0, true, palette::BLUE_600, TextAlign::Left),
            );
            baseline = cursor + COMPANY_ADVANCE;
            cursor = baseline;
            shown = true;
        }

        // The report title only repeats when it differs from the slide's own title.
        if let Some(title) = present(&metadata.title).filter(|t| *t != slide.title) {
            emitter.text(
                LayoutBox::new(x, cursor, COMPANY_WIDTH, REPORT_TITLE_HEIGHT),
                title,
                plain_text(10.0, false, palette::GRAY_600, TextAlign::Left),
            );
            baseline = cursor + REPORT_TITLE_ADVANCE;
            shown = true;
        }

        let subtitle = present(&metadata.subtitle).filter(|s| Some(*s) != slide.subtitle.as_deref());
        let details: Vec<&str> = [
            subtitle,
            present(&metadata.department),
            present(&metadata.presenter),
            present(&metadata.year),
            present(&metadata.date),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !details.is_empty() {
            emitter.text(
                LayoutBox::new(
                    x + self.config.content_width - DETAILS_WIDTH,
                    HEADER_TOP,
                    DETAILS_WIDTH,
                    DETAILS_HEIGHT,
                ),
                &details.join("\n"),
                plain_text(9.0, false, palette::GRAY_600, TextAlign::Right),
            );
            shown = true;
        }

        if !shown {
            return None;
        }
        let rule_y = (baseline + HEADER_RULE_GAP).max(HEADER_RULE_MIN_Y);
        self.rule(emitter, rule_y, HEADER_RULE_HEIGHT, palette::GRAY_200);
        Some(rule_y + HEADER_RULE_ADVANCE)
    }

    /// Draws the title, subtitle and accent rule from `top`; returns where content starts.
    fn title_band(&self, emitter: &mut SlideEmitter, slide: &Slide, top: f64) -> f64 {
        let x = self.config.margin_x;
        let width = self.config.content_width;
        let mut cursor = top;

        if !slide.title.is_empty() {
            emitter.text(
                LayoutBox::new(x, cursor, width, TITLE_HEIGHT),
                &slide.title,
                plain_text(20.0, true, palette::GRAY_800, TextAlign::Left),
            );
            cursor += TITLE_ADVANCE;
        }
        if let Some(subtitle) = present(&slide.subtitle) {
            emitter.text(
                LayoutBox::new(x, cursor, width, SUBTITLE_HEIGHT),
                subtitle,
                plain_text(12.0, false, palette::GRAY_600, TextAlign::Left),
            );
            cursor += SUBTITLE_ADVANCE;
        }

        self.rule(emitter, cursor, ACCENT_HEIGHT, palette::BLUE_600);
        cursor + ACCENT_ADVANCE
    }

    /// A full-width filled bar without an outline.
    fn rule(&self, emitter: &mut SlideEmitter, y: f64, height: f64, color: Color) {
        emitter.shape(
            ShapeKind::Rect,
            LayoutBox::new(self.config.margin_x, y, self.config.content_width, height),
            ShapeAttributes {
                fill: Some(Fill::Solid(color)),
                line: None,
                corner_radius: None,
                shadow: None,
            },
        );
    }
}

/// Converts a presentation with the default page configuration.
pub fn convert_presentation(presentation: &Presentation) -> Result<Document> {
    DeckAssembler::builder().build()?.convert_presentation(presentation)
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn plain_text(font_size: f64, bold: bool, color: Color, align: TextAlign) -> TextAttributes {
    TextAttributes {
        font_size,
        bold,
        color,
        align,
        valign: VerticalAlign::Top,
    }
}
