use std::io::Write;

use anyhow::Result;
use crossterm::{
    queue,
    style::{Attribute, Color, ContentStyle, PrintStyledContent, Stylize},
};
use richtext_facets_engine::{FormatFeature, Segment};
use serde::Serialize;

/// Segment shape for JSON output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentOut<'a> {
    pub byte_start: usize,
    pub byte_end: usize,
    pub text: &'a str,
    pub features: &'a [&'a FormatFeature],
}

impl<'a> From<&'a Segment<'a>> for SegmentOut<'a> {
    fn from(seg: &'a Segment<'a>) -> Self {
        Self {
            byte_start: seg.span.start,
            byte_end: seg.span.end,
            text: seg.text,
            features: &seg.features,
        }
    }
}

fn style_for(features: &[&FormatFeature]) -> ContentStyle {
    let mut style = ContentStyle::new();
    for feature in features {
        match feature {
            FormatFeature::Bold => style.attributes.set(Attribute::Bold),
            FormatFeature::Italic => style.attributes.set(Attribute::Italic),
            FormatFeature::Code | FormatFeature::CodeBlock { .. } => {
                style.foreground_color = Some(Color::Yellow);
            }
            FormatFeature::Link { .. } => style.attributes.set(Attribute::Underlined),
            FormatFeature::Mention { .. } | FormatFeature::Tag { .. } => {
                style.foreground_color = Some(Color::Cyan);
            }
        }
    }
    style
}

/// Writes segments with terminal styling; link targets follow their text.
pub fn preview<W: Write>(out: &mut W, segments: &[Segment<'_>]) -> Result<()> {
    for seg in segments {
        let style = style_for(&seg.features);
        queue!(out, PrintStyledContent(style.apply(seg.text)))?;

        for feature in &seg.features {
            if let FormatFeature::Link { uri } = feature {
                queue!(out, PrintStyledContent(format!(" <{uri}>").dim()))?;
            }
        }
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
