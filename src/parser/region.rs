use tracing::debug;

use super::template::{Template, TemplateChoice};
use crate::error::WodError;

pub const START_ANCHOR: &str = "FAQ";

/// The slice of page text between the start anchor and the template's end anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region<'a> {
    pub template: Template,
    pub text: &'a str,
}

/// Cut the workout region out of the page text.
///
/// The region starts right after the first `FAQ` (the nav link) and runs up to
/// the first end anchor after it. In `Auto` mode whichever known end anchor
/// comes first decides the template.
pub fn locate(text: &str, choice: TemplateChoice) -> Result<Region<'_>, WodError> {
    let start = text
        .find(START_ANCHOR)
        .map(|i| i + START_ANCHOR.len())
        .ok_or_else(|| {
            WodError::UnexpectedPageFormat(format!("start anchor `{START_ANCHOR}` not found"))
        })?;
    let rest = &text[start..];

    let candidates: &[Template] = match choice {
        TemplateChoice::Auto => &Template::ALL,
        TemplateChoice::Fixed(ref t) => std::slice::from_ref(t),
    };

    let (template, end) = candidates
        .iter()
        .filter_map(|&t| rest.find(t.end_anchor()).map(|i| (t, i)))
        .min_by_key(|&(_, i)| i)
        .ok_or_else(|| {
            let anchors: Vec<_> = candidates.iter().map(|t| t.end_anchor()).collect();
            WodError::UnexpectedPageFormat(format!(
                "no end anchor ({}) after `{START_ANCHOR}`",
                anchors.join(" / ")
            ))
        })?;

    debug!(?template, start, len = end, "Located WOD region");
    Ok(Region {
        template,
        text: &rest[..end],
    })
}
