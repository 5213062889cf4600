use std::fmt;

use super::region::Region;
use super::template::Preamble;
use crate::error::WodError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Section,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

/// A workout as a bulleted note: section headers at the top level, everything
/// else nested under them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedWorkout {
    pub title: Option<String>,
    pub lines: Vec<Line>,
}

impl fmt::Display for FormattedWorkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "{title}")?;
        }
        for line in &self.lines {
            let prefix = match line.kind {
                LineKind::Section => "- ",
                LineKind::Detail => "  - ",
            };
            writeln!(f, "{prefix}{}", line.text)?;
        }
        Ok(())
    }
}

/// Drop the post chrome and classify what's left.
pub fn render(region: &Region<'_>) -> Result<FormattedWorkout, WodError> {
    let mut lines = region.text.lines().map(str::trim).filter(|l| !l.is_empty());

    let title = match region.template.preamble() {
        Preamble::Skip(n) => {
            for _ in lines.by_ref().take(n) {}
            None
        }
        Preamble::TitleThenByline => {
            let title = lines.next().map(str::to_string);
            lines.next();
            title
        }
    };

    let body: Vec<Line> = lines
        .map(|text| Line {
            kind: if region.template.is_header(text) {
                LineKind::Section
            } else {
                LineKind::Detail
            },
            text: text.to_string(),
        })
        .collect();

    if body.is_empty() {
        return Err(WodError::UnexpectedPageFormat(
            "no workout lines between the anchors".to_string(),
        ));
    }

    Ok(FormattedWorkout { title, lines: body })
}
