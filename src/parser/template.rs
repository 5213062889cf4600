use serde::Deserialize;

/// Section labels used by every page layout.
const COMMON_HEADERS: &[&str] = &[
    "Strength A:",
    "Strength B:",
    "Strength:",
    "WOD:",
    "Skill:",
    "Warm:",
    "Finisher:",
];

const CLASS_SCHEDULE_HEADER: &str = "9:30 and 10:30 am Regular CrossFit";

/// The two page layouts the blog has used for WOD posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Content ends at the "Athlete of the Month" widget; four lines of
    /// post chrome precede the workout.
    AthleteOfThe,
    /// Content ends at the "WOD LOGGING" box; the post title and a by-line
    /// precede the workout.
    WodLogging,
}

/// What leads the workout body in the extracted region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preamble {
    /// Drop this many lines. Counted after block-level line breaking and
    /// after blank and whitespace-only lines are removed.
    Skip(usize),
    /// Keep the first line as the title, drop the by-line after it.
    TitleThenByline,
}

impl Template {
    pub const ALL: [Template; 2] = [Template::AthleteOfThe, Template::WodLogging];

    pub fn end_anchor(self) -> &'static str {
        match self {
            Template::AthleteOfThe => "Athlete of the",
            Template::WodLogging => "WOD LOGGING",
        }
    }

    pub fn preamble(self) -> Preamble {
        match self {
            Template::AthleteOfThe => Preamble::Skip(4),
            Template::WodLogging => Preamble::TitleThenByline,
        }
    }

    pub fn is_header(self, line: &str) -> bool {
        COMMON_HEADERS.contains(&line)
            || (self == Template::AthleteOfThe && line == CLASS_SCHEDULE_HEADER)
    }
}

/// Either probe the page for its layout or force one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum TemplateChoice {
    #[default]
    Auto,
    Fixed(Template),
}

impl TryFrom<String> for TemplateChoice {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(TemplateChoice::Auto),
            "athlete" | "a" => Ok(TemplateChoice::Fixed(Template::AthleteOfThe)),
            "logging" | "b" => Ok(TemplateChoice::Fixed(Template::WodLogging)),
            _ => Err(format!(
                "unknown template `{value}` (expected auto, athlete or logging)"
            )),
        }
    }
}
