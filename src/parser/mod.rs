pub mod region;
pub mod render;
pub mod template;
pub mod text;

use crate::error::WodError;
use render::FormattedWorkout;
use template::TemplateChoice;

/// Three-pass pipeline: html → visible text → workout region → bulleted note.
pub fn format_page(body: &[u8], choice: TemplateChoice) -> Result<FormattedWorkout, WodError> {
    let text = text::extract_text(body);
    let region = region::locate(text.as_str(), choice)?;
    render::render(&region)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use template::Template;

    fn fixture(name: &str) -> Vec<u8> {
        std::fs::read(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    #[test]
    fn athlete_of_the_month_page() {
        let out = format_page(&fixture("wod_athlete"), TemplateChoice::Auto).unwrap();
        assert_eq!(
            out.to_string(),
            "- 9:30 and 10:30 am Regular CrossFit\n\
             - Warm:\n\
             \x20 - 2 rounds\n\
             \x20 - 10 air squats\n\
             \x20 - 10 push-ups\n\
             - Strength A:\n\
             \x20 - Back squat 5-5-5\n\
             - WOD:\n\
             \x20 - 3 Rounds for time\n\
             \x20 - 400m run\n\
             \x20 - 21 kettlebell swings (53/35)\n"
        );
    }

    #[test]
    fn wod_logging_page() {
        let out = format_page(&fixture("wod_logging"), TemplateChoice::Auto).unwrap();
        assert_eq!(out.title.as_deref(), Some("WOD Wednesday Sept 11"));
        assert_eq!(
            out.to_string(),
            "WOD Wednesday Sept 11\n\
             \x20 - 9:30 and 10:30 am Regular CrossFit\n\
             - Skill:\n\
             \x20 - Double unders\n\
             - WOD:\n\
             \x20 - AMRAP 12\n\
             \x20 - 10 burpees\n\
             \x20 - 15 wall balls\n"
        );
    }

    #[test]
    fn forcing_the_wrong_template_fails() {
        let err = format_page(&fixture("wod_athlete"), TemplateChoice::Fixed(Template::WodLogging))
            .unwrap_err();
        assert!(matches!(err, WodError::UnexpectedPageFormat(_)));
    }

    #[test]
    fn plain_text_end_to_end() {
        let page = "...FAQ\nTitle\nPosted on\nby Coach\nShare\n  WOD:\n  3 Rounds\nAthlete of the ...";
        let out = format_page(page.as_bytes(), TemplateChoice::Auto).unwrap();
        assert_eq!(out.to_string(), "- WOD:\n  - 3 Rounds\n");
    }

    #[test]
    fn preamble_counts_rendered_non_blank_lines() {
        let page = "<p>FAQ</p><p>&nbsp;</p><p>  </p><div>Title</div><div>Posted</div>\
                    <div>by Coach<br>Share</div><p>WOD:</p><p>run</p><p>Athlete of the Month</p>";
        let out = format_page(page.as_bytes(), TemplateChoice::Auto).unwrap();
        assert_eq!(out.to_string(), "- WOD:\n  - run\n");
    }

    #[test]
    fn deterministic() {
        let page = fixture("wod_athlete");
        let a = format_page(&page, TemplateChoice::Auto).unwrap().to_string();
        let b = format_page(&page, TemplateChoice::Auto).unwrap().to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn not_found_page_has_no_anchor() {
        let page = b"<html><body><h1>Page not found</h1><p>Try the archive.</p></body></html>";
        let err = format_page(page, TemplateChoice::Auto).unwrap_err();
        assert!(matches!(err, WodError::UnexpectedPageFormat(m) if m.contains("FAQ")));
    }
}
