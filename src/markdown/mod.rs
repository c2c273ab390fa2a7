use comrak::{markdown_to_html, Options};

fn lesson_options() -> Options {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    // Lessons carry media that was inserted in earlier editing sessions.
    options.render.unsafe_ = true;
    options
}

/// Render a lesson markdown file to the HTML shown in the editable container.
pub(crate) fn render_markdown(text: &str) -> String {
    markdown_to_html(text, &lesson_options())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_headings_and_lists() {
        let html = render_markdown("# Day 1\n\n- warm up\n- reading\n");
        assert!(html.contains("<h1>Day 1</h1>"));
        assert!(html.contains("<li>warm up</li>"));
        assert!(html.contains("<li>reading</li>"));
    }

    #[test]
    fn test_render_markdown_keeps_embedded_media() {
        let md = "Listen:\n\n<audio controls class=\"fixed-media\" draggable=\"true\"><source src=\"x.mp3\" type=\"audio/mpeg\"></audio>\n";
        let html = render_markdown(md);
        assert!(html.contains("<audio controls class=\"fixed-media\""));
        assert!(html.contains("src=\"x.mp3\""));
    }

    #[test]
    fn test_render_markdown_tables() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_render_markdown_empty_input() {
        assert_eq!(render_markdown(""), "");
    }
}
