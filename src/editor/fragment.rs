/// Class that pins inserted media to a fixed display size (see `index.html`).
pub(crate) const FIXED_MEDIA_CLASS: &str = "fixed-media";

/// Class toggled on an audio element while it is being dragged.
pub(crate) const DRAGGING_CLASS: &str = "dragging";

pub(crate) const LESSON_IMAGE_ALT: &str = "Lesson Image";

/// Escape a value for use inside a double-quoted HTML attribute.
pub(crate) fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn image_fragment(url: &str) -> String {
    format!(
        r#"<img src="{}" alt="{LESSON_IMAGE_ALT}" class="{FIXED_MEDIA_CLASS}">"#,
        escape_attr(url)
    )
}

pub(crate) fn audio_fragment(url: &str) -> String {
    format!(
        r#"<audio controls class="{FIXED_MEDIA_CLASS}" draggable="true"><source src="{}" type="audio/mpeg"></audio>"#,
        escape_attr(url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_fragment_shape() {
        assert_eq!(
            image_fragment("https://img.example/a.png"),
            r#"<img src="https://img.example/a.png" alt="Lesson Image" class="fixed-media">"#
        );
    }

    #[test]
    fn test_audio_fragment_nests_source_with_url() {
        let html = audio_fragment("x.mp3");
        assert!(html.starts_with(r#"<audio controls class="fixed-media" draggable="true">"#));
        assert!(html.contains(r#"<source src="x.mp3" type="audio/mpeg">"#));
        assert!(html.ends_with("</audio>"));
    }

    #[test]
    fn test_fragments_escape_attribute_breakouts() {
        let html = image_fragment(r#"a.png" onerror="alert(1)"#);
        assert!(!html.contains(r#"" onerror=""#));
        assert!(html.contains("&quot; onerror=&quot;alert(1)"));
    }

    #[test]
    fn test_escape_attr_keeps_query_strings_readable() {
        assert_eq!(escape_attr("/a.mp3?v=1&t=2"), "/a.mp3?v=1&amp;t=2");
        assert_eq!(escape_attr("plain"), "plain");
    }
}
