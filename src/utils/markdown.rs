//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection.

use comrak::Options;

/// Convert markdown content to sanitized HTML.
///
/// Supports strikethrough (`~~text~~`) and bare URL autolinks on top of
/// CommonMark. The output is sanitized using `ammonia`, which also adds
/// `rel="noopener noreferrer"` to every link.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;

    let html_output = comrak::markdown_to_html(markdown, &options);

    // Sanitize HTML to prevent XSS attacks
    ammonia::clean(&html_output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ABOUT_MARKDOWN;

    #[test]
    fn test_renders_paragraph() {
        let html = markdown_to_html("hello **world**");
        assert_eq!(html.trim(), "<p>hello <strong>world</strong></p>");
    }

    #[test]
    fn test_strips_scripts() {
        let html = markdown_to_html("hi <script>alert(1)</script>");
        assert!(!html.contains("<script"));
        assert!(html.contains("hi"));
    }

    #[test]
    fn test_links_get_rel() {
        let html = markdown_to_html("[repo](https://github.com/t2ne)");
        assert!(html.contains(r#"href="https://github.com/t2ne""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn test_about_text_is_single_paragraph() {
        let html = markdown_to_html(ABOUT_MARKDOWN);
        assert_eq!(html.matches("<p>").count(), 1);
        assert!(html.contains("graphic computer science"));
    }
}
