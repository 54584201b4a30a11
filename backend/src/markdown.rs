//! Markdown rendering for article bodies.

use pulldown_cmark::{html, Options, Parser};

/// Render an article's markdown body to HTML.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_lists() {
        let rendered = render_markdown("## Heading\n\n- one\n- two\n");
        assert!(rendered.contains("<h2>Heading</h2>"));
        assert!(rendered.contains("<li>one</li>"));
    }

    #[test]
    fn renders_emphasis() {
        let rendered = render_markdown("**bold** text");
        assert!(rendered.contains("<strong>bold</strong>"));
    }
}
