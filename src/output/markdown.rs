//! Markdown rendering for terminal output

use termimad::MadSkin;

/// Render markdown to a terminal string
pub fn render_markdown(text: &str) -> String {
    let skin = MadSkin::default();
    skin.term_text(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_code_and_drops_fence_markers() {
        let rendered = render_markdown("\n\n**Demo**\n\n\n```python\nprint(\"hi\")\n```\n");
        assert!(rendered.contains("print(\"hi\")"));
        assert!(rendered.contains("Demo"));
        assert!(!rendered.contains("**Demo**"));
    }
}
