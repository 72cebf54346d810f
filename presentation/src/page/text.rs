//! Rendered text of stored markup, approximating a browser's `innerText`

use scraper::{ElementRef, Html};

const BLOCK_ELEMENTS: &[&str] = &[
    "div", "p", "pre", "ul", "ol", "li", "h1", "h2", "h3", "h4", "h5", "h6", "table", "tr",
];

/// Text of an HTML fragment: tags dropped, block elements on their own
/// lines, whitespace collapsed except inside `<pre>`
pub fn inner_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut collector = TextCollector::default();
    collector.element(fragment.root_element(), false);
    collector.out
}

#[derive(Default)]
struct TextCollector {
    out: String,
    pending_break: bool,
}

impl TextCollector {
    fn element(&mut self, element: ElementRef<'_>, in_pre: bool) {
        let name = element.value().name();
        let block = BLOCK_ELEMENTS.contains(&name);
        let pre = in_pre || name == "pre";

        if block {
            self.pending_break = true;
        }
        if name == "br" {
            self.out.push('\n');
        }

        for child in element.children() {
            if let Some(child) = ElementRef::wrap(child) {
                self.element(child, pre);
            } else if let Some(text) = child.value().as_text() {
                if pre {
                    self.push(text);
                } else {
                    self.push_collapsed(text);
                }
            }
        }

        if block {
            self.pending_break = true;
        }
    }

    fn push(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.pending_break && !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
        self.pending_break = false;
        self.out.push_str(text);
    }

    fn push_collapsed(&mut self, text: &str) {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return;
        }
        let mut collapsed = String::new();
        let at_line_start =
            self.pending_break || self.out.is_empty() || self.out.ends_with(['\n', ' ']);
        if text.starts_with(char::is_whitespace) && !at_line_start {
            collapsed.push(' ');
        }
        collapsed.push_str(&words.join(" "));
        if text.ends_with(char::is_whitespace) {
            collapsed.push(' ');
        }
        self.push(&collapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_text_is_kept_verbatim() {
        assert_eq!(
            inner_text("<pre class=\"document-text\">Linha 1\n\n  Linha 2</pre>"),
            "Linha 1\n\n  Linha 2"
        );
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(inner_text("<pre>R$ 10 &amp; &lt;custas&gt;</pre>"), "R$ 10 & <custas>");
    }

    #[test]
    fn test_blocks_are_separate_lines() {
        let html = "<div><h4>Riscos</h4><ul><li>Prazo</li><li>Prova</li></ul><h4>Vazio</h4><ul></ul></div>";
        assert_eq!(inner_text(html), "Riscos\nPrazo\nProva\nVazio");
    }

    #[test]
    fn test_inline_whitespace_is_collapsed() {
        let html = "<div class=\"alert\">\n   Falha   na <b>API</b>\n  <button></button></div>";
        assert_eq!(inner_text(html), "Falha na API");
    }

    #[test]
    fn test_empty_markup() {
        assert_eq!(inner_text(""), "");
    }
}
