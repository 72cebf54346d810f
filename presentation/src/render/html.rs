//! HTML result renderer
//!
//! Each section of a generation result becomes the markup of its result
//! container. Every piece of server text is escaped before insertion.

use drafter_application::ports::renderer::ResultRenderer;
use drafter_domain::{AnalysisPayload, ReviewPayload, SectionPayload};
use std::fmt::Write;
use tracing::warn;

pub const ANALYSIS_FALLBACK: &str =
    r#"<p class="text-danger">Erro ao processar análise do caso.</p>"#;
pub const REVIEW_FALLBACK: &str =
    r#"<p class="text-danger">Erro ao processar revisão do documento.</p>"#;

const SUGGESTIONS_TITLE: &str = "Sugestões de Melhoria";

/// Escape text for use in element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Bootstrap-flavored markup, as the drafting page styles it
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlResultRenderer;

impl HtmlResultRenderer {
    pub fn new() -> Self {
        Self
    }

    fn list(items: &[String]) -> String {
        let mut html = String::from("<ul>");
        for item in items {
            let _ = write!(html, "<li>{}</li>", escape_html(item));
        }
        html.push_str("</ul>");
        html
    }
}

impl ResultRenderer for HtmlResultRenderer {
    fn render_document(&self, document: &str) -> String {
        format!(r#"<pre class="document-text">{}</pre>"#, escape_html(document))
    }

    fn render_analysis(&self, analysis: &SectionPayload<AnalysisPayload>) -> String {
        let payload = match analysis {
            SectionPayload::Parsed(payload) => payload,
            SectionPayload::Malformed { reason } => {
                warn!(reason = %reason, "Rendering analysis fallback");
                return ANALYSIS_FALLBACK.to_string();
            }
        };

        let mut html = String::from(r#"<div class="analysis-section">"#);
        for (title, items) in payload.sections() {
            let _ = write!(html, "<h4>{title}</h4>{}", Self::list(items));
        }
        html.push_str("</div>");
        html
    }

    fn render_basis(&self, basis: &str) -> String {
        format!(r#"<pre class="basis-text">{}</pre>"#, escape_html(basis))
    }

    fn render_review(&self, review: &SectionPayload<ReviewPayload>) -> String {
        let payload = match review {
            SectionPayload::Parsed(payload) => payload,
            SectionPayload::Malformed { reason } => {
                warn!(reason = %reason, "Rendering review fallback");
                return REVIEW_FALLBACK.to_string();
            }
        };

        let mut html = String::from(r#"<div class="review-section">"#);
        for (label, text) in payload.aspects() {
            let _ = write!(html, "<h4>{label}</h4><p>{}</p>", escape_html(text));
        }
        let _ = write!(
            html,
            "<h4>{SUGGESTIONS_TITLE}</h4>{}",
            Self::list(payload.suggestions())
        );
        html.push_str("</div>");
        html
    }

    fn render_error_banner(&self, message: &str) -> String {
        format!(
            concat!(
                r#"<div class="alert alert-danger alert-dismissible fade show" role="alert">"#,
                "{}",
                r#"<button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close"></button>"#,
                "</div>"
            ),
            escape_html(message)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::TerminalPage;
    use drafter_application::ports::generation_gateway::{GatewayError, GenerationGateway};
    use drafter_application::ports::page::PagePort;
    use drafter_application::ports::tab_widget::TabWidgetPort;
    use drafter_application::{PageLayout, SubmissionOrchestrator};
    use drafter_domain::{CaseInputRecord, CaseSchema, GenerationResult};
    use serde_json::json;
    use std::sync::Arc;

    fn analysis(value: serde_json::Value) -> SectionPayload<AnalysisPayload> {
        SectionPayload::from_value(Some(value))
    }

    fn review(value: serde_json::Value) -> SectionPayload<ReviewPayload> {
        SectionPayload::from_value(Some(value))
    }

    #[test]
    fn test_document_is_escaped_and_preformatted() {
        let html = HtmlResultRenderer.render_document("Art. 5º <caput>\n\nR$ 10 & custas");
        assert_eq!(
            html,
            "<pre class=\"document-text\">Art. 5º &lt;caput&gt;\n\nR$ 10 &amp; custas</pre>"
        );
    }

    #[test]
    fn test_empty_document_renders_empty_block() {
        assert_eq!(
            HtmlResultRenderer.render_document(""),
            "<pre class=\"document-text\"></pre>"
        );
        assert_eq!(HtmlResultRenderer.render_basis(""), "<pre class=\"basis-text\"></pre>");
    }

    #[test]
    fn test_analysis_sections_in_order() {
        let html = HtmlResultRenderer.render_analysis(&analysis(json!({
            "pontos_fortes": ["Prova documental", "Nota fiscal"],
            "pontos_fracos": [],
            "riscos": ["Prazo"],
            "oportunidades": [],
            "sugestoes_melhoria": ["Juntar laudo"]
        })));

        let titles = [
            "Pontos Fortes",
            "Pontos Fracos",
            "Riscos",
            "Oportunidades",
            "Sugestões de Melhoria",
        ];
        let positions: Vec<usize> = titles
            .iter()
            .map(|t| html.find(&format!("<h4>{t}</h4>")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("<h4>Pontos Fortes</h4><ul><li>Prova documental</li><li>Nota fiscal</li></ul>"));
        assert!(html.contains("<h4>Pontos Fracos</h4><ul></ul>"));
    }

    #[test]
    fn test_analysis_missing_array_is_fallback() {
        let html = HtmlResultRenderer.render_analysis(&analysis(json!({"pontos_fortes": ["a"]})));
        assert_eq!(html, ANALYSIS_FALLBACK);
    }

    #[test]
    fn test_analysis_invalid_text_is_fallback() {
        let html = HtmlResultRenderer.render_analysis(&analysis(json!("{not json")));
        assert_eq!(html, ANALYSIS_FALLBACK);
    }

    #[test]
    fn test_analysis_items_are_escaped() {
        let html = HtmlResultRenderer.render_analysis(&analysis(json!({
            "pontos_fortes": ["<script>alert(1)</script>"],
            "pontos_fracos": [],
            "riscos": [],
            "oportunidades": [],
            "sugestoes_melhoria": []
        })));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_review_placeholders_and_empty_suggestions() {
        let html = HtmlResultRenderer.render_review(&review(json!({"estrutura": "ok"})));
        assert!(html.contains("<h4>Estrutura</h4><p>ok</p>"));
        assert!(html.contains("<h4>Clareza</h4><p>Não disponível</p>"));
        assert!(html.contains("<h4>Coerência</h4><p>Não disponível</p>"));
        assert!(html.contains("<h4>Sugestões de Melhoria</h4><ul></ul>"));
    }

    #[test]
    fn test_review_empty_object_renders_all_placeholders() {
        let html = HtmlResultRenderer.render_review(&review(json!({})));
        assert_eq!(html.matches("<p>Não disponível</p>").count(), 3);
    }

    #[test]
    fn test_review_from_encoded_string_matches_object() {
        let object = json!({"clareza": "boa", "sugestoes_melhoria": ["Citar súmula"]});
        let from_object = HtmlResultRenderer.render_review(&review(object.clone()));
        let from_string = HtmlResultRenderer.render_review(&review(json!(object.to_string())));
        assert_eq!(from_object, from_string);
        assert!(from_object.contains("<li>Citar súmula</li>"));
    }

    #[test]
    fn test_review_malformed_is_fallback() {
        let html = HtmlResultRenderer.render_review(&review(json!("[1, 2")));
        assert_eq!(html, REVIEW_FALLBACK);
    }

    #[test]
    fn test_error_banner_is_dismissible_and_escaped() {
        let html = HtmlResultRenderer.render_error_banner("Campo <inválido>");
        assert!(html.starts_with("<div class=\"alert alert-danger alert-dismissible"));
        assert!(html.contains("Campo &lt;inválido&gt;"));
        assert!(html.contains("data-bs-dismiss=\"alert\""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a&b<c>"d'"#), "a&amp;b&lt;c&gt;&quot;d&#39;");
        assert_eq!(escape_html("sem marcação"), "sem marcação");
    }

    /// Gateway answering every call with the same body
    struct FixedGateway(serde_json::Value);

    #[async_trait::async_trait]
    impl GenerationGateway for FixedGateway {
        async fn generate(
            &self,
            _record: &CaseInputRecord,
        ) -> Result<GenerationResult, GatewayError> {
            GenerationResult::from_json(self.0.clone())
                .map_err(|e| GatewayError::MalformedResponse(e.to_string()))
        }
    }

    #[tokio::test]
    async fn test_submission_renders_case_scenario_into_page() {
        let layout = PageLayout::default();
        let page = Arc::new(TerminalPage::new(layout.clone(), CaseSchema::Long).with_progress(false));
        let gateway = Arc::new(FixedGateway(json!({
            "document": "Texto.",
            "analysis": {
                "pontos_fortes": ["a"],
                "pontos_fracos": [],
                "riscos": [],
                "oportunidades": [],
                "sugestoes_melhoria": []
            },
            "basis": "Base.",
            "review": {"estrutura": "ok"}
        })));
        let orchestrator = SubmissionOrchestrator::setup(
            page.clone(),
            page.clone(),
            gateway,
            Arc::new(HtmlResultRenderer::new()),
            layout,
        )
        .unwrap();

        assert!(orchestrator.submit().await.is_rendered());

        assert_eq!(page.inner_text("documentContent").as_deref(), Some("Texto."));
        assert_eq!(
            page.inner_html("analysisContent").as_deref(),
            Some(concat!(
                r#"<div class="analysis-section">"#,
                "<h4>Pontos Fortes</h4><ul><li>a</li></ul>",
                "<h4>Pontos Fracos</h4><ul></ul>",
                "<h4>Riscos</h4><ul></ul>",
                "<h4>Oportunidades</h4><ul></ul>",
                "<h4>Sugestões de Melhoria</h4><ul></ul>",
                "</div>"
            ))
        );
        assert_eq!(
            page.inner_html("reviewContent").as_deref(),
            Some(concat!(
                r#"<div class="review-section">"#,
                "<h4>Estrutura</h4><p>ok</p>",
                "<h4>Clareza</h4><p>Não disponível</p>",
                "<h4>Coerência</h4><p>Não disponível</p>",
                "<h4>Sugestões de Melhoria</h4><ul></ul>",
                "</div>"
            ))
        );
        assert_eq!(page.inner_text("basisContent").as_deref(), Some("Base."));
        assert_eq!(page.active().as_deref(), Some("document"));
        assert_eq!(page.inner_html("errorContainer").as_deref(), Some(""));
    }
}
