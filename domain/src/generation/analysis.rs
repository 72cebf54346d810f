//! Case analysis payload

use serde::{Deserialize, Serialize};

/// Analysis of the submitted case
///
/// All five lists are required; a payload missing any of them does not
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    pub pontos_fortes: Vec<String>,
    pub pontos_fracos: Vec<String>,
    pub riscos: Vec<String>,
    pub oportunidades: Vec<String>,
    pub sugestoes_melhoria: Vec<String>,
}

impl AnalysisPayload {
    /// Section titles paired with their items, in display order
    pub fn sections(&self) -> [(&'static str, &[String]); 5] {
        [
            ("Pontos Fortes", &self.pontos_fortes),
            ("Pontos Fracos", &self.pontos_fracos),
            ("Riscos", &self.riscos),
            ("Oportunidades", &self.oportunidades),
            ("Sugestões de Melhoria", &self.sugestoes_melhoria),
        ]
    }
}
