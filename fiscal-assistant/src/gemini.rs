//! Gemini chat integration via REST API (no SDK dependency).
//!
//! The assistant is the only component of the system that performs
//! network I/O, and it is fully fault-isolated: any failure (transport
//! error, bad status, unexpected payload) is logged and flattened into a
//! user-visible Portuguese message. Callers never see an error.

use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const GENERATE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Reply used when the API call fails for any reason.
const FALLBACK_ERROR: &str = "Ocorreu um erro ao conectar com o assistente inteligente. \
                              Verifique sua chave de API ou tente novamente mais tarde.";

/// Reply used when the API succeeds but returns no usable text.
const FALLBACK_EMPTY: &str = "Desculpe, não consegui processar sua pergunta no momento.";

#[derive(Debug, Error)]
enum AssistantError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned status {0}: {1}")]
    Status(reqwest::StatusCode, String),
}

/// Accountant persona and ground rules for the chat model.
fn system_instruction(context_summary: &str) -> String {
    format!(
        "Você é um especialista em contabilidade e imposto de renda para \
         motoristas de aplicativo (Uber, 99, Indrive) no Brasil.\n\
         Responda dúvidas sobre Carnê-Leão, isenção de 40%, despesas dedutíveis e DARF.\n\
         Use uma linguagem clara, direta e encorajadora.\n\
         \n\
         Contexto atual do usuário:\n\
         {context_summary}\n\
         \n\
         Regras importantes:\n\
         1. A regra dos 40% é uma presunção de despesas para quem não faz \
         escrituração completa (livro caixa).\n\
         2. O limite de isenção mensal para o IRPF mencionado pelo usuário é R$ 2.428,80.\n\
         3. Se o valor tributável passar desse limite, o usuário deve recolher \
         o Carnê-Leão via DARF."
    )
}

/// Pulls the first candidate's text out of a generateContent response.
fn extract_text(payload: &Value) -> Option<String> {
    payload["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Chat client for the fiscal assistant.
#[derive(Debug, Clone)]
pub struct GeminiAssistant {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiAssistant {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the model id.
    pub fn with_model(
        mut self,
        model: impl Into<String>,
    ) -> Self {
        self.model = model.into();
        self
    }

    /// Sends one question with the current month's context attached.
    ///
    /// Always yields displayable text: the model's answer, or a fallback
    /// message when the call fails or comes back empty.
    pub async fn send_message(
        &self,
        message: &str,
        context_summary: &str,
    ) -> String {
        match self.generate(message, context_summary).await {
            Ok(Some(text)) => text,
            Ok(None) => FALLBACK_EMPTY.to_string(),
            Err(err) => {
                error!("assistant request failed: {err}");
                FALLBACK_ERROR.to_string()
            }
        }
    }

    async fn generate(
        &self,
        message: &str,
        context_summary: &str,
    ) -> Result<Option<String>, AssistantError> {
        let url = format!("{GENERATE_URL}/{}:generateContent", self.model);
        let body = json!({
            "system_instruction": {
                "parts": [{ "text": system_instruction(context_summary) }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": message }]
            }],
            "generationConfig": { "temperature": 0.7 },
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AssistantError::Status(status, detail));
        }

        let payload: Value = response.json().await?;
        Ok(extract_text(&payload))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn extract_text_reads_the_first_candidate() {
        let payload = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "Você está dentro da faixa de isenção." }]
                }
            }]
        });

        let result = extract_text(&payload);

        assert_eq!(
            result,
            Some("Você está dentro da faixa de isenção.".to_string())
        );
    }

    #[test]
    fn extract_text_trims_whitespace() {
        let payload = json!({
            "candidates": [{ "content": { "parts": [{ "text": "  olá \n" }] } }]
        });

        assert_eq!(extract_text(&payload), Some("olá".to_string()));
    }

    #[test]
    fn extract_text_rejects_empty_or_missing_candidates() {
        assert_eq!(extract_text(&json!({})), None);
        assert_eq!(extract_text(&json!({ "candidates": [] })), None);
        assert_eq!(
            extract_text(&json!({
                "candidates": [{ "content": { "parts": [{ "text": "" }] } }]
            })),
            None
        );
    }

    #[test]
    fn system_instruction_embeds_the_context() {
        let instruction = system_instruction("Mês: maio.\nReceita: R$ 5.000,00.");

        assert!(instruction.contains("Mês: maio."));
        assert!(instruction.contains("Carnê-Leão"));
    }
}
