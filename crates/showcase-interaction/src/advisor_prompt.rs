//! System instruction for the architecture advisor.

use minijinja::{Environment, context};
use showcase_core::case::SuccessCase;
use showcase_core::{Result, ShowcaseError};

/// Persona, product talking points, dialogue policy and the known-case index.
///
/// `cases` is rendered as `[ID: id] title` pairs separated by `, `.
const ADVISOR_SYSTEM_TEMPLATE: &str = r#"
你現在是 TPIsoftware 的「高階 AI 解決方案架構師」。
公司的 Mission 是：Your AI partner for mission-critical Success.

你的專業領域與產品強項（必須在適當時機融入建議）：
1. **OpenAI LLM 深度應用**：擅長 Enterprise 級別的雲地混合 (Hybrid) 佈署。
2. **RAG 與向量資料庫**：提供精準的企業知識庫建置，優化檢索品質。
3. **TPI APIM 平台**：這是我們的核心產品，用於管理 API、監控 AI Agent 流量、實施安全性審核。
4. **MCP (Model Control Plane)**：協助企業統一管理多個 AI 模型與代理程式。

對話邏輯規則：
1. **診斷階段**：詢問客戶的產業別、數據量體、對資訊安全的考量（如：是否需落地佈署）。
2. **方案生成**：一旦收集足夠資訊，必須產出一個標註為 [FRAME_GEN] 的結構化建議，內容包含：
   - 架構類型：(例如：Hybrid Cloud + RAG)
   - 核心產品：(例如：TPI APIM + Vector DB)
   - 預期成效：(例如：降低 40% 營運成本)
3. **語言與風格**：專業、精鍊、不超過 80 個中文字。
4. **案例關聯**：使用 [案例: ID] 推薦最符合其架構的現有成功故事。

現有成功案例庫：{% for case in cases %}[ID: {{ case.id }}] {{ case.title }}{% if not loop.last %}, {% endif %}{% endfor %}
"#;

/// Renders the advisor system instruction for the given case index.
pub fn render_system_instruction(known_cases: &[SuccessCase]) -> Result<String> {
    let env = Environment::new();
    let template = env
        .template_from_str(ADVISOR_SYSTEM_TEMPLATE)
        .map_err(|e| ShowcaseError::internal(format!("Invalid advisor prompt template: {e}")))?;

    template
        .render(context! { cases => known_cases })
        .map_err(|e| ShowcaseError::internal(format!("Failed to render advisor prompt: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::case::seed_cases;

    #[test]
    fn test_case_index_lists_id_and_title() {
        let cases = seed_cases();
        let prompt = render_system_instruction(&cases[..2]).unwrap();
        assert!(prompt.contains(
            "現有成功案例庫：[ID: 1] AI 全自動代碼現代化流水線, [ID: 2] 企業級智慧知識庫與客戶助手"
        ));
    }

    #[test]
    fn test_prompt_states_directives_and_policy() {
        let prompt = render_system_instruction(&seed_cases()).unwrap();
        assert!(prompt.contains("[FRAME_GEN]"));
        assert!(prompt.contains("[案例: ID]"));
        assert!(prompt.contains("診斷階段"));
        assert!(prompt.contains("不超過 80 個中文字"));
    }

    #[test]
    fn test_empty_case_index_renders() {
        let prompt = render_system_instruction(&[]).unwrap();
        assert!(prompt.trim_end().ends_with("現有成功案例庫："));
    }
}
