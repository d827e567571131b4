//! Success case domain model.

use chrono::Local;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Business function a case belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Role {
    SoftwareDevelopment,
    CustomerExperience,
    MarketingCreative,
    OperationsEfficiency,
    DataInsight,
    ProfessionalServices,
}

impl Role {
    /// Display label shown on the category rail.
    pub fn label(&self) -> &'static str {
        match self {
            Role::SoftwareDevelopment => "軟體開發",
            Role::CustomerExperience => "客戶體驗",
            Role::MarketingCreative => "行銷創意",
            Role::OperationsEfficiency => "營運效率",
            Role::DataInsight => "數據洞察",
            Role::ProfessionalServices => "專業服務",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Role::SoftwareDevelopment => "🛠️",
            Role::CustomerExperience => "💬",
            Role::MarketingCreative => "🎨",
            Role::OperationsEfficiency => "⚡",
            Role::DataInsight => "📈",
            Role::ProfessionalServices => "💼",
        }
    }
}

/// Sector a case belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Industry {
    Finance,
    Healthcare,
    Retail,
    Technology,
    Manufacturing,
    PublicSector,
}

impl Industry {
    /// Display label shown on the industry matrix.
    pub fn label(&self) -> &'static str {
        match self {
            Industry::Finance => "金融保險",
            Industry::Healthcare => "醫療保健",
            Industry::Retail => "零售消費",
            Industry::Technology => "科技通訊",
            Industry::Manufacturing => "製造工業",
            Industry::PublicSector => "公共部門",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Industry::Finance => "🏦",
            Industry::Healthcare => "🏥",
            Industry::Retail => "🛍️",
            Industry::Technology => "📱",
            Industry::Manufacturing => "🏗️",
            Industry::PublicSector => "🏛️",
        }
    }
}

/// A published success story.
///
/// Cases are immutable once created. They come either from the seed data or
/// from a [`CaseDraft`] submitted through the publish flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessCase {
    /// Opaque unique identifier.
    pub id: String,
    pub title: String,
    pub client: String,
    pub role: Role,
    pub industry: Industry,
    pub summary: String,
    pub detailed_content: String,
    pub image_url: String,
    /// Ordered free-text labels.
    pub tags: Vec<String>,
    /// Display date, not parsed.
    pub date: String,
    /// Headline metric text.
    pub results: String,
}

pub const DEFAULT_DRAFT_CLIENT: &str = "企業合作夥伴";
pub const DEFAULT_DRAFT_SUMMARY: &str =
    "AI 自動提取的案例摘要：針對企業關鍵場景實現數位化賦能。";
pub const DEFAULT_DRAFT_RESULTS: &str = "顯著提升營運指標";
pub const DEFAULT_DRAFT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1639322537228-f710d846310a?auto=format&fit=crop&q=80&w=800";
pub const DRAFT_TRANSFORMATION_TAG: &str = "AI Transformation";

/// Form fields collected when publishing a new case.
///
/// Only `title`, `role` and `industry` are required; the rest fall back to
/// the publish defaults when converted into a [`SuccessCase`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDraft {
    pub title: String,
    #[serde(default)]
    pub client: Option<String>,
    pub role: Role,
    pub industry: Industry,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub results: Option<String>,
    /// Name of the uploaded report the case was extracted from.
    #[serde(default)]
    pub source_name: Option<String>,
}

impl CaseDraft {
    pub fn new(title: impl Into<String>, role: Role, industry: Industry) -> Self {
        Self {
            title: title.into(),
            client: None,
            role,
            industry,
            summary: None,
            results: None,
            source_name: None,
        }
    }

    /// Builds the case using today's local date.
    pub fn into_case(self, id: impl Into<String>) -> SuccessCase {
        let date = Local::now().format("%Y-%m-%d").to_string();
        self.into_case_dated(id, date)
    }

    pub fn into_case_dated(self, id: impl Into<String>, date: impl Into<String>) -> SuccessCase {
        let source = self.source_name.as_deref().unwrap_or("專案報告");
        let detailed_content = format!(
            "本案例由 {source} 解析。專案核心在於 {} 領域的轉型，確保解決方案具備穩定性。",
            self.role
        );

        SuccessCase {
            id: id.into(),
            title: self.title,
            client: non_blank_or(self.client, DEFAULT_DRAFT_CLIENT),
            role: self.role,
            industry: self.industry,
            summary: non_blank_or(self.summary, DEFAULT_DRAFT_SUMMARY),
            detailed_content,
            image_url: DEFAULT_DRAFT_IMAGE_URL.to_string(),
            tags: vec![self.role.to_string(), DRAFT_TRANSFORMATION_TAG.to_string()],
            date: date.into(),
            results: non_blank_or(self.results, DEFAULT_DRAFT_RESULTS),
        }
    }
}

fn non_blank_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_role_parses_from_variant_name() {
        assert_eq!(Role::from_str("DataInsight").unwrap(), Role::DataInsight);
        assert!(Role::from_str("Astrology").is_err());
        assert_eq!(Role::iter().count(), 6);
    }

    #[test]
    fn test_success_case_serializes_camel_case() {
        let case = CaseDraft::new("Pipeline", Role::SoftwareDevelopment, Industry::Finance)
            .into_case_dated("abc", "2024-03-15");
        let json = serde_json::to_value(&case).unwrap();
        assert!(json.get("detailedContent").is_some());
        assert!(json.get("imageUrl").is_some());
        assert_eq!(json["role"], "SoftwareDevelopment");
    }

    #[test]
    fn test_draft_defaults_fill_blank_fields() {
        let mut draft = CaseDraft::new("雲端遷移", Role::DataInsight, Industry::Retail);
        draft.client = Some("  ".to_string());
        draft.results = Some("延遲降低 30%".to_string());
        draft.source_name = Some("report.pdf".to_string());

        let case = draft.into_case_dated("x1", "2024-06-01");

        assert_eq!(case.client, DEFAULT_DRAFT_CLIENT);
        assert_eq!(case.summary, DEFAULT_DRAFT_SUMMARY);
        assert_eq!(case.results, "延遲降低 30%");
        assert_eq!(case.tags, vec!["DataInsight", DRAFT_TRANSFORMATION_TAG]);
        assert!(case.detailed_content.contains("report.pdf"));
        assert_eq!(case.date, "2024-06-01");
    }
}
