//! Showcase use case.
//!
//! `ShowcaseUseCase` is the surface a front end drives: it owns the gallery
//! filter, the case detail selection and the chat session, and routes case
//! references clicked in chat to the detail view.

use crate::chat_session::{ChatSession, ChatSessionConfig, HandoffOutcome, SubmitOutcome};
use showcase_core::case::{
    CaseDraft, CaseFilter, CaseRepository, Facet, Industry, Role, SuccessCase,
};
use showcase_core::chat::Segment;
use showcase_interaction::AdvisorGateway;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct ShowcaseUseCase {
    /// Shared case collection, also read by the chat session
    cases: Arc<dyn CaseRepository>,
    /// The visitor's advisor conversation
    chat: Arc<ChatSession>,
    /// Current gallery facets and search text
    filter: RwLock<CaseFilter>,
    /// Case shown in the detail view, if any
    selected_case: RwLock<Option<SuccessCase>>,
}

impl ShowcaseUseCase {
    /// Creates the use case with a fresh chat session.
    pub fn new(
        cases: Arc<dyn CaseRepository>,
        gateway: AdvisorGateway,
        config: ChatSessionConfig,
    ) -> Self {
        let session_id = Uuid::new_v4().to_string();
        let chat = Arc::new(ChatSession::new(session_id, gateway, cases.clone(), config));
        Self {
            cases,
            chat,
            filter: RwLock::new(CaseFilter::default()),
            selected_case: RwLock::new(None),
        }
    }

    pub fn chat(&self) -> &Arc<ChatSession> {
        &self.chat
    }

    pub fn cases(&self) -> &Arc<dyn CaseRepository> {
        &self.cases
    }

    /// Selects the case with `case_id` for the detail view.
    ///
    /// Unknown ids leave the current selection untouched and return `None`.
    pub async fn open_case(&self, case_id: &str) -> Option<SuccessCase> {
        let case = self.cases.find_by_id(case_id)?;
        tracing::debug!("[ShowcaseUseCase] Opening case {}", case.id);
        *self.selected_case.write().await = Some(case.clone());
        Some(case)
    }

    pub async fn close_case(&self) {
        *self.selected_case.write().await = None;
    }

    pub async fn selected_case(&self) -> Option<SuccessCase> {
        self.selected_case.read().await.clone()
    }

    /// Opens the case behind a rendered reference. Plain text is ignored.
    pub async fn activate_reference(&self, segment: &Segment) -> Option<SuccessCase> {
        match segment.case_id() {
            Some(case_id) => self.open_case(case_id).await,
            None => None,
        }
    }

    pub async fn submit_query(&self, text: &str) -> SubmitOutcome {
        self.chat.submit_query(text).await
    }

    pub async fn confirm_framework_handoff(&self) -> HandoffOutcome {
        self.chat.confirm_framework_handoff().await
    }

    /// Prepends `case` to the collection.
    ///
    /// The id must not collide with an existing one.
    pub fn add_case(&self, case: SuccessCase) {
        self.cases.add(case);
    }

    /// Turns a publish-form draft into a case with a fresh id and adds it.
    pub fn publish(&self, draft: CaseDraft) -> SuccessCase {
        let case = draft.into_case(Uuid::new_v4().simple().to_string());
        tracing::info!("[ShowcaseUseCase] Publishing case {} ({})", case.id, case.title);
        self.add_case(case.clone());
        case
    }

    pub async fn filter(&self) -> CaseFilter {
        self.filter.read().await.clone()
    }

    pub async fn set_role_filter(&self, role: Facet<Role>) {
        self.filter.write().await.role = role;
    }

    pub async fn set_industry_filter(&self, industry: Facet<Industry>) {
        self.filter.write().await.industry = industry;
    }

    pub async fn set_search_query(&self, query: impl Into<String>) {
        self.filter.write().await.query = query.into();
    }

    /// Cases admitted by the current filter, in collection order.
    pub async fn visible_cases(&self) -> Vec<SuccessCase> {
        let filter = self.filter.read().await.clone();
        filter.apply(&self.cases.list_all())
    }
}
