mod common;

use common::{ScriptedBackend, seeded_cases};
use showcase_application::{ChatSessionConfig, HandoffOutcome, ShowcaseUseCase, SubmitOutcome};
use showcase_core::case::{CaseDraft, Facet, Industry, Role, seed_cases};
use showcase_core::chat::{HANDOFF_CONFIRMATION, Segment};
use showcase_interaction::AdvisorGateway;
use std::sync::Arc;

fn usecase(replies: &[&str]) -> ShowcaseUseCase {
    ShowcaseUseCase::new(
        seeded_cases(),
        AdvisorGateway::new(ScriptedBackend::replying(replies)),
        ChatSessionConfig::immediate(),
    )
}

fn ids(cases: &[showcase_core::case::SuccessCase]) -> Vec<&str> {
    cases.iter().map(|c| c.id.as_str()).collect()
}

#[tokio::test]
async fn test_open_case_selects_known_and_ignores_unknown() {
    let showcase = usecase(&[]);

    let opened = showcase.open_case("3").await.unwrap();
    assert_eq!(opened.title, "生成式行銷創意與內容自動化");
    assert_eq!(showcase.selected_case().await.unwrap().id, "3");

    assert!(showcase.open_case("404").await.is_none());
    assert_eq!(showcase.selected_case().await.unwrap().id, "3");

    showcase.close_case().await;
    assert!(showcase.selected_case().await.is_none());
}

#[tokio::test]
async fn test_reference_in_reply_opens_case() {
    let showcase = usecase(&["• 推薦 [案例: 6]"]);
    showcase.submit_query("公部門").await;

    let transcript = showcase.chat().transcript().await;
    let segments = showcase.chat().render(&transcript[1]);
    let reference = segments
        .iter()
        .find(|s| matches!(s, Segment::CaseReference { .. }))
        .unwrap();

    let opened = showcase.activate_reference(reference).await.unwrap();
    assert_eq!(opened.id, "6");
    assert!(
        showcase
            .activate_reference(&Segment::Text("• 推薦 ".to_string()))
            .await
            .is_none()
    );
}

#[tokio::test]
async fn test_submit_and_handoff_go_through_chat() {
    let showcase = usecase(&["• 建議 [FRAME_GEN] 架構類型：Hybrid Cloud"]);

    let outcome = showcase.submit_query("金融業").await;
    assert!(matches!(outcome, SubmitOutcome::Answered { framework: Some(_), .. }));

    let handoff = showcase.confirm_framework_handoff().await;
    assert!(matches!(handoff, HandoffOutcome::Confirmed(ref m) if m.content == HANDOFF_CONFIRMATION));
}

#[tokio::test]
async fn test_filters_narrow_visible_cases() {
    let showcase = usecase(&[]);
    assert_eq!(showcase.visible_cases().await.len(), seed_cases().len());

    showcase.set_search_query("legacy").await;
    assert_eq!(ids(&showcase.visible_cases().await), vec!["1"]);

    showcase.set_search_query("").await;
    showcase.set_role_filter(Facet::Only(Role::DataInsight)).await;
    assert_eq!(ids(&showcase.visible_cases().await), vec!["5"]);

    showcase.set_role_filter(Facet::All).await;
    showcase.set_industry_filter(Facet::Only(Industry::PublicSector)).await;
    let visible = showcase.visible_cases().await;
    assert!(visible.iter().all(|c| c.industry == Industry::PublicSector));
    assert!(!visible.is_empty());
}

#[tokio::test]
async fn test_publish_prepends_case_and_makes_it_referenceable() {
    let repository = seeded_cases();
    let showcase = ShowcaseUseCase::new(
        Arc::clone(&repository),
        AdvisorGateway::new(ScriptedBackend::replying(&[])),
        ChatSessionConfig::immediate(),
    );

    let draft = CaseDraft::new("雲端遷移加速器", Role::SoftwareDevelopment, Industry::Retail);
    let published = showcase.publish(draft);

    let all = repository.list_all();
    assert_eq!(all.len(), seed_cases().len() + 1);
    assert_eq!(all[0].id, published.id);
    assert!(repository.contains(&published.id));
    assert_eq!(
        showcase.open_case(&published.id).await.unwrap().title,
        "雲端遷移加速器"
    );
}
