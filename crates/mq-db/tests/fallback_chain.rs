//! End-to-end exercise of the schedule lifecycle and the full fallback chain
//! against a real temp-dir layer stack.

use chrono::NaiveDate;

use mq_core::enums::{AuditAction, BoardType, EntryStatus, FallbackLayer, WorkoutVersion};
use mq_db::layers::LayerWriter;
use mq_db::repos::audit::AuditFilter;
use mq_db::repos::schedule::{OverrideRequest, PushRequest};
use mq_db::service::MarqueeService;

async fn service(dir: &std::path::Path) -> MarqueeService {
    let layers = LayerWriter::new(dir.join("cache"), dir.join("backup.json"), None).unwrap();
    MarqueeService::new_local(":memory:", layers).await.unwrap()
}

fn push(date: &str, board: BoardType, title: &str, html: &str) -> PushRequest {
    PushRequest {
        date: date.parse().unwrap(),
        board,
        title: title.to_string(),
        html: html.to_string(),
        version: Some(WorkoutVersion::Rx),
        date_label: Some("SATURDAY 3/14".to_string()),
        pushed_by: Some("coach".to_string()),
    }
}

#[tokio::test]
async fn push_fans_out_to_cache_and_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let svc = service(dir.path()).await;

    svc.upsert_entry(&push(
        "2026-03-14",
        BoardType::Mainboard,
        "Fran",
        "<div>21-15-9</div>",
    ))
    .await
    .unwrap();

    let cache_file = dir.path().join("cache/2026-03-14_mainboard.html");
    assert_eq!(
        std::fs::read_to_string(&cache_file).unwrap(),
        "<div>21-15-9</div>"
    );

    let snapshot = std::fs::read_to_string(dir.path().join("backup.json")).unwrap();
    let snapshot: serde_json::Value = serde_json::from_str(&snapshot).unwrap();
    assert_eq!(snapshot["entries"][0]["date"], "2026-03-14");
    assert_eq!(snapshot["entries"][0]["mainboard"]["title"], "Fran");
}

#[tokio::test]
async fn full_day_lifecycle_with_degrading_layers() {
    let dir = tempfile::tempdir().unwrap();
    let svc = service(dir.path()).await;
    let today: NaiveDate = "2026-03-14".parse().unwrap();

    // Evening before: coach pushes both boards
    svc.upsert_entry(&push("2026-03-14", BoardType::Mainboard, "Fran", "<div>rx</div>"))
        .await
        .unwrap();
    svc.upsert_entry(&push("2026-03-14", BoardType::Modboard, "Fran (mod)", "<div>mod</div>"))
        .await
        .unwrap();

    // Midnight: swap activates today
    let outcome = svc.run_daily_swap(today).await.unwrap();
    assert_eq!(outcome.activated, 2);

    // Healthy: both boards serve from the store
    let resolved = svc.resolve(today, BoardType::Mainboard).await;
    assert_eq!(resolved.layer, FallbackLayer::Primary);
    assert_eq!(resolved.html, "<div>rx</div>");

    // Store rows lost: snapshot takes over
    svc.db()
        .conn()
        .execute("DELETE FROM schedule_entries", ())
        .await
        .unwrap();
    let resolved = svc.resolve(today, BoardType::Modboard).await;
    assert_eq!(resolved.layer, FallbackLayer::Snapshot);
    assert_eq!(resolved.html, "<div>mod</div>");

    // Snapshot lost too: raw cache still has the HTML
    std::fs::remove_file(dir.path().join("backup.json")).unwrap();
    let resolved = svc.resolve(today, BoardType::Modboard).await;
    assert_eq!(resolved.layer, FallbackLayer::Cache);
    assert_eq!(resolved.html, "<div>mod</div>");

    // Everything gone: splash, still no error
    std::fs::remove_dir_all(dir.path().join("cache")).unwrap();
    let resolved = svc.resolve(today, BoardType::Modboard).await;
    assert_eq!(resolved.layer, FallbackLayer::Splash);

    // Every degraded serve was audited; the healthy one was not
    let audits = svc
        .query_audit(&AuditFilter {
            action: Some(AuditAction::FallbackTriggered),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(audits.len(), 3);
}

#[tokio::test]
async fn override_replaces_live_content_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let svc = service(dir.path()).await;
    let today: NaiveDate = "2026-03-14".parse().unwrap();

    svc.upsert_entry(&push("2026-03-14", BoardType::Mainboard, "Fran", "<div>planned</div>"))
        .await
        .unwrap();
    svc.run_daily_swap(today).await.unwrap();

    svc.override_board(
        today,
        BoardType::Mainboard,
        OverrideRequest {
            html: Some("<div>gym closed early</div>".to_string()),
            reason: Some("weather".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // Overridden rows are displayable; the board shows the new content
    let resolved = svc.resolve(today, BoardType::Mainboard).await;
    assert_eq!(resolved.layer, FallbackLayer::Primary);
    assert_eq!(resolved.html, "<div>gym closed early</div>");

    // And the cache was fanned out too
    let cached = std::fs::read_to_string(dir.path().join("cache/2026-03-14_mainboard.html")).unwrap();
    assert_eq!(cached, "<div>gym closed early</div>");

    let entry = svc.get_entry(today, BoardType::Mainboard).await.unwrap();
    assert_eq!(entry.status, EntryStatus::Overridden);
}

#[tokio::test]
async fn delete_rebuilds_snapshot_without_the_date() {
    let dir = tempfile::tempdir().unwrap();
    let svc = service(dir.path()).await;

    svc.upsert_entry(&push("2026-03-14", BoardType::Mainboard, "Fran", "<div>a</div>"))
        .await
        .unwrap();
    svc.upsert_entry(&push("2026-03-15", BoardType::Mainboard, "Murph", "<div>b</div>"))
        .await
        .unwrap();

    svc.delete_for_date("2026-03-14".parse().unwrap()).await.unwrap();

    let snapshot = std::fs::read_to_string(dir.path().join("backup.json")).unwrap();
    let snapshot: serde_json::Value = serde_json::from_str(&snapshot).unwrap();
    let entries = snapshot["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["date"], "2026-03-15");
}

#[tokio::test]
async fn audit_trail_tells_the_whole_story() {
    let dir = tempfile::tempdir().unwrap();
    let svc = service(dir.path()).await;
    let today: NaiveDate = "2026-03-14".parse().unwrap();

    svc.upsert_entry(&push("2026-03-14", BoardType::Mainboard, "Fran", "<div/>"))
        .await
        .unwrap();
    svc.run_daily_swap(today).await.unwrap();
    svc.override_board(
        today,
        BoardType::Mainboard,
        OverrideRequest {
            html: Some("<div>X</div>".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // Newest first: override's inner push audits schedule, then override
    let all = svc.query_audit(&AuditFilter::default()).await.unwrap();
    let actions: Vec<AuditAction> = all.iter().map(|e| e.action).collect();
    assert!(actions.contains(&AuditAction::Schedule));
    assert!(actions.contains(&AuditAction::Swap));
    assert!(actions.contains(&AuditAction::Override));
    assert_eq!(all.len(), 4);
}
