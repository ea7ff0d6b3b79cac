use std::time::Duration;

use jiff::civil::date;
use uuid::Uuid;

use fintrack_core::keys;
use fintrack_core::models::report::{
    CustomPeriod, Report, ReportFormat, ReportPeriod, ReportStatus, ReportType,
};
use fintrack_reports::error::ReportError;
use fintrack_reports::service::{CreateReport, ReportService};
use fintrack_storage::store::Store;
use fintrack_storage::{objects, state};

fn test_service() -> (tempfile::TempDir, Store, ReportService) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("store"));
    let service = ReportService::new(store.clone(), dir.path().join("reports"));
    (dir, store, service)
}

fn create_request(report_type: ReportType, period: ReportPeriod) -> CreateReport {
    CreateReport {
        report_type,
        period,
        format: None,
        custom_period: None,
    }
}

async fn wait_terminal(service: &ReportService, user_id: Uuid, id: Uuid) -> Report {
    for _ in 0..250 {
        let report = service.get(user_id, id).await.unwrap();
        if matches!(
            report.status,
            ReportStatus::Completed | ReportStatus::Failed
        ) {
            return report;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("report never reached a terminal state");
}

#[tokio::test]
async fn create_returns_pending_then_completes() {
    let (_dir, _store, service) = test_service();
    let user = Uuid::new_v4();

    let created = service
        .create(user, create_request(ReportType::IncomeStatement, ReportPeriod::CurrentMonth))
        .await
        .unwrap();

    assert_eq!(created.status, ReportStatus::Pending);
    assert_eq!(created.format, ReportFormat::Pdf);
    assert!(created.report_data.is_none());

    let finished = wait_terminal(&service, user, created.id).await;
    assert_eq!(finished.status, ReportStatus::Completed);
    assert!(finished.report_data.is_some());
    assert!(finished.generated_at.is_some());
    assert!(finished.error_message.is_none());

    let file_name = finished.file_name.as_deref().unwrap();
    assert!(file_name.starts_with("Income_Statement_"));
    assert!(file_name.ends_with(".pdf"));
    assert_eq!(
        finished.file_url.as_deref().unwrap(),
        format!("/reports/{file_name}")
    );
}

#[tokio::test]
async fn completed_job_keeps_identical_data_across_reads() {
    let (_dir, _store, service) = test_service();
    let user = Uuid::new_v4();

    let created = service
        .create(user, create_request(ReportType::CashFlow, ReportPeriod::CurrentYear))
        .await
        .unwrap();
    let finished = wait_terminal(&service, user, created.id).await;
    assert_eq!(finished.status, ReportStatus::Completed);

    let again = service.get(user, created.id).await.unwrap();
    assert_eq!(again.status, ReportStatus::Completed);
    assert_eq!(again.report_data, finished.report_data);
}

#[tokio::test]
async fn invalid_custom_period_creates_no_row() {
    let (_dir, _store, service) = test_service();
    let user = Uuid::new_v4();

    let req = CreateReport {
        report_type: ReportType::ExpenseReport,
        period: ReportPeriod::Custom,
        format: None,
        custom_period: Some(CustomPeriod {
            start_date: date(2025, 3, 1),
            end_date: date(2025, 3, 1),
        }),
    };
    let err = service.create(user, req).await.unwrap_err();
    assert_eq!(err.to_string(), "Start date must be before end date");

    let missing = CreateReport {
        report_type: ReportType::ExpenseReport,
        period: ReportPeriod::Custom,
        format: None,
        custom_period: None,
    };
    let err = service.create(user, missing).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Custom period requires start_date and end_date"
    );

    let page = service.list(user, 1, 10).await.unwrap();
    assert_eq!(page.pagination.total, 0);
}

#[tokio::test]
async fn listing_paginates_newest_first() {
    let (_dir, _store, service) = test_service();
    let user = Uuid::new_v4();

    for _ in 0..15 {
        service
            .create(user, create_request(ReportType::ExpenseReport, ReportPeriod::CurrentMonth))
            .await
            .unwrap();
    }

    let first = service.list(user, 1, 10).await.unwrap();
    assert_eq!(first.data.len(), 10);
    assert_eq!(first.pagination.total, 15);
    assert_eq!(first.pagination.total_pages, 2);

    let second = service.list(user, 2, 10).await.unwrap();
    assert_eq!(second.data.len(), 5);
    assert_eq!(second.pagination.page, 2);

    for pair in first.data.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn foreign_owner_is_indistinguishable_from_missing() {
    let (_dir, _store, service) = test_service();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let created = service
        .create(owner, create_request(ReportType::TaxSummary, ReportPeriod::LastMonth))
        .await
        .unwrap();

    assert!(matches!(
        service.get(stranger, created.id).await.unwrap_err(),
        ReportError::NotFound
    ));
    assert!(matches!(
        service.delete(stranger, created.id).await.unwrap_err(),
        ReportError::NotFound
    ));

    // The owner still sees the job.
    service.get(owner, created.id).await.unwrap();
}

#[tokio::test]
async fn delete_removes_the_row_but_not_the_artifact() {
    let (_dir, _store, service) = test_service();
    let user = Uuid::new_v4();

    let created = service
        .create(user, create_request(ReportType::BudgetAnalysis, ReportPeriod::CurrentQuarter))
        .await
        .unwrap();
    let finished = wait_terminal(&service, user, created.id).await;
    let artifact = service
        .reports_dir()
        .join(finished.file_name.as_deref().unwrap());
    assert!(artifact.exists());

    service.delete(user, created.id).await.unwrap();
    assert!(matches!(
        service.get(user, created.id).await.unwrap_err(),
        ReportError::NotFound
    ));
    assert!(matches!(
        service.delete(user, created.id).await.unwrap_err(),
        ReportError::NotFound
    ));

    // Known behavior: the rendered file is orphaned, not cleaned up.
    assert!(artifact.exists());
}

#[tokio::test]
async fn download_of_unfinished_job_is_rejected_with_status() {
    let (_dir, store, service) = test_service();
    let user = Uuid::new_v4();

    // A hand-written pending row, so no generation task races the assertion.
    let now = jiff::Timestamp::now();
    let report = Report {
        id: Uuid::new_v4(),
        user_id: user,
        report_type: ReportType::IncomeStatement,
        period: ReportPeriod::CurrentMonth,
        format: ReportFormat::Pdf,
        status: ReportStatus::Pending,
        custom_period: None,
        report_data: None,
        generated_at: None,
        file_name: None,
        file_url: None,
        error_message: None,
        created_at: now,
        updated_at: now,
    };
    state::save_json(&store, &keys::report(user, report.id), &report)
        .await
        .unwrap();

    let err = service.download(user, report.id).await.unwrap_err();
    assert_eq!(err.to_string(), "Report is pending. Cannot download yet.");
}

#[tokio::test]
async fn download_of_completed_job_returns_pdf_bytes() {
    let (_dir, _store, service) = test_service();
    let user = Uuid::new_v4();

    let created = service
        .create(user, create_request(ReportType::ExpenseReport, ReportPeriod::CurrentMonth))
        .await
        .unwrap();
    let finished = wait_terminal(&service, user, created.id).await;
    assert_eq!(finished.status, ReportStatus::Completed);

    let (report, bytes) = service.download(user, created.id).await.unwrap();
    assert_eq!(report.file_name, finished.file_name);
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn download_with_missing_artifact_reports_file_not_found() {
    let (_dir, _store, service) = test_service();
    let user = Uuid::new_v4();

    let created = service
        .create(user, create_request(ReportType::ExpenseReport, ReportPeriod::CurrentMonth))
        .await
        .unwrap();
    let finished = wait_terminal(&service, user, created.id).await;

    let artifact = service
        .reports_dir()
        .join(finished.file_name.as_deref().unwrap());
    tokio::fs::remove_file(&artifact).await.unwrap();

    let err = service.download(user, created.id).await.unwrap_err();
    assert_eq!(err.to_string(), "File not found on server");
}

#[tokio::test]
async fn malformed_ledger_record_fails_the_job_with_a_message() {
    let (_dir, store, service) = test_service();
    let user = Uuid::new_v4();

    objects::put_document(
        &store,
        &format!("incomes/{user}/broken.json"),
        b"not json at all",
    )
    .await
    .unwrap();

    let created = service
        .create(user, create_request(ReportType::IncomeStatement, ReportPeriod::CurrentMonth))
        .await
        .unwrap();
    let finished = wait_terminal(&service, user, created.id).await;

    assert_eq!(finished.status, ReportStatus::Failed);
    assert!(finished.error_message.is_some());
    assert!(finished.file_name.is_none());
    assert!(finished.report_data.is_none());
}

#[tokio::test]
async fn stats_count_jobs_by_status() {
    let (_dir, _store, service) = test_service();
    let user = Uuid::new_v4();

    let a = service
        .create(user, create_request(ReportType::IncomeStatement, ReportPeriod::CurrentMonth))
        .await
        .unwrap();
    let b = service
        .create(user, create_request(ReportType::CashFlow, ReportPeriod::LastQuarter))
        .await
        .unwrap();
    wait_terminal(&service, user, a.id).await;
    wait_terminal(&service, user, b.id).await;

    let stats = service.stats(user).await.unwrap();
    assert_eq!(stats.get("completed"), Some(&2));
    assert_eq!(stats.get("pending"), None);

    // Another user's stats stay empty.
    let stranger = Uuid::new_v4();
    assert!(service.stats(stranger).await.unwrap().is_empty());
}
