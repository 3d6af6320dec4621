//! Integration tests for the application lifecycle.

mod helpers;

use http::StatusCode;

const PDF_BYTES: &[u8] = b"%PDF-1.4 minimal resume";

#[tokio::test]
async fn test_apply_success() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp@acme.com", "password123", true)
        .await;
    app.create_admin("admin@hirehub.com", "password123").await;
    app.create_applicant("seeker@example.com", "password123")
        .await;
    let employer = app.login("emp@acme.com", "password123").await;
    let admin = app.login("admin@hirehub.com", "password123").await;
    let applicant = app.login("seeker@example.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "Backend Role").await;

    let response = app
        .apply(
            &applicant,
            job_id,
            "resume.pdf",
            "application/pdf",
            PDF_BYTES,
            "I would like to apply.",
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response
            .body
            .pointer("/data/status")
            .unwrap()
            .as_str()
            .unwrap(),
        "pending"
    );
    assert!(response.body.pointer("/data/resume_url").is_some());

    // The job's application counter is incremented
    let job = app
        .request("GET", &format!("/api/jobs/{job_id}"), None, None)
        .await;
    assert_eq!(
        job.body
            .pointer("/data/applications_count")
            .unwrap()
            .as_i64()
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn test_apply_twice_conflict() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp2@acme.com", "password123", true)
        .await;
    app.create_admin("admin2@hirehub.com", "password123").await;
    app.create_applicant("eager@example.com", "password123")
        .await;
    let employer = app.login("emp2@acme.com", "password123").await;
    let admin = app.login("admin2@hirehub.com", "password123").await;
    let applicant = app.login("eager@example.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "Popular Role").await;

    let first = app
        .apply(&applicant, job_id, "resume.pdf", "application/pdf", PDF_BYTES, "")
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .apply(&applicant, job_id, "resume.pdf", "application/pdf", PDF_BYTES, "")
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_apply_bad_resume_extension() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp3@acme.com", "password123", true)
        .await;
    app.create_admin("admin3@hirehub.com", "password123").await;
    app.create_applicant("sketchy@example.com", "password123")
        .await;
    let employer = app.login("emp3@acme.com", "password123").await;
    let admin = app.login("admin3@hirehub.com", "password123").await;
    let applicant = app.login("sketchy@example.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "Careful Role").await;

    let response = app
        .apply(
            &applicant,
            job_id,
            "resume.exe",
            "application/octet-stream",
            b"MZ",
            "",
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_apply_to_pending_job_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp4@acme.com", "password123", true)
        .await;
    app.create_applicant("early@example.com", "password123")
        .await;
    let employer = app.login("emp4@acme.com", "password123").await;
    let applicant = app.login("early@example.com", "password123").await;

    let job_id = app.post_job(&employer, "Not Yet Open").await;

    let response = app
        .apply(&applicant, job_id, "resume.pdf", "application/pdf", PDF_BYTES, "")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_employer_cannot_apply() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp5@acme.com", "password123", true)
        .await;
    app.create_admin("admin5@hirehub.com", "password123").await;
    let employer = app.login("emp5@acme.com", "password123").await;
    let admin = app.login("admin5@hirehub.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "Tempting Role").await;

    let response = app
        .apply(&employer, job_id, "resume.pdf", "application/pdf", PDF_BYTES, "")
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_my_applications_includes_job() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp6@acme.com", "password123", true)
        .await;
    app.create_admin("admin6@hirehub.com", "password123").await;
    app.create_applicant("tracker@example.com", "password123")
        .await;
    let employer = app.login("emp6@acme.com", "password123").await;
    let admin = app.login("admin6@hirehub.com", "password123").await;
    let applicant = app.login("tracker@example.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "Tracked Role").await;
    app.apply(&applicant, job_id, "resume.pdf", "application/pdf", PDF_BYTES, "")
        .await;

    let response = app
        .request(
            "GET",
            "/api/applications/my-applications",
            None,
            Some(&applicant),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body.pointer("/data").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0]
            .pointer("/job/title")
            .unwrap()
            .as_str()
            .unwrap(),
        "Tracked Role"
    );
}

#[tokio::test]
async fn test_list_for_job_owner_only() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp7@acme.com", "password123", true)
        .await;
    app.create_employer("rival7@other.com", "password123", true)
        .await;
    app.create_admin("admin7@hirehub.com", "password123").await;
    app.create_applicant("cand7@example.com", "password123")
        .await;
    let employer = app.login("emp7@acme.com", "password123").await;
    let rival = app.login("rival7@other.com", "password123").await;
    let admin = app.login("admin7@hirehub.com", "password123").await;
    let applicant = app.login("cand7@example.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "Guarded Role").await;
    app.apply(&applicant, job_id, "resume.pdf", "application/pdf", PDF_BYTES, "")
        .await;

    let denied = app
        .request(
            "GET",
            &format!("/api/applications/job/{job_id}"),
            None,
            Some(&rival),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let owner = app
        .request(
            "GET",
            &format!("/api/applications/job/{job_id}"),
            None,
            Some(&employer),
        )
        .await;
    assert_eq!(owner.status, StatusCode::OK);
    let items = owner.body.pointer("/data").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 1);
    // Applicant contact info is joined in for the reviewing employer
    assert_eq!(
        items[0]
            .pointer("/applicant/email")
            .unwrap()
            .as_str()
            .unwrap(),
        "cand7@example.com"
    );
}

#[tokio::test]
async fn test_update_status_and_terminal_freeze() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp8@acme.com", "password123", true)
        .await;
    app.create_admin("admin8@hirehub.com", "password123").await;
    app.create_applicant("cand8@example.com", "password123")
        .await;
    let employer = app.login("emp8@acme.com", "password123").await;
    let admin = app.login("admin8@hirehub.com", "password123").await;
    let applicant = app.login("cand8@example.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "Reviewed Role").await;
    let applied = app
        .apply(&applicant, job_id, "resume.pdf", "application/pdf", PDF_BYTES, "")
        .await;
    let application_id = applied
        .body
        .pointer("/data/id")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();

    // Move to reviewing; reviewed_at is stamped on the first transition
    let reviewing = app
        .request(
            "PUT",
            &format!("/api/applications/{application_id}/status"),
            Some(serde_json::json!({ "status": "reviewing" })),
            Some(&employer),
        )
        .await;
    assert_eq!(reviewing.status, StatusCode::OK, "{:?}", reviewing.body);
    assert!(reviewing.body.pointer("/data/reviewed_at").unwrap().is_string());

    // Accept with notes
    let accepted = app
        .request(
            "PUT",
            &format!("/api/applications/{application_id}/status"),
            Some(serde_json::json!({
                "status": "accepted",
                "notes": "Strong candidate",
            })),
            Some(&employer),
        )
        .await;
    assert_eq!(accepted.status, StatusCode::OK);
    assert_eq!(
        accepted
            .body
            .pointer("/data/notes")
            .unwrap()
            .as_str()
            .unwrap(),
        "Strong candidate"
    );

    // Terminal applications can no longer change
    let frozen = app
        .request(
            "PUT",
            &format!("/api/applications/{application_id}/status"),
            Some(serde_json::json!({ "status": "rejected" })),
            Some(&employer),
        )
        .await;
    assert_eq!(frozen.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_status_cannot_return_to_pending() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp9@acme.com", "password123", true)
        .await;
    app.create_admin("admin9@hirehub.com", "password123").await;
    app.create_applicant("cand9@example.com", "password123")
        .await;
    let employer = app.login("emp9@acme.com", "password123").await;
    let admin = app.login("admin9@hirehub.com", "password123").await;
    let applicant = app.login("cand9@example.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "One Way Role").await;
    let applied = app
        .apply(&applicant, job_id, "resume.pdf", "application/pdf", PDF_BYTES, "")
        .await;
    let application_id = applied
        .body
        .pointer("/data/id")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();

    app.request(
        "PUT",
        &format!("/api/applications/{application_id}/status"),
        Some(serde_json::json!({ "status": "shortlisted" })),
        Some(&employer),
    )
    .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/applications/{application_id}/status"),
            Some(serde_json::json!({ "status": "pending" })),
            Some(&employer),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_applicant_cannot_update_status() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp10@acme.com", "password123", true)
        .await;
    app.create_admin("admin10@hirehub.com", "password123").await;
    app.create_applicant("cand10@example.com", "password123")
        .await;
    let employer = app.login("emp10@acme.com", "password123").await;
    let admin = app.login("admin10@hirehub.com", "password123").await;
    let applicant = app.login("cand10@example.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "Self Review Role").await;
    let applied = app
        .apply(&applicant, job_id, "resume.pdf", "application/pdf", PDF_BYTES, "")
        .await;
    let application_id = applied
        .body
        .pointer("/data/id")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/applications/{application_id}/status"),
            Some(serde_json::json!({ "status": "accepted" })),
            Some(&applicant),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_get_application_party_check() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp11@acme.com", "password123", true)
        .await;
    app.create_admin("admin11@hirehub.com", "password123").await;
    app.create_applicant("cand11@example.com", "password123")
        .await;
    app.create_applicant("other11@example.com", "password123")
        .await;
    let employer = app.login("emp11@acme.com", "password123").await;
    let admin = app.login("admin11@hirehub.com", "password123").await;
    let applicant = app.login("cand11@example.com", "password123").await;
    let stranger = app.login("other11@example.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "Private Role").await;
    let applied = app
        .apply(&applicant, job_id, "resume.pdf", "application/pdf", PDF_BYTES, "")
        .await;
    let application_id = applied
        .body
        .pointer("/data/id")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();

    for (token, expected) in [
        (&applicant, StatusCode::OK),
        (&employer, StatusCode::OK),
        (&admin, StatusCode::OK),
        (&stranger, StatusCode::FORBIDDEN),
    ] {
        let response = app
            .request(
                "GET",
                &format!("/api/applications/{application_id}"),
                None,
                Some(token),
            )
            .await;
        assert_eq!(response.status, expected);
    }
}

#[tokio::test]
async fn test_stats_overview_admin_only() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp12@acme.com", "password123", true)
        .await;
    app.create_admin("admin12@hirehub.com", "password123").await;
    app.create_applicant("cand12@example.com", "password123")
        .await;
    let employer = app.login("emp12@acme.com", "password123").await;
    let admin = app.login("admin12@hirehub.com", "password123").await;
    let applicant = app.login("cand12@example.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "Counted Role").await;
    app.apply(&applicant, job_id, "resume.pdf", "application/pdf", PDF_BYTES, "")
        .await;

    let denied = app
        .request(
            "GET",
            "/api/applications/stats/overview",
            None,
            Some(&employer),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let stats = app
        .request("GET", "/api/applications/stats/overview", None, Some(&admin))
        .await;
    assert_eq!(stats.status, StatusCode::OK);
    assert_eq!(
        stats.body.pointer("/data/total").unwrap().as_i64().unwrap(),
        1
    );
    assert_eq!(
        stats
            .body
            .pointer("/data/pending")
            .unwrap()
            .as_i64()
            .unwrap(),
        1
    );
}

fn resume_file_count(app: &helpers::TestApp) -> usize {
    std::fs::read_dir(&app.config.storage.resume_root)
        .map(|entries| entries.count())
        .unwrap_or(0)
}

#[tokio::test]
async fn test_duplicate_apply_leaves_no_stray_resume() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp20@acme.com", "password123", true)
        .await;
    app.create_admin("admin20@hirehub.com", "password123").await;
    app.create_applicant("tidy@example.com", "password123").await;
    let employer = app.login("emp20@acme.com", "password123").await;
    let admin = app.login("admin20@hirehub.com", "password123").await;
    let applicant = app.login("tidy@example.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "Tidy Role").await;

    let first = app
        .apply(&applicant, job_id, "resume.pdf", "application/pdf", PDF_BYTES, "")
        .await;
    assert_eq!(first.status, StatusCode::OK);
    let stored = resume_file_count(&app);

    let second = app
        .apply(&applicant, job_id, "resume.pdf", "application/pdf", PDF_BYTES, "")
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);

    // The rejected submission must not write a blob
    assert_eq!(resume_file_count(&app), stored);
}

#[tokio::test]
async fn test_concurrent_duplicate_applies() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp21@acme.com", "password123", true)
        .await;
    app.create_admin("admin21@hirehub.com", "password123").await;
    app.create_applicant("racer@example.com", "password123").await;
    let employer = app.login("emp21@acme.com", "password123").await;
    let admin = app.login("admin21@hirehub.com", "password123").await;
    let applicant = app.login("racer@example.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "Contended Role").await;

    let (first, second) = tokio::join!(
        app.apply(&applicant, job_id, "resume.pdf", "application/pdf", PDF_BYTES, ""),
        app.apply(&applicant, job_id, "resume.pdf", "application/pdf", PDF_BYTES, ""),
    );

    // Exactly one submission wins, whichever order they landed in
    let mut statuses = [first.status, second.status];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::OK, StatusCode::CONFLICT]);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE job_id = $1")
        .bind(job_id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let job = app
        .request("GET", &format!("/api/jobs/{job_id}"), None, None)
        .await;
    assert_eq!(
        job.body
            .pointer("/data/applications_count")
            .unwrap()
            .as_i64()
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn test_concurrent_applies_count_every_application() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp22@acme.com", "password123", true)
        .await;
    app.create_admin("admin22@hirehub.com", "password123").await;
    let employer = app.login("emp22@acme.com", "password123").await;
    let admin = app.login("admin22@hirehub.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "Hot Role").await;

    let mut tokens = Vec::new();
    for i in 0..5 {
        let email = format!("cand{i}@example.com");
        app.create_applicant(&email, "password123").await;
        tokens.push(app.login(&email, "password123").await);
    }

    let (a, b, c, d, e) = tokio::join!(
        app.apply(&tokens[0], job_id, "resume.pdf", "application/pdf", PDF_BYTES, ""),
        app.apply(&tokens[1], job_id, "resume.pdf", "application/pdf", PDF_BYTES, ""),
        app.apply(&tokens[2], job_id, "resume.pdf", "application/pdf", PDF_BYTES, ""),
        app.apply(&tokens[3], job_id, "resume.pdf", "application/pdf", PDF_BYTES, ""),
        app.apply(&tokens[4], job_id, "resume.pdf", "application/pdf", PDF_BYTES, ""),
    );
    for response in [&a, &b, &c, &d, &e] {
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    }

    // The atomic counter update loses none of the five increments
    let job = app
        .request("GET", &format!("/api/jobs/{job_id}"), None, None)
        .await;
    assert_eq!(
        job.body
            .pointer("/data/applications_count")
            .unwrap()
            .as_i64()
            .unwrap(),
        5
    );

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE job_id = $1")
        .bind(job_id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(rows, 5);
}
