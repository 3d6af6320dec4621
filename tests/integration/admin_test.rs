//! Integration tests for admin user management and reporting.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_list_users_admin_only() {
    let app = helpers::TestApp::new().await;
    app.create_admin("admin@hirehub.com", "password123").await;
    app.create_applicant("someone@example.com", "password123")
        .await;
    let admin = app.login("admin@hirehub.com", "password123").await;
    let user = app.login("someone@example.com", "password123").await;

    let denied = app.request("GET", "/api/users/all", None, Some(&user)).await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let listing = app.request("GET", "/api/users/all", None, Some(&admin)).await;
    assert_eq!(listing.status, StatusCode::OK);
    let items = listing.body.pointer("/data/items").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 2);
    // Hashes never leave the API
    assert!(items[0].get("password_hash").is_none());
}

#[tokio::test]
async fn test_list_users_role_filter_and_pagination() {
    let app = helpers::TestApp::new().await;
    app.create_admin("admin2@hirehub.com", "password123").await;
    for i in 0..3 {
        app.create_applicant(&format!("cand{i}@example.com"), "password123")
            .await;
    }
    app.create_employer("emp2@acme.com", "password123", true)
        .await;
    let admin = app.login("admin2@hirehub.com", "password123").await;

    let filtered = app
        .request("GET", "/api/users/all?role=applicant", None, Some(&admin))
        .await;
    let items = filtered.body.pointer("/data/items").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 3);

    let page = app
        .request(
            "GET",
            "/api/users/all?role=applicant&page=2&page_size=2",
            None,
            Some(&admin),
        )
        .await;
    let items = page.body.pointer("/data/items").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        page.body
            .pointer("/data/total_items")
            .unwrap()
            .as_i64()
            .unwrap(),
        3
    );
}

#[tokio::test]
async fn test_approve_employer_flow() {
    let app = helpers::TestApp::new().await;
    app.create_admin("admin3@hirehub.com", "password123").await;
    let employer_id = app
        .create_employer("new3@acme.com", "password123", false)
        .await;
    let admin = app.login("admin3@hirehub.com", "password123").await;
    let employer = app.login("new3@acme.com", "password123").await;

    // Shows up in the pending queue
    let pending = app
        .request("GET", "/api/users/pending-employers", None, Some(&admin))
        .await;
    assert_eq!(pending.status, StatusCode::OK);
    let items = pending.body.pointer("/data").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 1);

    // Cannot post while unapproved
    let blocked = app
        .request(
            "POST",
            "/api/jobs",
            Some(serde_json::json!({
                "title": "Too Soon",
                "description": "x",
                "requirements": "x",
                "location": "x",
                "job_type": "Remote",
                "category": "IT",
                "salary": { "min": 50000, "max": 70000 },
                "experience_level": "Entry",
            })),
            Some(&employer),
        )
        .await;
    assert_eq!(blocked.status, StatusCode::FORBIDDEN);

    let approved = app
        .request(
            "PUT",
            &format!("/api/users/approve-employer/{employer_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(approved.status, StatusCode::OK);
    assert_eq!(
        approved.body.pointer("/data/is_approved").unwrap(),
        true
    );

    // Approval takes effect without a new token
    let job_id = app.post_job(&employer, "Finally Allowed").await;
    assert!(!job_id.is_nil());
}

#[tokio::test]
async fn test_approve_employer_validation() {
    let app = helpers::TestApp::new().await;
    app.create_admin("admin4@hirehub.com", "password123").await;
    let applicant_id = app
        .create_applicant("notemp@example.com", "password123")
        .await;
    let approved_id = app
        .create_employer("done4@acme.com", "password123", true)
        .await;
    let admin = app.login("admin4@hirehub.com", "password123").await;

    let not_employer = app
        .request(
            "PUT",
            &format!("/api/users/approve-employer/{applicant_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(not_employer.status, StatusCode::BAD_REQUEST);

    let already = app
        .request(
            "PUT",
            &format!("/api/users/approve-employer/{approved_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(already.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_user() {
    let app = helpers::TestApp::new().await;
    app.create_admin("admin5@hirehub.com", "password123").await;
    let target_id = app
        .create_applicant("target5@example.com", "password123")
        .await;
    let admin = app.login("admin5@hirehub.com", "password123").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/users/{target_id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Deleted users can no longer log in
    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "target5@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_admin_rejected() {
    let app = helpers::TestApp::new().await;
    let admin_id = app.create_admin("admin6@hirehub.com", "password123").await;
    let other_id = app.create_admin("other6@hirehub.com", "password123").await;
    let admin = app.login("admin6@hirehub.com", "password123").await;

    for id in [admin_id, other_id] {
        let response = app
            .request("DELETE", &format!("/api/users/{id}"), None, Some(&admin))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_overview_stats() {
    let app = helpers::TestApp::new().await;
    app.create_admin("admin7@hirehub.com", "password123").await;
    app.create_employer("emp7@acme.com", "password123", true)
        .await;
    app.create_employer("wait7@acme.com", "password123", false)
        .await;
    app.create_applicant("cand7@example.com", "password123")
        .await;
    let admin = app.login("admin7@hirehub.com", "password123").await;
    let employer = app.login("emp7@acme.com", "password123").await;

    app.post_job(&employer, "Pending Stat Role").await;
    app.post_open_job(&employer, &admin, "Open Stat Role").await;

    let response = app.request("GET", "/api/users/stats", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);

    let stats = response.body.pointer("/data").unwrap();
    assert_eq!(stats.pointer("/users/total").unwrap().as_i64().unwrap(), 4);
    assert_eq!(
        stats.pointer("/users/employers").unwrap().as_i64().unwrap(),
        2
    );
    assert_eq!(
        stats
            .pointer("/users/pending_employers")
            .unwrap()
            .as_i64()
            .unwrap(),
        1
    );
    assert_eq!(stats.pointer("/jobs/total").unwrap().as_i64().unwrap(), 2);
    assert_eq!(stats.pointer("/jobs/open").unwrap().as_i64().unwrap(), 1);
    assert_eq!(stats.pointer("/jobs/pending").unwrap().as_i64().unwrap(), 1);
    assert_eq!(
        stats
            .pointer("/applications/total")
            .unwrap()
            .as_i64()
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_stats_forbidden_for_non_admin() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp8@acme.com", "password123", true)
        .await;
    let employer = app.login("emp8@acme.com", "password123").await;

    let response = app
        .request("GET", "/api/users/stats", None, Some(&employer))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
