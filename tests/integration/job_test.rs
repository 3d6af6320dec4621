//! Integration tests for the job posting lifecycle.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_unapproved_employer_cannot_post() {
    let app = helpers::TestApp::new().await;
    app.create_employer("pending@acme.com", "password123", false)
        .await;
    let token = app.login("pending@acme.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(serde_json::json!({
                "title": "Backend Engineer",
                "description": "Build services",
                "requirements": "Rust",
                "location": "Berlin",
                "job_type": "Full-time",
                "category": "IT",
                "salary": { "min": 60000, "max": 90000 },
                "experience_level": "Mid",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_applicant_cannot_post() {
    let app = helpers::TestApp::new().await;
    app.create_applicant("seeker@example.com", "password123")
        .await;
    let token = app.login("seeker@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(serde_json::json!({
                "title": "Backend Engineer",
                "description": "Build services",
                "requirements": "Rust",
                "location": "Berlin",
                "job_type": "Full-time",
                "category": "IT",
                "salary": { "min": 60000, "max": 90000 },
                "experience_level": "Mid",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_new_job_starts_pending_and_hidden() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp1@acme.com", "password123", true)
        .await;
    let token = app.login("emp1@acme.com", "password123").await;

    let job_id = app.post_job(&token, "Hidden Role").await;

    // Pending jobs never appear in the public listing
    let listing = app.request("GET", "/api/jobs", None, None).await;
    assert_eq!(listing.status, StatusCode::OK);
    let items = listing.body.pointer("/data/items").unwrap().as_array().unwrap();
    assert!(items.is_empty());

    // Anonymous fetch of a pending job is a 404
    let anon = app
        .request("GET", &format!("/api/jobs/{job_id}"), None, None)
        .await;
    assert_eq!(anon.status, StatusCode::NOT_FOUND);

    // The owner still sees it
    let own = app
        .request("GET", &format!("/api/jobs/{job_id}"), None, Some(&token))
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(
        own.body.pointer("/data/status").unwrap().as_str().unwrap(),
        "pending"
    );
}

#[tokio::test]
async fn test_admin_approval_opens_job() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp2@acme.com", "password123", true)
        .await;
    app.create_admin("admin2@hirehub.com", "password123").await;
    let employer = app.login("emp2@acme.com", "password123").await;
    let admin = app.login("admin2@hirehub.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "Visible Role").await;

    let listing = app.request("GET", "/api/jobs", None, None).await;
    let items = listing.body.pointer("/data/items").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].get("id").unwrap().as_str().unwrap(),
        job_id.to_string()
    );
    assert_eq!(items[0].get("status").unwrap().as_str().unwrap(), "open");
    // Company is denormalized from the employer profile
    assert_eq!(
        items[0].get("company").unwrap().as_str().unwrap(),
        "Acme Corp"
    );
    // Poster summary is joined in for listings
    assert_eq!(
        items[0].pointer("/poster/name").unwrap().as_str().unwrap(),
        "emp2"
    );
}

#[tokio::test]
async fn test_employer_cannot_approve() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp3@acme.com", "password123", true)
        .await;
    let token = app.login("emp3@acme.com", "password123").await;
    let job_id = app.post_job(&token, "Self Serve").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/jobs/{job_id}/approve"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_reject_closes_job() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp4@acme.com", "password123", true)
        .await;
    app.create_admin("admin4@hirehub.com", "password123").await;
    let employer = app.login("emp4@acme.com", "password123").await;
    let admin = app.login("admin4@hirehub.com", "password123").await;

    let job_id = app.post_job(&employer, "Doomed Role").await;
    let response = app
        .request(
            "PUT",
            &format!("/api/jobs/{job_id}/reject"),
            None,
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .body
            .pointer("/data/status")
            .unwrap()
            .as_str()
            .unwrap(),
        "closed"
    );
}

#[tokio::test]
async fn test_admin_reject_closes_open_job() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp11@acme.com", "password123", true)
        .await;
    app.create_admin("admin11@hirehub.com", "password123").await;
    let employer = app.login("emp11@acme.com", "password123").await;
    let admin = app.login("admin11@hirehub.com", "password123").await;

    // Rejection also takes down jobs that already went live
    let job_id = app.post_open_job(&employer, &admin, "Recalled Role").await;
    let response = app
        .request(
            "PUT",
            &format!("/api/jobs/{job_id}/reject"),
            None,
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response
            .body
            .pointer("/data/status")
            .unwrap()
            .as_str()
            .unwrap(),
        "closed"
    );

    // Rejecting an already-closed job is a validation error
    let again = app
        .request(
            "PUT",
            &format!("/api/jobs/{job_id}/reject"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_listing_filters() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp5@acme.com", "password123", true)
        .await;
    app.create_admin("admin5@hirehub.com", "password123").await;
    let employer = app.login("emp5@acme.com", "password123").await;
    let admin = app.login("admin5@hirehub.com", "password123").await;

    app.post_open_job(&employer, &admin, "Senior Rust Engineer")
        .await;
    app.post_open_job(&employer, &admin, "Marketing Manager")
        .await;

    // Case-insensitive substring search over title/company/description
    let search = app
        .request("GET", "/api/jobs?search=RUST", None, None)
        .await;
    let items = search.body.pointer("/data/items").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].get("title").unwrap().as_str().unwrap(),
        "Senior Rust Engineer"
    );

    // Salary window filters overlap with the job's range
    let salary = app
        .request("GET", "/api/jobs?min_salary=95000", None, None)
        .await;
    let items = salary.body.pointer("/data/items").unwrap().as_array().unwrap();
    assert!(items.is_empty());

    let salary = app
        .request("GET", "/api/jobs?min_salary=70000", None, None)
        .await;
    let items = salary.body.pointer("/data/items").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_listing_accepts_camel_case_params() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp12@acme.com", "password123", true)
        .await;
    app.create_admin("admin12@hirehub.com", "password123").await;
    let employer = app.login("emp12@acme.com", "password123").await;
    let admin = app.login("admin12@hirehub.com", "password123").await;

    app.post_open_job(&employer, &admin, "Aliased Role").await;

    // Filters must not be silently dropped when sent in camelCase
    let salary = app
        .request("GET", "/api/jobs?minSalary=95000", None, None)
        .await;
    let items = salary.body.pointer("/data/items").unwrap().as_array().unwrap();
    assert!(items.is_empty());

    let job_type = app
        .request("GET", "/api/jobs?jobType=Contract", None, None)
        .await;
    let items = job_type
        .body
        .pointer("/data/items")
        .unwrap()
        .as_array()
        .unwrap();
    assert!(items.is_empty());

    let level = app
        .request("GET", "/api/jobs?experienceLevel=Mid&limit=1", None, None)
        .await;
    let items = level.body.pointer("/data/items").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        level
            .body
            .pointer("/data/page_size")
            .unwrap()
            .as_u64()
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn test_update_job_owner_only() {
    let app = helpers::TestApp::new().await;
    app.create_employer("owner@acme.com", "password123", true)
        .await;
    app.create_employer("rival@other.com", "password123", true)
        .await;
    let owner = app.login("owner@acme.com", "password123").await;
    let rival = app.login("rival@other.com", "password123").await;

    let job_id = app.post_job(&owner, "Contested Role").await;

    let denied = app
        .request(
            "PUT",
            &format!("/api/jobs/{job_id}"),
            Some(serde_json::json!({ "title": "Hijacked" })),
            Some(&rival),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let updated = app
        .request(
            "PUT",
            &format!("/api/jobs/{job_id}"),
            Some(serde_json::json!({ "title": "Renamed Role" })),
            Some(&owner),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(
        updated
            .body
            .pointer("/data/title")
            .unwrap()
            .as_str()
            .unwrap(),
        "Renamed Role"
    );
}

#[tokio::test]
async fn test_inverted_salary_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp6@acme.com", "password123", true)
        .await;
    let token = app.login("emp6@acme.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(serde_json::json!({
                "title": "Bad Salary",
                "description": "x",
                "requirements": "x",
                "location": "x",
                "job_type": "Contract",
                "category": "Finance",
                "salary": { "min": 90000, "max": 60000 },
                "experience_level": "Senior",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_my_jobs_lists_all_statuses() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp7@acme.com", "password123", true)
        .await;
    app.create_admin("admin7@hirehub.com", "password123").await;
    let employer = app.login("emp7@acme.com", "password123").await;
    let admin = app.login("admin7@hirehub.com", "password123").await;

    app.post_job(&employer, "Still Pending").await;
    app.post_open_job(&employer, &admin, "Already Open").await;

    let response = app
        .request("GET", "/api/jobs/my-jobs", None, Some(&employer))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.body.pointer("/data").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_pending_queue_admin_only() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp8@acme.com", "password123", true)
        .await;
    app.create_admin("admin8@hirehub.com", "password123").await;
    let employer = app.login("emp8@acme.com", "password123").await;
    let admin = app.login("admin8@hirehub.com", "password123").await;

    app.post_job(&employer, "Awaiting Review").await;

    let denied = app
        .request("GET", "/api/jobs/admin/pending", None, Some(&employer))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let queue = app
        .request("GET", "/api/jobs/admin/pending", None, Some(&admin))
        .await;
    assert_eq!(queue.status, StatusCode::OK);
    let items = queue.body.pointer("/data").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_close_job() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp10@acme.com", "password123", true)
        .await;
    app.create_admin("admin10@hirehub.com", "password123").await;
    let employer = app.login("emp10@acme.com", "password123").await;
    let admin = app.login("admin10@hirehub.com", "password123").await;

    let job_id = app.post_open_job(&employer, &admin, "Filled Role").await;

    let closed = app
        .request(
            "PUT",
            &format!("/api/jobs/{job_id}/close"),
            None,
            Some(&employer),
        )
        .await;
    assert_eq!(closed.status, StatusCode::OK);
    assert_eq!(
        closed
            .body
            .pointer("/data/status")
            .unwrap()
            .as_str()
            .unwrap(),
        "closed"
    );

    // Closing twice is a validation error
    let again = app
        .request(
            "PUT",
            &format!("/api/jobs/{job_id}/close"),
            None,
            Some(&employer),
        )
        .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_job() {
    let app = helpers::TestApp::new().await;
    app.create_employer("emp9@acme.com", "password123", true)
        .await;
    let token = app.login("emp9@acme.com", "password123").await;
    let job_id = app.post_job(&token, "Short Lived").await;

    let response = app
        .request("DELETE", &format!("/api/jobs/{job_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/jobs/{job_id}"), None, Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}
