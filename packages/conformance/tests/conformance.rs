//! End-to-end conformance tests for the ALM REST client.
//!
//! Each test spawns an ephemeral [`MockAlm`] server (real TCP, real HTTP) and
//! drives the full [`AlmClient`] against it, then checks both sides: what the
//! server recorded, and what the caller got back.
//!
//! # Coverage
//!
//! | Test | Behaviour |
//! |------|-----------|
//! | `get_plans_sends_default_fields_and_paging` | default field catalog + paging on the wire |
//! | `field_override_replaces_only_its_collection` | caller `fields[...]` wins, others stay `@all` |
//! | `every_option_reaches_the_server` | include / query / sort / revision / templates |
//! | `error_statuses_pass_through_unchanged` | 400 401 403 404 409 413 415 500 503 |
//! | `unprogrammed_route_is_a_404_response` | no translation of missing resources |
//! | `success_statuses_pass_through` | 201 / 202 / 204 bodies and statuses |
//! | `auth_and_accept_headers_are_sent` | bearer token, `Accept`, `User-Agent` |
//! | `json_body_is_sent_for_writes` | POST / PATCH body and content type |
//! | `delete_with_body` | collection DELETE carries identifiers |
//! | `attachment_upload_is_multipart` | `resource` part + `files` part |
//! | `avatar_upload_has_no_resource_part` | files-only multipart |
//! | `job_download_returns_raw_bytes` | binary body + headers |
//! | `multi_segment_paths_reach_the_server` | linked work item / test record paths |
//! | `connection_refused_is_an_error` | transport failure is the only `Err` |

use almrest::{RequestOptions, COLLECTIONS};
use almrest_api::{Document, ErrorDocument, Resource};
use almrest_client::{AlmClient, AttachmentFile, ClientConfig, ClientError, FilePart, LinkRef, TestRecordRef};
use almrest_conformance::{MockAlm, Reply, TOKEN};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn plans_page() -> Value {
    json!({
        "meta": { "totalCount": 1 },
        "data": [{
            "type": "plans",
            "id": "MyProjectId/MyPlanId",
            "attributes": { "name": "Sprint 1", "status": "open" },
            "links": { "self": "server-host-name/application-path/projects/MyProjectId/plans/MyPlanId" }
        }],
        "links": { "self": "server-host-name/application-path/projects/MyProjectId/plans?page%5Bsize%5D=123&page%5Bnumber%5D=1" }
    })
}

const RECORD: TestRecordRef<'static> = TestRecordRef {
    project_id: "MyProjectId",
    test_run_id: "MyTestRunId",
    test_case_project_id: "MyProjectId",
    test_case_id: "MyTestCaseId",
    iteration: "0",
};

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_plans_sends_default_fields_and_paging() {
    let alm = MockAlm::spawn().await;
    alm.reply("GET", "projects/MyProjectId/plans", Reply::json(200, &plans_page()));

    let r = alm
        .client()
        .plans()
        .get_plans("MyProjectId", &RequestOptions::new().page(123, 1))
        .await
        .unwrap();

    assert_eq!(r.status_code(), 200);
    assert_eq!(r.json_value().unwrap(), plans_page());

    let req = alm.last_request();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "projects/MyProjectId/plans");
    assert_eq!(req.query.len(), COLLECTIONS.len() + 2);
    for c in COLLECTIONS {
        assert_eq!(req.query_value(&format!("fields[{c}]")), Some("@all"), "fields[{c}]");
    }
    assert_eq!(req.query_value("page[size]"), Some("123"));
    assert_eq!(req.query_value("page[number]"), Some("1"));
}

#[tokio::test]
async fn field_override_replaces_only_its_collection() {
    let alm = MockAlm::spawn().await;
    alm.reply("GET", "projects/P/workitems", Reply::json(200, &json!({ "data": [] })));

    alm.client()
        .work_items()
        .get_work_items("P", &RequestOptions::new().field("workitems", "id,title"))
        .await
        .unwrap();

    let req = alm.last_request();
    assert_eq!(req.query.len(), COLLECTIONS.len());
    assert_eq!(req.query_value("fields[workitems]"), Some("id,title"));
    assert_eq!(req.query_value("fields[users]"), Some("@all"));
    assert_eq!(req.query_value("page[size]"), None);
}

#[tokio::test]
async fn every_option_reaches_the_server() {
    let alm = MockAlm::spawn().await;
    alm.reply("GET", "projects/P/testruns", Reply::json(200, &json!({ "data": [] })));

    let options = RequestOptions::new()
        .include("author")
        .query("status:open AND type:manual")
        .sort("-created")
        .revision("1234")
        .templates(true);
    alm.client().test_runs().get_test_runs("P", &options).await.unwrap();

    let req = alm.last_request();
    assert_eq!(req.query_value("include"), Some("author"));
    assert_eq!(req.query_value("query"), Some("status:open AND type:manual"));
    assert_eq!(req.query_value("sort"), Some("-created"));
    assert_eq!(req.query_value("revision"), Some("1234"));
    assert_eq!(req.query_value("templates"), Some("true"));
}

// ---------------------------------------------------------------------------
// Status pass-through
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_statuses_pass_through_unchanged() {
    let alm = MockAlm::spawn().await;
    let client = alm.client();

    for status in [400u16, 401, 403, 404, 409, 413, 415, 500, 503] {
        let project = format!("P{status}");
        alm.reply(
            "GET",
            &format!("projects/{project}"),
            Reply::error(status, &format!("failure {status}")),
        );

        let r = client
            .projects()
            .get_project(&project, &RequestOptions::default())
            .await
            .unwrap_or_else(|e| panic!("status {status} became an error: {e}"));

        assert_eq!(r.status_code(), status);
        assert!(!r.is_success());
        let errors: ErrorDocument = r.json().unwrap();
        assert_eq!(errors.first_status(), Some(status.to_string().as_str()));
        assert_eq!(errors.errors[0].detail.as_deref(), Some(format!("failure {status}").as_str()));
    }
}

#[tokio::test]
async fn unprogrammed_route_is_a_404_response() {
    let alm = MockAlm::spawn().await;

    let r = alm
        .client()
        .revisions()
        .get_revision("999", &RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(r.status_code(), 404);
    assert_eq!(r.json_value().unwrap()["errors"][0]["title"], "Not Found");
}

#[tokio::test]
async fn success_statuses_pass_through() {
    let alm = MockAlm::spawn().await;
    let created = json!({ "data": [ { "type": "workitems", "id": "P/P-1" } ] });
    let job = json!({ "data": { "type": "jobs", "id": "J1", "attributes": { "state": "RUNNING" } } });
    alm.reply("POST", "projects/P/workitems", Reply::json(201, &created));
    alm.reply("POST", "projects/actions/createProject", Reply::json(202, &job));
    alm.reply("DELETE", "projects/P/workitems/P-1", Reply::empty(204));
    let client = alm.client();

    let r = client
        .work_items()
        .post_work_items("P", &json!({ "data": [ { "type": "workitems" } ] }))
        .await
        .unwrap();
    assert_eq!(r.status_code(), 201);
    let doc: Document<Vec<Resource>> = r.json().unwrap();
    assert_eq!(doc.data[0].id.as_deref(), Some("P/P-1"));

    let r = client
        .projects()
        .create_project(&json!({ "projectId": "New", "location": "/New", "templateId": "agile" }))
        .await
        .unwrap();
    assert_eq!(r.status_code(), 202);
    assert_eq!(r.json_value().unwrap(), job);

    let r = client.work_items().delete_work_item("P", "P-1").await.unwrap();
    assert_eq!(r.status_code(), 204);
    assert!(r.content().is_empty());
}

// ---------------------------------------------------------------------------
// Headers and bodies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn auth_and_accept_headers_are_sent() {
    let alm = MockAlm::spawn().await;
    alm.reply("GET", "users", Reply::json(200, &json!({ "data": [] })));

    alm.client().users().get_users(&RequestOptions::default()).await.unwrap();

    let req = alm.last_request();
    assert_eq!(req.header("authorization"), Some(format!("Bearer {TOKEN}").as_str()));
    assert_eq!(req.header("accept"), Some("application/json"));
    assert!(req.header("user-agent").unwrap().starts_with("almrest/"));
}

#[tokio::test]
async fn json_body_is_sent_for_writes() {
    let alm = MockAlm::spawn().await;
    alm.reply("PATCH", "projects/P/plans/S1", Reply::empty(204));
    let body = json!({
        "data": { "type": "plans", "id": "P/S1", "attributes": { "name": "Renamed" } }
    });

    let r = alm.client().plans().patch_plan("P", "S1", &body).await.unwrap();

    assert_eq!(r.status_code(), 204);
    let req = alm.last_request();
    assert_eq!(req.method, "PATCH");
    assert!(req.query.is_empty());
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.json(), Some(body));
}

#[tokio::test]
async fn delete_with_body() {
    let alm = MockAlm::spawn().await;
    alm.reply("DELETE", "projects/P/testruns", Reply::empty(204));
    let ids = json!({ "data": [ { "type": "testruns", "id": "P/R1" }, { "type": "testruns", "id": "P/R2" } ] });

    alm.client().test_runs().delete_test_runs("P", &ids).await.unwrap();

    let req = alm.last_request();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.json(), Some(ids));
}

#[tokio::test]
async fn attachment_upload_is_multipart() {
    let alm = MockAlm::spawn().await;
    let path = "projects/MyProjectId/testruns/MyTestRunId/testrecords/MyProjectId/MyTestCaseId/0/attachments";
    alm.reply("POST", path, Reply::json(201, &json!({ "data": [] })));

    let r = alm
        .client()
        .test_record_attachments()
        .post_test_record_attachments(
            RECORD,
            vec![AttachmentFile::new(FilePart::new("log.txt", "step 1 ok").with_mime("text/plain"))
                .with_title("Run log")],
        )
        .await
        .unwrap();
    assert_eq!(r.status_code(), 201);

    let req = alm.last_request();
    assert!(req
        .header("content-type")
        .unwrap()
        .starts_with("multipart/form-data; boundary="));
    let body = req.body_text();
    assert!(body.contains("name=\"resource\""), "{body}");
    assert!(body.contains(r#""fileName":"log.txt""#), "{body}");
    assert!(body.contains(r#""type":"testrecord_attachments""#), "{body}");
    assert!(body.contains("name=\"files\"; filename=\"log.txt\""), "{body}");
    assert!(body.contains("step 1 ok"), "{body}");
    assert!(body.find("name=\"resource\"") < body.find("name=\"files\""));
}

#[tokio::test]
async fn avatar_upload_has_no_resource_part() {
    let alm = MockAlm::spawn().await;
    alm.reply("POST", "users/jdoe/actions/updateAvatar", Reply::empty(204));

    alm.client()
        .users()
        .update_avatar("jdoe", FilePart::new("me.png", vec![0x89u8, b'P', b'N', b'G']).with_mime("image/png"))
        .await
        .unwrap();

    let body = alm.last_request().body_text();
    assert!(!body.contains("name=\"resource\""));
    assert!(body.contains("name=\"files\"; filename=\"me.png\""));
    assert!(body.contains("image/png"));
}

#[tokio::test]
async fn job_download_returns_raw_bytes() {
    let alm = MockAlm::spawn().await;
    let zip = vec![0x50u8, 0x4b, 0x03, 0x04, 0x00, 0xff];
    alm.reply(
        "GET",
        "jobs/MyJobId/actions/download/result.zip",
        Reply::bytes(200, "application/zip", zip.clone())
            .with_header("Content-Disposition", "attachment; filename=\"result.zip\""),
    );

    let r = alm
        .client()
        .jobs()
        .download_job_result_file("MyJobId", "result.zip")
        .await
        .unwrap();

    assert_eq!(r.status_code(), 200);
    assert_eq!(&r.content()[..], &zip[..]);
    assert_eq!(r.header("Content-Type"), Some("application/zip"));
    assert_eq!(
        r.header("content-disposition"),
        Some("attachment; filename=\"result.zip\"")
    );
    assert!(alm.last_request().query.is_empty());
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn multi_segment_paths_reach_the_server() {
    let alm = MockAlm::spawn().await;
    let client = alm.client();
    let link = LinkRef {
        project_id: "MyProjectId",
        work_item_id: "MyWorkItemId",
        role_id: "relates_to",
        target_project_id: "Other",
        linked_work_item_id: "O-1",
    };

    client
        .linked_work_items()
        .get_linked_work_item(link, &RequestOptions::default())
        .await
        .unwrap();
    client
        .test_records()
        .get_test_record(RECORD, &RequestOptions::default())
        .await
        .unwrap();
    client
        .enumerations()
        .get_enumeration("P", "~", "status", "task", &RequestOptions::default())
        .await
        .unwrap();

    let paths: Vec<_> = alm.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "projects/MyProjectId/workitems/MyWorkItemId/linkedworkitems/relates_to/Other/O-1",
            "projects/MyProjectId/testruns/MyTestRunId/testrecords/MyProjectId/MyTestCaseId/0",
            "projects/P/enumerations/~/status/task",
        ]
    );
}

// ---------------------------------------------------------------------------
// Transport failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn connection_refused_is_an_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new(format!("http://{addr}/rest/v1")).with_timeout_secs(2);
    let client = AlmClient::from_config(&config).unwrap();

    let err = client
        .projects()
        .get_projects(&RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Http(_)), "{err:?}");
}
