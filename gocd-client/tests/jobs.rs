//! Job endpoint tests

mod common;

use common::{accept_json, auth, setup};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

const SCHEDULED_JOBS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<scheduledJobs>
  <job name="job1" id="6">
    <link rel="self" href="https://ci.example.com/go/tab/build/detail/mypipeline/5/defaultStage/1/job1"/>
    <buildLocator>mypipeline/5/defaultStage/1/job1</buildLocator>
  </job>
  <job name="job2" id="7">
    <link rel="self" href="https://ci.example.com/go/tab/build/detail/mypipeline/5/defaultStage/1/job2"/>
    <buildLocator>mypipeline/5/defaultStage/1/job2</buildLocator>
    <environment>prod</environment>
    <resources>
      <resource><![CDATA[linux]]></resource>
      <resource><![CDATA[firefox]]></resource>
    </resources>
  </job>
</scheduledJobs>"#;

#[tokio::test]
async fn test_list_scheduled_jobs() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/go/api/jobs/scheduled.xml"))
        .and(header("Accept", "application/xml"))
        .and(auth())
        .respond_with(ResponseTemplate::new(200).set_body_raw(SCHEDULED_JOBS, "application/xml"))
        .expect(1)
        .mount(&server)
        .await;

    let jobs = client.list_scheduled_jobs().await.unwrap();
    assert_eq!(jobs.len(), 2);

    let first = &jobs[0];
    assert_eq!(first.name, "job1");
    assert_eq!(first.job_id, "6");
    assert_eq!(
        first.job_url(),
        "https://ci.example.com/go/tab/build/detail/mypipeline/5/defaultStage/1/job1"
    );
    assert_eq!(first.environment, None);
    assert!(first.resources().is_empty());
    assert_eq!(first.pipeline_name(), Some("mypipeline"));
    assert_eq!(first.pipeline_counter(), Some(5));
    assert_eq!(first.stage_name(), Some("defaultStage"));
    assert_eq!(first.stage_counter(), Some(1));
    assert_eq!(first.job_name(), Some("job1"));

    let second = &jobs[1];
    assert_eq!(second.environment.as_deref(), Some("prod"));
    assert_eq!(second.resources(), ["linux", "firefox"]);
}

#[tokio::test]
async fn test_list_scheduled_jobs_none() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/go/api/jobs/scheduled.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<?xml version="1.0" encoding="UTF-8"?><scheduledJobs/>"#,
            "application/xml",
        ))
        .mount(&server)
        .await;

    let jobs = client.list_scheduled_jobs().await.unwrap();
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn test_list_scheduled_jobs_rejects_html() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/go/api/jobs/scheduled.xml"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html><body>Login</body></html>", "text/html"),
        )
        .mount(&server)
        .await;

    let error = client.list_scheduled_jobs().await.unwrap_err();
    assert!(matches!(error, gocd_client::ClientError::ParseError(_)));
}

#[tokio::test]
async fn test_get_job_history() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/go/api/jobs/mypipeline/defaultStage/job1/history/0"))
        .and(accept_json())
        .and(auth())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [{
                "agent_uuid": "278b5e7e-fed3-4e3b-9b61-9a1c3e4c1e4d",
                "name": "job1",
                "job_state_transitions": [],
                "scheduled_date": 1436509881814i64,
                "original_job_id": null,
                "pipeline_counter": 5,
                "rerun": false,
                "pipeline_name": "mypipeline",
                "result": "Passed",
                "state": "Completed",
                "id": 5,
                "stage_counter": "1",
                "stage_name": "defaultStage"
            }],
            "pagination": {"offset": 0, "total": 1, "page_size": 10}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let jobs = client
        .get_job_history("mypipeline", "defaultStage", "job1", 0)
        .await
        .unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].pipeline_counter, 5);
    assert_eq!(jobs[0].original_job_id, "");
    assert_eq!(jobs[0].result, "Passed");
}
