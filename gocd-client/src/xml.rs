//! Scheduled jobs XML decoding
//!
//! `<scheduledJobs>` holds repeated `<job name=".." id="..">` elements, each
//! with a `<link>` to the job, a `<buildLocator>`, an optional
//! `<environment>` and a `<resources>` list.

use gocd_core::domain::job::{Link, ScheduledJob};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde::Deserialize;

const ROOT: &str = "scheduledJobs";

#[derive(Debug, Deserialize)]
struct ScheduledJobsDocument {
    #[serde(rename = "job", default)]
    jobs: Vec<WireScheduledJob>,
}

#[derive(Debug, Deserialize)]
struct WireScheduledJob {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "buildLocator", default)]
    build_locator: String,
    #[serde(default)]
    link: Option<WireLink>,
    #[serde(default)]
    environment: Option<String>,
    #[serde(default)]
    resources: Option<WireResources>,
}

#[derive(Debug, Deserialize)]
struct WireLink {
    #[serde(rename = "@rel", default)]
    rel: String,
    #[serde(rename = "@href", default)]
    href: String,
}

#[derive(Debug, Deserialize)]
struct WireResources {
    #[serde(rename = "resource", default)]
    resource: Vec<String>,
}

impl From<WireScheduledJob> for ScheduledJob {
    fn from(wire: WireScheduledJob) -> Self {
        let link = wire
            .link
            .map(|link| Link {
                rel: link.rel,
                href: link.href,
            })
            .unwrap_or_default();

        Self {
            name: wire.name,
            job_id: wire.id,
            build_locator: wire.build_locator.trim().to_string(),
            link,
            environment: wire
                .environment
                .map(|env| env.trim().to_string())
                .filter(|env| !env.is_empty()),
            resources: wire
                .resources
                .map(|resources| {
                    resources
                        .resource
                        .into_iter()
                        .map(|name| name.trim().to_string())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// Decode a `<scheduledJobs>` document
pub(crate) fn decode_scheduled_jobs(body: &str) -> Result<Vec<ScheduledJob>, String> {
    let root = root_element(body).map_err(|e| e.to_string())?;
    if root != ROOT {
        return Err(format!("expected <{ROOT}> root element, found <{root}>"));
    }

    let document: ScheduledJobsDocument =
        quick_xml::de::from_str(body).map_err(|e| e.to_string())?;
    Ok(document.jobs.into_iter().map(ScheduledJob::from).collect())
}

/// Name of the first element in the document, empty if there is none
fn root_element(body: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(body);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Event::Eof => return Ok(String::new()),
            _ => {}
        }
    }
}
