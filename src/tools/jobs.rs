use super::job_query::JobQuery;
use super::tool::{Tool, ToolFuture};
use crate::schemas::{deserialize_params, parameters_schema};
use crate::services::blocking_http::{fetch_json, JsonGet};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

pub const JOB_SEARCH_URL: &str = "https://www.104.com.tw/jobs/search/list";
const SOURCE: &str = "https://www.104.com.tw/";
const MAX_LISTINGS: usize = 10;

/// Parameters for job searches
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct JobSearchParams {
    /// Search keyword, optionally containing `page=<number>` to paginate
    pub keyword: String,
}

/// One normalized listing from the 104 job board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub job_name: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub posted_date: Option<String>,
    pub job_url: Option<String>,
    pub description: String,
}

/// Result of a job search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchResult {
    pub keyword: String,
    pub page: u32,
    pub total_count: Option<u64>,
    pub jobs: Vec<JobListing>,
    pub source: String,
}

/// Searches job openings on the 104 job bank (104 人力銀行)
#[derive(Debug, Clone)]
pub struct JobSearchTool {
    endpoint: String,
}

impl Default for JobSearchTool {
    fn default() -> Self {
        Self::new()
    }
}

impl JobSearchTool {
    pub fn new() -> Self {
        Self {
            endpoint: JOB_SEARCH_URL.to_string(),
        }
    }

    /// Point the tool at a different listing endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Run a search, returning `None` on empty input or any upstream failure
    pub async fn search(&self, keyword: &str) -> Option<JobSearchResult> {
        let query = JobQuery::parse(keyword)?;
        debug!(keyword = %query.keyword, page = query.page, "searching 104 jobs");

        let payload = fetch_json(self.request(&query)).await?;
        let result = parse_job_payload(&query, &payload);
        if result.is_none() {
            warn!(keyword = %query.keyword, "104 returned an unsuccessful payload");
        }
        result
    }

    fn request(&self, query: &JobQuery) -> JsonGet {
        JsonGet::new(self.endpoint.as_str())
            .query("ro", 0)
            .query("kwop", 1)
            .query("keyword", &query.keyword)
            .query("expansionType", "job")
            .query("order", 14)
            .query("asc", 0)
            .query("page", query.page)
            .query("mode", "s")
            .query("langFlag", 0)
            .query("langStatus", 0)
            .query("recommendJob", 1)
            .query("hotJob", 1)
            .query("appliedJob", 0)
            .header("User-Agent", "Mozilla/5.0")
            .header("Referer", "https://www.104.com.tw/")
            .header("Accept", "application/json")
            // 104 still negotiates TLS parameters modern defaults reject.
            .legacy_tls()
    }
}

/// Search 104 with the default endpoint
pub async fn search_104_jobs(keyword: &str) -> Option<JobSearchResult> {
    JobSearchTool::new().search(keyword).await
}

/// Normalize a raw 104 payload. `None` unless `status` is 200.
pub fn parse_job_payload(query: &JobQuery, payload: &Value) -> Option<JobSearchResult> {
    if payload.get("status").and_then(Value::as_f64) != Some(200.0) {
        return None;
    }

    let data = payload.get("data").filter(|data| data.is_object());
    let listings: Vec<JobListing> = data
        .and_then(|data| data.get("list"))
        .and_then(Value::as_array)
        .map(|list| list.iter().take(MAX_LISTINGS).map(project_listing).collect())
        .unwrap_or_default();

    let page = data
        .and_then(|data| data.get("query"))
        .and_then(|query| query.get("page"))
        .and_then(as_u32)
        .unwrap_or(query.page);

    let total_count = data
        .and_then(|data| data.get("totalCount"))
        .and_then(|count| match count {
            Value::String(text) => text.parse().ok(),
            other => other.as_u64(),
        });

    Some(JobSearchResult {
        keyword: query.keyword.clone(),
        page,
        total_count,
        jobs: listings,
        source: SOURCE.to_string(),
    })
}

fn project_listing(job: &Value) -> JobListing {
    let text = |key: &str| job.get(key).and_then(Value::as_str).map(str::to_owned);
    let non_empty = |key: &str| text(key).filter(|value| !value.is_empty());

    JobListing {
        job_name: text("jobName"),
        company: text("custName"),
        location: text("jobAddrNoDesc"),
        salary: text("salaryDesc"),
        posted_date: text("appearDate"),
        job_url: job
            .get("link")
            .and_then(|link| link.get("job"))
            .and_then(Value::as_str)
            .map(absolute_job_url),
        description: non_empty("descWithoutHighlight")
            .or_else(|| non_empty("description"))
            .unwrap_or_default(),
    }
}

/// Rewrite protocol-relative links (`//host/path`) to explicit HTTPS
pub fn absolute_job_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_string()
    }
}

fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::String(text) => text.parse().ok(),
        other => other.as_u64().and_then(|n| u32::try_from(n).ok()),
    }
}

impl Tool for JobSearchTool {
    fn name(&self) -> &'static str {
        "search_104_jobs"
    }

    fn description(&self) -> &'static str {
        "Search job openings on the 104 job bank (104 人力銀行). Use this whenever the user asks \
         for job listings, vacancies, hiring info, 找工作, 找職缺, or mentions 104. Append \
         `page=<number>` to the keyword to paginate."
    }

    fn parameters_schema(&self) -> Value {
        parameters_schema::<JobSearchParams>()
    }

    fn execute(&self, parameters: Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let params: JobSearchParams = deserialize_params(parameters)?;
            let result = self.search(&params.keyword).await;
            Ok(serde_json::to_value(result)?)
        })
    }
}
