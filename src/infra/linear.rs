use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};

use crate::services::{IssueTrackerService, ResolveFailure};

const ISSUE_TITLE_QUERY: &str = "query IssueTitle($id: String!) { issue(id: $id) { title } }";

pub struct LinearClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl LinearClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl IssueTrackerService for LinearClient {
    async fn resolve_title(&self, ticket_id: &str) -> Result<String, ResolveFailure> {
        tracing::debug!(ticket = ticket_id, endpoint = %self.endpoint, "resolving issue title");

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, self.api_key.as_str())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&IssueTitleRequest::new(ticket_id))
            .send()
            .await
            .map_err(|err| ResolveFailure::Transport(format!("failed to call Linear: {err}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ResolveFailure::Transport(format!("failed to read response: {err}")))?;

        interpret_response(status, &body)
    }
}

/// Errors win over data; a missing, null or empty title is "not found".
fn interpret_response(status: StatusCode, body: &str) -> Result<String, ResolveFailure> {
    let payload: IssueTitleResponse = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(err) if status.is_success() => {
            return Err(ResolveFailure::Transport(format!(
                "failed to parse Linear response: {err}"
            )));
        }
        Err(_) => {
            return Err(ResolveFailure::Transport(format!(
                "Linear responded with {status}: {body}"
            )));
        }
    };

    if let Some(first) = payload.errors.as_deref().and_then(|errors| errors.first()) {
        return Err(ResolveFailure::Api(first.message.clone()));
    }

    let title = payload
        .data
        .and_then(|data| data.issue)
        .and_then(|issue| issue.title)
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty());

    match title {
        Some(title) => Ok(title),
        None if !status.is_success() => Err(ResolveFailure::Transport(format!(
            "Linear responded with {status}"
        ))),
        None => Err(ResolveFailure::NotFound),
    }
}

#[derive(Serialize)]
struct IssueTitleRequest<'a> {
    query: &'static str,
    variables: IssueTitleVariables<'a>,
}

impl<'a> IssueTitleRequest<'a> {
    fn new(id: &'a str) -> Self {
        Self {
            query: ISSUE_TITLE_QUERY,
            variables: IssueTitleVariables { id },
        }
    }
}

#[derive(Serialize)]
struct IssueTitleVariables<'a> {
    id: &'a str,
}

#[derive(Deserialize)]
struct IssueTitleResponse {
    data: Option<IssueTitleData>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Deserialize)]
struct IssueTitleData {
    issue: Option<IssueTitle>,
}

#[derive(Deserialize)]
struct IssueTitle {
    title: Option<String>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}
