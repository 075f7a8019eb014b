use anyhow::Result;
use convoy_domain::{AppsQuery, SourcesQuery};
use serde_json::{json, Value};

use crate::context::AppContext;

pub(super) async fn select(ctx: &AppContext, uid: &str) -> Result<Value> {
    let scope = ctx.private.scope()?;
    let (project, _scope) = ctx.private.select_project(&scope, uid).await?;
    Ok(json!({ "project": project }))
}

pub(super) async fn details(ctx: &AppContext) -> Result<Value> {
    let scope = ctx.private.scope()?;
    let response = ctx.private.get_project_details(&scope).await?;
    Ok(serde_json::to_value(response)?)
}

pub(super) async fn apps(ctx: &AppContext, page: Option<u32>, search: Option<String>) -> Result<Value> {
    let scope = ctx.private.scope()?;
    let query = AppsQuery { page_no: page, search_string: search };
    let response = ctx.private.get_apps(&scope, &query).await?;
    Ok(serde_json::to_value(response)?)
}

pub(super) async fn sources(ctx: &AppContext, page: Option<u32>) -> Result<Value> {
    let scope = ctx.private.scope()?;
    let response = ctx.private.get_sources(&scope, &SourcesQuery { page }).await?;
    Ok(serde_json::to_value(response)?)
}
