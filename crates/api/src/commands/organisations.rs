use anyhow::{anyhow, Result};
use convoy_domain::OrganisationsQuery;
use serde_json::{json, Value};

use crate::context::AppContext;

pub(super) async fn list(ctx: &AppContext, user: Option<String>) -> Result<Value> {
    let query = OrganisationsQuery { user_id: user };
    let response = ctx.login.get_organizations(&query).await?;
    Ok(serde_json::to_value(response)?)
}

/// Look the organisation up in the caller's listing, then persist it.
pub(super) async fn select(ctx: &AppContext, uid: &str) -> Result<Value> {
    let organisations = ctx.private.get_organisations().await?.into_data()?;
    let organisation = organisations
        .content
        .into_iter()
        .find(|org| org.uid == uid)
        .ok_or_else(|| anyhow!("organisation {uid} is not visible to this account"))?;

    ctx.private.select_organisation(&organisation)?;
    Ok(json!({ "organisation": organisation }))
}
