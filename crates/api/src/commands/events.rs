use anyhow::Result;
use convoy_domain::{EventDeliveriesQuery, EventsQuery, ScopeContext};
use serde_json::Value;

use crate::cli::{DeliveriesArgs, EventsArgs};
use crate::context::AppContext;

/// Portal tokens carry their own scope; otherwise use the stored selection.
fn scope_for(ctx: &AppContext, token: Option<&str>) -> Result<ScopeContext> {
    match token {
        Some(token) if !token.is_empty() => Ok(ScopeContext::unscoped()),
        _ => Ok(ctx.private.scope()?),
    }
}

pub(super) async fn list(ctx: &AppContext, args: EventsArgs) -> Result<Value> {
    let scope = scope_for(ctx, args.token.as_deref())?;
    let query = EventsQuery {
        page_no: args.page,
        start_date: args.start,
        end_date: args.end,
        endpoint_id: args.endpoint,
        query: args.query,
        token: args.token,
        source_id: args.source,
    };

    let response = ctx.event_logs.get_events(&scope, &query).await?;
    Ok(serde_json::to_value(response)?)
}

pub(super) async fn deliveries(ctx: &AppContext, args: DeliveriesArgs) -> Result<Value> {
    let scope = scope_for(ctx, args.token.as_deref())?;
    let query = EventDeliveriesQuery {
        page_no: args.page,
        start_date: args.start,
        end_date: args.end,
        endpoint_id: args.endpoint,
        event_id: args.event,
        statuses: args.statuses,
        token: args.token,
        source_id: args.source,
    };

    let response = ctx.event_logs.get_event_deliveries(&scope, &query).await?;
    Ok(serde_json::to_value(response)?)
}
