use anyhow::Result;
use convoy_domain::LoginRequest;
use serde_json::{json, Value};
use tracing::info;

use crate::context::AppContext;

pub(super) async fn login(ctx: &AppContext, email: String, password: String) -> Result<Value> {
    let response = ctx.login.login(&LoginRequest { email, password }).await?;

    // Tokens stay in the session file; only the profile is printed.
    let user = response.data.map(|user| {
        json!({
            "uid": user.uid,
            "first_name": user.first_name,
            "last_name": user.last_name,
            "email": user.email,
        })
    });
    info!("login complete");

    Ok(json!({ "status": response.status, "message": response.message, "data": user }))
}

pub(super) async fn logout(ctx: &AppContext) -> Result<Value> {
    let response = ctx.login.logout().await?;
    Ok(serde_json::to_value(response)?)
}
