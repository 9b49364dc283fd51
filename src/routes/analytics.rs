use crate::actions::ActionDispatcher;
use crate::utils::{e404, e502};
use actix_web::{HttpResponse, post, web};

/// A single Segment `track` call, forwarded as-is.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    user_id: String,
    event: String,
    #[serde(default)]
    properties: serde_json::Map<String, serde_json::Value>,
}

#[post("/analytics/{target}/track")]
#[tracing::instrument(
    name = "Forwarding analytics track event",
    skip(body, dispatcher),
    fields(event = %body.event)
)]
pub async fn track(
    target: web::Path<String>,
    body: web::Json<TrackRequest>,
    dispatcher: web::Data<ActionDispatcher>,
) -> Result<HttpResponse, actix_web::Error> {
    let client = dispatcher
        .resolver()
        .client_for_name(&target)
        .map_err(e404)?;

    client
        .track(&body.user_id, &body.event, &body.properties)
        .await
        .map_err(e502)?;

    Ok(HttpResponse::Ok().finish())
}
