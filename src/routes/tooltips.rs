use crate::tooltips::{CATALOG, TooltipId, TooltipSummary};
use crate::utils::e404;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use serde::Deserialize;

#[get("/tooltips")]
pub async fn index() -> HttpResponse {
    let summaries: Vec<TooltipSummary> =
        CATALOG.iter().copied().map(TooltipSummary::from).collect();

    HttpResponse::Ok()
        .content_type(ContentType::json())
        .json(summaries)
}

#[derive(Deserialize, Debug)]
pub struct TooltipQuery {
    selection: Option<String>,
}

#[get("/tooltips/{tooltip_id}")]
#[tracing::instrument(
    name = "Rendering graph tooltip",
    skip(query),
    fields(selection = ?query.selection)
)]
pub async fn get(
    tooltip_id: web::Path<String>,
    query: web::Query<TooltipQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let tooltip_id: TooltipId = tooltip_id.parse().map_err(e404)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(tooltip_id.render(query.selection.as_deref())))
}
