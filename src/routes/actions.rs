use crate::actions::{ActionDispatcher, ConsoleAction};
use crate::utils::e502;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, post, web};

#[post("/actions")]
#[tracing::instrument(name = "Dispatching console action", skip_all)]
pub async fn post(
    action: web::Json<ConsoleAction>,
    dispatcher: web::Data<ActionDispatcher>,
) -> Result<HttpResponse, actix_web::Error> {
    let outcome = dispatcher
        .dispatch(action.into_inner())
        .await
        .map_err(e502)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .json(outcome))
}
