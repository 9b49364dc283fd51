use crate::actions::ActionDispatcher;
use crate::local_settings::{LocalSetting, LocalSettingValue};
use crate::utils::e404;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};

#[get("/local_settings/{name}")]
#[tracing::instrument(name = "Reading local setting", skip(dispatcher))]
pub async fn get(
    name: web::Path<String>,
    dispatcher: web::Data<ActionDispatcher>,
) -> Result<HttpResponse, actix_web::Error> {
    let setting = LocalSetting::find(&name)
        .ok_or_else(|| format!("No local setting is named `{}`.", name))
        .map_err(e404)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .json(LocalSettingValue {
            name: setting.name,
            value: dispatcher.settings().get(&setting),
        }))
}
