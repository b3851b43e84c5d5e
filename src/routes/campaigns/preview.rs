use actix_web::{HttpResponse, http::header::ContentType, web};

use super::{CampaignError, CampaignRequest, prepare_campaign};
use crate::{
    catalog::Catalog, configuration::CampaignSettings, routes::helpers::prepare_html_template,
};

#[tracing::instrument(
    name = "Previewing campaign emails",
    skip_all,
    fields(campaign_name = %body.params.campaign_name)
)]
pub async fn preview_campaign(
    body: web::Json<CampaignRequest>,
    catalog: web::Data<Catalog>,
    settings: web::Data<CampaignSettings>,
) -> Result<HttpResponse, CampaignError> {
    let preview = prepare_campaign(body.into_inner(), &catalog, &settings)?;
    Ok(HttpResponse::Ok().json(preview))
}

#[tracing::instrument(
    name = "Rendering campaign preview page",
    skip_all,
    fields(campaign_name = %body.params.campaign_name)
)]
pub async fn preview_campaign_html(
    body: web::Json<CampaignRequest>,
    catalog: web::Data<Catalog>,
    settings: web::Data<CampaignSettings>,
    views: web::Data<tera::Tera>,
) -> Result<HttpResponse, CampaignError> {
    let preview = prepare_campaign(body.into_inner(), &catalog, &settings)?;

    let mut ctx = tera::Context::new();
    ctx.insert("preview", &preview);
    let page = prepare_html_template(&views, &ctx, "campaign_preview.html")?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page))
}
