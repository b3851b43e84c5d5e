use crate::catalog::Catalog;
use crate::configuration::{CampaignSettings, Settings};
use crate::exchange_rates::CurrencyRates;
use crate::routes::{
    convert_currency, get_profile, health_check, list_historical, list_new, preview_campaign,
    preview_campaign_html, send_campaign, update_selection, views,
};
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let currency_rates = config.exchange_rates.currency_rates()?;
        let catalog = Catalog::builtin()?;

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {address}"))?;
        let port = listener.local_addr()?.port();
        let server = run(listener, catalog, currency_rates, config.campaign)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    catalog: Catalog,
    currency_rates: CurrencyRates,
    campaign_settings: CampaignSettings,
) -> Result<Server, anyhow::Error> {
    let catalog = web::Data::new(catalog);
    let currency_rates = web::Data::new(currency_rates);
    let campaign_settings = web::Data::new(campaign_settings);
    let views = web::Data::new(views().context("Failed to compile HTML views")?);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/influencers/historical", web::get().to(list_historical))
            .route("/influencers/new", web::get().to(list_new))
            .route("/influencers/{id}", web::get().to(get_profile))
            .route("/selection", web::post().to(update_selection))
            .route("/campaigns/preview", web::post().to(preview_campaign))
            .route("/campaigns/preview.html", web::post().to(preview_campaign_html))
            .route("/campaigns/send", web::post().to(send_campaign))
            .route("/rates/convert", web::get().to(convert_currency))
            .app_data(catalog.clone())
            .app_data(currency_rates.clone())
            .app_data(campaign_settings.clone())
            .app_data(views.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
