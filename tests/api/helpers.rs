use once_cell::sync::Lazy;
use outreach::{
    configuration::{Settings, get_configuration},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub rates_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_historical(&self, query: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/influencers/historical?{}", &self.address, query))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_new(&self, query: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/influencers/new?{}", &self.address, query))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_profile(&self, id: &str, query: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/influencers/{}?{}", &self.address, id, query))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_selection(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/selection", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_campaign(&self, route: &str, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/campaigns/{}", &self.address, route))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_conversion(&self, amount: f64, currency: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/rates/convert", &self.address))
            .query(&[("amount", amount.to_string()), ("currency", currency.to_string())])
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Start the application on a random port, with the exchange rate provider
/// pointed at a fresh mock server.
pub async fn spawn_app_with(customize: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let rates_server = MockServer::start().await;

    let config = {
        let mut c = get_configuration().expect("Failed to read configuration");
        c.app.port = 0;
        c.exchange_rates.base_url = rates_server.uri();
        c.exchange_rates.timeout_ms = 500;
        customize(&mut c);
        c
    };

    let application = Application::build(config).expect("Failed to build application.");
    let port = application.get_port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{port}"),
        rates_server,
        api_client: reqwest::Client::new(),
    }
}

pub fn campaign_body(selected: &[&str], email_template_id: &str) -> serde_json::Value {
    serde_json::json!({
        "selected": selected,
        "params": {
            "campaign_name": "Winter Campaign",
            "email_template_id": email_template_id,
            "base_rate": 800,
            "deliverables": "1 Instagram post + 3 stories",
            "timeline": "2 weeks from confirmation",
            "custom_message": ""
        }
    })
}
