pub mod aggregates;
pub mod catalog;
pub mod configuration;
pub mod domain;
pub mod email_template;
pub mod exchange_rates;
pub mod routes;
pub mod selection;
pub mod startup;
pub mod telemetry;
