use std::net::IpAddr;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use visionaria_core_contact_contracts::ContactFeatureService;
use visionaria_core_lead_contracts::LeadFeatureService;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Lead, Contact> {
    lead: Lead,
    contact: Contact,
}

impl<Lead, Contact> RestServer<Lead, Contact>
where
    Lead: LeadFeatureService,
    Contact: ContactFeatureService,
{
    pub fn new(lead: Lead, contact: Contact) -> Self {
        Self { lead, contact }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::lead::router(self.lead.into()))
            .merge(routes::contact::router(self.contact.into()))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_headers([CONTENT_TYPE]),
            );

        middlewares::trace::add(router)
    }
}
