mod digest;
mod error;
mod job_schedulers;
mod notification;
mod record;
mod settings;
mod shared;
mod status;
mod training_type;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use certreg_infra::CertregContext;
use job_schedulers::start_digest_job;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    digest::configure_routes(cfg);
    notification::configure_routes(cfg);
    record::configure_routes(cfg);
    settings::configure_routes(cfg);
    status::configure_routes(cfg);
    training_type::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: CertregContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: CertregContext) {
        start_digest_job(context);
    }

    async fn configure_server(context: CertregContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr().unwrap().port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
