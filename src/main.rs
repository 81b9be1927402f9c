use actix_web::middleware::Logger;
use actix_web::App;
use actix_web::HttpServer;
use failure::Error;
use log::info;

use nudgr::api;
use nudgr::db;
use nudgr::healthz;
use nudgr::settings;

#[actix_web::main]
async fn main() -> Result<(), Error> {
    std::env::set_var("RUST_LOG", "info");
    env_logger::init();
    info!("starting nudgr");

    let s = settings::Settings::new()?;
    let pool = db::establish_connection(&s.nudgr.postgres_url);
    let nudgr_settings = s.nudgr;

    HttpServer::new(move || {
        App::new()
            .data(pool.clone())
            .data(nudgr_settings.clone())
            .wrap(Logger::default().exclude("/healthz"))
            .service(healthz::healthz_app())
            .service(api::client::client_app())
            .service(api::tasks::tasks_app())
    })
    .bind("0.0.0.0:8085")?
    .run()
    .await
    .map_err(Into::into)
}
