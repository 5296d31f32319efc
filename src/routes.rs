use crate::api::webhook;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/webhook").route(web::post().to(webhook::webhook)))
        .service(web::resource("/health").route(web::get().to(webhook::health)))
        .service(web::resource("/actions").route(web::get().to(webhook::list_actions)));
}

// RUNTIME (intent detected)
//  └─ POST /webhook {next_action, tracker, domain}
//       └─ action.run(dispatcher, tracker, domain)
//            └─ {events, responses}
