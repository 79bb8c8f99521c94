use super::*;
use crate::ledger;
use crate::ledger::Ledger;
use crate::ledger::MockLedger;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

/// Public base URL that Frame button targets are rooted at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin(String);

impl From<String> for Origin {
    fn from(s: String) -> Self {
        Self(s.trim_end_matches('/').to_string())
    }
}

impl Origin {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Query string shared by every Frame endpoint.
#[derive(Debug, Default, serde::Deserialize)]
pub struct Knock {
    session: Option<String>,
    choice: Option<String>,
}

impl Knock {
    /// The caller's session, or a freshly minted id when none was sent.
    fn id(&self) -> SessionId {
        self.session
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(SessionId::from)
            .unwrap_or_else(SessionId::now)
    }
}

/// The Frame HTTP service.
#[derive(Clone)]
pub struct Server {
    lobby: web::Data<Lobby>,
    origin: web::Data<Origin>,
    ledger: web::Data<dyn Ledger>,
}

impl From<(Lobby, Origin)> for Server {
    fn from((lobby, origin): (Lobby, Origin)) -> Self {
        Self {
            lobby: web::Data::new(lobby),
            origin: web::Data::new(origin),
            ledger: web::Data::from(Arc::new(MockLedger::default()) as Arc<dyn Ledger>),
        }
    }
}

impl Server {
    pub fn with_ledger(self, ledger: Arc<dyn Ledger>) -> Self {
        Self {
            ledger: web::Data::from(ledger),
            ..self
        }
    }

    /// Registers shared state and every route.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.lobby.clone())
            .app_data(self.origin.clone())
            .app_data(self.ledger.clone())
            .route("/health", web::get().to(health))
            .route("/frame", web::get().to(frame))
            .service(
                web::scope("/api/frame")
                    .route("/image", web::get().to(image))
                    .route("/play", web::post().to(play))
                    .route("/restart", web::post().to(restart))
                    .route("/balance", web::post().to(balance))
                    .route("/reward", web::post().to(reward))
                    .route("/stats", web::post().to(stats)),
            )
            .configure(ledger::routes);
    }

    pub async fn run(self, bind: &str, workers: usize) -> Result<(), std::io::Error> {
        log::info!("starting frame server on {}", bind);
        log::info!("frame url: {}/frame", self.origin.as_str());
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .configure(|cfg| self.configure(cfg))
                .default_service(web::to(missing))
        })
        .workers(workers)
        .bind(bind)?
        .run()
        .await
    }
}

/// Fallback for unknown routes.
pub async fn missing() -> impl Responder {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Endpoint not found" }))
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

fn card(session: &Session, id: &SessionId, origin: &Origin) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html(session, id, origin.as_str()))
}

async fn frame(lobby: web::Data<Lobby>, origin: web::Data<Origin>) -> impl Responder {
    let (id, session) = lobby.open().await;
    card(&session, &id, &origin)
}

async fn image(lobby: web::Data<Lobby>, knock: web::Query<Knock>) -> impl Responder {
    let session = lobby.peek(&knock.id()).await;
    HttpResponse::Ok()
        .content_type("image/svg+xml")
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .body(svg(&session))
}

async fn play(
    lobby: web::Data<Lobby>,
    origin: web::Data<Origin>,
    knock: web::Query<Knock>,
) -> impl Responder {
    let id = knock.id();
    match lobby.play(&id, knock.choice.as_deref().unwrap_or_default()).await {
        Ok(session) => card(&session, &id, &origin),
        Err(GameError::InvalidChoice(choice)) => {
            log::debug!("rejected choice {:?}", choice);
            HttpResponse::BadRequest().json(serde_json::json!({ "error": "Invalid choice" }))
        }
        Err(e) => {
            log::error!("play failed: {}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Internal server error" }))
        }
    }
}

async fn restart(
    lobby: web::Data<Lobby>,
    origin: web::Data<Origin>,
    knock: web::Query<Knock>,
) -> impl Responder {
    let id = knock.id();
    card(&lobby.restart(&id).await, &id, &origin)
}

async fn balance(
    lobby: web::Data<Lobby>,
    origin: web::Data<Origin>,
    knock: web::Query<Knock>,
) -> impl Responder {
    let id = knock.id();
    card(&lobby.balance(&id).await, &id, &origin)
}

async fn reward(
    lobby: web::Data<Lobby>,
    origin: web::Data<Origin>,
    knock: web::Query<Knock>,
) -> impl Responder {
    let id = knock.id();
    card(&lobby.reward(&id).await, &id, &origin)
}

async fn stats(
    lobby: web::Data<Lobby>,
    origin: web::Data<Origin>,
    knock: web::Query<Knock>,
) -> impl Responder {
    let id = knock.id();
    card(&lobby.stats(&id).await, &id, &origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Choice;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use chrono::NaiveDate;

    fn server(computer: Choice) -> Server {
        let lobby = Lobby::default()
            .with_clock(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
            .with_opponent(computer);
        Server::from((lobby, Origin::from("http://frame.test/".to_string())))
    }

    async fn body(res: actix_web::dev::ServiceResponse) -> String {
        String::from_utf8(test::read_body(res).await.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn frame_opens_a_start_card() {
        let server = server(Choice::Rock);
        let app = test::init_service(
            App::new()
                .configure(|cfg| server.configure(cfg))
                .default_service(web::to(missing)),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/frame").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let html = body(res).await;
        assert!(html.contains("http://frame.test/api/frame/play?choice=scissors&amp;session="));
        assert!(html.contains("💰 Balance"));
        assert_eq!(server.lobby.sessions().await, 1);
    }
    #[actix_web::test]
    async fn play_renders_result_buttons() {
        let server = server(Choice::Scissors);
        let app = test::init_service(App::new().configure(|cfg| server.configure(cfg))).await;
        let req = test::TestRequest::post()
            .uri("/api/frame/play?choice=rock&session=7")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let html = body(res).await;
        assert!(html.contains("🔄 Play Again"));
        assert!(html.contains("http://frame.test/api/frame/stats?session=7"));
        let session = server.lobby.fetch(&SessionId::from("7")).await;
        assert_eq!(session.state().balance(), 10);
        assert_eq!(session.phase(), Phase::Result);
    }
    #[actix_web::test]
    async fn invalid_choice_is_400() {
        let server = server(Choice::Scissors);
        let app = test::init_service(App::new().configure(|cfg| server.configure(cfg))).await;
        for uri in [
            "/api/frame/play?choice=lizard&session=7",
            "/api/frame/play?choice=S&session=7",
            "/api/frame/play?choice=ROCK&session=7",
            "/api/frame/play?choice=r&session=7",
            "/api/frame/play?choice=%20paper%20&session=7",
            "/api/frame/play?session=7",
        ] {
            let req = test::TestRequest::post().uri(uri).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body(res).await, r#"{"error":"Invalid choice"}"#);
        }
        assert_eq!(server.lobby.sessions().await, 0);
    }
    #[actix_web::test]
    async fn reward_then_image() {
        let server = server(Choice::Rock);
        let app = test::init_service(App::new().configure(|cfg| server.configure(cfg))).await;
        let req = test::TestRequest::post()
            .uri("/api/frame/reward?session=9")
            .to_request();
        let html = body(test::call_service(&app, req).await).await;
        assert!(html.contains("🎁 Daily Reward"));
        let req = test::TestRequest::get()
            .uri("/api/frame/image?session=9")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );
        assert_eq!(res.headers().get(header::CACHE_CONTROL).unwrap(), "no-cache");
        let svg = body(res).await;
        assert!(svg.contains("+50 coins claimed!"));
    }
    #[actix_web::test]
    async fn stats_card_via_image() {
        let server = server(Choice::Rock);
        let app = test::init_service(App::new().configure(|cfg| server.configure(cfg))).await;
        let req = test::TestRequest::post()
            .uri("/api/frame/stats?session=3")
            .to_request();
        let html = body(test::call_service(&app, req).await).await;
        assert!(html.contains("http://frame.test/api/frame/image?session=3"));
        assert!(html.contains("🎮 Play Game"));
        let req = test::TestRequest::get()
            .uri("/api/frame/image?session=3")
            .to_request();
        assert!(body(test::call_service(&app, req).await).await.contains("Your Game Stats"));
    }
    #[actix_web::test]
    async fn unknown_route_is_404_json() {
        let server = server(Choice::Rock);
        let app = test::init_service(
            App::new()
                .configure(|cfg| server.configure(cfg))
                .default_service(web::to(missing)),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(body(res).await, r#"{"error":"Endpoint not found"}"#);
    }
    #[actix_web::test]
    async fn health_check() {
        let server = server(Choice::Rock);
        let app = test::init_service(App::new().configure(|cfg| server.configure(cfg))).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(body(res).await, "ok");
    }
}
