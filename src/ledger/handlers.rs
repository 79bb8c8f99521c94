use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardRequest {
    #[serde(default)]
    player_address: String,
    #[serde(default)]
    game_result: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    #[serde(default)]
    player_address: String,
    #[serde(default)]
    amount: i64,
}

/// Mounts the `/api/web3` endpoints.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/web3")
            .route("/reward", web::post().to(reward))
            .route("/withdraw", web::post().to(withdraw))
            .route("/balance/{address}", web::get().to(balance))
            .route("/network-config", web::get().to(network)),
    );
}

fn bad(error: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": error }))
}

async fn reward(ledger: web::Data<dyn Ledger>, req: web::Json<RewardRequest>) -> impl Responder {
    let Ok(address) = Address::try_from(req.player_address.as_str()) else {
        return bad("Invalid player address");
    };
    let Ok(outcome) = Outcome::try_from(req.game_result.as_str()) else {
        return bad("Invalid game result");
    };
    HttpResponse::Ok().json(ledger.reward(&address, outcome).json())
}

async fn withdraw(ledger: web::Data<dyn Ledger>, req: web::Json<WithdrawRequest>) -> impl Responder {
    let Ok(address) = Address::try_from(req.player_address.as_str()) else {
        return bad("Invalid player address");
    };
    match ledger.withdraw(&address, req.amount) {
        Ok(receipt) => HttpResponse::Ok().json(receipt.json()),
        Err(GameError::Validation(reason)) => bad(&reason),
        Err(e) => HttpResponse::InternalServerError()
            .json(serde_json::json!({ "error": "Failed to process withdrawal", "message": e.to_string() })),
    }
}

async fn balance(ledger: web::Data<dyn Ledger>, path: web::Path<String>) -> impl Responder {
    match Address::try_from(path.as_str()) {
        Ok(address) => HttpResponse::Ok().json(ledger.balance(&address)),
        Err(_) => bad("Invalid address"),
    }
}

async fn network(ledger: web::Data<dyn Ledger>) -> impl Responder {
    HttpResponse::Ok().json(ledger.deployment())
}
