use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::catalog::{Beat, BeatStore};

/// List/featured response shape for the storefront grid.
#[derive(Serialize)]
pub struct BeatCard {
    pub id: i32,
    pub title: String,
    pub producer: String,
    pub genre: String,
    pub show_price: String,
    pub image: String,
    pub likes: u32,
    pub liked: bool,
}

fn map_to_card(beat: Beat) -> BeatCard {
    let show_price = beat.display_price();
    BeatCard {
        id: beat.id,
        title: beat.title,
        producer: beat.producer,
        genre: beat.genre,
        show_price,
        image: beat.image_url,
        likes: beat.likes,
        liked: beat.liked,
    }
}

fn beat_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "status": "error",
        "message": "Beat not found",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[get("/api/beats")]
async fn list_beats(store: web::Data<BeatStore>) -> impl Responder {
    let cards: Vec<BeatCard> = store.list().into_iter().map(map_to_card).collect();
    HttpResponse::Ok().json(cards)
}

#[derive(Deserialize)]
pub struct FeaturedQuery {
    count: Option<usize>,
}

#[get("/api/beats/featured")]
async fn featured_beats(
    store: web::Data<BeatStore>,
    query: web::Query<FeaturedQuery>,
) -> impl Responder {
    let count = query.count.unwrap_or(4);
    let cards: Vec<BeatCard> = store.featured(count).into_iter().map(map_to_card).collect();
    HttpResponse::Ok().json(cards)
}

#[get("/api/beats/{id}")]
async fn get_beat(store: web::Data<BeatStore>, path: web::Path<i32>) -> impl Responder {
    match store.get(path.into_inner()) {
        Some(beat) => HttpResponse::Ok().json(beat),
        None => beat_not_found(),
    }
}

#[post("/api/beats/{id}/like")]
async fn like_beat(store: web::Data<BeatStore>, path: web::Path<i32>) -> impl Responder {
    match store.toggle_like(path.into_inner()) {
        Some(beat) => HttpResponse::Ok().json(beat),
        None => beat_not_found(),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_beats);
    // Registered before the `{id}` matcher so "featured" is not read as an id.
    cfg.service(featured_beats);
    cfg.service(get_beat);
    cfg.service(like_beat);
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;

    fn store() -> web::Data<BeatStore> {
        web::Data::new(BeatStore::seeded())
    }

    #[actix_web::test]
    async fn listing_returns_every_seeded_beat_as_a_card() {
        let app = test::init_service(App::new().app_data(store()).configure(init)).await;
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/beats").to_request())
                .await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        let cards = body.as_array().unwrap();
        assert_eq!(cards.len(), crate::catalog::beats::seed_beats().len());
        assert_eq!(cards[0]["title"], "Midnight Drive");
        assert_eq!(cards[0]["show_price"], "$29.99");
        assert_eq!(cards[0]["liked"], false);
    }

    #[actix_web::test]
    async fn featured_respects_the_requested_count() {
        let app = test::init_service(App::new().app_data(store()).configure(init)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/beats/featured?count=3")
                .to_request(),
        )
        .await;
        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 3);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/beats/featured")
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 4);
    }

    #[actix_web::test]
    async fn fetching_one_beat_returns_the_full_record() {
        let app = test::init_service(App::new().app_data(store()).configure(init)).await;
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/beats/3").to_request())
                .await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Cold Summer");
        assert_eq!(body["bpm"], 144);
        assert_eq!(body["audio_url"], "/assets/audio/cold-summer.mp3");
    }

    #[actix_web::test]
    async fn unknown_ids_get_the_json_not_found_shape() {
        let app = test::init_service(App::new().app_data(store()).configure(init)).await;
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/beats/999").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 404);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Beat not found");
    }

    #[actix_web::test]
    async fn liking_toggles_and_unliking_restores_the_count() {
        let app = test::init_service(App::new().app_data(store()).configure(init)).await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/beats/5").to_request())
                .await;
        let before: Value = test::read_body_json(resp).await;
        let likes = before["likes"].as_u64().unwrap();

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/beats/5/like")
                .to_request(),
        )
        .await;
        let liked: Value = test::read_body_json(resp).await;
        assert_eq!(liked["liked"], true);
        assert_eq!(liked["likes"].as_u64().unwrap(), likes + 1);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/beats/5/like")
                .to_request(),
        )
        .await;
        let unliked: Value = test::read_body_json(resp).await;
        assert_eq!(unliked["liked"], false);
        assert_eq!(unliked["likes"].as_u64().unwrap(), likes);
    }
}
