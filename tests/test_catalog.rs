use crate::utils::{client, mount, not_ok, ok, SECRET};
use serde_json::json;
use streamhub::error::Error;
use streamhub::media::{Anime, Drama, Film, Manga};
use streamhub::StreamHub;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod utils;

#[tokio::test]
async fn anime_home() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/otakudesu/home",
        ok(json!({
            "ongoing": { "href": "/ongoing", "animeList": [{
                "title": "Frieren",
                "poster": "https://img/frieren.jpg",
                "episodes": 10,
                "releaseDay": "Jumat",
                "latestReleaseDate": "20 Okt",
                "animeId": "frieren"
            }]},
            "completed": { "href": "/completed", "animeList": [] }
        })),
        1,
    )
    .await;

    let home = client(&server).try_home::<Anime>().await;
    assert_result!(home);

    let page = home.unwrap().page();
    assert_eq!(page.hero.title, "Frieren");
    assert_eq!(page.hero.href(), "/anime/frieren");
    assert_eq!(page.heroes.len(), 1)
}

#[tokio::test]
async fn home_falls_back_to_default() {
    let server = MockServer::start().await;
    mount(&server, "/otakudesu/home", ResponseTemplate::new(500), 1).await;
    mount(&server, "/komiku/home", not_ok("maintenance"), 1).await;

    let streamhub = client(&server);
    let anime = streamhub.home::<Anime>().await;
    assert!(anime.ongoing.is_empty());
    assert_eq!(anime.page().hero.title, "StreamHub Anime");

    let manga = streamhub.home::<Manga>().await;
    assert!(manga.recent.items.is_empty())
}

#[tokio::test]
async fn drama_and_film_home() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/dramaid/home",
        ok(json!({
            "ongoing": { "href": "", "animeList": [{ "title": "Moving", "animeId": "moving" }] },
            "drama_terbaru": { "href": "", "animeList": [{ "title": "Queen", "animeId": "queen" }] }
        })),
        1,
    )
    .await;
    mount(
        &server,
        "/aquaaquaria/home",
        ok(json!({ "slider": [{ "title": "Dune", "aquaaquariaId": "dune" }], "popular": [] })),
        1,
    )
    .await;

    let streamhub = client(&server);
    let drama = streamhub.try_home::<Drama>().await.unwrap();
    assert_eq!(drama.latest.items[0].drama_id, "queen");

    let film = streamhub.try_home::<Film>().await.unwrap();
    assert_eq!(film.slider[0].film_id, "dune");
    assert!(film.boxoffice.is_empty())
}

#[tokio::test]
async fn detail_and_fallback() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/otakudesu/anime/frieren",
        ok(json!({
            "title": "Frieren",
            "score": 9.1,
            "episodes": "28",
            "batch": null,
            "synopsis": { "paragraphs": ["..."], "connections": [] },
            "genreList": [{ "title": "Fantasy", "genreId": "fantasy", "otakudesuUrl": "https://otakudesu/genres/fantasy" }],
            "episodeList": [{ "title": 1, "episodeId": "frieren-episode-1" }]
        })),
        1,
    )
    .await;
    mount(&server, "/dramaid/anime/missing", not_ok("not found"), 1).await;

    let streamhub = client(&server);
    let detail = streamhub.detail::<Anime>("frieren").await.unwrap();
    assert_eq!(detail.score, "9.1");
    assert_eq!(detail.episodes, 28);
    assert_eq!(detail.batch, None);
    assert_eq!(detail.genre_list[0].href, "https://otakudesu/genres/fantasy");
    assert_eq!(detail.episode_list[0].title, "1");

    assert!(streamhub.detail::<Drama>("missing").await.is_none());
    assert_error!(streamhub.try_detail::<Drama>("").await, Error::Input)
}

#[tokio::test]
async fn schedule() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/otakudesu/schedule",
        ok(json!({ "days": [{ "day": "Senin", "animeList": [{ "title": "Frieren", "animeId": "frieren" }] }] })),
        1,
    )
    .await;

    let schedule = client(&server).schedule().await;
    assert_eq!(schedule.days[0].day, "Senin");
    assert_eq!(schedule.days[0].anime_list[0].anime_id, "frieren")
}

#[tokio::test]
async fn environment_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/environment"))
        .and(header("Authorization", "Bearer env-secret"))
        .and(header("X-API-Key", "env-secret"))
        .respond_with(ok(json!([
            { "id": "prod", "baseURL": format!("{}/api/", server.uri()), "createdAt": "2025-01-01T00:00:00Z" },
            { "id": "old", "baseURL": "https://old.example", "createdAt": "2024-01-01T00:00:00Z" }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/komiku/home"))
        .and(header("X-API-Key", SECRET))
        .and(header("Authorization", format!("Bearer {SECRET}").as_str()))
        .respond_with(ok(json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let streamhub = StreamHub::builder()
        .environment(format!("{}/environment", server.uri()), "env-secret".to_string())
        .api_secret(SECRET)
        .build();

    assert_eq!(
        streamhub.base_url().await.unwrap(),
        format!("{}/api", server.uri())
    );
    // the lookup is only done once
    assert_result!(streamhub.try_home::<Manga>().await);
    assert_result!(streamhub.try_home::<Manga>().await)
}

#[tokio::test]
async fn empty_environment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/environment"))
        .respond_with(ok(json!([])))
        .mount(&server)
        .await;

    let streamhub = StreamHub::builder()
        .environment(format!("{}/environment", server.uri()), "env-secret".to_string())
        .api_secret(SECRET)
        .build();

    assert_error!(streamhub.try_home::<Anime>().await, Error::Configuration)
}

#[tokio::test]
async fn missing_configuration() {
    let streamhub = StreamHub::builder().api_secret(SECRET).build();
    assert_error!(streamhub.try_home::<Anime>().await, Error::Configuration);

    let server = MockServer::start().await;
    let streamhub = StreamHub::builder().api_base(server.uri()).build();
    assert_error!(streamhub.try_home::<Anime>().await, Error::Configuration)
}
