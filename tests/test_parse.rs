#![cfg(feature = "parse")]

use streamhub::parse::{parse_url, UrlType};

#[test]
fn parse_anime_url() {
    let parsed = parse_url("https://streamhub.example/anime/sousou-no-frieren-sub-indo");

    assert!(matches!(parsed, Some(UrlType::Anime(id)) if id == "sousou-no-frieren-sub-indo"))
}

#[test]
fn parse_anime_episode_url() {
    let parsed = parse_url("https://streamhub.example/otakudesu/episode/snf-episode-1-sub-indo/");

    assert!(matches!(parsed, Some(UrlType::AnimeEpisode(id)) if id == "snf-episode-1-sub-indo"))
}

#[test]
fn parse_drama_urls() {
    assert_eq!(
        parse_url("/dramaid/anime/moving"),
        Some(UrlType::Drama("moving".into()))
    );
    assert!(matches!(
        parse_url("https://streamhub.example/dramaid/episode/moving/moving-episode-20#player"),
        Some(UrlType::DramaEpisode { drama_id, episode_id }) if drama_id == "moving" && episode_id == "moving-episode-20"
    ))
}

#[test]
fn parse_film_and_manga_urls() {
    assert_eq!(
        parse_url("/aquaaquaria/film/oppenheimer"),
        Some(UrlType::Film("oppenheimer".into()))
    );
    assert_eq!(
        parse_url("/manga/solo-leveling"),
        Some(UrlType::Manga("solo-leveling".into()))
    )
}

#[test]
fn parse_invalid_urls() {
    assert_eq!(parse_url("https://streamhub.example/"), None);
    assert_eq!(parse_url("/dramaid/episode/moving"), None);
    assert_eq!(parse_url("/komiku/anime/one-piece"), None)
}
