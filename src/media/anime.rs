use crate::catalog::{Catalog, DetailCatalog, EpisodeCatalog, ServerCatalog};
use crate::common::Request;
use crate::hero::{Hero, HeroKind};
use crate::media::{EpisodeNav, QualityServers, Source, Synopsis, Tag};
use crate::player::{LookupTable, PlayerSession, ServerQualityResolver, ServerResolver};
use crate::streamhub::Executor;
use crate::StreamHub;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Anime from the `otakudesu` source. Use it as catalog parameter, e.g.
/// `streamhub.home::<Anime>()`.
#[derive(Debug)]
pub enum Anime {}

impl Catalog for Anime {
    const SOURCE: Source = Source::Otakudesu;
    type Home = AnimeHome;
}

impl DetailCatalog for Anime {
    type Detail = AnimeDetail;
}

impl EpisodeCatalog for Anime {
    type EpisodeId = str;
    type Episode = EpisodeDetail;

    fn episode_path(id: &str) -> String {
        format!("/{}/episode/{}", Self::SOURCE, urlencoding::encode(id))
    }
}

impl ServerCatalog for Anime {
    /// Anime servers are resolved through the source independent endpoint.
    fn server_path(server_id: &str) -> String {
        format!("/server/{}", urlencoding::encode(server_id))
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OngoingAnime {
    pub title: String,
    pub poster: String,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_lenient_count")]
    pub episodes: u32,
    #[serde(alias = "release_day")]
    pub release_day: String,
    #[serde(alias = "latest_release_date")]
    pub latest_release_date: String,
    #[serde(alias = "anime_id")]
    pub anime_id: String,
    #[serde(alias = "otakudesuUrl", alias = "otakudesu_url")]
    pub href: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CompletedAnime {
    pub title: String,
    pub poster: String,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_lenient_count")]
    pub episodes: u32,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_string_or_number")]
    pub score: String,
    #[serde(alias = "last_release_date")]
    pub last_release_date: String,
    #[serde(alias = "anime_id")]
    pub anime_id: String,
    #[serde(alias = "otakudesuUrl", alias = "otakudesu_url")]
    pub href: String,
}

/// The anime home lists. The upstream has delivered them either grouped
/// (`{ ongoing: { animeList }, completed: { animeList } }`) or flat
/// (`{ ongoingList, completedList }`), both are accepted.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Request)]
#[serde(from = "RawAnimeHome")]
pub struct AnimeHome {
    pub ongoing: Vec<OngoingAnime>,
    pub completed: Vec<CompletedAnime>,
}

#[derive(Deserialize)]
#[serde(default)]
struct AnimeList<T> {
    #[serde(alias = "anime_list", rename = "animeList")]
    anime_list: Option<Vec<T>>,
}

impl<T> Default for AnimeList<T> {
    fn default() -> Self {
        Self { anime_list: None }
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawAnimeHome {
    ongoing: Option<AnimeList<OngoingAnime>>,
    completed: Option<AnimeList<CompletedAnime>>,
    #[serde(alias = "ongoing_list")]
    ongoing_list: Option<Vec<OngoingAnime>>,
    #[serde(alias = "completed_list")]
    completed_list: Option<Vec<CompletedAnime>>,
}

impl From<RawAnimeHome> for AnimeHome {
    fn from(raw: RawAnimeHome) -> Self {
        Self {
            ongoing: raw
                .ongoing
                .and_then(|section| section.anime_list)
                .or(raw.ongoing_list)
                .unwrap_or_default(),
            completed: raw
                .completed
                .and_then(|section| section.anime_list)
                .or(raw.completed_list)
                .unwrap_or_default(),
        }
    }
}

/// Maximal number of heroes [`AnimeHome::page`] puts into the carousel.
pub const MAX_HEROES: usize = 3;

/// Everything the anime home page shows.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AnimeHomePage {
    pub ongoing: Vec<OngoingAnime>,
    pub completed: Vec<CompletedAnime>,
    /// The main hero, the first ongoing anime or [`Hero::default_anime`].
    pub hero: Hero,
    /// Carousel heroes; never empty.
    pub heroes: Vec<Hero>,
}

impl AnimeHome {
    /// Shape the lists into the home page view. The carousel is filled with up to
    /// [`MAX_HEROES`] ongoing anime first and completed anime after that.
    pub fn page(self) -> AnimeHomePage {
        let hero = self
            .ongoing
            .first()
            .map(Hero::from)
            .unwrap_or_else(Hero::default_anime);

        let mut heroes: Vec<Hero> = self
            .ongoing
            .iter()
            .take(MAX_HEROES)
            .map(Hero::from)
            .collect();
        let missing = MAX_HEROES - heroes.len();
        heroes.extend(self.completed.iter().take(missing).map(Hero::from));
        if heroes.is_empty() {
            heroes.push(hero.clone())
        }

        AnimeHomePage {
            ongoing: self.ongoing,
            completed: self.completed,
            hero,
            heroes,
        }
    }
}

impl From<&OngoingAnime> for Hero {
    fn from(anime: &OngoingAnime) -> Self {
        Hero {
            title: anime.title.clone(),
            description: format!(
                "{} episode · Terbaru {} ({})",
                anime.episodes, anime.latest_release_date, anime.release_day
            ),
            image: anime.poster.clone(),
            kind: HeroKind::Anime,
            year: anime.latest_release_date.clone(),
            rating: String::new(),
            id: anime.anime_id.clone(),
        }
    }
}

impl From<&CompletedAnime> for Hero {
    fn from(anime: &CompletedAnime) -> Self {
        Hero {
            title: anime.title.clone(),
            description: format!("{} episode · Score {}", anime.episodes, anime.score),
            image: anime.poster.clone(),
            kind: HeroKind::Anime,
            year: anime.last_release_date.clone(),
            rating: anime.score.clone(),
            id: anime.anime_id.clone(),
        }
    }
}

/// An episode entry of an anime. The title is usually just the episode number.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeItem {
    #[serde(deserialize_with = "crate::internal::serde::deserialize_string_or_number")]
    pub title: String,
    #[serde(alias = "episode_id")]
    pub episode_id: String,
    #[serde(alias = "otakudesuUrl", alias = "otakudesu_url")]
    pub href: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RecommendedAnime {
    pub title: String,
    pub poster: String,
    #[serde(alias = "anime_id")]
    pub anime_id: String,
    #[serde(alias = "otakudesuUrl", alias = "otakudesu_url")]
    pub href: String,
}

/// Metadata of an anime.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Request)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimeDetail {
    pub title: String,
    pub poster: String,
    pub japanese: String,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_string_or_number")]
    pub score: String,
    pub producers: String,
    pub status: String,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_lenient_count")]
    pub episodes: u32,
    pub duration: String,
    pub aired: String,
    pub studios: String,
    /// Id of the batch download page, if the anime has one.
    pub batch: Option<String>,
    pub synopsis: Synopsis,
    #[serde(
        alias = "genre_list",
        deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default"
    )]
    pub genre_list: Vec<Tag>,
    #[serde(
        alias = "episode_list",
        deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default"
    )]
    pub episode_list: Vec<EpisodeItem>,
    #[serde(
        alias = "recommended_anime_list",
        deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default"
    )]
    pub recommended_anime_list: Vec<RecommendedAnime>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerQualities {
    #[serde(deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default")]
    pub qualities: Vec<QualityServers>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DownloadLink {
    pub title: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DownloadQuality {
    pub title: String,
    pub size: String,
    pub urls: Vec<DownloadLink>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DownloadQualities {
    #[serde(deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default")]
    pub qualities: Vec<DownloadQuality>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeInfo {
    pub credit: String,
    pub encoder: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub episode_type: String,
    #[serde(alias = "genre_list")]
    pub genre_list: Vec<Tag>,
    #[serde(alias = "episode_list")]
    pub episode_list: Vec<EpisodeItem>,
}

/// An anime episode with its streaming servers.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Request)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeDetail {
    #[serde(skip)]
    executor: Arc<Executor>,

    pub title: String,
    #[serde(alias = "anime_id")]
    pub anime_id: String,
    #[serde(alias = "release_time")]
    pub release_time: String,
    /// Stream url the player shows before any server is chosen.
    #[serde(alias = "default_streaming_url")]
    pub default_streaming_url: String,
    #[serde(alias = "has_prev_episode")]
    pub has_prev_episode: bool,
    #[serde(alias = "prev_episode")]
    pub prev_episode: Option<EpisodeNav>,
    #[serde(alias = "has_next_episode")]
    pub has_next_episode: bool,
    #[serde(alias = "next_episode")]
    pub next_episode: Option<EpisodeNav>,
    pub server: ServerQualities,
    #[serde(alias = "download_url")]
    pub download_url: DownloadQualities,
    pub info: EpisodeInfo,
}

impl EpisodeDetail {
    /// Path of the anime page this episode belongs to.
    pub fn anime_href(&self) -> String {
        format!("/{}/anime/{}", Anime::SOURCE, self.anime_id)
    }

    /// All (server, quality) combinations of this episode.
    pub fn lookup_table(&self) -> LookupTable {
        LookupTable::from_qualities(&self.server.qualities)
    }

    /// Create a player for this episode. It starts with [`EpisodeDetail::default_streaming_url`]
    /// displayed and resolves servers through the [`StreamHub`] this episode was requested with.
    pub fn player(&self) -> PlayerSession<ServerResolver<Anime>> {
        let resolver = ServerQualityResolver::new(self.lookup_table())
            .with_default_url(self.default_streaming_url.clone());
        PlayerSession::new(
            resolver,
            ServerResolver::new(StreamHub {
                executor: self.executor.clone(),
            }),
        )
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduleAnime {
    pub title: String,
    #[serde(alias = "anime_id")]
    pub anime_id: String,
    #[serde(alias = "otakudesuUrl", alias = "otakudesu_url")]
    pub href: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduleDay {
    pub day: String,
    #[serde(
        alias = "anime_list",
        deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default"
    )]
    pub anime_list: Vec<ScheduleAnime>,
}

/// Weekly release schedule.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Request)]
#[serde(default)]
pub struct Schedule {
    pub days: Vec<ScheduleDay>,
}

impl StreamHub {
    /// Requests the weekly anime release schedule.
    pub async fn try_schedule(&self) -> crate::Result<Schedule> {
        self.executor
            .get(format!("/{}/schedule", Anime::SOURCE))
            .request()
            .await
    }

    /// Like [`StreamHub::try_schedule`] but logs any error and returns an empty schedule
    /// instead.
    pub async fn schedule(&self) -> Schedule {
        match self.try_schedule().await {
            Ok(schedule) => schedule,
            Err(err) => {
                tracing::error!(source = %Anime::SOURCE, error = %err, "schedule request failed");
                Schedule::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ongoing(title: &str) -> serde_json::Value {
        json!({
            "title": title,
            "poster": format!("https://img.example/{title}.jpg"),
            "episodes": 12,
            "releaseDay": "Senin",
            "latestReleaseDate": "20 Okt",
            "animeId": title.to_lowercase()
        })
    }

    fn completed(title: &str) -> serde_json::Value {
        json!({
            "title": title,
            "poster": "",
            "episodes": "24",
            "score": 8.5,
            "lastReleaseDate": "1 Jan",
            "animeId": title.to_lowercase()
        })
    }

    #[test]
    fn grouped_home_shape() {
        let home: AnimeHome = serde_json::from_value(json!({
            "ongoing": { "href": "/ongoing", "animeList": [ongoing("A")] },
            "completed": { "animeList": [completed("B")] }
        }))
        .unwrap();
        assert_eq!(home.ongoing.len(), 1);
        assert_eq!(home.completed[0].episodes, 24);
        assert_eq!(home.completed[0].score, "8.5")
    }

    #[test]
    fn flat_home_shape() {
        let home: AnimeHome = serde_json::from_value(json!({
            "ongoingList": [ongoing("A"), ongoing("B")],
            "completedList": []
        }))
        .unwrap();
        assert_eq!(home.ongoing.len(), 2);
        assert!(home.completed.is_empty())
    }

    #[test]
    fn heroes_prefer_ongoing() {
        let home: AnimeHome = serde_json::from_value(json!({
            "ongoingList": [ongoing("A")],
            "completedList": [completed("B"), completed("C"), completed("D")]
        }))
        .unwrap();
        let page = home.page();

        assert_eq!(page.hero.title, "A");
        assert_eq!(page.hero.description, "12 episode · Terbaru 20 Okt (Senin)");
        let titles: Vec<&str> = page.heroes.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
        assert_eq!(page.heroes[1].description, "24 episode · Score 8.5");
        assert_eq!(page.heroes[1].rating, "8.5")
    }

    #[test]
    fn empty_home_has_default_hero() {
        let page = AnimeHome::default().page();
        assert_eq!(page.hero, Hero::default_anime());
        assert_eq!(page.heroes, vec![Hero::default_anime()])
    }

    #[test]
    fn episode_lookup_table() {
        let episode: EpisodeDetail = serde_json::from_value(json!({
            "title": "Episode 1",
            "animeId": "a",
            "defaultStreamingUrl": "https://embed.example/default",
            "server": { "qualities": [
                { "title": "720p", "serverList": [
                    { "title": "Server A ", "serverId": "id-1", "href": "/otakudesu/server/id-1" }
                ]},
                { "title": "480p", "serverList": [
                    { "title": "Server A", "serverId": "id-2", "href": "https://embed.example/direct" }
                ]}
            ]},
            "prevEpisode": null
        }))
        .unwrap();

        let table = episode.lookup_table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].server_name, "Server A");
        assert!(!table.entries()[0].is_direct);
        assert!(table.entries()[1].is_direct);
        assert_eq!(episode.anime_href(), "/otakudesu/anime/a");
        assert_eq!(
            episode.player().resolver().displayed_url(),
            Some("https://embed.example/default")
        )
    }
}
