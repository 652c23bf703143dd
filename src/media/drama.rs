use crate::catalog::{Catalog, DetailCatalog, EpisodeCatalog, ServerCatalog, ServerOptions};
use crate::common::Request;
use crate::media::{EpisodeNav, QualityServers, Source, Synopsis, Tag};
use crate::player::{LookupTable, PlayerSession, ResolveTicket, ServerQualityResolver, ServerResolver};
use crate::streamhub::Executor;
use crate::StreamHub;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Korean (and other asian) dramas from the `dramaid` source.
#[derive(Debug)]
pub enum Drama {}

impl Catalog for Drama {
    const SOURCE: Source = Source::Dramaid;
    type Home = DramaHome;
}

impl DetailCatalog for Drama {
    type Detail = DramaDetail;
}

impl EpisodeCatalog for Drama {
    type EpisodeId = DramaEpisodeId;
    type Episode = DramaEpisodeDetail;

    fn episode_path(id: &DramaEpisodeId) -> String {
        format!(
            "/{}/episode/{}/{}",
            Self::SOURCE,
            urlencoding::encode(&id.drama_id),
            urlencoding::encode(&id.episode_id)
        )
    }
}

impl ServerCatalog for Drama {
    fn server_options(ticket: &ResolveTicket) -> ServerOptions {
        let options = ServerOptions::default();
        if ticket.href.is_empty() {
            options
        } else {
            options.server_href(ticket.href.clone())
        }
    }
}

/// Drama episodes are only unique in combination with the drama they belong to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DramaEpisodeId {
    pub drama_id: String,
    pub episode_id: String,
}

impl DramaEpisodeId {
    pub fn new<S: Into<String>>(drama_id: S, episode_id: S) -> Self {
        Self {
            drama_id: drama_id.into(),
            episode_id: episode_id.into(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DramaItem {
    pub title: String,
    pub poster: String,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_lenient_count")]
    pub episodes: u32,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_string_or_number")]
    pub score: String,
    #[serde(alias = "latest_release_date")]
    pub latest_release_date: String,
    pub duration: String,
    #[serde(
        alias = "country_list",
        deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default"
    )]
    pub country_list: Vec<Tag>,
    #[serde(
        alias = "genre_list",
        deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default"
    )]
    pub genre_list: Vec<Tag>,
    /// The upstream reuses the anime schema, hence the name.
    #[serde(alias = "animeId", alias = "anime_id")]
    pub drama_id: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DramaSection {
    pub href: String,
    #[serde(
        rename = "animeList",
        alias = "anime_list",
        deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default"
    )]
    pub items: Vec<DramaItem>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Request)]
#[serde(default)]
pub struct DramaHome {
    pub ongoing: DramaSection,
    #[serde(alias = "drama_terbaru")]
    pub latest: DramaSection,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DramaEpisodeItem {
    #[serde(deserialize_with = "crate::internal::serde::deserialize_string_or_number")]
    pub title: String,
    #[serde(alias = "episode_title")]
    pub episode_title: String,
    #[serde(alias = "episode_id")]
    pub episode_id: String,
    pub href: String,
    /// Only set in the episode list of an episode page, marks the episode which is shown.
    #[serde(alias = "is_active")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RecommendedDrama {
    pub title: String,
    pub poster: String,
    #[serde(alias = "animeId", alias = "anime_id")]
    pub drama_id: String,
    pub href: String,
    #[serde(alias = "latest_release_date")]
    pub latest_release_date: String,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_lenient_count")]
    pub episodes: u32,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_string_or_number")]
    pub score: String,
    pub rating: String,
    pub duration: String,
    #[serde(alias = "country_list")]
    pub country_list: Vec<Tag>,
    #[serde(alias = "genre_list")]
    pub genre_list: Vec<Tag>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Request)]
#[serde(default, rename_all = "camelCase")]
pub struct DramaDetail {
    pub title: String,
    pub poster: String,
    pub japanese: String,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_string_or_number")]
    pub score: String,
    pub producers: String,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default")]
    pub status: Vec<Tag>,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_lenient_count")]
    pub episodes: u32,
    pub duration: String,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default")]
    pub aired: Vec<Tag>,
    #[serde(
        rename = "original_network",
        alias = "originalNetwork",
        deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default"
    )]
    pub original_network: Vec<Tag>,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default")]
    pub banner: Vec<String>,
    #[serde(
        alias = "release_days",
        deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default"
    )]
    pub release_days: Vec<Tag>,
    #[serde(
        alias = "age_rating",
        deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default"
    )]
    pub age_rating: Vec<Tag>,
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
    pub episode_list: Vec<DramaEpisodeItem>,
    #[serde(
        rename = "recommendedAnimeList",
        alias = "recommended_anime_list",
        deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default"
    )]
    pub recommended: Vec<RecommendedDrama>,
    #[serde(rename = "type")]
    pub drama_type: Tag,
}

/// A drama episode with its streaming servers.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Request)]
#[serde(default, rename_all = "camelCase")]
pub struct DramaEpisodeDetail {
    #[serde(skip)]
    executor: Arc<Executor>,

    #[serde(alias = "default_streaming_url")]
    pub default_streaming_url: String,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default")]
    pub qualities: Vec<QualityServers>,
    #[serde(alias = "prev_episode")]
    pub prev_episode: Option<EpisodeNav>,
    #[serde(alias = "next_episode")]
    pub next_episode: Option<EpisodeNav>,
    #[serde(
        alias = "episode_list",
        deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default"
    )]
    pub episode_list: Vec<DramaEpisodeItem>,
}

impl DramaEpisodeDetail {
    /// The entry of [`DramaEpisodeDetail::episode_list`] which is this episode.
    pub fn active_episode(&self) -> Option<&DramaEpisodeItem> {
        self.episode_list.iter().find(|episode| episode.is_active)
    }

    pub fn lookup_table(&self) -> LookupTable {
        LookupTable::from_qualities(&self.qualities)
    }

    /// Create a player for this episode, see [`crate::media::EpisodeDetail::player`].
    pub fn player(&self) -> PlayerSession<ServerResolver<Drama>> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn home_sections() {
        let home: DramaHome = serde_json::from_value(json!({
            "ongoing": { "href": "/ongoing", "animeList": [{
                "title": "Moving",
                "episodes": "20",
                "score": "9.0",
                "countryList": [{ "title": "South Korea", "countriesId": "south-korea", "href": "/country/south-korea" }],
                "animeId": "moving"
            }]},
            "drama_terbaru": { "href": "/latest", "animeList": null }
        }))
        .unwrap();

        assert_eq!(home.ongoing.items[0].drama_id, "moving");
        assert_eq!(home.ongoing.items[0].episodes, 20);
        assert_eq!(home.ongoing.items[0].country_list[0].id, "south-korea");
        assert_eq!(home.latest.href, "/latest");
        assert!(home.latest.items.is_empty())
    }

    #[test]
    fn detail_tags() {
        let detail: DramaDetail = serde_json::from_value(json!({
            "title": "Moving",
            "status": [{ "title": "Completed", "statusId": "completed", "href": "" }],
            "original_network": [{ "title": "Disney+", "studioId": "disney", "href": "" }],
            "episodeList": [{ "title": 1, "episodeTitle": "Episode 1", "episodeId": "moving-1", "href": "" }],
            "type": { "title": "Drama", "typeId": "drama", "href": "" }
        }))
        .unwrap();

        assert_eq!(detail.status[0].id, "completed");
        assert_eq!(detail.original_network[0].title, "Disney+");
        assert_eq!(detail.episode_list[0].title, "1");
        assert_eq!(detail.drama_type.id, "drama")
    }

    #[test]
    fn episode_path_is_encoded() {
        assert_eq!(
            Drama::episode_path(&DramaEpisodeId::new("a b", "ep/1")),
            "/dramaid/episode/a%20b/ep%2F1"
        )
    }

    #[test]
    fn episode_player() {
        let episode: DramaEpisodeDetail = serde_json::from_value(json!({
            "defaultStreamingUrl": "https://embed.example/d",
            "qualities": [{ "title": "360p", "serverList": [
                { "title": "Fast", "serverId": "s-1", "href": "/dramaid/server/s-1" }
            ]}],
            "prevEpisode": null,
            "nextEpisode": { "title": "Episode 2", "episodeId": "moving-2", "href": "/dramaid/episode/moving/moving-2" },
            "episodeList": [
                { "title": 1, "episodeId": "moving-1", "is_active": true },
                { "title": 2, "episodeId": "moving-2", "is_active": false }
            ]
        }))
        .unwrap();

        assert_eq!(episode.active_episode().unwrap().episode_id, "moving-1");
        assert_eq!(episode.next_episode.as_ref().unwrap().episode_id, "moving-2");
        let table = episode.lookup_table();
        assert_eq!(table.entries()[0].server_id, "s-1");

        let player = episode.player();
        assert_eq!(player.resolver().displayed_url(), Some("https://embed.example/d"))
    }
}
