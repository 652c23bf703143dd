use crate::enum_values;
use serde::{Deserialize, Serialize};

enum_values! {
    /// Upstream content sources. Every source covers one content domain.
    pub enum Source {
        Otakudesu = "otakudesu"
        Dramaid = "dramaid"
        Aquaaquaria = "aquaaquaria"
        Komiku = "komiku"
    }
}

/// A titled link with an id, e.g. a genre, country, status or studio. The sources name the id
/// field after what it identifies (`genreId`, `statusId`, `countriesId`, ...), all of them end up
/// in [`Tag::id`].
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Tag {
    pub title: String,
    #[serde(
        alias = "genreId",
        alias = "genre_id",
        alias = "countriesId",
        alias = "countryId",
        alias = "statusId",
        alias = "yearId",
        alias = "studioId",
        alias = "dayId",
        alias = "ratingId",
        alias = "typeId"
    )]
    pub id: String,
    #[serde(alias = "otakudesuUrl", alias = "otakudesu_url")]
    pub href: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Synopsis {
    #[serde(deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default")]
    pub paragraphs: Vec<String>,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default")]
    pub connections: Vec<serde_json::Value>,
}

/// Link to the previous or next episode.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeNav {
    #[serde(deserialize_with = "crate::internal::serde::deserialize_string_or_number")]
    pub title: String,
    #[serde(alias = "episode_id")]
    pub episode_id: String,
    #[serde(alias = "otakudesuUrl", alias = "otakudesu_url")]
    pub href: String,
}

/// One streaming server of a [`QualityServers`] group.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerItem {
    pub title: String,
    #[serde(alias = "server_id")]
    pub server_id: String,
    pub href: String,
}

/// All servers which stream an episode in one quality.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct QualityServers {
    pub title: String,
    #[serde(
        alias = "server_list",
        deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default"
    )]
    pub server_list: Vec<ServerItem>,
}
