use crate::catalog::Catalog;
use crate::common::Request;
use crate::enum_values;
use crate::media::{Source, Tag};
use serde::{Deserialize, Serialize};

/// Films and tv series from the `aquaaquaria` source. Only the home page is available.
#[derive(Debug)]
pub enum Film {}

impl Catalog for Film {
    const SOURCE: Source = Source::Aquaaquaria;
    type Home = FilmHome;
}

enum_values! {
    pub enum FilmType {
        Movie = "Movie"
        Series = "Series"
        TvShow = "TV Show"
    }
}

/// One film or series of any [`FilmHome`] list. The lists differ in which fields they fill, all
/// fields which aren't sent stay empty.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FilmItem {
    pub title: String,
    pub poster: String,
    #[serde(alias = "aquaaquariaId", alias = "aquaaquaria_id")]
    pub film_id: String,
    pub href: String,
    #[serde(alias = "release_date")]
    pub release_date: String,
    pub quality: String,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_string_or_number")]
    pub score: String,
    #[serde(rename = "type")]
    pub film_type: FilmType,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_string_or_number")]
    pub episode: String,
    /// Trailer url. The upstream misspells it as `tailer`.
    #[serde(alias = "tailer")]
    pub trailer: String,
    pub duration: String,
    #[serde(
        alias = "genre_list",
        deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default"
    )]
    pub genre_list: Vec<Tag>,
}

impl FilmItem {
    pub fn is_series(&self) -> bool {
        matches!(self.film_type, FilmType::Series | FilmType::TvShow)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Request)]
#[serde(default)]
pub struct FilmHome {
    /// Featured films.
    #[serde(deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default")]
    pub slider: Vec<FilmItem>,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default")]
    pub boxoffice: Vec<FilmItem>,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default")]
    pub serialtv: Vec<FilmItem>,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default")]
    pub popular: Vec<FilmItem>,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default")]
    pub anime: Vec<FilmItem>,
    /// Recently added films and shows.
    #[serde(deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default")]
    pub lastmovie: Vec<FilmItem>,
}
