use crate::catalog::Catalog;
use crate::common::Request;
use crate::media::Source;
use serde::{Deserialize, Deserializer, Serialize};

/// Manga, manhua and manhwa from the `komiku` source. Only the home page is available.
#[derive(Debug)]
pub enum Manga {}

impl Catalog for Manga {
    const SOURCE: Source = Source::Komiku;
    type Home = MangaHome;
}

/// A manga of a [`MangaSection`]. Recent and popular lists share this shape, `views` and `is_hot`
/// are only filled by popular lists while `episodes` and `released_on` only by the recent list.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MangaItem {
    pub title: String,
    pub poster: String,
    #[serde(alias = "komikuId", alias = "manga_id")]
    pub manga_id: String,
    pub href: String,
    #[serde(alias = "komiku_url")]
    pub komiku_url: String,
    #[serde(rename = "type")]
    pub manga_type: String,
    #[serde(alias = "latest_chapter")]
    pub latest_chapter: String,
    #[serde(alias = "latest_chapter_url")]
    pub latest_chapter_url: String,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_string_or_number")]
    pub episodes: String,
    #[serde(alias = "released_on")]
    pub released_on: String,
    #[serde(deserialize_with = "crate::internal::serde::deserialize_string_or_number")]
    pub views: String,
    #[serde(alias = "is_hot")]
    pub is_hot: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MangaSection {
    pub href: String,
    #[serde(alias = "komiku_url")]
    pub komiku_url: String,
    #[serde(
        alias = "komikuList",
        alias = "mangaList",
        alias = "komiku_list",
        alias = "manga_list",
        deserialize_with = "crate::internal::serde::deserialize_maybe_null_to_default"
    )]
    pub items: Vec<MangaItem>,
}

/// Sections without any item are replaced by an empty default section, so `href` and
/// `komiku_url` of a [`MangaSection`] are only set if it has items.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Request)]
#[serde(default)]
pub struct MangaHome {
    #[serde(deserialize_with = "deserialize_filled_section")]
    pub recent: MangaSection,
    #[serde(deserialize_with = "deserialize_filled_section")]
    pub komiku_popular: MangaSection,
    #[serde(deserialize_with = "deserialize_filled_section")]
    pub manga_popular: MangaSection,
    #[serde(deserialize_with = "deserialize_filled_section")]
    pub manhua_popular: MangaSection,
    #[serde(deserialize_with = "deserialize_filled_section")]
    pub manhwa_popular: MangaSection,
}

fn deserialize_filled_section<'de, D>(deserializer: D) -> Result<MangaSection, D::Error>
where
    D: Deserializer<'de>,
{
    let section: Option<MangaSection> = Deserialize::deserialize(deserializer)?;
    Ok(section
        .filter(|section| !section.items.is_empty())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_sections_fall_back() {
        let home: MangaHome = serde_json::from_value(json!({
            "recent": { "href": "/recent", "komikuUrl": "https://komiku.example", "komikuList": [{
                "title": "One Piece",
                "komikuId": "one-piece",
                "type": "Manga",
                "latestChapter": "Chapter 1100",
                "episodes": 1100
            }]},
            "komiku_popular": { "href": "/popular", "mangaList": [] },
            "manhwa_popular": { "href": "/manhwa", "mangaList": [{ "title": "Solo Leveling", "mangaId": "solo", "views": "1.2jt", "isHot": true }] },
            "manhua_popular": null
        }))
        .unwrap();

        assert_eq!(home.recent.items[0].manga_id, "one-piece");
        assert_eq!(home.recent.items[0].episodes, "1100");
        assert_eq!(home.recent.komiku_url, "https://komiku.example");
        assert_eq!(home.komiku_popular.href, "");
        assert!(home.komiku_popular.items.is_empty());
        assert!(home.manga_popular.items.is_empty());
        assert!(home.manhua_popular.items.is_empty());
        assert!(home.manhwa_popular.items[0].is_hot)
    }
}
