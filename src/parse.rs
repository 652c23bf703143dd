//! Server id normalization, quality ranking and (with the `parse` feature) site url parsing.

use once_cell::sync::Lazy;
use regex::Regex;

static SERVER_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^.*/server/").unwrap());
static SERVER_HREF_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)/server/(?P<id>[^/?#]+)").unwrap());
static QUALITY_DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Turn a server id or a path containing one into the bare id the resolve endpoint expects.
/// Everything up to and including the last `/server/` is stripped, as well as a trailing `/`. If
/// nothing is left, the input is returned unchanged.
pub fn normalize_server_id<S: AsRef<str>>(server_id: S) -> String {
    let raw = server_id.as_ref();
    let stripped = SERVER_PREFIX_REGEX.replace(raw, "");
    let stripped = stripped.strip_suffix('/').unwrap_or(&stripped);

    if stripped.is_empty() {
        raw.to_string()
    } else {
        stripped.to_string()
    }
}

/// Extract the server id out of a server href like `/otakudesu/server/abc-123`. Absolute
/// `http(s)` urls never carry a server id, in that case (and if the href has no `/server/`
/// segment at all) `fallback` is returned.
pub fn server_id_from_href<'a>(href: &'a str, fallback: &'a str) -> &'a str {
    if is_absolute_http(href) {
        return fallback;
    }
    SERVER_HREF_REGEX
        .captures(href)
        .and_then(|capture| capture.name("id"))
        .map_or(fallback, |id| id.as_str())
}

/// If `href` can be embedded directly into a player without asking the resolve endpoint.
pub fn is_direct_href(href: &str) -> bool {
    is_absolute_http(href) && !SERVER_HREF_REGEX.is_match(href)
}

/// Sort key of a quality label. All digits of the label are read as one number (`"720p"` → 720,
/// `"1080p HD"` → 1080); labels without digits rank as 0. Numbers exceeding [`u64::MAX`] rank as
/// [`u64::MAX`].
pub fn quality_rank<S: AsRef<str>>(quality: S) -> u64 {
    let digits: String = QUALITY_DIGITS_REGEX
        .find_iter(quality.as_ref())
        .map(|m| m.as_str())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

fn is_absolute_http(href: &str) -> bool {
    let lower = href.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(feature = "parse")]
pub use site::*;

#[cfg(feature = "parse")]
mod site {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static SITE_REGEX: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?:https?://[^/]+)?/(?:(?P<source>otakudesu|dramaid|aquaaquaria|komiku)/)?(?P<kind>anime|episode|film|manga)/(?P<id>[^/?#]+)(?:/(?P<episode>[^/?#]+))?/?(?:[?#].*)?$",
        )
        .unwrap()
    });

    /// Types of site urls, pointing to detail or episode pages.
    #[cfg_attr(docsrs, doc(cfg(feature = "parse")))]
    #[derive(Clone, Debug, PartialEq)]
    pub enum UrlType {
        /// An anime detail page. Use the value with
        /// [`crate::StreamHub::detail`]`::<`[`crate::media::Anime`]`>`.
        Anime(String),
        /// An anime episode page.
        AnimeEpisode(String),
        /// A drama detail page.
        Drama(String),
        /// A drama episode page, identified by the drama id and the episode id.
        DramaEpisode { drama_id: String, episode_id: String },
        /// A film page.
        Film(String),
        /// A manga page.
        Manga(String),
    }

    /// Extract information out of site urls (absolute or just the path) which are pointing to
    /// anime, drama, film or manga pages.
    #[cfg_attr(docsrs, doc(cfg(feature = "parse")))]
    pub fn parse_url<S: AsRef<str>>(url: S) -> Option<UrlType> {
        let capture = SITE_REGEX.captures(url.as_ref().trim())?;

        let source = capture.name("source").map(|m| m.as_str());
        let id = capture.name("id")?.as_str().to_string();
        let episode = capture.name("episode").map(|m| m.as_str().to_string());

        match (source, capture.name("kind")?.as_str(), episode) {
            (Some("dramaid"), "anime", None) => Some(UrlType::Drama(id)),
            (Some("dramaid"), "episode", Some(episode_id)) => Some(UrlType::DramaEpisode {
                drama_id: id,
                episode_id,
            }),
            (None | Some("otakudesu"), "anime", None) => Some(UrlType::Anime(id)),
            (None | Some("otakudesu"), "episode", None) => Some(UrlType::AnimeEpisode(id)),
            (None | Some("aquaaquaria"), "film", None) => Some(UrlType::Film(id)),
            (None | Some("komiku"), "manga", None) => Some(UrlType::Manga(id)),
            _ => None,
        }
    }
}
