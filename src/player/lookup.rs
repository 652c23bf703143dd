use crate::media::QualityServers;
use crate::parse::{is_direct_href, quality_rank, server_id_from_href};
use serde::{Deserialize, Serialize};

/// One (server, quality) combination of an episode.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LookupEntry {
    #[serde(alias = "server_name")]
    pub server_name: String,
    pub quality: String,
    pub href: String,
    #[serde(alias = "server_id")]
    pub server_id: String,
    /// `href` can be played as is, the server doesn't need to be resolved.
    #[serde(alias = "is_direct")]
    pub is_direct: bool,
}

impl LookupEntry {
    /// Key of the resolved url of this entry in a [`super::ResolvedUrlCache`].
    pub fn cache_key(&self) -> String {
        super::ResolvedUrlCache::key(&self.server_id, &self.quality)
    }

    fn matches(&self, server_name: &str, quality: &str) -> bool {
        self.server_name.trim() == server_name && self.quality.trim() == quality
    }
}

/// All [`LookupEntry`]s of an episode, in upstream order.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct LookupTable {
    entries: Vec<LookupEntry>,
}

impl LookupTable {
    pub fn new(entries: Vec<LookupEntry>) -> Self {
        Self { entries }
    }

    /// Flatten the quality groups of an episode. Servers without a name and groups without a
    /// quality title are skipped.
    pub fn from_qualities(qualities: &[QualityServers]) -> Self {
        let mut entries = vec![];
        for group in qualities {
            let quality = group.title.trim();
            if quality.is_empty() {
                continue;
            }
            for server in &group.server_list {
                let server_name = server.title.trim();
                if server_name.is_empty() {
                    continue;
                }
                entries.push(LookupEntry {
                    server_name: server_name.to_string(),
                    quality: quality.to_string(),
                    href: server.href.clone(),
                    server_id: server_id_from_href(&server.href, &server.server_id).to_string(),
                    is_direct: is_direct_href(&server.href),
                })
            }
        }
        Self { entries }
    }

    /// Read a table from its json form, an array of entries. Malformed json results in an empty
    /// table.
    pub fn from_json<S: AsRef<str>>(json: S) -> Self {
        match serde_json::from_str(json.as_ref()) {
            Ok(table) => table,
            Err(err) => {
                tracing::warn!(error = %err, "malformed lookup table");
                Self::default()
            }
        }
    }

    pub fn entries(&self) -> &[LookupEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct server names in the order they first appear.
    pub fn server_names(&self) -> Vec<String> {
        let mut names: Vec<String> = vec![];
        for entry in &self.entries {
            let name = entry.server_name.trim();
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string())
            }
        }
        names
    }

    /// Distinct qualities of server `server_name`, lowest quality first. Qualities with the same
    /// rank keep the order they first appear in.
    pub fn qualities_of(&self, server_name: &str) -> Vec<String> {
        let mut qualities: Vec<String> = vec![];
        for entry in self
            .entries
            .iter()
            .filter(|e| e.server_name.trim() == server_name)
        {
            if !qualities.contains(&entry.quality) {
                qualities.push(entry.quality.clone())
            }
        }
        qualities.sort_by_key(|quality| quality_rank(quality));
        qualities
    }

    /// The first entry of server `server_name` in quality `quality`.
    pub fn find(&self, server_name: &str, quality: &str) -> Option<&LookupEntry> {
        self.entries.iter().find(|e| e.matches(server_name, quality))
    }
}
