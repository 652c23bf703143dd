use crate::player::{LookupEntry, LookupTable, ResolvedUrlCache};

/// A change the rendering layer must apply to the episode player.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Replace the options of the quality selector. If `locked` is `true`, `options` is empty and
    /// the selector must not be interactive, it shows a "choose a server first" placeholder.
    QualityOptions { options: Vec<String>, locked: bool },
    /// Put the quality selector back to its placeholder.
    ResetQuality,
    /// Enable or disable both the server and the quality selector.
    SelectorsEnabled(bool),
    /// Show or hide the loading indicator.
    Loading(bool),
    /// Show or hide the player frame.
    PlayerVisible(bool),
    /// Play `url`. `label` describes the played quality.
    Play { url: String, label: String },
}

impl Effect {
    fn play(url: String, quality: &str) -> Self {
        let label = if quality.is_empty() {
            "AUTO".to_string()
        } else {
            format!("{quality} • AUTO")
        };
        Effect::Play { url, label }
    }

    fn locked() -> Self {
        Effect::QualityOptions {
            options: vec![],
            locked: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolverState {
    /// No server is selected.
    Idle,
    /// A server but no quality is selected.
    ServerSelected,
    /// The selected server and quality are being resolved.
    Resolving,
    Resolved,
    /// The last resolution failed. The quality selector was reset.
    Failed,
}

/// A resolution which must be done by the caller of [`ServerQualityResolver::select_quality`].
/// Hand it back via [`ServerQualityResolver::complete`] once the server is resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolveTicket {
    generation: u64,
    pub server_id: String,
    pub quality: String,
    /// Href of the server as listed in the episode.
    pub href: String,
    pub cache_key: String,
}

impl ResolveTicket {
    /// Token of the resolution. Only the ticket with the latest generation is accepted by
    /// [`ServerQualityResolver::complete`].
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of [`ServerQualityResolver::select_quality`].
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// No entry for the selection, nothing changes.
    Ignored,
    /// The stream url was known without resolving.
    Ready(Vec<Effect>),
    /// The server must be resolved, apply `effects` and resolve `ticket`.
    Pending {
        ticket: ResolveTicket,
        effects: Vec<Effect>,
    },
}

impl Step {
    /// All effects of this step.
    pub fn effects(&self) -> &[Effect] {
        match self {
            Step::Ignored => &[],
            Step::Ready(effects) | Step::Pending { effects, .. } => effects,
        }
    }
}

/// Selection state of an episode player.
///
/// The resolver owns all state of one episode view: the [`LookupTable`], the current
/// server / quality selection and the [`ResolvedUrlCache`]. It doesn't do any io. Operations
/// return the [`Effect`]s the rendering layer must apply; if a server must be resolved over the
/// network, [`ServerQualityResolver::select_quality`] returns a [`ResolveTicket`] which must be
/// completed with [`ServerQualityResolver::complete`]. Completions of tickets which are no longer
/// current (because another quality or server was selected in the meantime) are discarded.
#[derive(Clone, Debug)]
pub struct ServerQualityResolver {
    table: LookupTable,
    cache: ResolvedUrlCache,
    state: ResolverState,

    server: Option<String>,
    quality: Option<String>,
    qualities: Vec<String>,
    displayed_url: Option<String>,

    generation: u64,
}

impl ServerQualityResolver {
    pub fn new(table: LookupTable) -> Self {
        Self {
            table,
            cache: ResolvedUrlCache::default(),
            state: ResolverState::Idle,
            server: None,
            quality: None,
            qualities: vec![],
            displayed_url: None,
            generation: 0,
        }
    }

    /// Set the url which is displayed before any quality got selected.
    pub fn with_default_url<S: Into<String>>(mut self, url: S) -> Self {
        let url = url.into();
        self.displayed_url = if url.is_empty() { None } else { Some(url) };
        self
    }

    /// Effects to apply when the player is shown for the first time.
    pub fn initial_effects(&self) -> Vec<Effect> {
        vec![Effect::locked()]
    }

    /// Select a server by its name. An empty name deselects the current server.
    pub fn select_server<S: AsRef<str>>(&mut self, name: S) -> Vec<Effect> {
        let name = name.as_ref().trim();

        // a running resolution belongs to the previous selection
        let mut effects = self.abort_resolution();
        self.generation += 1;
        self.quality = None;

        if name.is_empty() {
            self.server = None;
            self.qualities = vec![];
            self.state = ResolverState::Idle;
            effects.push(Effect::locked());
        } else {
            self.qualities = self.table.qualities_of(name);
            self.server = Some(name.to_string());
            self.state = ResolverState::ServerSelected;
            effects.push(Effect::QualityOptions {
                options: self.qualities.clone(),
                locked: false,
            });
        }
        effects
    }

    /// Select a quality of the current server.
    pub fn select_quality<S: AsRef<str>>(&mut self, quality: S) -> Step {
        let quality = quality.as_ref().trim();
        let Some(server) = self.server.as_deref() else {
            return Step::Ignored;
        };
        if quality.is_empty() {
            return Step::Ignored;
        }
        let Some(entry) = self.table.find(server, quality).cloned() else {
            return Step::Ignored;
        };

        // supersedes any running resolution
        self.generation += 1;
        self.quality = Some(quality.to_string());
        let cache_key = entry.cache_key();

        let url = if entry.is_direct && !entry.href.is_empty() {
            self.cache.insert(cache_key.clone(), entry.href.clone());
            Some(entry.href.clone())
        } else {
            self.cache.get(&cache_key).map(|url| {
                tracing::debug!(%cache_key, "using cached stream url");
                url.to_string()
            })
        };
        if let Some(url) = url {
            let mut effects = self.abort_resolution();
            effects.extend(self.play(url, &entry.quality));
            return Step::Ready(effects);
        }

        self.state = ResolverState::Resolving;
        Step::Pending {
            ticket: self.ticket(entry, cache_key),
            effects: vec![
                Effect::SelectorsEnabled(false),
                Effect::Loading(true),
                Effect::PlayerVisible(false),
            ],
        }
    }

    /// Complete a resolution started by [`ServerQualityResolver::select_quality`]. `url` is
    /// [`None`] (or empty) if the server could not be resolved. Stale tickets are ignored and
    /// produce no effects.
    pub fn complete(&mut self, ticket: &ResolveTicket, url: Option<String>) -> Vec<Effect> {
        if ticket.generation != self.generation || self.state != ResolverState::Resolving {
            tracing::debug!(
                generation = ticket.generation,
                current = self.generation,
                "discarding stale resolution"
            );
            return vec![];
        }

        match url.filter(|url| !url.is_empty()) {
            Some(url) => {
                self.cache.insert(ticket.cache_key.clone(), url.clone());
                let mut effects = vec![
                    Effect::SelectorsEnabled(true),
                    Effect::Loading(false),
                    Effect::PlayerVisible(true),
                ];
                effects.extend(self.play(url, &ticket.quality));
                effects
            }
            None => {
                tracing::warn!(server_id = %ticket.server_id, quality = %ticket.quality, "server could not be resolved");
                self.state = ResolverState::Failed;
                self.quality = None;
                vec![
                    Effect::SelectorsEnabled(true),
                    Effect::Loading(false),
                    Effect::PlayerVisible(true),
                    Effect::ResetQuality,
                ]
            }
        }
    }

    pub fn state(&self) -> ResolverState {
        self.state
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    pub fn quality(&self) -> Option<&str> {
        self.quality.as_deref()
    }

    /// Qualities of the current server, lowest first.
    pub fn available_qualities(&self) -> &[String] {
        &self.qualities
    }

    /// The url the player is currently showing.
    pub fn displayed_url(&self) -> Option<&str> {
        self.displayed_url.as_deref()
    }

    pub fn cache(&self) -> &ResolvedUrlCache {
        &self.cache
    }

    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    pub fn is_resolving(&self) -> bool {
        self.state == ResolverState::Resolving
    }

    /// Effects undoing the loading state if a resolution is running. The resolution itself is
    /// invalidated by the generation bump of the caller.
    fn abort_resolution(&self) -> Vec<Effect> {
        if self.state != ResolverState::Resolving {
            return vec![];
        }
        vec![
            Effect::SelectorsEnabled(true),
            Effect::Loading(false),
            Effect::PlayerVisible(true),
        ]
    }

    fn play(&mut self, url: String, quality: &str) -> Vec<Effect> {
        self.state = ResolverState::Resolved;
        self.displayed_url = Some(url.clone());
        vec![Effect::play(url, quality)]
    }

    fn ticket(&self, entry: LookupEntry, cache_key: String) -> ResolveTicket {
        ResolveTicket {
            generation: self.generation,
            server_id: entry.server_id,
            quality: entry.quality,
            href: entry.href,
            cache_key,
        }
    }
}
