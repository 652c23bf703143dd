use crate::catalog::ServerCatalog;
use crate::player::{Effect, ResolveTicket, ServerQualityResolver, Step};
use crate::{Result, StreamHub};
use std::future::Future;
use std::marker::PhantomData;

/// Resolves the server of a [`ResolveTicket`] to a stream url.
pub trait ServerResolve {
    fn resolve(&self, ticket: &ResolveTicket) -> impl Future<Output = Result<String>> + Send;
}

/// Resolves servers of content source `C` via the upstream api.
#[derive(Debug)]
pub struct ServerResolver<C> {
    streamhub: StreamHub,
    _catalog: PhantomData<fn() -> C>,
}

impl<C: ServerCatalog> ServerResolver<C> {
    pub fn new(streamhub: StreamHub) -> Self {
        Self {
            streamhub,
            _catalog: PhantomData,
        }
    }
}

impl<C: ServerCatalog> ServerResolve for ServerResolver<C> {
    fn resolve(&self, ticket: &ResolveTicket) -> impl Future<Output = Result<String>> + Send {
        let options = C::server_options(ticket);
        let server_id = ticket.server_id.clone();
        async move {
            self.streamhub
                .resolve_server::<C>(server_id, options)
                .await
        }
    }
}

/// An episode player: a [`ServerQualityResolver`] together with the backend that resolves its
/// servers.
pub struct PlayerSession<R> {
    resolver: ServerQualityResolver,
    backend: R,
}

impl<R: ServerResolve> PlayerSession<R> {
    pub fn new(resolver: ServerQualityResolver, backend: R) -> Self {
        Self { resolver, backend }
    }

    pub fn resolver(&self) -> &ServerQualityResolver {
        &self.resolver
    }

    pub fn initial_effects(&self) -> Vec<Effect> {
        self.resolver.initial_effects()
    }

    pub fn select_server<S: AsRef<str>>(&mut self, name: S) -> Vec<Effect> {
        self.resolver.select_server(name)
    }

    /// Select a quality and resolve its server if required. Returns all effects in the order
    /// they occurred, i.e. if the server was resolved, the effects which started the resolution
    /// followed by the ones which completed it.
    pub async fn select_quality<S: AsRef<str>>(&mut self, quality: S) -> Vec<Effect> {
        match self.resolver.select_quality(quality) {
            Step::Ignored => vec![],
            Step::Ready(effects) => effects,
            Step::Pending {
                ticket,
                mut effects,
            } => {
                let url = match self.backend.resolve(&ticket).await {
                    Ok(url) => Some(url),
                    Err(err) => {
                        tracing::warn!(server_id = %ticket.server_id, error = %err, "failed to resolve server");
                        None
                    }
                };
                effects.extend(self.resolver.complete(&ticket, url));
                effects
            }
        }
    }

    pub fn into_resolver(self) -> ServerQualityResolver {
        self.resolver
    }
}
