use crate::config::ClientConfig;
use crate::navigation::{MemoryHistory, Navigator};
use crate::session::{AuthState, TokenSession};
use crate::shell::{AppShell, ViewSources};
use crate::telemetry::init_tracing;
use crate::views::{ProfileTab, SearchRequest, View};
use anyhow::{Context, Result};
use story_types::User;
use tracing::info;

/// The client as a whole: session, history and shell wired together
pub struct WebClient<S> {
    config: ClientConfig,
    session: TokenSession,
    history: MemoryHistory,
    shell: AppShell<S>,
}

impl<S: ViewSources> WebClient<S> {
    pub fn new(config: ClientConfig, sources: S) -> Self {
        let shell = AppShell::new(&config, sources);
        Self {
            config,
            session: TokenSession::new(),
            history: MemoryHistory::default(),
            shell,
        }
    }

    /// Load configuration from the environment and install logging
    pub fn bootstrap(sources: S) -> Result<Self> {
        let config = ClientConfig::from_env().context("Failed to load client configuration")?;
        init_tracing(config.log_format)?;
        info!(app_env = %config.app_env, login_path = %config.login_path, "Web client starting");
        Ok(Self::new(config, sources))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn auth_state(&self) -> &AuthState {
        self.session.state()
    }

    pub fn session(&self) -> &TokenSession {
        &self.session
    }

    pub fn history(&self) -> &MemoryHistory {
        &self.history
    }

    pub fn current_path(&self) -> &str {
        self.history.current_path()
    }

    pub fn sources(&self) -> &S {
        self.shell.sources()
    }

    pub fn sources_mut(&mut self) -> &mut S {
        self.shell.sources_mut()
    }

    pub fn navigate(&mut self, path: &str) {
        self.history.push(path);
    }

    pub fn back(&mut self) -> bool {
        self.history.back()
    }

    pub fn render(&mut self) -> View {
        self.shell.render(self.session.state(), &mut self.history)
    }

    pub fn resolve_session(&mut self, stored: Option<&str>) -> &AuthState {
        self.session.resolve(stored)
    }

    pub fn sign_in(&mut self, token: &str) -> &AuthState {
        self.session.sign_in(token)
    }

    pub fn sign_out(&mut self) -> &AuthState {
        self.session.sign_out()
    }

    pub fn recheck_session(&mut self) -> &AuthState {
        self.session.recheck()
    }

    pub fn expire_session(&mut self, now: i64) -> &AuthState {
        self.session.expire_if_stale(now)
    }

    pub fn select_profile_tab(&mut self, tab: ProfileTab) {
        self.shell.select_profile_tab(tab);
    }

    pub fn handle_search(&mut self, value: &str) -> Option<SearchRequest> {
        self.shell.explore_mut().handle_query(value)
    }

    pub fn receive_search_results(&mut self, request: &SearchRequest, users: Vec<User>) -> bool {
        self.shell.explore_mut().receive_results(request, users)
    }
}
