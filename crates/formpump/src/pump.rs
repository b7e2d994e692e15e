//! The render environment shared by every form.

use std::fmt;
use std::sync::Arc;

use crate::association::{IdGenerator, RandomIds};
use crate::attrs::Attributes;
use crate::config::{FormAction, FormPumpConfig};
use crate::data::{FieldError, FormData};
use crate::error::Result;
use crate::renderers::ErrorRenderers;
use crate::session::FormSession;

type IdFactory = Arc<dyn Fn() -> Box<dyn IdGenerator> + Send + Sync>;

/// Configuration, default action, error renderers and id source.
///
/// A `FormPump` holds no per-render state. Share one across threads and
/// open a fresh [`FormSession`] per render.
#[derive(Clone)]
pub struct FormPump {
    config: FormPumpConfig,
    action: FormAction,
    renderers: ErrorRenderers,
    pub(crate) id_factory: IdFactory,
}

impl FormPump {
    /// Creates an environment with default configuration.
    pub fn new() -> Self {
        Self::with_config(FormPumpConfig::default())
    }

    /// Creates an environment from a configuration.
    pub fn with_config(config: FormPumpConfig) -> Self {
        let action = FormAction::Fixed(config.default_form_action.clone());
        Self {
            config,
            action,
            renderers: ErrorRenderers::new(),
            id_factory: Arc::new(|| Box::new(RandomIds) as Box<dyn IdGenerator>),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FormPumpConfig {
        &self.config
    }

    /// Sets the hidden input name that carries a named form's name.
    #[must_use]
    pub fn form_name_key(mut self, key: impl Into<String>) -> Self {
        self.config.form_name_key = Some(key.into());
        self
    }

    /// Sets the hidden input name that carries a context switch's name.
    #[must_use]
    pub fn form_ctx_key(mut self, key: impl Into<String>) -> Self {
        self.config.form_ctx_key = Some(key.into());
        self
    }

    /// Sets a fixed default form action.
    #[must_use]
    pub fn default_action(mut self, action: impl Into<String>) -> Self {
        let action = action.into();
        self.config.default_form_action.clone_from(&action);
        self.action = FormAction::Fixed(action);
        self
    }

    /// Computes the default form action per form instead.
    #[must_use]
    pub fn action_provider<F>(mut self, provider: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.action = FormAction::Provider(Arc::new(provider));
        self
    }

    /// Registers an error render strategy.
    #[must_use]
    pub fn error_renderer<F>(mut self, name: impl Into<String>, renderer: F) -> Self
    where
        F: Fn(&FieldError, &Attributes) -> String + Send + Sync + 'static,
    {
        self.renderers.add(name, renderer);
        self
    }

    /// Replaces the id source used by new sessions.
    #[must_use]
    pub fn id_generator<F, G>(mut self, factory: F) -> Self
    where
        F: Fn() -> G + Send + Sync + 'static,
        G: IdGenerator + 'static,
    {
        self.id_factory = Arc::new(move || Box::new(factory()) as Box<dyn IdGenerator>);
        self
    }

    /// Replaces the form name key, returning the previous one.
    pub fn set_form_name_key(&mut self, key: Option<String>) -> Option<String> {
        std::mem::replace(&mut self.config.form_name_key, key)
    }

    /// Replaces the form context key, returning the previous one.
    pub fn set_form_ctx_key(&mut self, key: Option<String>) -> Option<String> {
        std::mem::replace(&mut self.config.form_ctx_key, key)
    }

    /// Returns the error render strategies.
    pub fn error_renderers(&self) -> &ErrorRenderers {
        &self.renderers
    }

    /// Returns the error render strategies for modification.
    pub fn error_renderers_mut(&mut self) -> &mut ErrorRenderers {
        &mut self.renderers
    }

    /// Resolves the default form action.
    pub fn default_form_action(&self) -> String {
        self.action.resolve()
    }

    /// Opens a session for one form.
    ///
    /// `attrs` are merged over `method="post"` and the default action.
    /// Render [`FormSession::start_tag`], the body, then
    /// [`FormSession::end_tag`].
    pub fn open_form<'a>(
        &'a self,
        name: Option<&str>,
        attrs: Attributes,
        data: &'a FormData,
    ) -> FormSession<'a> {
        FormSession::new(self, name, attrs, data)
    }

    /// A session for tags rendered outside any form. Every lookup misses.
    pub fn stub(&self) -> FormSession<'_> {
        FormSession::stub(self)
    }

    /// Renders a whole form block: the body runs against a fresh session,
    /// and its output is wrapped in the form's opening and closing markup.
    ///
    /// The session is dropped afterwards, so nothing leaks into the next
    /// form.
    pub fn form_block<F>(
        &self,
        name: Option<&str>,
        attrs: Attributes,
        data: &FormData,
        body: F,
    ) -> Result<String>
    where
        F: FnOnce(&mut FormSession<'_>) -> Result<String>,
    {
        let mut session = self.open_form(name, attrs, data);
        let inner = body(&mut session)?;
        Ok(format!("{}{}{}", session.start_tag(), inner, session.end_tag()))
    }
}

impl Default for FormPump {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormPump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormPump")
            .field("config", &self.config)
            .field("action", &self.action)
            .field("renderers", &self.renderers)
            .finish_non_exhaustive()
    }
}
