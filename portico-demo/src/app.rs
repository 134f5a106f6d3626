//! Pages, navigation and the application module.

use portico::{
    AppModule, Component, ConfigError, DefaultNavigation, Markup, NavigationComponent,
    NavigationFactory, NavigationId, NavigationImpl, Page, PageId, RouteError, RouteTable,
    ShellAttributes, ShellConfig,
    collected::{NavigationRegistration, collected_navigations},
};
use std::{fmt, str::FromStr, sync::Arc};

// ============================================================================
// Pages
// ============================================================================

/// The landing page.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelloPage;

impl HelloPage {
    /// Page identifier.
    pub const ID: PageId = PageId::new("hello");

    /// The page, ready for a route table.
    pub fn page() -> Page {
        Page::new(Self::ID, Self)
    }
}

impl Component for HelloPage {
    fn selector(&self) -> &'static str {
        "portico-hello"
    }

    fn render(&self) -> Markup {
        Markup::from("<p>Welcome to Portofino 5!</p>")
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// A hand-written navigation linking back to the landing page.
#[derive(Debug, Default, Clone)]
pub struct CustomNavigation {
    page: Option<PageId>,
}

impl CustomNavigation {
    /// Identifier of this implementation.
    pub const ID: NavigationId = NavigationId::new("custom");

    fn construct() -> Box<dyn NavigationComponent> {
        Box::new(Self::default())
    }
}

impl Component for CustomNavigation {
    fn selector(&self) -> &'static str {
        "custom-navigation"
    }

    fn render(&self) -> Markup {
        Markup::from(r#"<h3>Custom navigation</h3><p><a href="/start">Start here</a></p>"#)
    }
}

impl NavigationComponent for CustomNavigation {
    fn page(&self) -> Option<PageId> {
        self.page
    }

    fn set_page(&mut self, page: Option<PageId>) {
        self.page = page;
    }
}

/// Descriptor for [`CustomNavigation`].
pub const CUSTOM_NAVIGATION: NavigationImpl =
    NavigationImpl::new(CustomNavigation::ID, CustomNavigation::construct);

// Declared even though only configuration can select it.
inventory::submit! {
    NavigationRegistration::new(CUSTOM_NAVIGATION)
}

/// The navigation implementations this application can run with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NavigationChoice {
    /// The standard navigation bar.
    #[default]
    Default,
    /// [`CustomNavigation`].
    Custom,
}

impl NavigationChoice {
    /// The implementation this choice selects.
    pub const fn id(self) -> NavigationId {
        match self {
            Self::Default => DefaultNavigation::ID,
            Self::Custom => CustomNavigation::ID,
        }
    }
}

impl FromStr for NavigationChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "custom" => Ok(Self::Custom),
            _ => Err(ConfigError::UnknownNavigation(s.to_string())),
        }
    }
}

impl fmt::Display for NavigationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id().as_str())
    }
}

// ============================================================================
// Entry component
// ============================================================================

/// The top-level component. Renders the shell with its attributes.
#[derive(Debug, Clone)]
pub struct AppRoot {
    attributes: ShellAttributes,
}

impl AppRoot {
    /// Create the entry component.
    pub fn new(attributes: ShellAttributes) -> Self {
        Self { attributes }
    }
}

impl Component for AppRoot {
    fn selector(&self) -> &'static str {
        "app-root"
    }

    fn render(&self) -> Markup {
        let attributes: String = self
            .attributes
            .iter()
            .map(|(name, value)| format!(r#" {name}="{value}""#))
            .collect();
        Markup::new(format!("<portico-app{attributes}></portico-app>"))
    }
}

// ============================================================================
// Module
// ============================================================================

/// The Demo-TT application module.
#[derive(Debug, Clone)]
pub struct DemoModule {
    config: ShellConfig,
    choice: NavigationChoice,
}

impl DemoModule {
    /// Build the module from configuration.
    ///
    /// Fails if `navigation` names neither `default` nor `custom`.
    pub fn from_config(config: ShellConfig) -> Result<Self, ConfigError> {
        let choice = match config.navigation() {
            Some(name) => name.parse()?,
            None => NavigationChoice::default(),
        };
        Ok(Self { config, choice })
    }

    /// The selected navigation.
    pub fn choice(&self) -> NavigationChoice {
        self.choice
    }
}

impl AppModule for DemoModule {
    fn navigation(&self) -> Box<dyn NavigationFactory> {
        let choice = self.choice;
        Box::new(move || choice.id())
    }

    fn routes(&self) -> Result<RouteTable, RouteError> {
        portico::routes!["start" => HelloPage::page()]
    }

    fn declarations(&self) -> Vec<NavigationImpl> {
        collected_navigations()
    }

    fn entry(&self) -> Arc<dyn Component> {
        Arc::new(AppRoot::new(self.attributes()))
    }

    fn attributes(&self) -> ShellAttributes {
        self.config.attributes()
    }
}
