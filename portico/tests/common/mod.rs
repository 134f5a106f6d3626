#![allow(dead_code)]

use portico::{
    AppModule, Component, DEFAULT_NAVIGATION, Markup, NavigationComponent, NavigationFactory,
    NavigationId, NavigationImpl, Page, PageId, RouteError, RouteTable, ShellAttributes,
    ShellConfig, testing::{CountingFactory, StaticComponent},
};
use std::sync::Arc;

// ============================================================================
// Pages
// ============================================================================

pub const HELLO: PageId = PageId::new("hello");
pub const ABOUT: PageId = PageId::new("about");

pub fn hello() -> Page {
    Page::new(HELLO, StaticComponent::new("hello-page", "<p>Hello</p>"))
}

pub fn about() -> Page {
    Page::new(ABOUT, StaticComponent::new("about-page", "<p>About</p>"))
}

// ============================================================================
// Alternative navigation
// ============================================================================

pub const SIDEBAR_ID: NavigationId = NavigationId::new("sidebar");

#[derive(Default)]
pub struct Sidebar {
    page: Option<PageId>,
}

impl Component for Sidebar {
    fn selector(&self) -> &'static str {
        "test-sidebar"
    }

    fn render(&self) -> Markup {
        match self.page {
            Some(page) => Markup::new(format!("<aside>{page}</aside>")),
            None => Markup::from("<aside></aside>"),
        }
    }
}

impl NavigationComponent for Sidebar {
    fn page(&self) -> Option<PageId> {
        self.page
    }

    fn set_page(&mut self, page: Option<PageId>) {
        self.page = page;
    }
}

fn sidebar() -> Box<dyn NavigationComponent> {
    Box::new(Sidebar::default())
}

pub const SIDEBAR: NavigationImpl = NavigationImpl::new(SIDEBAR_ID, sidebar);

// ============================================================================
// Application
// ============================================================================

/// A two-page application selecting `factory`'s answer.
pub struct TestApp {
    pub factory: CountingFactory,
}

impl TestApp {
    pub fn selecting(id: NavigationId) -> Self {
        Self {
            factory: CountingFactory::new(id),
        }
    }
}

impl AppModule for TestApp {
    fn navigation(&self) -> Box<dyn NavigationFactory> {
        Box::new(self.factory.clone())
    }

    fn routes(&self) -> Result<RouteTable, RouteError> {
        portico::routes![
            "start" => hello(),
            "about" => about(),
        ]
    }

    fn declarations(&self) -> Vec<NavigationImpl> {
        vec![DEFAULT_NAVIGATION, SIDEBAR]
    }

    fn entry(&self) -> Arc<dyn Component> {
        Arc::new(StaticComponent::new("app-root", "<app-root></app-root>"))
    }

    fn attributes(&self) -> ShellAttributes {
        ShellConfig::default().attributes()
    }
}
