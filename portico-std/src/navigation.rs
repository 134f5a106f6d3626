//! The navigation implementation used when an application doesn't bring its own.

use portico_core::{
    Component, Markup, NavigationComponent, NavigationId, NavigationImpl, PageId,
};

/// A plain navigation bar that marks the active page.
#[derive(Debug, Default, Clone)]
pub struct DefaultNavigation {
    page: Option<PageId>,
}

impl DefaultNavigation {
    /// Identifier of this implementation.
    pub const ID: NavigationId = NavigationId::new("default");

    /// Create a navigation bar with no active page.
    pub fn new() -> Self {
        Self::default()
    }

    fn construct() -> Box<dyn NavigationComponent> {
        Box::new(Self::new())
    }
}

/// Descriptor for [`DefaultNavigation`].
pub const DEFAULT_NAVIGATION: NavigationImpl =
    NavigationImpl::new(DefaultNavigation::ID, DefaultNavigation::construct);

impl Component for DefaultNavigation {
    fn selector(&self) -> &'static str {
        "portico-default-navigation"
    }

    fn render(&self) -> Markup {
        match self.page {
            Some(page) => Markup::new(format!(
                r#"<nav class="default-navigation"><span class="active">{page}</span></nav>"#
            )),
            None => Markup::from(r#"<nav class="default-navigation"></nav>"#),
        }
    }
}

impl NavigationComponent for DefaultNavigation {
    fn page(&self) -> Option<PageId> {
        self.page
    }

    fn set_page(&mut self, page: Option<PageId>) {
        self.page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builds_default_navigation() {
        let nav = DEFAULT_NAVIGATION.instantiate();
        assert_eq!(DEFAULT_NAVIGATION.id(), DefaultNavigation::ID);
        assert_eq!(nav.selector(), "portico-default-navigation");
        assert_eq!(nav.page(), None);
    }

    #[test]
    fn test_render_marks_active_page() {
        let mut nav = DefaultNavigation::new();
        assert_eq!(
            nav.render().as_str(),
            r#"<nav class="default-navigation"></nav>"#
        );

        nav.set_page(Some(PageId::new("hello")));
        assert!(nav.render().as_str().contains(r#"<span class="active">hello</span>"#));
    }
}
