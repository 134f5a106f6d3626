//! The render contract.

use std::fmt;

/// Rendered output of a [`Component`].
///
/// Portico never interprets markup; it is produced by components and handed
/// to the host as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// Wrap a rendered string.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The rendered string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the markup, returning the rendered string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Markup {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Markup {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A renderable unit known to the host.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be rendered by the host",
    label = "missing `Component` implementation",
    note = "Implement `Component` to give the type a selector and a render method."
)]
pub trait Component: Send + Sync {
    /// The element name the component is mounted under.
    fn selector(&self) -> &'static str;

    /// Render the component.
    fn render(&self) -> Markup;
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn selector(&self) -> &'static str {
        (**self).selector()
    }

    fn render(&self) -> Markup {
        (**self).render()
    }
}
