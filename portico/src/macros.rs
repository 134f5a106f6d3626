/// Build a [`RouteTable`](crate::RouteTable) from `path => page` pairs.
///
/// Expands to a `Result<RouteTable, RouteError>`; the pairs keep their
/// written order.
///
/// # Example
///
/// ```rust,ignore
/// let table = portico::routes![
///     "start" => Page::new(HELLO, Hello),
///     "**" => Page::new(NOT_FOUND, NotFound),
/// ]?;
/// ```
#[macro_export]
macro_rules! routes {
    () => {
        ::core::result::Result::<$crate::RouteTable, $crate::RouteError>::Ok(
            $crate::RouteTable::new(),
        )
    };
    ($($path:expr => $page:expr),+ $(,)?) => {
        $crate::RouteTable::from_pairs([$(($path, $page)),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::{Page, PageId, RouteError, testing::StaticComponent};

    fn page(id: &'static str) -> Page {
        Page::new(PageId::new(id), StaticComponent::new(id, id))
    }

    #[test]
    fn test_routes_keeps_order() {
        let table = routes!["start" => page("hello"), "about" => page("about"),].unwrap();
        assert_eq!(table.paths().collect::<Vec<_>>(), ["start", "about"]);
    }

    #[test]
    fn test_routes_empty() {
        assert!(routes![].unwrap().is_empty());
    }

    #[test]
    fn test_routes_validates() {
        let result = routes!["start" => page("a"), "start" => page("b")];
        assert_eq!(
            result.map(|t| t.len()),
            Err(RouteError::DuplicatePath("start".to_string()))
        );
    }
}
