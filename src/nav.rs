//! Navigation helpers shared by the left sidebar and the mobile nav.

/// Classes for the nav link of the current route.
pub const NAV_LINK_ACTIVE_CLASSES: &str =
    "bg-(image:--gradient-primary) font-bold text-primary-foreground";

/// Classes for every other nav link.
pub const NAV_LINK_INACTIVE_CLASSES: &str = "font-medium";

/// Returns true if `pathname` is `route` or nested under it.
///
/// ```
/// use devflow_kit::is_route_active;
///
/// assert!(is_route_active("/tags/rust", "/tags"));
/// assert!(!is_route_active("/tagsx", "/tags"));
/// ```
pub fn is_route_active(pathname: &str, route: &str) -> bool {
    pathname
        .strip_prefix(route)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Picks the link classes for a nav item.
pub fn nav_link_classes(is_active: bool) -> &'static str {
    if is_active {
        NAV_LINK_ACTIVE_CLASSES
    } else {
        NAV_LINK_INACTIVE_CLASSES
    }
}

/// Icon classes for a nav item. Inactive icons are inverted.
pub fn nav_icon_invert_classes(is_active: bool) -> String {
    cn([(!is_active).then_some("invert-colors"), Some("shrink-0")])
}

/// Merges class strings.
///
/// `None` and blank inputs are skipped. Exact duplicates keep their last
/// position, so later inputs override earlier ones.
///
/// ```
/// use devflow_kit::cn;
///
/// assert_eq!(cn([Some("p-2 font-bold"), None, Some("p-2")]), "font-bold p-2");
/// ```
pub fn cn<'a, I>(inputs: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let tokens: Vec<&str> = inputs
        .into_iter()
        .flatten()
        .flat_map(str::split_whitespace)
        .collect();

    tokens
        .iter()
        .enumerate()
        .filter(|&(i, token)| !tokens[i + 1..].contains(token))
        .map(|(_, token)| *token)
        .collect::<Vec<_>>()
        .join(" ")
}
