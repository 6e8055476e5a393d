//! Navigation constants.

/// How a sidebar link resolves its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Fixed route.
    Link,
    /// Route that depends on the signed-in user.
    DynamicLink,
}

/// An entry in the application navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarLink {
    pub kind: LinkKind,
    pub route: &'static str,
    pub label: &'static str,
}

/// Application title shown above the navigation.
pub const SIDEBAR_TITLE: &str = "HEXPERTIFY";

/// Navigation entries in display order.
pub static SIDEBAR_LINKS: [SidebarLink; 5] = [
    SidebarLink {
        kind: LinkKind::Link,
        route: "/",
        label: "Home",
    },
    SidebarLink {
        kind: LinkKind::DynamicLink,
        route: "/my-profile",
        label: "My Profile",
    },
    SidebarLink {
        kind: LinkKind::Link,
        route: "/services",
        label: "Services",
    },
    SidebarLink {
        kind: LinkKind::Link,
        route: "/about-us",
        label: "About Us",
    },
    SidebarLink {
        kind: LinkKind::Link,
        route: "/contact-us",
        label: "Contact Us",
    },
];

/// Find the link registered for a route.
pub fn link_for(route: &str) -> Option<&'static SidebarLink> {
    SIDEBAR_LINKS.iter().find(|link| link.route == route)
}
