pub const OWNER: &str = "Titus Njiru";
pub const MONOGRAM: &str = "TN";
pub const TAGLINE: &str = "Full Stack Developer & UI/UX Designer";

pub struct NavItem {
    pub name: &'static str,
    pub anchor: &'static str,
}

pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem { name: "Home", anchor: "#home" },
    NavItem { name: "About", anchor: "#about" },
    NavItem { name: "Projects", anchor: "#projects" },
    NavItem { name: "Contact", anchor: "#contact" },
];

pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "GitHub", icon: "GH", href: "#" },
    SocialLink { label: "LinkedIn", icon: "in", href: "#" },
    SocialLink { label: "Twitter", icon: "X", href: "#" },
    SocialLink { label: "Email", icon: "@", href: "mailto:njirutitus@gmail.com" },
];

pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub static CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        label: "Email",
        value: "njirutitus@gmail.com",
        href: "mailto:njirutitus@gmail.com",
    },
    ContactDetail {
        label: "Phone",
        value: "+254707015033",
        href: "tel:+254707015033",
    },
    ContactDetail {
        label: "Location",
        value: "Nairobi, Kenya",
        href: "#",
    },
];

/// Social links shown in a given spot. Navigation and hero skip Twitter,
/// the contact section skips the mail link it already lists above.
pub fn social_links<'a>(include: &'a [&'a str]) -> impl Iterator<Item = &'static SocialLink> + 'a {
    SOCIAL_LINKS.iter().filter(move |link| include.contains(&link.label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_anchors_are_fragments() {
        for item in NAV_ITEMS.iter() {
            assert!(item.anchor.starts_with('#'), "{} is not a fragment", item.anchor);
        }
    }

    #[test]
    fn social_links_keep_declaration_order() {
        let labels: Vec<&str> = social_links(&["Email", "GitHub"]).map(|l| l.label).collect();
        assert_eq!(labels, vec!["GitHub", "Email"]);
    }
}
