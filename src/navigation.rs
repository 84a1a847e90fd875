use url::Url;

use crate::motion::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Languages,
    About,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::Languages,
        Self::About,
        Self::Projects,
        Self::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Languages => "languages",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.as_str() == value)
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

/// Entries of the fixed navigation bar and its mobile dropdown.
pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Home",
        target: SectionId::Hero,
    },
    NavLink {
        label: "Skills",
        target: SectionId::Languages,
    },
    NavLink {
        label: "About",
        target: SectionId::About,
    },
    NavLink {
        label: "Projects",
        target: SectionId::Projects,
    },
    NavLink {
        label: "Contact",
        target: SectionId::Contact,
    },
];

/// Footer quick links skip the skills block.
pub const FOOTER_LINKS: [NavLink; 4] = [
    NAV_LINKS[0],
    NAV_LINKS[2],
    NAV_LINKS[3],
    NAV_LINKS[4],
];

/// Document offset that puts a section's top edge `nav_offset` pixels below
/// the viewport top. `section_top` is the viewport-relative top reported by
/// `getBoundingClientRect`.
pub fn scroll_destination(section_top: f64, scroll_y: f64, nav_offset: f64) -> f64 {
    (scroll_y + section_top - nav_offset).max(0.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    Toggle,
    Select(SectionId),
    /// A pointer or touch press anywhere in the document. `bounds` is the
    /// area that counts as "inside" (bar plus dropdown).
    PointerDown { x: f64, y: f64, bounds: Rect },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuOutcome {
    pub state: MenuState,
    pub scroll_to: Option<SectionId>,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn apply(self, event: MenuEvent) -> MenuOutcome {
        match event {
            MenuEvent::Toggle => MenuOutcome {
                state: match self {
                    Self::Closed => Self::Open,
                    Self::Open => Self::Closed,
                },
                scroll_to: None,
            },
            MenuEvent::Select(section) => MenuOutcome {
                state: Self::Closed,
                scroll_to: Some(section),
            },
            MenuEvent::PointerDown { x, y, bounds } => MenuOutcome {
                state: if self.is_open() && !bounds.contains(x, y) {
                    Self::Closed
                } else {
                    self
                },
                scroll_to: None,
            },
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Closed => "Open menu",
            Self::Open => "Close menu",
        }
    }

    /// SVG path for the toggle glyph.
    pub fn icon_path(self) -> &'static str {
        match self {
            Self::Closed => "M4 6h16M4 12h16M4 18h16",
            Self::Open => "M6 18L18 6M6 6l12 12",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkKind {
    External,
    Mail,
    Phone,
    InPage(String),
    Other,
}

impl LinkKind {
    pub fn classify(href: &str) -> Self {
        let href = href.trim();

        if let Some(fragment) = href.strip_prefix('#') {
            return if fragment.is_empty() {
                Self::Other
            } else {
                Self::InPage(fragment.to_string())
            };
        }

        let Ok(parsed) = Url::parse(href) else {
            return Self::Other;
        };

        match parsed.scheme() {
            "http" | "https" if parsed.host_str().is_some() => Self::External,
            "mailto" => Self::Mail,
            "tel" => Self::Phone,
            _ => Self::Other,
        }
    }

    pub fn opens_new_context(&self) -> bool {
        matches!(self, Self::External)
    }

    pub fn target(&self) -> Option<&'static str> {
        self.opens_new_context().then_some("_blank")
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.opens_new_context().then_some("noopener noreferrer")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAV_BOUNDS: Rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 390.0,
        height: 300.0,
    };

    #[test]
    fn section_ids_round_trip_through_anchor_names() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_str(section.as_str()), Some(section));
        }
        assert_eq!(SectionId::Projects.anchor(), "#projects");
        assert_eq!(SectionId::from_str("blog"), None);
    }

    #[test]
    fn every_nav_link_targets_a_distinct_section() {
        let targets: Vec<_> = NAV_LINKS.iter().map(|link| link.target).collect();

        assert_eq!(targets, SectionId::ALL.to_vec());
        assert!(FOOTER_LINKS.iter().all(|link| link.target != SectionId::Languages));
    }

    #[test]
    fn destination_leaves_room_for_the_navbar() {
        assert_eq!(scroll_destination(500.0, 1_000.0, 64.0), 1_436.0);
        assert_eq!(scroll_destination(-200.0, 1_000.0, 64.0), 736.0);
    }

    #[test]
    fn destination_never_goes_above_the_document() {
        assert_eq!(scroll_destination(10.0, 0.0, 64.0), 0.0);
    }

    #[test]
    fn toggle_opens_and_closes() {
        let opened = MenuState::Closed.apply(MenuEvent::Toggle);
        assert_eq!(opened.state, MenuState::Open);
        assert_eq!(opened.scroll_to, None);

        let closed = opened.state.apply(MenuEvent::Toggle);
        assert_eq!(closed.state, MenuState::Closed);
    }

    #[test]
    fn selecting_an_item_closes_and_scrolls_once() {
        let outcome = MenuState::Open.apply(MenuEvent::Select(SectionId::Contact));

        assert_eq!(
            outcome,
            MenuOutcome {
                state: MenuState::Closed,
                scroll_to: Some(SectionId::Contact),
            }
        );
    }

    #[test]
    fn pointer_outside_bounds_dismisses_open_menu() {
        let outcome = MenuState::Open.apply(MenuEvent::PointerDown {
            x: 200.0,
            y: 600.0,
            bounds: NAV_BOUNDS,
        });

        assert_eq!(outcome.state, MenuState::Closed);
        assert_eq!(outcome.scroll_to, None);
    }

    #[test]
    fn pointer_inside_bounds_keeps_menu_open() {
        let outcome = MenuState::Open.apply(MenuEvent::PointerDown {
            x: 200.0,
            y: 120.0,
            bounds: NAV_BOUNDS,
        });

        assert_eq!(outcome.state, MenuState::Open);
    }

    #[test]
    fn pointer_outside_does_not_open_closed_menu() {
        let outcome = MenuState::Closed.apply(MenuEvent::PointerDown {
            x: 200.0,
            y: 600.0,
            bounds: NAV_BOUNDS,
        });

        assert_eq!(outcome.state, MenuState::Closed);
    }

    #[test]
    fn links_are_classified_by_scheme() {
        assert_eq!(
            LinkKind::classify("https://www.linkedin.com/in/alihaider-dev"),
            LinkKind::External
        );
        assert_eq!(LinkKind::classify("mailto:someone@example.com"), LinkKind::Mail);
        assert_eq!(LinkKind::classify("tel:+923144202998"), LinkKind::Phone);
        assert_eq!(
            LinkKind::classify("#contact"),
            LinkKind::InPage("contact".to_string())
        );
        assert_eq!(LinkKind::classify("#"), LinkKind::Other);
        assert_eq!(LinkKind::classify("/resume.pdf"), LinkKind::Other);
    }

    #[test]
    fn only_external_links_open_a_new_context() {
        let external = LinkKind::classify("https://example.com");
        assert_eq!(external.target(), Some("_blank"));
        assert_eq!(external.rel(), Some("noopener noreferrer"));

        let mail = LinkKind::classify("mailto:someone@example.com");
        assert!(!mail.opens_new_context());
        assert_eq!(mail.target(), None);
    }
}
