//! Navigation data and the interaction state behind the mega-menus.
//!
//! The menu tables are static and shared by the desktop flyout and the
//! mobile accordion. The state machines live in the submodules and know
//! nothing about the DOM.

pub mod accordion;
pub mod delayed_action;
pub mod hover_intent;

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MenuId(&'static str);

impl MenuId {
    pub const WHAT_WE_OFFER: MenuId = MenuId("what-we-offer");
    pub const INDUSTRIES: MenuId = MenuId("industries");

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Symbolic icon reference, rendered as a Font Awesome class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    UserCheck,
    Gavel,
    GraduationCap,
    Flask,
    Brain,
    FileLines,
    Fingerprint,
    ShieldHalved,
    Eye,
    Briefcase,
    Robot,
    ScaleBalanced,
    HeartPulse,
    BuildingColumns,
    Truck,
    Store,
    PeopleGroup,
    Microchip,
    Building,
    Industry,
}

impl Icon {
    pub fn css_class(self) -> &'static str {
        match self {
            Icon::UserCheck => "fa-solid fa-user-check",
            Icon::Gavel => "fa-solid fa-gavel",
            Icon::GraduationCap => "fa-solid fa-graduation-cap",
            Icon::Flask => "fa-solid fa-flask",
            Icon::Brain => "fa-solid fa-brain",
            Icon::FileLines => "fa-solid fa-file-lines",
            Icon::Fingerprint => "fa-solid fa-fingerprint",
            Icon::ShieldHalved => "fa-solid fa-shield-halved",
            Icon::Eye => "fa-solid fa-eye",
            Icon::Briefcase => "fa-solid fa-briefcase",
            Icon::Robot => "fa-solid fa-robot",
            Icon::ScaleBalanced => "fa-solid fa-scale-balanced",
            Icon::HeartPulse => "fa-solid fa-heart-pulse",
            Icon::BuildingColumns => "fa-solid fa-building-columns",
            Icon::Truck => "fa-solid fa-truck",
            Icon::Store => "fa-solid fa-store",
            Icon::PeopleGroup => "fa-solid fa-people-group",
            Icon::Microchip => "fa-solid fa-microchip",
            Icon::Building => "fa-solid fa-building",
            Icon::Industry => "fa-solid fa-industry",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct MenuItem {
    pub name: &'static str,
    pub path: &'static str,
    pub icon: Icon,
}

#[derive(Debug, PartialEq)]
pub struct MenuSection {
    pub title: &'static str,
    pub icon: Icon,
    pub items: &'static [MenuItem],
}

#[derive(Debug, PartialEq)]
pub struct MenuDescriptor {
    pub id: MenuId,
    pub title: &'static str,
    pub sections: &'static [MenuSection],
}

pub static MENUS: &[MenuDescriptor] = &[
    MenuDescriptor {
        id: MenuId::WHAT_WE_OFFER,
        title: "What We Offer?",
        sections: &[
            MenuSection {
                title: "Background Screening",
                icon: Icon::UserCheck,
                items: &[
                    MenuItem { name: "Employment Screening", path: "/services/employment-screening", icon: Icon::Briefcase },
                    MenuItem { name: "Criminal Record Checks", path: "/services/criminal-record-checks", icon: Icon::Gavel },
                    MenuItem { name: "Education Verification", path: "/services/education-verification", icon: Icon::GraduationCap },
                    MenuItem { name: "Drug & Health Testing", path: "/services/drug-health-testing", icon: Icon::Flask },
                ],
            },
            MenuSection {
                title: "AI Services",
                icon: Icon::Brain,
                items: &[
                    MenuItem { name: "AI Consulting", path: "/services/ai-consulting", icon: Icon::Robot },
                    MenuItem { name: "Document Intelligence", path: "/services/document-intelligence", icon: Icon::FileLines },
                    MenuItem { name: "Identity Verification", path: "/services/identity-verification", icon: Icon::Fingerprint },
                ],
            },
            MenuSection {
                title: "Compliance",
                icon: Icon::ShieldHalved,
                items: &[
                    MenuItem { name: "FCRA Compliance", path: "/services/fcra-compliance", icon: Icon::ScaleBalanced },
                    MenuItem { name: "Continuous Monitoring", path: "/services/continuous-monitoring", icon: Icon::Eye },
                ],
            },
        ],
    },
    MenuDescriptor {
        id: MenuId::INDUSTRIES,
        title: "Industries",
        sections: &[
            MenuSection {
                title: "Regulated",
                icon: Icon::Building,
                items: &[
                    MenuItem { name: "Healthcare", path: "/industries/healthcare", icon: Icon::HeartPulse },
                    MenuItem { name: "Financial Services", path: "/industries/financial-services", icon: Icon::BuildingColumns },
                    MenuItem { name: "Transportation", path: "/industries/transportation", icon: Icon::Truck },
                ],
            },
            MenuSection {
                title: "Commercial",
                icon: Icon::Industry,
                items: &[
                    MenuItem { name: "Retail", path: "/industries/retail", icon: Icon::Store },
                    MenuItem { name: "Staffing", path: "/industries/staffing", icon: Icon::PeopleGroup },
                    MenuItem { name: "Technology", path: "/industries/technology", icon: Icon::Microchip },
                ],
            },
        ],
    },
];

pub fn find_menu(id: MenuId) -> Option<&'static MenuDescriptor> {
    MENUS.iter().find(|menu| menu.id == id)
}

/// Looks a route path up across every menu, returning the owning section too.
pub fn find_item(path: &str) -> Option<(&'static MenuSection, &'static MenuItem)> {
    MENUS
        .iter()
        .flat_map(|menu| menu.sections.iter())
        .find_map(|section| {
            section
                .items
                .iter()
                .find(|item| item.path == path)
                .map(|item| (section, item))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn menu_ids_are_unique() {
        let ids: HashSet<_> = MENUS.iter().map(|menu| menu.id).collect();
        assert_eq!(ids.len(), MENUS.len());
    }

    #[test]
    fn item_paths_are_unique_and_absolute() {
        let mut seen = HashSet::new();
        for section in MENUS.iter().flat_map(|menu| menu.sections.iter()) {
            for item in section.items {
                assert!(item.path.starts_with('/'), "{} is relative", item.path);
                assert!(seen.insert(item.path), "{} listed twice", item.path);
            }
        }
    }

    #[test]
    fn find_item_reports_owning_section() {
        let (section, item) = find_item("/industries/staffing").expect("staffing is listed");
        assert_eq!(section.title, "Commercial");
        assert_eq!(item.name, "Staffing");
        assert!(find_item("/industries/mining").is_none());
    }

    #[test]
    fn find_menu_by_id() {
        assert_eq!(find_menu(MenuId::INDUSTRIES).map(|m| m.title), Some("Industries"));
    }
}
