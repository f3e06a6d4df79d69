//! Compiled-in portfolio content.
//!
//! Every record the site displays lives here as a `'static` literal. There is
//! no content directory to scan: the page is a pure function of these records
//! (plus site config), so the rendered HTML changes only when this file does.
//!
//! ## Sections
//!
//! The page has a fixed set of sections, each with a stable anchor id used by
//! the navigation bar:
//!
//! ```text
//! #home            Hero: portrait, summary, badges, CV download
//! #work-placement  Placement details, gallery, documents, recommendation
//! #interests       Gaming and travel cards
//! #achievements    Education, skill bars, awards
//! #contact         Contact methods
//! ```
//!
//! ## Asset paths
//!
//! Image and document paths are relative to the site root (`images/...`,
//! `documents/...`). `folio build` copies the `assets/` directory of the site
//! source into the output root, so a path here resolves to
//! `<source>/assets/<path>` at build time and `<output>/<path>` when served.

use crate::icons::Icon;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("skill '{skill}' has level {level}, must be 0-100")]
    SkillLevelOutOfRange { skill: &'static str, level: u8 },
    #[error("navigation link '{label}' points at unknown section '#{anchor}'")]
    UnknownSection {
        label: &'static str,
        anchor: &'static str,
    },
    #[error("document slug '{0}' is used more than once")]
    DuplicateDocument(&'static str),
    #[error("{context} refers to unknown document '{slug}'")]
    UnknownDocument {
        context: &'static str,
        slug: &'static str,
    },
    #[error("contact method '{0}' has an empty link target")]
    EmptyLinkTarget(&'static str),
}

/// The fixed sections of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Home,
    WorkPlacement,
    Interests,
    Achievements,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::WorkPlacement,
        Section::Interests,
        Section::Achievements,
        Section::Contact,
    ];

    /// Anchor id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::WorkPlacement => "work-placement",
            Section::Interests => "interests",
            Section::Achievements => "achievements",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavigationLink {
    /// Section anchor id, without the leading `#`.
    pub anchor: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementBadge {
    pub icon: Icon,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlacementDetail {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryItem {
    pub title: &'static str,
    pub alt: &'static str,
    pub image: &'static str,
}

/// A skill with a 0–100 proficiency level, rendered as a bar of `level%` width.
#[derive(Debug, Clone, Serialize)]
pub struct SkillRating {
    pub skill: &'static str,
    pub level: u8,
}

impl SkillRating {
    /// Bar width in percent. Out-of-range levels are clamped so a bad record
    /// can never overflow its track; `Portfolio::validate` rejects them anyway.
    pub fn width_percent(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AwardEntry {
    pub award: &'static str,
    pub date: &'static str,
}

/// A way to reach the portfolio owner. Rendered as a link only when `link`
/// is present (e.g. `mailto:`), otherwise as plain text (e.g. a location).
#[derive(Debug, Clone, Serialize)]
pub struct ContactMethod {
    pub icon: Icon,
    pub title: &'static str,
    pub content: &'static str,
    pub link: Option<&'static str>,
}

/// A document that can be opened in the overlay viewer.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReference {
    /// Stable identifier, used for the view page name (`view-<slug>.html`).
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Site-relative path of the document, embedded by the viewer.
    pub source: &'static str,
    /// Human-readable size/type hint shown next to the download action.
    pub size_label: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Portrait {
    pub image: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub name: &'static str,
    pub portrait: Portrait,
    pub summary: &'static str,
    pub badges: &'static [AchievementBadge],
    pub cv: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub from: &'static str,
    pub quote: &'static str,
    pub attribution: &'static str,
    /// Slug of the full letter in `Portfolio::documents`.
    pub letter: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Placement {
    pub subtitle: &'static str,
    pub details: &'static [PlacementDetail],
    pub performance: &'static str,
    pub achievements: &'static [&'static str],
    pub gallery_caption: &'static str,
    pub gallery: &'static [GalleryItem],
    /// Slug of the placement report in `Portfolio::documents`.
    pub report: &'static str,
    pub recommendation: Recommendation,
}

/// A tile inside an interest card: a platform, a destination.
#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub marker: Option<&'static str>,
    pub heading: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterestCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub highlights: &'static [Highlight],
    pub list_title: &'static str,
    pub list: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub programme: &'static str,
    pub school: &'static str,
    pub period: &'static str,
    pub subjects: &'static [&'static str],
}

/// Developer credit shown in the footer.
#[derive(Debug, Clone, Serialize)]
pub struct Credit {
    pub name: &'static str,
    pub url: &'static str,
    pub built_with: &'static str,
}

/// Everything the page displays.
#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub owner: &'static str,
    pub navigation: &'static [NavigationLink],
    pub hero: Hero,
    pub placement: Placement,
    pub interests: &'static [InterestCard],
    pub education: Education,
    pub skills: &'static [SkillRating],
    pub awards: &'static [AwardEntry],
    pub contacts: &'static [ContactMethod],
    pub documents: &'static [DocumentReference],
    pub credit: Option<Credit>,
}

impl Portfolio {
    /// Look up a document by slug.
    pub fn document(&self, slug: &str) -> Option<&DocumentReference> {
        self.documents.iter().find(|d| d.slug == slug)
    }

    /// Look up a document by its source path, the identifier the viewer holds.
    pub fn document_by_source(&self, source: &str) -> Option<&DocumentReference> {
        self.documents.iter().find(|d| d.source == source)
    }

    /// Every static asset path the page references, in page order, deduplicated.
    pub fn asset_paths(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        std::iter::once(self.hero.portrait.image)
            .chain(self.hero.cv)
            .chain(self.placement.gallery.iter().map(|g| g.image))
            .chain(self.documents.iter().map(|d| d.source))
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// Check the cross-references and ranges the type system can't express.
    pub fn validate(&self) -> Result<(), ContentError> {
        for link in self.navigation {
            if Section::from_id(link.anchor).is_none() {
                return Err(ContentError::UnknownSection {
                    label: link.label,
                    anchor: link.anchor,
                });
            }
        }

        for skill in self.skills {
            if skill.level > 100 {
                return Err(ContentError::SkillLevelOutOfRange {
                    skill: skill.skill,
                    level: skill.level,
                });
            }
        }

        let mut slugs = HashSet::new();
        for doc in self.documents {
            if !slugs.insert(doc.slug) {
                return Err(ContentError::DuplicateDocument(doc.slug));
            }
        }

        let refs = [
            ("placement report", self.placement.report),
            ("recommendation", self.placement.recommendation.letter),
        ];
        for (context, slug) in refs {
            if self.document(slug).is_none() {
                return Err(ContentError::UnknownDocument { context, slug });
            }
        }

        for contact in self.contacts {
            if contact.link.is_some_and(|l| l.trim().is_empty()) {
                return Err(ContentError::EmptyLinkTarget(contact.title));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Stock content
// =============================================================================

pub const NAVIGATION: &[NavigationLink] = &[
    NavigationLink { anchor: "home", label: "Home" },
    NavigationLink { anchor: "work-placement", label: "Work Placement" },
    NavigationLink { anchor: "interests", label: "Interests" },
    NavigationLink { anchor: "achievements", label: "Achievements" },
    NavigationLink { anchor: "contact", label: "Contact" },
];

pub const BADGES: &[AchievementBadge] = &[
    AchievementBadge { icon: Icon::Award, text: "Outstanding in Literature" },
    AchievementBadge { icon: Icon::BookOpen, text: "Cambridge IGCSE" },
    AchievementBadge { icon: Icon::Briefcase, text: "Legal Work Experience" },
    AchievementBadge { icon: Icon::Gamepad, text: "Pro Gamer" },
    AchievementBadge { icon: Icon::Plane, text: "Travel Enthusiast" },
];

pub const PLACEMENT_DETAILS: &[PlacementDetail] = &[
    PlacementDetail { label: "Organization", value: "MBS Advocates, Kampala" },
    PlacementDetail { label: "Duration", value: "June 30th - July 11th, 2025 (10 days)" },
    PlacementDetail { label: "Role", value: "Legal Assistant" },
];

pub const PLACEMENT_ACHIEVEMENTS: &[&str] = &[
    "Demonstrated exceptional analytical skills in complex legal research",
    "Worked with Corporate Law team on substantive legal documents",
    "Earned respect from senior attorneys and administrative staff",
    "Maintained exemplary professional conduct and confidentiality",
];

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem {
        title: "Office Environment",
        alt: "MBS Advocates Office",
        image: "images/gallery/office.jpg",
    },
    GalleryItem {
        title: "Court Visit",
        alt: "Court Visit Experience",
        image: "images/gallery/court-visit.jpg",
    },
    GalleryItem {
        title: "Team Collaboration",
        alt: "Team Collaboration",
        image: "images/gallery/team.jpg",
    },
    GalleryItem {
        title: "Certificate",
        alt: "Completion Certificate",
        image: "images/gallery/certificate.jpg",
    },
];

pub const INTERESTS: &[InterestCard] = &[
    InterestCard {
        icon: Icon::Gamepad,
        title: "Gaming Excellence",
        description: "Pro gamer on PC and PlayStation 5",
        highlights: &[
            Highlight { marker: None, heading: "PC", caption: "Gaming Platform" },
            Highlight { marker: None, heading: "PS5", caption: "Console Gaming" },
        ],
        list_title: "Gaming Achievements",
        list: &[
            "Competitive esports participant",
            "Strategic thinking and quick decision-making",
            "Team coordination and leadership",
            "Problem-solving under pressure",
        ],
    },
    InterestCard {
        icon: Icon::Plane,
        title: "Travel & Culture",
        description: "Exploring the world and embracing new experiences",
        highlights: &[Highlight {
            marker: Some("\u{1F1EE}\u{1F1F3}"),
            heading: "India",
            caption: "Cultural immersion and exploration",
        }],
        list_title: "Travel Benefits",
        list: &[
            "Cultural awareness and sensitivity",
            "Adaptability to new environments",
            "Global perspective on issues",
            "Enhanced communication skills",
        ],
    },
];

pub const SKILLS: &[SkillRating] = &[
    SkillRating { skill: "Microsoft Office Suite", level: 80 },
    SkillRating { skill: "Writing Skills", level: 100 },
    SkillRating { skill: "Data Analysis & ICT", level: 80 },
    SkillRating { skill: "Debating", level: 85 },
];

pub const AWARDS: &[AwardEntry] = &[
    AwardEntry { award: "Outstanding in Literature", date: "March 7th, 2025" },
    AwardEntry { award: "Excellent Computer Skills", date: "June 7th, 2018" },
    AwardEntry { award: "Outstanding Writer", date: "May 24th, 2021" },
    AwardEntry { award: "ISSA-UG Football Merit", date: "September 28th, 2023" },
];

pub const CONTACTS: &[ContactMethod] = &[
    ContactMethod {
        icon: Icon::Mail,
        title: "Email",
        content: "damienpapers3@gmail.com",
        link: Some("mailto:damienpapers3@gmail.com"),
    },
    ContactMethod {
        icon: Icon::Phone,
        title: "Phone",
        content: "+256 779 498 683",
        link: Some("tel:+256779498683"),
    },
    ContactMethod {
        icon: Icon::MapPin,
        title: "Location",
        content: "Kampala, Uganda",
        link: None,
    },
];

pub const DOCUMENTS: &[DocumentReference] = &[
    DocumentReference {
        slug: "recommendation-letter",
        title: "Recommendation Letter",
        description: "Supervisor's recommendation from the MBS Advocates Corporate Law team",
        source: "documents/recommendation-letter.pdf",
        size_label: None,
    },
    DocumentReference {
        slug: "placement-report",
        title: "Placement Report",
        description: "Work placement completion confirmation from MBS Advocates",
        source: "documents/placement-report.pdf",
        size_label: Some("PDF Document - 245 KB"),
    },
];

/// The portfolio this site is built for.
pub fn stock() -> Portfolio {
    Portfolio {
        owner: "Damien Papers",
        navigation: NAVIGATION,
        hero: Hero {
            name: "Damien Papers",
            portrait: Portrait {
                image: "images/portrait.jpg",
                alt: "Damien Papers - Professional Portrait",
            },
            summary: "Motivated Year 11 student pursuing Law after High school graduation, \
                demonstrating strong academic and athletic potential. Proficient in data \
                analysis, creative writing, and innovative problem-solving, with a solid \
                foundation in debating, sports, and ICT. Passionate about gaming, travel, \
                and legal studies.",
            badges: BADGES,
            cv: Some("documents/damien-papers-cv.pdf"),
        },
        placement: Placement {
            subtitle: "Professional experience at MBS Advocates, Kampala",
            details: PLACEMENT_DETAILS,
            performance: "Outstanding",
            achievements: PLACEMENT_ACHIEVEMENTS,
            gallery_caption: "Memories from my time at MBS Advocates",
            gallery: GALLERY,
            report: "placement-report",
            recommendation: Recommendation {
                from: "From MBS Advocates Corporate Law Team",
                quote: "Damien possesses a rare combination of intellectual acuity, \
                    professional maturity, and a genuine passion for the law that marks him \
                    for future success in this field. His analytical mind, mature character, \
                    and drive for excellence make him an ideal candidate for a rigorous law \
                    program.",
                attribution: "Counsel George Muhangi, MBS Advocates",
                letter: "recommendation-letter",
            },
        },
        interests: INTERESTS,
        education: Education {
            programme: "Cambridge IGCSE KS3",
            school: "Aga Khan International School Uganda",
            period: "Year 11 (2021-2025)",
            subjects: &["History", "English", "ICT", "Literature"],
        },
        skills: SKILLS,
        awards: AWARDS,
        contacts: CONTACTS,
        documents: DOCUMENTS,
        credit: Some(Credit {
            name: "Douglas Kings Kato",
            url: "https://your-portfolio-link-here.com",
            built_with: "Built with Rust and Maud",
        }),
    }
}
