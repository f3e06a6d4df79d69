//! Page rendering.
//!
//! Turns a [`Portfolio`] into HTML with [maud](https://maud.lambda.xyz/).
//! Every function here is pure: records in, `Markup` out. All interpolated
//! text is escaped by maud; only the inline SVG icon paths and the generated
//! stylesheet go through `PreEscaped`.
//!
//! ## Page states
//!
//! There is one page layout. What varies is the [`DocumentViewer`] state it
//! is rendered from:
//!
//! - **closed**: no overlay, body scrolls normally (`index.html`)
//! - **open**: the overlay embeds the active document, `<body>` carries
//!   `scroll-locked`, and the page content behind it is `aria-hidden`
//!   (`view-<slug>.html`)
//!
//! "View" actions link to the open state of their document; the overlay's
//! close action links back to the trigger on `index.html`.

use crate::config::SiteMeta;
use crate::content::{
    ContactMethod, DocumentReference, GalleryItem, InterestCard, Portfolio, Section, SkillRating,
};
use crate::icons::Icon;
use crate::viewer::{DocumentViewer, ScrollHost};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inputs shared by every rendered page.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub site: &'a SiteMeta,
    pub css: &'a str,
    pub year: i32,
}

/// File name of the page that shows `doc` open in the viewer.
pub fn view_page_name(doc: &DocumentReference) -> String {
    format!("view-{}.html", doc.slug)
}

/// Element id of the action that opens `doc`; the close action returns here.
pub fn trigger_id(doc: &DocumentReference) -> String {
    format!("view-{}", doc.slug)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    site: &SiteMeta,
    title: &str,
    css: &str,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(site.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(site.description);
                title { (title) }
                @if !site.favicon.is_empty() {
                    link rel="icon" href=(site.favicon);
                }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Sticky top bar with the owner's name and section anchors
fn site_nav(portfolio: &Portfolio) -> Markup {
    html! {
        nav.site-nav {
            div.container.site-nav-inner {
                a.brand href={ "#" (Section::Home.id()) } { (portfolio.owner) }
                ul.nav-links {
                    @for link in portfolio.navigation {
                        li { a href={ "#" (link.anchor) } { (link.label) } }
                    }
                }
            }
        }
    }
}

/// Card with an icon title, optional description, and body
fn card(icon: Option<Icon>, title: &str, description: Option<&str>, body: Markup) -> Markup {
    html! {
        div.card {
            header.card-header {
                h3.card-title {
                    @if let Some(icon) = icon {
                        (icon.svg("icon icon-accent"))
                    }
                    (title)
                }
                @if let Some(desc) = description {
                    p.card-description { (desc) }
                }
            }
            div.card-content {
                (body)
            }
        }
    }
}

fn section_header(title: &str, subtitle: &str) -> Markup {
    html! {
        header.section-header {
            h2 { (title) }
            p { (subtitle) }
        }
    }
}

/// Opens `doc` in the viewer. Carries the id the close action returns to.
fn view_action(doc: &DocumentReference) -> Markup {
    html! {
        a.button.button-primary id=(trigger_id(doc)) href=(view_page_name(doc)) {
            (Icon::FileText.svg("icon"))
            "View " (doc.title)
        }
    }
}

fn download_action(label: &str, href: &str) -> Markup {
    html! {
        a.button.button-outline href=(href) download="" {
            (Icon::Download.svg("icon"))
            (label)
        }
    }
}

/// A contact card. Only contacts with a link target become links.
pub fn contact_card(contact: &ContactMethod) -> Markup {
    html! {
        div.card.contact-card {
            (contact.icon.svg("icon icon-lg icon-accent"))
            h3 { (contact.title) }
            @if let Some(href) = contact.link {
                a.contact-link href=(href) { (contact.content) }
            } @else {
                p.contact-text { (contact.content) }
            }
        }
    }
}

/// A skill row with a bar whose width is the skill level in percent.
pub fn skill_bar(skill: &SkillRating) -> Markup {
    let width = skill.width_percent();
    html! {
        div.skill {
            span.skill-name { (skill.skill) }
            div.skill-track role="meter" aria-valuemin="0" aria-valuemax="100" aria-valuenow=(width) aria-label=(skill.skill) {
                div.skill-fill style={ "width: " (width) "%" } {}
            }
        }
    }
}

fn gallery_tile(item: &GalleryItem) -> Markup {
    html! {
        figure.gallery-tile {
            img src=(item.image) alt=(item.alt) width="200" height="200" loading="lazy";
            figcaption { (item.title) }
        }
    }
}

fn interest_card(interest: &InterestCard) -> Markup {
    let body = html! {
        div.highlights {
            @for h in interest.highlights {
                div.highlight.highlight-marked[h.marker.is_some()] {
                    @if let Some(marker) = h.marker {
                        span.highlight-marker { (marker) }
                    }
                    div {
                        p.highlight-heading { (h.heading) }
                        p.highlight-caption { (h.caption) }
                    }
                }
            }
        }
        p.list-title { (interest.list_title) ":" }
        ul.bullets {
            @for item in interest.list {
                li { (item) }
            }
        }
    };
    card(
        Some(interest.icon),
        interest.title,
        Some(interest.description),
        body,
    )
}

// ============================================================================
// Sections
// ============================================================================

fn hero_section(portfolio: &Portfolio) -> Markup {
    let hero = &portfolio.hero;
    html! {
        section.section.hero id=(Section::Home.id()) {
            div.container {
                img.portrait src=(hero.portrait.image) alt=(hero.portrait.alt) width="200" height="200";
                h1 { (hero.name) }
                p.summary { (hero.summary) }
                div.badges {
                    @for badge in hero.badges {
                        span.badge { (badge.icon.svg("icon")) (badge.text) }
                    }
                }
                @if let Some(cv) = hero.cv {
                    (download_action("Download CV", cv))
                }
            }
        }
    }
}

fn placement_section(portfolio: &Portfolio) -> Markup {
    let placement = &portfolio.placement;
    let recommendation = &placement.recommendation;

    let details = html! {
        dl.details {
            @for item in placement.details {
                dt { (item.label) ":" }
                dd { (item.value) }
            }
            dt { "Performance:" }
            dd { span.badge.badge-success { (placement.performance) } }
        }
    };

    let achievements = html! {
        ul.dots {
            @for achievement in placement.achievements {
                li { (achievement) }
            }
        }
    };

    let gallery = html! {
        div.gallery {
            @for item in placement.gallery {
                (gallery_tile(item))
            }
        }
    };

    let report = portfolio.document(placement.report);
    let letter = portfolio.document(recommendation.letter);

    html! {
        section.section.section-alt id=(Section::WorkPlacement.id()) {
            div.container {
                (section_header("Work Placement Experience", placement.subtitle))
                div.grid.grid-2 {
                    (card(Some(Icon::Briefcase), "Placement Details", None, details))
                    (card(Some(Icon::Award), "Key Achievements", None, achievements))
                }
                (card(Some(Icon::Camera), "Work Placement Gallery", Some(placement.gallery_caption), gallery))
                @if let Some(doc) = report {
                    (card(Some(Icon::FileText), doc.title, Some(doc.description), html! {
                        div.document-drop {
                            (Icon::FileText.svg("icon icon-xl icon-muted"))
                            div.document-actions {
                                (view_action(doc))
                                (download_action("Download", doc.source))
                            }
                            @if let Some(size) = doc.size_label {
                                p.document-size { (size) }
                            }
                        }
                    }))
                }
                div.card.recommendation {
                    header.card-header {
                        h3.card-title { "Supervisor's Recommendation" }
                        p.card-description { (recommendation.from) }
                    }
                    div.card-content {
                        blockquote { "\u{201C}" (recommendation.quote) "\u{201D}" }
                        p.attribution { "\u{2014} " (recommendation.attribution) }
                        @if let Some(doc) = letter {
                            (view_action(doc))
                        }
                    }
                }
            }
        }
    }
}

fn interests_section(portfolio: &Portfolio) -> Markup {
    html! {
        section.section id=(Section::Interests.id()) {
            div.container {
                (section_header("Personal Interests", "Beyond academics - gaming, travel, and exploration"))
                div.grid.grid-2 {
                    @for interest in portfolio.interests {
                        (interest_card(interest))
                    }
                }
            }
        }
    }
}

fn achievements_section(portfolio: &Portfolio) -> Markup {
    let edu = &portfolio.education;
    let education = html! {
        div.stack {
            div {
                p.label { "Current Studies" }
                p { (edu.programme) }
                p.small { (edu.school) }
                p.small { (edu.period) }
            }
            div {
                p.label { "Excellence In:" }
                div.badges.badges-left {
                    @for subject in edu.subjects {
                        span.badge.badge-outline { (subject) }
                    }
                }
            }
        }
    };

    let skills = html! {
        div.stack {
            @for skill in portfolio.skills {
                (skill_bar(skill))
            }
        }
    };

    let awards = html! {
        ol.awards {
            @for entry in portfolio.awards {
                li {
                    p.award-name { (entry.award) }
                    p.award-date { (entry.date) }
                }
            }
        }
    };

    html! {
        section.section.section-alt id=(Section::Achievements.id()) {
            div.container {
                (section_header("Achievements", "Academic achievements and professional competencies"))
                div.grid.grid-3 {
                    (card(Some(Icon::BookOpen), "Education", None, education))
                    (card(Some(Icon::User), "Hard Skills", None, skills))
                    (card(Some(Icon::Award), "Awards & Recognition", None, awards))
                }
            }
        }
    }
}

fn contact_section(portfolio: &Portfolio) -> Markup {
    html! {
        section.section id=(Section::Contact.id()) {
            div.container.narrow {
                (section_header("Get In Touch", "Ready to connect and explore opportunities"))
                div.grid.grid-3 {
                    @for contact in portfolio.contacts {
                        (contact_card(contact))
                    }
                }
            }
        }
    }
}

fn site_footer(portfolio: &Portfolio, year: i32) -> Markup {
    html! {
        footer.site-footer {
            div.container.footer-inner {
                div {
                    p { "\u{00A9} " (year) " " (portfolio.owner) ". Built with passion for excellence." }
                    p.small { "All rights reserved. This portfolio showcases academic and professional achievements." }
                }
                @if let Some(credit) = &portfolio.credit {
                    div.credit {
                        p {
                            (Icon::Code.svg("icon"))
                            "Developed by "
                            a href=(credit.url) target="_blank" rel="noopener noreferrer" {
                                (credit.name)
                                (Icon::ExternalLink.svg("icon icon-sm"))
                            }
                        }
                        p.small { (credit.built_with) }
                    }
                }
            }
        }
    }
}

/// Full-screen viewer for `source`.
///
/// The document is embedded with `<object>`; when the browser can't display
/// it inline, the fallback content offers a direct link instead.
pub fn document_overlay(portfolio: &Portfolio, source: &str) -> Markup {
    let doc = portfolio.document_by_source(source);
    let title = doc.map(|d| d.title).unwrap_or("Document");
    let close_href = match doc {
        Some(d) => format!("index.html#{}", trigger_id(d)),
        None => "index.html".to_string(),
    };

    html! {
        div.doc-overlay role="dialog" aria-modal="true" aria-labelledby="doc-overlay-title" {
            div.doc-overlay-panel {
                header.doc-overlay-header {
                    div {
                        h2 #doc-overlay-title { (title) }
                        @if let Some(d) = doc {
                            p.small { (d.description) }
                        }
                    }
                    div.doc-overlay-actions {
                        (download_action("Download", source))
                        a.doc-overlay-close href=(close_href) aria-label="Close document" {
                            (Icon::Close.svg("icon icon-lg"))
                        }
                    }
                }
                object.doc-frame data=(source) type="application/pdf" aria-label=(title) {
                    div.viewer-fallback {
                        (Icon::FileText.svg("icon icon-xl icon-muted"))
                        p { "This browser can't display the document here." }
                        a href=(source) target="_blank" rel="noopener" { "Open " (title) " directly" }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders the whole page in the state held by `viewer`.
pub fn render_page<H: ScrollHost>(
    portfolio: &Portfolio,
    ctx: &PageContext<'_>,
    viewer: &DocumentViewer<'_, H>,
) -> Markup {
    let locked = viewer.host().is_locked();
    let active = viewer.active_document();

    let title = match active.and_then(|s| portfolio.document_by_source(s)) {
        Some(doc) => format!("{} \u{00B7} {}", doc.title, ctx.site.title),
        None => ctx.site.title.clone(),
    };

    let content = html! {
        div.page aria-hidden=[active.map(|_| "true")] {
            (site_nav(portfolio))
            main {
                (hero_section(portfolio))
                (placement_section(portfolio))
                (interests_section(portfolio))
                (achievements_section(portfolio))
                (contact_section(portfolio))
            }
            (site_footer(portfolio, ctx.year))
        }
        @if let Some(source) = active {
            (document_overlay(portfolio, source))
        }
    };

    base_document(
        ctx.site,
        &title,
        ctx.css,
        locked.then_some("scroll-locked"),
        content,
    )
}

// ============================================================================
// Tests
// ============================================================================
