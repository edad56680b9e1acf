//! HTML fragments for the projects grid and the clients carousel.
//!
//! Output is meant to be pasted into (or included by) the landing page, so
//! the markup mirrors the classes the page's stylesheet and scripts expect:
//!
//! ```text
//! div.projects-grid
//!   div.project-card.animate-on-scroll.scale-in
//!     img.project-image
//!     div.project-info > h3.project-title + p.project-description
//! div.clients-track
//!   div.client-logo > img
//! ```
//!
//! Titles and descriptions carry `data-es` / `data-en` attributes for the
//! language toggle. All interpolation is escaped by Maud.

use crate::gallery::{ClientLogo, ProjectCard};
use maud::{Markup, html};

/// Hides an image whose file turns out to be missing at view time.
const HIDE_ON_ERROR: &str = "this.style.display='none';";

pub fn render_project_card(card: &ProjectCard) -> Markup {
    let info = &card.info;
    html! {
        div.project-card.animate-on-scroll.scale-in {
            img.project-image src=(card.src) alt=(info.title) loading="lazy" onerror=(HIDE_ON_ERROR);
            div.project-info {
                h3.project-title data-es=(info.title) data-en=(info.title_en) {
                    (info.title)
                }
                p.project-description data-es=(info.description) data-en=(info.description_en) {
                    (info.description)
                }
            }
        }
    }
}

pub fn render_client_logo(logo: &ClientLogo) -> Markup {
    html! {
        div.client-logo {
            img src=(logo.src) alt=(logo.alt) loading="lazy" onerror=(HIDE_ON_ERROR);
        }
    }
}

/// Render both gallery sections.
pub fn render_gallery(cards: &[ProjectCard], logos: &[ClientLogo]) -> Markup {
    html! {
        div.projects-grid {
            @for card in cards {
                (render_project_card(card))
            }
        }
        div.clients-track {
            @for logo in logos {
                (render_client_logo(logo))
            }
        }
    }
}
