//! Gallery card model: turns a resolution result into project cards and
//! client logos.
//!
//! Project titles and descriptions come from a small lookup table matched
//! against the filename, in both site languages (Spanish first, English as
//! the toggle alternative). When discovery finds nothing for a category, the
//! gallery falls back to a fixed placeholder list so the section is never
//! empty.
//!
//! ## Title lookup
//!
//! The extension is stripped and the name lowercased, then the table is
//! searched in order; the first key contained anywhere in the name wins:
//!
//! ```text
//! rodillos-7in.jpg        → "Torneado de Rodillos" / "Roller Turning"
//! TAZAS_2.png             → "Manufactura de Repuestos" / "Spare Parts Manufacturing"
//! 1.jpg (index 0)         → "Proyecto de Manufactura 1" / "Manufacturing Project 1"
//! ```

use crate::category::Category;
use crate::discovery::ResolutionResult;

/// Shown when no project image resolves.
pub const PLACEHOLDER_PROJECTS: &[&str] = &[
    "proyecto-cnc-1.jpg",
    "proyecto-automatizacion-1.jpg",
    "proyecto-soldadura-1.jpg",
    "proyecto-cnc-2.jpg",
    "proyecto-automatizacion-2.jpg",
    "proyecto-soldadura-2.jpg",
];

/// Shown when no client logo resolves.
pub const PLACEHOLDER_CLIENTS: &[&str] = &[
    "cliente-1.png",
    "cliente-2.png",
    "cliente-3.png",
    "cliente-4.png",
    "cliente-5.png",
    "cliente-6.png",
    "cliente-7.png",
    "cliente-8.png",
];

struct ProjectEntry {
    key: &'static str,
    title: &'static str,
    title_en: &'static str,
    description: &'static str,
    description_en: &'static str,
}

const PROJECT_TABLE: &[ProjectEntry] = &[
    ProjectEntry {
        key: "tazas",
        title: "Manufactura de Repuestos",
        title_en: "Spare Parts Manufacturing",
        description: "Manufactura de repuestos de maquinaria con tolerancias precisas y acabados de alta calidad",
        description_en: "Manufacturing of machinery spare parts with precise tolerances and high-quality finishes",
    },
    ProjectEntry {
        key: "dados_para_troquelado",
        title: "Dados para Troquelado",
        title_en: "Stamping Dies",
        description: "Piezas con tratamiento térmico especializado para troquelado de alta precisión",
        description_en: "Heat-treated components specialized for high-precision stamping operations",
    },
    ProjectEntry {
        key: "fixturas_aluminio",
        title: "Fixturas de Aluminio",
        title_en: "Aluminum Fixtures",
        description: "Fabricación de piezas y fixturas en aluminio para aplicaciones industriales especializadas",
        description_en: "Manufacturing of aluminum parts and fixtures for specialized industrial applications",
    },
    ProjectEntry {
        key: "rodillos",
        title: "Torneado de Rodillos",
        title_en: "Roller Turning",
        description: "Fabricación de torneado hasta 7\" de diámetro con acabados de precisión industrial",
        description_en: "Turning manufacturing up to 7\" diameter with industrial precision finishes",
    },
    ProjectEntry {
        key: "soldadura",
        title: "Proyecto de Soldadura",
        title_en: "Welding Project",
        description: "Desarrollo de mesa de soldadura personalizada con certificación AWS",
        description_en: "Custom welding table development with AWS certification",
    },
    ProjectEntry {
        key: "fabricacion_nueva",
        title: "Proyectos Únicos",
        title_en: "Unique Projects",
        description: "Desarrollo de proyectos únicos y soluciones personalizadas de manufactura",
        description_en: "Development of unique projects and customized manufacturing solutions",
    },
];

/// Bilingual title and description for a project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub title: String,
    pub title_en: String,
    pub description: String,
    pub description_en: String,
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    /// Bare filename, e.g. `rodillos.jpg`.
    pub image_name: String,
    /// Site-relative image path.
    pub src: String,
    pub info: ProjectInfo,
}

/// One client logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientLogo {
    pub logo_name: String,
    pub src: String,
    pub alt: String,
}

/// Remove the last extension, if any: `a.b.jpg` → `a.b`, `a.` → `a.`.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if pos + 1 < name.len() => &name[..pos],
        _ => name,
    }
}

/// Last path segment of a resolved path.
fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Look up display text for a project image. `index` is 0-based.
pub fn project_info(image_name: &str, index: usize) -> ProjectInfo {
    let name = strip_extension(image_name).to_lowercase();

    if let Some(entry) = PROJECT_TABLE.iter().find(|e| name.contains(e.key)) {
        return ProjectInfo {
            title: entry.title.to_string(),
            title_en: entry.title_en.to_string(),
            description: entry.description.to_string(),
            description_en: entry.description_en.to_string(),
        };
    }

    ProjectInfo {
        title: format!("Proyecto de Manufactura {}", index + 1),
        title_en: format!("Manufacturing Project {}", index + 1),
        description: "Ejemplo de nuestro trabajo en manufactura de precisión".to_string(),
        description_en: "Example of our precision manufacturing work".to_string(),
    }
}

/// Names to render for a category: resolved filenames, or the placeholders.
fn names_or_placeholders<'a>(resolved: &'a [String], placeholders: &'a [&'a str]) -> Vec<&'a str> {
    if resolved.is_empty() {
        placeholders.to_vec()
    } else {
        resolved.iter().map(|p| file_name(p)).collect()
    }
}

/// Project cards for the projects grid.
pub fn project_cards(result: &ResolutionResult, images_dir: &str) -> Vec<ProjectCard> {
    names_or_placeholders(result.get(Category::Projects), PLACEHOLDER_PROJECTS)
        .into_iter()
        .enumerate()
        .map(|(index, name)| ProjectCard {
            image_name: name.to_string(),
            src: Category::Projects.candidate_path(images_dir, name),
            info: project_info(name, index),
        })
        .collect()
}

/// Client logos for the carousel.
pub fn client_logos(result: &ResolutionResult, images_dir: &str) -> Vec<ClientLogo> {
    names_or_placeholders(result.get(Category::Clients), PLACEHOLDER_CLIENTS)
        .into_iter()
        .enumerate()
        .map(|(index, name)| ClientLogo {
            logo_name: name.to_string(),
            src: Category::Clients.candidate_path(images_dir, name),
            alt: format!("Cliente {}", index + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_info_matches_table_key() {
        let info = project_info("rodillos-7in.jpg", 3);
        assert_eq!(info.title, "Torneado de Rodillos");
        assert_eq!(info.title_en, "Roller Turning");
    }

    #[test]
    fn project_info_is_case_insensitive() {
        let info = project_info("TAZAS_2.PNG", 0);
        assert_eq!(info.title_en, "Spare Parts Manufacturing");
    }

    #[test]
    fn project_info_first_table_key_wins() {
        // Contains both "tazas" and "soldadura"; "tazas" comes first in the table.
        let info = project_info("soldadura_tazas.jpg", 0);
        assert_eq!(info.title, "Manufactura de Repuestos");
    }

    #[test]
    fn project_info_key_in_extension_does_not_match() {
        let info = project_info("photo.rodillos", 1);
        assert_eq!(info.title, "Proyecto de Manufactura 2");
    }

    #[test]
    fn project_info_fallback_uses_one_based_index() {
        let info = project_info("1.jpg", 0);
        assert_eq!(info.title, "Proyecto de Manufactura 1");
        assert_eq!(info.title_en, "Manufacturing Project 1");
        assert_eq!(
            info.description_en,
            "Example of our precision manufacturing work"
        );
    }

    #[test]
    fn strip_extension_cases() {
        assert_eq!(strip_extension("a.jpg"), "a");
        assert_eq!(strip_extension("a.b.jpg"), "a.b");
        assert_eq!(strip_extension("noext"), "noext");
        assert_eq!(strip_extension("trailing."), "trailing.");
    }

    #[test]
    fn project_cards_from_result() {
        let result = ResolutionResult {
            projects: vec![
                "images/projects/fixturas_aluminio.jpg".into(),
                "images/projects/2.png".into(),
            ],
            ..ResolutionResult::default()
        };

        let cards = project_cards(&result, "images");

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].image_name, "fixturas_aluminio.jpg");
        assert_eq!(cards[0].src, "images/projects/fixturas_aluminio.jpg");
        assert_eq!(cards[0].info.title_en, "Aluminum Fixtures");
        assert_eq!(cards[1].info.title_en, "Manufacturing Project 2");
    }

    #[test]
    fn project_cards_fall_back_to_placeholders() {
        let cards = project_cards(&ResolutionResult::default(), "images");
        let names: Vec<&str> = cards.iter().map(|c| c.image_name.as_str()).collect();
        assert_eq!(names, PLACEHOLDER_PROJECTS);
        // proyecto-soldadura-* match the welding entry
        assert_eq!(cards[2].info.title_en, "Welding Project");
        assert_eq!(cards[0].info.title_en, "Manufacturing Project 1");
    }

    #[test]
    fn client_logos_from_result() {
        let result = ResolutionResult {
            clients: vec!["images/clients/acme.png".into()],
            ..ResolutionResult::default()
        };
        let logos = client_logos(&result, "images");
        assert_eq!(
            logos,
            vec![ClientLogo {
                logo_name: "acme.png".into(),
                src: "images/clients/acme.png".into(),
                alt: "Cliente 1".into(),
            }]
        );
    }

    #[test]
    fn client_logos_fall_back_to_placeholders() {
        let logos = client_logos(&ResolutionResult::default(), "images");
        assert_eq!(logos.len(), 8);
        assert_eq!(logos[7].logo_name, "cliente-8.png");
        assert_eq!(logos[7].alt, "Cliente 8");
    }

    #[test]
    fn experts_do_not_affect_cards() {
        let result = ResolutionResult {
            experts: vec!["images/experts/alex.jpg".into()],
            ..ResolutionResult::default()
        };
        assert_eq!(project_cards(&result, "images").len(), PLACEHOLDER_PROJECTS.len());
    }
}
