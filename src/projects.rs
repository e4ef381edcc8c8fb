//! Project records for the projects page, plus the category/search
//! predicates that drive the listing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Frontend,
    Backend,
    Fullstack,
    Mobile,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Fullstack => "Full Stack",
            Self::Mobile => "Mobile",
        }
    }
}

/// Category selector for the listing; `All` is the sentinel that matches
/// every project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter pills in display order.
    pub const OPTIONS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Fullstack),
        CategoryFilter::Only(Category::Frontend),
        CategoryFilter::Only(Category::Backend),
        CategoryFilter::Only(Category::Mobile),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static [&'static str],
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub category: Category,
    pub github_link: &'static str,
    pub live_link: &'static str,
    pub has_demo: bool,
    pub featured: bool,
}

impl Project {
    /// Case-insensitive substring match against the title, the joined
    /// description lines, or any technology tag. A hit in any one field is
    /// enough; an empty query matches everything.
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.join(" ").to_lowercase().contains(&query)
            || self
                .technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(&query))
    }
}

static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "LearningPro module 1 (Frontend)",
        description: &[
            "- For a company",
            "- Actor : Administrator, Trainer, Participant.",
            "- Features : Registration, three-level authentication, training and access management.",
            "- Note : Module 1 ~ 'training and monitoring' / Module 2 ~ 'test and evaluation'",
        ],
        image: "/projects/learning_pro_frontend.png",
        technologies: &["React", "TypeScript", "Tailwind CSS", "Axios"],
        category: Category::Frontend,
        github_link: "https://github.com/Harson10/LearningPro_mod1_frontend",
        live_link: "https://github.com/Harson10/LearningPro_mod1_frontend",
        has_demo: true,
        featured: true,
    },
    Project {
        id: 2,
        title: "LearningPro module 1 (Backend)",
        description: &[
            "- For a company",
            "- Actor: Administrator, Trainer, Participant.",
            "- Features: Endpoint security, model implementation, and API configuration.",
            "- Note: Module 1 ~ 'training and monitoring' / Module 2 ~ 'test and evaluation'",
        ],
        image: "/projects/learning_pro_backend.png",
        technologies: &[
            "Node.js",
            "Express",
            "TypeScript",
            "PostgreSQL",
            "Sequelize",
            "Swagger",
            "Axios",
        ],
        category: Category::Backend,
        github_link: "https://github.com/Harson10/LearningPro_mod1_backend",
        live_link: "",
        has_demo: false,
        featured: true,
    },
    Project {
        id: 3,
        title: "Bus Reservation Platform",
        description: &[
            "- Freelance engagement",
            "- Actor: Traveler, Agency operator.",
            "- Features: Trip search, seat selection, booking management.",
        ],
        image: "/projects/bus_reservation.png",
        technologies: &["Next.js", "MySQL", "Prisma"],
        category: Category::Fullstack,
        github_link: "https://github.com/Harson10/bus-reservation",
        live_link: "",
        has_demo: false,
        featured: false,
    },
    Project {
        id: 4,
        title: "Training Management App",
        description: &[
            "- Internship project at Etablissement Ralaivao",
            "- Actor: Administrator, Trainer.",
            "- Features: Session planning, attendance tracking, reporting.",
        ],
        image: "/projects/training_management.png",
        technologies: &["PostgreSQL", "Express", "React", "Node.js"],
        category: Category::Fullstack,
        github_link: "https://github.com/Harson10/training-management",
        live_link: "",
        has_demo: false,
        featured: false,
    },
];

pub fn all_projects() -> &'static [Project] {
    &PROJECTS
}

/// Combined listing predicate: a project is shown iff the category filter
/// passes and the search predicate passes.
pub fn visible_projects(filter: CategoryFilter, query: &str) -> Vec<&'static Project> {
    all_projects()
        .iter()
        .filter(|p| filter.matches(p.category) && p.matches_search(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_without_search_returns_everything() {
        let shown = visible_projects(CategoryFilter::All, "");
        assert_eq!(shown.len(), all_projects().len());
    }

    #[test]
    fn category_filter_only_returns_matching_projects() {
        for option in CategoryFilter::OPTIONS {
            let CategoryFilter::Only(category) = option else {
                continue;
            };
            for project in visible_projects(option, "") {
                assert_eq!(project.category, category);
            }
        }
    }

    #[test]
    fn search_matches_technology_tag() {
        // "Sequelize" appears only in the backend module's tech list, not in
        // its title or description.
        let shown = visible_projects(CategoryFilter::All, "Sequelize");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, 2);
    }

    #[test]
    fn search_is_case_insensitive() {
        let lower = visible_projects(CategoryFilter::All, "learningpro");
        let upper = visible_projects(CategoryFilter::All, "LEARNINGPRO");
        assert_eq!(lower.len(), 2);
        assert_eq!(lower.len(), upper.len());
    }

    #[test]
    fn search_matches_joined_description_lines() {
        let shown = visible_projects(CategoryFilter::All, "seat selection");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, 3);
    }

    #[test]
    fn search_fields_are_ored_not_anded() {
        // "Axios" hits only the technology list of both LearningPro modules;
        // neither title nor description mentions it.
        let shown = visible_projects(CategoryFilter::All, "Axios");
        assert_eq!(shown.len(), 2);
    }

    #[test]
    fn category_and_search_combine_with_and() {
        // "Axios" matches both LearningPro modules, but only one is frontend.
        let shown = visible_projects(CategoryFilter::Only(Category::Frontend), "Axios");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].category, Category::Frontend);
    }

    #[test]
    fn unmatched_filter_yields_empty_set() {
        let shown = visible_projects(CategoryFilter::Only(Category::Mobile), "");
        assert!(shown.is_empty());
    }
}
