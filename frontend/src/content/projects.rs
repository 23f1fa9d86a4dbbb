#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    FullStack,
    WebApp,
    Mobile,
    DataScience,
    WebPlatform,
    Blockchain,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::FullStack,
        Category::WebApp,
        Category::Mobile,
        Category::DataScience,
        Category::WebPlatform,
        Category::Blockchain,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::FullStack => "Full Stack",
            Category::WebApp => "Web App",
            Category::Mobile => "Mobile",
            Category::DataScience => "Data Science",
            Category::WebPlatform => "Web Platform",
            Category::Blockchain => "Blockchain",
        }
    }
}

/// Gallery filter. `All` shows every project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order, `All` first.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub category: Category,
    pub date: &'static str,
    pub github: &'static str,
    pub live: &'static str,
    pub featured: bool,
}

pub static PROJECTS: [ProjectRecord; 6] = [
    ProjectRecord {
        id: 1,
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with React, Node.js, and PostgreSQL. Features include user authentication, payment processing, inventory management, and admin dashboard.",
        image: "/assets/project1.png",
        technologies: &["React", "Node.js", "PostgreSQL", "Stripe", "AWS"],
        category: Category::FullStack,
        date: "2024",
        github: "#",
        live: "#",
        featured: true,
    },
    ProjectRecord {
        id: 2,
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.",
        image: "/assets/project2.jpg",
        technologies: &["Next.js", "TypeScript", "Prisma", "Socket.io"],
        category: Category::WebApp,
        date: "2024",
        github: "#",
        live: "#",
        featured: true,
    },
    ProjectRecord {
        id: 3,
        title: "Mobile Fitness App",
        description: "Cross-platform mobile app for fitness tracking with workout plans, progress monitoring, and social features.",
        image: "/api/placeholder/600/400",
        technologies: &["React Native", "Firebase", "Redux", "Expo"],
        category: Category::Mobile,
        date: "2023",
        github: "#",
        live: "#",
        featured: false,
    },
    ProjectRecord {
        id: 4,
        title: "AI-Powered Analytics Dashboard",
        description: "Business intelligence dashboard with AI-driven insights, data visualization, and predictive analytics.",
        image: "/api/placeholder/600/400",
        technologies: &["Vue.js", "Python", "TensorFlow", "D3.js"],
        category: Category::DataScience,
        date: "2023",
        github: "#",
        live: "#",
        featured: false,
    },
    ProjectRecord {
        id: 5,
        title: "Real Estate Platform",
        description: "Modern real estate platform with property listings, virtual tours, and mortgage calculator.",
        image: "/api/placeholder/600/400",
        technologies: &["React", "GraphQL", "MongoDB", "Mapbox"],
        category: Category::WebPlatform,
        date: "2023",
        github: "#",
        live: "#",
        featured: false,
    },
    ProjectRecord {
        id: 6,
        title: "Blockchain Voting System",
        description: "Secure voting system built on blockchain technology ensuring transparency and immutability.",
        image: "/api/placeholder/600/400",
        technologies: &["Solidity", "Web3.js", "Ethereum", "React"],
        category: Category::Blockchain,
        date: "2022",
        github: "#",
        live: "#",
        featured: false,
    },
];

/// Keeps the projects matching `filter`, in their original order.
pub fn filter_projects(projects: &[ProjectRecord], filter: CategoryFilter) -> Vec<&ProjectRecord> {
    projects
        .iter()
        .filter(|project| filter.matches(project.category))
        .collect()
}

/// Splits a filtered list into (featured, other). Both halves keep list order.
pub fn partition_featured<'a>(
    filtered: &[&'a ProjectRecord],
) -> (Vec<&'a ProjectRecord>, Vec<&'a ProjectRecord>) {
    filtered.iter().copied().partition(|project| project.featured)
}

/// Leading technologies for compact cards plus how many were left out.
pub fn technology_preview(technologies: &'static [&'static str], limit: usize) -> (&'static [&'static str], usize) {
    let shown = technologies.len().min(limit);
    (&technologies[..shown], technologies.len() - shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(projects: &[&ProjectRecord]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn fixture_ids_are_unique() {
        let unique: HashSet<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(unique.len(), PROJECTS.len());
    }

    #[test]
    fn all_returns_every_project_in_order() {
        let filtered = filter_projects(&PROJECTS, CategoryFilter::All);
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5, 6]);

        let (featured, _) = partition_featured(&filtered);
        assert_eq!(featured.len(), 2);
    }

    #[test]
    fn mobile_returns_only_the_fitness_app() {
        let filtered = filter_projects(&PROJECTS, CategoryFilter::Only(Category::Mobile));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Mobile Fitness App");
    }

    #[test]
    fn every_category_yields_its_exact_subsequence() {
        for category in Category::ALL {
            let filtered = filter_projects(&PROJECTS, CategoryFilter::Only(category));
            let expected: Vec<u32> = PROJECTS
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id)
                .collect();
            assert_eq!(ids(&filtered), expected, "category {}", category.label());
        }
    }

    #[test]
    fn unmatched_category_is_empty_not_an_error() {
        let projects = &PROJECTS[..2];
        let filtered = filter_projects(projects, CategoryFilter::Only(Category::Blockchain));
        assert!(filtered.is_empty());

        let (featured, other) = partition_featured(&filtered);
        assert!(featured.is_empty());
        assert!(other.is_empty());
    }

    #[test]
    fn partitions_cover_the_filtered_list_without_overlap() {
        for filter in CategoryFilter::options() {
            let filtered = filter_projects(&PROJECTS, filter);
            let (featured, other) = partition_featured(&filtered);

            assert!(featured.iter().all(|p| p.featured));
            assert!(other.iter().all(|p| !p.featured));
            assert_eq!(featured.len() + other.len(), filtered.len());

            let mut expected_featured = ids(&filtered);
            expected_featured.retain(|id| featured.iter().any(|p| p.id == *id));
            let mut expected_other = ids(&filtered);
            expected_other.retain(|id| other.iter().any(|p| p.id == *id));

            assert_eq!(ids(&featured), expected_featured);
            assert_eq!(ids(&other), expected_other);
        }
    }

    const fn record(id: u32, category: Category, featured: bool) -> ProjectRecord {
        ProjectRecord {
            id,
            title: "",
            description: "",
            image: "",
            technologies: &[],
            category,
            date: "",
            github: "",
            live: "",
            featured,
        }
    }

    static MIXED: [ProjectRecord; 7] = [
        record(10, Category::WebApp, false),
        record(11, Category::Mobile, true),
        record(12, Category::WebApp, true),
        record(13, Category::WebApp, false),
        record(14, Category::Mobile, false),
        record(15, Category::WebApp, true),
        record(16, Category::WebApp, false),
    ];

    #[test]
    fn category_filter_keeps_list_order_across_several_matches() {
        let filtered = filter_projects(&MIXED, CategoryFilter::Only(Category::WebApp));
        assert_eq!(ids(&filtered), vec![10, 12, 13, 15, 16]);

        let (featured, other) = partition_featured(&filtered);
        assert_eq!(ids(&featured), vec![12, 15]);
        assert_eq!(ids(&other), vec![10, 13, 16]);
    }

    #[test]
    fn partition_of_full_list_keeps_both_halves_in_order() {
        let filtered = filter_projects(&MIXED, CategoryFilter::All);
        let (featured, other) = partition_featured(&filtered);
        assert_eq!(ids(&featured), vec![11, 12, 15]);
        assert_eq!(ids(&other), vec![10, 13, 14, 16]);

        let (featured, other) = partition_featured(&filter_projects(&PROJECTS, CategoryFilter::All));
        assert_eq!(ids(&featured), vec![1, 2]);
        assert_eq!(ids(&other), vec![3, 4, 5, 6]);
    }

    #[test]
    fn options_start_with_all() {
        let labels: Vec<&str> = CategoryFilter::options().map(CategoryFilter::label).collect();
        assert_eq!(
            labels,
            vec!["All", "Full Stack", "Web App", "Mobile", "Data Science", "Web Platform", "Blockchain"]
        );
    }

    #[test]
    fn technology_preview_counts_hidden_entries() {
        let (shown, hidden) = technology_preview(PROJECTS[0].technologies, 3);
        assert_eq!(shown, &["React", "Node.js", "PostgreSQL"]);
        assert_eq!(hidden, 2);

        let (shown, hidden) = technology_preview(&["Rust"], 3);
        assert_eq!(shown, &["Rust"]);
        assert_eq!(hidden, 0);
    }
}
