//! Project catalog and the filterable project grid.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Web,
    React,
    FullStack,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::React => "react",
            Self::FullStack => "fullstack",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "Web Apps",
            Self::React => "React",
            Self::FullStack => "Full Stack",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(Category),
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Only(Category::Web),
        ProjectFilter::Only(Category::React),
        ProjectFilter::Only(Category::FullStack),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

/// Read-only details shown on a project card and in its modal.
#[derive(Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub github_link: &'static str,
    pub live_demo_link: &'static str,
}

pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "finance",
        title: "Personal Finance Management System",
        category: Category::Web,
        summary: "Income and expense tracking with budgets and charts.",
        description: "Developed comprehensive web-based financial management application for tracking income and expenses. Implemented client-side data persistence using Local Storage API for seamless user experience. Designed responsive user interface following modern UI/UX principles for desktop and mobile. Incorporated data visualization features providing users with financial insights and analytics.",
        features: &[
            "Income and expense tracking",
            "Budget planning and monitoring",
            "Data visualization with charts",
            "Financial goal setting",
            "Export reports to PDF",
            "Responsive design for all devices",
        ],
        technologies: &["HTML5", "CSS3", "JavaScript", "Local Storage API", "Chart.js"],
        github_link: "https://github.com/punithinfant/finance-manager",
        live_demo_link: "#",
    },
    ProjectRecord {
        id: "react-todo",
        title: "React Task Manager",
        category: Category::React,
        summary: "Task manager with categories, priorities and due dates.",
        description: "A modern todo application built with React.js featuring CRUD operations, local storage persistence, and a clean, intuitive user interface. The app includes task categorization, priority levels, and due date management.",
        features: &[
            "Add, edit, and delete tasks",
            "Task categorization and filtering",
            "Priority levels and due dates",
            "Local storage persistence",
            "Responsive design",
            "Dark mode support",
        ],
        technologies: &["React.js", "JavaScript ES6+", "CSS3", "React Hooks", "Local Storage"],
        github_link: "https://github.com/punithinfant/react-todo-app",
        live_demo_link: "#",
    },
    ProjectRecord {
        id: "ecommerce",
        title: "E-commerce Website",
        category: Category::FullStack,
        summary: "Catalog, cart, checkout and an admin dashboard.",
        description: "A full-stack e-commerce solution with complete product catalog, shopping cart functionality, user authentication, and payment integration. Built with PHP and MySQL for robust backend operations.",
        features: &[
            "Product catalog with search and filters",
            "Shopping cart and checkout process",
            "User registration and authentication",
            "Order management system",
            "Admin dashboard",
            "Payment gateway integration",
        ],
        technologies: &["PHP", "MySQL", "Bootstrap", "JavaScript", "PayPal API"],
        github_link: "https://github.com/punithinfant/ecommerce-website",
        live_demo_link: "#",
    },
    ProjectRecord {
        id: "weather",
        title: "Weather Forecast App",
        category: Category::Web,
        summary: "Current conditions and forecasts for any city.",
        description: "A responsive weather application that provides current weather conditions and forecasts for any location worldwide. Features include location-based weather, detailed forecasts, and beautiful weather animations.",
        features: &[
            "Current weather conditions",
            "7-day weather forecast",
            "Location-based weather detection",
            "Search for any city worldwide",
            "Weather animations and icons",
            "Responsive design",
        ],
        technologies: &["JavaScript", "OpenWeatherMap API", "CSS3", "Geolocation API"],
        github_link: "https://github.com/punithinfant/weather-app",
        live_demo_link: "#",
    },
    ProjectRecord {
        id: "portfolio",
        title: "Personal Portfolio Website",
        category: Category::Web,
        summary: "This site: responsive, themed and animated.",
        description: "This responsive portfolio website showcasing my projects, skills, and professional experience. Built with modern web technologies and optimized for performance and accessibility.",
        features: &[
            "Responsive design",
            "Dark mode support",
            "Smooth animations",
            "Contact form",
            "Project showcase",
            "SEO optimized",
        ],
        technologies: &["HTML5", "CSS3", "JavaScript", "AOS Library", "Responsive Design"],
        github_link: "https://github.com/punithinfant/portfolio",
        live_demo_link: "#",
    },
    ProjectRecord {
        id: "lms",
        title: "Learning Management System",
        category: Category::FullStack,
        summary: "Courses, enrollment, quizzes and progress tracking.",
        description: "A comprehensive educational platform with course management, user authentication, progress tracking, and administrative features. Designed for educational institutions and online learning providers.",
        features: &[
            "Course creation and management",
            "Student enrollment system",
            "Progress tracking and analytics",
            "Quiz and assignment system",
            "Discussion forums",
            "Administrative dashboard",
        ],
        technologies: &["PHP", "MySQL", "Bootstrap", "jQuery", "Chart.js"],
        github_link: "https://github.com/punithinfant/lms-platform",
        live_demo_link: "#",
    },
];

pub fn find_project(id: &str) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|project| project.id == id)
}

/// Display state of one card while filters fade it in and out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVisibility {
    #[default]
    Shown,
    Appearing {
        remaining: Duration,
    },
    Hiding {
        remaining: Duration,
    },
    Hidden,
}

impl CardVisibility {
    /// Whether the card takes up layout space.
    pub fn is_displayed(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_opaque(self) -> bool {
        matches!(self, Self::Shown)
    }

    fn show(self, delay: Duration) -> Self {
        match self {
            Self::Shown | Self::Appearing { .. } => self,
            Self::Hiding { .. } | Self::Hidden => Self::Appearing { remaining: delay },
        }
    }

    fn hide(self, delay: Duration) -> Self {
        match self {
            Self::Hidden | Self::Hiding { .. } => self,
            Self::Shown | Self::Appearing { .. } => Self::Hiding { remaining: delay },
        }
    }

    fn advance(self, elapsed: Duration) -> Self {
        match self {
            Self::Appearing { remaining } if remaining <= elapsed => Self::Shown,
            Self::Appearing { remaining } => Self::Appearing {
                remaining: remaining - elapsed,
            },
            Self::Hiding { remaining } if remaining <= elapsed => Self::Hidden,
            Self::Hiding { remaining } => Self::Hiding {
                remaining: remaining - elapsed,
            },
            settled => settled,
        }
    }
}

/// The project grid with its active filter. Card order follows [`PROJECTS`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectGallery {
    filter: ProjectFilter,
    cards: Vec<CardVisibility>,
    appear_delay: Duration,
    hide_delay: Duration,
}

impl ProjectGallery {
    pub fn new(appear_delay: Duration, hide_delay: Duration) -> Self {
        Self {
            filter: ProjectFilter::All,
            cards: vec![CardVisibility::Shown; PROJECTS.len()],
            appear_delay,
            hide_delay,
        }
    }

    pub fn apply_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
        for (card, project) in self.cards.iter_mut().zip(PROJECTS) {
            *card = if filter.matches(project.category) {
                card.show(self.appear_delay)
            } else {
                card.hide(self.hide_delay)
            };
        }
    }

    pub fn advance(&mut self, elapsed: Duration) {
        for card in &mut self.cards {
            *card = card.advance(elapsed);
        }
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn cards(&self) -> impl Iterator<Item = (&'static ProjectRecord, CardVisibility)> + '_ {
        PROJECTS.iter().zip(self.cards.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> ProjectGallery {
        ProjectGallery::new(Duration::from_millis(100), Duration::from_millis(300))
    }

    fn visibility(gallery: &ProjectGallery, id: &str) -> CardVisibility {
        gallery
            .cards()
            .find(|(project, _)| project.id == id)
            .map(|(_, card)| card)
            .expect("project in catalog")
    }

    #[test]
    fn lookup_finds_known_ids_only() {
        assert_eq!(find_project("weather").map(|p| p.title), Some("Weather Forecast App"));
        assert!(find_project("blockchain").is_none());
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (index, project) in PROJECTS.iter().enumerate() {
            assert!(PROJECTS[index + 1..].iter().all(|other| other.id != project.id));
        }
    }

    #[test]
    fn filtering_fades_out_then_removes_non_matching_cards() {
        let mut gallery = gallery();
        gallery.apply_filter(ProjectFilter::Only(Category::React));

        let hiding = visibility(&gallery, "weather");
        assert!(hiding.is_displayed());
        assert!(!hiding.is_opaque());
        assert!(visibility(&gallery, "react-todo").is_opaque());

        gallery.advance(Duration::from_millis(300));
        assert!(!visibility(&gallery, "weather").is_displayed());
    }

    #[test]
    fn matching_cards_reappear_after_delay() {
        let mut gallery = gallery();
        gallery.apply_filter(ProjectFilter::Only(Category::FullStack));
        gallery.advance(Duration::from_millis(300));

        gallery.apply_filter(ProjectFilter::All);
        let card = visibility(&gallery, "finance");
        assert!(card.is_displayed());
        assert!(!card.is_opaque());

        gallery.advance(Duration::from_millis(100));
        assert!(visibility(&gallery, "finance").is_opaque());
        assert_eq!(gallery.filter(), ProjectFilter::All);
    }
}
