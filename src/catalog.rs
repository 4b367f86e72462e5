//! Static project catalog backing the portfolio modal.

use crate::models::{ProjectLink, ProjectRecord};

const fn primary(label: &'static str) -> ProjectLink {
    ProjectLink {
        label,
        url: "#",
        is_primary: true,
    }
}

const fn secondary(label: &'static str) -> ProjectLink {
    ProjectLink {
        label,
        url: "#",
        is_primary: false,
    }
}

static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "ecommerce",
        title: "E-Commerce Platform",
        description: "A comprehensive e-commerce solution built with modern technologies. \
            Features include advanced product filtering, secure payment processing, inventory \
            management, and an intuitive admin dashboard. The platform handles high traffic loads \
            and provides excellent user experience across all devices.",
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "Redis", "AWS"],
        glyph: "🛒",
        links: &[primary("Live Demo"), secondary("GitHub")],
    },
    ProjectRecord {
        id: "banking",
        title: "Mobile Banking App",
        description: "A secure mobile banking application with biometric authentication, \
            real-time transactions, and comprehensive account management. Built with React Native \
            for cross-platform compatibility and integrated with secure banking APIs.",
        technologies: &["React Native", "Firebase", "TypeScript", "Biometric Auth", "Redux"],
        glyph: "🏦",
        links: &[primary("App Store"), secondary("Case Study")],
    },
    ProjectRecord {
        id: "dashboard",
        title: "AI Analytics Dashboard",
        description: "Real-time analytics dashboard with machine learning insights and \
            interactive data visualization. Features predictive analytics, custom reporting, and \
            seamless integration with various data sources.",
        technologies: &["Vue.js", "Python", "D3.js", "TensorFlow", "PostgreSQL", "Docker"],
        glyph: "📊",
        links: &[primary("Live Demo"), secondary("GitHub")],
    },
    ProjectRecord {
        id: "portfolio",
        title: "Creative Portfolio",
        description: "Modern portfolio design with interactive animations and immersive user \
            experience. Created with attention to detail and optimized for performance across all \
            devices.",
        technologies: &["Figma", "Framer", "After Effects", "CSS Animations"],
        glyph: "🎨",
        links: &[primary("View Design"), secondary("Prototype")],
    },
    ProjectRecord {
        id: "social",
        title: "Social Media Platform",
        description: "Full-stack social media platform with real-time messaging, content \
            sharing, and advanced user engagement features. Built for scalability and performance.",
        technologies: &["Next.js", "Socket.io", "PostgreSQL", "Redis", "AWS S3"],
        glyph: "💬",
        links: &[primary("Live Demo"), secondary("GitHub")],
    },
    ProjectRecord {
        id: "fitness",
        title: "Fitness Tracker",
        description: "Comprehensive fitness tracking application with workout plans, progress \
            analytics, and social features. Includes integration with wearable devices and health \
            APIs.",
        technologies: &["Flutter", "Dart", "SQLite", "Health APIs", "Charts"],
        glyph: "💪",
        links: &[primary("Download"), secondary("Features")],
    },
];

/// Look up a project by its `data-project` identifier.
pub fn lookup(id: &str) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|record| record.id == id)
}

/// All catalog entries in declaration order.
pub fn projects() -> impl Iterator<Item = &'static ProjectRecord> {
    PROJECTS.iter()
}
