use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the five named regions of the single-page layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    /// Declared document order; the scroll tracker scans in this order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// DOM id of the section element.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section id: {0:?}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Project {
    /// Path segment of the project's detail page, when it has one.
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
    /// Screenshot paths in display order; empty when the card has none.
    pub images: &'static [&'static str],
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct SocialLinks {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
}

/// Content of a secondary, statically rendered project page.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ProjectDetail {
    pub slug: &'static str,
    pub headline: &'static str,
    pub subtitle: &'static str,
    pub summary: &'static str,
    pub key_features: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    pub images: &'static [&'static str],
    pub live_url: &'static str,
}

const SKILLS: &[Skill] = &[
    Skill { name: "Node.js", category: "Backend" },
    Skill { name: "TypeScript", category: "Language" },
    Skill { name: "React", category: "Frontend" },
    Skill { name: "Next.js", category: "Framework" },
    Skill { name: "NestJS", category: "Framework" },
    Skill { name: "Golang", category: "Language" },
    Skill { name: "GraphQL", category: "API" },
    Skill { name: "gRPC", category: "API" },
    Skill { name: "MySQL", category: "Database" },
    Skill { name: "Docker", category: "DevOps" },
    Skill { name: "TailwindCSS", category: "Styling" },
    Skill { name: "Framer Motion", category: "Animation" },
    Skill { name: "Zustand", category: "State Management" },
];

const EXPERIENCES: &[Experience] = &[Experience {
    title: "Software Engineer Intern",
    company: "Telkomsel",
    location: "South Jakarta",
    period: "Feb 2024 — Jun 2024",
    highlights: &[
        "Node.js Boilerplate Development",
        "Microservices Architecture with REST APIs, gRPC, and GraphQL",
        "NestJS Framework Implementation",
        "Test-Driven Development with Jest",
        "CI/CD Pipeline Configuration",
    ],
}];

const CAFE_CARD_IMAGES: &[&str] = &[
    "/pointCafeWebsiteOrder/iPhone-13-PRO-point-cafe-website-order.vercel.app.svg",
    "/pointCafeWebsiteOrder/iPhone-13-PRO-point-cafe-website-order.vercel.app (1).svg",
    "/pointCafeWebsiteOrder/iPhone-13-PRO-point-cafe-website-order.vercel.app (2).svg",
    "/pointCafeWebsiteOrder/iPhone-13-PRO-point-cafe-website-order.vercel.app (3).svg",
    "/pointCafeWebsiteOrder/iPhone-13-PRO-point-cafe-website-order.vercel.app (4).svg",
    "/pointCafeWebsiteOrder/iPhone-13-PRO-point-cafe-website-order.vercel.app (5).svg",
];

const CAFE_GALLERY_IMAGES: &[&str] = &[
    "/pointCafeWebsiteOrder/iPhone-13-PRO-point-cafe-website-order.vercel.app.svg",
    "/pointCafeWebsiteOrder/iPhone-13-PRO-point-cafe-website-order.vercel.app (1).svg",
    "/pointCafeWebsiteOrder/iPhone-13-PRO-point-cafe-website-order.vercel.app (2).svg",
    "/pointCafeWebsiteOrder/iPhone-13-PRO-point-cafe-website-order.vercel.app (3).svg",
    "/pointCafeWebsiteOrder/iPhone-13-PRO-point-cafe-website-order.vercel.app (4).svg",
    "/pointCafeWebsiteOrder/iPhone-13-PRO-point-cafe-website-order.vercel.app (5).svg",
    "/pointCafeWebsiteOrder/iPhone-13-PRO-point-cafe-website-order.vercel.app (6).svg",
    "/pointCafeWebsiteOrder/iPhone-13-PRO-point-cafe-website-order.vercel.app (7).svg",
    "/pointCafeWebsiteOrder/iPhone-13-PRO-point-cafe-website-order.vercel.app (8).svg",
];

const PROJECTS: &[Project] = &[
    Project {
        slug: "spotify-global-map",
        title: "Spotify Global Map",
        description: "An interactive web application that displays a world map where users can click on countries to explore their Spotify Top 50 charts. Features mood-based filtering, track previews, and enhanced animations with floating musical notes.",
        tech: &[
            "Next.js 14",
            "TypeScript",
            "TailwindCSS",
            "Framer Motion",
            "Zustand",
            "Spotify Web API",
        ],
        live_url: Some("https://spotify-global-map.vercel.app/"),
        source_url: Some("https://github.com/rizkyriyadi/spotify-global-map"),
        images: &[],
        featured: true,
    },
    Project {
        slug: "3pointcafe",
        title: "3Point Cafe & Resto",
        description: "A comprehensive online ordering system for 3Point Cafe & Resto, featuring seamless customer experience with menu browsing, order customization, secure payments, user authentication, voucher system, and membership benefits.",
        tech: &[
            "Next.js",
            "TypeScript",
            "TailwindCSS",
            "Xendit Payment",
            "Authentication",
            "Order Tracking",
        ],
        live_url: Some("https://point-cafe-website-order.vercel.app/"),
        source_url: None,
        images: CAFE_CARD_IMAGES,
        featured: true,
    },
];

const SOCIAL_LINKS: SocialLinks = SocialLinks {
    github: "https://github.com/rizkyriyadi",
    linkedin: "https://linkedin.com/in/rizkyriyadi",
    email: "mailto:rizkyriady16@gmail.com",
};

const PROJECT_DETAILS: &[ProjectDetail] = &[ProjectDetail {
    slug: "3pointcafe",
    headline: "3Point Cafe",
    subtitle: "& Resto",
    summary: "A comprehensive online ordering system for 3Point Cafe & Resto, featuring real-time menu management, secure payment processing, and an intuitive customer experience.",
    key_features: &[
        "Real-time menu browsing and ordering",
        "Secure payment integration with Stripe",
        "User authentication and order history",
        "Admin dashboard for menu management",
        "Responsive design for all devices",
        "Order tracking and notifications",
    ],
    tech_stack: &[
        "Next.js",
        "TypeScript",
        "Tailwind CSS",
        "Prisma",
        "PostgreSQL",
        "NextAuth.js",
        "Stripe",
        "Vercel",
        "React Hook Form",
        "Zustand",
    ],
    images: CAFE_GALLERY_IMAGES,
    live_url: "https://point-cafe-website-order.vercel.app/",
}];

pub fn skills() -> &'static [Skill] {
    SKILLS
}

pub fn experiences() -> &'static [Experience] {
    EXPERIENCES
}

pub fn projects() -> &'static [Project] {
    PROJECTS
}

pub fn social_links() -> &'static SocialLinks {
    &SOCIAL_LINKS
}

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

/// Skills grouped by category. Categories appear in order of first use;
/// skills keep their declared order inside a category.
pub fn skills_by_category() -> Vec<(&'static str, Vec<&'static Skill>)> {
    let mut groups: Vec<(&'static str, Vec<&'static Skill>)> = Vec::new();
    for skill in SKILLS {
        match groups.iter_mut().find(|(cat, _)| *cat == skill.category) {
            Some((_, members)) => members.push(skill),
            None => groups.push((skill.category, vec![skill])),
        }
    }
    groups
}

pub fn project_detail(slug: &str) -> Option<&'static ProjectDetail> {
    PROJECT_DETAILS.iter().find(|d| d.slug == slug)
}

/// Full content snapshot handed to the page scripts.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ContentSnapshot {
    pub sections: [SectionId; 5],
    pub skills: &'static [Skill],
    pub experiences: &'static [Experience],
    pub projects: &'static [Project],
    pub social: &'static SocialLinks,
    pub details: &'static [ProjectDetail],
}

pub fn snapshot() -> ContentSnapshot {
    ContentSnapshot {
        sections: SectionId::ALL,
        skills: SKILLS,
        experiences: EXPERIENCES,
        projects: PROJECTS,
        social: &SOCIAL_LINKS,
        details: PROJECT_DETAILS,
    }
}
