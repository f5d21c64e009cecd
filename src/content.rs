//! Site content - the hand-written records the page renders.
//!
//! Everything here is a compile-time constant. The views never mutate
//! content; the only runtime state is scroll position, reveal latches, and
//! the modal/drawer/route flags held in [`crate::state`].
//!
//! Asset paths are resolved relative to the site root and outbound URLs are
//! opaque strings - nothing here is parsed or validated.

use crate::types::SectionId;

// =============================================================================
// Record types
// =============================================================================

/// A navigation entry: label plus target section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Cover image path, relative to the site root.
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub repo_url: Option<&'static str>,
    pub demo_url: Option<&'static str>,
    /// Detail-page path. Also the route anchor for the in-app detail view.
    pub path: &'static str,
    /// Featured projects span the full grid width.
    pub featured: bool,
}

/// One pillar of the skills section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillPillar {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Index into the theme's accent rotation.
    pub accent: usize,
}

/// An outbound profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// A milestone row in the education section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationHighlight {
    pub glyph: char,
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline figure in the hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroStat {
    pub value: &'static str,
    pub suffix: &'static str,
    pub caption: &'static str,
}

/// A body section of a project detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

/// The static detail page behind a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDetail {
    pub intro: &'static str,
    pub sections: &'static [DetailSection],
    pub links: &'static [SocialLink],
}

// =============================================================================
// Content
// =============================================================================

pub const NAME: &str = "JOSE ARBELAEZ";
pub const LOGO: &str = "JA.";
pub const BADGE: &str = "Data Science & Engineering student";
pub const TAGLINE: &str = "I build AI models and quantitative strategies that \
turn market data into value. My specialty: the intersection of deep learning \
and finance.";

/// CV asset path, relative to the site root.
pub const CV_PATH: &str = "projects/internship-resume-2025.pdf";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        target: SectionId::Home,
    },
    NavItem {
        label: "Projects",
        target: SectionId::Projects,
    },
    NavItem {
        label: "Education",
        target: SectionId::Education,
    },
];

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat {
        value: "8.5",
        suffix: "/10",
        caption: "GRADE AVERAGE",
    },
    HeroStat {
        value: "3",
        suffix: "+",
        caption: "YEARS OF TRAINING",
    },
    HeroStat {
        value: "5",
        suffix: "+",
        caption: "FEATURED PROJECTS",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Generative AI: Score-Based Diffusion Models",
        description: "From-scratch implementation of stochastic differential \
equation (SDE) diffusion models for image generation, replicating research \
papers and demonstrating a deep understanding of neural network architecture.",
        image: "projects/diffusion-sde.jpg",
        tags: &["Python", "PyTorch", "Deep Learning", "Generative AI", "SDE"],
        repo_url: Some("https://github.com/josearbelaez/diffusion-sde"),
        demo_url: None,
        path: "projects/ai-diffusion",
        featured: true,
    },
    Project {
        title: "Portfolio Benchmarking Platform",
        description: "Design and development of a robust platform for \
evaluating and comparing AI-driven investment strategies. Key to our lead in \
the UAM Investors League.",
        image: "projects/benchmarking-preview.jpg",
        tags: &[
            "Python",
            "Quantitative Finance",
            "Streamlit",
            "Optimization",
            "Backtesting",
        ],
        repo_url: Some("https://github.com/trentisiete/backtester_fondos"),
        demo_url: Some("https://diosfamiliafe.streamlit.app/"),
        path: "projects/benchmarking",
        featured: false,
    },
    Project {
        title: "Workshop Services Platform",
        description: "Full-stack development of an end-to-end solution for a \
network of repair shops in Madrid: a customer-facing app plus an admin panel, \
in collaboration with Grupo Driver.",
        image: "projects/autocenter/dashboard.jpg",
        tags: &[
            "React",
            "Astro",
            "TypeScript",
            "Node.js",
            "REST API",
            "Databases",
        ],
        repo_url: None,
        demo_url: None,
        path: "projects/autocenter",
        featured: false,
    },
];

pub const PROJECT_DETAILS: &[ProjectDetail] = &[
    ProjectDetail {
        intro: "A ground-up implementation of score-based generative modeling \
through stochastic differential equations, built to understand the machinery \
rather than to wrap a library.",
        sections: &[
            DetailSection {
                heading: "Project Overview",
                paragraphs: &[
                    "Diffusion models learn to reverse a gradual noising \
process. The forward SDE corrupts training images into Gaussian noise; a \
neural network estimates the score of the perturbed data distribution, and \
integrating the reverse-time SDE with that estimate generates new samples.",
                    "The implementation covers the full pipeline: the noise \
schedule, a U-Net score network, exponential moving averages of weights, and \
predictor-corrector samplers.",
                ],
            },
            DetailSection {
                heading: "Mathematical Foundations",
                paragraphs: &[
                    "The forward process is a variance-preserving SDE whose \
marginals stay Gaussian, so denoising score matching gives a closed-form \
training target. The reverse process follows Anderson's time-reversal \
result, which only requires the score of the marginal densities.",
                ],
            },
            DetailSection {
                heading: "Results & Applications",
                paragraphs: &[
                    "Unconditional generation: from pure noise to coherent \
samples on standard image benchmarks.",
                    "Conditional generation: classifier guidance steers \
sampling toward a requested class without retraining the score network.",
                    "Image imputation: the same model restores masked image \
regions by conditioning the reverse diffusion on the observed pixels.",
                ],
            },
        ],
        links: &[
            SocialLink {
                label: "Repository",
                url: "https://github.com/trentisiete/DiffusionImaGen",
            },
            SocialLink {
                label: "Technical report",
                url: "projects/diffusion-sde-report.pdf",
            },
        ],
    },
    ProjectDetail {
        intro: "A benchmarking platform for portfolio management: backtest \
investment strategies against each other under one consistent evaluation \
harness.",
        sections: &[
            DetailSection {
                heading: "Project Overview",
                paragraphs: &[
                    "Strategies are plugged into a common backtesting loop \
that replays historical market data, tracks positions and costs, and \
produces comparable risk/return summaries: annualized return, volatility, \
drawdown, and Sharpe.",
                ],
            },
            DetailSection {
                heading: "What It Enabled",
                paragraphs: &[
                    "The platform became the decision tool for an investment \
league team: candidate allocations were benchmarked before committing, and \
the league portfolio was rebalanced on the evidence.",
                ],
            },
        ],
        links: &[
            SocialLink {
                label: "Repository",
                url: "https://github.com/trentisiete/backtester_fondos",
            },
            SocialLink {
                label: "Live demo",
                url: "https://diosfamiliafe.streamlit.app/",
            },
        ],
    },
    ProjectDetail {
        intro: "A services platform for a Madrid repair-shop network, built \
end to end with a partner company: customers book and track jobs, staff \
manage them from an admin panel.",
        sections: &[
            DetailSection {
                heading: "Project Overview",
                paragraphs: &[
                    "The customer app covers appointment booking, service \
history and notifications; the admin panel covers scheduling, workload and \
reporting. Both sit on a shared REST API over a relational database.",
                ],
            },
            DetailSection {
                heading: "Collaboration",
                paragraphs: &[
                    "Developed in collaboration with Grupo Driver against \
real workshop processes, with iterations driven by staff feedback.",
                ],
            },
        ],
        links: &[],
    },
];

pub const DEGREE_TITLE: &str = "BSc in Data Science and Engineering";
pub const DEGREE_SCHOOL: &str = "Universidad Autonoma de Madrid (UAM)";
pub const DEGREE_YEARS: &str = "2022 - 2026 (expected)";
pub const DEGREE_BODY: &[&str] = &[
    "My training goes beyond using libraries; it centers on the mathematical, \
statistical and computational foundations underpinning artificial \
intelligence. The curriculum runs from algorithmics and systems architecture \
to advanced machine learning modeling.",
    "That focus gives me the ability not just to apply existing techniques, \
but to understand, critique and build complex models from first principles, \
as my personal projects demonstrate.",
];
pub const DEGREE_GPA: &str = "Current grade average (2024-2025): 8.5 / 10";

pub const EDUCATION_HIGHLIGHTS: &[EducationHighlight] = &[
    EducationHighlight {
        glyph: '▲',
        title: "UAM Investors League participant",
        description: "Active portfolio management and quantitative models in \
a live, competitive market environment.",
    },
    EducationHighlight {
        glyph: '◆',
        title: "Automated Portfolio Management course",
        description: "Design and implementation of algorithmic trading \
strategies and automated financial systems.",
    },
    EducationHighlight {
        glyph: '●',
        title: "Board member, IT Security Association",
        description: "Leadership and management role (2023-2024), building \
organizational responsibility and cybersecurity practice.",
    },
];

pub const SKILL_PILLARS: &[SkillPillar] = &[
    SkillPillar {
        title: "Data Science & Machine Learning",
        description: "The core pillar of my degree: the full life cycle of \
machine learning models, from data preparation and visualization to building \
and validating complex algorithms.",
        tags: &[
            "Machine Learning",
            "Deep Learning",
            "Generative AI",
            "Diffusion Models",
            "Time Series",
            "Inferential Statistics",
            "PyTorch",
            "TensorFlow",
            "Scikit-learn",
            "Pandas",
            "Matplotlib",
            "Plotly",
        ],
        accent: 0,
    },
    SkillPillar {
        title: "Data Engineering & Full-Stack Development",
        description: "The engineering to build the infrastructure data \
products stand on: database design, robust APIs, and interactive web and \
mobile applications.",
        tags: &[
            "Python",
            "JavaScript",
            "TypeScript",
            "React",
            "Astro",
            "React Native",
            "Node.js",
            "RESTful APIs",
            "Database Management",
            "SQL",
            "Git",
            "GitHub",
        ],
        accent: 1,
    },
    SkillPillar {
        title: "Quantitative & Financial Analysis",
        description: "Statistics and modeling applied to financial markets: \
backtesting platforms, portfolio management, and algorithmic strategies \
where my data work meets finance.",
        tags: &[
            "Quantitative Finance",
            "Financial Modeling",
            "Portfolio Management",
            "Benchmarking",
            "Algorithmic Strategies",
            "MQL5",
            "NumPy",
            "R",
            "Matlab",
        ],
        accent: 2,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        url: "https://linkedin.com/in/jose-a-082b3a195/",
    },
    SocialLink {
        label: "GitHub",
        url: "https://github.com/trentisiete",
    },
    SocialLink {
        label: "Email",
        url: "mailto:jose.ancizar.667@gmail.com",
    },
];

/// Contact links shown inside the modal.
pub const CONTACT_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Personal email",
        url: "mailto:jose.ancizar.667@gmail.com",
    },
    SocialLink {
        label: "University email",
        url: "mailto:jose.arbelaez@estudiante.uam.es",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://linkedin.com/in/jose-a-082b3a195/",
    },
];

/// Detail record for a project index, if one exists.
pub fn project_detail(index: usize) -> Option<&'static ProjectDetail> {
    PROJECT_DETAILS.get(index)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_are_known_sections() {
        for item in NAV_ITEMS {
            assert!(SectionId::ALL.contains(&item.target));
        }
    }

    #[test]
    fn test_every_project_has_a_detail_page() {
        assert_eq!(PROJECTS.len(), PROJECT_DETAILS.len());
        for (i, _) in PROJECTS.iter().enumerate() {
            assert!(project_detail(i).is_some());
        }
        assert!(project_detail(PROJECTS.len()).is_none());
    }

    #[test]
    fn test_single_featured_project_leads() {
        let featured: Vec<usize> = PROJECTS
            .iter()
            .enumerate()
            .filter(|(_, p)| p.featured)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(featured, vec![0]);
    }

    #[test]
    fn test_pillar_accents_are_distinct() {
        let mut accents: Vec<usize> = SKILL_PILLARS.iter().map(|p| p.accent).collect();
        accents.sort_unstable();
        accents.dedup();
        assert_eq!(accents.len(), SKILL_PILLARS.len());
    }
}
