// Static content catalog for the portfolio
//
// Every string and figure the views render lives here as a structured
// record, so rendering code never assembles content inline. Demo
// configurations and notification copy are fixed data, not markup.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::navigation::SectionId;

/// Who the portfolio is about
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub bio: &'static [&'static str],
}

pub fn profile() -> Profile {
    Profile {
        name: "Alex Morgan",
        role: "Data Scientist & Statistician",
        tagline: "Statistical modeling, visualization, and machine learning.",
        bio: &[
            "Data scientist with a statistics background, focused on building",
            "models that hold up in production and dashboards people actually read.",
            "Previously led analytics for a logistics platform; now consulting on",
            "forecasting, experimentation, and reporting pipelines.",
        ],
    }
}

/// One animated counter in the hero panel
pub struct HeroStat {
    pub label: &'static str,
    pub target: u64,
    pub suffix: &'static str,
}

pub fn hero_stats() -> &'static [HeroStat] {
    &[
        HeroStat { label: "Projects Completed", target: 24, suffix: "+" },
        HeroStat { label: "Models Deployed", target: 12, suffix: "" },
        HeroStat { label: "Datasets Analyzed", target: 150, suffix: "+" },
    ]
}

/// Bar heights (percent) for the hero chart
pub fn chart_bars() -> &'static [u16] {
    &[35, 55, 45, 70, 60, 85]
}

/// Floating glyphs around the hero chart
pub fn particles() -> &'static [&'static str] {
    &["σ", "μ", "π", "∑", "Δ", "√"]
}

/// Symbols rained over an expertise item during its statistical effect
pub const STAT_SYMBOLS: [&str; 5] = ["μ", "σ", "χ²", "β", "α"];

/// How long an expertise item stays highlighted after activation
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(3000);

/// Effect attached to an expertise item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Symbol rain, one glyph every 200ms
    Statistical,
    /// Pulse
    Visualization,
    /// Neural shimmer
    Ml,
}

impl EffectKind {
    pub fn duration(&self) -> Duration {
        match self {
            EffectKind::Statistical => Duration::from_millis(2500),
            EffectKind::Visualization => Duration::from_millis(1500),
            EffectKind::Ml => Duration::from_millis(2000),
        }
    }
}

pub struct ExpertiseItem {
    pub title: &'static str,
    pub detail: &'static str,
    pub effect: EffectKind,
}

pub fn expertise() -> &'static [ExpertiseItem] {
    &[
        ExpertiseItem {
            title: "Statistical Analysis",
            detail: "Hypothesis testing, regression, experiment design",
            effect: EffectKind::Statistical,
        },
        ExpertiseItem {
            title: "Data Visualization",
            detail: "Dashboards and reporting that drive decisions",
            effect: EffectKind::Visualization,
        },
        ExpertiseItem {
            title: "Machine Learning",
            detail: "Supervised models from prototype to deployment",
            effect: EffectKind::Ml,
        },
    ]
}

pub struct Skill {
    pub name: &'static str,
    /// Proficiency percent, the bar's fill target
    pub target: u16,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub fn skill_categories() -> &'static [SkillCategory] {
    &[
        SkillCategory {
            title: "Programming & Querying",
            skills: &[
                Skill { name: "Python", target: 95 },
                Skill { name: "R", target: 88 },
                Skill { name: "SQL", target: 92 },
            ],
        },
        SkillCategory {
            title: "Machine Learning",
            skills: &[
                Skill { name: "scikit-learn", target: 90 },
                Skill { name: "TensorFlow", target: 82 },
                Skill { name: "XGBoost", target: 85 },
            ],
        },
        SkillCategory {
            title: "Visualization & BI",
            skills: &[
                Skill { name: "Power BI", target: 93 },
                Skill { name: "Tableau", target: 87 },
                Skill { name: "Matplotlib", target: 90 },
            ],
        },
    ]
}

/// All skill targets flattened, the input for the About stats panel
pub fn skill_targets() -> Vec<f64> {
    skill_categories()
        .iter()
        .flat_map(|c| c.skills.iter().map(|s| s.target as f64))
        .collect()
}

/// Which demo a project card launches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    Capstone,
    Analytics,
    Ml,
}

impl DemoKind {
    /// Parse a demo key. Unknown keys fall back to the capstone demo.
    #[allow(dead_code)] // Reserved for keyed demo selection
    pub fn parse(key: &str) -> DemoKind {
        match key {
            "analytics" => DemoKind::Analytics,
            "ml" => DemoKind::Ml,
            _ => DemoKind::Capstone,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DemoKind::Capstone => "capstone",
            DemoKind::Analytics => "analytics",
            DemoKind::Ml => "ml",
        }
    }
}

pub struct ProjectCard {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub demo: DemoKind,
}

pub fn project_cards() -> &'static [ProjectCard] {
    &[
        ProjectCard {
            title: "Data Science Capstone",
            summary: "Churn prediction pipeline from raw event logs to a served model",
            tags: &["python", "sklearn", "airflow"],
            demo: DemoKind::Capstone,
        },
        ProjectCard {
            title: "Business Analytics Dashboard",
            summary: "Company-wide KPI dashboard with automated weekly reporting",
            tags: &["power bi", "sql", "dax"],
            demo: DemoKind::Analytics,
        },
        ProjectCard {
            title: "Predictive Analytics Model",
            summary: "Demand forecasting model validated against two years of holdout data",
            tags: &["xgboost", "statsmodels", "fastapi"],
            demo: DemoKind::Ml,
        },
    ]
}

/// Animated figure inside a demo showcase
pub enum DemoVisual {
    /// Feed-forward network sketch, neurons per layer
    Network {
        layers: &'static [usize],
        metrics: &'static [(&'static str, &'static str)],
    },
    /// Mini bar chart, heights in percent
    Chart {
        bars: &'static [u16],
        metrics: &'static [(&'static str, &'static str)],
    },
    /// Fitted line with sample points
    Prediction {
        segments: usize,
        points: usize,
        metrics: &'static [(&'static str, &'static str)],
    },
}

pub struct DemoConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub visual: DemoVisual,
    /// How long the showcase stays open before auto-closing
    pub duration: Duration,
}

pub fn demo_config(kind: DemoKind) -> DemoConfig {
    match kind {
        DemoKind::Capstone => DemoConfig {
            title: "Data Science Capstone Project",
            description: "End-to-end machine learning pipeline with data preprocessing, model training, and deployment.",
            visual: DemoVisual::Network {
                layers: &[3, 2, 1],
                metrics: &[
                    ("Accuracy", "94.5%"),
                    ("Precision", "92.8%"),
                    ("Recall", "96.2%"),
                ],
            },
            duration: Duration::from_millis(3000),
        },
        DemoKind::Analytics => DemoConfig {
            title: "Business Analytics Dashboard",
            description: "Interactive Power BI dashboard with real-time KPI monitoring and automated reporting.",
            visual: DemoVisual::Chart {
                bars: &[60, 80, 45, 90, 70],
                metrics: &[("Revenue", "$2.4M"), ("Growth", "+15.3%")],
            },
            duration: Duration::from_millis(2500),
        },
        DemoKind::Ml => DemoConfig {
            title: "Predictive Analytics Model",
            description: "Advanced machine learning model with statistical validation and API integration.",
            visual: DemoVisual::Prediction {
                segments: 4,
                points: 3,
                metrics: &[("R²", "0.892"), ("RMSE", "0.124")],
            },
            duration: Duration::from_millis(3500),
        },
    }
}

/// A launched demo, tagged with a unique id for the log trail
pub struct DemoRequest {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub kind: DemoKind,
}

impl DemoRequest {
    pub fn new(kind: DemoKind) -> Self {
        let timestamp = Utc::now();
        Self {
            id: format!("demo_{}", timestamp.timestamp_millis()),
            timestamp,
            kind,
        }
    }
}

pub struct ContactMethod {
    pub label: &'static str,
    pub value: &'static str,
    pub notify_title: &'static str,
    pub notify_message: &'static str,
}

pub fn contact_methods() -> &'static [ContactMethod] {
    &[
        ContactMethod {
            label: "Email",
            value: "alex.morgan@example.com",
            notify_title: "Email Ready",
            notify_message: "Email client would open here",
        },
        ContactMethod {
            label: "LinkedIn",
            value: "linkedin.com/in/alexmorgan-ds",
            notify_title: "LinkedIn",
            notify_message: "LinkedIn profile would open here",
        },
        ContactMethod {
            label: "GitHub",
            value: "github.com/alexmorgan-ds",
            notify_title: "GitHub",
            notify_message: "GitHub profile would open here",
        },
    ]
}

/// (value, label) pairs for the inquiry type selector
pub fn project_types() -> &'static [(&'static str, &'static str)] {
    &[
        ("general", "General Inquiry"),
        ("analysis", "Data Analysis"),
        ("dashboard", "Dashboard Build"),
        ("ml-model", "ML Model"),
    ]
}

/// Rows a section reveals, top to bottom, on its first visit
pub fn reveal_rows(section: SectionId) -> usize {
    match section {
        SectionId::Home => 4,
        SectionId::About => 3,
        SectionId::Skills => 3,
        SectionId::Projects => 3,
        SectionId::Contact => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_kind_parse_fallback() {
        assert_eq!(DemoKind::parse("analytics"), DemoKind::Analytics);
        assert_eq!(DemoKind::parse("ml"), DemoKind::Ml);
        assert_eq!(DemoKind::parse("capstone"), DemoKind::Capstone);
        // Anything unrecognized runs the capstone demo
        assert_eq!(DemoKind::parse("unknown"), DemoKind::Capstone);
        assert_eq!(DemoKind::parse(""), DemoKind::Capstone);
    }

    #[test]
    fn test_demo_config_durations() {
        assert_eq!(
            demo_config(DemoKind::Capstone).duration,
            Duration::from_millis(3000)
        );
        assert_eq!(
            demo_config(DemoKind::Analytics).duration,
            Duration::from_millis(2500)
        );
        assert_eq!(demo_config(DemoKind::Ml).duration, Duration::from_millis(3500));
    }

    #[test]
    fn test_demo_visuals_shape() {
        match demo_config(DemoKind::Capstone).visual {
            DemoVisual::Network { layers, metrics } => {
                assert_eq!(layers, &[3, 2, 1]);
                assert_eq!(metrics.len(), 3);
            }
            _ => panic!("capstone demo should sketch a network"),
        }
        match demo_config(DemoKind::Analytics).visual {
            DemoVisual::Chart { bars, .. } => assert_eq!(bars, &[60, 80, 45, 90, 70]),
            _ => panic!("analytics demo should draw a chart"),
        }
        match demo_config(DemoKind::Ml).visual {
            DemoVisual::Prediction { segments, points, .. } => {
                assert_eq!(segments, 4);
                assert_eq!(points, 3);
            }
            _ => panic!("ml demo should draw a prediction line"),
        }
    }

    #[test]
    fn test_demo_request_id_prefix() {
        let request = DemoRequest::new(DemoKind::Analytics);
        assert!(request.id.starts_with("demo_"));
        assert_eq!(request.kind, DemoKind::Analytics);
    }

    #[test]
    fn test_catalog_is_consistent() {
        assert_eq!(hero_stats().len(), 3);
        assert_eq!(expertise().len(), 3);
        assert_eq!(project_cards().len(), 3);
        assert_eq!(contact_methods().len(), 3);
        assert_eq!(skill_targets().len(), 9);
        for section in SectionId::all() {
            assert!(reveal_rows(section) > 0);
        }
        // Every card launches a demo with a nonempty title
        for card in project_cards() {
            assert!(!demo_config(card.demo).title.is_empty());
        }
    }
}
