//! Portfolio content model and TOML loading.

use std::path::Path;

use portfolioterm_terminal::SkillCategory;
use portfolioterm_types::error::{PortfolioError, Result};
use serde::Deserialize;

const BUILTIN_PORTFOLIO: &str = include_str!("../data/portfolio.toml");

/// Everything the content panels display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Portfolio {
    pub about: About,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub contact: Vec<ContactLink>,
}

/// Biography shown by the about panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct About {
    pub summary: String,
    #[serde(default)]
    pub philosophy: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Live site, if any.
    #[serde(default)]
    pub link: Option<String>,
    /// Source repository, if any.
    #[serde(default)]
    pub github: Option<String>,
}

impl Project {
    /// Whether any of the project's technologies contains `technology`,
    /// ignoring case.
    pub fn uses(&self, technology: &str) -> bool {
        let needle = technology.to_lowercase();
        self.technologies
            .iter()
            .any(|t| t.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0 to 100.
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
    pub href: String,
}

impl Portfolio {
    /// Parse portfolio content from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let portfolio: Portfolio = toml::from_str(text)
            .map_err(|e| PortfolioError::Content(format!("portfolio: {e}")))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Load portfolio content from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// The content compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_PORTFOLIO)
    }

    fn validate(&self) -> Result<()> {
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(PortfolioError::Content(format!(
                "portfolio: skill '{}' has level {} (max 100)",
                skill.name, skill.level
            )));
        }
        if self.projects.iter().any(|p| p.title.trim().is_empty()) {
            return Err(PortfolioError::Content(
                "portfolio: project with an empty title".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load the portfolio from `path`, or the built-in content when no path is
/// given.
pub fn load_portfolio(path: Option<&Path>) -> Result<Portfolio> {
    let Some(path) = path else {
        log::debug!("No portfolio file given, using built-in content");
        return Portfolio::builtin();
    };
    let portfolio = Portfolio::from_file(path)?;
    log::info!(
        "Loaded portfolio from {} ({} projects, {} skills)",
        path.display(),
        portfolio.projects.len(),
        portfolio.skills.len()
    );
    Ok(portfolio)
}
