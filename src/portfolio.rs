// ============================================================================
// Portfolio Content
// ============================================================================
//
// Static site content (intro, about, navigation, experience timeline,
// certifications, skills), compiled into the binary and parsed once at startup.
//
// ============================================================================

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub site: SiteMeta,
    /// Hero-section greeting
    pub intro: String,
    /// "About me" section, one entry per paragraph
    pub about: Vec<String>,
    pub links: Vec<NavLink>,
    pub experiences: Vec<Experience>,
    pub certifications: Vec<Certification>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    /// In-page anchor, e.g. "#contact"
    pub hash: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Work,
    Education,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub kind: ExperienceKind,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Public path of the certificate image
    pub image: String,
}

impl Portfolio {
    /// Parse the bundled content
    pub fn load() -> Result<Self> {
        Self::parse(PORTFOLIO_JSON)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let portfolio: Portfolio =
            serde_json::from_str(raw).context("Failed to parse portfolio content")?;

        ensure!(!portfolio.intro.trim().is_empty(), "Intro text must not be empty");
        ensure!(
            portfolio.about.iter().all(|p| !p.trim().is_empty()),
            "About paragraphs must not be empty"
        );

        for link in &portfolio.links {
            ensure!(
                link.hash.starts_with('#'),
                "Navigation link {:?} must point at an in-page anchor",
                link.name
            );
        }

        Ok(portfolio)
    }
}
