//! Role Catalog: immutable role → required-skills table plus per-role
//! learning resources. Built once at startup and shared via `Arc`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;

/// Links shown next to a role: one mock test and a list of tutorials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleResources {
    pub mock_test: Option<String>,
    #[serde(default)]
    pub tutorials: Vec<String>,
}

/// A named job role and the skills it requires (lowercase, deduplicated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub role: String,
    pub required_skills: BTreeSet<String>,
    pub resources: RoleResources,
}

/// One entry of a catalog file.
#[derive(Debug, Deserialize)]
struct RoleProfileFile {
    role: String,
    skills: Vec<String>,
    #[serde(default)]
    mock_test: Option<String>,
    #[serde(default)]
    tutorials: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleCatalog {
    /// Declaration order is preserved for listing.
    order: Vec<String>,
    profiles: BTreeMap<String, RoleProfile>,
}

impl RoleCatalog {
    /// Builds a catalog from profiles. Skill strings are trimmed, lowercased
    /// and deduplicated; blank skills are dropped.
    pub fn new(profiles: Vec<RoleProfile>) -> Result<Self, AppError> {
        let mut order = Vec::with_capacity(profiles.len());
        let mut by_name = BTreeMap::new();

        for mut profile in profiles {
            profile.role = profile.role.trim().to_string();
            if profile.role.is_empty() {
                return Err(AppError::Config("Role name cannot be empty".to_string()));
            }
            profile.required_skills = normalize_skills(profile.required_skills);
            if by_name.contains_key(&profile.role) {
                return Err(AppError::Config(format!(
                    "Duplicate role '{}' in catalog",
                    profile.role
                )));
            }
            order.push(profile.role.clone());
            by_name.insert(profile.role.clone(), profile);
        }

        Ok(Self {
            order,
            profiles: by_name,
        })
    }

    /// Parses a JSON array of `{ "role", "skills", "mock_test", "tutorials" }`.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let entries: Vec<RoleProfileFile> = serde_json::from_str(json)
            .map_err(|e| AppError::Config(format!("Invalid role catalog: {e}")))?;

        let profiles = entries
            .into_iter()
            .map(|e| RoleProfile {
                role: e.role,
                required_skills: e.skills.into_iter().collect(),
                resources: RoleResources {
                    mock_test: e.mock_test,
                    tutorials: e.tutorials,
                },
            })
            .collect();

        Self::new(profiles)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!(
                "Failed to read role catalog '{}': {e}",
                path.display()
            ))
        })?;
        let catalog = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            roles = catalog.len(),
            "Loaded role catalog"
        );
        Ok(catalog)
    }

    pub fn role(&self, name: &str) -> Option<&RoleProfile> {
        self.profiles.get(name)
    }

    /// Looks a role up, failing with `RoleNotFound` for unknown names.
    pub fn require(&self, name: &str) -> Result<&RoleProfile, AppError> {
        self.role(name)
            .ok_or_else(|| AppError::RoleNotFound(name.to_string()))
    }

    pub fn resources(&self, name: &str) -> Result<&RoleResources, AppError> {
        self.require(name).map(|p| &p.resources)
    }

    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &RoleProfile> {
        self.order.iter().filter_map(|name| self.profiles.get(name))
    }

    /// Every skill required by any role.
    pub fn vocabulary(&self) -> BTreeSet<String> {
        self.profiles
            .values()
            .flat_map(|p| p.required_skills.iter().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for RoleCatalog {
    /// The built-in table of seven roles.
    fn default() -> Self {
        let mut order = Vec::with_capacity(DEFAULT_ROLES.len());
        let mut profiles = BTreeMap::new();
        for (role, skills, mock_test, tutorials) in DEFAULT_ROLES {
            order.push(role.to_string());
            profiles.insert(
                role.to_string(),
                RoleProfile {
                    role: role.to_string(),
                    required_skills: skills.iter().map(|s| s.to_string()).collect(),
                    resources: RoleResources {
                        mock_test: Some(mock_test.to_string()),
                        tutorials: tutorials.iter().map(|t| t.to_string()).collect(),
                    },
                },
            );
        }
        Self { order, profiles }
    }
}

fn normalize_skills(skills: BTreeSet<String>) -> BTreeSet<String> {
    skills
        .into_iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

type RoleRow = (&'static str, &'static [&'static str], &'static str, &'static [&'static str]);

const DEFAULT_ROLES: &[RoleRow] = &[
    (
        "Data Scientist",
        &["python", "machine learning", "deep learning", "sql", "pandas", "data visualization", "big data"],
        "https://www.testdome.com/tests/python-online-test/25",
        &["https://www.kaggle.com/learn", "https://www.coursera.org/specializations/data-science"],
    ),
    (
        "Software Engineer",
        &["java", "spring boot", "microservices", "sql", "git", "javascript", "react", "rest apis", "data structures"],
        "https://www.hackerrank.com/domains/tutorials/10-days-of-javascript",
        &["https://www.geeksforgeeks.org/", "https://www.udemy.com/topic/software-engineering/"],
    ),
    (
        "AI Engineer",
        &["python", "tensorflow", "pytorch", "nlp", "computer vision", "deep learning", "mlops"],
        "https://www.udacity.com/course/intro-to-tensorflow-for-deep-learning--ud187",
        &["https://www.tensorflow.org/tutorials", "https://pytorch.org/tutorials/"],
    ),
    (
        "DevOps Engineer",
        &["docker", "kubernetes", "ci/cd", "terraform", "aws", "linux", "ansible", "cloud computing", "monitoring"],
        "https://www.hackerrank.com/domains/tutorials/devops",
        &["https://www.udemy.com/course/devops/", "https://www.kubernetes.io/docs/tutorials/"],
    ),
    (
        "Product Manager",
        &["agile", "scrum", "market research", "roadmap planning", "business strategy", "a/b testing", "ux research"],
        "https://www.interviewcake.com/product-manager-interview-questions",
        &["https://www.productschool.com/", "https://www.coursera.org/courses?query=product%20management"],
    ),
    (
        "UI Designer",
        &["figma", "sketch", "adobe xd", "wireframing", "prototyping", "user research", "html/css", "design systems"],
        "https://www.interaction-design.org/literature/topics/ui-design",
        &["https://www.adobe.com/", "https://www.figma.com/resources/learn-design/"],
    ),
    (
        "HR Manager",
        &["recruitment", "employee engagement", "conflict resolution", "hr policies", "onboarding", "talent management"],
        "https://resources.workable.com/hr-interview-questions",
        &["https://www.shrm.org/", "https://www.coursera.org/specializations/human-resource-management"],
    ),
];
