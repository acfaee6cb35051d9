//! Domain value objects: Ring, UiFramework, DiFramework.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! `Ring` also owns the edge-rule table: which ring may depend on which.
//! Everything that asks "may X connect to Y" goes through
//! [`Ring::allowed_targets`].

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Ring ─────────────────────────────────────────────────────────────────────

/// One of the four fixed layers of an onion architecture.
///
/// Variants are ordered from the innermost ring outwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ring {
    Entities,
    DomainServices,
    ApplicationServices,
    Repositories,
}

impl Ring {
    pub const ALL: [Ring; 4] = [
        Self::Entities,
        Self::DomainServices,
        Self::ApplicationServices,
        Self::Repositories,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entities => "entities",
            Self::DomainServices => "domain-services",
            Self::ApplicationServices => "application-services",
            Self::Repositories => "repositories",
        }
    }

    /// Zero for the innermost ring.
    pub const fn depth(self) -> u8 {
        match self {
            Self::Entities => 0,
            Self::DomainServices => 1,
            Self::ApplicationServices => 2,
            Self::Repositories => 3,
        }
    }

    /// Rings a node of this ring may hold an edge to.
    ///
    /// Entities and repositories are leaves: they never depend on anything.
    pub const fn allowed_targets(self) -> &'static [Ring] {
        match self {
            Self::DomainServices => &[Self::Entities],
            Self::ApplicationServices => &[Self::DomainServices, Self::Repositories],
            Self::Entities | Self::Repositories => &[],
        }
    }

    pub fn may_connect_to(self, target: Ring) -> bool {
        self.allowed_targets().contains(&target)
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ring {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "entities" | "entity" => Ok(Self::Entities),
            "domain-services" | "domain-service" | "domainservices" => Ok(Self::DomainServices),
            "application-services" | "application-service" | "applicationservices" => {
                Ok(Self::ApplicationServices)
            }
            "repositories" | "repository" => Ok(Self::Repositories),
            _ => Err(DomainError::MalformedField {
                field: "ring".into(),
                expected: "entities, domain-services, application-services or repositories",
            }),
        }
    }
}

// ── UiFramework ──────────────────────────────────────────────────────────────

/// Front-end framework the generated application targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiFramework {
    #[default]
    React,
    Angular,
    Vue,
    Lit,
    Vanilla,
}

impl UiFramework {
    pub const ALL: [UiFramework; 5] = [
        Self::React,
        Self::Angular,
        Self::Vue,
        Self::Lit,
        Self::Vanilla,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Angular => "angular",
            Self::Vue => "vue",
            Self::Lit => "lit",
            Self::Vanilla => "vanilla",
        }
    }

    /// Comma separated list of every accepted value.
    pub fn allowed() -> String {
        Self::ALL.map(|f| f.as_str()).join(", ")
    }
}

impl fmt::Display for UiFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiFramework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| DomainError::InvalidFramework {
                field: "uiFramework",
                value: s.to_string(),
                allowed: Self::allowed(),
            })
    }
}

// ── DiFramework ──────────────────────────────────────────────────────────────

/// Dependency-injection container wiring the generated services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiFramework {
    #[default]
    Awilix,
    Angular,
}

impl DiFramework {
    pub const ALL: [DiFramework; 2] = [Self::Awilix, Self::Angular];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Awilix => "awilix",
            Self::Angular => "angular",
        }
    }

    pub fn allowed() -> String {
        Self::ALL.map(|f| f.as_str()).join(", ")
    }
}

impl fmt::Display for DiFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiFramework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| DomainError::InvalidFramework {
                field: "diFramework",
                value: s.to_string(),
                allowed: Self::allowed(),
            })
    }
}
