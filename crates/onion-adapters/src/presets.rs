//! Built-in sample architectures.
//!
//! Each preset is built through [`ConfigFacade`] so that it obeys the same
//! ring rules as a hand-built configuration.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, instrument};

use onion_core::{
    application::ConfigFacade,
    domain::{Configuration, DiFramework, UiFramework},
    error::{OnionError, OnionResult},
};

/// A named sample architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// No nodes at all.
    Blank,
    /// Users, products and orders with a checkout flow.
    ECommerce,
    /// Authors, posts and comments.
    Blog,
}

impl Preset {
    pub const ALL: [Self; 3] = [Self::Blank, Self::ECommerce, Self::Blog];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::ECommerce => "e-commerce",
            Self::Blog => "blog",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Blank => "Empty architecture",
            Self::ECommerce => "Users, products and orders with a checkout flow",
            Self::Blog => "Authors, posts and comments",
        }
    }

    /// Build the preset with the given frameworks and folder.
    #[instrument(skip_all, fields(preset = self.name()))]
    pub fn build(
        self,
        ui: UiFramework,
        di: DiFramework,
        folder_path: &str,
    ) -> OnionResult<Configuration> {
        let mut facade = ConfigFacade::with_config(
            Configuration::empty()
                .with_frameworks(ui, di)
                .with_folder_path(folder_path),
        );

        match self {
            Self::Blank => {}
            Self::ECommerce => e_commerce(&mut facade)?,
            Self::Blog => blog(&mut facade)?,
        }

        let config = facade.data();
        debug!(
            nodes = config.node_count(),
            edges = config.edge_count(),
            "Preset built"
        );
        Ok((*config).clone())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = OnionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == wanted || p.name().replace('-', "") == wanted)
            .ok_or_else(|| OnionError::Configuration {
                message: format!(
                    "Unknown preset '{}'. Available: {}",
                    s,
                    Self::ALL.map(Preset::name).join(", ")
                ),
            })
    }
}

fn add_nodes(facade: &mut ConfigFacade, entities: &[&str], domain: &[&str], application: &[&str]) {
    for name in entities {
        facade.add_entity(name);
    }
    for name in domain {
        facade.add_domain_service(name);
    }
    for name in application {
        facade.add_application_service(name);
    }
}

fn connect_all(facade: &mut ConfigFacade, edges: &[(&str, &str)]) -> OnionResult<()> {
    for (source, target) in edges {
        facade.add_connection(source, target)?;
    }
    Ok(())
}

fn e_commerce(facade: &mut ConfigFacade) -> OnionResult<()> {
    add_nodes(
        facade,
        &["User", "Product", "Order"],
        &["UserService", "CatalogService", "OrderService"],
        &["AccountAppService", "CheckoutAppService"],
    );
    connect_all(
        facade,
        &[
            ("UserService", "User"),
            ("CatalogService", "Product"),
            ("OrderService", "Order"),
            ("OrderService", "Product"),
            ("AccountAppService", "UserService"),
            ("AccountAppService", "IUserRepository"),
            ("CheckoutAppService", "OrderService"),
            ("CheckoutAppService", "CatalogService"),
            ("CheckoutAppService", "IOrderRepository"),
            ("CheckoutAppService", "IProductRepository"),
        ],
    )
}

fn blog(facade: &mut ConfigFacade) -> OnionResult<()> {
    add_nodes(
        facade,
        &["Author", "Post", "Comment"],
        &["PublishingService", "ModerationService"],
        &["EditorAppService"],
    );
    connect_all(
        facade,
        &[
            ("PublishingService", "Post"),
            ("PublishingService", "Author"),
            ("ModerationService", "Comment"),
            ("EditorAppService", "PublishingService"),
            ("EditorAppService", "ModerationService"),
            ("EditorAppService", "IPostRepository"),
            ("EditorAppService", "ICommentRepository"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_builds_and_validates() {
        for preset in Preset::ALL {
            let config = preset
                .build(UiFramework::React, DiFramework::Awilix, "./src")
                .unwrap();
            let report = ConfigFacade::validate_config_structure(&config);
            assert!(report.valid, "{preset}: {:?}", report.errors);
            assert_eq!(config.folder_path, "./src");
        }
    }

    #[test]
    fn blank_is_empty() {
        let config = Preset::Blank
            .build(UiFramework::Vue, DiFramework::Angular, "")
            .unwrap();
        assert!(config.is_empty());
        assert_eq!(config.ui_framework, Some(UiFramework::Vue));
    }

    #[test]
    fn e_commerce_has_checkout_edges() {
        let config = Preset::ECommerce
            .build(UiFramework::React, DiFramework::Awilix, "")
            .unwrap();
        assert_eq!(config.edge_count(), 10);
        assert_eq!(
            config.application_service_dependencies["CheckoutAppService"].repositories,
            vec!["IOrderRepository", "IProductRepository"]
        );
    }

    #[test]
    fn parses_names() {
        assert_eq!("e-commerce".parse::<Preset>().unwrap(), Preset::ECommerce);
        assert_eq!("ECommerce".parse::<Preset>().unwrap(), Preset::ECommerce);
        assert!("shop".parse::<Preset>().is_err());
    }
}
