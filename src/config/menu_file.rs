use crate::domain::catalog::Catalog;
use crate::domain::model::{CatalogEntry, Category};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{PosError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_ids, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML menu definition supplied by the menu-management side.
///
/// ```toml
/// [menu]
/// name = "Quán Ngon"
/// currency = "VND"
///
/// [[menu.items]]
/// id = "1"
/// name = "Phở Bò"
/// price = 75000
/// category = "main"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuFile {
    pub menu: MenuSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSection {
    pub name: String,
    pub currency: Option<String>,
    pub items: Vec<MenuItemDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemDef {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub category: Category,
}

impl MenuFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PosError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PosError::MenuParseError {
            message: e.to_string(),
        })
    }

    /// Replace `${VAR_NAME}` placeholders with environment values; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn into_catalog(self) -> Catalog {
        Catalog::new(
            self.menu
                .items
                .into_iter()
                .map(|item| CatalogEntry {
                    id: item.id,
                    name: item.name,
                    unit_price: item.price,
                    category: item.category,
                })
                .collect(),
        )
    }
}

impl Validate for MenuFile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("menu.name", &self.menu.name)?;

        if self.menu.items.is_empty() {
            return Err(PosError::MissingConfigError {
                field: "menu.items".to_string(),
            });
        }
        for item in &self.menu.items {
            validate_non_empty_string("menu.items.name", &item.name)?;
            validate_non_empty_string("menu.items.id", &item.id)?;
        }
        validate_unique_ids("menu.items.id", self.menu.items.iter().map(|i| i.id.as_str()))
    }
}

/// Catalog source backed by a menu file on disk. The file is re-read on every
/// load; a session loads once at start.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: String,
}

impl FileCatalog {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalog {
    fn load(&self) -> Result<Catalog> {
        let menu = MenuFile::from_file(&self.path)?;
        menu.validate()?;
        tracing::debug!("Loaded {} menu items from {}", menu.menu.items.len(), self.path);
        Ok(menu.into_catalog())
    }
}
