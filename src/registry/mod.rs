//! Variable class registry
//!
//! Static mapping of category key to the class names that belong to it.
//! Built once on first access and read-only afterwards.

mod classes;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Category a variable class is published under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Warfare variables
    Wf,
    /// Social complexity variables
    Sc,
    /// General polity variables
    General,
    /// Core entities (polities, NGAs, references)
    Core,
    /// Crisis database variables
    Crisisdb,
    /// Religion and tolerance variables
    Rt,
}

impl Category {
    /// All categories in key order
    pub const ALL: [Category; 6] = [
        Category::Wf,
        Category::Sc,
        Category::General,
        Category::Core,
        Category::Crisisdb,
        Category::Rt,
    ];

    /// Key used in URLs and in the registry mapping
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Wf => "wf",
            Category::Sc => "sc",
            Category::General => "general",
            Category::Core => "core",
            Category::Crisisdb => "crisisdb",
            Category::Rt => "rt",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::config(format!("Unknown category: {s}")))
    }
}

/// Category mapping, built from the class table on first access
static VARIABLE_CLASSES: LazyLock<BTreeMap<Category, BTreeSet<&'static str>>> =
    LazyLock::new(|| {
        let mut map: BTreeMap<Category, BTreeSet<&'static str>> =
            Category::ALL.into_iter().map(|c| (c, BTreeSet::new())).collect();

        for (category, names) in classes::TABLE {
            map.entry(*category)
                .or_default()
                .extend(names.iter().copied());
        }

        map
    });

/// Mapping of every category to the class names registered under it
pub fn variable_classes() -> &'static BTreeMap<Category, BTreeSet<&'static str>> {
    &VARIABLE_CLASSES
}

/// Category a class name is registered under
pub fn category_of(class_name: &str) -> Option<Category> {
    classes::lookup(class_name)
}

/// Check if a class name is registered
pub fn is_registered(class_name: &str) -> bool {
    category_of(class_name).is_some()
}

/// Class names registered under a category
pub fn classes_in(category: Category) -> impl Iterator<Item = &'static str> {
    VARIABLE_CLASSES
        .get(&category)
        .into_iter()
        .flat_map(|names| names.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(category: Category, class_name: &str) -> bool {
        variable_classes()[&category].contains(class_name)
    }

    #[test]
    fn test_known_members() {
        assert!(contains(Category::Wf, "Coppers"));
        assert!(contains(Category::Sc, "Roads"));
        assert!(contains(Category::General, "PolitySuprapolities"));
        assert!(contains(Category::Core, "Polities"));
        assert!(contains(Category::Crisisdb, "ExternalConflictSides"));
        assert!(contains(Category::Rt, "OfficialReligions"));
        assert!(!contains(Category::Wf, "BigPonies"));
    }

    #[test]
    fn test_all_categories_present() {
        let keys: Vec<_> = variable_classes().keys().map(Category::as_str).collect();
        assert_eq!(keys, vec!["wf", "sc", "general", "core", "crisisdb", "rt"]);
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("Coppers"), Some(Category::Wf));
        assert_eq!(category_of("ProfessionalSoldiers"), Some(Category::Sc));
        assert_eq!(category_of("BigPonies"), None);
        assert!(is_registered("Polities"));
        assert!(!is_registered("FakeClasses"));
    }

    #[test]
    fn test_each_class_in_one_category() {
        let total: usize = classes::TABLE.iter().map(|(_, names)| names.len()).sum();
        let registered: usize = variable_classes().values().map(BTreeSet::len).sum();
        assert_eq!(total, registered);

        for (category, names) in variable_classes() {
            for name in names {
                assert_eq!(category_of(name), Some(*category), "{name}");
            }
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("crisisdb".parse::<Category>().unwrap(), Category::Crisisdb);
        assert_eq!(Category::Rt.to_string(), "rt");
        assert!("military".parse::<Category>().is_err());
    }

    #[test]
    fn test_classes_in() {
        let core: Vec<_> = classes_in(Category::Core).collect();
        assert!(core.contains(&"Polities"));
        assert!(!core.contains(&"Roads"));
    }
}
