use serde::{Deserialize, Serialize};

use super::dataset::nullable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub slug: String,
    #[serde(default, deserialize_with = "nullable")]
    pub datasets_count: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub icon: String,
}

impl Category {
    pub fn icon(&self) -> CategoryIcon {
        CategoryIcon::from_name(&self.icon)
    }

    /// "1 Dataset" / "n Datasets".
    pub fn datasets_label(&self) -> String {
        match self.datasets_count {
            1 => "1 Dataset".to_string(),
            n => format!("{n} Datasets"),
        }
    }
}

/// Icons a category may carry. The API stores the icon by name; names
/// outside this set render as [`CategoryIcon::Database`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryIcon {
    Database,
    Folder,
    FileText,
    GraduationCap,
    Users,
    Heart,
    Building,
    Wheat,
    TreePine,
    TrendingUp,
    Landmark,
    Shield,
    Bus,
    Briefcase,
    Wifi,
    Zap,
    Droplets,
    Banknote,
    Home,
    Cloud,
    BookOpen,
    MapPin,
    Globe,
    Leaf,
}

impl CategoryIcon {
    pub const ALL: [CategoryIcon; 24] = [
        CategoryIcon::Database,
        CategoryIcon::Folder,
        CategoryIcon::FileText,
        CategoryIcon::GraduationCap,
        CategoryIcon::Users,
        CategoryIcon::Heart,
        CategoryIcon::Building,
        CategoryIcon::Wheat,
        CategoryIcon::TreePine,
        CategoryIcon::TrendingUp,
        CategoryIcon::Landmark,
        CategoryIcon::Shield,
        CategoryIcon::Bus,
        CategoryIcon::Briefcase,
        CategoryIcon::Wifi,
        CategoryIcon::Zap,
        CategoryIcon::Droplets,
        CategoryIcon::Banknote,
        CategoryIcon::Home,
        CategoryIcon::Cloud,
        CategoryIcon::BookOpen,
        CategoryIcon::MapPin,
        CategoryIcon::Globe,
        CategoryIcon::Leaf,
    ];

    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|icon| icon.name() == name)
            .unwrap_or(CategoryIcon::Database)
    }

    /// Name stored by the API.
    pub fn name(&self) -> &'static str {
        match self {
            CategoryIcon::Database => "Database",
            CategoryIcon::Folder => "Folder",
            CategoryIcon::FileText => "FileText",
            CategoryIcon::GraduationCap => "GraduationCap",
            CategoryIcon::Users => "Users",
            CategoryIcon::Heart => "Heart",
            CategoryIcon::Building => "Building2",
            CategoryIcon::Wheat => "Wheat",
            CategoryIcon::TreePine => "TreePine",
            CategoryIcon::TrendingUp => "TrendingUp",
            CategoryIcon::Landmark => "Landmark",
            CategoryIcon::Shield => "Shield",
            CategoryIcon::Bus => "Bus",
            CategoryIcon::Briefcase => "Briefcase",
            CategoryIcon::Wifi => "Wifi",
            CategoryIcon::Zap => "Zap",
            CategoryIcon::Droplets => "Droplets",
            CategoryIcon::Banknote => "Banknote",
            CategoryIcon::Home => "Home",
            CategoryIcon::Cloud => "Cloud",
            CategoryIcon::BookOpen => "BookOpen",
            CategoryIcon::MapPin => "MapPin",
            CategoryIcon::Globe => "Globe",
            CategoryIcon::Leaf => "Leaf",
        }
    }

    /// Material icon ligature used by the frontend.
    pub fn material_icon(&self) -> &'static str {
        match self {
            CategoryIcon::Database => "storage",
            CategoryIcon::Folder => "folder",
            CategoryIcon::FileText => "description",
            CategoryIcon::GraduationCap => "school",
            CategoryIcon::Users => "groups",
            CategoryIcon::Heart => "favorite",
            CategoryIcon::Building => "apartment",
            CategoryIcon::Wheat => "agriculture",
            CategoryIcon::TreePine => "park",
            CategoryIcon::TrendingUp => "trending_up",
            CategoryIcon::Landmark => "account_balance",
            CategoryIcon::Shield => "shield",
            CategoryIcon::Bus => "directions_bus",
            CategoryIcon::Briefcase => "work",
            CategoryIcon::Wifi => "wifi",
            CategoryIcon::Zap => "bolt",
            CategoryIcon::Droplets => "water_drop",
            CategoryIcon::Banknote => "payments",
            CategoryIcon::Home => "home",
            CategoryIcon::Cloud => "cloud",
            CategoryIcon::BookOpen => "menu_book",
            CategoryIcon::MapPin => "place",
            CategoryIcon::Globe => "public",
            CategoryIcon::Leaf => "eco",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_icon_names_fall_back_to_database() {
        assert_eq!(CategoryIcon::from_name("Building2"), CategoryIcon::Building);
        assert_eq!(CategoryIcon::from_name("Rocket"), CategoryIcon::Database);
        assert_eq!(CategoryIcon::from_name(""), CategoryIcon::Database);
    }

    #[test]
    fn datasets_label_pluralises() {
        let mut category = Category {
            datasets_count: 1,
            ..Default::default()
        };
        assert_eq!(category.datasets_label(), "1 Dataset");
        category.datasets_count = 0;
        assert_eq!(category.datasets_label(), "0 Datasets");
        category.datasets_count = 12;
        assert_eq!(category.datasets_label(), "12 Datasets");
    }
}
