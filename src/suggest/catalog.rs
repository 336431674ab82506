//! The built-in item catalog
//!
//! The names the suggestion dropdown offers. Order matters: when two
//! entries sit at the same edit distance from a query, the one earlier in
//! this list wins. Duplicates are permitted and kept as-is.

use super::matcher;

/// Item names shipped with the application, in priority order
pub const BUILT_IN: &[&str] = &[
    "أفيز رباط أمامي جامبو طويل",
    "أفيز رباط أمامي جامبو قصير",
    "أفيز رباط خلفي جامبو طويل",
    "أفيز رباط خلفي جامبو قصير",
    "أفيز رباط دبابة طويل",
    "أفيز رباط دبابة قصير عريض",
    "أفيز رباط سوزوكي",
    "أفيز سوستة NKR أمامي طويل أصفر",
    "أفيز سوستة خلفي مقاسات أحمر 35",
    "أفيز سوستة خلفي مقاسات أحمر 37",
    "أفيز سوستة خلفي مقاسات أحمر 40",
    "أفيز سوستة دبابة أصفر",
    "أفيز سوستة ديمكس أصفر",
    "أفيز سوستة سوزوكي",
    "أفيز سوستة شيفروليه أصفر",
    "برشام كيلو",
    "بنز 22 رصاصي",
    "بنز 24 رصاصي",
    "بنز سوستة شيفروليه مشحم",
    "بنز سوستة ميتسوبيشي مصري",
    "بنز سوستة نيسان صاج",
    "بنز شيفروليه صاج",
    "بنز ميتسوبيشي صاج كونتر",
    "جلبة سوستة تفلون ميتسوبيشي 7 سم",
    "جلبة سوستة دبابة",
    "جلبة سوستة تفلون مازدا 7 سم",
    "جلبة سوستة تفلون ميتسوبيشي 6 سم",
    "جلبة سوستة تويوتا",
    "جلبة سوستة تويوتا داينا",
    "جلبة سوستة جامبو",
    "جلبة سوستة ذراع ميزان مرسيدس",
    "جلبة سوستة دايهاتسو أمامي",
    "جلبة سوستة دايهاتسو خلفي",
    "جلبة سوستة تفلون دايهاتسو خلفي",
    "جلبة سوستة سوزوكي",
    "جلبة سوستة شيفروليه بدون جراب",
    "جلبة سوستة تفلون شيفروليه بحديدة",
    "جلبة سوستة مازدا",
    "جلبة سوستة مازدا 3000",
    "جلبة سوستة ميتسوبيشي 6 سم بجراب",
    "جلبة سوستة ميتسوبيشي 6 سم بدون جراب",
    "جلبة سوستة ميتسوبيشي 7 سم بجراب",
    "جلبة سوستة ميتسوبيشي 7 سم بدون جراب",
    "جلبة سوستة مرسيدس ضيق",
    "جلبة سوستة مرسيدس ضيق شركة",
    "جلبة سوستة مرسيدس ميكروباص",
    "جلبة سوستة مرسيدس واسع",
    "جلبة سوستة مرسيدس واسع شركة",
    "جلبة سوستة مساعد ديمكس",
    "جلبة سوستة مقص دبابة",
    "جلبة سوستة مقص دبابة سفلي",
    "جلبة سوستة مقص ديمكس سفلي",
    "جلبة سوستة مقص ديمكس علوي",
    "جلبة سوستة مقص شيفروليه",
    "جلبة سوستة مقص فيات",
    "جلبة سوستة هيونداي ضيق",
    "جلبة سوستة هيونداي واسع",
    "جلبة شداد 30 نصر",
    "جلبة شداد 36 مرسيدس",
    "جلبة شداد ريجاتا",
    "جلبة شيفروليه أمامي",
    "جلبة شيفروليه خلفي",
    "جلبة مساعد ديمكس تفلون بحديدة",
    "جلبة مقص تويوتا صغيرة",
    "جلبة مقص تويوتا كبيرة",
    "جلبة مقص تويوتا وسط",
    "جلبة مقص علوي شيفروليه",
    "جلبة ميزان 60 مرسيدس",
    "جلبة نحاس شيفروليه لوكس",
    "جلبة نحاس ميتسوبيشي لوكس",
    "ذراع شداد تويوتا",
    "ذراع شداد دبابة لوكس",
    "ذراع شداد دبابة محمل",
    "صدامة 1 مسمار مدورة",
    "صدامة 2 مسمار تويوتا ميكروباص IS",
    "صدامة أكتروس كبيرة محملة",
    "صدامة خلفي دبابة BZ",
    "صدامة خلفي دبابة IS",
    "صدامة خلفي ديمكس BZ",
    "صدامة خلفي ديمكس IS",
    "صدامة خلفي ديمكس تربو",
    "صدامة دبابة",
    "صدامة دبابة 1 مسمار لوكس",
    "صدامة دبابة 2 مسمار",
    "صدامة ديفرانسيه أبيض خفيف لوكس",
    "صدامة ديفرانسيه أسود لوكس",
    "صدامة ديمكس",
    "صدامة شيفروليه أمامي",
    "صدامة شيفروليه أمامي IS",
    "صدامة شيفروليه أمامي لوكس",
    "صدامة كونتر",
    "صدامة كونتر تويوتا 1 مسمار",
    "طقم سكاترا تويوتا",
    "طقم علاية مشقوقة أحمر",
    "طقم علاية مشقوقة ميتسوبيشي لانسر",
    "طقم قاعدة كابينة دبابة أوريجينال IS",
    "طقم كفة سوزوكي لوكس",
    "طقم كاوتش سوستة N300 أمامي 2 قطعة",
    "علاية 124 مشرشرة",
    "علاية 3 زومبة",
    "علاية 4 زومبة",
    "علاية 4 زومبة ألوان",
    "علاية داينا واطي",
    "علاية ديمكس تفلون",
    "علاية رينو أسود",
    "علاية رينو ألوان",
    "علاية فيرنا واطي",
    "علاية كيا",
    "علاية مرسيدس",
    "علاية مرسيدس دوبل ألوان",
    "علاية مرسيدس واطي حقن",
    "علاية مشقوقة أحمر",
    "قاعدة كابينة خلفي جامبو IS",
    "كاوتش نيسان واسع",
    "كفة كونتر حديد صغيرة",
    "كفة كونتر حديد كبيرة محملة",
    "كاوتش بكرة شداد تويوتا",
    "كاوتش تراب تيش دبابة",
    "كاوتش تراب سفلي دبابة",
    "كاوتش تراب سفلي تويوتا",
    "كاوتش تراب علوي تويوتا",
    "كاوتش تراب علوي دبابة",
    "كاوتش تراب قمع صغير",
    "كاوتش تراب قمع كبير",
    "كاوتش تراب قمع وسط",
    "كاوتش تفلون دبابة",
    "كاوتش تفلون رمسيس",
    "كاوتش تفلون سوزوكي",
    "كاوتش تفلون نيسان واسع",
    "كاوتش تويوتا 90 ميكروباص",
    "كاوتش رمسيس شفاف",
    "كاوتش سوستة 79 شفاف",
    "كاوتش سوستة تروسيكل صغيرة تفلون",
    "كاوتش سوستة تروسيكل كبيرة تفلون",
    "كاوتش سوستة دايهاتسو أمامي",
    "كاوتش سوستة دايهاتسو خلفي",
    "كاوتش سوستة رمسيس",
    "كاوتش سوستة سوزوكي",
    "كاوتش سوستة دبابة",
    "كاوتش سوستة لادا 81",
    "كاوتش سوستة مازدا بجلبة",
    "كاوتش سوستة ميتسوبيشي 6 سم تفلون",
    "كاوتش سوستة ميتسوبيشي 7 سم تفلون",
    "كاوتش طعمية وسط شفاف",
    "كاوتش ميتسوبيشي 6 سم",
    "كاوتش ميتسوبيشي طويلة",
    "كاوتش ميتسوبيشي قصيرة",
    "كاوتش مربعة صندوق 6*6",
    "كاوتش ميتسوبيشي 7 سم",
    "كاوتش مسلوبة كبيرة شفاف",
    "كاوتش مسلوبة مساعد جامبو لوكس",
    "كاوتش مسلوبة مساعد وسط شفاف",
    "كاوتش نيسان ضيق",
    "كاوتش نيسان وسط",
    "كاوتش بكرة شداد دبابة",
    "ورق فبر سوست بلاستيك كيلو",
    "مسمار عزم ديمكس",
    "مسمار ميزان تويوتا",
    "مفصلة سوستة أمامي التوحيد والنور سوزوكي",
    "مفصلة سوستة تويوتا طويلة",
    "مفصلة سوستة تويوتا قصيرة",
    "مفصلة سوستة تويوتا مرنة",
    "مفصلة سوستة دبابة أبيض لحام",
    "مفصلة سوستة دبابة شحط ليزر",
    "مفصلة سوستة رمسيس شحط",
    "مفصلة سوستة سوزوكي",
    "مفصلة سوستة شيفروليه أمامي",
    "مفصلة سوستة ميتسوبيشي كونتر",
];

/// The effective suggestion dictionary
///
/// Built-in names first, then any custom names from the user's settings, so
/// built-ins win distance ties against user additions.
#[derive(Debug, Clone)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    /// Catalog containing only the built-in names
    pub fn built_in() -> Self {
        Self {
            names: BUILT_IN.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Catalog extended with custom names appended after the built-ins
    pub fn with_custom_items(custom: &[String]) -> Self {
        let mut catalog = Self::built_in();
        catalog.names.extend(custom.iter().cloned());
        catalog
    }

    /// Number of names in the catalog
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the names in priority order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Whether `name` appears in the catalog verbatim
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Rank catalog entries against a query (see [`matcher::suggest`])
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        matcher::suggest(query, &self.names)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::built_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_size() {
        assert_eq!(BUILT_IN.len(), 168);
    }

    #[test]
    fn test_built_in_has_no_blank_entries() {
        assert!(BUILT_IN.iter().all(|name| !name.trim().is_empty()));
    }

    #[test]
    fn test_catalog_suggest_subset_invariant() {
        let catalog = Catalog::built_in();
        for entry in catalog.suggest("سوستة") {
            assert!(catalog.contains(entry));
        }
    }

    #[test]
    fn test_custom_items_appended_after_built_ins() {
        let custom = vec!["فلتر زيت تويوتا".to_string()];
        let catalog = Catalog::with_custom_items(&custom);
        assert_eq!(catalog.len(), BUILT_IN.len() + 1);
        assert_eq!(catalog.iter().last(), Some("فلتر زيت تويوتا"));
        assert!(catalog.contains("فلتر زيت تويوتا"));
    }

    #[test]
    fn test_custom_item_is_suggestable() {
        let custom = vec!["فلتر زيت تويوتا".to_string()];
        let catalog = Catalog::with_custom_items(&custom);
        let result = catalog.suggest("فلتر زيت");
        assert_eq!(result, vec!["فلتر زيت تويوتا"]);
    }

    #[test]
    fn test_real_catalog_prefix_query() {
        let catalog = Catalog::built_in();
        let result = catalog.suggest("برشام");
        assert!(result.contains(&"برشام كيلو"));
    }
}
