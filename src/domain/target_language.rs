use std::fmt;

/// The fixed set of languages recognized text can be translated into.
///
/// `label` is the human-readable Portuguese name embedded in the translation
/// prompt; `slug` is the diacritic-free identifier used at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    English,
    Spanish,
    French,
    German,
    Italian,
    Japanese,
    Korean,
    Chinese,
    Russian,
    Arabic,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 10] = [
        Self::English,
        Self::Spanish,
        Self::French,
        Self::German,
        Self::Italian,
        Self::Japanese,
        Self::Korean,
        Self::Chinese,
        Self::Russian,
        Self::Arabic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::English => "inglês",
            Self::Spanish => "espanhol",
            Self::French => "francês",
            Self::German => "alemão",
            Self::Italian => "italiano",
            Self::Japanese => "japonês",
            Self::Korean => "coreano",
            Self::Chinese => "chinês (simplificado)",
            Self::Russian => "russo",
            Self::Arabic => "árabe",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::English => "ingles",
            Self::Spanish => "espanhol",
            Self::French => "frances",
            Self::German => "alemao",
            Self::Italian => "italiano",
            Self::Japanese => "japones",
            Self::Korean => "coreano",
            Self::Chinese => "chines",
            Self::Russian => "russo",
            Self::Arabic => "arabe",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let needle = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.slug() == needle || lang.label() == needle)
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
