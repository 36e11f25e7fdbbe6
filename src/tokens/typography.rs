/// Host typography scale. Each token maps to one named text style of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontToken {
    LargeTitle,
    Title,
    Title2,
    Title3,
    Headline,
    Body,
    Callout,
    Subheadline,
    Footnote,
    Caption,
}

impl FontToken {
    pub const fn name(self) -> &'static str {
        match self {
            Self::LargeTitle => "large-title",
            Self::Title => "title",
            Self::Title2 => "title2",
            Self::Title3 => "title3",
            Self::Headline => "headline",
            Self::Body => "body",
            Self::Callout => "callout",
            Self::Subheadline => "subheadline",
            Self::Footnote => "footnote",
            Self::Caption => "caption",
        }
    }

    /// Weight the host applies when no explicit weight is requested.
    pub const fn default_weight(self) -> FontWeight {
        match self {
            Self::Headline => FontWeight::Semibold,
            _ => FontWeight::Regular,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
}

impl FontWeight {
    /// CSS numeric weight.
    pub const fn value(self) -> u16 {
        match self {
            Self::Regular => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Font {
    pub token: FontToken,
    pub weight: FontWeight,
}

impl Font {
    pub const fn new(token: FontToken, weight: FontWeight) -> Self {
        Self { token, weight }
    }

    pub const fn of(token: FontToken) -> Self {
        Self::new(token, token.default_weight())
    }
}
