//! Typography samples and design principles

/// Nominal role of a typography sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeRole {
    Heading1,
    Heading2,
    Heading3,
    /// Main reading text
    BodyPrimary,
    /// Supporting paragraph, slightly muted
    BodySecondary,
    /// Small print
    Small,
}

impl TypeRole {
    /// Style hook used by the renderer
    pub fn class(&self) -> &'static str {
        match self {
            TypeRole::Heading1 => "type-h1",
            TypeRole::Heading2 => "type-h2",
            TypeRole::Heading3 => "type-h3",
            TypeRole::BodyPrimary => "type-body",
            TypeRole::BodySecondary => "type-body-secondary",
            TypeRole::Small => "type-small",
        }
    }
}

/// Illustrative text fragment with its role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSample {
    pub role: TypeRole,
    pub text: &'static str,
}

/// One short essay in the design-principles panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignPrinciple {
    pub title: &'static str,
    pub description: &'static str,
}
