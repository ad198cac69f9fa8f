//! Requirement catalog for CSDL model validation.
//!
//! Every normative rule from the OData 4.0 CSDL specification that a model
//! validator may report is listed once in the catalog table, pairing a
//! human-readable message with the citation of the clause it comes from.
//!
//! Requirements are addressed two ways:
//!
//! - through the typed constants on [`Fixed`] and [`Contextual`], where the
//!   compiler enforces whether a context value must be supplied;
//! - through their stable string keys (`"schema_name"`, `"et_cycle_s"`) via
//!   the functions in [`registry`].

use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::Diagnostic;

/// Marker substituted by the context value when rendering a template.
pub const PLACEHOLDER: &str = "%s";

macro_rules! requirement_catalog {
    (@status Superseded($by:ident)) => {
        Status::Superseded(RequirementKey::$by)
    };
    (@status $status:ident) => {
        Status::$status
    };
    (@arity fixed) => {
        Arity::Fixed
    };
    (@arity contextual) => {
        Arity::Contextual
    };
    (@typed fixed $variant:ident) => {
        #[allow(non_upper_case_globals)]
        impl Fixed {
            pub const $variant: Fixed = Fixed(RequirementKey::$variant);
        }
    };
    (@typed contextual $variant:ident) => {
        #[allow(non_upper_case_globals)]
        impl Contextual {
            pub const $variant: Contextual = Contextual(RequirementKey::$variant);
        }
    };
    ($(
        $(#[$meta:meta])*
        $kind:ident $variant:ident = $key:literal, $section:ident, [$($status:tt)+]
            $message:literal => $citation:literal;
    )+) => {
        /// Identifies one requirement of the catalog.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum RequirementKey {
            $( $(#[$meta])* $variant, )+
        }

        impl RequirementKey {
            /// Every requirement, in document order.
            pub const ALL: &'static [RequirementKey] = &[$(RequirementKey::$variant),+];

            pub const fn spec(self) -> RequirementSpec {
                match self {
                    $(RequirementKey::$variant => RequirementSpec {
                        key: $key,
                        section: Section::$section,
                        status: requirement_catalog!(@status $($status)+),
                        arity: requirement_catalog!(@arity $kind),
                        message: $message,
                        citation: $citation,
                    },)+
                }
            }
        }

        $( requirement_catalog!(@typed $kind $variant); )+

        const _: () = {
            let keys: &[&str] = &[$($key),+];
            assert!(keys_unique(keys), "duplicate requirement key in catalog");
            $(
                assert!(
                    placeholder_count($message) == requirement_catalog!(@arity $kind).placeholders(),
                    "message placeholders do not match arity"
                );
                assert!(
                    placeholder_count($citation) == requirement_catalog!(@arity $kind).placeholders(),
                    "citation placeholders do not match arity"
                );
            )+
        };
    };
}

mod catalog;
pub mod registry;

pub use catalog::RequirementKey;
pub use registry::{
    AuditFinding, RegistryError, audit, audit_entries, by_section, by_status, citation,
    export_json, keys, lookup, render, render_citation,
};

/// Section of the CSDL specification (OData 4.0 Part 3) a requirement is
/// drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    EntityModelWrapper,
    CommonCharacteristics,
    Schema,
    StructuralProperty,
    NavigationProperty,
    EntityType,
    ComplexType,
    EnumerationType,
    TypeDefinition,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::EntityModelWrapper,
        Section::CommonCharacteristics,
        Section::Schema,
        Section::StructuralProperty,
        Section::NavigationProperty,
        Section::EntityType,
        Section::ComplexType,
        Section::EnumerationType,
        Section::TypeDefinition,
    ];

    pub const fn number(self) -> u8 {
        match self {
            Section::EntityModelWrapper => 3,
            Section::CommonCharacteristics => 4,
            Section::Schema => 5,
            Section::StructuralProperty => 6,
            Section::NavigationProperty => 7,
            Section::EntityType => 8,
            Section::ComplexType => 9,
            Section::EnumerationType => 10,
            Section::TypeDefinition => 11,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Section::EntityModelWrapper => "Entity Model Wrapper",
            Section::CommonCharacteristics => "Common Characteristics of Entity Models",
            Section::Schema => "Schema",
            Section::StructuralProperty => "Structural Property",
            Section::NavigationProperty => "Navigation Property",
            Section::EntityType => "Entity Type",
            Section::ComplexType => "Complex Type",
            Section::EnumerationType => "Enumeration Type",
            Section::TypeDefinition => "Type Definition",
        }
    }

    pub fn from_number(number: u8) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.number() == number)
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.number(), self.title())
    }
}

/// Whether a validator actually reports a requirement.
///
/// Requirements that are never raised stay in the catalog so the whole
/// specification text is traceable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Reported by the validator.
    Enforced,
    /// Reported in principle, but a violation is indistinguishable from
    /// another failure so no test case exercises it.
    Untested,
    /// Not checked yet.
    Pending,
    /// Never reported; the named requirement covers the same condition.
    Superseded(RequirementKey),
    /// Not a property of the model itself (client obligations, usage
    /// constraints, XML escaping).
    NotValidated,
}

impl Status {
    /// Every status name, as returned by [`Status::name`].
    pub const NAMES: [&'static str; 5] =
        ["enforced", "untested", "pending", "superseded", "not_validated"];

    pub const fn name(self) -> &'static str {
        match self {
            Status::Enforced => "enforced",
            Status::Untested => "untested",
            Status::Pending => "pending",
            Status::Superseded(_) => "superseded",
            Status::NotValidated => "not_validated",
        }
    }

    pub const fn superseded_by(self) -> Option<RequirementKey> {
        match self {
            Status::Superseded(key) => Some(key),
            _ => None,
        }
    }

    /// Matches a status by name; superseded statuses match `"superseded"`
    /// whatever their target.
    pub fn matches_name(self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
    }

    pub fn is_known_name(name: &str) -> bool {
        Status::NAMES.iter().any(|known| known.eq_ignore_ascii_case(name))
    }
}

/// Number of context values a requirement's templates take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    Fixed,
    Contextual,
}

impl Arity {
    pub const fn placeholders(self) -> usize {
        match self {
            Arity::Fixed => 0,
            Arity::Contextual => 1,
        }
    }
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequirementSpec {
    pub key: &'static str,
    pub section: Section,
    pub status: Status,
    pub arity: Arity,
    pub message: &'static str,
    pub citation: &'static str,
}

impl RequirementKey {
    pub const fn as_str(self) -> &'static str {
        self.spec().key
    }

    pub const fn message(self) -> &'static str {
        self.spec().message
    }

    pub const fn citation(self) -> &'static str {
        self.spec().citation
    }

    pub const fn section(self) -> Section {
        self.spec().section
    }

    pub const fn status(self) -> Status {
        self.spec().status
    }

    pub const fn arity(self) -> Arity {
        self.spec().arity
    }

    /// Splits the key into its typed form.
    pub const fn classify(self) -> Requirement {
        match self.arity() {
            Arity::Fixed => Requirement::Fixed(Fixed(self)),
            Arity::Contextual => Requirement::Contextual(Contextual(self)),
        }
    }
}

impl Display for RequirementKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RequirementKey {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        registry::resolve(s)
    }
}

impl Serialize for RequirementKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A requirement whose templates take no context value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fixed(RequirementKey);

impl Fixed {
    pub const fn key(self) -> RequirementKey {
        self.0
    }

    pub const fn message(self) -> &'static str {
        self.0.message()
    }

    pub const fn citation(self) -> &'static str {
        self.0.citation()
    }

    pub fn diagnostic(self) -> Diagnostic {
        Diagnostic::from_requirement(self.0, self.message().to_string(), None)
    }
}

/// A requirement whose templates take exactly one context value, normally
/// the qualified name or path of the offending element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Contextual(RequirementKey);

impl Contextual {
    pub const fn key(self) -> RequirementKey {
        self.0
    }

    /// The message template, placeholder intact.
    pub const fn template(self) -> &'static str {
        self.0.message()
    }

    /// The citation template, placeholder intact.
    pub const fn citation(self) -> &'static str {
        self.0.citation()
    }

    pub fn render(self, context: &str) -> String {
        fill(self.template(), context)
    }

    pub fn render_citation(self, context: &str) -> String {
        fill(self.citation(), context)
    }

    pub fn diagnostic(self, context: impl Into<String>) -> Diagnostic {
        let context = context.into();
        Diagnostic::from_requirement(self.0, self.render(&context), Some(context))
    }
}

/// A requirement key tagged with its arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Fixed(Fixed),
    Contextual(Contextual),
}

impl Requirement {
    pub const fn key(self) -> RequirementKey {
        match self {
            Requirement::Fixed(f) => f.key(),
            Requirement::Contextual(c) => c.key(),
        }
    }
}

impl From<Fixed> for RequirementKey {
    fn from(value: Fixed) -> Self {
        value.0
    }
}

impl From<Contextual> for RequirementKey {
    fn from(value: Contextual) -> Self {
        value.0
    }
}

/// Substitutes `context` for the first placeholder of `template`.
pub fn fill(template: &str, context: &str) -> String {
    template.replacen(PLACEHOLDER, context, 1)
}

const fn placeholder_count(template: &str) -> usize {
    let bytes = template.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'%' && bytes[i + 1] == b's' {
            count += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    count
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn keys_unique(keys: &[&str]) -> bool {
    let mut i = 0;
    while i < keys.len() {
        let mut j = i + 1;
        while j < keys.len() {
            if str_eq(keys[i], keys[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}
