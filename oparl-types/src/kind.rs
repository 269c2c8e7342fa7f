//! Resource kinds of the OParl 1.0 object model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The kind of an OParl resource.
///
/// Every resource resolves to exactly one kind. The kind name is the last
/// path segment of the resource's type URI (e.g. `Body` in
/// `https://schema.oparl.org/1.0/Body`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    AgendaItem,
    Body,
    Consultation,
    File,
    LegislativeTerm,
    Location,
    Meeting,
    Membership,
    Organization,
    Paper,
    Person,
    System,
}

impl Kind {
    /// All kinds, in alphabetical order.
    pub const ALL: [Kind; 12] = [
        Kind::AgendaItem,
        Kind::Body,
        Kind::Consultation,
        Kind::File,
        Kind::LegislativeTerm,
        Kind::Location,
        Kind::Meeting,
        Kind::Membership,
        Kind::Organization,
        Kind::Paper,
        Kind::Person,
        Kind::System,
    ];

    /// Returns the kind name as it appears in type URIs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::AgendaItem => "AgendaItem",
            Kind::Body => "Body",
            Kind::Consultation => "Consultation",
            Kind::File => "File",
            Kind::LegislativeTerm => "LegislativeTerm",
            Kind::Location => "Location",
            Kind::Meeting => "Meeting",
            Kind::Membership => "Membership",
            Kind::Organization => "Organization",
            Kind::Paper => "Paper",
            Kind::Person => "Person",
            Kind::System => "System",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}
