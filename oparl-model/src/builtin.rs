//! Field tables of the OParl 1.0 object model.

use oparl_types::{Kind, SCHEMA_URI};

use crate::{Schema, TypeRegistry};

impl TypeRegistry {
    /// Registry for the official OParl 1.0 namespace with every kind
    /// registered.
    #[must_use]
    pub fn oparl_1_0() -> Self {
        Kind::ALL
            .into_iter()
            .fold(Self::new(SCHEMA_URI), |registry, kind| {
                registry.register(oparl_schema(kind))
            })
    }
}

fn oparl_schema(kind: Kind) -> Schema {
    let schema = Schema::new(kind);
    match kind {
        Kind::AgendaItem => schema
            .datetime("start")
            .datetime("end")
            .embedded("resolutionFile")
            .embedded_list("auxiliaryFile")
            .reference("meeting", Kind::Meeting)
            .reference("consultation", Kind::Consultation),
        Kind::Body => schema
            .datetime("licenseValidSince")
            .datetime("oparlSince")
            .embedded("location")
            .embedded_list("legislativeTerm")
            .reference("system", Kind::System)
            .external_list("organization")
            .external_list("person")
            .external_list("meeting")
            .external_list("paper"),
        Kind::Consultation => schema
            .reference("paper", Kind::Paper)
            .reference("agendaItem", Kind::AgendaItem)
            .reference("meeting", Kind::Meeting)
            .reference_list("organization", Kind::Organization),
        Kind::File => schema
            .date("date")
            .reference("masterFile", Kind::File)
            .reference_list("derivativeFile", Kind::File)
            .reference_list("meeting", Kind::Meeting)
            .reference_list("agendaItem", Kind::AgendaItem)
            .reference_list("paper", Kind::Paper),
        Kind::LegislativeTerm => schema
            .date("startDate")
            .date("endDate")
            .reference("body", Kind::Body),
        Kind::Location => schema
            .reference_list("bodies", Kind::Body)
            .reference_list("organizations", Kind::Organization)
            .reference_list("meetings", Kind::Meeting)
            .reference_list("papers", Kind::Paper),
        Kind::Meeting => schema
            .datetime("start")
            .datetime("end")
            .embedded("location")
            .embedded("invitation")
            .embedded("resultsProtocol")
            .embedded("verbatimProtocol")
            .embedded_list("auxiliaryFile")
            .embedded_list("agendaItem")
            .reference_list("organization", Kind::Organization)
            .reference_list("participant", Kind::Person),
        Kind::Membership => schema
            .date("startDate")
            .date("endDate")
            .reference("person", Kind::Person)
            .reference("organization", Kind::Organization)
            .reference("onBehalfOf", Kind::Organization),
        Kind::Organization => schema
            .date("startDate")
            .date("endDate")
            .embedded("location")
            .reference("body", Kind::Body)
            .reference("externalBody", Kind::Body)
            .reference("subOrganizationOf", Kind::Organization)
            .reference_list("membership", Kind::Membership)
            .external_list("meeting"),
        Kind::Paper => schema
            .date("date")
            .embedded("mainFile")
            .embedded_list("auxiliaryFile")
            .embedded_list("location")
            .embedded_list("consultation")
            .reference("body", Kind::Body)
            .reference_list("relatedPaper", Kind::Paper)
            .reference_list("subordinatedPaper", Kind::Paper)
            .reference_list("superordinatedPaper", Kind::Paper)
            .reference_list("originatorPerson", Kind::Person)
            .reference_list("underDirectionOf", Kind::Organization)
            .reference_list("originatorOrganization", Kind::Organization),
        Kind::Person => schema
            .embedded_list("membership")
            .reference("body", Kind::Body)
            .reference("location", Kind::Location),
        Kind::System => schema
            .reference_list("otherOparlVersions", Kind::System)
            .external_list("body"),
    }
}
