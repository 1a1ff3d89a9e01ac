//! IRI constants for every vocabulary term the generator reads.
//!
//! Grouped by vocabulary. Each module exposes its namespace as `NS` and the
//! individual terms as upper-case constants.

/// RDF.
pub mod rdf {
    /// Namespace IRI.
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// `rdf:type`.
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:Property`.
    pub const PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
    /// `rdf:first`.
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    /// `rdf:rest`.
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    /// `rdf:nil`.
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    /// `rdf:HTML`.
    pub const HTML: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#HTML";
    /// `rdf:langString`.
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// RDF Schema.
pub mod rdfs {
    /// Namespace IRI.
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// `rdfs:Class`.
    pub const CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
    /// `rdfs:label`.
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`.
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `rdfs:subClassOf`.
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:subPropertyOf`.
    pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    /// `rdfs:domain`.
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`.
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    /// `rdfs:isDefinedBy`.
    pub const IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
    /// `rdfs:seeAlso`.
    pub const SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";
}

/// OWL 2.
pub mod owl {
    /// Namespace IRI.
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";
    /// `owl:Ontology`.
    pub const ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// `owl:Class`.
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:Restriction`.
    pub const RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
    /// `owl:NamedIndividual`.
    pub const NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    /// `owl:ObjectProperty`.
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:FunctionalProperty`.
    pub const FUNCTIONAL_PROPERTY: &str = "http://www.w3.org/2002/07/owl#FunctionalProperty";
    /// `owl:DatatypeProperty`.
    pub const DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `owl:AnnotationProperty`.
    pub const ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
    /// `owl:imports`.
    pub const IMPORTS: &str = "http://www.w3.org/2002/07/owl#imports";
    /// `owl:versionIRI`.
    pub const VERSION_IRI: &str = "http://www.w3.org/2002/07/owl#versionIRI";
    /// `owl:versionInfo`.
    pub const VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
    /// `owl:equivalentClass`.
    pub const EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
    /// `owl:equivalentProperty`.
    pub const EQUIVALENT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#equivalentProperty";
    /// `owl:disjointWith`.
    pub const DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";
    /// `owl:inverseOf`.
    pub const INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";
    /// `owl:sameAs`.
    pub const SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";
    /// `owl:unionOf`.
    pub const UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";
    /// `owl:intersectionOf`.
    pub const INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";
    /// `owl:onProperty`.
    pub const ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
    /// `owl:onClass`.
    pub const ON_CLASS: &str = "http://www.w3.org/2002/07/owl#onClass";
    /// `owl:onDataRange`.
    pub const ON_DATA_RANGE: &str = "http://www.w3.org/2002/07/owl#onDataRange";
    /// `owl:cardinality`.
    pub const CARDINALITY: &str = "http://www.w3.org/2002/07/owl#cardinality";
    /// `owl:qualifiedCardinality`.
    pub const QUALIFIED_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#qualifiedCardinality";
    /// `owl:minCardinality`.
    pub const MIN_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#minCardinality";
    /// `owl:minQualifiedCardinality`.
    pub const MIN_QUALIFIED_CARDINALITY: &str =
        "http://www.w3.org/2002/07/owl#minQualifiedCardinality";
    /// `owl:maxCardinality`.
    pub const MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";
    /// `owl:maxQualifiedCardinality`.
    pub const MAX_QUALIFIED_CARDINALITY: &str =
        "http://www.w3.org/2002/07/owl#maxQualifiedCardinality";
    /// `owl:someValuesFrom`.
    pub const SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";
    /// `owl:allValuesFrom`.
    pub const ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";
    /// `owl:hasValue`.
    pub const HAS_VALUE: &str = "http://www.w3.org/2002/07/owl#hasValue";
}

/// XML Schema datatypes.
pub mod xsd {
    /// Namespace IRI.
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
    /// `xsd:string`.
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
}

/// Dublin Core elements (the legacy `/elements/1.1/` namespace).
pub mod dc {
    /// Namespace IRI.
    pub const NS: &str = "http://purl.org/dc/elements/1.1/";
    /// `dc:title`.
    pub const TITLE: &str = "http://purl.org/dc/elements/1.1/title";
    /// `dc:description`.
    pub const DESCRIPTION: &str = "http://purl.org/dc/elements/1.1/description";
    /// `dc:creator`.
    pub const CREATOR: &str = "http://purl.org/dc/elements/1.1/creator";
    /// `dc:contributor`.
    pub const CONTRIBUTOR: &str = "http://purl.org/dc/elements/1.1/contributor";
    /// `dc:publisher`.
    pub const PUBLISHER: &str = "http://purl.org/dc/elements/1.1/publisher";
    /// `dc:source`.
    pub const SOURCE: &str = "http://purl.org/dc/elements/1.1/source";
}

/// Dublin Core terms.
pub mod dcterms {
    /// Namespace IRI.
    pub const NS: &str = "http://purl.org/dc/terms/";
    /// `dcterms:title`.
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    /// `dcterms:description`.
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    /// `dcterms:creator`.
    pub const CREATOR: &str = "http://purl.org/dc/terms/creator";
    /// `dcterms:contributor`.
    pub const CONTRIBUTOR: &str = "http://purl.org/dc/terms/contributor";
    /// `dcterms:publisher`.
    pub const PUBLISHER: &str = "http://purl.org/dc/terms/publisher";
    /// `dcterms:created`.
    pub const CREATED: &str = "http://purl.org/dc/terms/created";
    /// `dcterms:modified`.
    pub const MODIFIED: &str = "http://purl.org/dc/terms/modified";
    /// `dcterms:issued`.
    pub const ISSUED: &str = "http://purl.org/dc/terms/issued";
    /// `dcterms:source`.
    pub const SOURCE: &str = "http://purl.org/dc/terms/source";
    /// `dcterms:license`.
    pub const LICENSE: &str = "http://purl.org/dc/terms/license";
    /// `dcterms:rights`.
    pub const RIGHTS: &str = "http://purl.org/dc/terms/rights";
    /// `dcterms:format`.
    pub const FORMAT: &str = "http://purl.org/dc/terms/format";
    /// `dcterms:conformsTo`.
    pub const CONFORMS_TO: &str = "http://purl.org/dc/terms/conformsTo";
}

/// SKOS.
pub mod skos {
    /// Namespace IRI.
    pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";
    /// `skos:prefLabel`.
    pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
    /// `skos:definition`.
    pub const DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
    /// `skos:scopeNote`.
    pub const SCOPE_NOTE: &str = "http://www.w3.org/2004/02/skos/core#scopeNote";
    /// `skos:example`.
    pub const EXAMPLE: &str = "http://www.w3.org/2004/02/skos/core#example";
    /// `skos:historyNote`.
    pub const HISTORY_NOTE: &str = "http://www.w3.org/2004/02/skos/core#historyNote";
}

/// schema.org, in its `https` form.
pub mod sdo {
    /// Namespace IRI.
    pub const NS: &str = "https://schema.org/";
    /// `sdo:name`.
    pub const NAME: &str = "https://schema.org/name";
    /// `sdo:description`.
    pub const DESCRIPTION: &str = "https://schema.org/description";
    /// `sdo:creator`.
    pub const CREATOR: &str = "https://schema.org/creator";
    /// `sdo:author`.
    pub const AUTHOR: &str = "https://schema.org/author";
    /// `sdo:contributor`.
    pub const CONTRIBUTOR: &str = "https://schema.org/contributor";
    /// `sdo:publisher`.
    pub const PUBLISHER: &str = "https://schema.org/publisher";
    /// `sdo:editor`.
    pub const EDITOR: &str = "https://schema.org/editor";
    /// `sdo:funder`.
    pub const FUNDER: &str = "https://schema.org/funder";
    /// `sdo:translator`.
    pub const TRANSLATOR: &str = "https://schema.org/translator";
    /// `sdo:domainIncludes`.
    pub const DOMAIN_INCLUDES: &str = "https://schema.org/domainIncludes";
    /// `sdo:rangeIncludes`.
    pub const RANGE_INCLUDES: &str = "https://schema.org/rangeIncludes";
    /// `sdo:codeRepository`.
    pub const CODE_REPOSITORY: &str = "https://schema.org/codeRepository";
    /// `sdo:email`.
    pub const EMAIL: &str = "https://schema.org/email";
    /// `sdo:url`.
    pub const URL: &str = "https://schema.org/url";
    /// `sdo:affiliation`.
    pub const AFFILIATION: &str = "https://schema.org/affiliation";
}

/// PROV-O.
pub mod prov {
    /// Namespace IRI.
    pub const NS: &str = "http://www.w3.org/ns/prov#";
    /// `prov:wasGeneratedBy`.
    pub const WAS_GENERATED_BY: &str = "http://www.w3.org/ns/prov#wasGeneratedBy";
}

/// DOAP.
pub mod doap {
    /// Namespace IRI.
    pub const NS: &str = "http://usefulinc.com/ns/doap#";
    /// `doap:repository`.
    pub const REPOSITORY: &str = "http://usefulinc.com/ns/doap#repository";
}

/// The Profiles Vocabulary.
pub mod prof {
    /// Namespace IRI.
    pub const NS: &str = "http://www.w3.org/ns/dx/prof/";
    /// `prof:hasArtifact`.
    pub const HAS_ARTIFACT: &str = "http://www.w3.org/ns/dx/prof/hasArtifact";
}

/// VANN.
pub mod vann {
    /// Namespace IRI.
    pub const NS: &str = "http://purl.org/vocab/vann/";
    /// `vann:preferredNamespacePrefix`.
    pub const PREFERRED_NAMESPACE_PREFIX: &str =
        "http://purl.org/vocab/vann/preferredNamespacePrefix";
    /// `vann:preferredNamespaceUri`.
    pub const PREFERRED_NAMESPACE_URI: &str = "http://purl.org/vocab/vann/preferredNamespaceUri";
}

/// SHACL, used here only for prefix declarations.
pub mod sh {
    /// Namespace IRI.
    pub const NS: &str = "http://www.w3.org/ns/shacl#";
    /// `sh:declare`.
    pub const DECLARE: &str = "http://www.w3.org/ns/shacl#declare";
    /// `sh:prefix`.
    pub const PREFIX: &str = "http://www.w3.org/ns/shacl#prefix";
    /// `sh:namespace`.
    pub const NAMESPACE: &str = "http://www.w3.org/ns/shacl#namespace";
}

/// FOAF, only needed for its namespace.
pub mod foaf {
    /// Namespace IRI.
    pub const NS: &str = "http://xmlns.com/foaf/0.1/";
}
