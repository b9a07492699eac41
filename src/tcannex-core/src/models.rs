use serde::{Deserialize, Serialize};

/// Document represents a published framework or standard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub doc_identifier: String,
    pub name: String,
    pub version: String,
    pub website: String,
}

/// Element is a structural unit (function, category, control) within a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub doc_identifier: String,
    pub element_type: String,
    pub element_identifier: String,
    pub title: String,
    pub text: String,
}

/// RelationshipType describes what a relationship_identifier means
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipType {
    pub relationship_identifier: String,
    pub description: String,
    pub value: String,
}

/// Relationship is a directed edge between two (document, element) pairs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub source_element_identifier: String,
    pub source_doc_identifier: String,
    pub dest_element_identifier: String,
    pub dest_doc_identifier: String,
    pub provenance_doc_identifier: String,
    pub relationship_identifier: String, // Not checked against relationship_types
}

/// CprtResponse is the envelope returned by every CPRT endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CprtResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub relationship_types: Vec<RelationshipType>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl CprtResponse {
    /// Decode a response body.
    ///
    /// The body must be a JSON object. Absent lists become empty, while a list
    /// that is present with the wrong shape (including `null`) is an error.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(body)?;
        serde_json::from_value(serde_json::Value::Object(object))
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
            && self.elements.is_empty()
            && self.relationship_types.is_empty()
            && self.relationships.is_empty()
    }

    pub fn document(&self, doc_identifier: &str) -> Option<&Document> {
        self.documents
            .iter()
            .find(|d| d.doc_identifier == doc_identifier)
    }

    pub fn element(&self, doc_identifier: &str, element_identifier: &str) -> Option<&Element> {
        self.elements.iter().find(|e| {
            e.doc_identifier == doc_identifier && e.element_identifier == element_identifier
        })
    }

    pub fn relationship_type(&self, relationship_identifier: &str) -> Option<&RelationshipType> {
        self.relationship_types
            .iter()
            .find(|t| t.relationship_identifier == relationship_identifier)
    }

    /// Outgoing edges of the given element, in response order
    pub fn relationships_from<'a>(
        &'a self,
        doc_identifier: &'a str,
        element_identifier: &'a str,
    ) -> impl Iterator<Item = &'a Relationship> + 'a {
        self.relationships.iter().filter(move |r| {
            r.source_doc_identifier == doc_identifier
                && r.source_element_identifier == element_identifier
        })
    }
}
