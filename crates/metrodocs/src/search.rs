//! Free-text and category filtering over documents.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::{Document, DocumentType};
use crate::store::RecordStore;

/// Sentinel filter value meaning "every type".
pub const ALL_TYPES: &str = "all";

/// Reduced projection of a document returned by search. Content is omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub department: String,
    /// Upload date as `YYYY-MM-DD`.
    pub date: String,
    pub summary: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
}

impl From<Document> for SearchResult {
    fn from(doc: Document) -> Self {
        Self {
            id: doc.id,
            title: doc.title,
            department: doc.department,
            date: doc.uploaded_at.format("%Y-%m-%d").to_string(),
            summary: doc.summary,
            doc_type: doc.doc_type,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(DocumentType),
}

impl TypeFilter {
    /// Absent, empty and `"all"` mean no filtering; anything else must name
    /// a document type.
    pub fn parse(value: Option<&str>) -> Result<Self, ValidationError> {
        match value.map(str::trim) {
            None | Some("") | Some(ALL_TYPES) => Ok(TypeFilter::All),
            Some(other) => other.parse().map(TypeFilter::Only),
        }
    }

    pub fn matches(&self, doc_type: DocumentType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => *t == doc_type,
        }
    }
}

/// Query-string parameters of a search request.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
}

/// Documents of the given type whose title or summary contains `query`
/// (case-insensitive). An empty query matches everything. Results follow
/// store list order (newest upload first).
pub fn search(store: &RecordStore, query: &str, filter: TypeFilter) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    store
        .list_documents()
        .into_iter()
        .filter(|doc| filter.matches(doc.doc_type))
        .filter(|doc| {
            needle.is_empty()
                || doc.title.to_lowercase().contains(&needle)
                || doc.summary.to_lowercase().contains(&needle)
        })
        .map(SearchResult::from)
        .collect()
}

/// Parses request parameters and runs [`search`].
pub fn search_documents(
    store: &RecordStore,
    params: &SearchParams,
) -> Result<Vec<SearchResult>, ValidationError> {
    let filter = TypeFilter::parse(params.doc_type.as_deref())?;
    let query = params.q.as_deref().unwrap_or_default();
    let results = search(store, query, filter);
    log::debug!(
        "Search q={:?} type={:?} returned {} results",
        query,
        filter,
        results.len()
    );
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentDraft;

    fn store_with(docs: &[(&str, &str, DocumentType)]) -> RecordStore {
        let store = RecordStore::new();
        for (title, summary, doc_type) in docs {
            store
                .create_document(DocumentDraft {
                    title: title.to_string(),
                    department: "Ops".to_string(),
                    doc_type: *doc_type,
                    summary: summary.to_string(),
                    content: Some("secret body".to_string()),
                    status: None,
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn test_type_filter_parse() {
        assert_eq!(TypeFilter::parse(None).unwrap(), TypeFilter::All);
        assert_eq!(TypeFilter::parse(Some("")).unwrap(), TypeFilter::All);
        assert_eq!(TypeFilter::parse(Some("all")).unwrap(), TypeFilter::All);
        assert_eq!(
            TypeFilter::parse(Some("hr")).unwrap(),
            TypeFilter::Only(DocumentType::Hr)
        );
        assert_eq!(TypeFilter::parse(Some("legal")).unwrap_err().field, "type");
    }

    #[test]
    fn test_query_matches_title_or_summary_case_insensitively() {
        let store = store_with(&[
            ("BRAKE report", "weekly", DocumentType::Maintenance),
            ("Invoice", "covers brake pads", DocumentType::Finance),
            ("Training", "evacuation", DocumentType::Hr),
        ]);
        let results = search(&store, "Brake", TypeFilter::All);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.title != "Training"));
    }

    #[test]
    fn test_query_does_not_look_at_content() {
        let store = store_with(&[("Invoice", "pads", DocumentType::Finance)]);
        assert!(search(&store, "secret", TypeFilter::All).is_empty());
    }

    #[test]
    fn test_type_and_query_combine() {
        let store = store_with(&[
            ("Brake invoice", "pads", DocumentType::Finance),
            ("Brake report", "weekly", DocumentType::Maintenance),
        ]);
        let results = search(&store, "brake", TypeFilter::Only(DocumentType::Finance));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].doc_type, DocumentType::Finance);
    }

    #[test]
    fn test_projection_formats_date() {
        let store = store_with(&[("Invoice", "pads", DocumentType::Finance)]);
        let doc = store.list_documents().remove(0);
        let result = search(&store, "", TypeFilter::All).remove(0);
        assert_eq!(result.date, doc.uploaded_at.format("%Y-%m-%d").to_string());
        assert_eq!(result.date.len(), 10);
        assert_eq!(result.id, doc.id);
    }

    #[test]
    fn test_search_documents_rejects_unknown_type() {
        let store = store_with(&[]);
        let params = SearchParams {
            q: None,
            doc_type: Some("legal".to_string()),
        };
        assert!(search_documents(&store, &params).is_err());
    }
}
