//! Document repository implementation

use crate::{db_err, fmt_ts, invalid_col, ts_col, SqliteStore};
use chrono::Utc;
use docket_domain::traits::DocumentRepository;
use docket_domain::{CaseId, CreateDocument, Document, DocumentId, DocumentType, StoreError};
use rusqlite::{params, OptionalExtension, Row};

const COLUMNS: &str = "id, case_id, title, doc_type, content, created_at, updated_at";

fn row_to_document(row: &Row<'_>) -> rusqlite::Result<Document> {
    let type_raw: String = row.get(3)?;
    let doc_type = DocumentType::from_db_value(&type_raw)
        .ok_or_else(|| invalid_col(3, format!("invalid document type '{}'", type_raw)))?;

    Ok(Document {
        id: DocumentId::new(row.get(0)?),
        case_id: CaseId::new(row.get(1)?),
        title: row.get(2)?,
        doc_type,
        content: row.get(4)?,
        created_at: ts_col(row, 5)?,
        updated_at: ts_col(row, 6)?,
    })
}

impl DocumentRepository for SqliteStore {
    fn create_document(&self, draft: CreateDocument) -> Result<Document, StoreError> {
        let now = Utc::now();
        self.conn
            .execute(
                "INSERT INTO documents (case_id, title, doc_type, content, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
                params![
                    draft.case_id.value(),
                    draft.title,
                    draft.doc_type.as_str(),
                    draft.content,
                    fmt_ts(&now),
                ],
            )
            .map_err(db_err)?;

        Ok(Document {
            id: DocumentId::new(self.conn.last_insert_rowid()),
            case_id: draft.case_id,
            title: draft.title,
            doc_type: draft.doc_type,
            content: draft.content,
            created_at: now,
            updated_at: now,
        })
    }

    fn get_document(&self, id: DocumentId) -> Result<Option<Document>, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM documents WHERE id = ?1"),
                params![id.value()],
                row_to_document,
            )
            .optional()
            .map_err(db_err)
    }

    fn documents_for_case(&self, case_id: CaseId) -> Result<Vec<Document>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {COLUMNS} FROM documents WHERE case_id = ?1 ORDER BY id ASC"
            ))
            .map_err(db_err)?;
        let documents = stmt
            .query_map(params![case_id.value()], row_to_document)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(documents)
    }

    fn update_document(&self, document: &Document) -> Result<usize, StoreError> {
        self.conn
            .execute(
                "UPDATE documents SET
                    case_id = ?2,
                    title = ?3,
                    doc_type = ?4,
                    content = ?5,
                    updated_at = ?6
                 WHERE id = ?1",
                params![
                    document.id.value(),
                    document.case_id.value(),
                    document.title,
                    document.doc_type.as_str(),
                    document.content,
                    fmt_ts(&Utc::now()),
                ],
            )
            .map_err(db_err)
    }

    fn delete_document(&self, id: DocumentId) -> Result<usize, StoreError> {
        self.conn
            .execute("DELETE FROM documents WHERE id = ?1", params![id.value()])
            .map_err(db_err)
    }
}
