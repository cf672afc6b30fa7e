//! Case repository implementation

use crate::{db_err, fmt_ts, invalid_col, ts_col, SqliteStore};
use chrono::Utc;
use docket_domain::traits::CaseRepository;
use docket_domain::{Case, CaseId, CaseStatus, CaseType, CreateCase, StoreError};
use rusqlite::{params, OptionalExtension, Row};

const COLUMNS: &str = "id, case_number, title, case_type, description, status, created_at, updated_at";

pub(crate) fn row_to_case(row: &Row<'_>) -> rusqlite::Result<Case> {
    let type_raw: String = row.get(3)?;
    let case_type = CaseType::from_db_value(&type_raw)
        .ok_or_else(|| invalid_col(3, format!("invalid case type '{}'", type_raw)))?;
    let status_raw: String = row.get(5)?;
    let status = CaseStatus::from_db_value(&status_raw)
        .ok_or_else(|| invalid_col(5, format!("invalid case status '{}'", status_raw)))?;

    Ok(Case {
        id: CaseId::new(row.get(0)?),
        case_number: row.get(1)?,
        title: row.get(2)?,
        case_type,
        description: row.get(4)?,
        status,
        created_at: ts_col(row, 6)?,
        updated_at: ts_col(row, 7)?,
    })
}

impl CaseRepository for SqliteStore {
    fn create_case(&self, draft: CreateCase) -> Result<Case, StoreError> {
        let now = Utc::now();
        let status = CaseStatus::New;
        self.conn
            .execute(
                "INSERT INTO cases (case_number, title, case_type, description, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
                params![
                    draft.case_number,
                    draft.title,
                    draft.case_type.as_str(),
                    draft.description,
                    status.as_str(),
                    fmt_ts(&now),
                ],
            )
            .map_err(db_err)?;

        Ok(Case {
            id: CaseId::new(self.conn.last_insert_rowid()),
            case_number: draft.case_number,
            title: draft.title,
            case_type: draft.case_type,
            description: draft.description,
            status,
            created_at: now,
            updated_at: now,
        })
    }

    fn get_case(&self, id: CaseId) -> Result<Option<Case>, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM cases WHERE id = ?1"),
                params![id.value()],
                row_to_case,
            )
            .optional()
            .map_err(db_err)
    }

    fn get_case_by_number(&self, case_number: &str) -> Result<Option<Case>, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM cases WHERE case_number = ?1"),
                params![case_number],
                row_to_case,
            )
            .optional()
            .map_err(db_err)
    }

    fn list_cases(&self) -> Result<Vec<Case>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {COLUMNS} FROM cases ORDER BY id ASC"))
            .map_err(db_err)?;
        let cases = stmt
            .query_map([], row_to_case)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(cases)
    }

    fn update_case(&self, case: &Case) -> Result<usize, StoreError> {
        self.conn
            .execute(
                "UPDATE cases SET
                    case_number = ?2,
                    title = ?3,
                    case_type = ?4,
                    description = ?5,
                    status = ?6,
                    updated_at = ?7
                 WHERE id = ?1",
                params![
                    case.id.value(),
                    case.case_number,
                    case.title,
                    case.case_type.as_str(),
                    case.description,
                    case.status.as_str(),
                    fmt_ts(&Utc::now()),
                ],
            )
            .map_err(db_err)
    }

    fn delete_case(&self, id: CaseId) -> Result<usize, StoreError> {
        self.conn
            .execute("DELETE FROM cases WHERE id = ?1", params![id.value()])
            .map_err(db_err)
    }
}
