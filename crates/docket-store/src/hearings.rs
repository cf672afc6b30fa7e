//! Hearing repository implementation
//!
//! Date filters and the upcoming ordering run in SQL; timestamps are stored
//! as fixed-width RFC 3339 UTC text, so the comparisons are chronological.

use crate::{db_err, fmt_ts, invalid_col, ts_col, SqliteStore};
use chrono::{DateTime, Utc};
use docket_domain::traits::HearingRepository;
use docket_domain::{CaseId, CreateHearing, Hearing, HearingId, HearingStatus, StoreError};
use rusqlite::{params, OptionalExtension, Row};

const COLUMNS: &str =
    "id, case_id, scheduled_at, location, judge, notes, status, created_at, updated_at";

fn row_to_hearing(row: &Row<'_>) -> rusqlite::Result<Hearing> {
    let status_raw: String = row.get(6)?;
    let status = HearingStatus::from_db_value(&status_raw)
        .ok_or_else(|| invalid_col(6, format!("invalid hearing status '{}'", status_raw)))?;

    Ok(Hearing {
        id: HearingId::new(row.get(0)?),
        case_id: CaseId::new(row.get(1)?),
        scheduled_at: ts_col(row, 2)?,
        location: row.get(3)?,
        judge: row.get(4)?,
        notes: row.get(5)?,
        status,
        created_at: ts_col(row, 7)?,
        updated_at: ts_col(row, 8)?,
    })
}

impl HearingRepository for SqliteStore {
    fn create_hearing(&self, draft: CreateHearing) -> Result<Hearing, StoreError> {
        let now = Utc::now();
        let status = HearingStatus::Scheduled;
        self.conn
            .execute(
                "INSERT INTO hearings (case_id, scheduled_at, location, judge, notes, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
                params![
                    draft.case_id.value(),
                    fmt_ts(&draft.scheduled_at),
                    draft.location,
                    draft.judge,
                    draft.notes,
                    status.as_str(),
                    fmt_ts(&now),
                ],
            )
            .map_err(db_err)?;

        Ok(Hearing {
            id: HearingId::new(self.conn.last_insert_rowid()),
            case_id: draft.case_id,
            scheduled_at: draft.scheduled_at,
            location: draft.location,
            judge: draft.judge,
            notes: draft.notes,
            status,
            created_at: now,
            updated_at: now,
        })
    }

    fn get_hearing(&self, id: HearingId) -> Result<Option<Hearing>, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM hearings WHERE id = ?1"),
                params![id.value()],
                row_to_hearing,
            )
            .optional()
            .map_err(db_err)
    }

    fn hearings_for_case(&self, case_id: CaseId) -> Result<Vec<Hearing>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {COLUMNS} FROM hearings WHERE case_id = ?1 ORDER BY scheduled_at ASC"
            ))
            .map_err(db_err)?;
        let hearings = stmt
            .query_map(params![case_id.value()], row_to_hearing)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(hearings)
    }

    fn hearings_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Hearing>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {COLUMNS} FROM hearings
                 WHERE scheduled_at >= ?1 AND scheduled_at <= ?2
                 ORDER BY scheduled_at ASC"
            ))
            .map_err(db_err)?;
        let hearings = stmt
            .query_map(params![fmt_ts(&start), fmt_ts(&end)], row_to_hearing)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(hearings)
    }

    fn upcoming_hearings(&self, after: DateTime<Utc>) -> Result<Vec<Hearing>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {COLUMNS} FROM hearings
                 WHERE scheduled_at > ?1 AND status != ?2
                 ORDER BY scheduled_at ASC"
            ))
            .map_err(db_err)?;
        let hearings = stmt
            .query_map(
                params![fmt_ts(&after), HearingStatus::Cancelled.as_str()],
                row_to_hearing,
            )
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(hearings)
    }

    fn update_hearing(&self, hearing: &Hearing) -> Result<usize, StoreError> {
        self.conn
            .execute(
                "UPDATE hearings SET
                    case_id = ?2,
                    scheduled_at = ?3,
                    location = ?4,
                    judge = ?5,
                    notes = ?6,
                    status = ?7,
                    updated_at = ?8
                 WHERE id = ?1",
                params![
                    hearing.id.value(),
                    hearing.case_id.value(),
                    fmt_ts(&hearing.scheduled_at),
                    hearing.location,
                    hearing.judge,
                    hearing.notes,
                    hearing.status.as_str(),
                    fmt_ts(&Utc::now()),
                ],
            )
            .map_err(db_err)
    }

    fn delete_hearing(&self, id: HearingId) -> Result<usize, StoreError> {
        self.conn
            .execute("DELETE FROM hearings WHERE id = ?1", params![id.value()])
            .map_err(db_err)
    }
}
