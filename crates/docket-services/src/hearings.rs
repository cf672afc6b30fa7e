//! Hearing service - scheduling rules and the audited reschedule path

use crate::error::{not_found, ServiceError};
use chrono::{DateTime, SecondsFormat, Utc};
use docket_domain::traits::{CaseRepository, HearingRepository};
use docket_domain::{CaseId, CreateHearing, Hearing, HearingId, HearingStatus, UpdateHearing};
use tracing::{debug, info};

/// Business rules for hearings
///
/// Date changes normally flow through [`HearingService::reschedule_hearing`],
/// which appends an audit line to the notes and forces the status back to
/// `Scheduled`.
pub struct HearingService<'a, S> {
    store: &'a S,
}

impl<'a, S> HearingService<'a, S>
where
    S: HearingRepository + CaseRepository,
{
    /// Create a service over the given store
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn require_hearing(&self, id: HearingId) -> Result<Hearing, ServiceError> {
        self.store
            .get_hearing(id)?
            .ok_or_else(|| not_found("hearing", id.value()))
    }

    fn require_case(&self, id: CaseId) -> Result<(), ServiceError> {
        self.store
            .get_case(id)?
            .map(|_| ())
            .ok_or_else(|| not_found("case", id.value()))
    }

    /// Schedule a hearing; the owning case must exist and the status
    /// always starts `Scheduled`
    pub fn create_hearing(&self, draft: CreateHearing) -> Result<Hearing, ServiceError> {
        self.require_case(draft.case_id)?;
        let hearing = self.store.create_hearing(draft)?;
        info!(
            id = hearing.id.value(),
            case_id = hearing.case_id.value(),
            "hearing scheduled"
        );
        Ok(hearing)
    }

    /// Look up a hearing, failing with `NotFound` when absent
    pub fn get_hearing(&self, id: HearingId) -> Result<Hearing, ServiceError> {
        self.require_hearing(id)
    }

    /// Hearings belonging to a case; the case must exist
    pub fn hearings_for_case(&self, case_id: CaseId) -> Result<Vec<Hearing>, ServiceError> {
        self.require_case(case_id)?;
        Ok(self.store.hearings_for_case(case_id)?)
    }

    /// Apply a partial update
    ///
    /// The date can be set here too, but the reschedule operation is the
    /// audited path for date changes.
    pub fn update_hearing(
        &self,
        id: HearingId,
        update: UpdateHearing,
    ) -> Result<Hearing, ServiceError> {
        let mut hearing = self.require_hearing(id)?;
        hearing.apply(update);

        let affected = self.store.update_hearing(&hearing)?;
        if affected == 0 {
            return Err(not_found("hearing", id.value()));
        }
        debug!(id = id.value(), "hearing updated");

        self.require_hearing(id)
    }

    /// Move a hearing to a new date
    ///
    /// Forces the status back to `Scheduled` and appends an audit line
    /// naming both the old and the new date, preserving prior notes.
    pub fn reschedule_hearing(
        &self,
        id: HearingId,
        new_date: DateTime<Utc>,
    ) -> Result<Hearing, ServiceError> {
        let mut hearing = self.require_hearing(id)?;
        let old_date = hearing.scheduled_at;

        hearing.scheduled_at = new_date;
        hearing.status = HearingStatus::Scheduled;
        hearing.append_note(&format!(
            "Hearing rescheduled from: {} to: {}",
            fmt_audit_date(&old_date),
            fmt_audit_date(&new_date),
        ));

        let affected = self.store.update_hearing(&hearing)?;
        if affected == 0 {
            return Err(not_found("hearing", id.value()));
        }
        info!(
            id = id.value(),
            old = %old_date,
            new = %new_date,
            "hearing rescheduled"
        );

        self.require_hearing(id)
    }

    /// Hearings with a date inside `[start, end]`, ascending
    ///
    /// `start > end` fails with `InvalidArgument` before any store access.
    pub fn hearings_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Hearing>, ServiceError> {
        if start > end {
            return Err(ServiceError::InvalidArgument(format!(
                "start date {} is after end date {}",
                fmt_audit_date(&start),
                fmt_audit_date(&end),
            )));
        }
        Ok(self.store.hearings_in_range(start, end)?)
    }

    /// Hearings strictly in the future and not cancelled, earliest first
    ///
    /// The ascending order is part of the contract, not an accident of
    /// storage.
    pub fn upcoming_hearings(&self) -> Result<Vec<Hearing>, ServiceError> {
        Ok(self.store.upcoming_hearings(Utc::now())?)
    }

    /// Delete a hearing, failing with `NotFound` when absent
    pub fn delete_hearing(&self, id: HearingId) -> Result<(), ServiceError> {
        let affected = self.store.delete_hearing(id)?;
        if affected == 0 {
            return Err(not_found("hearing", id.value()));
        }
        info!(id = id.value(), "hearing deleted");
        Ok(())
    }
}

/// Human-readable date form used in audit lines and error messages
fn fmt_audit_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}
