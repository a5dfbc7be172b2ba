use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_date_or_datetime;
use chrono::NaiveDate;

/// Result of dropping an event onto a day cell.
///
/// Drop targets only carry day resolution; the clock time is chosen later
/// in the reschedule confirmation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropOutcome {
    pub source_event_id: String,
    pub target_date: NaiveDate,
    pub target_column_index: Option<usize>,
}

impl DropOutcome {
    /// Build a drop outcome from the raw gesture payload.
    ///
    /// - `destination == None` → the drag was aborted, `Ok(None)`.
    /// - an empty source id or an unparsable destination is rejected.
    ///
    /// The destination may be a plain date (`YYYY-MM-DD`) or a full
    /// timestamp, of which only the calendar day is kept.
    pub fn from_payload(
        source_event_id: &str,
        destination: Option<&str>,
        target_column_index: Option<usize>,
    ) -> AppResult<Option<Self>> {
        let Some(destination) = destination else {
            return Ok(None);
        };

        let source_event_id = source_event_id.trim();
        if source_event_id.is_empty() {
            return Err(AppError::InvalidDropPayload(
                "missing source event id".to_string(),
            ));
        }

        let target = parse_date_or_datetime(destination)
            .ok_or_else(|| AppError::InvalidDate(destination.to_string()))?;

        Ok(Some(Self {
            source_event_id: source_event_id.to_string(),
            target_date: target.date(),
            target_column_index,
        }))
    }
}
