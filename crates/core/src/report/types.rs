//! Monthly and quarterly report lifecycle types.
//!
//! The persistence layer owns report storage and mutability; these types
//! carry the lifecycle rules it must apply. The aggregation and declaration
//! logic is status-agnostic and operates identically regardless of report
//! status.

use iftatax_shared::types::{CompanyId, QuarterlyReportId, ReportId, VehicleId};
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use crate::period::{Quarter, YearMonth};
use crate::rollup::MilesGallons;

/// Report status in the filing lifecycle.
///
/// Transitions are strictly forward:
/// - InProgress -> Sent (submit)
/// - Sent -> Completed (accepted by the tax authority)
/// - Sent -> Rejected (returned by the tax authority)
///
/// Backward transitions are rejected; the source system tolerated them, but
/// that was a schema gap, not intended behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Report is being assembled and can still change.
    InProgress,
    /// Report has been submitted and awaits a decision.
    Sent,
    /// Report was accepted (terminal).
    Completed,
    /// Report was rejected (terminal).
    Rejected,
}

impl ReportStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Sent => "sent",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in_progress" => Some(Self::InProgress),
            "sent" => Some(Self::Sent),
            "completed" => Some(Self::Completed),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns true if the report can still be modified.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Returns true if no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }

    /// Returns true if `next` is a valid forward transition from `self`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::InProgress, Self::Sent)
                | (Self::Sent, Self::Completed)
                | (Self::Sent, Self::Rejected)
        )
    }

    /// Performs a transition, enforcing monotonicity.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidTransition` for any transition that is
    /// not strictly forward, including self-transitions.
    pub fn transition_to(self, next: Self) -> Result<Self, ReportError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(ReportError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A per-vehicle monthly report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Unique identifier.
    pub id: ReportId,
    /// Vehicle this report covers.
    pub vehicle_id: VehicleId,
    /// Month this report covers.
    pub month: YearMonth,
    /// Current lifecycle status.
    pub status: ReportStatus,
    /// Quarterly report this monthly report belongs to. Optional while in
    /// progress; required once submitted.
    pub quarterly_report_id: Option<QuarterlyReportId>,
    /// Cached display totals; authoritative values are always recomputed
    /// from trip records.
    pub totals: MilesGallons,
}

impl MonthlyReport {
    /// Submits the report into a quarterly report.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidTransition` unless the report is
    /// currently `in_progress`.
    pub fn submit(&mut self, quarterly_report_id: QuarterlyReportId) -> Result<(), ReportError> {
        self.status = self.status.transition_to(ReportStatus::Sent)?;
        self.quarterly_report_id = Some(quarterly_report_id);
        Ok(())
    }

    /// Checks the linkage invariant: a report past `in_progress` must
    /// belong to a quarterly report.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NotLinkedToQuarter` when violated.
    pub fn validate_linkage(&self) -> Result<(), ReportError> {
        if self.status == ReportStatus::InProgress || self.quarterly_report_id.is_some() {
            Ok(())
        } else {
            Err(ReportError::NotLinkedToQuarter)
        }
    }
}

/// Identity of a quarterly report; unique per (company, quarter, year).
///
/// The persistence layer enforces uniqueness on this key at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuarterKey {
    /// Owning company.
    pub company_id: CompanyId,
    /// Reporting quarter.
    pub quarter: Quarter,
    /// Reporting year.
    pub year: i32,
}

/// A company-wide quarterly report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterlyReport {
    /// Unique identifier.
    pub id: QuarterlyReportId,
    /// Owning company.
    pub company_id: CompanyId,
    /// Reporting quarter.
    pub quarter: Quarter,
    /// Reporting year.
    pub year: i32,
    /// Current lifecycle status.
    pub status: ReportStatus,
    /// Constituent monthly reports.
    pub report_ids: Vec<ReportId>,
}

impl QuarterlyReport {
    /// Returns the uniqueness key for this report.
    #[must_use]
    pub const fn key(&self) -> QuarterKey {
        QuarterKey {
            company_id: self.company_id,
            quarter: self.quarter,
            year: self.year,
        }
    }
}
