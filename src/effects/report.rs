//! Directives emitted to the output layer.
//!
//! The engine never renders anything itself. Every user-visible outcome is
//! a [`Report`] handed to a [`Reporter`], which decides how to present it.

use crate::core::{CatalogEntry, Denomination};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use uuid::Uuid;

/// An issued ticket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub title: char,
    pub session_hour: u8,
    pub price_units: u32,
    pub issued_at: DateTime<Utc>,
}

impl Ticket {
    /// Issue a fresh ticket for `entry`.
    pub fn issue(entry: &CatalogEntry) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: entry.title,
            session_hour: entry.session_hour,
            price_units: entry.price_units,
            issued_at: Utc::now(),
        }
    }
}

/// One line-oriented status message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    CreditUpdated {
        credit: u32,
    },
    CreditReturned {
        amount: u32,
    },
    EntryShown {
        index: usize,
        entry: CatalogEntry,
        credit: u32,
    },
    TicketIssued(Ticket),
    /// Always follows `TicketIssued`.
    RemainingCredit {
        credit: u32,
    },
    NoSelectionMade,
    InsufficientCredit {
        price: u32,
        credit: u32,
    },
    CoinRejected {
        denomination: Denomination,
        credit: u32,
    },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreditUpdated { credit } => write!(f, "Current credit: {credit} EUR"),
            Self::CreditReturned { amount } => write!(f, "{amount} EUR returned"),
            Self::EntryShown { entry, credit, .. } => write!(
                f,
                "{entry} | price {} EUR | credit {credit} EUR",
                entry.price_units
            ),
            Self::TicketIssued(ticket) => write!(
                f,
                "Ticket for movie {}, session {}H00 issued! ({})",
                ticket.title, ticket.session_hour, ticket.id
            ),
            Self::RemainingCredit { credit } => write!(f, "Remaining credit: {credit} EUR"),
            Self::NoSelectionMade => write!(f, "No movie selected yet"),
            Self::InsufficientCredit { price, credit } => write!(
                f,
                "Not enough credit (price {price} EUR, credit {credit} EUR). Ticket not issued!"
            ),
            Self::CoinRejected {
                denomination,
                credit,
            } => write!(
                f,
                "Coin of {denomination} EUR rejected, credit {credit} EUR is at its limit"
            ),
        }
    }
}

/// Output boundary of the engine.
pub trait Reporter {
    fn report(&mut self, report: &Report);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, report: &Report) {
        (**self).report(report);
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&mut self, report: &Report) {
        (**self).report(report);
    }
}

/// Writes each report as one human-readable line.
#[derive(Debug)]
pub struct LineReporter<W: Write> {
    out: W,
}

impl<W: Write> LineReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for LineReporter<W> {
    fn report(&mut self, report: &Report) {
        if let Err(error) = writeln!(self.out, "{report}").and_then(|()| self.out.flush()) {
            tracing::warn!(%error, "failed to write report");
        }
    }
}

/// Writes each report as one JSON object per line.
#[derive(Debug)]
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, report: &Report) {
        let written = serde_json::to_writer(&mut self.out, report)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(self.out))
            .and_then(|()| self.out.flush());
        if let Err(error) = written {
            tracing::warn!(%error, "failed to write report");
        }
    }
}

/// Keeps every report in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingReporter {
    reports: Vec<Report>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Drain the recorded reports.
    pub fn take(&mut self) -> Vec<Report> {
        std::mem::take(&mut self.reports)
    }

    pub fn tickets(&self) -> impl Iterator<Item = &Ticket> {
        self.reports.iter().filter_map(|r| match r {
            Report::TicketIssued(ticket) => Some(ticket),
            _ => None,
        })
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, report: &Report) {
        self.reports.push(report.clone());
    }
}
