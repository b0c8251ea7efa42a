//! Domain rejections raised by the kiosk engine.

use crate::core::event::Denomination;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Expected, recoverable conditions.
///
/// None of these are fatal: each is reported to the user and absorbed
/// without changing the session.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum KioskError {
    #[error("No movie selected yet")]
    NoSelectionMade,

    #[error("Not enough credit: price {price}, credit {credit}")]
    InsufficientCredit { price: u32, credit: u32 },

    #[error("Coin of {denomination} rejected: credit {credit} is at its limit")]
    CreditOverflow {
        credit: u32,
        denomination: Denomination,
    },
}
