//! Thaw-cycle inventory quantities and the six-stage handling schedule
//!
//! Frozen product moves through three two-day phases before it can be sold:
//! withdrawal from cold storage, thawing, and availability. Quantities are
//! grossed up by the weight lost during processing, so the sellable amount
//! after thawing matches forecasted demand.

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Fraction of mass lost to thawing when the caller supplies none
pub const DEFAULT_WEIGHT_LOSS_FACTOR: f64 = 0.15;

/// Days per handling phase
const DAYS_PER_PHASE: usize = 2;

/// A phase of the physical handling pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessStage {
    /// Removal from cold storage
    Withdrawal,
    /// Controlled thawing
    Thawing,
    /// Ready to sell
    Available,
}

/// Progress marker for a schedule entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    /// Already carried out
    Completed,
    /// Happening today
    Current,
    /// Still ahead
    Pending,
}

/// Inventory quantities for one product on one reference date.
///
/// Replaced wholesale whenever a new forecast is generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InventoryControlState {
    /// Quantity to pull from cold storage today, sized for demand two days out
    pub withdraw_today_kg: f64,
    /// Quantity currently thawing, sized for tomorrow's demand
    pub in_thaw_kg: f64,
    /// Quantity ready to sell today
    pub available_today_kg: f64,
    /// Weight-loss factor the quantities were grossed up with
    pub weight_loss_factor: f64,
}

/// One entry of the six-day handling timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStage {
    /// Day within the cycle, 1 through 6
    pub day: u8,
    /// Handling phase active on that day
    pub stage: ProcessStage,
    /// Quantity moving through the phase, in kilograms
    pub amount_kg: f64,
    /// Progress marker; day 1 is current, later days pending
    pub status: StageStatus,
}

/// Derives staged inventory quantities from forecasted demand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryScheduler {
    weight_loss_factor: f64,
}

impl Default for InventoryScheduler {
    fn default() -> Self {
        Self {
            weight_loss_factor: DEFAULT_WEIGHT_LOSS_FACTOR,
        }
    }
}

impl InventoryScheduler {
    /// Create a scheduler with the given weight-loss factor.
    ///
    /// The factor must lie in `[0, 1)`: it is used as the divisor `1 -
    /// factor`, so a factor of 1 has no meaningful gross-up.
    pub fn new(weight_loss_factor: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&weight_loss_factor) {
            return Err(ForecastError::InvalidParameter(format!(
                "Weight-loss factor must be in [0, 1), got {}",
                weight_loss_factor
            )));
        }

        Ok(Self { weight_loss_factor })
    }

    /// The configured weight-loss factor
    pub fn weight_loss_factor(&self) -> f64 {
        self.weight_loss_factor
    }

    /// Raw quantity needed so that `net_kg` remains after processing loss
    fn gross_up(&self, net_kg: f64) -> f64 {
        net_kg / (1.0 - self.weight_loss_factor)
    }

    /// Compute today's control quantities from the forecasted demand.
    ///
    /// `forecast_mean[0]` is tomorrow's demand, `forecast_mean[1]` the day
    /// after. Missing entries count as zero demand. Withdrawal is sized two
    /// days out because material pulled today only reaches the shelf after
    /// the thaw phase completes.
    pub fn control_state(
        &self,
        forecast_mean: &[f64],
        last_observed_kg: f64,
    ) -> InventoryControlState {
        let day1_kg = forecast_mean.first().copied().unwrap_or(0.0);
        let day2_kg = forecast_mean.get(1).copied().unwrap_or(0.0);

        InventoryControlState {
            withdraw_today_kg: self.gross_up(day2_kg),
            in_thaw_kg: self.gross_up(day1_kg),
            available_today_kg: self.gross_up(last_observed_kg),
            weight_loss_factor: self.weight_loss_factor,
        }
    }

    /// Build the six-stage timeline for display.
    ///
    /// Two days per phase, in process order. The first day of every phase
    /// carries today's withdrawal quantity and the second day the day-2
    /// figure; the cycle tracks a single batch rather than per-phase
    /// carry-forward amounts.
    pub fn build_schedule(
        &self,
        control: &InventoryControlState,
        forecast_mean: &[f64],
    ) -> Vec<ScheduleStage> {
        let day2_kg = self.gross_up(forecast_mean.get(1).copied().unwrap_or(0.0));
        let phases = [
            ProcessStage::Withdrawal,
            ProcessStage::Thawing,
            ProcessStage::Available,
        ];

        let mut schedule = Vec::with_capacity(phases.len() * DAYS_PER_PHASE);
        for (phase_index, &stage) in phases.iter().enumerate() {
            for offset in 0..DAYS_PER_PHASE {
                let day = (phase_index * DAYS_PER_PHASE + offset + 1) as u8;
                schedule.push(ScheduleStage {
                    day,
                    stage,
                    amount_kg: if offset == 0 {
                        control.withdraw_today_kg
                    } else {
                        day2_kg
                    },
                    status: if day == 1 {
                        StageStatus::Current
                    } else {
                        StageStatus::Pending
                    },
                });
            }
        }

        schedule
    }
}
