use crate::errors::PredictionError;

const MICROS_TO_SECONDS: f64 = 1e-6;

/// Fitted curve `scale / (seconds - offset) + base`
#[derive(Debug, Clone, Copy)]
struct InverseLinearCurve {
    scale: f64,
    offset: f64,
    base: f64,
}

// Calibrated offline against ranked leaderboards
const AVERAGE_TIME_CURVE: InverseLinearCurve = InverseLinearCurve {
    scale: 299.1976737976074,
    offset: 0.4035017788410187,
    base: 695.6695914268494,
};

const BEST_TIME_CURVE: InverseLinearCurve = InverseLinearCurve {
    scale: 196.40617072582245,
    offset: 0.2820969820022583,
    base: 760.9823942184498,
};

impl InverseLinearCurve {
    fn predict(&self, seconds: f64) -> Result<i64, PredictionError> {
        let divisor = seconds - self.offset;
        if divisor == 0.0 {
            return Err(PredictionError::DivisionByZero {
                offset: self.offset,
            });
        }

        // Truncates toward zero
        Ok((self.scale / divisor + self.base) as i64)
    }
}

/// Predicted rating from the average ranked completion time
pub fn average_elo(average_time_micros: f64) -> Result<i64, PredictionError> {
    AVERAGE_TIME_CURVE.predict(average_time_micros * MICROS_TO_SECONDS)
}

/// Predicted rating from the best ranked completion time
pub fn best_elo(best_time_micros: f64) -> Result<i64, PredictionError> {
    BEST_TIME_CURVE.predict(best_time_micros * MICROS_TO_SECONDS)
}
