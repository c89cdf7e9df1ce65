/// One timestamped error-rate measurement. The timestamp unit is whatever the
/// source query returned; it is passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: f64,
    pub value: f64,
}

/// Availability of one sample group against one threshold, stamped with the
/// timestamp of the group's last sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvailabilityPoint {
    pub timestamp: f64,
    pub value: f64,
}

/// Availability points for one threshold, in group order.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdSeries {
    pub threshold: f64,
    pub points: Vec<AvailabilityPoint>,
}
