//! Human-readable class labels for the classifier outputs.
//!
//! The index positions are fixed by the trained models and must not be
//! reordered. Class 4 of the cause model ("not cancelled") exists because
//! the cause classifier was trained over all flights, not just cancelled
//! ones.

/// Cancellation cause classes, indexed by model output.
pub const CANCELLATION_CAUSE_LABELS: [&str; 5] = [
    "A - Airline/Carrier",
    "B - Weather",
    "C - National Air System",
    "D - Security",
    "N - Not Cancelled",
];

/// Arrival delay severity classes, indexed by model output.
pub const DELAY_CLASS_LABELS: [&str; 4] = [
    "On time or early",
    "Slight delay (1-15 min)",
    "Moderate delay (16-30 min)",
    "Severe delay (30+ min)",
];

/// Label for a cancellation cause class, `"Unknown"` if out of range.
pub fn cancellation_cause_label(class: usize) -> &'static str {
    CANCELLATION_CAUSE_LABELS.get(class).copied().unwrap_or("Unknown")
}

/// Label for a delay severity class, `"Unknown"` if out of range.
pub fn delay_class_label(class: usize) -> &'static str {
    DELAY_CLASS_LABELS.get(class).copied().unwrap_or("Unknown")
}
