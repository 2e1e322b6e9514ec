//! Frozen feature schemas for the trained models.
//!
//! Column order is load-bearing: the persisted imputers, scalers and tree
//! ensembles all address features by position. The orderings below are the
//! ones the training pipeline wrote and must never be rearranged.

/// Cancellation-model feature order (also consumed by the cause model).
pub const CANCEL_FEATURES: [&str; 29] = [
    "YEAR_NORMALIZED",
    "MONTH",
    "DAY",
    "DAY_OF_WEEK",
    "SEASON",
    "MONTH_SIN",
    "MONTH_COS",
    "DAY_SIN",
    "DAY_COS",
    "AIR",
    "ORG",
    "DST",
    "CRS_DEP_TIME",
    "CRS_ARR_TIME",
    "DISTANCE",
    "DISTANCE_CATEGORY",
    "DEP_TIME_DETAILED",
    "tmin",
    "tmax",
    "prcp",
    "snow",
    "wdir",
    "wspd",
    "wpgt",
    "pres",
    "tsun",
    "WEATHER_COMPOSITE",
    "ROUTE_POPULARITY_LOG",
    "AIRLINE_RELIABILITY",
];

/// Delay-transform feature order.
///
/// The delay imputer and scaler were fit on a frame whose columns were
/// sorted by name (byte order, so uppercase names sort before lowercase
/// ones). `DEP_TIME` duplicates `CRS_DEP_TIME` and `CRS_ARR_TIME` plays no
/// role in the delay model itself; both exist only because the persisted
/// transforms expect them. See [`DELAY_MODEL_WIDTH`].
pub const DELAY_FEATURES: [&str; 19] = [
    "AIR",
    "CRS_ARR_TIME",
    "CRS_DEP_TIME",
    "DAY",
    "DEP_TIME",
    "DISTANCE",
    "DST",
    "MONTH",
    "ORG",
    "YEAR",
    "prcp",
    "pres",
    "snow",
    "tmax",
    "tmin",
    "tsun",
    "wdir",
    "wpgt",
    "wspd",
];

/// Number of transformed delay columns the delay model actually consumes.
///
/// The delay classifier was trained on the first 17 scaled columns; the
/// trailing two (`wpgt`, `wspd` positions) are dropped after the transform.
/// Inherited from the training pipeline as-is.
pub const DELAY_MODEL_WIDTH: usize = 17;

/// Engineered route-popularity stand-in.
///
/// The training data carried a per-route log-popularity; at inference time
/// no route statistics are available, so every request gets this fixed
/// high-popularity value.
pub const ROUTE_POPULARITY_LOG: f64 = 5.0;

/// Engineered airline-reliability stand-in, same situation as
/// [`ROUTE_POPULARITY_LOG`]: a fixed low historical cancellation rate.
pub const AIRLINE_RELIABILITY: f64 = 0.05;
