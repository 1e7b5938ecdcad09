use anyhow::Result;
use once_cell::sync::Lazy;
use prometheus::{
    Encoder, Histogram, IntCounterVec, TextEncoder, opts, register_histogram,
    register_int_counter_vec,
};

/// Contact submissions by outcome ("accepted" or a rejection label)
pub static CONTACT_SUBMISSIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        opts!(
            "contact_submissions_total",
            "Total number of contact form submissions by outcome"
        ),
        &["outcome"]
    )
    .unwrap()
});

pub static CONTACT_DISPATCH_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "contact_dispatch_duration_seconds",
        "Time spent handing contact emails to the email provider"
    )
    .unwrap()
});

pub fn record_outcome(outcome: &str) {
    CONTACT_SUBMISSIONS_TOTAL.with_label_values(&[outcome]).inc();
}

pub fn gather_metrics() -> Result<String> {
    let mut buffer = vec![];
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder.encode(&metric_families, &mut buffer)?;

    Ok(String::from_utf8(buffer)?)
}
