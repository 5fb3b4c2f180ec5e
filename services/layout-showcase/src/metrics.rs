//! Prometheus counters for the showcase.

use metrics::counter;

/// Record a completed composition; `with_wms` is false when degraded.
pub fn record_composition(with_wms: bool) {
    counter!("map_layout_compositions_total").increment(1);
    if !with_wms {
        counter!("map_layout_degraded_total").increment(1);
    }
}

pub fn record_composition_failure() {
    counter!("map_layout_failures_total").increment(1);
}

pub fn record_plot_request() {
    counter!("plot_requests_total").increment(1);
}
