mod central;
mod metrics;
mod top;

pub use central::central_panel;
pub use metrics::metrics_panel;
pub use top::top_panel;
pub use top::TITLE;
