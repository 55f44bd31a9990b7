mod builder;
mod render;
pub mod views;

pub use builder::{CertificationReport, ReportInput, DEFAULT_ISSUER};
pub use render::{render_text, write_csv};
