// Landing page sections
// Developed by the ATH Creative Studio team (c)2025

mod audit_form;
mod capability_ticker;
mod console_banner;
mod footer;
mod header;
mod hero;
mod problem_solution;
mod service_discovery;
mod stats;

pub use audit_form::AuditForm;
pub use capability_ticker::CapabilityTicker;
pub use console_banner::ConsoleBanner;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use problem_solution::ProblemSolution;
pub use service_discovery::ServiceDiscovery;
pub use stats::StatsStrip;
