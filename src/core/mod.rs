pub mod ballistics;
pub mod chart;
pub mod error;
pub mod input;
pub mod planet;
pub mod report;
pub mod session;
pub mod window;
