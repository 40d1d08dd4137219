pub mod chart_service;
pub mod normalize_service;
pub mod preview_service;
pub mod render_service;
pub mod summary_service;
