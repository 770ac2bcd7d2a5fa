// Progress dashboard: per-topic TechPrep progress built from quiz attempts.

pub mod dashboard;
pub mod handlers;
