// HR interview coaching: a fixed question bank and heuristic answer feedback.

pub mod feedback;
pub mod handlers;
pub mod questions;
