pub mod accounts;
pub mod ai;
pub mod compliance;
pub mod dashboard;
pub mod finops;
pub mod guardrails;
pub mod security;
pub mod system;
