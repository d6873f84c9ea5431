//! Advisory Portal - Client lifecycle status for a tax-advisory practice.
//!
//! Derives where each client stands in onboarding (agreement, payment,
//! documents, strategy) from their tasks, documents and payments, and serves
//! that status to the admin, compliance, strategist and client dashboards.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
