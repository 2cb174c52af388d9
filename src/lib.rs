//! Attention depletion and recovery simulation.
//!
//! Models a person's attention level as it drains across a sequence of
//! tasks and recovers through meditation and breathing, and produces the
//! resulting time series for charting and reporting.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `CompositeTask`, `BasicTask`,
//!   `RecoveryInterval`, `MeditationPlan`, `EnneagramType`, output records
//! - **`simulation`**: The sequential-schedule and priority-sampling
//!   engines, plus run summaries
//! - **`sampling`**: Weighted candidate selection behind an injectable
//!   sampler
//! - **`scenario`**: Engine inputs and the modify operations between runs
//! - **`series`**: Chart feeds (attention/fatigue lines, spans, step curve)
//! - **`templates`**: Sixteen named task sets
//! - **`input`**: Pure parse-and-range checks and a re-prompt loop
//! - **`validation`**: Optional pre-run scenario checks
//! - **`config`**: Engine constants, loadable from TOML
//!
//! # Architecture
//!
//! The engines are pure functions of a scenario, a configuration, and
//! (for the priority engine) a random source. Prompting, template menus
//! and rendering sit outside and talk to the core through plain data.

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod sampling;
pub mod scenario;
pub mod series;
pub mod simulation;
pub mod templates;
pub mod validation;
