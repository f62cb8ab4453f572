//! Shared wire types for the parser config editor.
//!
//! - `envelope`: the uniform `ResultEnvelope` returned by every service
//!   operation, plus the builders that translate backend outcomes into it.
//! - `outcome`: what a parser engine reports back (`EngineOutcome`,
//!   `ParseOutcome`, `ParseException`).
//! - `descriptor`: the sample-log descriptor used for dry-run tests.

pub mod descriptor;
pub mod envelope;
pub mod outcome;

pub use descriptor::{LogEncoding, SampleLogDescriptor};
pub use envelope::{EnvelopeAttributes, ResultEnvelope};
pub use outcome::{EngineOutcome, ParseException, ParseOutcome, ParsedMessage, StatusCode};
